//! Fixed-size ordered card deck.

use std::fmt;

use crate::error::SliderError;

/// Opaque card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card {}", self.0)
    }
}

/// Ordered cards shown one at a time. Never empty; length is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Box<[CardId]>,
}

impl Deck {
    pub fn new(cards: Vec<CardId>) -> Result<Self, SliderError> {
        if cards.is_empty() {
            return Err(SliderError::EmptyDeck);
        }
        Ok(Self {
            cards: cards.into_boxed_slice(),
        })
    }

    /// Deck of `count` cards numbered from 1, like the `01.png`.. artwork.
    pub fn with_len(count: usize) -> Result<Self, SliderError> {
        Self::new((1..=count).map(|n| CardId::new(n as u32)).collect())
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cards.len()
    }

    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(Vec::new()), Err(SliderError::EmptyDeck));
        assert_eq!(Deck::with_len(0), Err(SliderError::EmptyDeck));
    }

    #[test]
    fn numbered_deck_starts_at_one() {
        let deck = Deck::with_len(14).unwrap();
        assert_eq!(deck.len(), 14);
        assert_eq!(deck.last_index(), 13);
        assert_eq!(deck.get(0), Some(CardId::new(1)));
        assert_eq!(deck.get(13), Some(CardId::new(14)));
        assert_eq!(deck.get(14), None);
    }

    #[test]
    fn index_bounds() {
        let deck = Deck::new(vec![CardId::new(7), CardId::new(3)]).unwrap();
        assert!(deck.contains_index(1));
        assert!(!deck.contains_index(2));
        assert_eq!(deck.cards(), &[CardId::new(7), CardId::new(3)]);
    }
}

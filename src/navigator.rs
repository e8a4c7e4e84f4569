//! Deck navigation: bounds-checked index moves.
//!
//! The navigator only does index arithmetic. Every successful move returns an
//! [`IndexChange`]; the slider turns that into exactly one render call and one
//! clock directive.

use crate::deck::Deck;
use crate::render::IndexChange;

#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    last: usize,
}

impl Navigator {
    pub fn new(deck: &Deck) -> Self {
        Self {
            current: 0,
            last: deck.last_index(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn last_index(&self) -> usize {
        self.last
    }

    pub fn is_at_end(&self) -> bool {
        self.current == self.last
    }

    /// Autoplay may run on every card but the last.
    pub fn is_autoplay_eligible(&self) -> bool {
        !self.is_at_end()
    }

    pub fn next(&mut self) -> Option<IndexChange> {
        if self.current >= self.last {
            return None;
        }
        Some(self.move_to(self.current + 1))
    }

    pub fn previous(&mut self) -> Option<IndexChange> {
        if self.current == 0 {
            return None;
        }
        Some(self.move_to(self.current - 1))
    }

    pub fn go_to(&mut self, index: usize) -> Option<IndexChange> {
        if index > self.last || index == self.current {
            return None;
        }
        Some(self.move_to(index))
    }

    fn move_to(&mut self, index: usize) -> IndexChange {
        let prior = self.current;
        self.current = index;
        IndexChange {
            current: index,
            prior: Some(prior),
        }
    }
}

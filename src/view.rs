//! View-model helpers shared by renderers.

/// Where a card sits relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPlacement {
    Left,
    Center,
    Right,
    Hidden,
}

pub fn card_placement(card: usize, current: usize) -> CardPlacement {
    if card == current {
        CardPlacement::Center
    } else if card + 1 == current {
        CardPlacement::Left
    } else if card == current + 1 {
        CardPlacement::Right
    } else {
        CardPlacement::Hidden
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentState {
    Completed,
    Active,
    Upcoming,
}

pub fn segment_state(segment: usize, current: usize) -> SegmentState {
    match segment.cmp(&current) {
        std::cmp::Ordering::Less => SegmentState::Completed,
        std::cmp::Ordering::Equal => SegmentState::Active,
        std::cmp::Ordering::Greater => SegmentState::Upcoming,
    }
}

/// How much of a progress segment to fill, given the active card's fraction.
pub fn segment_fill(segment: usize, current: usize, fraction: f64) -> f64 {
    match segment_state(segment, current) {
        SegmentState::Completed => 1.0,
        SegmentState::Active => fraction.clamp(0.0, 1.0),
        SegmentState::Upcoming => 0.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

pub fn nav_buttons(current: usize, deck_len: usize) -> NavButtons {
    NavButtons {
        previous_enabled: current > 0,
        next_enabled: current + 1 < deck_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_around_current() {
        let placements: Vec<_> = (0..5).map(|card| card_placement(card, 2)).collect();
        assert_eq!(
            placements,
            vec![
                CardPlacement::Hidden,
                CardPlacement::Left,
                CardPlacement::Center,
                CardPlacement::Right,
                CardPlacement::Hidden,
            ]
        );
        assert_eq!(card_placement(0, 0), CardPlacement::Center);
    }

    #[test]
    fn segments_fill_up_to_current() {
        assert_eq!(segment_state(0, 1), SegmentState::Completed);
        assert_eq!(segment_state(1, 1), SegmentState::Active);
        assert_eq!(segment_state(2, 1), SegmentState::Upcoming);
        assert_eq!(segment_fill(0, 1, 0.3), 1.0);
        assert_eq!(segment_fill(1, 1, 0.3), 0.3);
        assert_eq!(segment_fill(2, 1, 0.3), 0.0);
    }

    #[test]
    fn buttons_disable_at_edges() {
        assert_eq!(
            nav_buttons(0, 14),
            NavButtons {
                previous_enabled: false,
                next_enabled: true
            }
        );
        assert_eq!(
            nav_buttons(13, 14),
            NavButtons {
                previous_enabled: true,
                next_enabled: false
            }
        );
    }
}

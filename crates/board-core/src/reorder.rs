//! Reorder Engine
//!
//! Insertion point of a dragged card: the nearest card whose vertical
//! midpoint is still below the pointer.

/// Vertical extent of a card on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub id: u32,
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(id: u32, top: f64, height: f64) -> Self {
        Self { id, top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Card the dragged one should be inserted before, `None` for the end.
///
/// `candidates` are all cards except the dragged one, in display order.
/// Among cards whose midpoint lies below `cursor_y` the one closest to the
/// pointer wins; on a tie the earlier card is kept.
pub fn insertion_point(cursor_y: f64, candidates: &[CardBounds]) -> Option<&CardBounds> {
    let mut best_offset = f64::NEG_INFINITY;
    let mut best = None;
    for card in candidates {
        let offset = cursor_y - card.midpoint();
        if offset < 0.0 && offset > best_offset {
            best_offset = offset;
            best = Some(card);
        }
    }
    best
}

/// Drag gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { source: u32 },
}

impl DragState {
    pub fn source(&self) -> Option<u32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source } => Some(*source),
        }
    }

    pub fn is_dragging(&self, id: u32) -> bool {
        self.source() == Some(id)
    }

    /// dragstart
    pub fn start(&mut self, source: u32) {
        *self = DragState::Dragging { source };
    }

    /// dragend, including a drop outside any target.
    /// Returns the card that was being dragged.
    pub fn end(&mut self) -> Option<u32> {
        std::mem::take(self).source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn column() -> Vec<CardBounds> {
        // Midpoints at 50, 150, 250
        vec![
            CardBounds::new(1, 0.0, 100.0),
            CardBounds::new(2, 100.0, 100.0),
            CardBounds::new(3, 200.0, 100.0),
        ]
    }

    #[test]
    fn test_insertion_point_nearest_below() {
        let cards = column();
        assert_eq!(insertion_point(10.0, &cards).map(|c| c.id), Some(1));
        assert_eq!(insertion_point(60.0, &cards).map(|c| c.id), Some(2));
        assert_eq!(insertion_point(149.0, &cards).map(|c| c.id), Some(2));
        assert_eq!(insertion_point(200.0, &cards).map(|c| c.id), Some(3));
    }

    #[test]
    fn test_insertion_point_on_midpoint_skips_card() {
        let cards = column();
        assert_eq!(insertion_point(150.0, &cards).map(|c| c.id), Some(3));
    }

    #[test]
    fn test_insertion_point_below_all_is_end() {
        let cards = column();
        assert_eq!(insertion_point(250.0, &cards), None);
        assert_eq!(insertion_point(900.0, &cards), None);
        assert_eq!(insertion_point(0.0, &[]), None);
    }

    #[test]
    fn test_insertion_point_tie_keeps_first() {
        let cards = vec![CardBounds::new(7, 100.0, 50.0), CardBounds::new(8, 100.0, 50.0)];
        assert_eq!(insertion_point(0.0, &cards).map(|c| c.id), Some(7));
    }

    #[test]
    fn test_drag_state_machine() {
        let mut state = DragState::default();
        assert_eq!(state.source(), None);

        state.start(4);
        assert!(state.is_dragging(4));
        assert!(!state.is_dragging(5));

        assert_eq!(state.end(), Some(4));
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.end(), None);
    }

    proptest! {
        #[test]
        fn prop_insertion_point_is_pure(
            cursor in -100.0f64..1000.0,
            tops in proptest::collection::vec(0.0f64..900.0, 0..10),
        ) {
            let cards: Vec<_> = tops
                .iter()
                .enumerate()
                .map(|(i, &top)| CardBounds::new(i as u32 + 1, top, 40.0))
                .collect();

            let first = insertion_point(cursor, &cards).copied();
            let second = insertion_point(cursor, &cards).copied();
            prop_assert_eq!(first, second);

            match first {
                Some(card) => {
                    prop_assert!(card.midpoint() > cursor);
                    prop_assert!(cards.iter().all(|c| c.midpoint() <= cursor || c.midpoint() >= card.midpoint()));
                }
                None => prop_assert!(cards.iter().all(|c| c.midpoint() <= cursor)),
            }
        }
    }
}

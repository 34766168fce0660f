use egui::{Pos2, Rect};

/// Which side of the hovered item the dragged item should land on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Before,
    After,
}

impl Side {
    /// Side of `card_rect` the pointer is on. Cards in a grid flow left to right, so only the
    /// horizontal position matters: left of the centre is [`Side::Before`], anything else is
    /// [`Side::After`].
    pub fn from_pointer(card_rect: Rect, pointer: Pos2) -> Self {
        if pointer.x < card_rect.center().x {
            Side::Before
        } else {
            Side::After
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Side::Before => Side::After,
            Side::After => Side::Before,
        }
    }
}

/// Computes where the dragged item has to be inserted so that it ends up next to the hovered item
/// on the requested `side`.
///
/// The returned index refers to the list *after* the dragged item was removed from
/// `dragged_idx`, so it can be passed straight to [`move_item`](crate::utils::move_item).
/// Removing an earlier item shifts every later index down by one, which is why hovering further
/// down the list resolves one slot lower than hovering further up.
///
/// Both indices are expected to be valid for the current list; nothing is checked here. Hovering
/// the dragged item itself (`hovered_idx == dragged_idx`) is handled like hovering an earlier item.
pub fn resolve_drop_index(dragged_idx: usize, hovered_idx: usize, side: Side) -> usize {
    let target = if hovered_idx > dragged_idx {
        match side {
            Side::After => hovered_idx,
            Side::Before => hovered_idx - 1,
        }
    } else {
        match side {
            Side::After => hovered_idx + 1,
            Side::Before => hovered_idx,
        }
    };
    tracing::trace!(dragged_idx, hovered_idx, ?side, target, "resolved drop index");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::move_item;
    use egui::pos2;

    fn letters() -> Vec<char> {
        "ABCDEFGH".chars().collect()
    }

    fn reorder(dragged: usize, hovered: usize, side: Side) -> (usize, Vec<char>) {
        let mut list = letters();
        let target = resolve_drop_index(dragged, hovered, side);
        assert!(move_item(&mut list, dragged, target));
        (target, list)
    }

    #[test]
    fn forward_after_lands_behind_hovered() {
        let (target, list) = reorder(0, 2, Side::After);
        assert_eq!(target, 2);
        assert_eq!(list, "BCADEFGH".chars().collect::<Vec<_>>());
    }

    #[test]
    fn forward_before_lands_in_front_of_hovered() {
        let (target, list) = reorder(0, 2, Side::Before);
        assert_eq!(target, 1);
        assert_eq!(list, "BACDEFGH".chars().collect::<Vec<_>>());
    }

    #[test]
    fn after_last_item_appends() {
        let (target, list) = reorder(5, 7, Side::After);
        assert_eq!(target, 7);
        assert_eq!(list, "ABCDEGHF".chars().collect::<Vec<_>>());
    }

    #[test]
    fn backward_before() {
        let (target, list) = reorder(3, 1, Side::Before);
        assert_eq!(target, 1);
        assert_eq!(list, "ADBCEFGH".chars().collect::<Vec<_>>());
    }

    #[test]
    fn backward_after() {
        let (target, list) = reorder(4, 2, Side::After);
        assert_eq!(target, 3);
        assert_eq!(list, "ABCEDFGH".chars().collect::<Vec<_>>());
    }

    #[test]
    fn hovering_own_slot() {
        assert_eq!(resolve_drop_index(3, 3, Side::Before), 3);
        assert_eq!(resolve_drop_index(3, 3, Side::After), 4);

        // before itself puts the item back where it was
        let (_, list) = reorder(3, 3, Side::Before);
        assert_eq!(list, letters());
    }

    #[test]
    fn side_from_pointer_uses_horizontal_centre() {
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(110.0, 60.0));
        assert_eq!(Side::from_pointer(rect, pos2(20.0, 55.0)), Side::Before);
        assert_eq!(Side::from_pointer(rect, pos2(59.9, 12.0)), Side::Before);
        assert_eq!(Side::from_pointer(rect, pos2(60.0, 12.0)), Side::After);
        assert_eq!(Side::from_pointer(rect, pos2(200.0, 30.0)), Side::After);
    }

    #[test]
    fn flipped_round_trips() {
        assert_eq!(Side::Before.flipped(), Side::After);
        assert_eq!(Side::After.flipped().flipped(), Side::After);
    }
}

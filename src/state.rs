use egui::Id;
use std::hash::Hash;
use thiserror::Error;

use crate::resolve::{resolve_drop_index, Side};

pub trait DragDropItem {
    fn id(&self) -> Id;
}

impl<T: Hash> DragDropItem for T {
    fn id(&self) -> Id {
        Id::new(self)
    }
}

/// Errors returned by [`DragSession`] transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DragError {
    #[error("a drag is already in progress for {0:?}")]
    AlreadyDragging(Id),

    #[error("no drag in progress")]
    NotDragging,

    /// The item was removed from the list while the drag was in progress.
    #[error("item {0:?} is no longer in the list")]
    StaleItem(Id),
}

/// A reorder produced by a drop. `from` is the dragged item's index in the list before the drop,
/// `to` the index it has to be inserted at once it was removed (see
/// [`resolve_drop_index`]). Both are only valid for the list the drop was resolved against;
/// `hovered` and `side` allow resolving again if the list changed since.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub item: Id,
    pub hovered: Id,
    pub side: Side,
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was hovered when the item was dropped.
    Cancelled,
    Reorder(Reorder),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: Id,
    },
    Hovering {
        dragged: Id,
        hovered: Id,
        side: Side,
    },
}

/// [DragSession] tracks a single drag gesture from pick up to drop.
///
/// Items are tracked by their [`DragDropItem::id`] only. Indices are looked up in the list passed
/// to [`DragSession::preview`] or [`DragSession::drop`], so a list that changed while the drag was
/// in progress (items added, removed or resized) still resolves against the current positions.
///
/// Entering the same item twice in a row flips the side the dragged item would land on, which is
/// how the user gets an item back into its original slot.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn dragged(&self) -> Option<Id> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { dragged } | DragState::Hovering { dragged, .. } => Some(dragged),
        }
    }

    /// The hovered item and the side the dragged item would land on.
    pub fn hovered(&self) -> Option<(Id, Side)> {
        match self.state {
            DragState::Hovering { hovered, side, .. } => Some((hovered, side)),
            _ => None,
        }
    }

    pub fn start(&mut self, dragged: Id) -> Result<(), DragError> {
        if let Some(current) = self.dragged() {
            return Err(DragError::AlreadyDragging(current));
        }
        tracing::debug!(?dragged, "drag started");
        self.state = DragState::Dragging { dragged };
        Ok(())
    }

    /// The pointer entered `hovered`. Entering the item that is already hovered flips the side,
    /// any other item starts out on [`Side::Before`].
    pub fn enter(&mut self, hovered: Id) -> Result<Side, DragError> {
        let side = match self.state {
            DragState::Idle => return Err(DragError::NotDragging),
            DragState::Hovering {
                hovered: current,
                side,
                ..
            } if current == hovered => side.flipped(),
            _ => Side::Before,
        };
        self.hover(hovered, side)?;
        Ok(side)
    }

    /// Hover `hovered` with an explicit side, e.g. one from [`Side::from_pointer`].
    pub fn hover(&mut self, hovered: Id, side: Side) -> Result<(), DragError> {
        let dragged = self.dragged().ok_or(DragError::NotDragging)?;
        if self.hovered() != Some((hovered, side)) {
            tracing::debug!(?hovered, ?side, "hover target changed");
        }
        self.state = DragState::Hovering {
            dragged,
            hovered,
            side,
        };
        Ok(())
    }

    /// The pointer left the hovered item without entering another one.
    pub fn leave(&mut self) {
        if let DragState::Hovering { dragged, .. } = self.state {
            self.state = DragState::Dragging { dragged };
        }
    }

    /// The reorder a drop would produce right now, for drawing a drop indicator. `None` if nothing
    /// is hovered or an item is missing from `items`.
    pub fn preview<'a, T: DragDropItem + 'a>(
        &self,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Option<Reorder> {
        match self.state {
            DragState::Hovering {
                dragged,
                hovered,
                side,
            } => Self::resolve(items, dragged, hovered, side).ok(),
            _ => None,
        }
    }

    /// Ends the drag. Both the dragged and the hovered item are looked up in `items`, so pass the
    /// list as it is at the time of the drop. The session is idle afterwards, also on error.
    pub fn drop<'a, T: DragDropItem + 'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Result<DropOutcome, DragError> {
        let state = std::mem::take(&mut self.state);
        match state {
            DragState::Idle => Err(DragError::NotDragging),
            DragState::Dragging { dragged } => {
                tracing::debug!(?dragged, "dropped without a target");
                Ok(DropOutcome::Cancelled)
            }
            DragState::Hovering {
                dragged,
                hovered,
                side,
            } => {
                let reorder = Self::resolve(items, dragged, hovered, side).map_err(|err| {
                    tracing::warn!(%err, "drop refers to a stale item");
                    err
                })?;
                tracing::debug!(?reorder, "dropped");
                Ok(DropOutcome::Reorder(reorder))
            }
        }
    }

    /// Ends the drag on a remove target. Returns the dragged item for the caller to remove.
    pub fn drop_on_trash(&mut self) -> Result<Id, DragError> {
        let dragged = self.dragged().ok_or(DragError::NotDragging)?;
        self.state = DragState::Idle;
        tracing::debug!(?dragged, "dropped on trash");
        Ok(dragged)
    }

    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    fn resolve<'a, T: DragDropItem + 'a>(
        items: impl IntoIterator<Item = &'a T>,
        dragged: Id,
        hovered: Id,
        side: Side,
    ) -> Result<Reorder, DragError> {
        let mut dragged_idx = None;
        let mut hovered_idx = None;
        for (idx, item) in items.into_iter().enumerate() {
            let id = item.id();
            if id == dragged {
                dragged_idx = Some(idx);
            }
            if id == hovered {
                hovered_idx = Some(idx);
            }
        }
        let from = dragged_idx.ok_or(DragError::StaleItem(dragged))?;
        let hovered_idx = hovered_idx.ok_or(DragError::StaleItem(hovered))?;

        Ok(Reorder {
            item: dragged,
            hovered,
            side,
            from,
            to: resolve_drop_index(from, hovered_idx, side),
        })
    }
}

use egui::Id;
use thiserror::Error;

use crate::config::GridConfig;
use crate::resolve::resolve_drop_index;
use crate::state::{DragDropItem, Reorder};
use crate::utils::move_item;

/// Errors returned by [`Grid`] mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// No card with this id is in the grid.
    #[error("no card with id {0}")]
    UnknownCard(CardId),

    /// A reorder referenced an item identity that is no longer in the grid.
    #[error("no card with item id {0:?}")]
    UnknownItem(Id),

    #[error("position {position} is out of range for a grid of {len} cards")]
    PositionOutOfRange { position: usize, len: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardSize {
    #[default]
    Small,
    Big,
}

impl CardSize {
    pub fn toggled(self) -> Self {
        match self {
            CardSize::Small => CardSize::Big,
            CardSize::Big => CardSize::Small,
        }
    }
}

/// Stable identity of a card. Survives reorders, resizes and renames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u64);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// Hands out unique [`CardId`]s. Each [`Grid`] owns one, so ids are unique per grid.
#[derive(Clone, Debug, Default)]
pub struct CardIdGenerator {
    next: u64,
}

impl CardIdGenerator {
    pub fn next_id(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub size: CardSize,
}

// identity only, so resizing or renaming a card mid-drag doesn't lose track of it
impl DragDropItem for Card {
    fn id(&self) -> Id {
        Id::new(self.id)
    }
}

/// Ordered store of cards. Order is the only thing drag & drop changes.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cards: Vec<Card>,
    ids: CardIdGenerator,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid of `config.initial_items` cards with random sizes and names drawn from
    /// `rng`. Seed the rng for a reproducible layout.
    pub fn from_config(config: &GridConfig, rng: &mut fastrand::Rng) -> Self {
        let mut grid = Self::new();
        for idx in 0..config.initial_items {
            let size = config.pick_size(rng);
            let name = config.pick_name(rng, idx);
            let id = grid.ids.next_id();
            grid.cards.push(Card { id, name, size });
        }
        tracing::debug!(cards = grid.cards.len(), "generated grid");
        grid
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Index of the card whose drag & drop identity is `item`.
    pub fn index_of_item(&self, item: Id) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == item)
    }

    /// Inserts a new card at `position`, shifting later cards back. Positions past the end append.
    pub fn add(&mut self, size: CardSize, name: impl Into<String>, position: usize) -> CardId {
        let position = position.min(self.cards.len());
        let id = self.ids.next_id();
        self.cards.insert(
            position,
            Card {
                id,
                name: name.into(),
                size,
            },
        );
        tracing::debug!(%id, position, ?size, "added card");
        id
    }

    pub fn remove(&mut self, id: CardId) -> Result<Card, GridError> {
        let idx = self.index_of(id).ok_or(GridError::UnknownCard(id))?;
        tracing::debug!(%id, idx, "removed card");
        Ok(self.cards.remove(idx))
    }

    /// Removes the card with drag & drop identity `item`, e.g. after it was dropped on a trash
    /// target.
    pub fn remove_item(&mut self, item: Id) -> Result<Card, GridError> {
        let idx = self.index_of_item(item).ok_or(GridError::UnknownItem(item))?;
        let card = self.cards.remove(idx);
        tracing::debug!(id = %card.id, idx, "removed card");
        Ok(card)
    }

    /// Switches the card between small and big and returns the new size.
    pub fn toggle_size(&mut self, id: CardId) -> Result<CardSize, GridError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(GridError::UnknownCard(id))?;
        card.size = card.size.toggled();
        tracing::debug!(%id, size = ?card.size, "toggled card size");
        Ok(card.size)
    }

    /// Moves the card at `from` to `to`, where `to` is an index into the grid with the card
    /// already taken out.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), GridError> {
        let len = self.cards.len();
        if from >= len {
            return Err(GridError::PositionOutOfRange { position: from, len });
        }
        if !move_item(&mut self.cards, from, to) {
            return Err(GridError::PositionOutOfRange { position: to, len });
        }
        tracing::debug!(from, to, "moved card");
        Ok(())
    }

    /// Applies a completed drop. Both the dragged and the hovered card are looked up by identity
    /// again and the destination is resolved anew, so cards added or removed since the drop don't
    /// shift the result. Dropping a card on its own slot never moves it past the end.
    pub fn apply(&mut self, reorder: &Reorder) -> Result<(), GridError> {
        let from = self
            .index_of_item(reorder.item)
            .ok_or(GridError::UnknownItem(reorder.item))?;
        let hovered = self
            .index_of_item(reorder.hovered)
            .ok_or(GridError::UnknownItem(reorder.hovered))?;
        if from != reorder.from {
            tracing::debug!(
                resolved = reorder.from,
                current = from,
                "dragged card moved since the drop was resolved"
            );
        }

        let mut to = resolve_drop_index(from, hovered, reorder.side);
        if hovered == from {
            to = to.min(self.cards.len() - 1);
        }
        self.move_card(from, to)
    }
}

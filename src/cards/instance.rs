//! Physical cards in a game.
//!
//! Every copy of a card on the table has its own `CardId`, so two Coppers
//! in the same hand are distinguishable. The printed data is shared through
//! an `Rc<CardDefinition>`, which keeps `Card` cheap to clone into piles,
//! events and effect closures.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardType};

/// Unique identifier for one physical card in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card instance.
///
/// Equality is by `CardId`: two copies of the same definition are
/// different cards.
#[derive(Clone, Debug)]
pub struct Card {
    id: CardId,
    definition: Rc<CardDefinition>,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Card {
    #[must_use]
    pub fn new(id: CardId, definition: Rc<CardDefinition>) -> Self {
        Self { id, definition }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    #[must_use]
    pub fn cost(&self) -> u32 {
        self.definition.cost
    }

    #[must_use]
    pub fn money(&self) -> u32 {
        self.definition.money
    }

    #[must_use]
    pub fn victory_points(&self) -> i32 {
        self.definition.victory_points
    }

    #[must_use]
    pub fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    #[must_use]
    pub fn is_type(&self, card_type: CardType) -> bool {
        self.definition.is_type(card_type)
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.is_type(CardType::Action)
    }

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.is_type(CardType::Treasure)
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.is_type(CardType::Attack)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.definition.name, self.id)
    }
}

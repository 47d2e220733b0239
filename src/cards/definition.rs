//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed properties shared by every copy of a
//! card: name, cost, types, treasure value and victory points. Abilities
//! are not part of the definition; a card's ability text is implemented by
//! registering effects with the `EffectRegistry` when the ability becomes
//! active.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Printed card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Action,
    Attack,
    Reaction,
    Treasure,
    Victory,
    Curse,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Action => "Action",
            CardType::Attack => "Attack",
            CardType::Reaction => "Reaction",
            CardType::Treasure => "Treasure",
            CardType::Victory => "Victory",
            CardType::Curse => "Curse",
        };
        f.write_str(name)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::{CardDefinition, CardType};
///
/// let moat = CardDefinition::new("Moat", 2)
///     .with_type(CardType::Action)
///     .with_type(CardType::Reaction);
///
/// assert!(moat.is_type(CardType::Reaction));
/// assert!(!moat.is_type(CardType::Treasure));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name; unique within a `CardRegistry`.
    pub name: String,

    /// Cost in coins.
    pub cost: u32,

    /// Printed types, in printed order.
    pub types: SmallVec<[CardType; 2]>,

    /// Coins produced when played as a treasure.
    #[serde(default)]
    pub money: u32,

    /// Victory points counted at game end. Negative for curses.
    #[serde(default)]
    pub victory_points: i32,
}

impl CardDefinition {
    /// Create a definition with no types.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            types: SmallVec::new(),
            money: 0,
            victory_points: 0,
        }
    }

    /// Create a treasure card worth `money` coins.
    #[must_use]
    pub fn treasure(name: impl Into<String>, cost: u32, money: u32) -> Self {
        Self::new(name, cost)
            .with_type(CardType::Treasure)
            .with_money(money)
    }

    /// Create a victory card worth `points`.
    #[must_use]
    pub fn victory(name: impl Into<String>, cost: u32, points: i32) -> Self {
        Self::new(name, cost)
            .with_type(CardType::Victory)
            .with_victory_points(points)
    }

    /// Create an action card.
    #[must_use]
    pub fn action(name: impl Into<String>, cost: u32) -> Self {
        Self::new(name, cost).with_type(CardType::Action)
    }

    /// Add a type (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        if !self.types.contains(&card_type) {
            self.types.push(card_type);
        }
        self
    }

    /// Set the treasure value (builder pattern).
    #[must_use]
    pub fn with_money(mut self, money: u32) -> Self {
        self.money = money;
        self
    }

    /// Set the victory points (builder pattern).
    #[must_use]
    pub fn with_victory_points(mut self, points: i32) -> Self {
        self.victory_points = points;
        self
    }

    #[must_use]
    pub fn is_type(&self, card_type: CardType) -> bool {
        self.types.contains(&card_type)
    }
}

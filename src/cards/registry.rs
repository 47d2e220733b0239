//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition a game can put on the
//! table, keyed by name, and mints `Card` instances from them.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardType};
use super::instance::{Card, CardId};
use crate::core::error::{GameError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::with_basic_cards();
/// registry.register(CardDefinition::action("Village", 3));
///
/// let village = registry.instantiate("Village", CardId::new(40)).unwrap();
/// assert_eq!(village.cost(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Rc<CardDefinition>>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the basic treasure, victory and curse cards.
    #[must_use]
    pub fn with_basic_cards() -> Self {
        let mut registry = Self::new();
        registry.register(CardDefinition::treasure("Copper", 0, 1));
        registry.register(CardDefinition::treasure("Silver", 3, 2));
        registry.register(CardDefinition::treasure("Gold", 6, 3));
        registry.register(CardDefinition::victory("Estate", 2, 1));
        registry.register(CardDefinition::victory("Duchy", 5, 3));
        registry.register(CardDefinition::victory("Province", 8, 6));
        registry.register(
            CardDefinition::new("Curse", 0)
                .with_type(CardType::Curse)
                .with_victory_points(-1),
        );
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }
        self.cards.insert(card.name.clone(), Rc::new(card));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name).map(|c| c.as_ref())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Mint a physical card with the given id.
    pub fn instantiate(&self, name: &str, id: CardId) -> Result<Card> {
        self.cards
            .get(name)
            .map(|def| Card::new(id, Rc::clone(def)))
            .ok_or_else(|| GameError::UnknownCard(name.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(|c| c.as_ref())
    }
}

//! Game configuration.
//!
//! Games configure the engine at startup by providing a `GameConfig`:
//! the seed, the opening hand size and turn allowances, each player's
//! starting deck, and the supply piles on the table. Every card named here
//! must resolve in the game's `CardRegistry`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::cards::CardRegistry;

/// Copper in each starting deck.
pub const START_COPPER: usize = 7;
/// Estates in each starting deck.
pub const START_ESTATE: usize = 3;

/// A named stack of identical cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileConfig {
    /// Card name, looked up in the `CardRegistry`.
    pub card: String,
    /// Number of copies.
    pub count: usize,
}

impl PileConfig {
    pub fn new(card: impl Into<String>, count: usize) -> Self {
        Self {
            card: card.into(),
            count,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle in the game.
    pub seed: u64,

    /// Cards drawn at game start and at each cleanup.
    pub hand_size: usize,

    /// Actions granted at the start of each turn.
    pub starting_actions: u32,

    /// Buys granted at the start of each turn.
    pub starting_buys: u32,

    /// Each player's starting deck.
    pub starting_deck: Vec<PileConfig>,

    /// Supply piles, in display order.
    pub supply: Vec<PileConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            hand_size: 5,
            starting_actions: 1,
            starting_buys: 1,
            starting_deck: vec![
                PileConfig::new("Copper", START_COPPER),
                PileConfig::new("Estate", START_ESTATE),
            ],
            supply: vec![
                PileConfig::new("Copper", 46),
                PileConfig::new("Silver", 40),
                PileConfig::new("Gold", 30),
                PileConfig::new("Estate", 8),
                PileConfig::new("Duchy", 8),
                PileConfig::new("Province", 8),
                PileConfig::new("Curse", 10),
            ],
        }
    }
}

impl GameConfig {
    /// Standard configuration with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the hand size (builder pattern).
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Replace the starting deck (builder pattern).
    #[must_use]
    pub fn with_starting_deck(mut self, deck: Vec<PileConfig>) -> Self {
        self.starting_deck = deck;
        self
    }

    /// Add a supply pile, or replace the count of an existing one (builder pattern).
    #[must_use]
    pub fn with_supply_pile(mut self, card: impl Into<String>, count: usize) -> Self {
        let card = card.into();
        match self.supply.iter_mut().find(|p| p.card == card) {
            Some(pile) => pile.count = count,
            None => self.supply.push(PileConfig::new(card, count)),
        }
        self
    }

    /// Total number of cards in one starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> usize {
        self.starting_deck.iter().map(|p| p.count).sum()
    }

    /// Check the configuration against the cards the game knows about.
    pub fn validate(&self, registry: &CardRegistry) -> Result<()> {
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be at least 1".into()));
        }
        if self.starting_deck_size() == 0 {
            return Err(GameError::InvalidConfig("starting deck is empty".into()));
        }

        for pile in self.starting_deck.iter().chain(self.supply.iter()) {
            if !registry.contains(&pile.card) {
                return Err(GameError::UnknownCard(pile.card.clone()));
            }
        }

        for (i, pile) in self.supply.iter().enumerate() {
            if self.supply[..i].iter().any(|p| p.card == pile.card) {
                return Err(GameError::InvalidConfig(format!(
                    "duplicate supply pile {}",
                    pile.card
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.hand_size, 5);
        assert_eq!(config.starting_actions, 1);
        assert_eq!(config.starting_buys, 1);
        assert_eq!(config.starting_deck_size(), 10);
        assert!(config.validate(&CardRegistry::with_basic_cards()).is_ok());
    }

    #[test]
    fn test_with_supply_pile_replaces_count() {
        let config = GameConfig::new(1)
            .with_supply_pile("Province", 12)
            .with_supply_pile("Village", 10);

        let province = config.supply.iter().find(|p| p.card == "Province").unwrap();
        assert_eq!(province.count, 12);
        assert_eq!(config.supply.last().unwrap().card, "Village");
    }

    #[test]
    fn test_validate_unknown_card() {
        let config = GameConfig::new(1).with_supply_pile("Village", 10);
        let err = config.validate(&CardRegistry::with_basic_cards()).unwrap_err();
        assert_eq!(err, GameError::UnknownCard("Village".into()));
    }

    #[test]
    fn test_validate_hand_size() {
        let config = GameConfig::new(1).with_hand_size(0);
        assert!(matches!(
            config.validate(&CardRegistry::with_basic_cards()),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_duplicate_pile() {
        let mut config = GameConfig::new(1);
        config.supply.push(PileConfig::new("Gold", 5));
        assert!(matches!(
            config.validate(&CardRegistry::with_basic_cards()),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(99).with_hand_size(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

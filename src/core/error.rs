//! Error types for game operations.
//!
//! These are recoverable conditions raised by the game's collaborators
//! (supply, hand, turn bookkeeping). Effect handlers decide what to do
//! with them; the dispatch loop never inspects them.

use thiserror::Error;

use super::PlayerId;
use crate::cards::CardId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Supply pile {0} is empty")]
    EmptyPile(String),

    #[error("No supply pile named {0}")]
    PileNotFound(String),

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("{player}: not enough money to buy {card} (have {available}, need {cost})")]
    InsufficientMoney {
        player: PlayerId,
        card: String,
        available: u32,
        cost: u32,
    },

    #[error("{player}: no buys left to buy {card}")]
    InsufficientBuys { player: PlayerId, card: String },

    #[error("{player}: no actions left to play {card}")]
    InsufficientActions { player: PlayerId, card: String },

    #[error("{player}: {card} is not in hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// A decider's answer to an effect-ordering request that is not a
/// permutation of the pool.
///
/// This is a contract breach by the decider, not a game condition: the
/// dispatch loop panics with this message rather than returning it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("expected {expected} indices, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("index {index} is out of range for a pool of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("index {index} appears more than once")]
    Duplicate { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InsufficientMoney {
            player: PlayerId::new(1),
            card: "Gold".into(),
            available: 4,
            cost: 6,
        };
        assert_eq!(
            err.to_string(),
            "Player 1: not enough money to buy Gold (have 4, need 6)"
        );

        let err = GameError::CardNotInHand {
            player: PlayerId::new(0),
            card: CardId::new(12),
        };
        assert_eq!(err.to_string(), "Player 0: Card(12) is not in hand");
    }
}

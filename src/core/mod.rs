//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PileConfig, START_COPPER, START_ESTATE};
pub use error::{GameError, OrderError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};

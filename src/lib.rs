//! # rust-dominion
//!
//! Effect registry and dispatch engine for a Dominion-style deck-building
//! game.
//!
//! ## Design Principles
//!
//! 1. **Effects as Subscriptions**: Card abilities are named effects
//!    registered on one event channel while they are active, and
//!    unregistered by name when they lapse.
//!
//! 2. **Player-Owned Ordering**: Hidden bookkeeping resolves silently.
//!    When simultaneous player-facing effects include one whose order
//!    matters, the deciding player orders the whole pool.
//!
//! 3. **Re-entrant Dispatch**: Handlers receive the whole game mutably and
//!    may register, unregister or fire further events. A dispatch works on
//!    a snapshot of what triggered.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, configuration, errors
//! - `cards`: Card definitions, physical cards, registry
//! - `zones`: Piles and the supply
//! - `effects`: Effects, event shapes, registry and dispatch
//! - `decider`: Player decision interface and implementations
//! - `game`: Game state and the operations that fire events

pub mod cards;
pub mod core;
pub mod decider;
pub mod effects;
pub mod game;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, OrderError, PileConfig, PlayerId, PlayerMap, Result,
};

pub use crate::cards::{Card, CardDefinition, CardId, CardRegistry, CardType};

pub use crate::zones::{Pile, PilePosition, Supply};

pub use crate::effects::{
    AttackEffect, AttackEvent, CardEvent, Effect, EffectBehavior, EffectChannel, EffectOrder, EffectRegistry,
    EventKind, EventShape, PlayerCardEffect, PlayerEffect, PlayerEvent,
};

pub use crate::decider::{BotDecider, Decider, ScriptedDecider, SelectionRequest};

pub use crate::game::{Game, Player, PlayerState};

//! Effect registry and dispatch.
//!
//! Card abilities are expressed as effects: named subscriptions to one
//! event category, each with an ordering class and an optional trigger.
//!
//! - `EffectOrder`: whether a triggered effect is player-facing and whether
//!   its position relative to others matters
//! - `Effect`: name, order, trigger and handler for one event shape
//! - `EffectRegistry`: one channel per event category plus the `on_*`
//!   entry points the game loop calls
//!
//! ## Dispatch
//!
//! When an event fires, hidden effects resolve first. Player-facing effects
//! resolve next, and the deciding player chooses their order whenever at
//! least one of them is order-required and more than one triggered. Attack
//! handlers return whether the attack still lands; the event's result is
//! the AND of every handler that fired.

mod dispatch;
mod effect;
mod event;
mod order;
mod registry;

pub use dispatch::validate_order;
pub use effect::{
    AttackEffect, Effect, EffectBehavior, HandlerFn, PlayerCardEffect, PlayerEffect, TriggerFn,
};
pub use event::{AttackEvent, CardEvent, EventKind, EventShape, PlayerEvent};
pub use order::EffectOrder;
pub use registry::{EffectChannel, EffectRegistry};

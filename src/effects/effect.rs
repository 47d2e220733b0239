//! Effects: reactive subscriptions to one event category.
//!
//! An `Effect` bundles a name, an [`EffectOrder`], an optional trigger
//! predicate and a handler. Most card abilities are written inline from
//! closures:
//!
//! ```
//! use rust_dominion::effects::{EffectOrder, PlayerCardEffect};
//!
//! let bonus = PlayerCardEffect::new("Merchant", EffectOrder::OrderNotRequired, |game, event| {
//!     game.player_mut(event.player).state.money += 1;
//! })
//! .with_trigger(|_game, event| event.card.name() == "Silver");
//!
//! assert_eq!(bonus.name(), "Merchant");
//! ```
//!
//! Abilities that carry their own state implement [`EffectBehavior`] and
//! are wrapped with [`Effect::from_behavior`].
//!
//! Effects are reference-counted: cloning one is cheap, and a clone held
//! by an in-progress dispatch stays valid after the original is
//! unregistered.

use std::rc::Rc;

use super::event::{AttackEvent, CardEvent, EventShape, PlayerEvent};
use super::order::EffectOrder;
use crate::game::Game;

/// Handler closure for an event shape.
pub type HandlerFn<E> = dyn Fn(&mut Game, &E) -> <E as EventShape>::Outcome;

/// Trigger predicate for an event shape.
pub type TriggerFn<E> = dyn Fn(&Game, &E) -> bool;

/// Custom effect logic for abilities that are not a plain closure pair.
pub trait EffectBehavior<E: EventShape> {
    /// Whether the effect fires for this event. Defaults to always.
    fn is_triggered(&self, _game: &Game, _event: &E) -> bool {
        true
    }

    fn handle(&self, game: &mut Game, event: &E) -> E::Outcome;
}

enum EffectBody<E: EventShape> {
    Func(Rc<HandlerFn<E>>),
    Behavior(Rc<dyn EffectBehavior<E>>),
}

impl<E: EventShape> Clone for EffectBody<E> {
    fn clone(&self) -> Self {
        match self {
            EffectBody::Func(handler) => EffectBody::Func(Rc::clone(handler)),
            EffectBody::Behavior(behavior) => EffectBody::Behavior(Rc::clone(behavior)),
        }
    }
}

/// A reactive subscription for events of shape `E`.
pub struct Effect<E: EventShape> {
    name: Rc<str>,
    order: EffectOrder,
    trigger: Option<Rc<TriggerFn<E>>>,
    body: EffectBody<E>,
}

/// Effect keyed on an acting player.
pub type PlayerEffect = Effect<PlayerEvent>;
/// Effect keyed on an acting player and a subject card.
pub type PlayerCardEffect = Effect<CardEvent>;
/// Effect keyed on an attack; handlers return whether the attack lands.
pub type AttackEffect = Effect<AttackEvent>;

impl<E: EventShape> Effect<E> {
    /// Create an effect from a handler closure. It triggers on every event
    /// of its channel until narrowed with [`with_trigger`](Self::with_trigger).
    pub fn new<F>(name: impl Into<Rc<str>>, order: EffectOrder, handler: F) -> Self
    where
        F: Fn(&mut Game, &E) -> E::Outcome + 'static,
    {
        Self {
            name: name.into(),
            order,
            trigger: None,
            body: EffectBody::Func(Rc::new(handler)),
        }
    }

    /// Wrap a custom [`EffectBehavior`].
    pub fn from_behavior<B>(name: impl Into<Rc<str>>, order: EffectOrder, behavior: B) -> Self
    where
        B: EffectBehavior<E> + 'static,
    {
        Self {
            name: name.into(),
            order,
            trigger: None,
            body: EffectBody::Behavior(Rc::new(behavior)),
        }
    }

    /// Restrict when the effect fires (builder pattern).
    ///
    /// For behavior-backed effects the predicate is checked in addition to
    /// [`EffectBehavior::is_triggered`].
    #[must_use]
    pub fn with_trigger<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Game, &E) -> bool + 'static,
    {
        self.trigger = Some(Rc::new(predicate));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn order(&self) -> EffectOrder {
        self.order
    }

    #[must_use]
    pub fn is_triggered(&self, game: &Game, event: &E) -> bool {
        if let Some(trigger) = &self.trigger {
            if !trigger(game, event) {
                return false;
            }
        }
        match &self.body {
            EffectBody::Func(_) => true,
            EffectBody::Behavior(behavior) => behavior.is_triggered(game, event),
        }
    }

    pub fn handle(&self, game: &mut Game, event: &E) -> E::Outcome {
        match &self.body {
            EffectBody::Func(handler) => handler(game, event),
            EffectBody::Behavior(behavior) => behavior.handle(game, event),
        }
    }
}

impl<E: EventShape> Clone for Effect<E> {
    fn clone(&self) -> Self {
        Self {
            name: Rc::clone(&self.name),
            order: self.order,
            trigger: self.trigger.clone(),
            body: self.body.clone(),
        }
    }
}

impl<E: EventShape> std::fmt::Debug for Effect<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = match self.body {
            EffectBody::Func(_) => "func",
            EffectBody::Behavior(_) => "behavior",
        };
        f.debug_struct("Effect")
            .field("name", &self.name)
            .field("order", &self.order)
            .field("body", &body)
            .finish()
    }
}

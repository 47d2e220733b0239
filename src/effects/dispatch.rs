//! The dispatch algorithm.
//!
//! One dispatch evaluates a channel against one event occurrence:
//!
//! 1. Every effect's trigger predicate is evaluated in channel order and
//!    the triggered effects are split into Hidden, OrderRequired and
//!    OrderNotRequired buckets. This split is a snapshot; effects a
//!    handler registers or unregisters only affect later dispatches.
//! 2. Hidden effects fire first.
//! 3. With no OrderRequired effect, OrderNotRequired effects fire in
//!    registration order.
//! 4. Otherwise OrderRequired ++ OrderNotRequired form one pool. A pool of
//!    one fires directly; a larger pool is ordered by the event's deciding
//!    player, whose answer must be a permutation of the pool.
//! 5. Handler results are folded with [`EventShape::combine`] without
//!    short-circuiting: every triggered handler runs.

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::effect::Effect;
use super::event::{EventKind, EventShape};
use super::order::EffectOrder;
use crate::core::error::OrderError;
use crate::game::Game;

type Bucket<E> = SmallVec<[Effect<E>; 4]>;

/// Check that `order` is a permutation of `0..pool_len`.
///
/// ```
/// use rust_dominion::effects::validate_order;
///
/// assert!(validate_order(&[1, 0, 2], 3).is_ok());
/// assert!(validate_order(&[0, 0], 2).is_err());
/// assert!(validate_order(&[0, 1, 2], 2).is_err());
/// ```
pub fn validate_order(order: &[usize], pool_len: usize) -> Result<(), OrderError> {
    if order.len() != pool_len {
        return Err(OrderError::WrongLength {
            expected: pool_len,
            got: order.len(),
        });
    }

    let mut seen: SmallVec<[bool; 8]> = SmallVec::from_elem(false, pool_len);
    for &index in order {
        if index >= pool_len {
            return Err(OrderError::OutOfRange {
                index,
                len: pool_len,
            });
        }
        if seen[index] {
            return Err(OrderError::Duplicate { index });
        }
        seen[index] = true;
    }

    Ok(())
}

/// Triggered effects of one dispatch, split by ordering class.
pub(crate) struct Triggered<E: EventShape> {
    hidden: Bucket<E>,
    order_required: Bucket<E>,
    order_not_required: Bucket<E>,
}

impl<E: EventShape> Triggered<E> {
    /// Evaluate every effect once, in iteration order.
    pub(crate) fn collect<'a>(
        effects: impl IntoIterator<Item = &'a Effect<E>>,
        game: &Game,
        event: &E,
    ) -> Self {
        let mut triggered = Self {
            hidden: SmallVec::new(),
            order_required: SmallVec::new(),
            order_not_required: SmallVec::new(),
        };

        for effect in effects {
            if !effect.is_triggered(game, event) {
                continue;
            }
            let bucket = match effect.order() {
                EffectOrder::Hidden => &mut triggered.hidden,
                EffectOrder::OrderRequired => &mut triggered.order_required,
                EffectOrder::OrderNotRequired => &mut triggered.order_not_required,
            };
            bucket.push(effect.clone());
        }

        triggered
    }

    /// Fire the snapshot and return the combined outcome.
    pub(crate) fn resolve(self, game: &mut Game, kind: EventKind, event: &E) -> E::Outcome {
        let Triggered {
            hidden,
            order_required,
            mut order_not_required,
        } = self;

        if hidden.is_empty() && order_required.is_empty() && order_not_required.is_empty() {
            return E::initial();
        }

        debug!(
            event = %kind,
            hidden = hidden.len(),
            order_required = order_required.len(),
            order_not_required = order_not_required.len(),
            "dispatching effects"
        );

        let mut outcome = E::initial();
        for effect in &hidden {
            outcome = E::combine(outcome, fire(effect, game, kind, event));
        }

        if order_required.is_empty() {
            for effect in &order_not_required {
                outcome = E::combine(outcome, fire(effect, game, kind, event));
            }
            return outcome;
        }

        let mut pool = order_required;
        pool.append(&mut order_not_required);

        if let [only] = pool.as_slice() {
            return E::combine(outcome, fire(only, game, kind, event));
        }

        let order = request_order(game, kind, &pool, event);
        for index in order {
            outcome = E::combine(outcome, fire(&pool[index], game, kind, event));
        }

        outcome
    }
}

fn fire<E: EventShape>(effect: &Effect<E>, game: &mut Game, kind: EventKind, event: &E) -> E::Outcome {
    let outcome = effect.handle(game, event);
    trace!(event = %kind, effect = effect.name(), ?outcome, "effect fired");
    outcome
}

/// Ask the deciding player to order `pool`, panicking on a malformed answer.
fn request_order<E: EventShape>(game: &Game, kind: EventKind, pool: &[Effect<E>], event: &E) -> Vec<usize> {
    let player = event.decider();
    let names: Vec<&str> = pool.iter().map(Effect::name).collect();

    let order = game
        .decider(player)
        .effects_order_decision(&names, player, game);

    if let Err(err) = validate_order(&order, pool.len()) {
        warn!(event = %kind, %player, ?order, ?names, "decider returned a malformed effect order");
        panic!("{player} returned effect order {order:?} for {names:?}: {err}");
    }

    debug!(event = %kind, %player, ?order, "effect order decided");
    order
}

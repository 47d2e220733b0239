//! Player decision interface.
//!
//! Every player owns a `Decider`. The engine asks it whenever a rule leaves
//! a choice to the player:
//! - `effects_order_decision`: order simultaneous player-facing effects
//! - `binary_decision`: accept or decline an optional ability
//! - `multiple_card_decision`: pick cards within count bounds
//!
//! Implementations:
//! - `BotDecider`: deterministic automated player
//! - `ScriptedDecider`: queued answers for tests and replays

mod bot;
mod scripted;

pub use bot::BotDecider;
pub use scripted::ScriptedDecider;

use crate::cards::Card;
use crate::core::PlayerId;
use crate::game::Game;

/// A card selection the player must make.
#[derive(Clone, Copy, Debug)]
pub struct SelectionRequest<'a> {
    pub prompt: &'a str,
    /// Card whose ability asks for the selection.
    pub card: &'a Card,
    pub candidates: &'a [Card],
    pub min: usize,
    pub max: usize,
}

impl<'a> SelectionRequest<'a> {
    #[must_use]
    pub fn new(prompt: &'a str, card: &'a Card, candidates: &'a [Card]) -> Self {
        Self {
            prompt,
            card,
            candidates,
            min: 0,
            max: candidates.len(),
        }
    }

    /// Set count bounds, clamped to the candidate count (builder pattern).
    #[must_use]
    pub fn with_bounds(mut self, min: usize, max: usize) -> Self {
        self.max = max.min(self.candidates.len());
        self.min = min.min(self.max);
        self
    }
}

/// Source of player choices.
///
/// Methods take `&self`; implementations that keep state use interior
/// mutability.
pub trait Decider {
    /// Order simultaneous effects.
    ///
    /// Must return a permutation of `0..effect_names.len()`. Any other
    /// answer aborts the dispatch.
    fn effects_order_decision(&self, effect_names: &[&str], player: PlayerId, game: &Game) -> Vec<usize>;

    /// Accept or decline an optional choice offered by `card`.
    fn binary_decision(
        &self,
        prompt: &str,
        card: &Card,
        player: PlayerId,
        game: &Game,
        relevant_cards: Option<&[Card]>,
    ) -> bool;

    /// Select between `request.min` and `request.max` of the candidates.
    fn multiple_card_decision(&self, request: &SelectionRequest<'_>, player: PlayerId, game: &Game) -> Vec<Card>;
}

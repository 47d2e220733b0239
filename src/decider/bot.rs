use super::{Decider, SelectionRequest};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::game::Game;

/// Deterministic automated player.
///
/// Keeps effects in the order offered, declines optional choices and
/// selects the fewest candidates allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BotDecider;

impl Decider for BotDecider {
    fn effects_order_decision(&self, effect_names: &[&str], _player: PlayerId, _game: &Game) -> Vec<usize> {
        (0..effect_names.len()).collect()
    }

    fn binary_decision(
        &self,
        _prompt: &str,
        _card: &Card,
        _player: PlayerId,
        _game: &Game,
        _relevant_cards: Option<&[Card]>,
    ) -> bool {
        false
    }

    fn multiple_card_decision(&self, request: &SelectionRequest<'_>, _player: PlayerId, _game: &Game) -> Vec<Card> {
        request.candidates.iter().take(request.min).cloned().collect()
    }
}

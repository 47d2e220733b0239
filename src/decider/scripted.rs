use std::cell::RefCell;
use std::collections::VecDeque;

use super::{BotDecider, Decider, SelectionRequest};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::game::Game;

/// Decider that replays queued answers.
///
/// Each decision type has its own queue; once a queue runs dry the
/// decision falls back to [`BotDecider`]. Every ordering request is
/// recorded, whether or not a queued answer served it.
///
/// ```
/// use rust_dominion::decider::ScriptedDecider;
///
/// let decider = ScriptedDecider::new().with_order(vec![1, 0]).with_binary(true);
/// assert_eq!(decider.order_request_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedDecider {
    orders: RefCell<VecDeque<Vec<usize>>>,
    binaries: RefCell<VecDeque<bool>>,
    selections: RefCell<VecDeque<Vec<String>>>,
    order_requests: RefCell<Vec<Vec<String>>>,
}

impl ScriptedDecider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next ordering request.
    #[must_use]
    pub fn with_order(self, order: Vec<usize>) -> Self {
        self.orders.borrow_mut().push_back(order);
        self
    }

    /// Queue an answer for the next binary decision.
    #[must_use]
    pub fn with_binary(self, answer: bool) -> Self {
        self.binaries.borrow_mut().push_back(answer);
        self
    }

    /// Queue card names for the next selection.
    ///
    /// Names are matched against the candidates in order; names with no
    /// remaining candidate are skipped.
    #[must_use]
    pub fn with_selection<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Self {
        self.selections
            .borrow_mut()
            .push_back(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_order(&self, order: Vec<usize>) {
        self.orders.borrow_mut().push_back(order);
    }

    /// Effect names of every ordering request seen, oldest first.
    #[must_use]
    pub fn order_requests(&self) -> Vec<Vec<String>> {
        self.order_requests.borrow().clone()
    }

    #[must_use]
    pub fn order_request_count(&self) -> usize {
        self.order_requests.borrow().len()
    }
}

impl Decider for ScriptedDecider {
    fn effects_order_decision(&self, effect_names: &[&str], player: PlayerId, game: &Game) -> Vec<usize> {
        self.order_requests
            .borrow_mut()
            .push(effect_names.iter().map(|name| (*name).to_string()).collect());

        match self.orders.borrow_mut().pop_front() {
            Some(order) => order,
            None => BotDecider.effects_order_decision(effect_names, player, game),
        }
    }

    fn binary_decision(
        &self,
        prompt: &str,
        card: &Card,
        player: PlayerId,
        game: &Game,
        relevant_cards: Option<&[Card]>,
    ) -> bool {
        match self.binaries.borrow_mut().pop_front() {
            Some(answer) => answer,
            None => BotDecider.binary_decision(prompt, card, player, game, relevant_cards),
        }
    }

    fn multiple_card_decision(&self, request: &SelectionRequest<'_>, player: PlayerId, game: &Game) -> Vec<Card> {
        let Some(names) = self.selections.borrow_mut().pop_front() else {
            return BotDecider.multiple_card_decision(request, player, game);
        };

        let mut remaining: Vec<&Card> = request.candidates.iter().collect();
        let mut picked = Vec::new();
        for name in names.iter().take(request.max) {
            if let Some(pos) = remaining.iter().position(|card| card.name() == name) {
                picked.push(remaining.remove(pos).clone());
            }
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::two_player_game;

    #[test]
    fn test_queued_orders_then_fallback() {
        let game = two_player_game();
        let decider = ScriptedDecider::new().with_order(vec![1, 0]);
        let player = PlayerId::new(0);

        assert_eq!(decider.effects_order_decision(&["A", "B"], player, &game), vec![1, 0]);
        assert_eq!(decider.effects_order_decision(&["C", "D"], player, &game), vec![0, 1]);
        assert_eq!(
            decider.order_requests(),
            vec![vec!["A".to_string(), "B".to_string()], vec!["C".to_string(), "D".to_string()]]
        );
    }

    #[test]
    fn test_binary_queue() {
        let game = two_player_game();
        let decider = ScriptedDecider::new().with_binary(true);
        let card = game.player(PlayerId::new(0)).hand.iter().next().cloned().unwrap();

        assert!(decider.binary_decision("Reveal?", &card, PlayerId::new(0), &game, None));
        assert!(!decider.binary_decision("Reveal?", &card, PlayerId::new(0), &game, None));
    }

    #[test]
    fn test_selection_by_name() {
        let game = two_player_game();
        let hand: Vec<Card> = game.player(PlayerId::new(0)).hand.iter().cloned().collect();
        let decider = ScriptedDecider::new().with_selection(["Province", "Copper"]);
        let request = SelectionRequest::new("Trash", &hand[0], &hand);

        let picked = decider.multiple_card_decision(&request, PlayerId::new(0), &game);

        // A five-card opening hand from 7 Copper and 3 Estate holds at least two Coppers.
        let names: Vec<&str> = picked.iter().map(Card::name).collect();
        assert_eq!(names, vec!["Copper"]);
    }
}

//! Turn boundaries: start, clean-up and end.

use tracing::debug;

use super::{Game, PlayerState};
use crate::core::PlayerId;
use crate::effects::EffectRegistry;

impl Game {
    /// Begin `player`'s turn with fresh resources.
    pub fn start_turn(&mut self, player: PlayerId) {
        self.current_player = player;
        self.turn_number += 1;
        self.players[player].state =
            PlayerState::new(self.config.starting_actions, self.config.starting_buys);

        debug!(%player, turn = self.turn_number, "turn started");
        EffectRegistry::on_turn_start(self, player);
    }

    /// Clean-up phase.
    ///
    /// Clean-up effects fire while the hand and playmat are still intact.
    /// Then every card in hand and on the playmat is discarded, turn
    /// resources are cleared and a new hand is drawn.
    pub fn cleanup(&mut self, player: PlayerId) {
        EffectRegistry::on_cleanup_start(self, player);

        // One at a time; a hand-remove handler may already have moved a later card.
        let hand: Vec<_> = self.players[player].hand.iter().map(|card| card.id()).collect();
        for id in hand {
            if let Ok(card) = self.remove_from_hand(player, id) {
                self.discard_card(player, card);
            }
        }

        let played = self.players[player].playmat.take_all();
        for card in played {
            self.discard_card(player, card);
        }

        self.players[player].state = PlayerState::default();
        let hand_size = self.config.hand_size;
        let drawn = self.draw(player, hand_size);
        debug!(%player, drawn, "clean-up done");
    }

    /// End `player`'s turn and pass play to the next seat.
    pub fn end_turn(&mut self, player: PlayerId) {
        EffectRegistry::on_turn_end(self, player);
        self.current_player = player.next(self.player_count());
        debug!(%player, next = %self.current_player, "turn ended");
    }

    /// Clean up, end the turn and start the next player's turn.
    pub fn advance_turn(&mut self) {
        let player = self.current_player;
        self.cleanup(player);
        self.end_turn(player);
        self.start_turn(self.current_player);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::PlayerId;
    use crate::game::test_support::two_player_game;
    use crate::game::PlayerState;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_cleanup_discards_and_redraws() {
        let mut game = two_player_game();
        game.autoplay_treasures(P0).unwrap();
        let played = game.player(P0).playmat.len();

        game.cleanup(P0);

        let seat = game.player(P0);
        assert!(seat.playmat.is_empty());
        assert_eq!(seat.hand.len(), 5);
        assert_eq!(seat.deck.len(), 0);
        assert_eq!(seat.discard_pile.len(), 5);
        assert_eq!(seat.total_cards(), 10);
        assert_eq!(seat.state, PlayerState::default());
        assert!(played > 0);
    }

    #[test]
    fn test_turn_rotation() {
        let mut game = two_player_game();

        game.advance_turn();
        assert_eq!(game.current_player(), P1);
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.player(P1).state, PlayerState::new(1, 1));

        game.advance_turn();
        assert_eq!(game.current_player(), P0);
        assert_eq!(game.turn_number(), 3);
    }
}

//! Per-player zones and turn resources.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::decider::Decider;
use crate::zones::Pile;

/// Resources for the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub actions: u32,
    pub buys: u32,
    pub money: u32,
}

impl PlayerState {
    #[must_use]
    pub fn new(actions: u32, buys: u32) -> Self {
        Self {
            actions,
            buys,
            money: 0,
        }
    }
}

/// A seat at the table: its card zones, turn resources and decider.
pub struct Player {
    pub id: PlayerId,
    pub deck: Pile,
    pub discard_pile: Pile,
    pub hand: Pile,
    pub playmat: Pile,
    pub state: PlayerState,
    decider: Rc<dyn Decider>,
}

impl Player {
    pub fn new(id: PlayerId, deck: Pile, decider: Rc<dyn Decider>) -> Self {
        Self {
            id,
            deck,
            discard_pile: Pile::new(),
            hand: Pile::new(),
            playmat: Pile::new(),
            state: PlayerState::default(),
            decider,
        }
    }

    #[must_use]
    pub fn decider(&self) -> Rc<dyn Decider> {
        Rc::clone(&self.decider)
    }

    /// Cards the player owns across every personal zone.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard_pile.len() + self.hand.len() + self.playmat.len()
    }

    /// Victory points over every owned card.
    #[must_use]
    pub fn victory_points(&self) -> i32 {
        self.deck
            .iter()
            .chain(self.discard_pile.iter())
            .chain(self.hand.iter())
            .chain(self.playmat.iter())
            .map(|card| card.victory_points())
            .sum()
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("deck", &self.deck.len())
            .field("discard_pile", &self.discard_pile.len())
            .field("hand", &self.hand.names())
            .field("playmat", &self.playmat.names())
            .field("state", &self.state)
            .finish()
    }
}

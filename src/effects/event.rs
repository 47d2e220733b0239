//! Game events effects react to.
//!
//! The set of event categories is fixed ([`EventKind`]), and every
//! category carries one of three event shapes:
//!
//! - [`PlayerEvent`]: an acting player (shuffle, turn start, turn end,
//!   cleanup start).
//! - [`CardEvent`]: an acting player and a subject card (buy, discard,
//!   gain, hand add, hand remove, play, reveal, trash).
//! - [`AttackEvent`]: an attacker, a defender and the attack card.
//!
//! The shape decides what a handler returns, how results from several
//! handlers combine, and which player orders simultaneous effects.

use crate::cards::Card;
use crate::core::PlayerId;

/// Event categories, one effect channel each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Attack,
    Buy,
    Discard,
    Gain,
    HandAdd,
    HandRemove,
    Play,
    Reveal,
    Shuffle,
    Trash,
    TurnStart,
    TurnEnd,
    CleanupStart,
}

impl EventKind {
    pub const ALL: [EventKind; 13] = [
        EventKind::Attack,
        EventKind::Buy,
        EventKind::Discard,
        EventKind::Gain,
        EventKind::HandAdd,
        EventKind::HandRemove,
        EventKind::Play,
        EventKind::Reveal,
        EventKind::Shuffle,
        EventKind::Trash,
        EventKind::TurnStart,
        EventKind::TurnEnd,
        EventKind::CleanupStart,
    ];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Attack => "attack",
            EventKind::Buy => "buy",
            EventKind::Discard => "discard",
            EventKind::Gain => "gain",
            EventKind::HandAdd => "hand add",
            EventKind::HandRemove => "hand remove",
            EventKind::Play => "play",
            EventKind::Reveal => "reveal",
            EventKind::Shuffle => "shuffle",
            EventKind::Trash => "trash",
            EventKind::TurnStart => "turn start",
            EventKind::TurnEnd => "turn end",
            EventKind::CleanupStart => "cleanup start",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::PlayerEvent {}
    impl Sealed for super::CardEvent {}
    impl Sealed for super::AttackEvent {}
}

/// The closed set of event shapes.
pub trait EventShape: sealed::Sealed + std::fmt::Debug + 'static {
    /// What one handler returns.
    type Outcome: Copy + std::fmt::Debug;

    /// Result of a dispatch that fires nothing.
    fn initial() -> Self::Outcome;

    /// Fold one handler's result into the running result.
    fn combine(acc: Self::Outcome, next: Self::Outcome) -> Self::Outcome;

    /// The player asked to order simultaneous effects.
    fn decider(&self) -> PlayerId;
}

/// An event with only an acting player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEvent {
    pub player: PlayerId,
}

impl PlayerEvent {
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }
}

impl EventShape for PlayerEvent {
    type Outcome = ();

    fn initial() {}

    fn combine((): (), (): ()) {}

    fn decider(&self) -> PlayerId {
        self.player
    }
}

/// An event with an acting player and a subject card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEvent {
    pub player: PlayerId,
    pub card: Card,
}

impl CardEvent {
    #[must_use]
    pub fn new(player: PlayerId, card: Card) -> Self {
        Self { player, card }
    }
}

impl EventShape for CardEvent {
    type Outcome = ();

    fn initial() {}

    fn combine((): (), (): ()) {}

    fn decider(&self) -> PlayerId {
        self.player
    }
}

/// An attack against one defender.
///
/// Handlers return whether the attack still lands. Results are ANDed over
/// every handler that fired; the defender orders simultaneous reactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackEvent {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub card: Card,
}

impl AttackEvent {
    #[must_use]
    pub fn new(attacker: PlayerId, defender: PlayerId, card: Card) -> Self {
        Self {
            attacker,
            defender,
            card,
        }
    }
}

impl EventShape for AttackEvent {
    type Outcome = bool;

    fn initial() -> bool {
        true
    }

    fn combine(acc: bool, next: bool) -> bool {
        acc & next
    }

    fn decider(&self) -> PlayerId {
        self.defender
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardRegistry};

    fn card() -> Card {
        CardRegistry::with_basic_cards()
            .instantiate("Copper", CardId::new(0))
            .unwrap()
    }

    #[test]
    fn test_attack_decider_is_defender() {
        let event = AttackEvent::new(PlayerId::new(0), PlayerId::new(1), card());
        assert_eq!(event.decider(), PlayerId::new(1));
    }

    #[test]
    fn test_card_event_decider_is_actor() {
        let event = CardEvent::new(PlayerId::new(2), card());
        assert_eq!(event.decider(), PlayerId::new(2));
        assert_eq!(PlayerEvent::new(PlayerId::new(3)).decider(), PlayerId::new(3));
    }

    #[test]
    fn test_attack_combine_is_and() {
        assert!(AttackEvent::initial());
        assert!(AttackEvent::combine(true, true));
        assert!(!AttackEvent::combine(true, false));
        assert!(!AttackEvent::combine(false, true));
    }

    #[test]
    fn test_event_kind_names() {
        assert_eq!(EventKind::ALL.len(), 13);
        assert_eq!(EventKind::CleanupStart.to_string(), "cleanup start");
    }
}

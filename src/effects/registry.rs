//! Effect registry.
//!
//! The registry owns one channel per event category. Card logic registers
//! an effect when an ability becomes active (a card enters the hand, is
//! played, a turn starts) and unregisters it by name when the ability
//! lapses. The game loop fires events through the `on_*` entry points.
//!
//! ## Example
//!
//! ```
//! use rust_dominion::cards::CardRegistry;
//! use rust_dominion::core::{GameConfig, PlayerId};
//! use rust_dominion::decider::BotDecider;
//! use rust_dominion::effects::{EffectOrder, EffectRegistry, PlayerEffect};
//! use rust_dominion::game::Game;
//! use std::rc::Rc;
//!
//! let mut game = Game::new(
//!     GameConfig::new(7),
//!     CardRegistry::with_basic_cards(),
//!     vec![Rc::new(BotDecider), Rc::new(BotDecider)],
//! )
//! .unwrap();
//!
//! game.effects.register_turn_start_effect(PlayerEffect::new(
//!     "Extra buy",
//!     EffectOrder::OrderNotRequired,
//!     |game, event| game.player_mut(event.player).state.buys += 1,
//! ));
//!
//! EffectRegistry::on_turn_start(&mut game, PlayerId::new(0));
//! assert_eq!(game.player(PlayerId::new(0)).state.buys, 1);
//!
//! game.effects.unregister_turn_start_effects("Extra buy", None);
//! assert!(game.effects.turn_start_effects().is_empty());
//! ```

use super::dispatch::Triggered;
use super::effect::Effect;
use super::event::{AttackEvent, CardEvent, EventKind, EventShape, PlayerEvent};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::game::Game;

/// Effects subscribed to one event category, in registration order.
pub struct EffectChannel<E: EventShape> {
    effects: Vec<Effect<E>>,
}

impl<E: EventShape> Default for EffectChannel<E> {
    fn default() -> Self {
        Self {
            effects: Vec::new(),
        }
    }
}

impl<E: EventShape> Clone for EffectChannel<E> {
    fn clone(&self) -> Self {
        Self {
            effects: self.effects.clone(),
        }
    }
}

impl<E: EventShape> std::fmt::Debug for EffectChannel<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.effects.iter()).finish()
    }
}

impl<E: EventShape> EffectChannel<E> {
    /// Append an effect to the end of the channel.
    pub fn register(&mut self, effect: Effect<E>) {
        self.effects.push(effect);
    }

    /// Remove up to `max_unregister` effects named `name`, front to back.
    /// `None` removes every match. Returns how many were removed.
    pub fn unregister(&mut self, name: &str, max_unregister: Option<usize>) -> usize {
        let limit = max_unregister.unwrap_or(usize::MAX);
        let mut removed = 0;
        self.effects.retain(|effect| {
            if removed < limit && effect.name() == name {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect<E>> {
        self.effects.iter()
    }

    /// Effect names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.effects.iter().map(Effect::name).collect()
    }

    /// Whether any effect with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.effects.iter().any(|e| e.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

/// Registry for effects to be triggered on game events.
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    attack: EffectChannel<AttackEvent>,
    buy: EffectChannel<CardEvent>,
    discard: EffectChannel<CardEvent>,
    gain: EffectChannel<CardEvent>,
    hand_add: EffectChannel<CardEvent>,
    hand_remove: EffectChannel<CardEvent>,
    play: EffectChannel<CardEvent>,
    reveal: EffectChannel<CardEvent>,
    shuffle: EffectChannel<PlayerEvent>,
    trash: EffectChannel<CardEvent>,
    turn_start: EffectChannel<PlayerEvent>,
    turn_end: EffectChannel<PlayerEvent>,
    cleanup_start: EffectChannel<PlayerEvent>,
}

macro_rules! channel_methods {
    ($($field:ident: $shape:ty, $label:literal => $register:ident, $unregister:ident, $view:ident;)*) => {
        impl EffectRegistry {
            $(
                #[doc = concat!("Register an effect to be triggered on ", $label, ".")]
                pub fn $register(&mut self, effect: Effect<$shape>) {
                    self.$field.register(effect);
                }

                #[doc = concat!("Unregister up to `max_unregister` ", $label, " effects named `name`; `None` removes all.")]
                pub fn $unregister(&mut self, name: &str, max_unregister: Option<usize>) -> usize {
                    self.$field.unregister(name, max_unregister)
                }

                #[doc = concat!("Effects currently triggered on ", $label, ".")]
                #[must_use]
                pub fn $view(&self) -> &EffectChannel<$shape> {
                    &self.$field
                }
            )*
        }
    };
}

channel_methods! {
    attack: AttackEvent, "attacking" => register_attack_effect, unregister_attack_effects, attack_effects;
    buy: CardEvent, "buying" => register_buy_effect, unregister_buy_effects, buy_effects;
    discard: CardEvent, "discarding" => register_discard_effect, unregister_discard_effects, discard_effects;
    gain: CardEvent, "gaining" => register_gain_effect, unregister_gain_effects, gain_effects;
    hand_add: CardEvent, "hand adding" => register_hand_add_effect, unregister_hand_add_effects, hand_add_effects;
    hand_remove: CardEvent, "hand removing" => register_hand_remove_effect, unregister_hand_remove_effects, hand_remove_effects;
    play: CardEvent, "playing" => register_play_effect, unregister_play_effects, play_effects;
    reveal: CardEvent, "revealing" => register_reveal_effect, unregister_reveal_effects, reveal_effects;
    shuffle: PlayerEvent, "shuffling" => register_shuffle_effect, unregister_shuffle_effects, shuffle_effects;
    trash: CardEvent, "trashing" => register_trash_effect, unregister_trash_effects, trash_effects;
    turn_start: PlayerEvent, "turn start" => register_turn_start_effect, unregister_turn_start_effects, turn_start_effects;
    turn_end: PlayerEvent, "turn end" => register_turn_end_effect, unregister_turn_end_effects, turn_end_effects;
    cleanup_start: PlayerEvent, "clean-up start" => register_cleanup_start_effect, unregister_cleanup_start_effects, cleanup_start_effects;
}

impl EffectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effects registered for an event category.
    ///
    /// `Buy` counts only the buy channel, although `on_buy` also fires gain effects.
    #[must_use]
    pub fn effect_count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Attack => self.attack.len(),
            EventKind::Buy => self.buy.len(),
            EventKind::Discard => self.discard.len(),
            EventKind::Gain => self.gain.len(),
            EventKind::HandAdd => self.hand_add.len(),
            EventKind::HandRemove => self.hand_remove.len(),
            EventKind::Play => self.play.len(),
            EventKind::Reveal => self.reveal.len(),
            EventKind::Shuffle => self.shuffle.len(),
            EventKind::Trash => self.trash.len(),
            EventKind::TurnStart => self.turn_start.len(),
            EventKind::TurnEnd => self.turn_end.len(),
            EventKind::CleanupStart => self.cleanup_start.len(),
        }
    }

    /// Total effects across every channel.
    #[must_use]
    pub fn len(&self) -> usize {
        EventKind::ALL.iter().map(|&kind| self.effect_count(kind)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Trigger attack effects against one defender.
    ///
    /// Returns whether the attack still lands: the AND of every fired
    /// handler's result, or `true` when nothing fired.
    pub fn on_attack(game: &mut Game, attacker: PlayerId, defender: PlayerId, attack_card: &Card) -> bool {
        let event = AttackEvent::new(attacker, defender, attack_card.clone());
        let triggered = Triggered::collect(game.effects.attack.iter(), game, &event);
        triggered.resolve(game, EventKind::Attack, &event)
    }

    /// Trigger buying effects.
    ///
    /// Gain effects and buy effects fire as one pass over gain ++ buy, so a
    /// single ordering decision covers both.
    pub fn on_buy(game: &mut Game, player: PlayerId, card: &Card) {
        let event = CardEvent::new(player, card.clone());
        let effects = game.effects.gain.iter().chain(game.effects.buy.iter());
        let triggered = Triggered::collect(effects, game, &event);
        triggered.resolve(game, EventKind::Buy, &event);
    }

    /// Trigger discarding effects.
    pub fn on_discard(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::Discard, player, card);
    }

    /// Trigger gaining effects.
    pub fn on_gain(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::Gain, player, card);
    }

    /// Trigger hand adding effects.
    pub fn on_hand_add(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::HandAdd, player, card);
    }

    /// Trigger hand removing effects.
    pub fn on_hand_remove(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::HandRemove, player, card);
    }

    /// Trigger playing effects.
    pub fn on_play(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::Play, player, card);
    }

    /// Trigger revealing effects.
    pub fn on_reveal(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::Reveal, player, card);
    }

    /// Trigger trashing effects.
    pub fn on_trash(game: &mut Game, player: PlayerId, card: &Card) {
        Self::fire_card_event(game, EventKind::Trash, player, card);
    }

    /// Trigger shuffling effects.
    pub fn on_shuffle(game: &mut Game, player: PlayerId) {
        Self::fire_player_event(game, EventKind::Shuffle, player);
    }

    /// Trigger turn start effects.
    pub fn on_turn_start(game: &mut Game, player: PlayerId) {
        Self::fire_player_event(game, EventKind::TurnStart, player);
    }

    /// Trigger turn end effects.
    pub fn on_turn_end(game: &mut Game, player: PlayerId) {
        Self::fire_player_event(game, EventKind::TurnEnd, player);
    }

    /// Trigger clean-up start effects.
    pub fn on_cleanup_start(game: &mut Game, player: PlayerId) {
        Self::fire_player_event(game, EventKind::CleanupStart, player);
    }

    fn card_channel(&self, kind: EventKind) -> &EffectChannel<CardEvent> {
        match kind {
            EventKind::Buy => &self.buy,
            EventKind::Discard => &self.discard,
            EventKind::Gain => &self.gain,
            EventKind::HandAdd => &self.hand_add,
            EventKind::HandRemove => &self.hand_remove,
            EventKind::Play => &self.play,
            EventKind::Reveal => &self.reveal,
            EventKind::Trash => &self.trash,
            other => unreachable!("{other} is not a card event"),
        }
    }

    fn player_channel(&self, kind: EventKind) -> &EffectChannel<PlayerEvent> {
        match kind {
            EventKind::Shuffle => &self.shuffle,
            EventKind::TurnStart => &self.turn_start,
            EventKind::TurnEnd => &self.turn_end,
            EventKind::CleanupStart => &self.cleanup_start,
            other => unreachable!("{other} is not a player event"),
        }
    }

    fn fire_card_event(game: &mut Game, kind: EventKind, player: PlayerId, card: &Card) {
        let event = CardEvent::new(player, card.clone());
        let triggered = Triggered::collect(game.effects.card_channel(kind).iter(), game, &event);
        triggered.resolve(game, kind, &event);
    }

    fn fire_player_event(game: &mut Game, kind: EventKind, player: PlayerId) {
        let event = PlayerEvent::new(player);
        let triggered = Triggered::collect(game.effects.player_channel(kind).iter(), game, &event);
        triggered.resolve(game, kind, &event);
    }
}

//! Attack dispatch integration tests.
//!
//! Attack handlers return whether the attack still lands against their
//! defender. These tests cover result folding, defender-side ordering and
//! a reaction card that registers its attack effect while it is in hand.

use std::cell::Cell;
use std::rc::Rc;

use rust_dominion::cards::{Card, CardDefinition, CardRegistry, CardType};
use rust_dominion::core::{GameConfig, PlayerId};
use rust_dominion::decider::{BotDecider, Decider, ScriptedDecider};
use rust_dominion::effects::{AttackEffect, EffectOrder, EffectRegistry, PlayerCardEffect};
use rust_dominion::game::Game;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

fn registry() -> CardRegistry {
    let mut cards = CardRegistry::with_basic_cards();
    cards.register(CardDefinition::action("Militia", 4).with_type(CardType::Attack));
    cards.register(CardDefinition::action("Moat", 2).with_type(CardType::Reaction));
    cards
}

fn game_with(deciders: Vec<Rc<dyn Decider>>) -> Game {
    let mut game = Game::new(GameConfig::new(11), registry(), deciders).unwrap();
    install_moat(&mut game);
    game.start();
    game
}

fn moat_name(owner: PlayerId) -> String {
    format!("Moat ({owner})")
}

/// While a Moat is in its owner's hand, attacks on the owner may be blocked
/// by revealing it.
fn install_moat(game: &mut Game) {
    game.effects.register_hand_add_effect(
        PlayerCardEffect::new("Moat", EffectOrder::Hidden, |game, event| {
            game.effects.register_attack_effect(moat_reaction(event.player));
        })
        .with_trigger(|_, event| event.card.name() == "Moat"),
    );
    game.effects.register_hand_remove_effect(
        PlayerCardEffect::new("Moat", EffectOrder::Hidden, |game, event| {
            game.effects
                .unregister_attack_effects(&moat_name(event.player), Some(1));
        })
        .with_trigger(|_, event| event.card.name() == "Moat"),
    );
}

fn moat_reaction(owner: PlayerId) -> AttackEffect {
    AttackEffect::new(moat_name(owner), EffectOrder::OrderNotRequired, move |game, _event| {
        let Some(moat) = game
            .player(owner)
            .hand
            .iter()
            .find(|card| card.name() == "Moat")
            .cloned()
        else {
            return true;
        };
        let decider = game.decider(owner);
        if decider.binary_decision("Reveal Moat to block the attack?", &moat, owner, game, None) {
            game.reveal(owner, &moat);
            false
        } else {
            true
        }
    })
    .with_trigger(move |_, event| event.defender == owner)
}

fn give(game: &mut Game, player: PlayerId, name: &str) -> Card {
    let card = game.create_card(name).unwrap();
    game.add_to_hand(player, card.clone());
    card
}

fn counting(calls: &Rc<Cell<u32>>, name: &'static str, order: EffectOrder, result: bool) -> AttackEffect {
    let calls = Rc::clone(calls);
    AttackEffect::new(name, order, move |_, _| {
        calls.set(calls.get() + 1);
        result
    })
}

/// Results fold by AND and every handler runs, even after a block.
#[test]
fn test_attack_results_fold_without_short_circuit() {
    let mut game = game_with(vec![Rc::new(BotDecider), Rc::new(BotDecider)]);
    let calls = Rc::new(Cell::new(0));
    for (name, result) in [("First", true), ("Second", false), ("Third", true)] {
        game.effects
            .register_attack_effect(counting(&calls, name, EffectOrder::OrderNotRequired, result));
    }
    let militia = game.create_card("Militia").unwrap();

    assert!(!EffectRegistry::on_attack(&mut game, P0, P1, &militia));
    assert_eq!(calls.get(), 3);
}

/// Hidden handlers count towards the result too.
#[test]
fn test_hidden_block_counts() {
    let mut game = game_with(vec![Rc::new(BotDecider), Rc::new(BotDecider)]);
    let calls = Rc::new(Cell::new(0));
    game.effects
        .register_attack_effect(counting(&calls, "Lighthouse", EffectOrder::Hidden, false));
    game.effects
        .register_attack_effect(counting(&calls, "Watch", EffectOrder::OrderRequired, true));
    let militia = game.create_card("Militia").unwrap();

    assert!(!game.attack_player(P0, P1, &militia));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_unopposed_attack_hits_every_opponent() {
    let mut game = game_with(vec![Rc::new(BotDecider), Rc::new(BotDecider), Rc::new(BotDecider)]);
    let militia = give(&mut game, P0, "Militia");

    assert!(EffectRegistry::on_attack(&mut game, P0, P1, &militia));
    assert_eq!(game.attack(P0, &militia), vec![P1, P2]);
}

#[test]
fn test_moat_blocks_when_revealed() {
    let defender = Rc::new(ScriptedDecider::new().with_binary(true));
    let mut game = game_with(vec![Rc::new(BotDecider), defender.clone(), Rc::new(BotDecider)]);
    let reveals = Rc::new(Cell::new(0));
    let seen = Rc::clone(&reveals);
    game.effects.register_reveal_effect(PlayerCardEffect::new(
        "Count reveals",
        EffectOrder::OrderNotRequired,
        move |_, _| seen.set(seen.get() + 1),
    ));

    give(&mut game, P1, "Moat");
    let militia = give(&mut game, P0, "Militia");

    assert_eq!(game.effects.attack_effects().names(), vec!["Moat (Player 1)"]);
    assert_eq!(game.attack(P0, &militia), vec![P2]);
    assert_eq!(reveals.get(), 1);
    assert_eq!(defender.order_request_count(), 0);
}

#[test]
fn test_moat_declined_lets_attack_land() {
    let mut game = game_with(vec![Rc::new(BotDecider), Rc::new(BotDecider)]);
    give(&mut game, P1, "Moat");
    let militia = give(&mut game, P0, "Militia");

    assert_eq!(game.attack(P0, &militia), vec![P1]);
}

/// Leaving the hand removes the reaction again.
#[test]
fn test_moat_reaction_follows_hand() {
    let mut game = game_with(vec![
        Rc::new(BotDecider),
        Rc::new(ScriptedDecider::new().with_binary(true).with_binary(true)),
    ]);
    let first = give(&mut game, P1, "Moat");
    let second = give(&mut game, P1, "Moat");
    assert_eq!(game.effects.attack_effects().len(), 2);

    game.discard(P1, first.id()).unwrap();
    assert_eq!(game.effects.attack_effects().len(), 1);

    game.trash(P1, second.id()).unwrap();
    assert!(game.effects.attack_effects().is_empty());

    let militia = give(&mut game, P0, "Militia");
    assert_eq!(game.attack(P0, &militia), vec![P1]);
}

/// The defender, not the attacker, orders simultaneous reactions.
#[test]
fn test_defender_orders_reactions() {
    let attacker = Rc::new(ScriptedDecider::new());
    let defender = Rc::new(ScriptedDecider::new().with_order(vec![1, 0]));
    let mut game = game_with(vec![attacker.clone(), defender.clone()]);
    let calls = Rc::new(Cell::new(0));
    game.effects
        .register_attack_effect(counting(&calls, "Horse Traders", EffectOrder::OrderRequired, true));
    game.effects
        .register_attack_effect(counting(&calls, "Diplomat", EffectOrder::OrderRequired, true));
    let militia = game.create_card("Militia").unwrap();

    assert!(EffectRegistry::on_attack(&mut game, P0, P1, &militia));
    assert_eq!(attacker.order_request_count(), 0);
    assert_eq!(defender.order_requests(), vec![vec!["Horse Traders", "Diplomat"]]);
    assert_eq!(calls.get(), 2);
}

//! Game state and the operations that raise effect events.
//!
//! `Game` owns everything an effect handler may touch: players, supply,
//! trash, the card registry, the RNG and the [`EffectRegistry`] itself.
//! Every operation that moves a card or changes turn phase fires the
//! matching event through the registry before it returns, so handlers see
//! the state after the move.
//!
//! ## Example
//!
//! ```
//! use rust_dominion::cards::CardRegistry;
//! use rust_dominion::core::{GameConfig, PlayerId};
//! use rust_dominion::decider::BotDecider;
//! use rust_dominion::game::Game;
//! use std::rc::Rc;
//!
//! let mut game = Game::new(
//!     GameConfig::new(3),
//!     CardRegistry::with_basic_cards(),
//!     vec![Rc::new(BotDecider), Rc::new(BotDecider)],
//! )
//! .unwrap();
//! game.start();
//!
//! let p0 = PlayerId::new(0);
//! assert_eq!(game.player(p0).hand.len(), 5);
//!
//! game.player_mut(p0).state.money = 3;
//! game.buy(p0, "Silver").unwrap();
//! assert_eq!(game.player(p0).discard_pile.names(), vec!["Silver"]);
//! ```

mod player;
mod turn;

pub use player::{Player, PlayerState};

use std::rc::Rc;

use tracing::debug;

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result};
use crate::decider::Decider;
use crate::effects::EffectRegistry;
use crate::zones::{Pile, Supply};

/// Complete state of one game.
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    pub supply: Supply,
    pub trash: Pile,
    pub effects: EffectRegistry,
    cards: CardRegistry,
    rng: GameRng,
    current_player: PlayerId,
    turn_number: u32,
    next_card_id: u32,
}

impl Game {
    /// Set up a game with one player per decider.
    ///
    /// Builds the supply and every starting deck from `config`. Decks stay
    /// unshuffled until [`start`](Self::start).
    pub fn new(config: GameConfig, cards: CardRegistry, deciders: Vec<Rc<dyn Decider>>) -> Result<Self> {
        config.validate(&cards)?;
        if deciders.is_empty() || deciders.len() > usize::from(u8::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "unsupported player count {}",
                deciders.len()
            )));
        }

        let mut next_card_id = 0;
        let mut mint = |name: &str| -> Result<Card> {
            let card = cards.instantiate(name, CardId::new(next_card_id))?;
            next_card_id += 1;
            Ok(card)
        };

        let mut supply = Supply::new();
        for pile in &config.supply {
            let pile_cards = (0..pile.count)
                .map(|_| mint(&pile.card))
                .collect::<Result<Vec<_>>>()?;
            supply.add_pile(pile.card.clone(), Pile::from_cards(pile_cards));
        }

        let player_count = deciders.len();
        let mut seats = Vec::with_capacity(player_count);
        for (id, decider) in PlayerId::all(player_count).zip(deciders) {
            let mut deck = Vec::with_capacity(config.starting_deck_size());
            for pile in &config.starting_deck {
                for _ in 0..pile.count {
                    deck.push(mint(&pile.card)?);
                }
            }
            seats.push(Player::new(id, Pile::from_cards(deck), decider));
        }

        debug!(
            players = player_count,
            supply_piles = supply.len(),
            seed = config.seed,
            "game created"
        );

        Ok(Self {
            rng: GameRng::new(config.seed),
            config,
            players: PlayerMap::from_vec(seats),
            supply,
            trash: Pile::new(),
            effects: EffectRegistry::new(),
            cards,
            current_player: PlayerId::new(0),
            turn_number: 0,
            next_card_id,
        })
    }

    /// Shuffle every starting deck, draw opening hands and begin the first turn.
    ///
    /// The opening shuffle does not fire shuffle effects.
    pub fn start(&mut self) {
        let hand_size = self.config.hand_size;
        for id in PlayerId::all(self.player_count()) {
            self.players[id].deck.shuffle(&mut self.rng);
            self.draw(id, hand_size);
        }
        self.start_turn(PlayerId::new(0));
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Panics if `id` is not a seat in this game.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, player)| player)
    }

    /// The decider for a seat.
    #[must_use]
    pub fn decider(&self, id: PlayerId) -> Rc<dyn Decider> {
        self.players[id].decider()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Turns started so far; 0 before [`start`](Self::start).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Mint a new physical card from the registry.
    pub fn create_card(&mut self, name: &str) -> Result<Card> {
        let card = self.cards.instantiate(name, CardId::new(self.next_card_id))?;
        self.next_card_id += 1;
        Ok(card)
    }

    // === Card movement ===

    /// Draw up to `count` cards into the hand.
    ///
    /// An empty deck is refilled by shuffling in the discard pile. Returns
    /// the number of cards drawn, which is less than `count` only when
    /// both run out.
    pub fn draw(&mut self, player: PlayerId, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            if self.players[player].deck.is_empty() {
                if self.players[player].discard_pile.is_empty() {
                    break;
                }
                self.shuffle(player);
            }
            let Some(card) = self.players[player].deck.draw() else {
                break;
            };
            self.add_to_hand(player, card);
            drawn += 1;
        }
        drawn
    }

    /// Shuffle the discard pile into the deck.
    pub fn shuffle(&mut self, player: PlayerId) {
        let Player {
            deck, discard_pile, ..
        } = &mut self.players[player];
        deck.append(discard_pile);
        deck.shuffle(&mut self.rng);

        debug!(%player, deck = deck.len(), "shuffled");
        EffectRegistry::on_shuffle(self, player);
    }

    pub fn add_to_hand(&mut self, player: PlayerId, card: Card) {
        self.players[player].hand.add(card.clone());
        debug!(%player, %card, "added to hand");
        EffectRegistry::on_hand_add(self, player, &card);
    }

    pub fn remove_from_hand(&mut self, player: PlayerId, id: CardId) -> Result<Card> {
        let card = self.players[player]
            .hand
            .remove(id)
            .ok_or(GameError::CardNotInHand { player, card: id })?;
        debug!(%player, %card, "removed from hand");
        EffectRegistry::on_hand_remove(self, player, &card);
        Ok(card)
    }

    /// Play a card from the hand onto the playmat.
    ///
    /// Actions consume one action. Treasures add their money before play
    /// effects fire.
    pub fn play(&mut self, player: PlayerId, id: CardId) -> Result<()> {
        let card = self.players[player]
            .hand
            .get(id)
            .ok_or(GameError::CardNotInHand { player, card: id })?;

        if card.is_action() {
            let name = card.name().to_string();
            let state = &mut self.players[player].state;
            if state.actions == 0 {
                return Err(GameError::InsufficientActions { player, card: name });
            }
            state.actions -= 1;
        }

        let card = self.remove_from_hand(player, id)?;
        let seat = &mut self.players[player];
        seat.playmat.add(card.clone());
        if card.is_treasure() {
            seat.state.money += card.money();
        }

        debug!(%player, %card, money = seat.state.money, "played");
        EffectRegistry::on_play(self, player, &card);
        Ok(())
    }

    /// Play every treasure in the hand, lowest position first.
    pub fn autoplay_treasures(&mut self, player: PlayerId) -> Result<()> {
        let treasures: Vec<CardId> = self.players[player]
            .hand
            .iter()
            .filter(|card| card.is_treasure())
            .map(Card::id)
            .collect();
        for id in treasures {
            if self.players[player].hand.contains(id) {
                self.play(player, id)?;
            }
        }
        Ok(())
    }

    /// Gain a card from the supply into the discard pile.
    pub fn gain(&mut self, player: PlayerId, name: &str) -> Result<Card> {
        let card = self.supply.gain_card(name)?;
        self.players[player].discard_pile.add(card.clone());
        debug!(%player, %card, "gained");
        EffectRegistry::on_gain(self, player, &card);
        Ok(card)
    }

    /// Buy a card from the supply.
    ///
    /// Money is checked before buys. Fires one merged pass over gain and
    /// buy effects instead of a separate gain event.
    pub fn buy(&mut self, player: PlayerId, name: &str) -> Result<Card> {
        let pile = self
            .supply
            .pile(name)
            .ok_or_else(|| GameError::PileNotFound(name.to_string()))?;
        let cost = pile
            .cards
            .top()
            .map(Card::cost)
            .ok_or_else(|| GameError::EmptyPile(name.to_string()))?;

        let state = self.players[player].state;
        if cost > state.money {
            return Err(GameError::InsufficientMoney {
                player,
                card: name.to_string(),
                available: state.money,
                cost,
            });
        }
        if state.buys == 0 {
            return Err(GameError::InsufficientBuys {
                player,
                card: name.to_string(),
            });
        }

        let card = self.supply.gain_card(name)?;
        let seat = &mut self.players[player];
        seat.state.money -= cost;
        seat.state.buys -= 1;
        seat.discard_pile.add(card.clone());

        debug!(%player, %card, cost, "bought");
        EffectRegistry::on_buy(self, player, &card);
        Ok(card)
    }

    /// Discard a card from the hand.
    pub fn discard(&mut self, player: PlayerId, id: CardId) -> Result<()> {
        let card = self.remove_from_hand(player, id)?;
        self.discard_card(player, card);
        Ok(())
    }

    /// Trash a card from the hand.
    pub fn trash(&mut self, player: PlayerId, id: CardId) -> Result<()> {
        let card = self.remove_from_hand(player, id)?;
        self.trash.add(card.clone());
        debug!(%player, %card, "trashed");
        EffectRegistry::on_trash(self, player, &card);
        Ok(())
    }

    /// Reveal a card. The card does not move.
    pub fn reveal(&mut self, player: PlayerId, card: &Card) {
        debug!(%player, %card, "revealed");
        EffectRegistry::on_reveal(self, player, card);
    }

    // === Attacks ===

    /// Resolve an attack against one defender. Returns whether it lands.
    pub fn attack_player(&mut self, attacker: PlayerId, defender: PlayerId, card: &Card) -> bool {
        let hit = EffectRegistry::on_attack(self, attacker, defender, card);
        debug!(%attacker, %defender, %card, hit, "attack resolved");
        hit
    }

    /// Attack every opponent in seat order. Returns the defenders hit.
    pub fn attack(&mut self, attacker: PlayerId, card: &Card) -> Vec<PlayerId> {
        attacker
            .opponents(self.player_count())
            .filter(|&defender| self.attack_player(attacker, defender, card))
            .collect()
    }

    fn discard_card(&mut self, player: PlayerId, card: Card) {
        self.players[player].discard_pile.add(card.clone());
        debug!(%player, %card, "discarded");
        EffectRegistry::on_discard(self, player, &card);
    }
}

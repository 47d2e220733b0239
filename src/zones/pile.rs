//! Ordered card piles.
//!
//! A `Pile` is any ordered stack of physical cards: a deck, a hand, a
//! discard pile, a playmat, the trash, or one supply pile. Cards are stored
//! bottom to top, so the last element is the top card.
//!
//! Backed by `im::Vector`, so cloning a whole game's zones is O(1).

use im::Vector;

use crate::cards::{Card, CardId};
use crate::core::rng::GameRng;

/// Position for inserting a card into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PilePosition {
    /// Add on top (drawn next).
    Top,
    /// Add at the bottom.
    Bottom,
    /// Insert at a specific index (0 = bottom). Clamped to the pile size.
    Index(usize),
}

#[derive(Clone, Debug, Default)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Add a card on top.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn add_at(&mut self, card: Card, position: PilePosition) {
        match position {
            PilePosition::Top => self.cards.push_back(card),
            PilePosition::Bottom => self.cards.push_front(card),
            PilePosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
        }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Remove a specific card by id.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let idx = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(idx))
    }

    /// Remove the topmost card with the given name.
    pub fn remove_named(&mut self, name: &str) -> Option<Card> {
        let idx = self.cards.iter().rposition(|c| c.name() == name)?;
        Some(self.cards.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Count cards with the given name.
    #[must_use]
    pub fn count_named(&self, name: &str) -> usize {
        self.cards.iter().filter(|c| c.name() == name).count()
    }

    /// Remove every card, returning them bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards).into_iter().collect()
    }

    /// Move every card from `other` on top of this pile, keeping their order.
    pub fn append(&mut self, other: &mut Pile) {
        self.cards.append(std::mem::take(&mut other.cards));
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = std::mem::take(&mut self.cards).into_iter().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Names of the cards, bottom to top.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(Card::name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRegistry;

    fn cards(names: &[&str]) -> Vec<Card> {
        let registry = CardRegistry::with_basic_cards();
        names
            .iter()
            .enumerate()
            .map(|(i, name)| registry.instantiate(name, CardId::new(i as u32)).unwrap())
            .collect()
    }

    #[test]
    fn test_draw_from_top() {
        let mut pile = Pile::from_cards(cards(&["Copper", "Estate", "Silver"]));

        assert_eq!(pile.top().map(Card::name), Some("Silver"));
        assert_eq!(pile.draw().map(|c| c.id()), Some(CardId::new(2)));
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_positions() {
        let [a, b, c]: [Card; 3] = cards(&["Copper", "Estate", "Silver"]).try_into().unwrap();
        let mut pile = Pile::new();

        pile.add_at(a, PilePosition::Top);
        pile.add_at(b, PilePosition::Bottom);
        pile.add_at(c, PilePosition::Index(1));

        assert_eq!(pile.names(), vec!["Estate", "Silver", "Copper"]);
    }

    #[test]
    fn test_remove_by_id_and_name() {
        let mut pile = Pile::from_cards(cards(&["Copper", "Estate", "Copper"]));

        assert!(pile.remove(CardId::new(9)).is_none());
        assert_eq!(pile.remove(CardId::new(1)).map(|c| c.id()), Some(CardId::new(1)));

        let copper = pile.remove_named("Copper").unwrap();
        assert_eq!(copper.id(), CardId::new(2));
        assert_eq!(pile.count_named("Copper"), 1);
    }

    #[test]
    fn test_append_and_take_all() {
        let mut all = cards(&["Copper", "Estate", "Silver"]);
        let third = all.pop().unwrap();
        let mut deck = Pile::from_cards(all);
        let mut discard = Pile::from_cards([third]);

        deck.append(&mut discard);
        assert!(discard.is_empty());
        assert_eq!(deck.names(), vec!["Copper", "Estate", "Silver"]);

        let taken = deck.take_all();
        assert_eq!(taken.len(), 3);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let names = ["Copper"; 20];
        let mut pile = Pile::from_cards(cards(&names));
        let before: Vec<_> = pile.iter().map(Card::id).collect();

        pile.shuffle(&mut GameRng::new(42));

        let mut after: Vec<_> = pile.iter().map(Card::id).collect();
        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }
}

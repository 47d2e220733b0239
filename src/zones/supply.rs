//! The supply: shared piles cards are gained from.

use rustc_hash::FxHashMap;

use super::pile::Pile;
use crate::cards::Card;
use crate::core::error::{GameError, Result};

/// One named supply pile.
#[derive(Clone, Debug)]
pub struct SupplyPile {
    pub name: String,
    pub cards: Pile,
}

/// Collection of supply piles, kept in setup order.
///
/// Cards in the supply are neutral until gained.
#[derive(Clone, Debug, Default)]
pub struct Supply {
    piles: Vec<SupplyPile>,
    index: FxHashMap<String, usize>,
}

impl Supply {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile. Panics if a pile with the same name exists.
    pub fn add_pile(&mut self, name: impl Into<String>, cards: Pile) {
        let name = name.into();
        assert!(
            !self.index.contains_key(&name),
            "Supply pile {name:?} already exists"
        );
        self.index.insert(name.clone(), self.piles.len());
        self.piles.push(SupplyPile { name, cards });
    }

    /// Take the top card of the named pile.
    ///
    /// Fails with `PileNotFound` for an unknown name and `EmptyPile` once
    /// the pile is exhausted.
    pub fn gain_card(&mut self, name: &str) -> Result<Card> {
        let &idx = self
            .index
            .get(name)
            .ok_or_else(|| GameError::PileNotFound(name.to_string()))?;

        self.piles[idx]
            .cards
            .draw()
            .ok_or_else(|| GameError::EmptyPile(name.to_string()))
    }

    /// Put a card back on top of its pile.
    pub fn return_card(&mut self, card: Card) -> Result<()> {
        let &idx = self
            .index
            .get(card.name())
            .ok_or_else(|| GameError::PileNotFound(card.name().to_string()))?;
        self.piles[idx].cards.add(card);
        Ok(())
    }

    #[must_use]
    pub fn pile(&self, name: &str) -> Option<&SupplyPile> {
        self.index.get(name).map(|&idx| &self.piles[idx])
    }

    /// Cards left in the named pile, or `None` for an unknown pile.
    #[must_use]
    pub fn pile_len(&self, name: &str) -> Option<usize> {
        self.pile(name).map(|p| p.cards.len())
    }

    /// Top card of the named pile, without taking it.
    #[must_use]
    pub fn peek(&self, name: &str) -> Option<&Card> {
        self.pile(name).and_then(|p| p.cards.top())
    }

    #[must_use]
    pub fn empty_pile_count(&self) -> usize {
        self.piles.iter().filter(|p| p.cards.is_empty()).count()
    }

    pub fn piles(&self) -> impl Iterator<Item = &SupplyPile> {
        self.piles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardRegistry};

    fn supply_with(name: &str, count: u32) -> Supply {
        let registry = CardRegistry::with_basic_cards();
        let cards = (0..count).map(|i| registry.instantiate(name, CardId::new(i)).unwrap());
        let mut supply = Supply::new();
        supply.add_pile(name, Pile::from_cards(cards));
        supply
    }

    #[test]
    fn test_gain_until_empty() {
        let mut supply = supply_with("Duchy", 2);

        assert!(supply.gain_card("Duchy").is_ok());
        assert!(supply.gain_card("Duchy").is_ok());
        assert_eq!(supply.pile_len("Duchy"), Some(0));
        assert_eq!(
            supply.gain_card("Duchy"),
            Err(GameError::EmptyPile("Duchy".into()))
        );
        assert_eq!(supply.empty_pile_count(), 1);
    }

    #[test]
    fn test_unknown_pile() {
        let mut supply = supply_with("Duchy", 1);
        assert_eq!(
            supply.gain_card("Smithy"),
            Err(GameError::PileNotFound("Smithy".into()))
        );
        assert_eq!(supply.pile_len("Smithy"), None);
    }

    #[test]
    fn test_return_card() {
        let mut supply = supply_with("Estate", 1);
        let estate = supply.gain_card("Estate").unwrap();

        supply.return_card(estate).unwrap();
        assert_eq!(supply.pile_len("Estate"), Some(1));
        assert_eq!(supply.peek("Estate").map(Card::id), Some(CardId::new(0)));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_duplicate_pile_panics() {
        let mut supply = supply_with("Gold", 1);
        supply.add_pile("Gold", Pile::new());
    }
}

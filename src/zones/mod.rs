//! Card zones.
//!
//! ## Key Types
//!
//! - `Pile`: ordered card stack (deck, hand, discard, playmat, trash)
//! - `PilePosition`: insertion position for piles
//! - `Supply`: named shared piles cards are gained from

pub mod pile;
pub mod supply;

pub use pile::{Pile, PilePosition};
pub use supply::{Supply, SupplyPile};

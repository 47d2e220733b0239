//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: printed card data (name, cost, types, value)
//! - `CardId`: identifier for one physical card in a game
//! - `Card`: a physical card, sharing its definition
//! - `CardRegistry`: definition lookup by name

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardType};
pub use instance::{Card, CardId};
pub use registry::CardRegistry;

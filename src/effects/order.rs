//! Effect ordering classes.

use serde::{Deserialize, Serialize};

/// How an effect takes part in ordering when several trigger together.
///
/// - `Hidden` effects are engine bookkeeping. They always fire first, in
///   registration order, and are never shown to a player.
/// - `OrderRequired` effects have rules-significant relative order. Once
///   at least one triggers, it and every triggered `OrderNotRequired`
///   effect form one pool that the deciding player orders.
/// - `OrderNotRequired` effects fire in registration order when no
///   `OrderRequired` effect triggered alongside them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectOrder {
    Hidden,
    OrderRequired,
    OrderNotRequired,
}

impl EffectOrder {
    /// Whether effects of this class can ever be shown to a player for ordering.
    #[must_use]
    pub const fn is_player_facing(self) -> bool {
        !matches!(self, EffectOrder::Hidden)
    }
}

impl std::fmt::Display for EffectOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EffectOrder::Hidden => "hidden",
            EffectOrder::OrderRequired => "order-required",
            EffectOrder::OrderNotRequired => "order-not-required",
        };
        f.write_str(name)
    }
}

#![deny(warnings)]

//! Economic models: pricing, demand drift and trader rolls for Mystic Brews.
//!
//! This crate provides validated utilities for:
//! - Shop prices with buy markup / sell markdown scaled by potion demand
//! - Effect-driven price modifiers (Market Insight, Merchant's Tongue)
//! - NPC trade prices with interest premium
//! - Seeded demand drift and NPC roster rolls (see [`market`] and [`roster`])

pub mod market;
pub mod roster;

use brew_core::{ActiveEffects, EffectKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shop markup applied when the player buys.
pub const BUY_MARKUP: f64 = 1.2;
/// Shop markdown applied when the player sells.
pub const SELL_MARKDOWN: f64 = 0.8;
/// Sell bonus while Market Insight is active.
pub const MARKET_INSIGHT_SELL_BONUS: f64 = 1.2;
/// Buy discount while haggling.
pub const HAGGLING_BUY_FACTOR: f64 = 0.85;
/// Sell bonus while haggling.
pub const HAGGLING_SELL_FACTOR: f64 = 1.15;
/// Premium an NPC pays for the potion it is interested in.
pub const INTEREST_PREMIUM: f64 = 1.5;

/// Errors produced by economic helpers.
#[derive(Debug, Error, PartialEq)]
pub enum EconError {
    /// Demand multiplier must be finite and > 0.
    #[error("invalid demand multiplier: {0}")]
    InvalidDemand(f64),
    /// NPC price modifier must be finite and > 0.
    #[error("invalid price modifier: {0}")]
    InvalidModifier(f64),
}

/// Which way gold flows in a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSide {
    /// Player pays the shop.
    Buy,
    /// Player is paid.
    Sell,
}

/// Effects that change prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceModifiers {
    pub market_insight: bool,
    pub haggling: bool,
}

impl PriceModifiers {
    pub fn from_effects(effects: &ActiveEffects) -> Self {
        Self {
            market_insight: effects.is_active(EffectKind::MarketInsight),
            haggling: effects.is_active(EffectKind::Haggling),
        }
    }
}

/// Round to the nearest whole gold piece, saturating at the u32 range.
pub fn round_price(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u32::MAX as f64) as u32
}

fn check_demand(demand: f64) -> Result<(), EconError> {
    if !demand.is_finite() || demand <= 0.0 {
        return Err(EconError::InvalidDemand(demand));
    }
    Ok(())
}

/// Shop price before effects: base × demand × (1.2 buying | 0.8 selling).
///
/// Example:
/// let p = shop_price(25, 1.0, PriceSide::Buy).unwrap();
/// assert_eq!(p, 30);
pub fn shop_price(base_price: u32, demand: f64, side: PriceSide) -> Result<u32, EconError> {
    check_demand(demand)?;
    let markup = match side {
        PriceSide::Buy => BUY_MARKUP,
        PriceSide::Sell => SELL_MARKDOWN,
    };
    Ok(round_price(base_price as f64 * demand * markup))
}

/// Applies active effects to an already demand-adjusted price.
///
/// Market Insight multiplies sale prices by 1.2. Haggling multiplies buy
/// prices by 0.85 and sale prices by 1.15. Both compose multiplicatively.
///
/// Example:
/// let mods = PriceModifiers { market_insight: true, haggling: true };
/// assert_eq!(modified_price(100, PriceSide::Sell, mods), 138);
pub fn modified_price(price: u32, side: PriceSide, mods: PriceModifiers) -> u32 {
    let mut factor = 1.0;
    if side == PriceSide::Sell && mods.market_insight {
        factor *= MARKET_INSIGHT_SELL_BONUS;
    }
    if mods.haggling {
        factor *= match side {
            PriceSide::Buy => HAGGLING_BUY_FACTOR,
            PriceSide::Sell => HAGGLING_SELL_FACTOR,
        };
    }
    round_price(price as f64 * factor)
}

/// What an NPC offers for one potion before effects:
/// base × demand × npc modifier × (1.5 if interested).
pub fn npc_trade_price(
    base_price: u32,
    demand: f64,
    npc_modifier: f64,
    interested: bool,
) -> Result<u32, EconError> {
    check_demand(demand)?;
    if !npc_modifier.is_finite() || npc_modifier <= 0.0 {
        return Err(EconError::InvalidModifier(npc_modifier));
    }
    let premium = if interested { INTEREST_PREMIUM } else { 1.0 };
    Ok(round_price(base_price as f64 * demand * npc_modifier * premium))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shop_markup_and_markdown() {
        assert_eq!(shop_price(25, 1.0, PriceSide::Buy).unwrap(), 30);
        assert_eq!(shop_price(25, 1.0, PriceSide::Sell).unwrap(), 20);
        assert_eq!(shop_price(50, 1.5, PriceSide::Sell).unwrap(), 60);
    }

    #[test]
    fn shop_rejects_bad_demand() {
        assert_eq!(
            shop_price(10, 0.0, PriceSide::Buy),
            Err(EconError::InvalidDemand(0.0))
        );
        assert!(shop_price(10, f64::INFINITY, PriceSide::Buy).is_err());
    }

    #[test]
    fn modifiers_compose() {
        let none = PriceModifiers::default();
        assert_eq!(modified_price(100, PriceSide::Sell, none), 100);
        let insight = PriceModifiers { market_insight: true, haggling: false };
        assert_eq!(modified_price(100, PriceSide::Sell, insight), 120);
        assert_eq!(modified_price(100, PriceSide::Buy, insight), 100);
        let haggle = PriceModifiers { market_insight: false, haggling: true };
        assert_eq!(modified_price(100, PriceSide::Buy, haggle), 85);
        assert_eq!(modified_price(100, PriceSide::Sell, haggle), 115);
        let both = PriceModifiers { market_insight: true, haggling: true };
        assert_eq!(modified_price(100, PriceSide::Sell, both), 138);
        assert_eq!(modified_price(100, PriceSide::Buy, both), 85);
    }

    #[test]
    fn modifiers_follow_active_effects() {
        let mut e = ActiveEffects::default();
        assert_eq!(PriceModifiers::from_effects(&e), PriceModifiers::default());
        e.set_timer(EffectKind::Haggling, 1);
        assert!(PriceModifiers::from_effects(&e).haggling);
    }

    #[test]
    fn interested_npc_pays_premium() {
        let plain = npc_trade_price(40, 1.0, 1.0, false).unwrap();
        let keen = npc_trade_price(40, 1.0, 1.0, true).unwrap();
        assert_eq!(plain, 40);
        assert_eq!(keen, 60);
        assert!(npc_trade_price(40, 1.0, f64::NAN, true).is_err());
    }

    proptest! {
        #[test]
        fn buy_never_cheaper_than_sell(base in 0u32..10_000, demand in 0.5f64..1.5) {
            let b = shop_price(base, demand, PriceSide::Buy).unwrap();
            let s = shop_price(base, demand, PriceSide::Sell).unwrap();
            prop_assert!(b >= s);
        }

        #[test]
        fn haggling_buy_never_raises_price(price in 0u32..100_000) {
            let mods = PriceModifiers { market_insight: false, haggling: true };
            prop_assert!(modified_price(price, PriceSide::Buy, mods) <= price);
        }
    }
}

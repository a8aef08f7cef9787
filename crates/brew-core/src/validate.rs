//! Shape and invariant checks for a [`GameState`], used before trusting a
//! restored snapshot.

use crate::effects::{EffectSlot, EffectValue};
use crate::garden::Garden;
use crate::inventory::Ledger;
use crate::item::CatalogItem;
use crate::state::{GameState, MAX_DAYS, MAX_DEMAND, MAX_GOLD, MIN_DEMAND};
use std::collections::BTreeSet;
use thiserror::Error;

/// Validation errors for state invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Day counter starts at 1.
    #[error("days_passed must be >= 1")]
    DayZero,
    /// Day counter beyond [`MAX_DAYS`].
    #[error("days_passed {0} exceeds {MAX_DAYS}")]
    DayOutOfRange(u32),
    /// Gold balance beyond [`MAX_GOLD`] in either direction.
    #[error("gold {0} out of range")]
    GoldOutOfRange(i64),
    /// Garden has no plots or more unlocked plots than exist.
    #[error("unlocked plots {unlocked} out of range for {plots} plots")]
    UnlockedOutOfRange { unlocked: usize, plots: usize },
    /// A plot grew past its ingredient's growth time.
    #[error("plot {0} growth stage exceeds growth time")]
    GrowthStageOutOfRange(usize),
    /// Ingredient with zero growth time.
    #[error("ingredient {0} has zero growth time")]
    ZeroGrowthTime(String),
    /// Held stack with zero units.
    #[error("inventory stack {0} has zero quantity")]
    ZeroQuantity(String),
    /// Two stacks share an id within one category.
    #[error("duplicate inventory stack {0}")]
    DuplicateStack(String),
    /// Demand multiplier outside [0.5, 1.5] or not finite.
    #[error("demand for {potion} out of range: {value}")]
    DemandOutOfRange { potion: String, value: f64 },
    /// NPC price modifier must be finite and positive.
    #[error("npc {0} has an invalid price modifier")]
    InvalidPriceModifier(String),
    /// Stored effect value does not match the effect's slot.
    #[error("effect {0} stored with the wrong value type")]
    EffectSlotMismatch(String),
}

/// Validate a garden's plot count, unlocked count and growth stages.
pub fn validate_garden(g: &Garden) -> Result<(), ValidationError> {
    if g.plots.is_empty() || g.unlocked > g.plots.len() {
        return Err(ValidationError::UnlockedOutOfRange {
            unlocked: g.unlocked,
            plots: g.plots.len(),
        });
    }
    for (i, plot) in g.plots.iter().enumerate() {
        if let Some(p) = plot {
            if p.ingredient.growth_time == 0 {
                return Err(ValidationError::ZeroGrowthTime(p.ingredient.id.to_string()));
            }
            if p.growth_stage > p.ingredient.growth_time {
                return Err(ValidationError::GrowthStageOutOfRange(i));
            }
        }
    }
    Ok(())
}

/// Validate a ledger holds unique, non-empty stacks.
pub fn validate_ledger<T: CatalogItem>(l: &Ledger<T>) -> Result<(), ValidationError> {
    let mut ids = BTreeSet::new();
    for s in l.iter() {
        if s.quantity == 0 {
            return Err(ValidationError::ZeroQuantity(s.item.id().to_string()));
        }
        if !ids.insert(s.item.id()) {
            return Err(ValidationError::DuplicateStack(s.item.id().to_string()));
        }
    }
    Ok(())
}

/// Validate the whole state.
pub fn validate_state(s: &GameState) -> Result<(), ValidationError> {
    if s.days_passed == 0 {
        return Err(ValidationError::DayZero);
    }
    if s.days_passed > MAX_DAYS {
        return Err(ValidationError::DayOutOfRange(s.days_passed));
    }
    if !(-MAX_GOLD..=MAX_GOLD).contains(&s.gold) {
        return Err(ValidationError::GoldOutOfRange(s.gold));
    }
    validate_garden(&s.garden)?;
    validate_ledger(&s.inventory.ingredients)?;
    validate_ledger(&s.inventory.potions)?;
    validate_ledger(&s.inventory.tools)?;
    for (id, &value) in &s.market_demand {
        if !value.is_finite() || !(MIN_DEMAND..=MAX_DEMAND).contains(&value) {
            return Err(ValidationError::DemandOutOfRange {
                potion: id.to_string(),
                value,
            });
        }
    }
    for n in &s.npcs {
        if !n.price_modifier.is_finite() || n.price_modifier <= 0.0 {
            return Err(ValidationError::InvalidPriceModifier(n.id.to_string()));
        }
    }
    for (kind, value) in s.active_effects.iter() {
        let ok = matches!(
            (kind.slot(), value),
            (EffectSlot::Timer, EffectValue::Timer(_)) | (EffectSlot::Flag, EffectValue::Flag(_))
        );
        if !ok {
            return Err(ValidationError::EffectSlotMismatch(kind.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::effects::ActiveEffects;
    use crate::garden::PlotState;
    use crate::ids::ItemId;
    use crate::inventory::Inventory;
    use std::collections::BTreeMap;

    fn state() -> GameState {
        let c = catalog();
        let mut demand = BTreeMap::new();
        demand.insert(c.potions[0].id.clone(), 1.0);
        GameState {
            gold: 100,
            inventory: Inventory::default(),
            garden: Garden::default(),
            days_passed: 1,
            market_demand: demand,
            npcs: vec![],
            active_effects: ActiveEffects::default(),
            rare_offer: None,
            tasks: vec![],
        }
    }

    #[test]
    fn fresh_state_is_valid() {
        validate_state(&state()).unwrap();
    }

    #[test]
    fn demand_outside_band_is_rejected() {
        let mut s = state();
        s.market_demand.insert(ItemId::from("potion_luck"), 1.7);
        assert!(matches!(
            validate_state(&s),
            Err(ValidationError::DemandOutOfRange { .. })
        ));
        s.market_demand.insert(ItemId::from("potion_luck"), f64::NAN);
        assert!(validate_state(&s).is_err());
    }

    #[test]
    fn runaway_day_and_gold_are_rejected() {
        let mut s = state();
        s.days_passed = MAX_DAYS;
        validate_state(&s).unwrap();
        s.days_passed = 429_496_730;
        assert_eq!(validate_state(&s), Err(ValidationError::DayOutOfRange(429_496_730)));
        let mut s = state();
        s.gold = i64::MAX;
        assert_eq!(validate_state(&s), Err(ValidationError::GoldOutOfRange(i64::MAX)));
        s.gold = -MAX_GOLD;
        validate_state(&s).unwrap();
    }

    #[test]
    fn overgrown_plot_is_rejected() {
        let mut s = state();
        let mint = catalog().ingredient(&ItemId::from("herb_mint")).cloned().unwrap();
        let mut p = PlotState::new(mint, 1);
        p.growth_stage = 3;
        s.garden.plots[2] = Some(p);
        assert_eq!(
            validate_state(&s),
            Err(ValidationError::GrowthStageOutOfRange(2))
        );
    }

    #[test]
    fn unlocked_beyond_plots_is_rejected() {
        let mut s = state();
        s.garden.unlocked = 10;
        assert!(matches!(
            validate_state(&s),
            Err(ValidationError::UnlockedOutOfRange { unlocked: 10, plots: 9 })
        ));
    }

    #[test]
    fn flag_stored_as_timer_is_rejected() {
        let mut s = state();
        let json = serde_json::json!({ "rare_trader_next_day": 2 });
        s.active_effects = serde_json::from_value(json).unwrap();
        assert_eq!(
            validate_state(&s),
            Err(ValidationError::EffectSlotMismatch("rare_trader_next_day".into()))
        );
    }

    #[test]
    fn zero_quantity_stack_is_rejected() {
        let mut s = state();
        s.inventory
            .tools
            .add(catalog().tools[0].clone(), 0);
        assert_eq!(
            validate_state(&s),
            Err(ValidationError::ZeroQuantity("tool_mortar".into()))
        );
    }
}

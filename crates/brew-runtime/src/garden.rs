//! Planting, harvesting and buying plots.

use crate::error::GameError;
use crate::inventory::{adjust_gold, stash};
use crate::tasks::record_progress;
use crate::Outcome;
use brew_core::{GameState, Item, ItemId, PlotState, TaskKind, PLOT_UNLOCK_COST};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

/// Units a ripe plot yields.
pub const HARVEST_YIELD: RangeInclusive<u32> = 2..=4;

fn check_plot(state: &GameState, plot: usize) -> Result<(), GameError> {
    if plot >= state.garden.total_plots() {
        return Err(GameError::NoSuchPlot(plot));
    }
    if !state.garden.is_unlocked(plot) {
        return Err(GameError::PlotLocked(plot));
    }
    Ok(())
}

/// Puts one held unit of `ingredient` into an empty, unlocked plot.
pub fn plant(state: &GameState, plot: usize, ingredient: &ItemId) -> Result<Outcome, GameError> {
    check_plot(state, plot)?;
    if state.garden.plot(plot).is_some() {
        return Err(GameError::PlotOccupied(plot));
    }
    let seed = state
        .inventory
        .ingredients
        .get(ingredient)
        .map(|s| s.item.clone())
        .ok_or_else(|| GameError::NotHeld(ingredient.clone()))?;

    let mut work = Outcome::begin(state);
    work.state.inventory.ingredients.remove(ingredient, 1);
    let name = seed.name.clone();
    work.state.garden.plots[plot] = Some(PlotState::new(seed, state.days_passed));
    debug!(plot, ingredient = %ingredient, "planted");
    work.notify("Planted", format!("{name} planted in plot {}.", plot + 1));
    Ok(work)
}

/// Clears a ripe plot and stores 2 to 4 units of its ingredient.
///
/// Returns the number of units harvested before any duplication.
pub fn harvest<R: Rng + ?Sized>(
    state: &GameState,
    plot: usize,
    rng: &mut R,
) -> Result<Outcome<u32>, GameError> {
    check_plot(state, plot)?;
    let planted = state.garden.plot(plot).ok_or(GameError::PlotEmpty(plot))?;
    if !planted.is_ready() {
        return Err(GameError::PlotNotReady(plot));
    }
    let ingredient = planted.ingredient.clone();

    let mut work = Outcome::begin(state);
    let units = rng.gen_range(HARVEST_YIELD);
    work.state.garden.plots[plot] = None;
    let name = ingredient.name.clone();
    stash(&mut work, Item::Ingredient(ingredient), units, rng);
    record_progress(&mut work, TaskKind::Harvest, units);
    debug!(plot, units, "harvested");
    work.notify("Harvest", format!("You harvested {units} {name}."));
    Ok(work.with(units))
}

/// Permanently opens the next plot for [`PLOT_UNLOCK_COST`] gold.
pub fn unlock_plot(state: &GameState) -> Result<Outcome, GameError> {
    if state.garden.is_full() {
        return Err(GameError::GardenFull);
    }
    if state.gold < PLOT_UNLOCK_COST {
        return Err(GameError::InsufficientGold {
            needed: PLOT_UNLOCK_COST,
            available: state.gold,
        });
    }
    let mut work = Outcome::begin(state);
    adjust_gold(&mut work, -PLOT_UNLOCK_COST);
    work.state.garden.unlocked += 1;
    work.notify(
        "Plot Unlocked",
        format!("Your garden now has {} usable plots.", work.state.garden.unlocked),
    );
    Ok(work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::advance_day;
    use crate::testkit::{holding, rng};
    use brew_core::MAX_PLOTS;
    use proptest::prelude::*;

    fn mint() -> ItemId {
        ItemId::from("herb_mint")
    }

    #[test]
    fn mint_grows_in_two_days_and_yields_two_to_four() {
        let s = holding(&[("herb_mint", 1)]);
        let mut r = rng(5);
        let s = plant(&s, 0, &mint()).unwrap().state;
        assert!(s.inventory.ingredients.is_empty());
        assert_eq!(s.garden.plot(0).unwrap().planted, 1);
        let s = advance_day(&s, &mut r).state;
        let s = advance_day(&s, &mut r).state;
        assert_eq!(s.garden.plot(0).unwrap().growth_stage, 2);
        let out = harvest(&s, 0, &mut r).unwrap();
        let held = out.state.inventory.ingredients.quantity(&mint());
        assert!((2..=4).contains(&held));
        assert_eq!(held, out.value);
        assert!(out.state.garden.plot(0).is_none());
    }

    #[test]
    fn planting_rules() {
        let s = holding(&[("herb_mint", 2)]);
        assert_eq!(plant(&s, 9, &mint()).unwrap_err(), GameError::NoSuchPlot(9));
        assert_eq!(plant(&s, 4, &mint()).unwrap_err(), GameError::PlotLocked(4));
        assert_eq!(
            plant(&s, 0, &ItemId::from("herb_sage")).unwrap_err(),
            GameError::NotHeld(ItemId::from("herb_sage"))
        );
        let s = plant(&s, 0, &mint()).unwrap().state;
        assert_eq!(plant(&s, 0, &mint()).unwrap_err(), GameError::PlotOccupied(0));
    }

    #[test]
    fn harvest_rejects_empty_and_unripe() {
        let s = holding(&[("herb_mint", 1)]);
        let mut r = rng(1);
        assert_eq!(harvest(&s, 2, &mut r).unwrap_err(), GameError::PlotEmpty(2));
        let s = plant(&s, 2, &mint()).unwrap().state;
        assert_eq!(harvest(&s, 2, &mut r).unwrap_err(), GameError::PlotNotReady(2));
    }

    #[test]
    fn unlock_costs_fifty_until_full() {
        let mut s = holding(&[]);
        s.gold = 49;
        assert!(matches!(
            unlock_plot(&s).unwrap_err(),
            GameError::InsufficientGold { needed: 50, available: 49 }
        ));
        s.gold = 500;
        let out = unlock_plot(&s).unwrap();
        assert_eq!(out.state.gold, 450);
        assert_eq!(out.state.garden.unlocked, 5);
        s.garden.unlocked = MAX_PLOTS;
        assert_eq!(unlock_plot(&s).unwrap_err(), GameError::GardenFull);
    }

    proptest! {
        #[test]
        fn growth_and_unlocks_stay_in_bounds(
            seed in any::<u64>(),
            days in 1usize..15,
            accel in any::<bool>(),
        ) {
            let mut s = holding(&[
                ("crystal_ruby", 1),
                ("herb_mint", 1),
                ("potion_garden_expansion", 1),
            ]);
            s = plant(&s, 0, &ItemId::from("crystal_ruby")).unwrap().state;
            s = plant(&s, 1, &mint()).unwrap().state;
            let expansion = ItemId::from("potion_garden_expansion");
            s = crate::activate_potion_effect(&s, &expansion).unwrap().state;
            let mut r = rng(seed);
            for _ in 0..days {
                if accel {
                    s.active_effects.set_timer(brew_core::EffectKind::GrowthAcceleration, 1);
                }
                s = advance_day(&s, &mut r).state;
                for p in s.garden.plots.iter().flatten() {
                    prop_assert!(p.growth_stage <= p.ingredient.growth_time);
                }
                prop_assert!(s.garden.unlocked <= s.garden.total_plots());
                prop_assert!(s.garden.unlocked >= brew_core::STARTING_UNLOCKED_PLOTS);
            }
        }
    }
}

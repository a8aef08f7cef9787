//! The nightly tick.

use crate::Outcome;
use brew_core::{
    catalog, generate_daily_tasks, EffectKind, GameState, STARTING_UNLOCKED_PLOTS,
};
use brew_econ::market::drift_demand;
use brew_econ::roster::{roll_roster, summon_rare_trader};
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::info;

/// Traders are re-rolled on days divisible by this.
pub const ROSTER_REFRESH_DAYS: u32 = 3;

/// Advances the simulation by one day.
///
/// Every step reads the state as it was before the tick. Random draws
/// happen in a fixed order (demand drift, roster, rare offer, tasks) so a
/// seeded RNG replays the same day.
pub fn advance_day<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Outcome {
    let prev = state;
    let mut work = Outcome::begin(state);

    let step = if prev.effect_active(EffectKind::GrowthAcceleration) { 2 } else { 1 };
    for plot in work.state.garden.plots.iter_mut().flatten() {
        *plot = plot.grown(step);
    }

    work.state.market_demand = drift_demand(&prev.market_demand, rng);

    let rare_trader = prev.effect_active(EffectKind::RareTraderNextDay);
    if prev.days_passed % ROSTER_REFRESH_DAYS == 0 || rare_trader {
        let mut npcs = roll_roster(catalog(), rng);
        if rare_trader {
            if let Some(npc) = summon_rare_trader(catalog(), rng) {
                work.notify(
                    "Rare Trader",
                    format!("{} has come to town, paying well for everything.", npc.name),
                );
                npcs.push(npc);
            }
        }
        work.state.npcs = npcs;
    }

    let expansion_expiring = prev.active_effects.remaining(EffectKind::GardenExpansion) == 1;
    work.state.active_effects = prev.active_effects.tick();
    if expansion_expiring && work.state.garden.unlocked > STARTING_UNLOCKED_PLOTS {
        work.state.garden.unlocked -= 1;
        work.notify("Garden's Blessing Faded", "Your extra garden plot has closed.");
    }

    work.state.days_passed = prev.days_passed.saturating_add(1);

    work.state.rare_offer = None;
    if prev.effect_active(EffectKind::RareIngredientNextDay) {
        if let Some(ing) = catalog().rare_ingredients().choose(rng) {
            work.notify("Rare Ingredient", format!("The shop has {} in stock today.", ing.name));
            work.state.rare_offer = Some(ing.id.clone());
        }
    }

    work.state.tasks = generate_daily_tasks(work.state.days_passed, rng);

    info!(
        day = work.state.days_passed,
        gold = work.state.gold,
        npcs = work.state.npcs.len(),
        "new day"
    );
    work
}

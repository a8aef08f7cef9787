//! Day-1 state for a fresh game.

use brew_core::{
    catalog, generate_daily_tasks, ActiveEffects, GameState, Garden, Inventory, STARTING_GOLD,
};
use brew_econ::market::initial_demand;
use brew_econ::roster::roll_roster;
use rand::Rng;

/// Ingredients in the starter kit, taken from the front of the catalog.
pub const STARTER_INGREDIENTS: usize = 3;
/// Units of each starter ingredient.
pub const STARTER_QUANTITY: u32 = 3;

/// Day 1 of a new game.
pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let c = catalog();
    let mut inventory = Inventory::default();
    for ing in c.ingredients.iter().take(STARTER_INGREDIENTS) {
        inventory.ingredients.add(ing.clone(), STARTER_QUANTITY);
    }
    if let Some(tool) = c.tools.first() {
        inventory.tools.add(tool.clone(), 1);
    }
    let market_demand = initial_demand(&c.potions, rng);
    let npcs = roll_roster(c, rng);
    GameState {
        gold: STARTING_GOLD,
        inventory,
        garden: Garden::default(),
        days_passed: 1,
        market_demand,
        npcs,
        active_effects: ActiveEffects::default(),
        rare_offer: None,
        tasks: generate_daily_tasks(1, rng),
    }
}

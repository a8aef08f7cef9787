#![deny(warnings)]

//! Core domain models and invariants for Mystic Brews.
//!
//! This crate defines the serializable game state, the static reference
//! catalogs and the small data structures the day-cycle engine mutates
//! (inventory ledgers, garden plots, active effects, daily tasks), together
//! with validation helpers that guard restored snapshots.

pub mod catalog;
pub mod config;
pub mod effects;
pub mod garden;
pub mod ids;
pub mod inventory;
pub mod item;
pub mod npc;
pub mod state;
pub mod tasks;
pub mod validate;

pub use catalog::{catalog, validate_catalog, Catalog, CatalogError, Recipe, Requirement};
pub use config::{GameConfig, DEFAULT_SAVE_SLOT};
pub use effects::{ActiveEffects, EffectKind, EffectSlot, EffectValue};
pub use garden::{Garden, PlotState, MAX_PLOTS, PLOT_UNLOCK_COST, STARTING_UNLOCKED_PLOTS};
pub use ids::{ItemId, NpcId, RecipeId};
pub use inventory::{Inventory, Ledger, Stack};
pub use item::{CatalogItem, Ingredient, Item, ItemCategory, Potion, Tool};
pub use npc::{Npc, NpcTemplate};
pub use state::{GameState, MAX_DAYS, MAX_DEMAND, MAX_GOLD, MIN_DEMAND, STARTING_GOLD};
pub use tasks::{generate_daily_tasks, Task, TaskKind};
pub use validate::{validate_state, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn effective_requirements_never_drop_below_one(q in 1u32..20, mastery in any::<bool>()) {
            let r = Recipe {
                id: RecipeId::from("recipe_test"),
                potion_id: ItemId::from("potion_test"),
                ingredients: vec![Requirement {
                    ingredient: ItemId::from("herb_mint"),
                    quantity: q,
                }],
            };
            let eff = r.effective_requirements(mastery);
            prop_assert!(eff[0].quantity >= 1);
            prop_assert!(eff[0].quantity <= q);
        }

        #[test]
        fn plot_growth_stays_within_bounds(days in proptest::collection::vec(0u32..4, 0..20)) {
            let ing = catalog().ingredient(&ItemId::from("crystal_ruby")).cloned().unwrap();
            let mut plot = PlotState::new(ing, 1);
            for d in days {
                plot = plot.grown(d);
                prop_assert!(plot.growth_stage <= plot.ingredient.growth_time);
            }
        }
    }
}

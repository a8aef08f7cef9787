//! Brewing potions from held ingredients.

use crate::error::GameError;
use crate::inventory::stash_potion;
use crate::tasks::record_progress;
use crate::Outcome;
use brew_core::{catalog, EffectKind, GameState, Inventory, Recipe, RecipeId, TaskKind};
use tracing::debug;

/// Whether `inventory` covers every effective requirement of `recipe`.
pub fn can_craft(recipe: &Recipe, inventory: &Inventory, crafting_mastery: bool) -> bool {
    recipe
        .effective_requirements(crafting_mastery)
        .iter()
        .all(|r| inventory.ingredients.quantity(&r.ingredient) >= r.quantity)
}

/// Recipes brewable right now, in catalog order.
pub fn craftable_recipes(state: &GameState) -> Vec<&'static Recipe> {
    let mastery = state.effect_active(EffectKind::CraftingMastery);
    catalog()
        .recipes
        .iter()
        .filter(|r| can_craft(r, &state.inventory, mastery))
        .collect()
}

/// Consumes a recipe's ingredients and adds one unit of its potion.
pub fn craft_potion(state: &GameState, recipe_id: &RecipeId) -> Result<Outcome, GameError> {
    let recipe = catalog()
        .recipe(recipe_id)
        .ok_or_else(|| GameError::UnknownRecipe(recipe_id.clone()))?;
    let potion = catalog()
        .potion(&recipe.potion_id)
        .cloned()
        .ok_or_else(|| GameError::UnknownItem(recipe.potion_id.clone()))?;
    let mastery = state.effect_active(EffectKind::CraftingMastery);
    if !can_craft(recipe, &state.inventory, mastery) {
        return Err(GameError::MissingIngredients(recipe_id.clone()));
    }

    let mut work = Outcome::begin(state);
    for req in recipe.effective_requirements(mastery) {
        work.state.inventory.ingredients.remove(&req.ingredient, req.quantity);
    }
    let name = potion.name.clone();
    stash_potion(&mut work, potion, 1);
    record_progress(&mut work, TaskKind::Craft, 1);
    debug!(recipe = %recipe_id, mastery, "potion crafted");
    work.notify("Potion Crafted", format!("You brewed a {name}."));
    Ok(work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::holding;
    use brew_core::ItemId;

    fn healing() -> RecipeId {
        RecipeId::from("recipe_healing")
    }

    #[test]
    fn healing_consumes_exact_ingredients() {
        let s = holding(&[("herb_sage", 2), ("flower_rose", 1), ("root_ginger", 1)]);
        let out = craft_potion(&s, &healing()).unwrap();
        assert!(out.state.inventory.ingredients.is_empty());
        assert_eq!(out.state.inventory.potions.quantity(&ItemId::from("potion_healing")), 1);
        assert!(out.has_notice("Potion Crafted"));
    }

    #[test]
    fn missing_ingredient_changes_nothing() {
        let s = holding(&[("herb_sage", 1), ("flower_rose", 1), ("root_ginger", 1)]);
        assert_eq!(
            craft_potion(&s, &healing()).unwrap_err(),
            GameError::MissingIngredients(healing())
        );
    }

    #[test]
    fn mastery_lowers_requirements_but_not_below_one() {
        let mut s = holding(&[("herb_sage", 1), ("flower_rose", 1), ("root_ginger", 1)]);
        s.active_effects.set_timer(EffectKind::CraftingMastery, 1);
        let out = craft_potion(&s, &healing()).unwrap();
        assert!(out.state.inventory.ingredients.is_empty());

        let recipe = catalog().recipe(&healing()).unwrap();
        let sparse = holding(&[("herb_sage", 1), ("flower_rose", 1)]);
        assert!(!can_craft(recipe, &sparse.inventory, true));
    }

    #[test]
    fn unknown_recipe_is_not_found() {
        let s = holding(&[]);
        let err = craft_potion(&s, &RecipeId::from("recipe_nothing")).unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::NotFound);
    }

    #[test]
    fn craftable_list_tracks_inventory() {
        let s = holding(&[("herb_sage", 2), ("flower_rose", 1), ("root_ginger", 1)]);
        let ids: Vec<_> = craftable_recipes(&s).iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![healing()]);
        assert!(craftable_recipes(&holding(&[])).is_empty());
    }

    #[test]
    fn crafting_advances_craft_tasks() {
        let mut s = holding(&[("herb_sage", 2), ("flower_rose", 1), ("root_ginger", 1)]);
        s.tasks = vec![brew_core::Task::for_day(TaskKind::Craft, 1, 0)];
        let out = craft_potion(&s, &healing()).unwrap();
        assert_eq!(out.state.tasks[0].progress, 1);
    }
}

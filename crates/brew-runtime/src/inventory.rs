//! Adding, removing and paying: the primitives every other operation uses.

use crate::Outcome;
use brew_core::{catalog, EffectKind, GameState, Item, ItemCategory, ItemId, Potion};
use brew_econ::round_price;
use rand::Rng;
use tracing::debug;

/// Chance an ingredient addition is doubled while duplication is active.
pub const DUPLICATION_CHANCE: f64 = 0.3;
/// Base price multiplier for potions made while the quality enhancer is active.
pub const QUALITY_MULTIPLIER: f64 = 1.25;

/// Adds `quantity` units of `item`; zero counts as one.
///
/// Ingredients may be doubled by an active Ingredient Duplicator. Potions
/// made under a Quality Enhancer raise the held stack's base price to 1.25×
/// the catalog price.
pub fn add_to_inventory<R: Rng + ?Sized>(
    state: &GameState,
    item: Item,
    quantity: u32,
    rng: &mut R,
) -> Outcome {
    let mut work = Outcome::begin(state);
    stash(&mut work, item, quantity, rng);
    work
}

/// Removes up to `amount` units; the stack disappears once it would hit zero.
/// Absent items are ignored.
pub fn remove_from_inventory(
    state: &GameState,
    category: ItemCategory,
    id: &ItemId,
    amount: u32,
) -> Outcome {
    let mut work = Outcome::begin(state);
    work.state.inventory.remove(category, id, amount);
    work
}

/// Adds a signed amount of gold.
pub fn update_gold(state: &GameState, amount: i64) -> Outcome {
    let mut work = Outcome::begin(state);
    adjust_gold(&mut work, amount);
    work
}

pub(crate) fn adjust_gold<T>(work: &mut Outcome<T>, amount: i64) {
    work.state.gold = work.state.gold.saturating_add(amount);
    if amount > 0 {
        work.notify("Gold Received", format!("You received {amount} gold."));
    } else if amount < 0 {
        work.notify("Gold Spent", format!("You spent {} gold.", -amount));
    }
}

pub(crate) fn stash<T, R: Rng + ?Sized>(
    work: &mut Outcome<T>,
    item: Item,
    quantity: u32,
    rng: &mut R,
) {
    let quantity = quantity.max(1);
    match item {
        Item::Ingredient(ingredient) => {
            let mut added = quantity;
            if work.state.effect_active(EffectKind::IngredientDuplication)
                && rng.gen_bool(DUPLICATION_CHANCE)
            {
                added = quantity.saturating_mul(2);
                work.notify(
                    "Ingredient Duplication",
                    format!("Your {} multiplied! +{quantity} extra", ingredient.name),
                );
            }
            debug!(item = %ingredient.id, added, "ingredient stored");
            work.state.inventory.ingredients.add(ingredient, added);
        }
        Item::Potion(potion) => stash_potion(work, potion, quantity),
        Item::Tool(tool) => {
            work.state.inventory.tools.add(tool, quantity);
        }
    }
}

pub(crate) fn stash_potion<T>(work: &mut Outcome<T>, potion: Potion, quantity: u32) {
    let enhanced = work.state.effect_active(EffectKind::QualityEnhancer);
    let catalog_price = catalog()
        .potion(&potion.id)
        .map(|p| p.base_price)
        .unwrap_or(potion.base_price);
    let name = potion.name.clone();
    let stack = work.state.inventory.potions.add(potion, quantity.max(1));
    if enhanced {
        let price = round_price(catalog_price as f64 * QUALITY_MULTIPLIER);
        stack.item.base_price = price;
        work.notify(
            "Quality Enhanced",
            format!("Your {name} is of superior quality and now sells from {price} gold."),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{holding, rng};

    fn mint() -> Item {
        catalog().item(&ItemId::from("herb_mint")).unwrap()
    }

    #[test]
    fn add_merges_and_treats_zero_as_one() {
        let s = holding(&[("herb_mint", 2)]);
        let out = add_to_inventory(&s, mint(), 0, &mut rng(1));
        assert_eq!(out.state.inventory.ingredients.quantity(&ItemId::from("herb_mint")), 3);
        assert_eq!(out.state.inventory.ingredients.len(), 1);
    }

    #[test]
    fn duplication_only_ever_doubles() {
        let mut s = holding(&[]);
        s.active_effects.set_timer(EffectKind::IngredientDuplication, 1);
        let mut doubled = 0;
        let mut r = rng(8);
        for _ in 0..200 {
            let out = add_to_inventory(&s, mint(), 3, &mut r);
            let q = out.state.inventory.ingredients.quantity(&ItemId::from("herb_mint"));
            assert!(q == 3 || q == 6);
            if q == 6 {
                doubled += 1;
                assert!(out.has_notice("Ingredient Duplication"));
            }
        }
        assert!(doubled > 20 && doubled < 110, "doubled {doubled} of 200");
    }

    #[test]
    fn no_duplication_without_effect() {
        let s = holding(&[]);
        let mut r = rng(3);
        for _ in 0..50 {
            let out = add_to_inventory(&s, mint(), 2, &mut r);
            assert_eq!(out.state.inventory.ingredients.quantity(&ItemId::from("herb_mint")), 2);
        }
    }

    #[test]
    fn quality_enhancer_reprices_held_stack() {
        let mut s = holding(&[("potion_healing", 1)]);
        s.active_effects.set_timer(EffectKind::QualityEnhancer, 1);
        let healing = catalog().item(&ItemId::from("potion_healing")).unwrap();
        let base = healing.base_price();
        let out = add_to_inventory(&s, healing, 1, &mut rng(0));
        let stack = out.state.inventory.potions.get(&ItemId::from("potion_healing")).unwrap();
        assert_eq!(stack.quantity, 2);
        assert_eq!(stack.item.base_price, round_price(base as f64 * 1.25));
    }

    #[test]
    fn remove_is_silent_when_absent() {
        let s = holding(&[("herb_sage", 2)]);
        let out = remove_from_inventory(&s, ItemCategory::Potion, &ItemId::from("potion_luck"), 1);
        assert_eq!(out.state, s);
        let sage = ItemId::from("herb_sage");
        let out = remove_from_inventory(&s, ItemCategory::Ingredient, &sage, 2);
        assert!(out.state.inventory.ingredients.is_empty());
    }

    #[test]
    fn gold_notices_follow_sign() {
        let s = holding(&[]);
        let out = update_gold(&s, 25);
        assert_eq!(out.state.gold, s.gold + 25);
        assert!(out.has_notice("Gold Received"));
        let out = update_gold(&s, -10);
        assert_eq!(out.state.gold, s.gold - 10);
        assert!(out.has_notice("Gold Spent"));
    }

    #[test]
    fn gold_saturates_instead_of_wrapping() {
        let mut s = holding(&[]);
        s.gold = i64::MAX - 5;
        assert_eq!(update_gold(&s, 50).state.gold, i64::MAX);
        s.gold = i64::MIN + 5;
        assert_eq!(update_gold(&s, -50).state.gold, i64::MIN);
    }
}

//! The village shop: a rotating stock of ingredients and tools, and a buyer
//! for anything the player holds.

use crate::error::GameError;
use crate::inventory::{adjust_gold, stash};
use crate::tasks::{record_progress, record_purchase};
use crate::Outcome;
use brew_core::{catalog, ActiveEffects, GameState, Item, ItemCategory, ItemId, TaskKind};
use brew_econ::{modified_price, shop_price, PriceModifiers, PriceSide};
use rand::Rng;
use tracing::debug;

/// Applies active price effects to an already demand-adjusted price.
pub fn get_modified_price(price: u32, side: PriceSide, effects: &ActiveEffects) -> u32 {
    modified_price(price, side, PriceModifiers::from_effects(effects))
}

/// Items on sale today, in catalog order, followed by the rare offer.
///
/// Ingredient `i` is stocked unless `(i + day) % 3 == 0`; tool `i` unless
/// `(i + day) % 4 == 0`. Potions are never sold.
pub fn shop_stock(state: &GameState) -> Vec<Item> {
    let c = catalog();
    let day = state.days_passed as usize;
    let mut stock: Vec<Item> = c
        .ingredients
        .iter()
        .enumerate()
        .filter(|(i, _)| (i + day) % 3 != 0)
        .map(|(_, ing)| Item::Ingredient(ing.clone()))
        .collect();
    stock.extend(
        c.tools
            .iter()
            .enumerate()
            .filter(|(i, _)| (i + day) % 4 != 0)
            .map(|(_, t)| Item::Tool(t.clone())),
    );
    if let Some(rare) = state.rare_offer.as_ref().and_then(|id| c.ingredient(id)) {
        if !stock.iter().any(|i| i.id() == &rare.id) {
            stock.push(Item::Ingredient(rare.clone()));
        }
    }
    stock
}

fn demand_for(state: &GameState, category: ItemCategory, id: &ItemId) -> f64 {
    match category {
        ItemCategory::Potion => state.demand(id),
        ItemCategory::Ingredient | ItemCategory::Tool => 1.0,
    }
}

/// What the shop charges for one unit of `item` right now.
pub fn buy_price(state: &GameState, item: &Item) -> Result<u32, GameError> {
    let demand = demand_for(state, item.category(), item.id());
    let price = shop_price(item.base_price(), demand, PriceSide::Buy)?;
    Ok(get_modified_price(price, PriceSide::Buy, &state.active_effects))
}

/// What the shop pays for one held unit, using the held stack's base price.
pub fn sell_price(
    state: &GameState,
    category: ItemCategory,
    id: &ItemId,
) -> Result<u32, GameError> {
    let base = state
        .inventory
        .held_base_price(category, id)
        .ok_or_else(|| GameError::NotHeld(id.clone()))?;
    let price = shop_price(base, demand_for(state, category, id), PriceSide::Sell)?;
    Ok(get_modified_price(price, PriceSide::Sell, &state.active_effects))
}

/// Buys `quantity` units of a stocked item.
pub fn buy<R: Rng + ?Sized>(
    state: &GameState,
    item_id: &ItemId,
    quantity: u32,
    rng: &mut R,
) -> Result<Outcome<i64>, GameError> {
    if quantity == 0 {
        return Err(GameError::InvalidQuantity);
    }
    if catalog().item(item_id).is_none() {
        return Err(GameError::UnknownItem(item_id.clone()));
    }
    let item = shop_stock(state)
        .into_iter()
        .find(|i| i.id() == item_id)
        .ok_or_else(|| GameError::NotInStock(item_id.clone()))?;
    let cost = buy_price(state, &item)? as i64 * quantity as i64;
    if state.gold < cost {
        return Err(GameError::InsufficientGold {
            needed: cost,
            available: state.gold,
        });
    }

    let mut work = Outcome::begin(state);
    adjust_gold(&mut work, -cost);
    let name = item.name().to_string();
    stash(&mut work, item, quantity, rng);
    record_purchase(&mut work, item_id);
    debug!(item = %item_id, quantity, cost, "bought");
    work.notify("Purchase", format!("You bought {quantity} {name} for {cost} gold."));
    Ok(work.with(cost))
}

/// Sells `quantity` held units to the shop. Returns the gold earned.
pub fn sell(
    state: &GameState,
    category: ItemCategory,
    item_id: &ItemId,
    quantity: u32,
) -> Result<Outcome<i64>, GameError> {
    if quantity == 0 {
        return Err(GameError::InvalidQuantity);
    }
    let held = state.inventory.quantity(category, item_id);
    if held == 0 {
        return Err(GameError::NotHeld(item_id.clone()));
    }
    if held < quantity {
        return Err(GameError::InsufficientQuantity {
            item: item_id.clone(),
            held,
            wanted: quantity,
        });
    }
    let earned = sell_price(state, category, item_id)? as i64 * quantity as i64;

    let mut work = Outcome::begin(state);
    work.state.inventory.remove(category, item_id, quantity);
    adjust_gold(&mut work, earned);
    record_progress(&mut work, TaskKind::Sell, earned.clamp(0, u32::MAX as i64) as u32);
    debug!(item = %item_id, quantity, earned, "sold to shop");
    Ok(work.with(earned))
}

//! Selling potions directly to the traders in town.

use crate::error::GameError;
use crate::inventory::adjust_gold;
use crate::shop::get_modified_price;
use crate::tasks::record_progress;
use crate::Outcome;
use brew_core::{catalog, GameState, ItemId, NpcId, TaskKind};
use brew_econ::{npc_trade_price, PriceSide};
use tracing::debug;

/// What `npc_id` pays for one `potion_id`, effects included.
///
/// Uses the held stack's base price, falling back to the catalog price for
/// potions not currently held.
pub fn trade_price(
    state: &GameState,
    npc_id: &NpcId,
    potion_id: &ItemId,
) -> Result<u32, GameError> {
    let npc = state
        .npc(npc_id)
        .ok_or_else(|| GameError::UnknownNpc(npc_id.clone()))?;
    let base = state
        .inventory
        .potions
        .get(potion_id)
        .map(|s| s.item.base_price)
        .or_else(|| catalog().potion(potion_id).map(|p| p.base_price))
        .ok_or_else(|| GameError::UnknownItem(potion_id.clone()))?;
    let price = npc_trade_price(
        base,
        state.demand(potion_id),
        npc.price_modifier,
        npc.is_interested_in(potion_id),
    )?;
    Ok(get_modified_price(price, PriceSide::Sell, &state.active_effects))
}

/// Sells one held potion to a trader. Returns the gold earned.
pub fn sell_to_npc(
    state: &GameState,
    npc_id: &NpcId,
    potion_id: &ItemId,
) -> Result<Outcome<u32>, GameError> {
    let npc = state
        .npc(npc_id)
        .ok_or_else(|| GameError::UnknownNpc(npc_id.clone()))?;
    let potion = state
        .inventory
        .potions
        .get(potion_id)
        .ok_or_else(|| GameError::NotHeld(potion_id.clone()))?;
    let price = trade_price(state, npc_id, potion_id)?;
    let (npc_name, potion_name) = (npc.name.clone(), potion.item.name.clone());

    let mut work = Outcome::begin(state);
    work.state.inventory.potions.remove(potion_id, 1);
    adjust_gold(&mut work, price as i64);
    record_progress(&mut work, TaskKind::Sell, price);
    debug!(npc = %npc_id, potion = %potion_id, price, "sold to trader");
    work.notify(
        "Trade Complete",
        format!("{npc_name} bought your {potion_name} for {price} gold."),
    );
    Ok(work.with(price))
}

//! Drinking special potions.

use crate::error::GameError;
use crate::inventory::adjust_gold;
use crate::Outcome;
use brew_core::effects::{GARDEN_EXPANSION_DAYS, STANDARD_EFFECT_DAYS};
use brew_core::{EffectKind, EffectSlot, GameState, ItemId};
use tracing::debug;

/// Units of one ingredient a Gold Transmuter consumes.
pub const TRANSMUTATION_COST: u32 = 5;
/// Gold a Gold Transmuter yields.
pub const TRANSMUTATION_GOLD: i64 = 50;

/// Consumes one unit of `potion_id` and applies its effect.
///
/// Returns the effect that was applied. Any rejection, including ones
/// raised after the potion was consumed, leaves the inventory untouched.
pub fn activate_potion_effect(
    state: &GameState,
    potion_id: &ItemId,
) -> Result<Outcome<EffectKind>, GameError> {
    let name = state
        .inventory
        .potions
        .get(potion_id)
        .map(|s| s.item.name.clone())
        .ok_or_else(|| GameError::NotHeld(potion_id.clone()))?;

    let mut work = Outcome::begin(state);
    work.state.inventory.potions.remove(potion_id, 1);

    let kind = EffectKind::from_potion(potion_id)
        .ok_or_else(|| GameError::NotActivatable(potion_id.clone()))?;
    match (kind, kind.slot()) {
        (EffectKind::GardenExpansion, _) => {
            let garden = &mut work.state.garden;
            if garden.unlocked >= garden.total_plots() {
                return Err(GameError::GardenFull);
            }
            garden.unlocked += 1;
            work.state
                .active_effects
                .set_timer(EffectKind::GardenExpansion, GARDEN_EXPANSION_DAYS);
        }
        (EffectKind::GoldTransmutation, _) => {
            let largest = work
                .state
                .inventory
                .ingredients
                .largest()
                .map(|s| (s.item.id.clone(), s.quantity));
            match largest {
                Some((id, held)) if held >= TRANSMUTATION_COST => {
                    work.state.inventory.ingredients.remove(&id, TRANSMUTATION_COST);
                    adjust_gold(&mut work, TRANSMUTATION_GOLD);
                }
                other => {
                    return Err(GameError::InsufficientIngredient {
                        needed: TRANSMUTATION_COST,
                        held: other.map(|(_, q)| q).unwrap_or(0),
                    })
                }
            }
        }
        (_, EffectSlot::Flag) => work.state.active_effects.raise(kind),
        (_, EffectSlot::Timer) => work.state.active_effects.set_timer(kind, STANDARD_EFFECT_DAYS),
        (_, EffectSlot::OneShot) => return Err(GameError::NotActivatable(potion_id.clone())),
    }

    debug!(potion = %potion_id, effect = %kind, "potion activated");
    work.notify("Potion Activated", format!("You drank the {name}: {kind} is in effect."));
    Ok(work.with(kind))
}

use crate::effects::{ActiveEffects, EffectKind};
use crate::garden::Garden;
use crate::ids::{ItemId, NpcId};
use crate::inventory::Inventory;
use crate::npc::Npc;
use crate::tasks::Task;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gold in a fresh game.
pub const STARTING_GOLD: i64 = 100;
/// Lower bound of a potion's demand multiplier.
pub const MIN_DEMAND: f64 = 0.5;
/// Upper bound of a potion's demand multiplier.
pub const MAX_DEMAND: f64 = 1.5;
/// Largest day counter a restored save may carry.
pub const MAX_DAYS: u32 = 1_000_000;
/// Largest gold balance, in either direction, a restored save may carry.
pub const MAX_GOLD: i64 = 1_000_000_000_000;

/// The whole simulation at one point in time. This is also the save format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Not floored; callers check affordability before spending.
    pub gold: i64,
    pub inventory: Inventory,
    pub garden: Garden,
    /// Current day number, starting at 1.
    pub days_passed: u32,
    /// Potion id to demand multiplier in [MIN_DEMAND, MAX_DEMAND].
    pub market_demand: BTreeMap<ItemId, f64>,
    pub npcs: Vec<Npc>,
    pub active_effects: ActiveEffects,
    /// Rare ingredient the shop stocks today.
    #[serde(default)]
    pub rare_offer: Option<ItemId>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl GameState {
    /// Demand multiplier for `id`; 1.0 for anything without an entry.
    pub fn demand(&self, id: &ItemId) -> f64 {
        self.market_demand.get(id).copied().unwrap_or(1.0)
    }

    pub fn effect_active(&self, kind: EffectKind) -> bool {
        self.active_effects.is_active(kind)
    }

    pub fn npc(&self, id: &NpcId) -> Option<&Npc> {
        self.npcs.iter().find(|n| &n.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

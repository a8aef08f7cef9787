use crate::ids::{ItemId, NpcId};
use serde::{Deserialize, Serialize};

/// Catalog entry for a trader, before interest and price are rolled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NpcTemplate {
    pub id: NpcId,
    pub name: String,
    pub description: String,
    pub dialog: String,
    /// Member of the subset a Trader's Call can summon.
    pub special: bool,
}

/// A trader currently present in town.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    pub description: String,
    pub dialog: String,
    /// Potion this trader pays a premium for.
    pub interest: ItemId,
    /// Multiplier on every price this trader offers.
    pub price_modifier: f64,
}

impl Npc {
    pub fn from_template(t: &NpcTemplate, interest: ItemId, price_modifier: f64) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            description: t.description.clone(),
            dialog: t.dialog.clone(),
            interest,
            price_modifier,
        }
    }

    pub fn is_interested_in(&self, potion: &ItemId) -> bool {
        &self.interest == potion
    }
}

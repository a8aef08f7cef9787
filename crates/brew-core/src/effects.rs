//! Timed gameplay modifiers granted by drinking special potions.
//!
//! Every modifier is keyed by [`EffectKind`] and holds an [`EffectValue`]:
//! a day counter that is active while positive, or a flag consumed by the
//! next day tick. A single [`ActiveEffects::tick`] ages all of them.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Days a Garden's Blessing keeps its extra plot open.
pub const GARDEN_EXPANSION_DAYS: u32 = 3;
/// Days every other timed effect lasts.
pub const STANDARD_EFFECT_DAYS: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Plots grow two stages per day.
    GrowthAcceleration,
    /// Sale prices ×1.2.
    MarketInsight,
    /// Added ingredients may arrive doubled.
    IngredientDuplication,
    /// Recipes need one fewer of each ingredient, never below one.
    CraftingMastery,
    /// Buy prices ×0.85, sale prices ×1.15.
    Haggling,
    /// One extra garden plot while the timer runs.
    GardenExpansion,
    /// Crafted potions are worth more.
    QualityEnhancer,
    /// The shop offers a rare ingredient tomorrow.
    RareIngredientNextDay,
    /// A special trader visits tomorrow.
    RareTraderNextDay,
    /// Converts ingredients into gold on the spot; never stored.
    GoldTransmutation,
}

/// How an effect is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectSlot {
    /// Days remaining; active while > 0.
    Timer,
    /// Raised until the next day tick.
    Flag,
    /// Applied on the spot, never stored.
    OneShot,
}

impl EffectKind {
    pub const ALL: [EffectKind; 10] = [
        EffectKind::GrowthAcceleration,
        EffectKind::MarketInsight,
        EffectKind::IngredientDuplication,
        EffectKind::CraftingMastery,
        EffectKind::Haggling,
        EffectKind::GardenExpansion,
        EffectKind::QualityEnhancer,
        EffectKind::RareIngredientNextDay,
        EffectKind::RareTraderNextDay,
        EffectKind::GoldTransmutation,
    ];

    pub fn slot(self) -> EffectSlot {
        match self {
            EffectKind::RareIngredientNextDay | EffectKind::RareTraderNextDay => EffectSlot::Flag,
            EffectKind::GoldTransmutation => EffectSlot::OneShot,
            _ => EffectSlot::Timer,
        }
    }

    /// Potion that grants this effect when activated.
    pub fn potion_id(self) -> &'static str {
        match self {
            EffectKind::GrowthAcceleration => "potion_growth_acceleration",
            EffectKind::MarketInsight => "potion_market_insight",
            EffectKind::IngredientDuplication => "potion_ingredient_duplication",
            EffectKind::CraftingMastery => "potion_crafting_mastery",
            EffectKind::Haggling => "potion_haggling",
            EffectKind::GardenExpansion => "potion_garden_expansion",
            EffectKind::QualityEnhancer => "potion_quality_enhancer",
            EffectKind::RareIngredientNextDay => "potion_rare_ingredient_finder",
            EffectKind::RareTraderNextDay => "potion_npc_attraction",
            EffectKind::GoldTransmutation => "potion_gold_transmutation",
        }
    }

    /// Effect granted by a potion, if it has one.
    pub fn from_potion(id: &ItemId) -> Option<Self> {
        Self::ALL.into_iter().find(|k| id == k.potion_id())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectKind::GrowthAcceleration => "growth_acceleration",
            EffectKind::MarketInsight => "market_insight",
            EffectKind::IngredientDuplication => "ingredient_duplication",
            EffectKind::CraftingMastery => "crafting_mastery",
            EffectKind::Haggling => "haggling",
            EffectKind::GardenExpansion => "garden_expansion",
            EffectKind::QualityEnhancer => "quality_enhancer",
            EffectKind::RareIngredientNextDay => "rare_ingredient_next_day",
            EffectKind::RareTraderNextDay => "rare_trader_next_day",
            EffectKind::GoldTransmutation => "gold_transmutation",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectValue {
    Timer(u32),
    Flag(bool),
}

impl EffectValue {
    pub fn is_active(self) -> bool {
        match self {
            EffectValue::Timer(days) => days > 0,
            EffectValue::Flag(raised) => raised,
        }
    }

    fn ticked(self) -> Self {
        match self {
            EffectValue::Timer(days) => EffectValue::Timer(days.saturating_sub(1)),
            EffectValue::Flag(_) => EffectValue::Flag(false),
        }
    }
}

/// Every stored effect, keyed by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveEffects(BTreeMap<EffectKind, EffectValue>);

impl Default for ActiveEffects {
    /// All timers at zero, all flags lowered.
    fn default() -> Self {
        let map = EffectKind::ALL
            .into_iter()
            .filter_map(|k| match k.slot() {
                EffectSlot::Timer => Some((k, EffectValue::Timer(0))),
                EffectSlot::Flag => Some((k, EffectValue::Flag(false))),
                EffectSlot::OneShot => None,
            })
            .collect();
        Self(map)
    }
}

impl ActiveEffects {
    pub fn get(&self, kind: EffectKind) -> Option<EffectValue> {
        self.0.get(&kind).copied()
    }

    pub fn is_active(&self, kind: EffectKind) -> bool {
        self.get(kind).is_some_and(EffectValue::is_active)
    }

    /// Days left on a timer; zero for flags and missing entries.
    pub fn remaining(&self, kind: EffectKind) -> u32 {
        match self.get(kind) {
            Some(EffectValue::Timer(days)) => days,
            _ => 0,
        }
    }

    /// Sets a timer. Ignored for kinds that are not timers.
    pub fn set_timer(&mut self, kind: EffectKind, days: u32) {
        if kind.slot() == EffectSlot::Timer {
            self.0.insert(kind, EffectValue::Timer(days));
        }
    }

    /// Raises a flag. Ignored for kinds that are not flags.
    pub fn raise(&mut self, kind: EffectKind) {
        if kind.slot() == EffectSlot::Flag {
            self.0.insert(kind, EffectValue::Flag(true));
        }
    }

    /// One day later: timers count down (floored at zero), flags drop.
    pub fn tick(&self) -> Self {
        Self(self.0.iter().map(|(&k, &v)| (k, v.ticked())).collect())
    }

    /// Kinds currently in force, in key order.
    pub fn active_kinds(&self) -> impl Iterator<Item = EffectKind> + '_ {
        self.0
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(&k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EffectKind, EffectValue)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tracks_nine_kinds_all_inactive() {
        let e = ActiveEffects::default();
        assert_eq!(e.iter().count(), 9);
        assert_eq!(e.active_kinds().count(), 0);
        assert!(e.get(EffectKind::GoldTransmutation).is_none());
    }

    #[test]
    fn tick_counts_down_and_drops_flags() {
        let mut e = ActiveEffects::default();
        e.set_timer(EffectKind::GardenExpansion, GARDEN_EXPANSION_DAYS);
        e.set_timer(EffectKind::Haggling, STANDARD_EFFECT_DAYS);
        e.raise(EffectKind::RareTraderNextDay);
        let t = e.tick();
        assert_eq!(t.remaining(EffectKind::GardenExpansion), 2);
        assert!(!t.is_active(EffectKind::Haggling));
        assert!(!t.is_active(EffectKind::RareTraderNextDay));
        assert_eq!(t.tick().tick().tick().remaining(EffectKind::GardenExpansion), 0);
    }

    #[test]
    fn setters_respect_slot_kind() {
        let mut e = ActiveEffects::default();
        e.raise(EffectKind::Haggling);
        e.set_timer(EffectKind::RareIngredientNextDay, 4);
        e.set_timer(EffectKind::GoldTransmutation, 1);
        assert_eq!(e, ActiveEffects::default());
    }

    #[test]
    fn potion_mapping_round_trips() {
        for k in EffectKind::ALL {
            assert_eq!(EffectKind::from_potion(&ItemId::from(k.potion_id())), Some(k));
        }
        assert_eq!(EffectKind::from_potion(&ItemId::from("potion_healing")), None);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut e = ActiveEffects::default();
        e.set_timer(EffectKind::GardenExpansion, 3);
        e.raise(EffectKind::RareIngredientNextDay);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["garden_expansion"], 3);
        assert_eq!(json["rare_ingredient_next_day"], true);
        let back: ActiveEffects = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);
    }
}

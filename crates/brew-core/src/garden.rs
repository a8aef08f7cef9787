use crate::item::Ingredient;
use serde::{Deserialize, Serialize};

/// Number of plot slots in every garden.
pub const MAX_PLOTS: usize = 9;
/// Plots usable at the start of a game; a Garden's Blessing never shrinks below this.
pub const STARTING_UNLOCKED_PLOTS: usize = 4;
/// Gold charged for permanently unlocking one more plot.
pub const PLOT_UNLOCK_COST: i64 = 50;

/// An ingredient growing in a plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotState {
    pub ingredient: Ingredient,
    /// Days of growth so far, within [0, ingredient.growth_time].
    pub growth_stage: u32,
    /// Day number the seed went in.
    pub planted: u32,
}

impl PlotState {
    pub fn new(ingredient: Ingredient, planted: u32) -> Self {
        Self {
            ingredient,
            growth_stage: 0,
            planted,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.growth_stage >= self.ingredient.growth_time
    }

    /// Growth after `days` more days, clamped to maturity.
    pub fn grown(&self, days: u32) -> Self {
        let mut next = self.clone();
        if next.growth_stage < next.ingredient.growth_time {
            next.growth_stage = next
                .growth_stage
                .saturating_add(days)
                .min(next.ingredient.growth_time);
        }
        next
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    /// Fixed-size plot row; `None` is an empty plot.
    pub plots: Vec<Option<PlotState>>,
    /// Plots at index >= unlocked are inaccessible.
    pub unlocked: usize,
}

impl Default for Garden {
    fn default() -> Self {
        Self {
            plots: vec![None; MAX_PLOTS],
            unlocked: STARTING_UNLOCKED_PLOTS,
        }
    }
}

impl Garden {
    pub fn total_plots(&self) -> usize {
        self.plots.len()
    }

    pub fn is_full(&self) -> bool {
        self.unlocked >= self.total_plots()
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        index < self.unlocked.min(self.total_plots())
    }

    pub fn plot(&self, index: usize) -> Option<&PlotState> {
        self.plots.get(index).and_then(|p| p.as_ref())
    }

    /// Indexes of unlocked plots with nothing growing.
    pub fn empty_plots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.unlocked.min(self.total_plots())).filter(|&i| self.plots[i].is_none())
    }

    /// Indexes of unlocked plots ready to harvest.
    pub fn ready_plots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.unlocked.min(self.total_plots()))
            .filter(|&i| self.plots[i].as_ref().is_some_and(PlotState::is_ready))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::ids::ItemId;

    fn plot(id: &str) -> PlotState {
        let ing = catalog().ingredient(&ItemId::from(id)).cloned().unwrap();
        PlotState::new(ing, 1)
    }

    #[test]
    fn growth_clamps_at_maturity() {
        let p = plot("herb_mint");
        let p = p.grown(2);
        assert_eq!(p.growth_stage, 2);
        assert!(p.is_ready());
        assert_eq!(p.grown(2).growth_stage, 2);

        let lav = plot("herb_lavender").grown(1).grown(2);
        assert_eq!(lav.growth_stage, 3);
    }

    #[test]
    fn default_garden_has_four_of_nine_open() {
        let g = Garden::default();
        assert_eq!(g.total_plots(), 9);
        assert_eq!(g.empty_plots().count(), 4);
        assert!(g.is_unlocked(3));
        assert!(!g.is_unlocked(4));
        assert_eq!(g.ready_plots().count(), 0);
    }
}

//! Daily tasks: three small goals per day that pay out gold once claimed.

use crate::ids::ItemId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tasks offered each day.
pub const TASKS_PER_DAY: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Craft N potions.
    Craft,
    /// Harvest N ingredient units.
    Harvest,
    /// Earn N gold from sales.
    Sell,
    /// Buy N different items.
    Buy,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Craft,
        TaskKind::Harvest,
        TaskKind::Sell,
        TaskKind::Buy,
    ];
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: TaskKind,
    pub target: u32,
    pub progress: u32,
    pub reward: i64,
    pub completed: bool,
    pub claimed: bool,
    /// Distinct items already counted toward a buy task.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counted: Vec<ItemId>,
}

impl Task {
    /// Builds the `index`-th task of `day` with targets and rewards scaled by day.
    pub fn for_day(kind: TaskKind, day: u32, index: usize) -> Self {
        let scaled = |per: i64| day as i64 * per;
        let (title, description, target, reward) = match kind {
            TaskKind::Craft => {
                let target = 3 + day / 5;
                let description = format!("Craft {target} potions");
                ("Master Brewer", description, target, 20 + scaled(2))
            }
            TaskKind::Harvest => {
                let target = 4 + day / 4;
                let description = format!("Harvest {target} ingredients");
                ("Green Thumb", description, target, 15 + scaled(2))
            }
            TaskKind::Sell => {
                let target = day.saturating_mul(10).saturating_add(50);
                let description = format!("Sell items worth {target} gold");
                ("Merchant", description, target, 25 + scaled(3))
            }
            TaskKind::Buy => {
                let target = 2 + day / 6;
                let description = format!("Buy {target} different items");
                ("Collector", description, target, 15 + scaled(2))
            }
        };
        Self {
            id: format!("task_{day}_{index}"),
            title: title.to_string(),
            description,
            kind,
            target,
            progress: 0,
            reward,
            completed: false,
            claimed: false,
            counted: Vec::new(),
        }
    }

    /// Adds progress and marks completion once the target is reached.
    pub fn advance(&mut self, amount: u32) {
        if self.completed {
            return;
        }
        self.progress = self.progress.saturating_add(amount).min(self.target);
        self.completed = self.progress >= self.target;
    }

    /// Counts a purchase of `item` toward a buy task if not already counted.
    pub fn count_purchase(&mut self, item: &ItemId) {
        if self.kind != TaskKind::Buy || self.counted.contains(item) {
            return;
        }
        self.counted.push(item.clone());
        self.advance(1);
    }
}

/// Rolls the three tasks for `day`.
pub fn generate_daily_tasks<R: Rng + ?Sized>(day: u32, rng: &mut R) -> Vec<Task> {
    (0..TASKS_PER_DAY)
        .map(|i| {
            let kind = TaskKind::ALL[rng.gen_range(0..TaskKind::ALL.len())];
            Task::for_day(kind, day, i)
        })
        .collect()
}

#![deny(warnings)]

//! Day-cycle engine for Mystic Brews.
//!
//! Every operation takes the current [`GameState`] by reference, works on a
//! private copy and returns either an [`Outcome`] holding the whole next
//! state or a [`GameError`]. Nothing is applied partially: a rejected call
//! leaves the caller's state exactly as it was. Randomness is injected, so a
//! seeded RNG replays identically.
//!
//! [`GameController`] owns the live state, commits outcomes, forwards
//! notices to a [`NotificationSink`] and persists after every commit.

pub mod activation;
pub mod controller;
pub mod crafting;
pub mod day;
pub mod error;
pub mod garden;
pub mod inventory;
pub mod newgame;
pub mod shop;
pub mod tasks;
pub mod trading;

pub use activation::activate_potion_effect;
pub use controller::{ControllerError, GameController, NotificationSink, Opening, TracingSink};
pub use crafting::{can_craft, craft_potion, craftable_recipes};
pub use day::advance_day;
pub use error::{FailureKind, GameError};
pub use garden::{harvest, plant, unlock_plot};
pub use inventory::{add_to_inventory, remove_from_inventory, update_gold};
pub use newgame::new_game;
pub use shop::{buy, get_modified_price, sell, shop_stock};
pub use tasks::claim_task_reward;
pub use trading::{sell_to_npc, trade_price};

use brew_core::GameState;
use serde::Serialize;

/// A short player-facing message raised by an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Result of a successful operation: the next state, an operation-specific
/// value and any notices raised along the way.
#[derive(Clone, Debug)]
pub struct Outcome<T = ()> {
    pub state: GameState,
    pub value: T,
    pub notices: Vec<Notice>,
}

impl Outcome<()> {
    /// Starts a transition from a copy of `state`.
    pub(crate) fn begin(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            value: (),
            notices: Vec::new(),
        }
    }
}

impl<T> Outcome<T> {
    pub(crate) fn notify(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notices.push(Notice::new(title, message));
    }

    pub(crate) fn with<U>(self, value: U) -> Outcome<U> {
        Outcome {
            state: self.state,
            value,
            notices: self.notices,
        }
    }

    /// Whether any notice carries `title`.
    pub fn has_notice(&self, title: &str) -> bool {
        self.notices.iter().any(|n| n.title == title)
    }
}

#[cfg(test)]
pub(crate) mod testkit {
    use crate::new_game;
    use brew_core::{catalog, GameState, Inventory, ItemId};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    pub fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    pub fn fresh() -> GameState {
        new_game(&mut rng(42))
    }

    /// A fresh game whose inventory holds exactly the given stacks.
    pub fn holding(items: &[(&str, u32)]) -> GameState {
        let mut s = fresh();
        s.inventory = Inventory::default();
        for &(id, qty) in items {
            let id = ItemId::from(id);
            if let Some(i) = catalog().ingredient(&id) {
                s.inventory.ingredients.add(i.clone(), qty);
            } else if let Some(p) = catalog().potion(&id) {
                s.inventory.potions.add(p.clone(), qty);
            } else if let Some(t) = catalog().tool(&id) {
                s.inventory.tools.add(t.clone(), qty);
            } else {
                panic!("unknown test item {id}");
            }
        }
        s
    }
}

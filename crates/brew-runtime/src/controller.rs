//! Single writer for the live game: commits outcomes, forwards notices and
//! persists after every committed change.

use crate::error::GameError;
use crate::{
    activation, crafting, day, garden, inventory, newgame, shop, tasks, trading, Notice, Outcome,
};
use brew_core::{EffectKind, GameConfig, GameState, Item, ItemCategory, ItemId, NpcId, RecipeId};
use persistence::{load_state, save_state, Loaded, PersistError, SaveStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Receives player-facing notices. Delivery is fire-and-forget.
pub trait NotificationSink {
    fn notify(&mut self, notice: &Notice);
}

/// Logs every notice at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notice: &Notice) {
        info!(title = %notice.title, "{}", notice.message);
    }
}

/// Collects notices, for callers that render them later.
impl NotificationSink for Vec<Notice> {
    fn notify(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    /// The operation was refused; the live state is unchanged.
    #[error(transparent)]
    Rejected(#[from] GameError),
    /// The change was committed in memory but could not be saved.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Where the opening state came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opening {
    Restored,
    NewGame,
    /// A save existed but was unusable and a new game replaced it.
    Recovered,
}

pub struct GameController<S, N = TracingSink> {
    state: GameState,
    rng: ChaCha8Rng,
    store: S,
    sink: N,
    slot: String,
    opening: Opening,
}

impl<S: SaveStore, N: NotificationSink> GameController<S, N> {
    /// Restores the configured slot, or starts and saves a new game when the
    /// slot is empty or holds an unusable snapshot.
    pub fn open(config: &GameConfig, store: S, sink: N) -> Result<Self, PersistError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        let slot = config.save_slot.clone();
        let (state, opening) = match load_state(&store, &slot)? {
            Loaded::Restored(state) => (*state, Opening::Restored),
            Loaded::Missing => {
                info!(slot = %slot, "no save found, starting a new game");
                (newgame::new_game(&mut rng), Opening::NewGame)
            }
            Loaded::Corrupt(e) => {
                warn!(slot = %slot, error = %e, "discarding unusable save, starting a new game");
                (newgame::new_game(&mut rng), Opening::Recovered)
            }
        };
        let mut controller = Self {
            state,
            rng,
            store,
            sink,
            slot,
            opening,
        };
        if opening != Opening::Restored {
            controller.persist()?;
        }
        Ok(controller)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn opening(&self) -> Opening {
        self.opening
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    fn persist(&mut self) -> Result<(), PersistError> {
        save_state(&mut self.store, &self.slot, &self.state)
    }

    /// Runs an operation against the live state and commits its outcome.
    pub fn apply<T, F>(&mut self, op: F) -> Result<T, ControllerError>
    where
        F: FnOnce(&GameState, &mut ChaCha8Rng) -> Result<Outcome<T>, GameError>,
    {
        match op(&self.state, &mut self.rng) {
            Ok(Outcome {
                state,
                value,
                notices,
            }) => {
                self.state = state;
                for n in &notices {
                    self.sink.notify(n);
                }
                self.persist()?;
                Ok(value)
            }
            Err(e) => {
                debug!(error = %e, kind = ?e.kind(), "operation rejected");
                self.sink.notify(&e.notice());
                Err(e.into())
            }
        }
    }

    /// Throws the current game away and starts over on day 1.
    pub fn reset(&mut self) -> Result<(), ControllerError> {
        self.store.clear(&self.slot)?;
        self.state = newgame::new_game(&mut self.rng);
        self.opening = Opening::NewGame;
        self.persist()?;
        self.sink
            .notify(&Notice::new("New Game", "Your shop opens for its first day."));
        Ok(())
    }

    pub fn advance_day(&mut self) -> Result<(), ControllerError> {
        self.apply(|s, rng| Ok(day::advance_day(s, rng)))
    }

    pub fn add_to_inventory(&mut self, item: Item, quantity: u32) -> Result<(), ControllerError> {
        self.apply(|s, rng| Ok(inventory::add_to_inventory(s, item, quantity, rng)))
    }

    pub fn remove_from_inventory(
        &mut self,
        category: ItemCategory,
        id: &ItemId,
        amount: u32,
    ) -> Result<(), ControllerError> {
        self.apply(|s, _| Ok(inventory::remove_from_inventory(s, category, id, amount)))
    }

    pub fn update_gold(&mut self, amount: i64) -> Result<(), ControllerError> {
        self.apply(|s, _| Ok(inventory::update_gold(s, amount)))
    }

    pub fn plant(&mut self, plot: usize, ingredient: &ItemId) -> Result<(), ControllerError> {
        self.apply(|s, _| garden::plant(s, plot, ingredient))
    }

    pub fn harvest(&mut self, plot: usize) -> Result<u32, ControllerError> {
        self.apply(|s, rng| garden::harvest(s, plot, rng))
    }

    pub fn unlock_plot(&mut self) -> Result<(), ControllerError> {
        self.apply(|s, _| garden::unlock_plot(s))
    }

    pub fn craft_potion(&mut self, recipe: &RecipeId) -> Result<(), ControllerError> {
        self.apply(|s, _| crafting::craft_potion(s, recipe))
    }

    pub fn activate_potion_effect(
        &mut self,
        potion: &ItemId,
    ) -> Result<EffectKind, ControllerError> {
        self.apply(|s, _| activation::activate_potion_effect(s, potion))
    }

    pub fn buy(&mut self, item: &ItemId, quantity: u32) -> Result<i64, ControllerError> {
        self.apply(|s, rng| shop::buy(s, item, quantity, rng))
    }

    pub fn sell(
        &mut self,
        category: ItemCategory,
        item: &ItemId,
        quantity: u32,
    ) -> Result<i64, ControllerError> {
        self.apply(|s, _| shop::sell(s, category, item, quantity))
    }

    pub fn sell_to_npc(&mut self, npc: &NpcId, potion: &ItemId) -> Result<u32, ControllerError> {
        self.apply(|s, _| trading::sell_to_npc(s, npc, potion))
    }

    pub fn claim_task_reward(&mut self, task_id: &str) -> Result<(), ControllerError> {
        self.apply(|s, _| tasks::claim_task_reward(s, task_id))
    }
}

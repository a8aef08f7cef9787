//! A greedy player used to drive headless runs.

use brew_core::{EffectKind, Item, ItemCategory, ItemId};
use brew_runtime::shop::buy_price;
use brew_runtime::{
    craftable_recipes, shop_stock, trade_price, ControllerError, GameController, NotificationSink,
};
use persistence::{PersistError, SaveStore};

/// Caps crafting per day so a degenerate inventory cannot spin forever.
const MAX_CRAFTS_PER_DAY: usize = 50;
/// Gold kept back when buying seeds.
const GOLD_RESERVE: i64 = 40;

/// Totals from one simulated day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayReport {
    pub harvested: u32,
    pub crafted: u32,
    pub sold: u32,
    pub earned: i64,
    pub rewards: i64,
}

impl DayReport {
    pub fn add(&mut self, other: DayReport) {
        self.harvested += other.harvested;
        self.crafted += other.crafted;
        self.sold += other.sold;
        self.earned += other.earned;
        self.rewards += other.rewards;
    }
}

/// Rejections are expected while exploring; only save failures stop the run.
fn tolerate<T>(result: Result<T, ControllerError>) -> Result<Option<T>, PersistError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(ControllerError::Rejected(_)) => Ok(None),
        Err(ControllerError::Persist(e)) => Err(e),
    }
}

fn claim_completed<S: SaveStore, N: NotificationSink>(
    game: &mut GameController<S, N>,
    report: &mut DayReport,
) -> Result<(), PersistError> {
    let ready: Vec<(String, i64)> = game
        .state()
        .tasks
        .iter()
        .filter(|t| t.completed && !t.claimed)
        .map(|t| (t.id.clone(), t.reward))
        .collect();
    for (id, reward) in ready {
        if tolerate(game.claim_task_reward(&id))?.is_some() {
            report.rewards += reward;
        }
    }
    Ok(())
}

/// Plays one day and ends it.
pub fn play_day<S: SaveStore, N: NotificationSink>(
    game: &mut GameController<S, N>,
) -> Result<DayReport, PersistError> {
    let mut report = DayReport::default();

    let ready: Vec<usize> = game.state().garden.ready_plots().collect();
    for plot in ready {
        if let Some(units) = tolerate(game.harvest(plot))? {
            report.harvested += units;
        }
    }

    for boost in [EffectKind::GrowthAcceleration, EffectKind::MarketInsight] {
        let potion = ItemId::from(boost.potion_id());
        let held = game.state().inventory.potions.quantity(&potion) > 0;
        if held && !game.state().effect_active(boost) {
            tolerate(game.activate_potion_effect(&potion))?;
        }
    }

    for _ in 0..MAX_CRAFTS_PER_DAY {
        let Some(recipe) = craftable_recipes(game.state()).first().map(|r| r.id.clone()) else {
            break;
        };
        if tolerate(game.craft_potion(&recipe))?.is_none() {
            break;
        }
        report.crafted += 1;
    }

    let sellable: Vec<(ItemId, u32)> = game
        .state()
        .inventory
        .potions
        .iter()
        .filter(|s| EffectKind::from_potion(&s.item.id).is_none())
        .map(|s| (s.item.id.clone(), s.quantity))
        .collect();
    for (potion, quantity) in sellable {
        for _ in 0..quantity {
            let best = game
                .state()
                .npcs
                .iter()
                .filter_map(|n| {
                    let price = trade_price(game.state(), &n.id, &potion).ok()?;
                    Some((price, n.id.clone()))
                })
                .max_by_key(|(p, _)| *p);
            let Some((_, npc)) = best else { break };
            match tolerate(game.sell_to_npc(&npc, &potion))? {
                Some(price) => {
                    report.sold += 1;
                    report.earned += price as i64;
                }
                None => break,
            }
        }
    }

    let empty: Vec<usize> = game.state().garden.empty_plots().collect();
    for plot in empty {
        let seed = game
            .state()
            .inventory
            .ingredients
            .largest()
            .map(|s| s.item.id.clone());
        let seed = match seed {
            Some(id) => id,
            None => match cheapest_seed(game) {
                Some(id) => {
                    if tolerate(game.buy(&id, 1))?.is_none() {
                        break;
                    }
                    id
                }
                None => break,
            },
        };
        tolerate(game.plant(plot, &seed))?;
    }

    let junk: Vec<(ItemId, u32)> = game
        .state()
        .inventory
        .tools
        .iter()
        .map(|s| (s.item.id.clone(), s.quantity))
        .collect();
    for (tool, quantity) in junk {
        if let Some(gold) = tolerate(game.sell(ItemCategory::Tool, &tool, quantity))? {
            report.earned += gold;
        }
    }

    claim_completed(game, &mut report)?;
    tolerate(game.advance_day())?;
    Ok(report)
}

fn cheapest_seed<S: SaveStore, N: NotificationSink>(game: &GameController<S, N>) -> Option<ItemId> {
    let state = game.state();
    shop_stock(state)
        .into_iter()
        .filter(|i| matches!(i, Item::Ingredient(_)))
        .filter_map(|i| buy_price(state, &i).ok().map(|p| (p, i.id().clone())))
        .filter(|(p, _)| state.gold - (*p as i64) >= GOLD_RESERVE)
        .min_by_key(|(p, _)| *p)
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::GameConfig;
    use brew_runtime::Notice;
    use persistence::FileStore;

    #[test]
    fn a_week_of_autopilot_keeps_state_valid() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GameConfig {
            rng_seed: 3,
            save_dir: dir.path().display().to_string(),
            ..GameConfig::default()
        };
        let store = FileStore::new(&cfg.save_dir);
        let mut game = GameController::open(&cfg, store, Vec::<Notice>::new()).unwrap();
        let mut total = DayReport::default();
        for _ in 0..7 {
            total.add(play_day(&mut game).unwrap());
        }
        assert_eq!(game.state().days_passed, 8);
        assert!(total.harvested > 0);
        brew_core::validate_state(game.state()).unwrap();
        let store = FileStore::new(&cfg.save_dir);
        let reopened = GameController::open(&cfg, store, Vec::<Notice>::new()).unwrap();
        assert_eq!(reopened.state(), game.state());
    }
}

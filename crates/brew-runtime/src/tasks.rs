//! Daily task progress and reward claims.

use crate::error::GameError;
use crate::inventory::adjust_gold;
use crate::Outcome;
use brew_core::{GameState, ItemId, TaskKind};

/// Adds `amount` to every open task of `kind`.
pub(crate) fn record_progress<T>(work: &mut Outcome<T>, kind: TaskKind, amount: u32) {
    let mut finished = Vec::new();
    for task in work.state.tasks.iter_mut().filter(|t| t.kind == kind && !t.completed) {
        task.advance(amount);
        if task.completed {
            finished.push(task.title.clone());
        }
    }
    for title in finished {
        work.notify("Task Completed", format!("{title} is ready to claim."));
    }
}

/// Counts a purchase of `item` toward open buy tasks.
pub(crate) fn record_purchase<T>(work: &mut Outcome<T>, item: &ItemId) {
    let mut finished = Vec::new();
    for task in work
        .state
        .tasks
        .iter_mut()
        .filter(|t| t.kind == TaskKind::Buy && !t.completed)
    {
        task.count_purchase(item);
        if task.completed {
            finished.push(task.title.clone());
        }
    }
    for title in finished {
        work.notify("Task Completed", format!("{title} is ready to claim."));
    }
}

/// Pays out a completed task once.
pub fn claim_task_reward(state: &GameState, task_id: &str) -> Result<Outcome, GameError> {
    let task = state
        .task(task_id)
        .ok_or_else(|| GameError::UnknownTask(task_id.to_string()))?;
    if task.claimed {
        return Err(GameError::TaskClaimed(task_id.to_string()));
    }
    if !task.completed {
        return Err(GameError::TaskIncomplete(task_id.to_string()));
    }
    let reward = task.reward;
    let mut work = Outcome::begin(state);
    if let Some(t) = work.state.tasks.iter_mut().find(|t| t.id == task_id) {
        t.claimed = true;
    }
    adjust_gold(&mut work, reward);
    Ok(work)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::holding;
    use brew_core::Task;

    fn with_tasks(tasks: Vec<Task>) -> GameState {
        let mut s = holding(&[]);
        s.tasks = tasks;
        s
    }

    #[test]
    fn claim_pays_once() {
        let mut t = Task::for_day(TaskKind::Harvest, 2, 0);
        t.advance(t.target);
        let s = with_tasks(vec![t]);
        let out = claim_task_reward(&s, "task_2_0").unwrap();
        assert_eq!(out.state.gold, s.gold + 19);
        assert!(out.state.tasks[0].claimed);
        assert_eq!(
            claim_task_reward(&out.state, "task_2_0").unwrap_err(),
            GameError::TaskClaimed("task_2_0".into())
        );
    }

    #[test]
    fn incomplete_and_unknown_are_rejected() {
        let s = with_tasks(vec![Task::for_day(TaskKind::Sell, 1, 0)]);
        assert_eq!(
            claim_task_reward(&s, "task_1_0").unwrap_err(),
            GameError::TaskIncomplete("task_1_0".into())
        );
        assert_eq!(
            claim_task_reward(&s, "task_9_9").unwrap_err().kind(),
            crate::FailureKind::NotFound
        );
    }

    #[test]
    fn progress_only_touches_matching_kind() {
        let s = with_tasks(vec![
            Task::for_day(TaskKind::Craft, 1, 0),
            Task::for_day(TaskKind::Sell, 1, 1),
        ]);
        let mut work = Outcome::begin(&s);
        record_progress(&mut work, TaskKind::Sell, 80);
        assert_eq!(work.state.tasks[0].progress, 0);
        assert!(work.state.tasks[1].completed);
        assert!(work.has_notice("Task Completed"));
    }
}

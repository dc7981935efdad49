use snafu::{Location, OptionExt, Snafu};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::instrument;

use crate::config::BoardConfig;
use crate::model::{
    now, Task, TaskId, TaskStatus, User, UserId, VictoryDraft, VictoryId, VictoryItem,
};

pub use event::SprintEvent;

mod event;
pub mod seed;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum StoreError {
    /// a status change referenced a task that is not on the board
    #[snafu(display("no task with id `{}`", id))]
    TaskNotFound {
        id: TaskId,
        #[snafu(implicit)]
        location: Location,
    },
}

/// The whole sprint state. Views only read from here; every gesture funnels
/// into one of the mutating operations, which apply as a single step and
/// notify watchers afterwards.
#[derive(Debug)]
pub struct SprintStore {
    tasks: Vec<Task>,
    users: Vec<User>,
    /// Most recent victory first.
    victories: Vec<VictoryItem>,
    /// At most one task is awaiting its victory submission. A completion
    /// overwrites whatever was pending before it.
    pending_victory: Option<TaskId>,
    config: BoardConfig,
    watchers: Vec<UnboundedSender<SprintEvent>>,
}

impl SprintStore {
    pub fn new(
        users: Vec<User>, tasks: Vec<Task>, victories: Vec<VictoryItem>, config: BoardConfig,
    ) -> Self {
        Self {
            tasks,
            users,
            victories,
            pending_victory: None,
            config,
            watchers: Vec::new(),
        }
    }

    /// The demo board: reference users, tasks, and feed history.
    pub fn seeded(config: BoardConfig) -> Self {
        Self::new(seed::users(), seed::tasks(), seed::victories(), config)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn victories(&self) -> &[VictoryItem] {
        &self.victories
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == *id)
    }

    pub fn victory(&self, id: &VictoryId) -> Option<&VictoryItem> {
        self.victories.iter().find(|victory| victory.id == *id)
    }

    /// Register a consumer. Each mutation is delivered to every receiver
    /// still listening; dropped receivers are pruned on the next emit.
    pub fn watch(&mut self) -> UnboundedReceiver<SprintEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.watchers.push(tx);
        rx
    }

    fn emit(&mut self, event: SprintEvent) {
        self.watchers.retain(|watcher| watcher.send(event.clone()).is_ok());
    }

    /// Move a task to a new column. Completing a task (anything other than
    /// done, to done) stamps it, parks it in the pending-victory slot, and
    /// pays its points to the assignee. Leaving done never claws points back.
    #[instrument(skip(self))]
    pub fn move_task(&mut self, id: &TaskId, status: TaskStatus) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == *id)
            .context(TaskNotFoundSnafu { id: id.clone() })?;

        let was_done = task.is_done();
        task.status = status;

        let completed = !was_done && task.is_done();
        if completed {
            task.completed_at = Some(now());
        } else if !task.is_done() {
            // a task off the done column carries no completion stamp
            task.completed_at = None;
        }

        let task = task.clone();

        if completed {
            tracing::info!(task.id = %task.id, points = task.points, "task completed");
            self.pending_victory = Some(task.id.clone());
            self.award_completion(&task);
        }

        self.emit(SprintEvent::TaskMoved { task: task.clone() });

        Ok(task)
    }

    fn award_completion(&mut self, task: &Task) {
        let Some(assignee) = self.user_mut(&task.assignee_id) else {
            tracing::warn!(
                task.id = %task.id,
                assignee = %task.assignee_id,
                "assignee not on the team, skipping point award"
            );
            return;
        };

        assignee.points += task.points;
        assignee.tasks_completed += 1;
    }

    /// Put a new victory at the top of the feed and resolve the pending
    /// slot. The draft is trusted as-is; matching it against the board is
    /// the caller's business.
    #[instrument(skip(self, draft))]
    pub fn record_victory(&mut self, draft: VictoryDraft) -> VictoryItem {
        let victory = draft.into_item();
        tracing::info!(victory.id = %victory.id, task.id = %victory.task_id, "victory shared");

        self.victories.insert(0, victory.clone());
        self.pending_victory = None;

        self.emit(SprintEvent::VictoryRecorded {
            victory: victory.clone(),
        });

        victory
    }

    /// Count a vote and pay the creator their bonus. Unknown victories,
    /// repeat voters, and self-upvotes are ignored without complaint.
    #[instrument(skip(self))]
    pub fn upvote_victory(&mut self, id: &VictoryId, voter: &UserId) {
        let Some(victory) = self.victories.iter_mut().find(|victory| victory.id == *id) else {
            tracing::debug!(victory.id = %id, "upvote for unknown victory ignored");
            return;
        };

        if victory.user_id == *voter {
            tracing::debug!(victory.id = %id, %voter, "self-upvote rejected");
            return;
        }

        if victory.has_upvoted(voter) {
            tracing::debug!(victory.id = %id, %voter, "duplicate upvote ignored");
            return;
        }

        victory.upvoted_by.push(voter.clone());
        let victory = victory.clone();

        let bonus = self.config.upvote_bonus_points;
        match self.user_mut(&victory.user_id) {
            Some(creator) => creator.points += bonus,
            None => tracing::warn!(
                victory.id = %victory.id,
                creator = %victory.user_id,
                "victory creator not on the team, skipping bonus"
            ),
        }

        self.emit(SprintEvent::VictoryUpvoted { victory });
    }

    /// Sum of everyone's points. Always recomputed, never cached.
    pub fn current_week_points(&self) -> i64 {
        self.users.iter().map(|user| user.points).sum()
    }

    pub fn team_average_points(&self) -> f64 {
        if self.users.is_empty() {
            return 0.0;
        }

        self.current_week_points() as f64 / self.users.len() as f64
    }

    pub fn is_user_below_average(&self, id: &UserId) -> bool {
        let Some(user) = self.user(id) else {
            return false;
        };

        (user.points as f64) < self.team_average_points() * self.config.below_average_threshold
    }

    /// Raw ratio toward the weekly goal; clamping is the display's concern.
    pub fn weekly_goal_progress(&self) -> f64 {
        if self.config.weekly_goal == 0 {
            return 0.0;
        }

        self.current_week_points() as f64 / self.config.weekly_goal as f64
    }

    /// Resolves the pending id against the live board at call time.
    pub fn pending_victory_task(&self) -> Option<&Task> {
        let id = self.pending_victory.as_ref()?;
        self.task(id)
    }

    pub fn clear_pending_victory(&mut self) {
        self.pending_victory = None;
    }

    fn user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == *id)
    }
}

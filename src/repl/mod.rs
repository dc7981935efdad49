use std::time::Duration;

use rustyline::history::MemHistory;
use rustyline::Editor;
use snafu::{ResultExt, Snafu};

use crate::model::{MediaType, Task, TaskId, TaskStatus, UserId, VictoryDraft, VictoryId};
use crate::store::SprintStore;
use crate::view;

mod parse;

/// Simulated media upload; the store itself never waits.
const UPLOAD_DELAY: Duration = Duration::from_millis(1000);

pub struct Repl {
    inner: Editor<(), MemHistory>,
    message: Option<String>,
}

impl Repl {
    pub fn new() -> Result<Self, ReplError> {
        let config = rustyline::Config::default();
        let inner =
            rustyline::Editor::with_history(config, MemHistory::new()).context(RustylineSnafu)?;

        let repl = Self {
            inner,
            message: None,
        };
        Ok(repl)
    }

    pub async fn prompt(&mut self) -> Action {
        let message = self
            .message
            .as_ref()
            .map(|msg| format!("{msg}\n"))
            .unwrap_or_default();
        let prompt = format!("{}sprint> ", message);

        let Ok(input) = self.inner.readline(&prompt) else {
            return Action::Exit;
        };

        self.message = None;

        if input.trim().is_empty() {
            return Action::None;
        }

        self.inner.add_history_entry(input.clone()).ok();

        match parse::parse(&input) {
            Ok(action) => action,
            Err(err) => {
                self.reply(err.to_string());
                Action::None
            }
        }
    }

    pub fn reply(&mut self, message: String) {
        if let Some(msg) = self.message.as_mut() {
            msg.push('\n');
            msg.push_str(&message);
        } else {
            self.message = Some(message);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Action {
    Board,
    Leaderboard,
    Feed,
    Move {
        task_id: TaskId,
        status: TaskStatus,
    },
    Upvote {
        victory_id: VictoryId,
        voter: UserId,
    },
    Victory {
        media_type: MediaType,
        media_url: Option<String>,
    },
    Skip,
    Exit,
    None,
}

#[derive(Debug, Snafu)]
pub enum ReplError {
    #[snafu(display("failed to initialize REPL: {}", source))]
    Rustyline {
        source: rustyline::error::ReadlineError,
    },
}

pub async fn start(repl: &mut Repl, mut store: SprintStore) -> Result<(), ReplError> {
    tracing::info!("starting sprint board");

    let mut events = store.watch();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            tracing::debug!(?event, "store event");
        }
    });

    repl.reply(view::board(&store));

    loop {
        match repl.prompt().await {
            Action::Exit => break,
            Action::Board => repl.reply(view::board(&store)),
            Action::Leaderboard => repl.reply(view::leaderboard(&store)),
            Action::Feed => repl.reply(view::feed(&store)),
            Action::Move { task_id, status } => move_task(repl, &mut store, &task_id, status),
            Action::Upvote { victory_id, voter } => {
                store.upvote_victory(&victory_id, &voter);

                match store.victory(&victory_id) {
                    Some(victory) => {
                        repl.reply(format!("`{}` is at ▲ {}", victory.id, victory.upvotes()));
                    }
                    None => repl.reply(format!("no victory `{}` in the feed", victory_id)),
                }
            }
            Action::Victory {
                media_type,
                media_url,
            } => share_victory(repl, &mut store, media_type, media_url).await,
            Action::Skip => {
                store.clear_pending_victory();
                repl.reply("maybe next time".to_string());
            }
            Action::None => continue,
        }
    }

    Ok(())
}

fn move_task(repl: &mut Repl, store: &mut SprintStore, task_id: &TaskId, status: TaskStatus) {
    let was_done = store.task(task_id).map(Task::is_done).unwrap_or(false);

    match store.move_task(task_id, status) {
        Ok(task) if !was_done && task.is_done() => {
            repl.reply(format!(
                "🎉 `{}` complete, +{} pts for {}! share it with `victory <video|screenshot> [url]` or `skip`",
                task.id,
                task.points,
                store
                    .user(&task.assignee_id)
                    .map(|user| user.name.as_str())
                    .unwrap_or("the team"),
            ));
        }
        Ok(task) => repl.reply(format!("moved `{}` to {}", task.id, task.status)),
        Err(err) => repl.reply(err.to_string()),
    }
}

async fn share_victory(
    repl: &mut Repl, store: &mut SprintStore, media_type: MediaType, media_url: Option<String>,
) {
    let Some(task) = store.pending_victory_task().cloned() else {
        repl.reply("no victory waiting to be shared".to_string());
        return;
    };

    let Some(assignee) = store.user(&task.assignee_id).cloned() else {
        store.clear_pending_victory();
        repl.reply("the hero of this task has left the team".to_string());
        return;
    };

    let media_url = media_url.unwrap_or_else(|| media_type.demo_url().to_string());
    let draft = VictoryDraft::new(
        task.id.clone(),
        assignee.id.clone(),
        assignee.name.clone(),
        assignee.avatar.clone(),
        task.title.clone(),
        task.points,
        media_type,
        media_url,
    );

    tokio::time::sleep(UPLOAD_DELAY).await;

    let victory = store.record_victory(draft);
    repl.reply(format!("shared! `{}` is at the top of the feed", victory.id));
}

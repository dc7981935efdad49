use crate::model::{Task, VictoryItem};

/// Snapshot-carrying notification sent to watchers after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprintEvent {
    TaskMoved { task: Task },
    VictoryRecorded { victory: VictoryItem },
    VictoryUpvoted { victory: VictoryItem },
}

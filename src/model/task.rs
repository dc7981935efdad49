use derive_new::new;
use serde::{Deserialize, Serialize};
use snafu::Snafu;

use super::{TaskId, Timestamp, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, new)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub points: i64,
    pub category: TaskCategory,
    pub status: TaskStatus,
    pub assignee_id: UserId,
    #[new(default)]
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Column heading on the board.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseStatus;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(ParseStatus::new(input.to_string())),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Snafu, new)]
#[snafu(display("Failed to parse task status: `{}`", text))]
pub struct ParseStatus {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Feature,
    Bug,
    Design,
    Urgent,
}

impl TaskCategory {
    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::Feature => "Feature",
            TaskCategory::Bug => "Bug Fix",
            TaskCategory::Design => "Design",
            TaskCategory::Urgent => "Urgent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_spelling() {
        let status = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(status, r#""in-progress""#);

        let status: TaskStatus = serde_json::from_str(r#""done""#).unwrap();
        assert_eq!(status, TaskStatus::Done);
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(status.to_string().parse::<TaskStatus>().unwrap(), status);
        }

        assert!("blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn category_wire_spelling() {
        let category = serde_json::to_string(&TaskCategory::Urgent).unwrap();
        assert_eq!(category, r#""urgent""#);
    }
}

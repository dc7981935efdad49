use derive_new::new;
use serde::{Deserialize, Serialize};
use snafu::Snafu;

use super::{now, TaskId, Timestamp, UserId, VictoryId};

/// One celebrated completion in the social feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VictoryItem {
    pub id: VictoryId,
    pub task_id: TaskId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_avatar: String,
    pub task_title: String,
    pub points: i64,
    pub media_type: MediaType,
    pub media_url: String,
    pub timestamp: Timestamp,
    /// Everyone who upvoted, earliest first. The displayed count is this
    /// list's length, so the two can never drift apart.
    #[serde(default)]
    pub upvoted_by: Vec<UserId>,
}

impl VictoryItem {
    pub fn upvotes(&self) -> usize {
        self.upvoted_by.len()
    }

    pub fn has_upvoted(&self, user: &UserId) -> bool {
        self.upvoted_by.contains(user)
    }
}

/// Caller-supplied fields of a victory about to enter the feed.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct VictoryDraft {
    pub task_id: TaskId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_avatar: String,
    pub task_title: String,
    pub points: i64,
    pub media_type: MediaType,
    pub media_url: String,
}

impl VictoryDraft {
    pub fn into_item(self) -> VictoryItem {
        VictoryItem {
            id: VictoryId::generate(),
            task_id: self.task_id,
            user_id: self.user_id,
            user_name: self.user_name,
            user_avatar: self.user_avatar,
            task_title: self.task_title,
            points: self.points,
            media_type: self.media_type,
            media_url: self.media_url,
            timestamp: now(),
            upvoted_by: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Screenshot,
}

impl MediaType {
    /// Placeholder media shipped with the demo board.
    pub fn demo_url(self) -> &'static str {
        match self {
            MediaType::Video => "/demo-video.mp4",
            MediaType::Screenshot => "/demo-screenshot.jpg",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = ParseMediaType;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "video" => Ok(MediaType::Video),
            "screenshot" => Ok(MediaType::Screenshot),
            _ => Err(ParseMediaType::new(input.to_string())),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MediaType::Video => "video",
            MediaType::Screenshot => "screenshot",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Snafu, new)]
#[snafu(display("Failed to parse media type: `{}`", text))]
pub struct ParseMediaType {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> VictoryDraft {
        VictoryDraft::new(
            "task-4".into(),
            "user-3".into(),
            "Mike Johnson".to_string(),
            "🧑‍🔧".to_string(),
            "Critical security patch".to_string(),
            400,
            MediaType::Screenshot,
            "/demo-screenshot.jpg".to_string(),
        )
    }

    #[test]
    fn fresh_victory_starts_unvoted() {
        let victory = draft().into_item();

        assert_eq!(victory.upvotes(), 0);
        assert!(victory.upvoted_by.is_empty());
        assert_eq!(victory.task_id, "task-4".into());
    }

    #[test]
    fn fresh_victories_get_distinct_ids() {
        assert_ne!(draft().into_item().id, draft().into_item().id);
    }
}

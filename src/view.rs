//! Text renderings of the dashboard surfaces. Each one reads a store
//! snapshot and formats it; none of them mutate anything.

use std::cmp::Reverse;
use std::time::Duration;

use itertools::Itertools;

use crate::model::{now, TaskStatus, VictoryItem};
use crate::store::SprintStore;

const COLUMNS: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

pub fn board(store: &SprintStore) -> String {
    COLUMNS
        .iter()
        .map(|status| {
            let tasks = store
                .tasks()
                .iter()
                .filter(|task| task.status == *status)
                .map(|task| {
                    let avatar = store
                        .user(&task.assignee_id)
                        .map(|user| user.avatar.as_str())
                        .unwrap_or("?");

                    format!(
                        "  {}  {} [{}]  {} pts  {}",
                        task.id,
                        task.title,
                        task.category.label(),
                        task.points,
                        avatar,
                    )
                })
                .join("\n");

            format!("── {} ──\n{}", status.label(), tasks)
        })
        .join("\n\n")
}

pub fn leaderboard(store: &SprintStore) -> String {
    let progress = (store.weekly_goal_progress() * 100.0).clamp(0.0, 100.0);
    let header = format!(
        "Team Progress: {:.0}% of {} pts (avg {:.0} pts/member)",
        progress,
        store.config().weekly_goal,
        store.team_average_points(),
    );

    let rows = store
        .users()
        .iter()
        .sorted_by_key(|user| Reverse(user.points))
        .enumerate()
        .map(|(rank, user)| {
            let flag = if store.is_user_below_average(&user.id) {
                "  ⚠ needs support"
            } else {
                ""
            };

            format!(
                "{} {} {}  {} pts, {} tasks{}",
                rank_badge(rank),
                user.avatar,
                user.name,
                user.points,
                user.tasks_completed,
                flag,
            )
        })
        .join("\n");

    format!(
        "{}\n\n{}\n\nTotal Team Points: {}",
        header,
        rows,
        store.current_week_points()
    )
}

pub fn feed(store: &SprintStore) -> String {
    if store.victories().is_empty() {
        return "No victories yet. Complete a task to start the party.".to_string();
    }

    store.victories().iter().map(entry).join("\n")
}

fn entry(victory: &VictoryItem) -> String {
    format!(
        "{}  {} {} completed \"{}\"  +{} pts  ({}: {})  ▲ {}  {}",
        victory.id,
        victory.user_avatar,
        victory.user_name,
        victory.task_title,
        victory.points,
        victory.media_type,
        victory.media_url,
        victory.upvotes(),
        age(victory),
    )
}

fn rank_badge(rank: usize) -> String {
    match rank {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}.", n + 1),
    }
}

fn age(victory: &VictoryItem) -> String {
    let elapsed = (now() - victory.timestamp).to_std().unwrap_or_default();
    if elapsed.as_secs() < 60 {
        return "just now".to_string();
    }

    let rounded = Duration::from_secs(elapsed.as_secs() - elapsed.as_secs() % 60);
    format!("{} ago", humantime::format_duration(rounded))
}

#[cfg(test)]
mod tests {
    use crate::config::BoardConfig;

    use super::*;

    fn store() -> SprintStore {
        SprintStore::seeded(BoardConfig::default())
    }

    #[test]
    fn board_has_a_column_per_status() {
        let rendered = board(&store());

        for status in COLUMNS {
            assert!(rendered.contains(status.label()));
        }

        assert!(rendered.contains("task-4"));
        assert!(rendered.contains("Critical security patch"));
    }

    #[test]
    fn leaderboard_orders_by_points_descending() {
        let rendered = leaderboard(&store());

        let sarah = rendered.find("Sarah Miller").expect("top scorer listed");
        let mike = rendered.find("Mike Johnson").expect("bottom scorer listed");
        assert!(sarah < mike, "1200 pts sorts above 650 pts");

        assert!(rendered.contains("🥇"));
        assert!(rendered.contains("Total Team Points: 3680"));
    }

    #[test]
    fn feed_lists_seeded_victories_newest_first() {
        let rendered = feed(&store());

        let newest = rendered.find("victory-1").expect("victory-1 listed");
        let oldest = rendered.find("victory-2").expect("victory-2 listed");
        assert!(newest < oldest);
        assert!(rendered.contains("▲ 3"));
    }
}

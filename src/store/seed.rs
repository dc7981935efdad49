//! The fixed demo board every session starts from.

use chrono::Duration;

use crate::model::{now, MediaType, Task, TaskCategory, TaskStatus, User, VictoryItem};

use crate::model::TaskCategory::{Bug, Design, Feature, Urgent};
use crate::model::TaskStatus::{InProgress, Todo};

pub fn users() -> Vec<User> {
    vec![
        user("user-1", "Alex Chen", "👨‍💻", 850, 5),
        user("user-2", "Sarah Miller", "👩‍🎨", 1200, 7),
        user("user-3", "Mike Johnson", "🧑‍🔧", 650, 4),
        user("user-4", "Emma Davis", "👩‍💼", 980, 6),
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        task("task-1", "Implement user auth", "Add OAuth login flow", 300, Feature, Todo, "user-1"),
        task("task-2", "Fix navigation bug", "Menu not closing on mobile", 150, Bug, Todo, "user-2"),
        task("task-3", "Design dashboard", "Create mockups for analytics", 250, Design, InProgress, "user-2"),
        task("task-4", "Critical security patch", "Update dependencies ASAP", 400, Urgent, InProgress, "user-3"),
        task("task-5", "API optimization", "Reduce response times", 200, Feature, Todo, "user-4"),
        task("task-6", "Unit test coverage", "Add tests for core modules", 180, Feature, Todo, "user-1"),
        task("task-7", "Mobile responsiveness", "Fix tablet breakpoints", 120, Bug, InProgress, "user-4"),
        task("task-8", "Onboarding flow", "Design new user experience", 350, Design, Todo, "user-3"),
    ]
}

pub fn victories() -> Vec<VictoryItem> {
    vec![
        VictoryItem {
            id: "victory-1".into(),
            task_id: "task-0".into(),
            user_id: "user-2".into(),
            user_name: "Sarah Miller".to_string(),
            user_avatar: "👩‍🎨".to_string(),
            task_title: "Landing page redesign".to_string(),
            points: 300,
            media_type: MediaType::Screenshot,
            media_url: "/demo-screenshot.jpg".to_string(),
            timestamp: now() - Duration::hours(1),
            upvoted_by: vec!["user-1".into(), "user-3".into(), "user-4".into()],
        },
        VictoryItem {
            id: "victory-2".into(),
            task_id: "task-0b".into(),
            user_id: "user-1".into(),
            user_name: "Alex Chen".to_string(),
            user_avatar: "👨‍💻".to_string(),
            task_title: "Database migration".to_string(),
            points: 400,
            media_type: MediaType::Video,
            media_url: "/demo-video.mp4".to_string(),
            timestamp: now() - Duration::hours(2),
            upvoted_by: vec!["user-2".into(), "user-3".into(), "user-4".into()],
        },
    ]
}

fn user(id: &str, name: &str, avatar: &str, points: i64, tasks_completed: u32) -> User {
    User::new(id.into(), name.to_string(), avatar.to_string(), points, tasks_completed)
}

fn task(
    id: &str, title: &str, description: &str, points: i64, category: TaskCategory,
    status: TaskStatus, assignee: &str,
) -> Task {
    Task::new(
        id.into(),
        title.to_string(),
        description.to_string(),
        points,
        category,
        status,
        assignee.into(),
    )
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn board_shape() {
        assert_eq!(users().len(), 4);
        assert_eq!(tasks().len(), 8);
        assert_eq!(victories().len(), 2);

        assert!(tasks().iter().all(|task| !task.is_done()));
        assert!(tasks().iter().all(|task| task.completed_at.is_none()));
    }

    #[test]
    fn tasks_reference_seeded_users() {
        let users = users();

        for task in tasks() {
            assert!(
                users.iter().any(|user| user.id == task.assignee_id),
                "task `{}` has no assignee on the team",
                task.id
            );
        }
    }

    #[test]
    fn victories_start_consistent() {
        for victory in victories() {
            assert!(
                victory.upvoted_by.iter().all_unique(),
                "victory `{}` has duplicate upvoters",
                victory.id
            );
            assert!(
                !victory.has_upvoted(&victory.user_id),
                "victory `{}` is upvoted by its own creator",
                victory.id
            );
        }
    }
}

use derive_new::new;
use serde::{Deserialize, Serialize};

use super::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, new)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub points: i64,
    pub tasks_completed: u32,
}

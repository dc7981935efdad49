use chrono::Utc;

pub use id::*;
pub use task::*;
pub use user::*;
pub use victory::*;

mod id;
mod task;
mod user;
mod victory;

pub type Timestamp = chrono::DateTime<Utc>;

pub fn now() -> Timestamp {
    Utc::now()
}

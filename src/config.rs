use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ApplicationError, ConfigLoadSnafu};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    #[serde(flatten)]
    pub board: BoardConfig,
}

impl Config {
    pub fn from_env() -> Result<Config, ApplicationError> {
        envy::from_env::<Config>().context(ConfigLoadSnafu)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            board: BoardConfig::default(),
        }
    }
}

/// Tuning constants for the board itself.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct BoardConfig {
    /// Points the whole team aims for over the week.
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: i64,
    /// A member counts as "significantly below" average under this fraction of it.
    #[serde(default = "default_below_average_threshold")]
    pub below_average_threshold: f64,
    /// Points credited to a victory's creator for each upvote.
    #[serde(default = "default_upvote_bonus_points")]
    pub upvote_bonus_points: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            weekly_goal: default_weekly_goal(),
            below_average_threshold: default_below_average_threshold(),
            upvote_bonus_points: default_upvote_bonus_points(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_weekly_goal() -> i64 {
    5000
}

fn default_below_average_threshold() -> f64 {
    0.7
}

fn default_upvote_bonus_points() -> i64 {
    10
}

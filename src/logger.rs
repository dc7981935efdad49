use std::result::Result;

use snafu::ResultExt;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{registry, EnvFilter};

use crate::config::Config;
use crate::error::{ApplicationError, InitializeLoggerSnafu};

pub fn init(config: &Config) -> Result<WorkerGuard, ApplicationError> {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "sprintboard.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // console output goes to stderr so it does not interleave with the board
    let subscriber = registry()
        .with(filter)
        .with(layer().pretty().with_writer(std::io::stderr))
        .with(layer().with_ansi(false).json().with_writer(file_writer));

    tracing::subscriber::set_global_default(subscriber).context(InitializeLoggerSnafu)?;

    Ok(guard)
}

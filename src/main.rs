use dotenvy::dotenv;

use sprintboard::config::Config;
use sprintboard::error::ApplicationError;
use sprintboard::logger;
use sprintboard::repl::{self, Repl};
use sprintboard::store::SprintStore;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    dotenv().ok();

    let config = Config::from_env()?;

    let _guard = logger::init(&config)?;

    let store = SprintStore::seeded(config.board);
    let mut repl = Repl::new()?;

    repl::start(&mut repl, store).await?;

    Ok(())
}

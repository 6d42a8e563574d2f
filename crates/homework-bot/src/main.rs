//! Main entry point for the homework status bot.

use homework_bot::{verify_config, BotError, BotResult, HomeworkBot};
use homework_common::{init_logging, LoggingConfig};
use homework_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> BotResult<()> {
    init_logging(&LoggingConfig::default()).map_err(|e| BotError::Logging(e.to_string()))?;

    info!("Starting homework status bot");

    let config = ConfigLoader::new().load().map_err(|e| {
        error!(severity = "CRITICAL", "Invalid configuration: {}", e);
        BotError::from(e)
    })?;
    verify_config(&config)?;

    let bot = HomeworkBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {}", e);
        return Err(e);
    }

    Ok(())
}

//! Structured logging initialisation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "homework_bot=debug,homework_api=debug,info";

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter directive (e.g. "info", "homework_bot=debug")
    pub level: String,
    /// Whether to emit JSON lines instead of human readable text
    pub json_format: bool,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether to colour the output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_FILTER.to_string(),
            json_format: false,
            include_targets: true,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter, preferring `RUST_LOG` over the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Logs go to stdout.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stdout),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(config.include_targets)
                    .with_ansi(config.ansi)
                    .with_writer(std::io::stdout),
            )
            .try_init()?;
    }

    Ok(())
}

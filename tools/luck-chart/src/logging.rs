//! Logging and tracing setup

use anyhow::Result;
use luck_engine::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt};

/// Initialize logging from the `[logging]` config section.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn initialize_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    // Logs go to stderr so charts on stdout stay clean
    let fmt_layer = match config.format.as_str() {
        "json" => fmt::layer().json().with_target(true).with_writer(std::io::stderr).boxed(),
        "compact" => {
            fmt::layer().compact().with_target(false).with_writer(std::io::stderr).boxed()
        }
        _ => fmt::layer()
            .pretty()
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;

    Ok(())
}

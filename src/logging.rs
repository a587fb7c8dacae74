use std::io::{self, IsTerminal};
use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::error::{GameError, GameResult};
use crate::formatter::TickFormatter;

static SUBSCRIBER_INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter of warn everywhere and info for this crate.
/// Only the first call does anything; later calls return `Ok(())`.
pub fn setup_logging() -> GameResult<()> {
    let mut result = Ok(());
    SUBSCRIBER_INIT.call_once(|| result = install_subscriber());
    result
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("warn,{}=info", env!("CARGO_CRATE_NAME"))))
}

fn install_subscriber() -> GameResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(io::stdout().is_terminal())
        .with_env_filter(default_filter())
        .event_format(TickFormatter)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).map_err(|e| GameError::Logging(e.to_string()))
}

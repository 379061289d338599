use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::formatter::{self, CustomFormatter};

static SUBSCRIBER_INIT: Once = Once::new();

/// The filter used when `RUST_LOG` is unset: info for this crate, warnings for everything else.
pub fn default_filter() -> String {
    format!("warn,{}=info", env!("CARGO_CRATE_NAME"))
}

/// Configure and initialize logging for the application. Safe to call more than once.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        formatter::mark_startup();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

        let subscriber = FmtSubscriber::builder()
            .event_format(CustomFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::warn!("A global tracing subscriber was already installed");
        }
    });
}

//! Tracing subscriber setup.
//!
//! Development logs are compact human-readable lines; production logs are
//! Bunyan-formatted JSON on stdout. `RUST_LOG` overrides the default filter.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;
use crate::utils::constant::DEFAULT_LOG_FILTER;

/// Installs the global subscriber. Call once, at startup.
pub fn init_subscriber(environment: Environment) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    match environment {
        Environment::Production => {
            let formatting_layer =
                BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").to_string(), std::io::stdout);
            registry
                .with(JsonStorageLayer)
                .with(formatting_layer)
                .init();
        }
        Environment::Development => {
            registry.with(fmt::layer().with_target(false).compact()).init();
        }
    }
}

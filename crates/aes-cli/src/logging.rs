//! Tracing subscriber setup.

use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Installs a stderr fmt layer filtered by `RUST_LOG`, falling back to `default_level`.
pub fn init(default_level: LevelFilter) {
    tracing_subscriber::registry()
        .with(stderr_layer(default_level))
        .init();
}

fn stderr_layer<S>(default_level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter)
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "sofa_match=info,tower_http=info";

/// `RUST_LOG` directives when they parse, else the crate default
fn filter_from(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber
///
/// Loads `.env` first, so a `RUST_LOG` kept there overrides the default
/// filter just like one exported in the shell.
pub fn init_tracing() {
    dotenvy::dotenv().ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(filter_from(rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

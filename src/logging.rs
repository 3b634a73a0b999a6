use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Log filter used when RUST_LOG is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "hiscore=debug"
    } else {
        "hiscore=warn"
    }
}

/// Install a stderr fmt subscriber. RUST_LOG overrides the verbosity flag.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .without_time();

    Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

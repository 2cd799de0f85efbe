use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a compact fmt subscriber filtered by `RUST_LOG` (default: off).
/// Safe to call more than once.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        // A subscriber may already be installed by an embedding application.
        let _ = tracing_subscriber::fmt::Subscriber::builder()
            .compact()
            .without_time()
            .with_target(false)
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

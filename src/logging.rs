// Log setup. Output goes to stderr so it never lands in the middle of a
// prompt; the default level is `warn`, RUST_LOG replaces it.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "gpa_tracker=warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

use std::env;
use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the test logging subscriber, at most once per test binary.
///
/// Honors RUST_LOG when set, defaults to debug otherwise.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        setup_test_logging();
        info!("test logging ready");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_filter(env_filter),
    );

    // Another harness may have installed a global subscriber already
    if !tracing::dispatcher::has_been_set() {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("failed to set up test logging: {}", e);
        });
    }
}

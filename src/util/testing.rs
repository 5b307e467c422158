use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

/// Span lifecycle events logged in tests.
fn span_events() -> FmtSpan {
    FmtSpan::ENTER | FmtSpan::CLOSE
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Per-insert spans from the tree engine are too chatty for test output
    let noisy_modules = ["avltree::domain::tree"];
    let module_filter = filter_fn(move |metadata| {
        !(metadata.is_span()
            && noisy_modules
                .iter()
                .any(|name| metadata.target().starts_with(name)))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(span_events())
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

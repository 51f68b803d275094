//! Logging Setup
//!
//! Console logging via `tracing-subscriber`, filtered by `RUST_LOG`
//! (default: info).
//!
//! # Usage
//!
//! ```ignore
//! use order_service::infrastructure::telemetry;
//!
//! telemetry::init();
//! tracing::info!("Order Service starting");
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, which happens when
/// several tests initialize logging in the same process.
#[allow(clippy::expect_used)]
pub fn init() -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(
            "hyper=warn"
                .parse()
                .expect("static directive 'hyper=warn' is valid"),
        );

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init();
        assert!(!init());
    }
}

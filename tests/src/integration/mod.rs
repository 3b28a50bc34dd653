//! # Integration Scenarios
//!
//! Cross-crate flows driven through the block-loop driver.

pub mod block_loop;
pub mod lifecycle;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs an env-filtered subscriber once for the whole suite, so
/// `RUST_LOG=debug cargo test -p sim-tests` shows the simulator's
/// per-stage logging.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

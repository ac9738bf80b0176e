//! Test helpers for integration tests
//!
//! Provides a ready-to-use service context over a fresh in-process
//! store, with tracing wired up once per test binary.

use std::sync::Once;

use rollcall_common::{try_init_tracing_with_config, TracingConfig};
use rollcall_service::ServiceContext;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary
///
/// `RUST_LOG` still overrides the default filter, so individual runs
/// can be made noisier without code changes.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        try_init_tracing_with_config(TracingConfig::development()).ok();
    });
}

/// A service context over a fresh, empty in-process store
///
/// Every call returns an isolated engine, so tests never share state
/// and need no cleanup.
pub fn test_context() -> ServiceContext {
    init_test_tracing();
    ServiceContext::in_memory()
}

//! Test Utilities Crate
//!
//! Shared test infrastructure for the ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built dates, months, and amounts
//! - `builders`: builder patterns for funds, enrollments, and payments
//! - `stores`: in-memory `EnrollmentStore` adapters
//! - `assertions`: assertion helpers for decimal amounts
//!
//! Call [`init_test_tracing`] at the top of a test to see engine warnings
//! (e.g. start-date fallbacks) in test output.

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod stores;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use stores::*;

use once_cell::sync::OnceCell;

static TRACING: OnceCell<()> = OnceCell::new();

/// Initializes a tracing subscriber for tests, once per process
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .init();
    });
}

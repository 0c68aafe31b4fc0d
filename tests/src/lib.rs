mod exec_log;
pub use exec_log::ExecLog;

pub use logging_driver::{DriverOp, LoggingDriver};

pub mod models;

#[cfg(feature = "sqlite")]
pub use setup::{setup, Fixture};

pub mod prelude;

pub use std_util::*;

/// Installs a `tracing` subscriber for the test binary, filtered by
/// `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

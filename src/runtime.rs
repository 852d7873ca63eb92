//! Process-level helpers shared by the binary: diagnostics setup and the
//! mapping from a run's outcome to an exit status.

use anyhow::Error;
use std::io;
use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// True when any cause in the chain is an `AddrInUse` I/O error.
pub fn is_address_in_use(err: &Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::AddrInUse)
    })
}

/// Exit status for a finished run.
///
/// Address-in-use errors come from unrelated startup plumbing and are
/// ignored; every other error is fatal.
pub fn exit_code(outcome: &Result<(), Error>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(err) if is_address_in_use(err) => 0,
        Err(_) => 1,
    }
}

//! Logging setup.
//!
//! Installs a `tracing_subscriber::fmt` subscriber filtered by `RUST_LOG`,
//! falling back to the filter given on the command line.
//!
//! ```ignore
//! solarops_core::logging::init_logging("info")?;
//! tracing::info!("dashboard starting");
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{OpsError, OpsResult};

/// Build the filter: `RUST_LOG` wins over `default_filter`
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber.
///
/// A second call fails with [`OpsError::Logging`] instead of panicking.
pub fn init_logging(default_filter: &str) -> OpsResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .try_init()
        .map_err(|e| OpsError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        // The first call may already have happened in another test thread
        let _ = init_logging("debug");
        assert!(matches!(init_logging("debug"), Err(OpsError::Logging(_))));
    }
}

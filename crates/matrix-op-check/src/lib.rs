//! Checks the `matrix-op` kernels against precomputed reference results.
//!
//! The [`scenario`] module holds the fixed inputs and their expected outputs. The binary runs the
//! kernels on the inputs, compares every output element against its reference value, and exits
//! with a non-zero status if any of them differ.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the default log filter (see [`env_logger`]).

use log::LevelFilter;

use crate::scenario::{verify, Inputs, Outputs, Report};

pub mod scenario;

/// Runs the kernels on [`Inputs::reference`] and compares the results against `expected`.
///
/// # Errors
///
/// Returns an error if any output element differs from its counterpart in `expected`.
pub fn run(expected: &Outputs) -> anyhow::Result<Report> {
    let inputs = Inputs::reference();
    log::debug!("inputs: {:?}", inputs);

    let report = verify(&Outputs::compute(&inputs), expected);
    anyhow::ensure!(
        report.is_success(),
        "{} of {} elements did not match their reference value",
        report.mismatched,
        report.compared,
    );
    Ok(report)
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("matrix_op"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate, this crate and `matrix_op` will log
/// at *trace* level. Otherwise, they will log at *debug* level. Everything else logs at *info*
/// level.
///
/// The `RUST_LOG` environment variable is applied on top of these defaults.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_succeeds_on_reference() {
        let report = run(&Outputs::expected()).unwrap();
        assert_eq!(report.compared, 15);
    }

    #[test]
    fn run_fails_on_wrong_expectation() {
        let mut expected = Outputs::expected();
        expected.a_tr[(2, 1)] = 7.0;

        let err = run(&expected).unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 of 15 elements did not match their reference value"
        );
    }
}

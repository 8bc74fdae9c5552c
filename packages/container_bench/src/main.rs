#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point: benchmarks the whole container catalog and prints the results.
//!
//! Command-line arguments are ignored. Log output goes to stderr and is controlled via
//! `RUST_LOG` (default: `warn`), so stdout only carries the report.

use std::io;
use std::process::ExitCode;

use container_bench::{BenchConfig, Workload, run_catalog};
use tracing::error;
use tracing_subscriber::EnvFilter;

// Binary entry point - covered by the integration tests of `run_catalog()`.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = BenchConfig::DEFAULT;

    let result = Workload::generate(config.element_count)
        .and_then(|workload| run_catalog(&workload, &config, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "benchmark run failed");
            ExitCode::FAILURE
        }
    }
}

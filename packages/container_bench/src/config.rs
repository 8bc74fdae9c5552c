//! Fixed benchmark configuration.

use std::num::NonZero;

/// How large the workload is and how many times each phase is repeated.
///
/// The benchmark binary always uses [`BenchConfig::DEFAULT`]. Smaller configurations exist
/// so tests can drive the full catalog in a reasonable time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct BenchConfig {
    /// Number of samples in the workload.
    pub element_count: usize,

    /// Number of timed runs per phase. The fastest run is reported.
    pub run_count: NonZero<usize>,
}

impl BenchConfig {
    /// 400 000 samples, 5 runs per phase.
    pub const DEFAULT: Self = Self {
        element_count: 400_000,
        run_count: NonZero::new(5).unwrap(),
    };

    /// Creates a configuration with the given workload size and run count.
    #[must_use]
    pub const fn new(element_count: usize, run_count: NonZero<usize>) -> Self {
        Self {
            element_count,
            run_count,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_hundred_thousand_by_five() {
        let config = BenchConfig::default();

        assert_eq!(config.element_count, 400_000);
        assert_eq!(config.run_count.get(), 5);
    }
}

//! The fixed catalog of container types and the loop that benchmarks all of them.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::io::Write;
use std::num::NonZero;

use foldhash::fast::RandomState as FoldHashState;
use hash_hasher::HashBuildHasher;
use smallvec::SmallVec;
use tracing::info;

use crate::{
    BenchConfig, DriverReport, INLINE_SAMPLES, Result, Sample, SampleHashState, Workload,
    bench_map, bench_sequence, bench_set,
};

/// A group of container types that are compared against each other.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Category {
    /// Containers that samples are appended to.
    Sequences,

    /// Hash-based sets.
    UnorderedSets,

    /// Tree-based sets.
    OrderedSets,

    /// Hash-based maps.
    UnorderedMaps,

    /// Tree-based maps.
    OrderedMaps,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Self; 5] = [
        Self::Sequences,
        Self::UnorderedSets,
        Self::OrderedSets,
        Self::UnorderedMaps,
        Self::OrderedMaps,
    ];

    /// The header line printed before the category's results.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Sequences => "# Vector:",
            Self::UnorderedSets => "# Unordered Sets:",
            Self::OrderedSets => "# Ordered Sets:",
            Self::UnorderedMaps => "# Unordered Maps:",
            Self::OrderedMaps => "# Ordered Maps:",
        }
    }

    /// Runs the driver of every container type in this category.
    ///
    /// Each report is handed to `emit` as soon as its driver completes.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from `emit`.
    pub fn run<F>(self, workload: &[Sample], runs: NonZero<usize>, mut emit: F) -> Result<()>
    where
        F: FnMut(DriverReport) -> Result<()>,
    {
        match self {
            Self::Sequences => {
                emit(bench_sequence::<Vec<Sample>>(workload, runs))?;
                emit(bench_sequence::<VecDeque<Sample>>(workload, runs))?;
                emit(bench_sequence::<SmallVec<[Sample; INLINE_SAMPLES]>>(workload, runs))?;
                emit(bench_sequence::<LinkedList<Sample>>(workload, runs))?;
            }
            Self::UnorderedSets => {
                emit(bench_set::<HashSet<Sample>>(workload, runs))?;
                emit(bench_set::<HashSet<Sample, FoldHashState>>(workload, runs))?;
                emit(bench_set::<HashSet<Sample, HashBuildHasher>>(workload, runs))?;
                emit(bench_set::<HashSet<Sample, SampleHashState>>(workload, runs))?;
                emit(bench_set::<hashbrown::HashSet<Sample>>(workload, runs))?;
            }
            Self::OrderedSets => {
                emit(bench_set::<BTreeSet<Sample>>(workload, runs))?;
            }
            Self::UnorderedMaps => {
                emit(bench_map::<HashMap<Sample, Sample>>(workload, runs))?;
                emit(bench_map::<HashMap<Sample, Sample, FoldHashState>>(workload, runs))?;
                emit(bench_map::<HashMap<Sample, Sample, HashBuildHasher>>(workload, runs))?;
                emit(bench_map::<HashMap<Sample, Sample, SampleHashState>>(workload, runs))?;
                emit(bench_map::<hashbrown::HashMap<Sample, Sample>>(workload, runs))?;
                emit(bench_map::<HashMap<Sample, String>>(workload, runs))?;
            }
            Self::OrderedMaps => {
                emit(bench_map::<BTreeMap<Sample, Sample>>(workload, runs))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Benchmarks every container type in the catalog and writes the report to `out`.
///
/// The report has one header per category and one line per container type. Each driver line is
/// written as soon as that driver completes.
///
/// # Errors
///
/// Returns [`Error::Output`][crate::Error::Output] if writing to `out` fails.
pub fn run_catalog(workload: &Workload, config: &BenchConfig, out: &mut impl Write) -> Result<()> {
    info!(
        element_count = workload.len(),
        run_count = config.run_count.get(),
        "starting container benchmarks"
    );

    for category in Category::ALL {
        info!(%category, "benchmarking category");
        writeln!(out, "{category}")?;

        category.run(workload, config.run_count, |report| {
            report.write_to(out)?;
            out.flush()?;
            Ok(())
        })?;
    }

    Ok(())
}

//! Rendering of benchmark results.

use std::any::type_name;
use std::fmt;
use std::io::Write;

use crate::{Durations, Result};

/// One step of a driver's fixed operation sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Phase {
    /// Appending every sample to a sequence.
    PushBack,

    /// Inserting every sample into a container that reserved capacity for all of them.
    InsertReserved,

    /// Inserting every sample into an empty container.
    Insert,

    /// Looking up every sample.
    Find,

    /// Removing every sample.
    Erase,

    /// Inserting every sample again after all were erased.
    Reinsert,
}

impl Phase {
    /// The label used for this phase in the report.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PushBack => "push_back",
            Self::InsertReserved => "insert (reserved)",
            Self::Insert => "insert",
            Self::Find => "find",
            Self::Erase => "erase",
            Self::Reinsert => "reinsert",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The timing and correctness result of one phase.
#[derive(Clone, Debug)]
pub struct Measurement {
    phase: Phase,
    durations: Durations,
    element_count: usize,
    ok: bool,
}

impl Measurement {
    /// Creates a measurement of a phase that processed `element_count` samples per run.
    ///
    /// `ok` is false if any expected outcome (a lookup hit, a single-element removal) did not
    /// hold in any run.
    #[must_use]
    pub fn new(phase: Phase, durations: Durations, element_count: usize, ok: bool) -> Self {
        Self {
            phase,
            durations,
            element_count,
            ok,
        }
    }

    /// The phase that was measured.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The elapsed time of every run.
    #[must_use]
    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    /// Whether every expected outcome held.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Nanoseconds per sample in the fastest run. Zero for an empty workload.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "sub-nanosecond precision is irrelevant for a rendered value with no decimals"
    )]
    pub fn ns_per_element(&self) -> f64 {
        if self.element_count == 0 {
            return 0.0;
        }

        self.durations.min().as_nanos() as f64 / self.element_count as f64
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:>3.0}ns", self.phase, self.ns_per_element())?;

        if !self.ok {
            f.write_str(" ERR")?;
        }

        Ok(())
    }
}

/// Every measurement taken by one driver for one container type.
///
/// Renders as a single line:
///
/// ```text
/// - insert: 21ns, find:  9ns, erase: 14ns, reinsert: 12ns, --- alloc::collections::btree::set::BTreeSet<u64>:
/// ```
#[derive(Clone, Debug)]
pub struct DriverReport {
    container: &'static str,
    measurements: Vec<Measurement>,
}

impl DriverReport {
    /// Creates an empty report for the container type `C`.
    #[must_use]
    pub fn for_type<C: ?Sized>() -> Self {
        Self {
            container: type_name::<C>(),
            measurements: Vec::new(),
        }
    }

    /// Appends a measurement.
    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// The fully qualified name of the container type.
    #[must_use]
    pub fn container(&self) -> &'static str {
        self.container
    }

    /// The measurements, in the order they were taken.
    #[must_use]
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Looks up the measurement of a phase, if that phase was run.
    #[must_use]
    pub fn measurement(&self, phase: Phase) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.phase == phase)
    }

    /// Whether every phase held all its expected outcomes.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.measurements.iter().all(Measurement::is_ok)
    }

    /// Writes the report as one line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`][crate::Error::Output] if the writer fails.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{self}")?;
        Ok(())
    }
}

impl fmt::Display for DriverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("- ")?;

        for measurement in &self.measurements {
            write!(f, "{measurement}, ")?;
        }

        write!(f, "--- {}:", self.container)
    }
}

//! Wall-clock timing of repeated runs.

use std::num::NonZero;
use std::time::{Duration, Instant};

use nonempty::NonEmpty;

/// The elapsed time of every run of one benchmark phase, in run order.
///
/// Never empty: the run count is a [`NonZero`] value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Durations {
    runs: NonEmpty<Duration>,
}

impl Durations {
    /// Creates a sample set from explicit durations.
    #[must_use]
    pub fn new(first: Duration, rest: impl IntoIterator<Item = Duration>) -> Self {
        let mut runs = NonEmpty::new(first);

        for duration in rest {
            runs.push(duration);
        }

        Self { runs }
    }

    /// The fastest run.
    ///
    /// Scheduling noise only ever adds time, so this is the least biased estimate of the cost
    /// of the work itself.
    #[must_use]
    pub fn min(&self) -> Duration {
        self.runs.tail.iter().fold(self.runs.head, |min, &d| min.min(d))
    }

    /// Number of recorded runs. Always at least one.
    #[must_use]
    #[expect(clippy::len_without_is_empty, reason = "never empty by construction")]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Iterates over the recorded runs in order.
    pub fn iter(&self) -> impl Iterator<Item = &Duration> {
        self.runs.iter()
    }
}

/// Executes `op` exactly `runs` times, timing each execution.
///
/// Any state `op` mutates carries over from one run to the next.
#[must_use]
pub fn measure_runs<F>(runs: NonZero<usize>, mut op: F) -> Durations
where
    F: FnMut(),
{
    measure_prepared_runs(runs, &mut (), |_| {}, |_| op())
}

/// Executes `op` exactly `runs` times against `state`, timing each execution.
///
/// Before every execution, `prepare` is called with the same state. Preparation is not part of
/// the timed block, so it can be used to restore the state that `op` consumes (e.g. refilling a
/// container that the previous run emptied).
#[must_use]
pub fn measure_prepared_runs<S, P, F>(
    runs: NonZero<usize>,
    state: &mut S,
    mut prepare: P,
    mut op: F,
) -> Durations
where
    S: ?Sized,
    P: FnMut(&mut S),
    F: FnMut(&mut S),
{
    let mut time_one = |state: &mut S| {
        prepare(state);

        let start = Instant::now();
        op(state);
        start.elapsed()
    };

    let first = time_one(&mut *state);
    let mut durations = NonEmpty::new(first);

    for _ in 1..runs.get() {
        durations.push(time_one(&mut *state));
    }

    Durations { runs: durations }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::thread;

    use super::*;

    #[test]
    fn returns_one_duration_per_run() {
        for runs in [1, 2, 5, 13] {
            let runs = NonZero::new(runs).unwrap();
            let calls = Cell::new(0_usize);

            let durations = measure_runs(runs, || calls.set(calls.get() + 1));

            assert_eq!(durations.len(), runs.get());
            assert_eq!(durations.iter().count(), runs.get());
            assert_eq!(calls.get(), runs.get());
        }
    }

    #[test]
    fn prepare_runs_before_every_op() {
        let mut log = Vec::new();

        let durations = measure_prepared_runs(
            NonZero::new(3).unwrap(),
            &mut log,
            |log| log.push("prepare"),
            |log| log.push("op"),
        );

        assert_eq!(durations.len(), 3);
        assert_eq!(log, ["prepare", "op", "prepare", "op", "prepare", "op"]);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Real sleeping is too slow under Miri.
    fn prepare_is_not_timed() {
        let pause = Duration::from_millis(50);

        let durations = measure_prepared_runs(
            NonZero::new(2).unwrap(),
            &mut (),
            |_| thread::sleep(pause),
            |_| {},
        );

        assert!(durations.min() < pause);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Real sleeping is too slow under Miri.
    fn op_is_timed() {
        let pause = Duration::from_millis(5);

        let durations = measure_runs(NonZero::new(2).unwrap(), || thread::sleep(pause));

        assert!(durations.iter().all(|d| *d >= pause));
    }

    #[test]
    fn min_picks_fastest_run() {
        let durations = Durations::new(
            Duration::from_nanos(300),
            [Duration::from_nanos(100), Duration::from_nanos(200)],
        );

        assert_eq!(durations.min(), Duration::from_nanos(100));
    }

    #[test]
    fn min_of_single_run_is_that_run() {
        let durations = Durations::new(Duration::from_nanos(42), []);

        assert_eq!(durations.min(), Duration::from_nanos(42));
        assert_eq!(durations.len(), 1);
    }
}

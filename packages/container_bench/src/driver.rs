//! Benchmark drivers, one per container category.
//!
//! Every driver walks the workload in its own order (never the container's iteration order),
//! so all container types in a category receive exactly the same sequence of operations.
//!
//! Each phase is timed over several runs. Work needed to bring a keyed container back into the
//! state a phase expects (a fresh instance, a refill after erasing everything) happens between
//! runs and is not timed. Sequences keep growing across runs instead.

use std::num::NonZero;

use tracing::{debug, warn};

use crate::{
    Container, DriverReport, MapContainer, MapValue, Measurement, Phase, Sample,
    SequenceContainer, SetContainer, measure_prepared_runs, measure_runs,
};

/// Measures appending the workload to a sequence of type `C`.
///
/// A single instance receives the whole workload once per run, so after the last run it holds
/// `runs * workload.len()` samples. If `C` is [reservable][Container::RESERVABLE], the instance
/// reserves room for one workload before the first run.
#[must_use]
pub fn bench_sequence<C>(workload: &[Sample], runs: NonZero<usize>) -> DriverReport
where
    C: SequenceContainer,
{
    let mut report = DriverReport::for_type::<C>();
    let mut sequence = new_container::<C>(C::RESERVABLE, workload.len());

    let durations = measure_runs(runs, || {
        for &sample in workload {
            sequence.push_back(sample);
        }
    });

    sequence.clear();

    record(
        &mut report,
        Measurement::new(Phase::PushBack, durations, workload.len(), true),
    );

    report
}

/// Measures insert, find, erase and reinsert of the workload on a set of type `C`.
///
/// If `C` is [reservable][Container::RESERVABLE], an additional "insert (reserved)" phase is
/// measured on its own instance first.
#[must_use]
pub fn bench_set<C>(workload: &[Sample], runs: NonZero<usize>) -> DriverReport
where
    C: SetContainer,
{
    bench_keyed::<C, _, _, _>(
        workload,
        runs,
        |set, sample| {
            set.insert(sample);
        },
        |set, sample| set.contains(sample),
        |set, sample| set.erase(sample),
    )
}

/// Measures insert, find, erase and reinsert of the workload on a map of type `C`.
///
/// Every sample is used as a key, mapped to a value derived from itself. Inserting overwrites
/// any existing value for the key.
#[must_use]
pub fn bench_map<C>(workload: &[Sample], runs: NonZero<usize>) -> DriverReport
where
    C: MapContainer,
{
    bench_keyed::<C, _, _, _>(
        workload,
        runs,
        |map, key| map.assign(key, C::Value::from_sample(key)),
        |map, key| map.find(key).is_some(),
        |map, key| map.erase(key),
    )
}

/// The three operations the keyed phases need, borrowed from either a set or a map.
struct KeyedOps<I, F, E> {
    insert: I,
    find: F,
    erase: E,
}

fn bench_keyed<C, I, F, E>(
    workload: &[Sample],
    runs: NonZero<usize>,
    insert: I,
    find: F,
    erase: E,
) -> DriverReport
where
    C: Container,
    I: Fn(&mut C, Sample),
    F: Fn(&C, &Sample) -> bool,
    E: Fn(&mut C, &Sample) -> usize,
{
    let ops = KeyedOps {
        insert,
        find,
        erase,
    };

    let mut report = DriverReport::for_type::<C>();

    if C::RESERVABLE {
        let (reserved, measurement) = insert_phase::<C, _, _, _>(workload, runs, &ops, true);
        drop(reserved);
        record(&mut report, measurement);
    }

    let (mut container, measurement) = insert_phase::<C, _, _, _>(workload, runs, &ops, false);
    record(&mut report, measurement);

    record(&mut report, find_phase(&container, workload, runs, &ops));
    record(&mut report, erase_phase(&mut container, workload, runs, &ops));
    record(&mut report, reinsert_phase(&mut container, workload, runs, &ops));

    container.clear();

    report
}

/// Inserts the workload into a fresh container in every run, returning the last one.
fn insert_phase<C, I, F, E>(
    workload: &[Sample],
    runs: NonZero<usize>,
    ops: &KeyedOps<I, F, E>,
    reserve: bool,
) -> (C, Measurement)
where
    C: Container,
    I: Fn(&mut C, Sample),
{
    let mut container = C::default();

    let durations = measure_prepared_runs(
        runs,
        &mut container,
        |container| *container = new_container::<C>(reserve, workload.len()),
        |container| {
            for &sample in workload {
                (ops.insert)(container, sample);
            }
        },
    );

    let phase = if reserve {
        Phase::InsertReserved
    } else {
        Phase::Insert
    };

    (
        container,
        Measurement::new(phase, durations, workload.len(), true),
    )
}

/// Looks up every sample. Correct if every lookup in every run is a hit.
fn find_phase<C, I, F, E>(
    container: &C,
    workload: &[Sample],
    runs: NonZero<usize>,
    ops: &KeyedOps<I, F, E>,
) -> Measurement
where
    F: Fn(&C, &Sample) -> bool,
{
    let mut all_hit = true;

    let durations = measure_runs(runs, || {
        for sample in workload {
            if !(ops.find)(container, sample) {
                all_hit = false;
            }
        }
    });

    Measurement::new(Phase::Find, durations, workload.len(), all_hit)
}

/// Removes every sample. Correct if every removal in every run removes exactly one entry.
///
/// A run that starts with an empty container (because the previous run erased everything) is
/// preceded by an untimed refill.
fn erase_phase<C, I, F, E>(
    container: &mut C,
    workload: &[Sample],
    runs: NonZero<usize>,
    ops: &KeyedOps<I, F, E>,
) -> Measurement
where
    C: Container,
    I: Fn(&mut C, Sample),
    E: Fn(&mut C, &Sample) -> usize,
{
    let mut all_erased = true;

    let durations = measure_prepared_runs(
        runs,
        container,
        |container| {
            if container.is_empty() {
                for &sample in workload {
                    (ops.insert)(container, sample);
                }
            }
        },
        |container| {
            for sample in workload {
                if (ops.erase)(container, sample) != 1 {
                    all_erased = false;
                }
            }
        },
    );

    Measurement::new(Phase::Erase, durations, workload.len(), all_erased)
}

/// Inserts every sample into the emptied container, clearing it again between runs.
fn reinsert_phase<C, I, F, E>(
    container: &mut C,
    workload: &[Sample],
    runs: NonZero<usize>,
    ops: &KeyedOps<I, F, E>,
) -> Measurement
where
    C: Container,
    I: Fn(&mut C, Sample),
{
    let durations = measure_prepared_runs(runs, container, C::clear, |container| {
        for &sample in workload {
            (ops.insert)(container, sample);
        }
    });

    Measurement::new(Phase::Reinsert, durations, workload.len(), true)
}

fn new_container<C: Container>(reserve: bool, capacity: usize) -> C {
    let mut container = C::default();

    if reserve {
        container.reserve(capacity);
    }

    container
}

fn record(report: &mut DriverReport, measurement: Measurement) {
    debug!(
        container = report.container(),
        phase = %measurement.phase(),
        ns_per_element = measurement.ns_per_element(),
        ok = measurement.is_ok(),
        "phase measured"
    );

    if !measurement.is_ok() {
        warn!(
            container = report.container(),
            phase = %measurement.phase(),
            "phase did not observe every expected outcome"
        );
    }

    report.push(measurement);
}

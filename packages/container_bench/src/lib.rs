#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compares the per-element cost of common operations across container implementations.
//!
//! A single randomized [`Workload`] (a shuffled permutation of `0..N`) is fed to a driver for
//! every container type in a fixed catalog:
//!
//! * [`bench_sequence`] measures appending every sample to a sequence.
//! * [`bench_set`] measures inserting, finding, erasing and reinserting every sample in a set.
//! * [`bench_map`] does the same for a map, with every sample mapped to a value derived from it.
//!
//! Every phase is repeated a fixed number of times and the fastest run is reported, divided by
//! the number of samples. Lookups and removals are also checked: a phase in which any lookup
//! missed or any removal did not remove exactly one entry is marked with `ERR`.
//!
//! The [`run_catalog`] entry point benchmarks every catalog entry and writes lines like these:
//!
//! ```text
//! # Ordered Sets:
//! - insert: 87ns, find: 61ns, erase: 95ns, reinsert: 83ns, --- alloc::collections::btree::set::BTreeSet<u64>:
//! ```
//!
//! # Benchmarking a single container type
//!
//! ```
//! use std::collections::HashSet;
//! use std::num::NonZero;
//!
//! use container_bench::{Workload, bench_set};
//!
//! let workload = Workload::generate(10_000).unwrap();
//! let report = bench_set::<HashSet<u64>>(&workload, NonZero::new(3).unwrap());
//!
//! assert!(report.is_ok());
//! println!("{report}");
//! ```
//!
//! # Adding container types
//!
//! Drivers accept any type that implements [`Container`] and one of [`SequenceContainer`],
//! [`SetContainer`] or [`MapContainer`]. Override [`Container::RESERVABLE`] and
//! [`Container::reserve`] if the type can pre-allocate capacity; the drivers then add an
//! "insert (reserved)" phase.
//!
//! This package is a development tool. Its numbers are only comparable between container types
//! measured in the same process.

mod catalog;
mod config;
mod container;
mod driver;
mod error;
mod hashing;
mod report;
mod timing;
mod workload;

pub use catalog::*;
pub use config::*;
pub use container::*;
pub use driver::*;
pub use error::*;
pub use hashing::*;
pub use report::*;
pub use timing::*;
pub use workload::*;

/// The element type of every workload and container under test.
pub type Sample = u64;

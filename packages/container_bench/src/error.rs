use std::io;

use thiserror::Error;

/// Errors that can occur while preparing or reporting a benchmark run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested element count cannot be represented as a [`Sample`][crate::Sample].
    #[error("workload of {count} elements does not fit in the sample type")]
    WorkloadTooLarge {
        /// The element count that was requested.
        count: usize,
    },

    /// The caller provided an explicit workload that is not a permutation of `0..len`.
    #[error("workload is not a permutation of 0..{len}: {problem}")]
    NotPermutation {
        /// Length of the rejected workload.
        len: usize,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// Writing the report to its destination failed.
    #[error("failed to write benchmark report")]
    Output(#[from] io::Error),
}

/// A specialized `Result` type for benchmark operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

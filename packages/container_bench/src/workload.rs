//! Randomized input shared by every driver.

use std::ops::Deref;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Error, Result, Sample};

/// A shuffled permutation of `0..len`, used as input for every benchmark driver.
///
/// Every value is unique, which the find and erase correctness checks depend on:
/// inserting the whole workload into a set or map yields exactly `len` entries.
///
/// The workload is immutable once created. It dereferences to `[Sample]`.
///
/// # Examples
///
/// ```
/// use container_bench::Workload;
///
/// let workload = Workload::generate(1000).unwrap();
///
/// let mut sorted = workload.to_vec();
/// sorted.sort_unstable();
/// assert!(sorted.into_iter().eq(0..1000));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Workload {
    samples: Vec<Sample>,
}

impl Workload {
    /// Generates a workload of `count` samples in an order seeded from operating system entropy.
    ///
    /// Successive calls (and successive processes) get different orderings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkloadTooLarge`] if `count` does not fit in [`Sample`].
    pub fn generate(count: usize) -> Result<Self> {
        Self::generate_with_rng(count, &mut rand::rng())
    }

    /// Generates a workload of `count` samples, shuffled with the provided random number
    /// generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkloadTooLarge`] if `count` does not fit in [`Sample`].
    pub fn generate_with_rng<R>(count: usize, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let Ok(end) = Sample::try_from(count) else {
            return Err(Error::WorkloadTooLarge { count });
        };

        let mut samples: Vec<Sample> = (0..end).collect();
        samples.shuffle(rng);

        Ok(Self { samples })
    }

    /// Wraps an explicit ordering of `0..samples.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPermutation`] if any value is out of range or appears twice.
    pub fn from_permutation(samples: Vec<Sample>) -> Result<Self> {
        let len = samples.len();
        let mut seen = vec![false; len];

        for &sample in &samples {
            let slot = usize::try_from(sample)
                .ok()
                .and_then(|index| seen.get_mut(index))
                .ok_or_else(|| Error::NotPermutation {
                    len,
                    problem: format!("value {sample} is out of range"),
                })?;

            if *slot {
                return Err(Error::NotPermutation {
                    len,
                    problem: format!("value {sample} appears more than once"),
                });
            }

            *slot = true;
        }

        Ok(Self { samples })
    }

    /// The samples, in benchmark order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl Deref for Workload {
    type Target = [Sample];

    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn assert_is_permutation(workload: &Workload) {
        let mut sorted = workload.to_vec();
        sorted.sort_unstable();

        let expected: Vec<Sample> = (0..sorted.len() as Sample).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn generated_workload_is_permutation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for count in [0, 1, 2, 5, 17, 1000, 65_537] {
            let workload = Workload::generate_with_rng(count, &mut rng).unwrap();

            assert_eq!(workload.len(), count);
            assert_is_permutation(&workload);
        }
    }

    #[test]
    fn entropy_seeded_workload_is_permutation() {
        let workload = Workload::generate(10_000).unwrap();

        assert_is_permutation(&workload);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = Workload::generate_with_rng(500, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Workload::generate_with_rng(500, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn large_workload_is_shuffled() {
        let workload = Workload::generate_with_rng(10_000, &mut StdRng::seed_from_u64(7)).unwrap();

        // The identity ordering is one of 10000! possibilities.
        assert!(!workload.iter().copied().eq(0..10_000));
    }

    #[test]
    fn from_permutation_accepts_permutation() {
        let workload = Workload::from_permutation(vec![3, 1, 4, 0, 2]).unwrap();

        assert_eq!(workload.samples(), &[3, 1, 4, 0, 2]);
    }

    #[test]
    fn from_permutation_accepts_empty() {
        let workload = Workload::from_permutation(Vec::new()).unwrap();

        assert!(workload.is_empty());
    }

    #[test]
    fn from_permutation_rejects_duplicate() {
        let result = Workload::from_permutation(vec![0, 1, 1]);

        assert!(matches!(result, Err(Error::NotPermutation { len: 3, .. })));
    }

    #[test]
    fn from_permutation_rejects_out_of_range() {
        let result = Workload::from_permutation(vec![0, 5, 1]);

        assert!(matches!(result, Err(Error::NotPermutation { len: 3, .. })));
    }
}

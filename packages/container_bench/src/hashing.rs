//! A strongly universal hash for 64-bit samples.
//!
//! See <https://lemire.me/blog/2018/08/15/fast-strongly-universal-64-bit-hashing-everywhere/>.

use std::hash::{BuildHasherDefault, Hasher};

use crate::Sample;

const LOW_MULTIPLIER: u64 = 0xA24B_AED4_963E_E407;
const HIGH_MULTIPLIER: u64 = 0x9FB2_1C65_1E98_DF25;

/// Hashes a sample by multiplying both of its halves with odd constants.
///
/// Integer keys feed [`Hasher::write_u64`] directly, so hashing a [`Sample`] is a couple of
/// multiplications and rotations. Arbitrary bytes are folded into 64-bit words first.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleHasher {
    state: u64,
}

/// Hash state for standard collections that hash with [`SampleHasher`].
pub type SampleHashState = BuildHasherDefault<SampleHasher>;

/// Hashes a single sample.
#[must_use]
#[inline]
pub fn hash_sample(sample: Sample) -> u64 {
    let low = sample.wrapping_mul(LOW_MULTIPLIER);
    let high = sample.rotate_right(32).wrapping_mul(HIGH_MULTIPLIER);

    low.wrapping_add(high).rotate_right(32)
}

impl Hasher for SampleHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            for (slot, byte) in word.iter_mut().zip(chunk) {
                *slot = *byte;
            }

            self.write_u64(u64::from_le_bytes(word));
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.state = hash_sample(self.state ^ i);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;
    use std::hash::BuildHasher;

    use super::*;

    #[test]
    fn zero_hashes_to_zero() {
        assert_eq!(hash_sample(0), 0);
    }

    #[test]
    fn hash_matches_reference_formula() {
        let x: u64 = 0x0123_4567_89AB_CDEF;

        let h1 = x.wrapping_mul(0xA24B_AED4_963E_E407);
        let h2 = ((x >> 32) | (x << 32)).wrapping_mul(0x9FB2_1C65_1E98_DF25);
        let sum = h1.wrapping_add(h2);
        let expected = (sum >> 32) | (sum << 32);

        assert_eq!(hash_sample(x), expected);
    }

    #[test]
    fn sequential_samples_do_not_collide() {
        let hashes: HashSet<u64> = (0..100_000).map(hash_sample).collect();

        assert_eq!(hashes.len(), 100_000);
    }

    #[test]
    fn build_hasher_uses_sample_hash() {
        let state = SampleHashState::default();

        assert_eq!(state.hash_one(12345_u64), hash_sample(12345));
    }

    #[test]
    fn byte_input_is_hashed_in_words() {
        let mut hasher = SampleHasher::default();
        hasher.write(&[1, 0, 0, 0, 0, 0, 0, 0, 2]);

        let mut expected = SampleHasher::default();
        expected.write_u64(1);
        expected.write_u64(2);

        assert_eq!(hasher.finish(), expected.finish());
    }
}

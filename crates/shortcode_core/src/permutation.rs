//! # Seeded Permutation Engine
//!
//! Fisher-Yates shuffle driven by the bit-fraction RNG, plus its exact
//! inverse.
//!
//! ## Forward pass
//!
//! For `i` from `len - 1` down to `0`, draw `j = next_index(seed, 16, i)`,
//! step the seed up by one, and swap `i` with `j`.
//!
//! ## Inverse pass
//!
//! Every swap is its own inverse, so undoing the shuffle means replaying
//! the same swaps in reverse order. The counter starts at the last seed the
//! forward pass used (`seed + len - 1`) and steps down, while `i` walks
//! `0..len`. The bound for step `i` is `i`, the same bound the forward
//! pass used when it was at `i`.
//!
//! Both passes must keep the same bit width, stepping direction, and bound
//! rule, or the inverse drifts.

use crate::error::{EncodingError, EncodingResult};
use crate::rng::{next_index, PERMUTATION_BIT_WIDTH};

/// A permutation identified by its seed.
///
/// The value is only the seed; the actual order depends on the length of
/// the sequence it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeededPermutation {
    seed: u64,
}

impl SeededPermutation {
    /// Creates a permutation for `seed`.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn seed(self) -> u64 {
        self.seed
    }

    /// Shuffles `items` in place.
    ///
    /// # Errors
    ///
    /// Fails with [`EncodingError::SeedOverflow`] if `seed + len - 1`
    /// does not fit the permutation bit width. `items` is left untouched
    /// in that case.
    pub fn apply_in_place<T>(self, items: &mut [T]) -> EncodingResult<()> {
        self.check_span(items.len())?;

        let mut seed = self.seed;
        for i in (0..items.len()).rev() {
            let j = next_index(seed, PERMUTATION_BIT_WIDTH, i as u64)?;
            seed += 1;
            items.swap(i, j as usize);
        }
        Ok(())
    }

    /// Undoes [`apply_in_place`](Self::apply_in_place) with the same seed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`apply_in_place`](Self::apply_in_place).
    pub fn invert_in_place<T>(self, items: &mut [T]) -> EncodingResult<()> {
        let Some(last_step) = items.len().checked_sub(1) else {
            return Ok(());
        };
        self.check_span(items.len())?;

        let mut seed = self.seed + last_step as u64;
        for i in 0..items.len() {
            let j = next_index(seed, PERMUTATION_BIT_WIDTH, i as u64)?;
            seed = seed.saturating_sub(1);
            items.swap(i, j as usize);
        }
        Ok(())
    }

    /// Returns a shuffled copy of `items`.
    ///
    /// # Errors
    ///
    /// See [`apply_in_place`](Self::apply_in_place).
    pub fn apply<T: Clone>(self, items: &[T]) -> EncodingResult<Vec<T>> {
        let mut out = items.to_vec();
        self.apply_in_place(&mut out)?;
        Ok(out)
    }

    /// Returns a copy of `items` in the order it had before [`apply`](Self::apply).
    ///
    /// # Errors
    ///
    /// See [`apply_in_place`](Self::apply_in_place).
    pub fn invert<T: Clone>(self, items: &[T]) -> EncodingResult<Vec<T>> {
        let mut out = items.to_vec();
        self.invert_in_place(&mut out)?;
        Ok(out)
    }

    /// Checks the whole seed run `seed..seed + len` fits the bit width
    /// before any element moves.
    fn check_span(self, len: usize) -> EncodingResult<()> {
        let Some(last_step) = len.checked_sub(1) else {
            return Ok(());
        };
        let last_seed = self
            .seed
            .checked_add(last_step as u64)
            .ok_or(EncodingError::SeedOverflow { seed: u64::MAX, bit_width: PERMUTATION_BIT_WIDTH })?;
        if last_seed >> PERMUTATION_BIT_WIDTH != 0 {
            return Err(EncodingError::SeedOverflow {
                seed: last_seed,
                bit_width: PERMUTATION_BIT_WIDTH,
            });
        }
        Ok(())
    }
}

/// Shuffles a copy of `items` with `seed`.
///
/// # Errors
///
/// See [`SeededPermutation::apply_in_place`].
#[inline]
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> EncodingResult<Vec<T>> {
    SeededPermutation::new(seed).apply(items)
}

/// Restores the order [`shuffle`] changed.
///
/// # Errors
///
/// See [`SeededPermutation::apply_in_place`].
#[inline]
pub fn unshuffle<T: Clone>(items: &[T], seed: u64) -> EncodingResult<Vec<T>> {
    SeededPermutation::new(seed).invert(items)
}

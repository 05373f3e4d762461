//! # Bit-Fraction RNG
//!
//! Maps an integer seed to an index in `[0, max_value]`.
//!
//! The seed is written as `bit_width` binary digits, the digit order is
//! reversed, and the result is read back as a fraction of the largest
//! `bit_width`-bit number. Consecutive seeds land far apart, yet any
//! seed maps to exactly one index. The permutation engine relies on that:
//! replaying a seed sequence backwards reproduces the forward draws.
//!
//! ## Determinism Guarantee
//!
//! Everything is integer arithmetic. The same `(seed, bit_width, max_value)`
//! produces the same index on every platform.

use crate::error::{EncodingError, EncodingResult};

/// Bit width used by the permutation engine.
pub const PERMUTATION_BIT_WIDTH: u32 = 16;

/// Draws the index for `seed`.
///
/// Returns `round(reverse_bits(seed) / (2^bit_width - 1) * max_value)`,
/// rounding halves up.
///
/// # Errors
///
/// - [`EncodingError::InvalidBitWidth`] if `bit_width` is 0 or above 64
/// - [`EncodingError::SeedOverflow`] if `seed` needs more than `bit_width` bits
///
/// # Example
///
/// ```rust
/// use shortcode_core::rng::next_index;
///
/// // 1 -> 0b0000_0000_0000_0001 -> 0b1000_0000_0000_0000 ~ 0.5
/// assert_eq!(next_index(1, 16, 10).unwrap(), 5);
/// ```
pub fn next_index(seed: u64, bit_width: u32, max_value: u64) -> EncodingResult<u64> {
    if bit_width == 0 || bit_width > 64 {
        return Err(EncodingError::InvalidBitWidth(bit_width));
    }
    if bit_width < 64 && seed >> bit_width != 0 {
        return Err(EncodingError::SeedOverflow { seed, bit_width });
    }

    let reversed = u128::from(seed.reverse_bits() >> (64 - bit_width));
    let denominator = (1u128 << bit_width) - 1;

    let scaled = reversed * u128::from(max_value);
    let quotient = scaled / denominator;
    let remainder = scaled % denominator;
    let rounded = quotient + u128::from(remainder * 2 >= denominator);

    // reversed <= denominator, so rounded <= max_value
    Ok(rounded as u64)
}

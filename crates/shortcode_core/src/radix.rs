//! # Base Converter
//!
//! Fixed-width positional encoding in any radix, with digits taken from
//! an arbitrary symbol list.
//!
//! Digits are written most significant first and left-padded with the
//! zero symbol (`alphabet[0]`), so every value of a field encodes to the
//! same number of symbols.

use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, EncodingResult};

/// Number of distinct values `width` base `radix` digits can hold.
///
/// # Errors
///
/// Fails if `radix < 2`, `width == 0`, or the capacity overflows `u64`.
pub fn capacity(radix: u32, width: u32) -> EncodingResult<u64> {
    if radix < 2 {
        return Err(EncodingError::InvalidRadix(radix));
    }
    if width == 0 {
        return Err(EncodingError::InvalidWidth(width));
    }
    u64::from(radix)
        .checked_pow(width)
        .ok_or(EncodingError::CapacityOverflow { radix, width })
}

/// Encodes `value` as exactly `width` base `radix` digits.
///
/// # Errors
///
/// - [`EncodingError::ValueOutOfRange`] if `value > radix^width - 1`
/// - [`EncodingError::AlphabetTooSmall`] if `alphabet` has fewer than `radix` symbols
/// - [`EncodingError::InvalidRadix`] / [`EncodingError::InvalidWidth`] for degenerate fields
/// - [`EncodingError::CapacityOverflow`] if `radix^width` exceeds `u64`
pub fn encode(radix: u32, value: u64, alphabet: &[char], width: u32) -> EncodingResult<String> {
    let cap = capacity(radix, width)?;
    check_alphabet(radix, alphabet)?;
    if value >= cap {
        return Err(EncodingError::ValueOutOfRange { value, radix, width });
    }

    let base = u64::from(radix);
    let mut remaining = value;
    let mut digits = Vec::with_capacity(width as usize);
    for _ in 0..width {
        // remainder < radix <= alphabet.len()
        digits.push(alphabet[(remaining % base) as usize]);
        remaining /= base;
    }

    Ok(digits.into_iter().rev().collect())
}

/// Decodes a base `radix` digit string.
///
/// Any length is accepted; each symbol is weighted by its position.
///
/// # Errors
///
/// - [`EncodingError::UnknownSymbol`] if a symbol is not in `alphabet`
/// - [`EncodingError::DigitOutOfRange`] if a symbol's value is `>= radix`
/// - [`EncodingError::NumericOverflow`] if the result exceeds `u64`
pub fn decode(radix: u32, digits: &str, alphabet: &[char]) -> EncodingResult<u64> {
    if radix < 2 {
        return Err(EncodingError::InvalidRadix(radix));
    }
    check_alphabet(radix, alphabet)?;

    let base = u64::from(radix);
    digits.chars().enumerate().try_fold(0u64, |total, (position, symbol)| {
        let digit = alphabet
            .iter()
            .position(|&s| s == symbol)
            .ok_or(EncodingError::UnknownSymbol { symbol, position })?;
        if digit as u64 >= base {
            return Err(EncodingError::DigitOutOfRange { symbol, position, radix });
        }
        total
            .checked_mul(base)
            .and_then(|t| t.checked_add(digit as u64))
            .ok_or(EncodingError::NumericOverflow)
    })
}

#[inline]
fn check_alphabet(radix: u32, alphabet: &[char]) -> EncodingResult<()> {
    if alphabet.len() < radix as usize {
        return Err(EncodingError::AlphabetTooSmall { radix, len: alphabet.len() });
    }
    Ok(())
}

/// Radix and digit count of one encoded field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Numeral base.
    pub radix: u32,
    /// Number of digits.
    pub width: u32,
}

impl FieldSpec {
    /// Creates a field spec.
    #[inline]
    #[must_use]
    pub const fn new(radix: u32, width: u32) -> Self {
        Self { radix, width }
    }

    /// Number of distinct values the field holds (`radix^width`).
    ///
    /// # Errors
    ///
    /// See [`capacity`].
    #[inline]
    pub fn capacity(self) -> EncodingResult<u64> {
        capacity(self.radix, self.width)
    }

    /// Checks the field is usable with `alphabet_len` symbols.
    ///
    /// # Errors
    ///
    /// Fails on a degenerate radix or width, capacity overflow, or an
    /// alphabet smaller than the radix.
    pub fn validate(self, alphabet_len: usize) -> EncodingResult<u64> {
        let cap = self.capacity()?;
        if alphabet_len < self.radix as usize {
            return Err(EncodingError::AlphabetTooSmall {
                radix: self.radix,
                len: alphabet_len,
            });
        }
        Ok(cap)
    }

    /// Encodes `value` with this field's radix and width.
    ///
    /// # Errors
    ///
    /// See [`encode`].
    #[inline]
    pub fn encode(self, value: u64, alphabet: &[char]) -> EncodingResult<String> {
        encode(self.radix, value, alphabet, self.width)
    }

    /// Decodes digits in this field's radix.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    #[inline]
    pub fn decode(self, digits: &str, alphabet: &[char]) -> EncodingResult<u64> {
        decode(self.radix, digits, alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base36() -> Vec<char> {
        "0123456789abcdefghijklmnopqrstuvwxyz".chars().collect()
    }

    #[test]
    fn test_encode_pads() {
        let a = base36();
        assert_eq!(encode(16, 10, &a, 2).unwrap(), "0a");
        assert_eq!(encode(16, 255, &a, 2).unwrap(), "ff");
        assert_eq!(encode(10, 0, &a, 4).unwrap(), "0000");
        assert_eq!(encode(36, 19797, &a, 3).unwrap(), "f9x");
    }

    #[test]
    fn test_encode_boundary() {
        let a = base36();
        assert_eq!(encode(22, 22 * 22 * 22 - 1, &a, 3).unwrap(), "lll");
        assert_eq!(
            encode(22, 22 * 22 * 22, &a, 3),
            Err(EncodingError::ValueOutOfRange { value: 10648, radix: 22, width: 3 })
        );
    }

    #[test]
    fn test_encode_rejects_oversized_width() {
        let a = base36();
        assert_eq!(
            encode(2, 1, &a, u32::MAX),
            Err(EncodingError::CapacityOverflow { radix: 2, width: u32::MAX })
        );
        assert_eq!(
            encode(36, 0, &a, 13),
            Err(EncodingError::CapacityOverflow { radix: 36, width: 13 })
        );
        assert_eq!(
            encode(36, u64::MAX, &a, 12),
            Err(EncodingError::ValueOutOfRange { value: u64::MAX, radix: 36, width: 12 })
        );
        assert_eq!(encode(2, 1, &a, 63).unwrap().len(), 63);
    }

    #[test]
    fn test_encode_alphabet_too_small() {
        let a: Vec<char> = "01234567".chars().collect();
        assert_eq!(
            encode(16, 1, &a, 2),
            Err(EncodingError::AlphabetTooSmall { radix: 16, len: 8 })
        );
    }

    #[test]
    fn test_decode() {
        let a = base36();
        assert_eq!(decode(16, "0a", &a).unwrap(), 10);
        assert_eq!(decode(36, "f9x", &a).unwrap(), 19797);
        // Length is not fixed on decode
        assert_eq!(decode(10, "00042", &a).unwrap(), 42);
        assert_eq!(decode(10, "", &a).unwrap(), 0);
    }

    #[test]
    fn test_decode_unknown_symbol() {
        let a = base36();
        assert_eq!(
            decode(36, "a#b", &a),
            Err(EncodingError::UnknownSymbol { symbol: '#', position: 1 })
        );
    }

    #[test]
    fn test_decode_digit_out_of_range() {
        let a = base36();
        assert_eq!(
            decode(16, "0g", &a),
            Err(EncodingError::DigitOutOfRange { symbol: 'g', position: 1, radix: 16 })
        );
    }

    #[test]
    fn test_decode_overflow() {
        let a = base36();
        assert_eq!(decode(36, "zzzzzzzzzzzzzzzz", &a), Err(EncodingError::NumericOverflow));
    }

    #[test]
    fn test_permuted_alphabet() {
        let a: Vec<char> = "zyxwvutsrqponmlkjihgfedcba9876543210".chars().collect();
        let encoded = encode(16, 171, &a, 2).unwrap();
        assert_eq!(encoded, "po");
        assert_eq!(decode(16, &encoded, &a).unwrap(), 171);
    }

    #[test]
    fn test_field_spec() {
        let field = FieldSpec::new(16, 2);
        assert_eq!(field.capacity().unwrap(), 256);
        assert_eq!(field.validate(36).unwrap(), 256);
        assert_eq!(
            FieldSpec::new(71, 3).validate(36),
            Err(EncodingError::AlphabetTooSmall { radix: 71, len: 36 })
        );
        assert_eq!(FieldSpec::new(1, 3).capacity(), Err(EncodingError::InvalidRadix(1)));
        assert_eq!(FieldSpec::new(10, 0).capacity(), Err(EncodingError::InvalidWidth(0)));
        assert_eq!(
            FieldSpec::new(71, 20).capacity(),
            Err(EncodingError::CapacityOverflow { radix: 71, width: 20 })
        );
    }
}

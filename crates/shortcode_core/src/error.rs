//! # Encoding Error Types
//!
//! All errors that can occur in the core encoding primitives.

use thiserror::Error;

/// Broad class of an error.
///
/// Every error in the workspace maps onto exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value does not fit the configured field capacity.
    Range,
    /// The configuration cannot support the requested operation.
    Config,
    /// The input is malformed.
    Decode,
}

/// Errors that can occur while converting or permuting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Value is larger than `radix^width - 1`.
    #[error("{value} does not fit into {width} base {radix} digits")]
    ValueOutOfRange {
        /// The value that was rejected.
        value: u64,
        /// Radix of the conversion.
        radix: u32,
        /// Number of digits available.
        width: u32,
    },

    /// Radix must be at least 2.
    #[error("invalid radix {0}: must be at least 2")]
    InvalidRadix(u32),

    /// Width must be at least 1.
    #[error("invalid digit width {0}: must be at least 1")]
    InvalidWidth(u32),

    /// `radix^width` does not fit into a `u64`.
    #[error("capacity of {width} base {radix} digits overflows u64")]
    CapacityOverflow {
        /// Radix of the field.
        radix: u32,
        /// Number of digits.
        width: u32,
    },

    /// The alphabet has fewer symbols than the radix needs.
    #[error("too few symbols in alphabet: base {radix} needs {radix}, have {len}")]
    AlphabetTooSmall {
        /// Requested radix.
        radix: u32,
        /// Symbols available.
        len: usize,
    },

    /// The alphabet has no symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// A symbol appears twice in the alphabet.
    #[error("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// Whitespace and control characters cannot be typed back reliably.
    #[error("symbol {symbol:?} is not printable")]
    NonPrintableSymbol {
        /// The rejected symbol.
        symbol: char,
    },

    /// Bit width outside `1..=64`.
    #[error("invalid bit width {0}: must be between 1 and 64")]
    InvalidBitWidth(u32),

    /// The seed needs more binary digits than the bit width allows.
    #[error("seed {seed} is larger than {bit_width} binary digits")]
    SeedOverflow {
        /// The seed that overflowed.
        seed: u64,
        /// Configured bit width.
        bit_width: u32,
    },

    /// A symbol is not part of the alphabet.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The unknown symbol.
        symbol: char,
        /// Position in the input.
        position: usize,
    },

    /// A symbol is in the alphabet but is not a digit in this radix.
    #[error("symbol {symbol:?} at position {position} is not a base {radix} digit")]
    DigitOutOfRange {
        /// The offending symbol.
        symbol: char,
        /// Position in the input.
        position: usize,
        /// Radix of the conversion.
        radix: u32,
    },

    /// The decoded value does not fit into a `u64`.
    #[error("decoded value overflows u64")]
    NumericOverflow,
}

impl EncodingError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ValueOutOfRange { .. } => ErrorKind::Range,
            Self::InvalidRadix(_)
            | Self::InvalidWidth(_)
            | Self::CapacityOverflow { .. }
            | Self::AlphabetTooSmall { .. }
            | Self::EmptyAlphabet
            | Self::DuplicateSymbol { .. }
            | Self::NonPrintableSymbol { .. }
            | Self::InvalidBitWidth(_)
            | Self::SeedOverflow { .. } => ErrorKind::Config,
            Self::UnknownSymbol { .. } | Self::DigitOutOfRange { .. } | Self::NumericOverflow => {
                ErrorKind::Decode
            }
        }
    }
}

/// Result type for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let range = EncodingError::ValueOutOfRange { value: 256, radix: 16, width: 2 };
        assert_eq!(range.kind(), ErrorKind::Range);
        assert_eq!(EncodingError::AlphabetTooSmall { radix: 71, len: 36 }.kind(), ErrorKind::Config);
        assert_eq!(EncodingError::SeedOverflow { seed: 1 << 16, bit_width: 16 }.kind(), ErrorKind::Config);
        assert_eq!(EncodingError::NumericOverflow.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_display() {
        let err = EncodingError::ValueOutOfRange { value: 256, radix: 16, width: 2 };
        assert_eq!(err.to_string(), "256 does not fit into 2 base 16 digits");
    }
}

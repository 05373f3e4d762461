//! # Codec Error Types
//!
//! All errors that can occur while configuring, generating or parsing
//! shortcodes.

use std::fmt;

use chrono::NaiveDate;
use shortcode_core::{EncodingError, ErrorKind};
use thiserror::Error;

/// The fields a shortcode carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Store identifier.
    Store,
    /// Transaction identifier.
    Transaction,
    /// Days since the epoch.
    Date,
    /// Permutation seed.
    Seed,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Store => "store id",
            Self::Transaction => "transaction id",
            Self::Date => "date",
            Self::Seed => "seed",
        })
    }
}

/// Errors that can occur in the codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A radix conversion or permutation failed.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// A value does not fit its field.
    #[error("{field} {value} is too large: must be below {capacity}")]
    FieldOutOfRange {
        /// The field that overflowed.
        field: Field,
        /// The rejected value.
        value: u64,
        /// `radix^width` of the field.
        capacity: u64,
    },

    /// Dates before the epoch cannot be counted in days since it.
    #[error("date {date} is before the epoch {epoch}")]
    DateBeforeEpoch {
        /// The rejected date.
        date: NaiveDate,
        /// Configured epoch.
        epoch: NaiveDate,
    },

    /// Seed outside `[1, seed capacity - 1)`.
    #[error("seed {seed} is outside the valid range {min}..{max}")]
    SeedOutOfRange {
        /// The rejected seed.
        seed: u64,
        /// Smallest valid seed.
        min: u64,
        /// One past the largest valid seed.
        max: u64,
    },

    /// The shortcode has the wrong number of symbols.
    #[error("invalid shortcode length {actual}: expected {expected}")]
    InvalidLength {
        /// Configured total length.
        expected: usize,
        /// Length of the input, in symbols.
        actual: usize,
    },

    /// The seed stored in a shortcode could not have been drawn by the encoder.
    #[error("shortcode carries invalid seed {0}")]
    InvalidSeed(u64),

    /// The decoded day count does not map to a calendar date.
    #[error("shortcode carries {0} days past the epoch, which is not a valid date")]
    InvalidDate(u64),

    /// The configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigRead {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        reason: String,
    },

    /// The configuration file is not valid TOML for a codec configuration.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl CodecError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Encoding(inner) => inner.kind(),
            Self::FieldOutOfRange { .. } | Self::DateBeforeEpoch { .. } | Self::SeedOutOfRange { .. } => {
                ErrorKind::Range
            }
            Self::InvalidLength { .. } | Self::InvalidSeed(_) | Self::InvalidDate(_) => {
                ErrorKind::Decode
            }
            Self::InvalidConfig(_) | Self::ConfigRead { .. } | Self::ConfigParse(_) => {
                ErrorKind::Config
            }
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

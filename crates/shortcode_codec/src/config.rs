//! # Codec Configuration
//!
//! Alphabet, per-field radix and width, and the epoch days are counted
//! from. Loaded once (from TOML or the built-in reference) and never
//! changed afterwards; one configuration per promotion is the intended
//! granularity.
//!
//! ## File Format
//!
//! ```toml
//! alphabet = "0123456789abcdefghijklmnopqrstuvwxyz"
//! epoch = "1970-01-01"
//!
//! [store]
//! radix = 16
//! width = 2
//!
//! [transaction]
//! radix = 22
//! width = 3
//!
//! [date]
//! radix = 36
//! width = 3
//!
//! [seed]
//! radix = 36
//! width = 1
//! ```
//!
//! `epoch` must be a quoted string and defaults to 1970-01-01.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shortcode_core::{Alphabet, FieldSpec};

use crate::error::{CodecError, CodecResult};

/// Complete description of a shortcode format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Digit symbols, in digit order.
    pub alphabet: Alphabet,
    /// Day zero of the date field.
    #[serde(default)]
    pub epoch: NaiveDate,
    /// Store id field.
    pub store: FieldSpec,
    /// Transaction id field.
    pub transaction: FieldSpec,
    /// Days-since-epoch field.
    pub date: FieldSpec,
    /// Seed field, written with the unpermuted alphabet.
    pub seed: FieldSpec,
}

impl CodecConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Only syntax and types are checked here; [`ShortcodeCodec::new`]
    /// validates the field combination.
    ///
    /// [`ShortcodeCodec::new`]: crate::ShortcodeCodec::new
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ConfigParse`] for malformed TOML, unknown keys,
    /// or an invalid alphabet.
    pub fn from_toml_str(text: &str) -> CodecResult<Self> {
        toml::from_str(text).map_err(|e| CodecError::ConfigParse(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ConfigRead`] if the file cannot be read, or
    /// the errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> CodecResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CodecError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), symbols = config.alphabet.len(), "loaded codec configuration");
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] if serialization fails.
    pub fn to_toml_string(&self) -> CodecResult<String> {
        toml::to_string(self).map_err(|e| CodecError::InvalidConfig(e.to_string()))
    }

    /// Symbols in a shortcode: all field widths plus the seed width.
    #[must_use]
    pub fn total_width(&self) -> usize {
        [self.store, self.transaction, self.date, self.seed]
            .iter()
            .map(|field| field.width as usize)
            .sum()
    }
}

impl Default for CodecConfig {
    /// The reference format: 71 symbols, store 16/2, transaction 22/3,
    /// date 71/3, seed 71/1, days counted from 1970-01-01.
    fn default() -> Self {
        Self {
            alphabet: Alphabet::reference(),
            // NaiveDate's default is 1970-01-01
            epoch: NaiveDate::default(),
            store: FieldSpec::new(16, 2),
            transaction: FieldSpec::new(22, 3),
            date: FieldSpec::new(71, 3),
            seed: FieldSpec::new(71, 1),
        }
    }
}

//! # Alphabet
//!
//! The ordered symbol set every radix conversion draws its digits from.
//!
//! Symbol `i` stands for digit value `i` in any radix up to `len()`.
//! An alphabet is validated once on construction and never changes;
//! permuting it produces a new alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EncodingError, EncodingResult};
use crate::permutation::SeededPermutation;

/// Symbols of the reference alphabet: digits, lower and upper case letters,
/// then nine punctuation marks easy to type on an English keyboard.
pub const REFERENCE_SYMBOLS: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*?";

/// An ordered set of unique, printable symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a list of symbols.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, repeats a symbol, or contains
    /// whitespace or control characters.
    pub fn from_symbols(symbols: Vec<char>) -> EncodingResult<Self> {
        if symbols.is_empty() {
            return Err(EncodingError::EmptyAlphabet);
        }

        for (i, &symbol) in symbols.iter().enumerate() {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(EncodingError::NonPrintableSymbol { symbol });
            }
            if symbols[..i].contains(&symbol) {
                return Err(EncodingError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { symbols })
    }

    /// The 71-symbol reference alphabet ([`REFERENCE_SYMBOLS`]).
    #[must_use]
    pub fn reference() -> Self {
        Self {
            symbols: REFERENCE_SYMBOLS.chars().collect(),
        }
    }

    /// Number of symbols.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; construction rejects empty alphabets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in digit order.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Digit value of `symbol`, if it belongs to this alphabet.
    #[inline]
    #[must_use]
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Whether `symbol` belongs to this alphabet.
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Reorders the symbols with a seeded shuffle.
    ///
    /// The same seed always yields the same order, so a decoder can
    /// rebuild the alphabet an encoder used from the seed alone.
    ///
    /// # Errors
    ///
    /// Fails with [`EncodingError::SeedOverflow`] when the seed sequence
    /// runs past the permutation's bit width.
    pub fn permuted(&self, seed: u64) -> EncodingResult<Self> {
        let symbols = SeededPermutation::new(seed).apply(&self.symbols)?;
        Ok(Self { symbols })
    }
}

impl FromStr for Alphabet {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbols(s.chars().collect())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|&s| fmt::Write::write_char(f, s))
    }
}

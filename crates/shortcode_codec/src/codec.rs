//! # Shortcode Codec
//!
//! Packs a store id, a transaction id and a date into a fixed-length code,
//! and unpacks it again.
//!
//! ## Layout
//!
//! ```text
//!  seed ──► permute alphabet ──► store | transaction | date digits
//!                                          │
//!                      shuffle symbols by seed
//!                                          ▼
//!                 [ shuffled body .............. ][ seed ]
//!                                                  plain alphabet
//! ```
//!
//! The seed is the only random input. It sits unshuffled at the end,
//! written with the plain alphabet, so a decoder can read it first and
//! rebuild everything else from it.
//!
//! ## Not a Security Boundary
//!
//! Anyone holding the configuration can decode (and forge) codes. The
//! permutations make codes hard to read by eye, nothing more.

use std::fmt;
use std::ops::Range;

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use shortcode_core::{EncodingError, SeededPermutation, PERMUTATION_BIT_WIDTH};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult, Field};

/// Fields recovered from a shortcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedShortcode {
    /// Store identifier.
    pub store_id: u64,
    /// Transaction identifier.
    pub transaction_id: u64,
    /// Day the code was generated for.
    pub date: NaiveDate,
}

impl fmt::Display for DecodedShortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "store {}, transaction {}, date {}",
            self.store_id, self.transaction_id, self.date
        )
    }
}

/// Per-field capacities, computed once from the configuration.
#[derive(Clone, Copy, Debug)]
struct Capacities {
    store: u64,
    transaction: u64,
    date: u64,
    seed: u64,
}

/// Generates and parses shortcodes for one configuration.
///
/// Immutable after construction and safe to share between threads.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use shortcode_codec::{CodecConfig, ShortcodeCodec};
///
/// let codec = ShortcodeCodec::new(CodecConfig::default()).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
///
/// let code = codec.encode_on(200, 10_000, date).unwrap();
/// assert_eq!(code.chars().count(), codec.total_length());
///
/// let decoded = codec.decode(&code).unwrap();
/// assert_eq!((decoded.store_id, decoded.transaction_id, decoded.date), (200, 10_000, date));
/// ```
#[derive(Clone, Debug)]
pub struct ShortcodeCodec {
    config: CodecConfig,
    capacities: Capacities,
    body_len: usize,
    total_len: usize,
}

impl ShortcodeCodec {
    /// Validates `config` and builds a codec for it.
    ///
    /// # Errors
    ///
    /// Returns a [`ErrorKind::Config`](shortcode_core::ErrorKind::Config)
    /// error if a field has a degenerate radix or width, a radix exceeds
    /// the alphabet, the seed field leaves no valid seed, or the seed
    /// run of the longest permuted sequence exceeds the permutation bit
    /// width.
    pub fn new(config: CodecConfig) -> CodecResult<Self> {
        let symbols = config.alphabet.len();
        let capacities = Capacities {
            store: config.store.validate(symbols)?,
            transaction: config.transaction.validate(symbols)?,
            date: config.date.validate(symbols)?,
            seed: config.seed.validate(symbols)?,
        };

        // Seeds live in [1, capacity - 1)
        if capacities.seed < 3 {
            return Err(CodecError::InvalidConfig(format!(
                "seed field holds {} values, no valid seed remains",
                capacities.seed
            )));
        }

        let body_len = (config.store.width + config.transaction.width + config.date.width) as usize;
        let total_len = body_len + config.seed.width as usize;

        // The largest seed must still leave room for every draw of the
        // longest sequence it permutes.
        let longest = symbols.max(body_len) as u64;
        let last_seed = (capacities.seed - 2).saturating_add(longest - 1);
        if last_seed >> PERMUTATION_BIT_WIDTH != 0 {
            return Err(EncodingError::SeedOverflow {
                seed: last_seed,
                bit_width: PERMUTATION_BIT_WIDTH,
            }
            .into());
        }

        tracing::debug!(
            symbols,
            length = total_len,
            store_capacity = capacities.store,
            transaction_capacity = capacities.transaction,
            date_capacity = capacities.date,
            "codec ready"
        );

        Ok(Self {
            config,
            capacities,
            body_len,
            total_len,
        })
    }

    /// The configuration this codec was built from.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Length of every shortcode, in symbols.
    #[inline]
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.total_len
    }

    /// Seeds the encoder may draw.
    #[inline]
    #[must_use]
    pub fn seed_range(&self) -> Range<u64> {
        1..self.capacities.seed - 1
    }

    /// Number of distinct store ids.
    #[inline]
    #[must_use]
    pub fn store_capacity(&self) -> u64 {
        self.capacities.store
    }

    /// Number of distinct transaction ids.
    #[inline]
    #[must_use]
    pub fn transaction_capacity(&self) -> u64 {
        self.capacities.transaction
    }

    /// Last date the date field can represent.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.config
            .epoch
            .checked_add_days(Days::new(self.capacities.date - 1))
    }

    /// Whole days from the epoch to `date`.
    ///
    /// # Errors
    ///
    /// Fails if `date` is before the epoch or beyond the date field.
    pub fn days_since_epoch(&self, date: NaiveDate) -> CodecResult<u64> {
        let epoch = self.config.epoch;
        let days = u64::try_from((date - epoch).num_days())
            .map_err(|_| CodecError::DateBeforeEpoch { date, epoch })?;
        if days >= self.capacities.date {
            return Err(CodecError::FieldOutOfRange {
                field: Field::Date,
                value: days,
                capacity: self.capacities.date,
            });
        }
        Ok(days)
    }

    /// Encodes with today's UTC date and a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`encode_with_seed`](Self::encode_with_seed).
    pub fn encode(&self, store_id: u64, transaction_id: u64) -> CodecResult<String> {
        self.encode_on(store_id, transaction_id, Utc::now().date_naive())
    }

    /// Encodes for a given date with a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`encode_with_seed`](Self::encode_with_seed).
    pub fn encode_on(&self, store_id: u64, transaction_id: u64, date: NaiveDate) -> CodecResult<String> {
        self.encode_with_rng(store_id, transaction_id, date, &mut rand::thread_rng())
    }

    /// Encodes, drawing the seed from `rng`.
    ///
    /// Inputs are checked before the draw, so a rejected call does not
    /// advance `rng`.
    ///
    /// # Errors
    ///
    /// See [`encode_with_seed`](Self::encode_with_seed).
    pub fn encode_with_rng<R: Rng + ?Sized>(
        &self,
        store_id: u64,
        transaction_id: u64,
        date: NaiveDate,
        rng: &mut R,
    ) -> CodecResult<String> {
        check_field(Field::Store, store_id, self.capacities.store)?;
        check_field(Field::Transaction, transaction_id, self.capacities.transaction)?;
        self.days_since_epoch(date)?;

        let seed = rng.gen_range(self.seed_range());
        self.encode_with_seed(store_id, transaction_id, date, seed)
    }

    /// Encodes with a caller-chosen seed.
    ///
    /// Output depends only on the arguments: the same call always returns
    /// the same code.
    ///
    /// # Errors
    ///
    /// - [`CodecError::FieldOutOfRange`] if an id or the date does not fit
    /// - [`CodecError::DateBeforeEpoch`] if `date` precedes the epoch
    /// - [`CodecError::SeedOutOfRange`] if `seed` is outside [`seed_range`](Self::seed_range)
    pub fn encode_with_seed(
        &self,
        store_id: u64,
        transaction_id: u64,
        date: NaiveDate,
        seed: u64,
    ) -> CodecResult<String> {
        check_field(Field::Store, store_id, self.capacities.store)?;
        check_field(Field::Transaction, transaction_id, self.capacities.transaction)?;
        let days = self.days_since_epoch(date)?;

        let range = self.seed_range();
        if !range.contains(&seed) {
            return Err(CodecError::SeedOutOfRange {
                seed,
                min: range.start,
                max: range.end,
            });
        }

        let config = &self.config;
        let permuted = config.alphabet.permuted(seed)?;
        let digits = permuted.symbols();

        let mut body: Vec<char> = Vec::with_capacity(self.total_len);
        body.extend(config.store.encode(store_id, digits)?.chars());
        body.extend(config.transaction.encode(transaction_id, digits)?.chars());
        body.extend(config.date.encode(days, digits)?.chars());

        let mut code: String = SeededPermutation::new(seed).apply(&body)?.into_iter().collect();
        code.push_str(&config.seed.encode(seed, config.alphabet.symbols())?);

        tracing::debug!(store_id, transaction_id, days, seed, "encoded shortcode");
        Ok(code)
    }

    /// Decodes a shortcode.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidLength`] if `code` is not [`total_length`](Self::total_length) symbols
    /// - [`EncodingError::UnknownSymbol`] for a symbol outside the alphabet
    /// - [`CodecError::InvalidSeed`] if the trailing seed could not have been drawn
    /// - [`EncodingError::DigitOutOfRange`] if a field holds a digit its radix cannot
    /// - [`CodecError::InvalidDate`] if the day count runs past the calendar
    pub fn decode(&self, code: &str) -> CodecResult<DecodedShortcode> {
        self.decode_symbols(code).map_err(|e| {
            tracing::warn!(code, error = %e, "rejected shortcode");
            e
        })
    }

    fn decode_symbols(&self, code: &str) -> CodecResult<DecodedShortcode> {
        let config = &self.config;
        let symbols: Vec<char> = code.chars().collect();
        if symbols.len() != self.total_len {
            return Err(CodecError::InvalidLength {
                expected: self.total_len,
                actual: symbols.len(),
            });
        }

        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|&(_, &s)| !config.alphabet.contains(s))
        {
            return Err(EncodingError::UnknownSymbol { symbol, position }.into());
        }

        let (body, seed_digits) = symbols.split_at(self.body_len);
        let seed_digits: String = seed_digits.iter().collect();
        let seed = config.seed.decode(&seed_digits, config.alphabet.symbols())?;
        if !self.seed_range().contains(&seed) {
            return Err(CodecError::InvalidSeed(seed));
        }

        let permuted = config.alphabet.permuted(seed)?;
        let digits = permuted.symbols();
        let body = SeededPermutation::new(seed).invert(body)?;

        let (store, rest) = body.split_at(config.store.width as usize);
        let (transaction, date) = rest.split_at(config.transaction.width as usize);

        let store_id = config.store.decode(&store.iter().collect::<String>(), digits)?;
        let transaction_id = config
            .transaction
            .decode(&transaction.iter().collect::<String>(), digits)?;
        let days = config.date.decode(&date.iter().collect::<String>(), digits)?;

        let date = config
            .epoch
            .checked_add_days(Days::new(days))
            .ok_or(CodecError::InvalidDate(days))?;

        tracing::debug!(store_id, transaction_id, days, seed, "decoded shortcode");
        Ok(DecodedShortcode {
            store_id,
            transaction_id,
            date,
        })
    }
}

#[inline]
fn check_field(field: Field, value: u64, capacity: u64) -> CodecResult<()> {
    if value >= capacity {
        return Err(CodecError::FieldOutOfRange { field, value, capacity });
    }
    Ok(())
}

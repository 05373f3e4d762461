//! # Shortcode Codec
//!
//! Reversible shortcodes for promotions: a store id, a transaction id and
//! the transaction date in a handful of typeable symbols.
//!
//! ## Design Principles
//!
//! 1. **Fixed length** - every code of a configuration has the same length
//! 2. **Exact round trip** - decode returns exactly what encode was given
//! 3. **One random input** - the seed; everything else is a pure function of it
//! 4. **External configuration** - formats live in TOML files, one per promotion
//!
//! ## Thread Safety
//!
//! [`ShortcodeCodec`] is immutable once built. Share it freely.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shortcode_codec::{CodecConfig, ShortcodeCodec};
//!
//! let config = CodecConfig::load("config/reference.toml")?;
//! let codec = ShortcodeCodec::new(config)?;
//!
//! let code = codec.encode(200, 10_000)?;
//! let decoded = codec.decode(&code)?;
//! assert_eq!(decoded.store_id, 200);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod codec;
pub mod config;
pub mod error;

pub use codec::{DecodedShortcode, ShortcodeCodec};
pub use config::CodecConfig;
pub use error::{CodecError, CodecResult, Field};
pub use shortcode_core::{Alphabet, ErrorKind, FieldSpec};

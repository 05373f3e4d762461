//! # Shortcode Core
//!
//! Reversible building blocks for short, typeable codes.
//!
//! ## Design Principles
//!
//! 1. **Exact inverses** - every encode step has a decode step that recovers the input bit for bit
//! 2. **Deterministic** - permutations depend only on the seed and sequence length
//! 3. **Integer only** - no floating point anywhere in the pipeline
//! 4. **Stateless** - nothing is cached or shared between calls
//!
//! ## Core Components
//!
//! - `Alphabet`: ordered, validated symbol set
//! - `radix`: fixed-width base conversion over any alphabet
//! - `rng`: bit-fraction index draws
//! - `SeededPermutation`: seeded Fisher-Yates shuffle and its inverse
//!
//! ## Example
//!
//! ```rust
//! use shortcode_core::{radix, Alphabet, SeededPermutation};
//!
//! let alphabet: Alphabet = "0123456789abcdefghijklmnopqrstuvwxyz".parse().unwrap();
//! let permuted = alphabet.permuted(5).unwrap();
//!
//! let digits = radix::encode(16, 10, permuted.symbols(), 2).unwrap();
//! assert_eq!(radix::decode(16, &digits, permuted.symbols()).unwrap(), 10);
//!
//! let chars: Vec<char> = digits.chars().collect();
//! let permutation = SeededPermutation::new(5);
//! let shuffled = permutation.apply(&chars).unwrap();
//! assert_eq!(permutation.invert(&shuffled).unwrap(), chars);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod alphabet;
pub mod error;
pub mod permutation;
pub mod radix;
pub mod rng;

pub use alphabet::{Alphabet, REFERENCE_SYMBOLS};
pub use error::{EncodingError, EncodingResult, ErrorKind};
pub use permutation::{shuffle, unshuffle, SeededPermutation};
pub use radix::FieldSpec;
pub use rng::{next_index, PERMUTATION_BIT_WIDTH};

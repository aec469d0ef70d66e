//! # libmetaphone
//!
//! Phonetic encoding for approximate name matching.
//!
//! This library provides the Double Metaphone algorithm together with
//! Refined Soundex and NYSIIS, based on the rules described in:
//!
//! > Philips, Lawrence. "The double metaphone search algorithm."
//! > C/C++ Users Journal 18.6 (2000): 38-43.
//!
//! ## Example
//!
//! ```rust
//! use libmetaphone::prelude::*;
//!
//! let encoder = DoubleMetaphone::new();
//! let result = encoder.double_metaphone("Schmidt");
//!
//! assert_eq!(result.primary(), "XMT");
//! assert_eq!(result.secondary(), "SMT");
//! assert!(result.matches(&encoder.double_metaphone("Smith")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoder;
pub mod metaphone;
pub mod nysiis;
pub mod soundex;
pub mod word;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::encoder::Encoder;
    pub use crate::metaphone::{
        double_metaphone, CodeSizeError, DoubleMetaphone, DoubleMetaphoneResult,
        DEFAULT_CODE_SIZE,
    };
    pub use crate::nysiis::{nysiis, Nysiis};
    pub use crate::soundex::{refined_soundex, RefinedSoundex};
}

//! Double Metaphone phonetic encoding.
//!
//! Double Metaphone is the second generation of Lawrence Philips'
//! Metaphone algorithm, described in the June 2000 issue of C/C++ Users
//! Journal. Unlike its predecessor it returns two codes per word: a
//! primary reading and a secondary one covering an alternate
//! pronunciation, so that immigrant surnames ('Schmidt', 'Jankelowicz')
//! can match their anglicised spellings ('Smith', 'Yankelovich').
//!
//! Encoding runs in three stages:
//!
//! 1. The word is normalized into a padded, uppercased buffer
//! 2. A start-of-word rule may seed the codes and move the cursor
//! 3. The positional scan appends to both codes until either the word
//!    or both codes are exhausted
//!
//! Both codes are then truncated to the configured size (4 by default).
//!
//! # Examples
//!
//! ```rust
//! use libmetaphone::metaphone::DoubleMetaphone;
//!
//! let encoder = DoubleMetaphone::new();
//! let result = encoder.double_metaphone("schmidt");
//! assert_eq!(result.primary(), "XMT");
//! assert_eq!(result.secondary(), "SMT");
//! ```

mod accumulator;
mod prefix;
mod rules;

use accumulator::CodeAccumulator;

use crate::encoder::Encoder;
use crate::word::Word;

/// Default number of characters in each code.
pub const DEFAULT_CODE_SIZE: usize = 4;

// ============================================================================
// Errors
// ============================================================================

/// Error raised for an unusable code size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodeSizeError {
    /// A zero code size would make every code empty.
    #[error("code size must be at least 1")]
    Zero,
}

// ============================================================================
// DoubleMetaphoneResult
// ============================================================================

/// The two phonetic readings of a word.
///
/// The secondary code differs from the primary only where the word
/// admits an alternate pronunciation; for most english words the two
/// are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DoubleMetaphoneResult {
    primary: String,
    secondary: String,
}

impl DoubleMetaphoneResult {
    /// The primary phonetic code.
    #[inline]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary phonetic code.
    #[inline]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Consume the result, yielding `(primary, secondary)`.
    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }

    /// Whether any reading of `self` coincides with any reading of
    /// `other`.
    ///
    /// This is the usual matching criterion for Double Metaphone: two
    /// words sound alike if either code of one equals either code of
    /// the other.
    pub fn matches(&self, other: &DoubleMetaphoneResult) -> bool {
        self.primary == other.primary
            || self.primary == other.secondary
            || self.secondary == other.primary
            || self.secondary == other.secondary
    }
}

// ============================================================================
// DoubleMetaphone
// ============================================================================

/// Double Metaphone encoder.
///
/// # Examples
///
/// ```rust
/// use libmetaphone::metaphone::DoubleMetaphone;
///
/// let encoder = DoubleMetaphone::new();
/// let result = encoder.double_metaphone("czerny");
/// assert_eq!(result.into_pair(), ("SRN".to_string(), "XRN".to_string()));
///
/// let wide = DoubleMetaphone::with_code_size(8).unwrap();
/// assert_eq!(wide.double_metaphone("Jankelowicz").primary(), "JNKLTS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DoubleMetaphone {
    code_size: usize,
}

impl DoubleMetaphone {
    /// Encoder producing codes of [`DEFAULT_CODE_SIZE`] characters.
    pub fn new() -> Self {
        Self {
            code_size: DEFAULT_CODE_SIZE,
        }
    }

    /// Encoder producing codes of up to `code_size` characters.
    ///
    /// # Errors
    ///
    /// Returns [`CodeSizeError::Zero`] when `code_size` is 0.
    pub fn with_code_size(code_size: usize) -> Result<Self, CodeSizeError> {
        if code_size == 0 {
            return Err(CodeSizeError::Zero);
        }
        Ok(Self { code_size })
    }

    /// Maximum length of the codes this encoder produces.
    #[inline]
    pub fn code_size(&self) -> usize {
        self.code_size
    }

    /// Encode `value` into its primary and secondary codes.
    ///
    /// Input is trimmed and uppercased first; an input with no
    /// characters left after trimming yields two empty codes.
    pub fn double_metaphone(&self, value: &str) -> DoubleMetaphoneResult {
        let word = Word::new(value);
        let mut codes = CodeAccumulator::new();
        let start = prefix::apply(&word, &mut codes);
        rules::scan(&word, start, self.code_size, &mut codes);
        let (primary, secondary) = codes.finish(self.code_size);
        DoubleMetaphoneResult { primary, secondary }
    }

    /// Whether two words share a Double Metaphone code.
    ///
    /// With `alternate` set, the secondary codes are compared instead
    /// of the primary ones.
    pub fn is_double_metaphone_equals(&self, first: &str, second: &str, alternate: bool) -> bool {
        let first = self.double_metaphone(first);
        let second = self.double_metaphone(second);
        if alternate {
            first.secondary() == second.secondary()
        } else {
            first.primary() == second.primary()
        }
    }
}

impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for DoubleMetaphone {
    fn encode(&self, value: &str) -> String {
        self.double_metaphone(value).into_pair().0
    }
}

/// Encode `value` with the default code size.
///
/// Convenience wrapper around [`DoubleMetaphone::double_metaphone`].
pub fn double_metaphone(value: &str) -> (String, String) {
    DoubleMetaphone::new().double_metaphone(value).into_pair()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_code_size() {
        assert_eq!(DoubleMetaphone::new().code_size(), 4);
        assert_eq!(DoubleMetaphone::default(), DoubleMetaphone::new());
    }

    #[test]
    fn test_zero_code_size_rejected() {
        assert_eq!(DoubleMetaphone::with_code_size(0), Err(CodeSizeError::Zero));
        assert!(DoubleMetaphone::with_code_size(1).is_ok());
    }

    #[test]
    fn test_codes_truncated_to_size() {
        let narrow = DoubleMetaphone::with_code_size(2).unwrap();
        let result = narrow.double_metaphone("orchestra");
        assert_eq!(result.primary(), "AR");
        assert_eq!(result.secondary(), "AR");
    }

    #[test]
    fn test_empty_and_blank_input() {
        let encoder = DoubleMetaphone::new();
        assert_eq!(encoder.double_metaphone("").into_pair(), (String::new(), String::new()));
        assert_eq!(encoder.double_metaphone("   ").into_pair(), (String::new(), String::new()));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let encoder = DoubleMetaphone::new();
        assert_eq!(
            encoder.double_metaphone(" SMITH "),
            encoder.double_metaphone("smith")
        );
    }

    #[test]
    fn test_result_matching_crosses_readings() {
        let encoder = DoubleMetaphone::new();
        let smith = encoder.double_metaphone("Smith");
        let schmidt = encoder.double_metaphone("Schmidt");
        // SM0/XMT vs XMT/SMT overlap on 'XMT'
        assert!(smith.matches(&schmidt));
        let jose = encoder.double_metaphone("jose");
        assert!(!smith.matches(&jose));
    }

    #[test]
    fn test_is_double_metaphone_equals() {
        let encoder = DoubleMetaphone::new();
        assert!(encoder.is_double_metaphone_equals("Wasserman", "Vasserman", true));
        assert!(!encoder.is_double_metaphone_equals("Wasserman", "Vasserman", false));
    }

    #[test]
    fn test_encoder_returns_primary() {
        let encoder = DoubleMetaphone::new();
        assert_eq!(encoder.encode("thumb"), "0M");
        assert!(encoder.is_encoded_equals("dumb", "dum"));
    }
}

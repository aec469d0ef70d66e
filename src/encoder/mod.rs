//! Common interface for phonetic encoders.

// ============================================================================
// Encoder
// ============================================================================

/// A phonetic encoder: maps a word to a code that depends on how the
/// word sounds rather than how it is spelled.
///
/// Every encoder in this crate implements this trait, so callers that
/// only need "do these two strings sound alike" can stay generic over
/// the algorithm.
///
/// # Examples
///
/// ```rust
/// use libmetaphone::prelude::*;
///
/// let encoder = DoubleMetaphone::new();
/// assert!(encoder.is_encoded_equals("Smith", "Smyth"));
/// ```
pub trait Encoder {
    /// Encode `value` into its phonetic code.
    ///
    /// Encoders that produce more than one code (such as Double
    /// Metaphone) return their primary reading here.
    fn encode(&self, value: &str) -> String;

    /// Whether `first` and `second` encode to the same code.
    fn is_encoded_equals(&self, first: &str, second: &str) -> bool {
        self.encode(first) == self.encode(second)
    }
}

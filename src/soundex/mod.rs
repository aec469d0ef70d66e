//! Refined Soundex phonetic encoding.
//!
//! A finer-grained variant of classic Soundex: it keeps the first
//! letter verbatim, then appends one digit per run of equally-classed
//! letters, without the four-character cap of the original. Vowels form
//! class 0 and act as separators between consonant runs rather than
//! disappearing, so 'Braz' and 'Brassy' stay distinguishable.

use crate::encoder::Encoder;

/// Consonant class of an uppercase letter. Vowels and letters outside
/// the table fall into class 0.
#[inline]
fn letter_class(letter: char) -> u8 {
    match letter {
        'B' | 'P' => 1,
        'F' | 'V' => 2,
        'C' | 'K' | 'S' => 3,
        'G' | 'J' => 4,
        'Q' | 'X' | 'Z' => 5,
        'D' | 'T' => 6,
        'L' => 7,
        'M' | 'N' => 8,
        'R' => 9,
        _ => 0,
    }
}

// ============================================================================
// RefinedSoundex
// ============================================================================

/// Refined Soundex encoder.
///
/// # Examples
///
/// ```rust
/// use libmetaphone::soundex::RefinedSoundex;
///
/// let encoder = RefinedSoundex;
/// assert_eq!(encoder.refined_soundex("Caren"), "C30908");
/// assert_eq!(encoder.refined_soundex("Hayers"), "H093");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefinedSoundex;

impl RefinedSoundex {
    /// Encode `value` into its Refined Soundex code.
    ///
    /// Non-letter characters are dropped before encoding and the rest
    /// uppercased; an input with no letters yields an empty code.
    pub fn refined_soundex(&self, value: &str) -> String {
        let letters: Vec<char> = value
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect();
        let first = match letters.first() {
            Some(&first) => first,
            None => return String::new(),
        };

        let mut code = String::with_capacity(letters.len() + 1);
        code.push(first);
        let mut previous = None;
        for &letter in &letters {
            let class = letter_class(letter);
            if previous != Some(class) {
                code.push((b'0' + class) as char);
            }
            previous = Some(class);
        }
        code
    }
}

impl Encoder for RefinedSoundex {
    fn encode(&self, value: &str) -> String {
        self.refined_soundex(value)
    }
}

/// Encode `value` into its Refined Soundex code.
///
/// Convenience wrapper around [`RefinedSoundex::refined_soundex`].
pub fn refined_soundex(value: &str) -> String {
    RefinedSoundex.refined_soundex(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_codes() {
        assert_eq!(refined_soundex("Caren"), "C30908");
        assert_eq!(refined_soundex("Hayers"), "H093");
        assert_eq!(refined_soundex("Braz"), "B1905");
    }

    #[test]
    fn test_unmapped_letters_fall_into_class_zero() {
        assert_eq!(refined_soundex("braço"), "B190");
    }

    #[test]
    fn test_first_letter_kept_verbatim() {
        // same digit string, different first letter
        assert_eq!(refined_soundex("Caren"), "C30908");
        assert_eq!(refined_soundex("Karen"), "K30908");
        assert!(!RefinedSoundex.is_encoded_equals("Caren", "Karen"));
    }

    #[test]
    fn test_equal_classes_collapse_into_one_digit() {
        // 'SS' and 'S' encode alike, as do the vowel runs around them
        assert!(RefinedSoundex.is_encoded_equals("Bess", "Bes"));
        assert!(RefinedSoundex.is_encoded_equals("Hayers", "Hairs"));
    }

    #[test]
    fn test_non_letters_dropped() {
        assert_eq!(refined_soundex("1234567890+-="), "");
        assert_eq!(refined_soundex(" Braz... "), "B1905");
        assert_eq!(refined_soundex(""), "");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(refined_soundex("CAREN"), refined_soundex("caren"));
    }
}

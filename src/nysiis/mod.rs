//! NYSIIS phonetic encoding.
//!
//! The New York State Identification and Intelligence System algorithm,
//! designed for indexing american surnames. It rewrites the start and
//! end of the word, keeps the first letter verbatim, then collapses the
//! rest onto a small consonant skeleton where every vowel becomes `A`.
//!
//! Compared to Soundex the output is alphabetic rather than numeric and
//! preserves more of the word shape, which makes it the better blocking
//! key for surname lists.

use crate::encoder::Encoder;

/// NYSIIS treats only `A`, `E`, `I`, `O`, `U` as vowels; `Y` is a
/// consonant here, unlike in Double Metaphone.
#[inline]
fn is_vowel(letter: char) -> bool {
    matches!(letter, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Word-start rewrites, first match wins. Every replacement has the
/// same length as its pattern, so the rewrite happens in place.
const START_REWRITES: &[(&str, &str)] = &[
    ("MAC", "MCC"),
    ("KN", "NN"),
    ("K", "C"),
    ("PH", "FF"),
    ("PF", "FF"),
    ("SCH", "SSS"),
];

/// Word-end rewrites, first match wins.
const END_REWRITES: &[(&str, char)] = &[
    ("EE", 'Y'),
    ("IE", 'Y'),
    ("DT", 'D'),
    ("RT", 'D'),
    ("RD", 'D'),
    ("NT", 'D'),
    ("ND", 'D'),
];

// ============================================================================
// Nysiis
// ============================================================================

/// NYSIIS encoder.
///
/// By default trailing vowel padding (`A`) is trimmed off the code.
/// Constructing the encoder with trimming disabled applies the original
/// ending rules instead: a final `S` is dropped, final `AY` becomes
/// `Y`, and a final `A` is dropped.
///
/// # Examples
///
/// ```rust
/// use libmetaphone::nysiis::Nysiis;
///
/// let encoder = Nysiis::new();
/// assert_eq!(encoder.nysiis("Bess"), "BAS");
///
/// let full = Nysiis::with_trim(false);
/// assert_eq!(full.nysiis("DeLaurentiis"), "DALARANT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Nysiis {
    trim: bool,
}

impl Nysiis {
    /// Encoder with trailing-vowel trimming enabled.
    pub fn new() -> Self {
        Self { trim: true }
    }

    /// Encoder with the given trimming behavior.
    pub fn with_trim(trim: bool) -> Self {
        Self { trim }
    }

    /// Encode `value` into its NYSIIS code.
    ///
    /// Input is uppercased and reduced to `A`-`Z` first; an input with
    /// no letters yields an empty code.
    pub fn nysiis(&self, value: &str) -> String {
        let mut letters: Vec<char> = value
            .chars()
            .flat_map(char::to_uppercase)
            .filter(char::is_ascii_alphabetic)
            .collect();
        if letters.is_empty() {
            return String::new();
        }
        rewrite_start(&mut letters);
        rewrite_end(&mut letters);

        let first = letters[0];
        let key = translate(&letters);
        let mut code = String::with_capacity(key.len() + 1);
        code.push(first);
        code.extend(self.apply_endings(key));
        code
    }

    fn apply_endings(&self, mut key: Vec<char>) -> Vec<char> {
        if self.trim {
            while key.last() == Some(&'A') {
                key.pop();
            }
            return key;
        }
        if key.last() == Some(&'S') {
            key.pop();
        }
        if key.ends_with(&['A', 'Y']) {
            key.truncate(key.len() - 2);
            key.push('Y');
        }
        if key.last() == Some(&'A') {
            key.pop();
        }
        key
    }
}

impl Default for Nysiis {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for Nysiis {
    fn encode(&self, value: &str) -> String {
        self.nysiis(value)
    }
}

fn rewrite_start(letters: &mut [char]) {
    for (pattern, replacement) in START_REWRITES {
        if matches_at(letters, 0, pattern) {
            for (slot, letter) in letters.iter_mut().zip(replacement.chars()) {
                *slot = letter;
            }
            return;
        }
    }
}

fn rewrite_end(letters: &mut Vec<char>) {
    for (pattern, replacement) in END_REWRITES {
        let Some(start) = letters.len().checked_sub(pattern.len()) else {
            continue;
        };
        if matches_at(letters, start, pattern) {
            letters.truncate(start);
            letters.push(*replacement);
            return;
        }
    }
}

fn matches_at(letters: &[char], start: usize, pattern: &str) -> bool {
    letters.len() >= start + pattern.len()
        && pattern
            .chars()
            .enumerate()
            .all(|(offset, expected)| letters[start + offset] == expected)
}

/// Append `letter` to the key unless it repeats the previous key letter.
fn emit(key: &mut Vec<char>, letter: char) {
    if key.last() != Some(&letter) {
        key.push(letter);
    }
}

/// Translate everything after the first letter onto the code alphabet.
///
/// Single-letter emissions are dropped when they repeat the previous
/// key letter; cluster rewrites are appended whole. The first letter of
/// the word never takes part in that comparison, so a code like `AAN`
/// can still arise from 'Aumont'.
fn translate(letters: &[char]) -> Vec<char> {
    let len = letters.len();
    let mut key: Vec<char> = Vec::with_capacity(len);
    let mut i = 1;
    while i < len {
        let next = letters.get(i + 1).copied();
        match letters[i] {
            'E' if next == Some('V') => {
                key.extend("AF".chars());
                i += 2;
            }
            'A' | 'E' | 'I' | 'O' | 'U' => {
                emit(&mut key, 'A');
                i += 1;
            }
            'Q' => {
                emit(&mut key, 'G');
                i += 1;
            }
            'Z' => {
                emit(&mut key, 'S');
                i += 1;
            }
            'M' => {
                emit(&mut key, 'N');
                i += 1;
            }
            'K' if next == Some('N') => {
                emit(&mut key, 'N');
                i += 2;
            }
            'K' => {
                emit(&mut key, 'C');
                i += 1;
            }
            'S' if matches_at(letters, i, "SCH") => {
                key.extend("SSS".chars());
                i += 3;
            }
            'P' if next == Some('H') => {
                key.extend("FF".chars());
                i += 2;
            }
            'H' => {
                let prev_vowel = is_vowel(letters[i - 1]);
                let next_vowel = next.is_some_and(is_vowel);
                if prev_vowel && next_vowel {
                    emit(&mut key, 'H');
                    i += 1;
                } else if prev_vowel {
                    // silent, and swallows the consonant after it
                    i += 2;
                } else if next_vowel {
                    i += 1;
                } else if i + 1 == len {
                    // silent at the end of the word, e.g. 'Smith'
                    i += 1;
                } else {
                    emit(&mut key, 'H');
                    i += 1;
                }
            }
            'W' => {
                if !is_vowel(letters[i - 1]) {
                    emit(&mut key, 'W');
                }
                i += 1;
            }
            other => {
                emit(&mut key, other);
                i += 1;
            }
        }
    }
    key
}

/// Encode `value` into its NYSIIS code with default trimming.
///
/// Convenience wrapper around [`Nysiis::nysiis`].
pub fn nysiis(value: &str) -> String {
    Nysiis::new().nysiis(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trims_trailing_vowel_padding() {
        assert_eq!(nysiis("Bess"), "BAS");
        assert_eq!(nysiis("1234567890+-= Bess $"), "BAS");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(nysiis(""), "");
        assert_eq!(nysiis("42"), "");
    }

    #[test]
    fn test_start_rewrites() {
        let encoder = Nysiis::with_trim(false);
        assert_eq!(encoder.nysiis("Knuth"), "NNAT");
        assert_eq!(encoder.nysiis("Kepler"), "CAPLAR");
        assert_eq!(encoder.nysiis("Phoenix"), "FFANAX");
        assert_eq!(encoder.nysiis("Pfeiffer"), "FFAFAR");
        assert_eq!(encoder.nysiis("Macdonald"), "MCDANALD");
        assert_eq!(encoder.nysiis("Schmidt"), "SSNAD");
    }

    #[test]
    fn test_end_rewrites() {
        let encoder = Nysiis::with_trim(false);
        assert_eq!(encoder.nysiis("Dedee"), "DADY");
        assert_eq!(encoder.nysiis("Bonnie"), "BANY");
        assert_eq!(encoder.nysiis("Hubert"), "HABAD");
        assert_eq!(encoder.nysiis("Rosalind"), "RASALAD");
    }

    #[test]
    fn test_h_silencing_swallows_following_consonant() {
        let encoder = Nysiis::with_trim(false);
        assert_eq!(encoder.nysiis("John"), "J");
        assert_eq!(encoder.nysiis("Fahey"), "FAHY");
        assert_eq!(encoder.nysiis("Christensen"), "CHRASTANSAN");
        assert_eq!(encoder.nysiis("Smith"), "SNAT");
    }

    #[test]
    fn test_w_silent_after_vowel() {
        let encoder = Nysiis::with_trim(false);
        assert_eq!(encoder.nysiis("Howard"), "HAD");
        assert_eq!(encoder.nysiis("Echikunwoke"), "ECACANWAC");
    }

    #[test]
    fn test_first_letter_outside_deduplication() {
        let encoder = Nysiis::with_trim(false);
        assert_eq!(encoder.nysiis("Aumont"), "AANAD");
    }

    #[test]
    fn test_trim_flag_changes_only_the_ending() {
        assert_eq!(Nysiis::new().nysiis("Alexandra"), "ALAXANDR");
        assert_eq!(Nysiis::with_trim(false).nysiis("Alexandra"), "ALAXANDR");
        assert_eq!(Nysiis::new().nysiis("DeLaurentiis"), "DALARANTAS");
        assert_eq!(Nysiis::with_trim(false).nysiis("DeLaurentiis"), "DALARANT");
    }

    #[test]
    fn test_encoder_trait_uses_default_trim() {
        let encoder = Nysiis::new();
        assert_eq!(encoder.encode("Bess"), "BAS");
        assert!(encoder.is_encoded_equals("Bess", "Bes"));
        assert!(!encoder.is_encoded_equals("Bess", "Howard"));
    }
}

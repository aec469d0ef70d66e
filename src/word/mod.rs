//! Normalized word buffer for phonetic scanning.
//!
//! Encoders in this crate scan a word one position at a time, probing
//! characters ahead of and behind the cursor. [`Word`] normalizes the raw
//! input once (trim, uppercase, pad) so every probe is bounds-safe:
//!
//! - Surrounding whitespace is stripped and letters are uppercased
//! - The buffer is padded with trailing spaces so lookahead windows near
//!   the end of the word compare against spaces instead of falling off
//! - All positions are character indices, never byte offsets

/// Number of padding spaces appended after the final letter.
///
/// The widest lookahead window used by any scanning rule is five
/// characters, so five spaces guarantee in-bounds reads for every probe
/// anchored at a letter position.
const PADDING: usize = 5;

// ============================================================================
// Word
// ============================================================================

/// An uppercased, space-padded word ready for positional scanning.
///
/// # Examples
///
/// ```rust
/// use libmetaphone::word::Word;
///
/// let word = Word::new("  smith ");
/// assert_eq!(word.len(), 5);
/// assert_eq!(word.char_at(0), 'S');
/// assert!(word.window_eq(3, "TH"));
/// assert_eq!(word.char_at(20), ' ');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Uppercased letters followed by `PADDING` spaces.
    chars: Vec<char>,
    /// Number of characters before the padding.
    len: usize,
}

impl Word {
    /// Normalize `raw` into a scannable buffer.
    ///
    /// Uppercasing is Unicode-aware, so characters that expand when
    /// uppercased (such as `ß`) occupy multiple positions.
    pub fn new(raw: &str) -> Self {
        let mut chars: Vec<char> = raw.trim().chars().flat_map(char::to_uppercase).collect();
        let len = chars.len();
        chars.extend(std::iter::repeat(' ').take(PADDING));
        Self { chars, len }
    }

    /// Number of characters in the word, excluding padding.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the normalized word contains no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the final character of the word.
    ///
    /// Returns 0 for an empty word; callers only consult this while
    /// scanning, which never happens for empty input.
    #[inline]
    pub fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Character at position `index`, or a space beyond the buffer.
    #[inline]
    pub fn char_at(&self, index: usize) -> char {
        self.chars.get(index).copied().unwrap_or(' ')
    }

    /// Whether the characters starting at `index` spell out `pattern`.
    ///
    /// Positions past the end of the word compare against spaces, so a
    /// pattern with a trailing space matches at the word boundary.
    #[inline]
    pub fn window_eq(&self, index: usize, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, expected)| self.char_at(index + offset) == expected)
    }

    /// Whether any of `patterns` starts at `index`.
    #[inline]
    pub fn window_any(&self, index: usize, patterns: &[&str]) -> bool {
        patterns.iter().any(|pattern| self.window_eq(index, pattern))
    }

    /// Whether the character at `index` is one of the characters in `set`.
    #[inline]
    pub fn one_of(&self, index: usize, set: &str) -> bool {
        set.contains(self.char_at(index))
    }

    /// Whether the character at `index` is a vowel (`Y` included).
    #[inline]
    pub fn is_vowel(&self, index: usize) -> bool {
        matches!(self.char_at(index), 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
    }

    /// Whether the word begins with any of `prefixes`.
    #[inline]
    pub fn starts_with_any(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|prefix| self.window_eq(0, prefix))
    }

    /// Whether the word shows Slavic or Germanic spelling.
    ///
    /// Several scanning rules soften or harden consonants based on this:
    /// a word containing `W`, `K`, or the digraph `CZ` is treated as
    /// Slavo-Germanic.
    pub fn is_slavo_germanic(&self) -> bool {
        (0..self.len).any(|i| {
            matches!(self.char_at(i), 'W' | 'K')
                || (self.char_at(i) == 'C' && self.char_at(i + 1) == 'Z')
        })
    }
}

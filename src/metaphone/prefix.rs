//! Start-of-word seeding rules.
//!
//! Word-initial spellings often sound nothing like the same letters
//! mid-word: an initial `X` is pronounced like `S`, initial vowels all
//! collapse to `A`, and silent clusters such as `KN` or `PS` drop their
//! first letter entirely. Before the positional scan begins, the first
//! matching rule in [`PREFIX_RULES`] seeds both codes and tells the scan
//! where to start.

use super::accumulator::CodeAccumulator;
use crate::word::Word;

// ============================================================================
// Prefix patterns
// ============================================================================

/// Shape of a word-initial match.
#[derive(Debug, Clone, Copy)]
enum PrefixPattern {
    /// The word starts with this literal.
    Literal(&'static str),
    /// The word starts with any of these literals.
    AnyOf(&'static [&'static str]),
    /// The first character is a vowel.
    Vowel,
    /// This letter followed by a vowel.
    LetterThenVowel(char),
    /// The literal, provided the next character differs from the given one.
    LiteralNotFollowedBy(&'static str, char),
}

impl PrefixPattern {
    fn matches(&self, word: &Word) -> bool {
        match *self {
            PrefixPattern::Literal(prefix) => word.window_eq(0, prefix),
            PrefixPattern::AnyOf(prefixes) => word.starts_with_any(prefixes),
            PrefixPattern::Vowel => word.is_vowel(0),
            PrefixPattern::LetterThenVowel(letter) => {
                word.char_at(0) == letter && word.is_vowel(1)
            }
            PrefixPattern::LiteralNotFollowedBy(prefix, excluded) => {
                word.window_eq(0, prefix) && word.char_at(prefix.len()) != excluded
            }
        }
    }
}

// ============================================================================
// Prefix rules
// ============================================================================

/// A start-of-word rule: what to match, what to emit, where to resume.
#[derive(Debug, Clone, Copy)]
struct PrefixRule {
    pattern: PrefixPattern,
    primary: &'static str,
    secondary: &'static str,
    /// Scan position after the rule fires. A skip of 0 leaves the first
    /// letter to be scanned again by the positional rules.
    skip: usize,
}

/// Ordered start-of-word table. The first matching rule wins.
///
/// Matching runs against the padded word, so a trailing constraint such
/// as the `CHOR` exclusion also holds at the word boundary.
static PREFIX_RULES: &[PrefixRule] = &[
    // Silent first letter in these clusters, e.g. 'gnome', 'knight',
    // 'pneumonia', 'wright', 'psychology'.
    PrefixRule {
        pattern: PrefixPattern::AnyOf(&["GN", "KN", "PN", "WR", "PS"]),
        primary: "",
        secondary: "",
        skip: 1,
    },
    // Initial 'X' is pronounced 'Z', e.g. 'Xavier'; 'Z' maps to 'S'.
    PrefixRule {
        pattern: PrefixPattern::Literal("X"),
        primary: "S",
        secondary: "S",
        skip: 1,
    },
    // All initial vowels map to 'A'.
    PrefixRule {
        pattern: PrefixPattern::Vowel,
        primary: "A",
        secondary: "A",
        skip: 1,
    },
    PrefixRule {
        pattern: PrefixPattern::Literal("CAESAR"),
        primary: "S",
        secondary: "S",
        skip: 1,
    },
    PrefixRule {
        pattern: PrefixPattern::Literal("SUGAR"),
        primary: "X",
        secondary: "S",
        skip: 1,
    },
    // Initial 'G' before a front vowel in 'ges-', 'gep-', 'gel-', 'gie-'
    // and kin sounds hard in one reading and soft in the other.
    PrefixRule {
        pattern: PrefixPattern::AnyOf(&[
            "GY", "GES", "GEP", "GEB", "GEL", "GEY", "GEI", "GER", "GIB", "GIL", "GIN", "GIE",
        ]),
        primary: "K",
        secondary: "J",
        skip: 2,
    },
    // Keep 'H' when first and before a vowel.
    PrefixRule {
        pattern: PrefixPattern::LetterThenVowel('H'),
        primary: "H",
        secondary: "H",
        skip: 2,
    },
    // Germanic anglicisations: 'smith' should match 'schmidt',
    // 'snider' should match 'schneider'.
    PrefixRule {
        pattern: PrefixPattern::AnyOf(&["SM", "SN", "SL", "SW"]),
        primary: "S",
        secondary: "X",
        skip: 1,
    },
    // 'ghislane', 'ghiradelli'.
    PrefixRule {
        pattern: PrefixPattern::Literal("GHI"),
        primary: "J",
        secondary: "J",
        skip: 2,
    },
    PrefixRule {
        pattern: PrefixPattern::Literal("GH"),
        primary: "K",
        secondary: "K",
        skip: 2,
    },
    // Greek roots, e.g. 'chemistry', 'chorus'.
    PrefixRule {
        pattern: PrefixPattern::AnyOf(&["CHARAC", "CHARIS", "CHYM", "CHEM"]),
        primary: "K",
        secondary: "K",
        skip: 2,
    },
    PrefixRule {
        pattern: PrefixPattern::LiteralNotFollowedBy("CHOR", 'E'),
        primary: "K",
        secondary: "K",
        skip: 2,
    },
    // 'Wasserman' should match 'Vasserman'. The 'W' is scanned again so
    // the positional rules can still see the cluster it opens.
    PrefixRule {
        pattern: PrefixPattern::LetterThenVowel('W'),
        primary: "A",
        secondary: "F",
        skip: 0,
    },
    // 'whirlpool' opens like 'irlpool'.
    PrefixRule {
        pattern: PrefixPattern::Literal("WH"),
        primary: "A",
        secondary: "A",
        skip: 0,
    },
];

/// Apply the first matching start-of-word rule.
///
/// Seeds `codes` with the rule's output and returns the position where
/// the positional scan should begin. Returns 0 when no rule matches.
pub(crate) fn apply(word: &Word, codes: &mut CodeAccumulator) -> usize {
    for rule in PREFIX_RULES {
        if rule.pattern.matches(word) {
            codes.append(rule.primary, rule.secondary);
            return rule.skip;
        }
    }
    0
}

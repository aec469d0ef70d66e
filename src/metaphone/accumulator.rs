//! Lockstep accumulator for the primary and secondary codes.

use smallvec::SmallVec;

/// Inline capacity for a code buffer.
///
/// Codes are truncated to the configured size at the end of a scan, and
/// the default size is 4, so 8 characters keeps typical scans free of
/// heap allocation even when a rule overshoots before truncation.
const INLINE_CODE_CAPACITY: usize = 8;

// ============================================================================
// CodeAccumulator
// ============================================================================

/// Builds the primary and secondary phonetic codes in lockstep.
///
/// Every rule appends to both buffers in a single call. Either side of an
/// append may be empty: that is how a rule stays silent in one reading
/// while sounding in the other, which is the only way the two codes ever
/// diverge in length.
#[derive(Debug, Clone, Default)]
pub(crate) struct CodeAccumulator {
    primary: SmallVec<[char; INLINE_CODE_CAPACITY]>,
    secondary: SmallVec<[char; INLINE_CODE_CAPACITY]>,
}

impl CodeAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append symbols to both codes.
    pub(crate) fn append(&mut self, primary: &str, secondary: &str) {
        self.primary.extend(primary.chars());
        self.secondary.extend(secondary.chars());
    }

    /// Whether both codes have reached `size` characters.
    ///
    /// The scan stops as soon as this holds; the shorter code alone
    /// reaching `size` is not enough, since the other reading may still
    /// be accumulating.
    #[inline]
    pub(crate) fn is_full(&self, size: usize) -> bool {
        self.primary.len() >= size && self.secondary.len() >= size
    }

    /// Truncate both codes to `size` and return them as strings.
    pub(crate) fn finish(self, size: usize) -> (String, String) {
        (
            self.primary.into_iter().take(size).collect(),
            self.secondary.into_iter().take(size).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_codes_in_lockstep() {
        let mut codes = CodeAccumulator::new();
        codes.append("P", "P");
        codes.append("J", "H");
        codes.append("", "R");
        let (primary, secondary) = codes.finish(4);
        assert_eq!(primary, "PJ");
        assert_eq!(secondary, "PHR");
    }

    #[test]
    fn test_is_full_requires_both_sides() {
        let mut codes = CodeAccumulator::new();
        codes.append("KS", "");
        codes.append("TS", "X");
        assert!(!codes.is_full(2));
        codes.append("", "N");
        assert!(codes.is_full(2));
    }

    #[test]
    fn test_finish_truncates_overshoot() {
        let mut codes = CodeAccumulator::new();
        codes.append("PRS", "PRS");
        codes.append("TS", "TS");
        let (primary, secondary) = codes.finish(4);
        assert_eq!(primary, "PRST");
        assert_eq!(secondary, "PRST");
    }

    #[test]
    fn test_empty_scan_yields_empty_codes() {
        let codes = CodeAccumulator::new();
        let (primary, secondary) = codes.finish(4);
        assert!(primary.is_empty());
        assert!(secondary.is_empty());
    }
}

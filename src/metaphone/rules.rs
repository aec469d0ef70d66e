//! Positional scanning rules.
//!
//! After the start-of-word seeding, the scan walks the word one cluster
//! at a time. Each step inspects the character under the cursor, appends
//! to both codes, and reports how many characters it consumed (always at
//! least one, so the scan cannot stall). Doubled letters are collapsed
//! by consuming both in a single step.
//!
//! The rules encode the alternate-pronunciation logic of Double
//! Metaphone: Germanic, Greek, Italian, Spanish, French, and Slavic
//! spellings of the same cluster produce different code pairs, and the
//! two codes diverge exactly where a rule stays silent in one reading.

use super::accumulator::CodeAccumulator;
use crate::word::Word;

// ============================================================================
// Scan driver
// ============================================================================

/// Scan `word` from `start`, appending to `codes` until the word or both
/// codes are exhausted.
pub(crate) fn scan(word: &Word, start: usize, code_size: usize, codes: &mut CodeAccumulator) {
    let mut i = start;
    while i < word.len() && !codes.is_full(code_size) {
        i += step(word, i, codes);
    }
}

/// Encode the cluster at position `i` and return how many characters it
/// consumed.
fn step(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    match word.char_at(i) {
        // non-initial vowels are skipped
        'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => 1,
        // '-mb', e.g. 'dumb', already skipped over by the M rule
        'B' => encode_simple(word, i, "P", codes),
        'Ç' => {
            codes.append("S", "S");
            1
        }
        'C' => encode_c(word, i, codes),
        'D' => encode_d(word, i, codes),
        'F' => encode_simple(word, i, "F", codes),
        'G' => encode_g(word, i, codes),
        'H' => encode_h(word, i, codes),
        'J' => encode_j(word, i, codes),
        'K' => encode_simple(word, i, "K", codes),
        'L' => encode_l(word, i, codes),
        'M' => encode_m(word, i, codes),
        'N' => encode_simple(word, i, "N", codes),
        'Ñ' => {
            codes.append("N", "N");
            1
        }
        'P' => encode_p(word, i, codes),
        'Q' => encode_simple(word, i, "K", codes),
        'R' => encode_r(word, i, codes),
        'S' => encode_s(word, i, codes),
        'T' => encode_t(word, i, codes),
        'V' => encode_simple(word, i, "F", codes),
        'W' => encode_w(word, i, codes),
        'X' => encode_x(word, i, codes),
        'Z' => encode_z(word, i, codes),
        _ => 1,
    }
}

/// Emit `symbol` in both codes and collapse a doubled letter.
fn encode_simple(word: &Word, i: usize, symbol: &str, codes: &mut CodeAccumulator) -> usize {
    codes.append(symbol, symbol);
    if word.char_at(i + 1) == word.char_at(i) {
        2
    } else {
        1
    }
}

// ============================================================================
// Per-letter rules
// ============================================================================

fn encode_c(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if germanic_c(word, i) {
        codes.append("K", "K");
        return 2;
    }
    if word.window_eq(i, "CH") {
        return 1 + encode_ch(word, i, codes);
    }
    if word.window_eq(i, "CZ") && !(i > 1 && word.window_eq(i - 2, "WICZ")) {
        // e.g. 'czerny'
        codes.append("S", "X");
        return 2;
    }
    if word.window_eq(i + 1, "CIA") {
        // e.g. 'focaccia'
        codes.append("X", "X");
        return 3;
    }
    if word.window_eq(i, "CC") && !(i == 1 && word.char_at(0) == 'M') {
        // double 'C', but not e.g. 'McClellan'
        return 2 + encode_cc(word, i, codes);
    }
    if word.window_any(i, &["CK", "CG", "CQ"]) {
        codes.append("K", "K");
        return 2;
    }
    if word.window_any(i, &["CIO", "CIE", "CIA"]) {
        // italian vs. english
        codes.append("S", "X");
        return 2;
    }
    if word.window_any(i, &["CI", "CE", "CY"]) {
        codes.append("S", "S");
        return 2;
    }
    codes.append("K", "K");
    if word.char_at(i + 1) == ' ' && word.one_of(i + 2, "CQG") {
        // names sent in 'mac caffrey', 'mac gregor'
        3
    } else if word.one_of(i + 1, "CKQ") && !word.window_any(i + 1, &["CE", "CI"]) {
        2
    } else {
        1
    }
}

/// The `CH` digraph. Consumes one character beyond the caller's `C`.
fn encode_ch(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if word.window_eq(i, "CHIA") {
        // italian 'chianti'
        codes.append("K", "K");
    } else if i > 0 && word.window_eq(i, "CHAE") {
        // find 'michael'
        codes.append("K", "X");
    } else if germanic_or_greek_ch(word, i) {
        codes.append("K", "K");
    } else if i == 0 {
        codes.append("X", "X");
    } else if word.window_eq(0, "MC") {
        // e.g. 'McHugh'
        codes.append("K", "K");
    } else {
        codes.append("X", "K");
    }
    1
}

/// Double `C`. Returns the extra characters consumed beyond the pair.
fn encode_cc(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // 'bellocchio' but not 'bacchus'
    if word.one_of(i + 2, "IEH") && !word.window_eq(i + 2, "HU") {
        if (i == 1 && word.char_at(0) == 'A')
            || (i > 0 && word.window_any(i - 1, &["UCCEE", "UCCES"]))
        {
            // 'accident', 'accede', 'succeed'
            codes.append("KS", "KS");
        } else {
            // 'bacci', 'bertucci', other italian
            codes.append("X", "X");
        }
        1
    } else {
        // Pierce's rule
        codes.append("K", "K");
        0
    }
}

fn encode_d(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if word.char_at(i + 1) == 'G' && word.one_of(i + 2, "IEY") {
        // e.g. 'edge'
        codes.append("J", "J");
        return 3;
    }
    if word.char_at(i + 1) == 'G' {
        // e.g. 'edgar'
        codes.append("TK", "TK");
        return 2;
    }
    codes.append("T", "T");
    if word.one_of(i + 1, "TD") {
        2
    } else {
        1
    }
}

fn encode_g(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    match word.char_at(i + 1) {
        'H' => {
            encode_gh(word, i, codes);
            2
        }
        'N' => {
            encode_gn(word, i, codes);
            2
        }
        _ => {
            if word.window_eq(i + 1, "LI") && !word.is_slavo_germanic() {
                // 'tagliaro'
                codes.append("KL", "L");
                2
            } else if germanic_ger_gy(word, i) {
                // -ger-, -gy-
                codes.append("K", "J");
                2
            } else if italian_g(word, i) {
                if word.starts_with_any(&["VAN ", "VON ", "SCH"]) || word.window_eq(i + 1, "ET")
                {
                    codes.append("K", "K");
                } else if word.window_eq(i + 1, "IER ") {
                    codes.append("J", "J");
                } else {
                    codes.append("J", "K");
                }
                2
            } else {
                codes.append("K", "K");
                if word.char_at(i + 1) == 'G' {
                    2
                } else {
                    1
                }
            }
        }
    }
}

/// The `GH` digraph. Appends only; the caller consumes both characters.
fn encode_gh(word: &Word, i: usize, codes: &mut CodeAccumulator) {
    if i > 0 && !word.is_vowel(i - 1) {
        codes.append("K", "K");
        return;
    }
    // Parker's rule, with some further refinements
    if (i > 1 && word.one_of(i - 2, "BHD"))
        || (i > 2 && word.one_of(i - 3, "BHD"))
        || (i > 3 && word.one_of(i - 4, "BH"))
    {
        // e.g. 'hugh', 'bough', 'broughton'
        return;
    }
    if i > 2 && word.one_of(i - 3, "CGLRT") && word.char_at(i - 1) == 'U' {
        // e.g. 'laugh', 'McLaughlin', 'cough', 'gough', 'rough', 'tough'
        codes.append("F", "F");
    } else if i > 0 && word.char_at(i - 1) != 'I' {
        codes.append("K", "K");
    }
}

/// The `GN` digraph. Appends only; the caller consumes both characters.
fn encode_gn(word: &Word, i: usize, codes: &mut CodeAccumulator) {
    if i == 1 && word.is_vowel(0) && !word.is_slavo_germanic() {
        codes.append("KN", "N");
    } else if !word.window_eq(i + 2, "EY") && !word.is_slavo_germanic() {
        // not e.g. 'cagney'
        codes.append("N", "KN");
    } else {
        codes.append("KN", "KN");
    }
}

fn encode_h(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // keep if between two vowels
    if i > 0 && word.is_vowel(i - 1) && word.is_vowel(i + 1) {
        codes.append("H", "H");
        2
    } else {
        1
    }
}

fn encode_j(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // obvious spanish, 'jose', 'san jacinto'
    if word.window_eq(i, "JOSE") || word.window_eq(0, "SAN ") {
        if (i == 0 && word.char_at(i + 4) == ' ') || word.window_eq(0, "SAN ") {
            codes.append("H", "H");
        } else {
            codes.append("J", "H");
        }
        return 1;
    }
    if i == 0 {
        // Yankelovich/Jankelowicz
        codes.append("J", "A");
    } else if spanish_j(word, i) {
        // spanish pron. of e.g. 'bajador'
        codes.append("J", "H");
    } else if i == word.last() {
        codes.append("J", "");
    } else if !word.one_of(i + 1, "LTKSNMBZ") && !word.one_of(i - 1, "SKL") {
        codes.append("J", "J");
    }
    if word.char_at(i + 1) == 'J' {
        2
    } else {
        1
    }
}

fn encode_l(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if word.char_at(i + 1) == 'L' {
        if spanish_ll(word, i) {
            // spanish e.g. 'cabrillo', 'gallegos'
            codes.append("L", "");
        } else {
            codes.append("L", "L");
        }
        2
    } else {
        codes.append("L", "L");
        1
    }
}

fn encode_m(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    codes.append("M", "M");
    // 'dumb', 'thumb'
    if (i > 0 && word.window_any(i - 1, &["UMB  ", "UMBER"])) || word.char_at(i + 1) == 'M' {
        2
    } else {
        1
    }
}

fn encode_p(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if word.char_at(i + 1) == 'H' {
        codes.append("F", "F");
        return 2;
    }
    codes.append("P", "P");
    // also account for 'campbell', 'raspberry'
    if word.one_of(i + 1, "PB") {
        2
    } else {
        1
    }
}

fn encode_r(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if french_silent_r(word, i) {
        codes.append("", "R");
    } else {
        codes.append("R", "R");
    }
    if word.char_at(i + 1) == 'R' {
        2
    } else {
        1
    }
}

fn encode_s(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // silent in 'island', 'isle', 'carlisle', 'carlysle'
    if i > 0 && word.one_of(i - 1, "IY") && word.char_at(i + 1) == 'L' {
        return 1;
    }
    if word.window_eq(i, "SH") {
        return 1 + encode_sh(word, i, codes);
    }
    if word.window_any(i, &["SIO", "SIA"]) {
        // italian & armenian
        if word.is_slavo_germanic() {
            codes.append("S", "S");
        } else {
            codes.append("S", "X");
        }
        return 3;
    }
    if word.window_eq(i, "SZ") {
        // slavic -sz-, though hungarian pronounces it 's'
        codes.append("S", "X");
        return 2;
    }
    if word.window_eq(i, "SC") {
        return 1 + encode_sc(word, i, codes);
    }
    if french_silent_s(word, i) {
        // french e.g. 'resnais', 'artois'
        codes.append("", "S");
    } else {
        codes.append("S", "S");
    }
    if word.one_of(i + 1, "SZ") {
        2
    } else {
        1
    }
}

/// The `SH` digraph. Consumes one character beyond the caller's `S`.
fn encode_sh(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // germanic
    if word.window_any(i + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
        codes.append("S", "S");
    } else {
        codes.append("X", "X");
    }
    1
}

/// The `SC` cluster. Consumes two characters beyond the caller's `S`.
fn encode_sc(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // Schlesinger's rule
    if word.char_at(i + 2) == 'H' {
        if word.window_any(i + 3, &["OO", "UY", "ED", "EM"]) {
            // dutch origin, e.g. 'school', 'schooner'
            codes.append("SK", "SK");
        } else if word.window_any(i + 3, &["ER", "EN"]) {
            // 'schermerhorn', 'schenker'
            codes.append("X", "SK");
        } else if i == 0 && !word.is_vowel(3) && word.char_at(3) != 'W' {
            codes.append("X", "S");
        } else {
            codes.append("X", "X");
        }
    } else if word.one_of(i + 2, "IEY") {
        codes.append("S", "S");
    } else {
        codes.append("SK", "SK");
    }
    2
}

fn encode_t(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if word.window_any(i, &["TION", "TIA", "TCH"]) {
        codes.append("X", "X");
        return 3;
    }
    if word.window_eq(i, "TH") || word.window_eq(i, "TTH") {
        // special case 'thomas', 'thames' or germanic
        if (word.one_of(i + 2, "OA") && word.char_at(i + 3) == 'M')
            || word.starts_with_any(&["VAN ", "VON ", "SCH"])
        {
            codes.append("T", "T");
        } else {
            codes.append("0", "T");
        }
        return 2;
    }
    codes.append("T", "T");
    if word.one_of(i + 1, "TD") {
        2
    } else {
        1
    }
}

fn encode_w(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // can also be in the middle of a word
    if word.window_eq(i, "WR") {
        codes.append("R", "R");
        return 2;
    }
    if (i == word.last() && i > 0 && word.is_vowel(i - 1))
        || (i > 0
            && word.one_of(i - 1, "EO")
            && word.window_eq(i + 1, "SK")
            && word.one_of(i + 3, "IY"))
        || word.window_eq(0, "SCH")
    {
        // Arnow should match Arnoff
        codes.append("", "F");
        return 1;
    }
    if word.window_any(i, &["WICZ", "WITZ"]) {
        // polish e.g. 'filipowicz'
        codes.append("TS", "FX");
        return 4;
    }
    1
}

fn encode_x(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    // french e.g. 'breaux'
    if !french_silent_x(word, i) {
        codes.append("KS", "KS");
    }
    if word.one_of(i + 1, "CX") {
        2
    } else {
        1
    }
}

fn encode_z(word: &Word, i: usize, codes: &mut CodeAccumulator) -> usize {
    if word.char_at(i + 1) == 'H' {
        // chinese pinyin e.g. 'zhao'
        codes.append("J", "J");
        return 2;
    }
    if (word.char_at(i + 1) == 'Z' && word.one_of(i + 2, "OIA"))
        || (word.is_slavo_germanic() && i > 0 && word.char_at(i - 1) != 'T')
    {
        codes.append("S", "TS");
    } else {
        codes.append("S", "S");
    }
    if word.char_at(i + 1) == 'Z' {
        2
    } else {
        1
    }
}

// ============================================================================
// Pronunciation predicates
// ============================================================================

/// Germanic `ACH` clusters: consonant + 'ACH' not before 'I'/'E', or
/// '-acher' after 'B'/'M'.
#[inline]
fn germanic_c(word: &Word, i: usize) -> bool {
    i > 1
        && ((!word.is_vowel(i - 2) && word.window_eq(i - 1, "ACH") && !word.one_of(i + 2, "IE"))
            || (word.one_of(i - 2, "BM") && word.window_eq(i - 1, "ACHER")))
}

/// Germanic, greek, or otherwise 'CH' for the 'kh' sound.
fn germanic_or_greek_ch(word: &Word, i: usize) -> bool {
    word.starts_with_any(&["VAN ", "VON ", "SCH"])
        // 'architect' but not 'arch'; 'orchestra', 'orchid'
        || (i > 1 && word.window_any(i - 2, &["ORCHES", "ARCHIT", "ORCHID"]))
        || word.one_of(i + 2, "TS")
        || (((i > 0 && word.one_of(i - 1, "AOUE")) || i == 0)
            // e.g. 'wachtler', 'weschsler', but not 'tichner'
            && (word.one_of(i + 2, "LRNMBHFVW ") || i + 2 >= word.len()))
}

/// Hard/soft alternation of `-ger-` and `-gy-`.
#[inline]
fn germanic_ger_gy(word: &Word, i: usize) -> bool {
    (word.window_eq(i + 1, "ER") || word.char_at(i + 1) == 'Y')
        && !word.starts_with_any(&["DANGER", "RANGER", "MANGER"])
        && !(i > 0 && word.one_of(i - 1, "EI"))
        && !(i > 0 && word.window_any(i - 1, &["RGY", "OGY"]))
}

/// Italian soft `G`, e.g. 'biaggi'.
#[inline]
fn italian_g(word: &Word, i: usize) -> bool {
    word.one_of(i + 1, "EIY") || (i > 0 && word.window_any(i - 1, &["AGGI", "OGGI"]))
}

/// Spanish pronunciation of `J`, e.g. 'bajador'.
#[inline]
fn spanish_j(word: &Word, i: usize) -> bool {
    i > 0 && word.is_vowel(i - 1) && !word.is_slavo_germanic() && word.one_of(i + 1, "AO")
}

/// Spanish `LL`, e.g. 'cabrillo', 'gallegos'.
fn spanish_ll(word: &Word, i: usize) -> bool {
    let last = word.last();
    (i + 3 == word.len() && i > 0 && word.window_any(i - 1, &["ILLO", "ILLA", "ALLE"]))
        || (((last > 0 && word.window_any(last - 1, &["AS", "OS"])) || word.one_of(last, "AO"))
            && (i > 0 && word.window_eq(i - 1, "ALLE")))
}

/// French final `R`, e.g. 'rogier', but exclude 'hochmeier'.
#[inline]
fn french_silent_r(word: &Word, i: usize) -> bool {
    i == word.last()
        && !word.is_slavo_germanic()
        && i > 1
        && word.window_eq(i - 2, "IE")
        && !(i > 3 && word.window_any(i - 4, &["ME", "MA"]))
}

/// French final `S`, e.g. 'resnais', 'artois'.
#[inline]
fn french_silent_s(word: &Word, i: usize) -> bool {
    i == word.last() && i > 1 && word.one_of(i - 2, "AO") && word.char_at(i - 1) == 'I'
}

/// French final `X`, e.g. 'breaux'.
#[inline]
fn french_silent_x(word: &Word, i: usize) -> bool {
    i == word.last()
        && ((i > 2 && word.one_of(i - 3, "IE") && word.window_eq(i - 2, "AU"))
            || (i > 1 && word.one_of(i - 2, "AO") && word.char_at(i - 1) == 'U'))
}

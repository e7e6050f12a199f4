// unigbrk.rs - Grapheme cluster boundaries (UAX #29).
//
//! Extended grapheme cluster segmentation.
//!
//! [`uc_is_grapheme_break`] applies the rules to a single pair of code
//! points. [`GraphemeBreaker`] carries the state the emoji ZWJ rule (GB11)
//! and the regional indicator pairing rules (GB12, GB13) need, and the
//! string functions are built on it.
//!
//! # Panics
//!
//! The `*_breaks` functions fill one flag per input unit and panic unless
//! `out.len() == s.len()`.

use crate::unictype::{uc_graphemeclusterbreak_property, uc_is_extended_pictographic, GraphemeClusterBreak};
use crate::unistr::{mbtouc, mbtouc_back, UtfUnit};
use crate::unitypes::Ucs4;

use GraphemeClusterBreak as Gcb;

/// Core rule table. `zwj_after_pict` is true when the previous character is
/// a ZWJ ending an `ExtPict Extend*` run, `ri_odd` when an odd number of
/// regional indicators precede the boundary.
fn is_break(p: Gcb, n: Gcb, zwj_after_pict: bool, n_pict: bool, ri_odd: bool) -> bool {
    match (p, n) {
        (Gcb::Cr, Gcb::Lf) => false,
        (Gcb::Control | Gcb::Cr | Gcb::Lf, _) => true,
        (_, Gcb::Control | Gcb::Cr | Gcb::Lf) => true,
        (Gcb::L, Gcb::L | Gcb::V | Gcb::Lv | Gcb::Lvt) => false,
        (Gcb::Lv | Gcb::V, Gcb::V | Gcb::T) => false,
        (Gcb::Lvt | Gcb::T, Gcb::T) => false,
        (_, Gcb::Extend | Gcb::Zwj) => false,
        (_, Gcb::SpacingMark) => false,
        (Gcb::Prepend, _) => false,
        (Gcb::Zwj, _) if zwj_after_pict && n_pict => false,
        (Gcb::RegionalIndicator, Gcb::RegionalIndicator) => !ri_odd,
        _ => true,
    }
}

/// Is there a grapheme cluster boundary between `a` and `b`, looking at
/// this pair only? A ZWJ followed by an Extended_Pictographic character and
/// two regional indicators are treated as joined.
pub fn uc_is_grapheme_break(a: Ucs4, b: Ucs4) -> bool {
    is_break(
        uc_graphemeclusterbreak_property(a),
        uc_graphemeclusterbreak_property(b),
        true,
        uc_is_extended_pictographic(b),
        true,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emoji {
    None,
    Pict,
    PictZwj,
}

/// Feeds code points one at a time and reports the boundaries between them.
#[derive(Debug, Clone)]
pub struct GraphemeBreaker {
    prev: Option<Gcb>,
    emoji: Emoji,
    ri_count: usize,
}

impl Default for GraphemeBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphemeBreaker {
    pub fn new() -> Self {
        GraphemeBreaker { prev: None, emoji: Emoji::None, ri_count: 0 }
    }

    /// Returns true when a boundary precedes `uc`. The first code point
    /// always starts a cluster.
    pub fn is_break(&mut self, uc: Ucs4) -> bool {
        let prop = uc_graphemeclusterbreak_property(uc);
        let pict = uc_is_extended_pictographic(uc);
        let brk = match self.prev {
            None => true,
            Some(p) => is_break(p, prop, self.emoji == Emoji::PictZwj, pict, self.ri_count % 2 == 1),
        };
        self.emoji = match (pict, prop, self.emoji) {
            (true, _, _) => Emoji::Pict,
            (false, Gcb::Extend, Emoji::Pict) => Emoji::Pict,
            (false, Gcb::Zwj, Emoji::Pict) => Emoji::PictZwj,
            _ => Emoji::None,
        };
        self.ri_count = if prop == Gcb::RegionalIndicator { self.ri_count + 1 } else { 0 };
        self.prev = Some(prop);
        brk
    }
}

// === Generic string operations ===

/// End of the grapheme cluster that starts at `pos`, or `None` at the end
/// of `s`.
pub fn grapheme_next<U: UtfUnit>(s: &[U], pos: usize) -> Option<usize> {
    if pos >= s.len() {
        return None;
    }
    let mut breaker = GraphemeBreaker::new();
    let (uc, n) = mbtouc(&s[pos..]);
    breaker.is_break(uc);
    let mut i = pos + n;
    while i < s.len() {
        let (uc, n) = mbtouc(&s[i..]);
        if breaker.is_break(uc) {
            break;
        }
        i += n;
    }
    Some(i)
}

// Permissive backward step over the same units `mbtouc` steps forward.
fn prev_char<U: UtfUnit>(s: &[U], pos: usize) -> (Ucs4, usize) {
    mbtouc_back(s, pos)
}

// Number of regional indicators ending at `end`.
fn ri_run<U: UtfUnit>(s: &[U], mut end: usize) -> usize {
    let mut count = 0;
    while end > 0 {
        let (uc, start) = prev_char(s, end);
        if uc_graphemeclusterbreak_property(uc) != Gcb::RegionalIndicator {
            break;
        }
        count += 1;
        end = start;
    }
    count
}

// True when `ExtPict Extend*` ends at `end`.
fn pict_run_ends_at<U: UtfUnit>(s: &[U], mut end: usize) -> bool {
    while end > 0 {
        let (uc, start) = prev_char(s, end);
        if uc_is_extended_pictographic(uc) {
            return true;
        }
        if uc_graphemeclusterbreak_property(uc) != Gcb::Extend {
            return false;
        }
        end = start;
    }
    false
}

/// Start of the grapheme cluster that ends at `pos`, or `None` at the start
/// of `s`.
pub fn grapheme_prev<U: UtfUnit>(s: &[U], pos: usize) -> Option<usize> {
    let pos = pos.min(s.len());
    if pos == 0 {
        return None;
    }
    let (mut next_uc, mut start) = prev_char(s, pos);
    while start > 0 {
        let (uc, pstart) = prev_char(s, start);
        let p = uc_graphemeclusterbreak_property(uc);
        let n = uc_graphemeclusterbreak_property(next_uc);
        let zwj_after_pict = p == Gcb::Zwj && pict_run_ends_at(s, pstart);
        let ri_odd = p == Gcb::RegionalIndicator && ri_run(s, start) % 2 == 1;
        if is_break(p, n, zwj_after_pict, uc_is_extended_pictographic(next_uc), ri_odd) {
            break;
        }
        start = pstart;
        next_uc = uc;
    }
    Some(start)
}

/// Fills `out[i]` with true when a cluster boundary precedes unit `i`.
/// Units inside a multi-unit character get false.
///
/// # Panics
///
/// Panics if `out` and `s` differ in length.
pub fn grapheme_breaks<U: UtfUnit>(s: &[U], out: &mut [bool]) {
    assert_eq!(out.len(), s.len(), "one break flag per input unit");
    let mut breaker = GraphemeBreaker::new();
    let mut i = 0;
    while i < s.len() {
        let (uc, n) = mbtouc(&s[i..]);
        out[i] = breaker.is_break(uc);
        for flag in &mut out[i + 1..i + n] {
            *flag = false;
        }
        i += n;
    }
}

macro_rules! grapheme_functions {
    ($u:ty, $next:ident, $prev:ident, $breaks:ident) => {
        pub fn $next(s: &[$u], pos: usize) -> Option<usize> {
            grapheme_next(s, pos)
        }
        pub fn $prev(s: &[$u], pos: usize) -> Option<usize> {
            grapheme_prev(s, pos)
        }
        pub fn $breaks(s: &[$u], out: &mut [bool]) {
            grapheme_breaks(s, out)
        }
    };
}

grapheme_functions!(u8, u8_grapheme_next, u8_grapheme_prev, u8_grapheme_breaks);
grapheme_functions!(u16, u16_grapheme_next, u16_grapheme_prev, u16_grapheme_breaks);
grapheme_functions!(u32, u32_grapheme_next, u32_grapheme_prev, u32_grapheme_breaks);

/// Boundaries of a sequence of code points; no decoding is involved.
///
/// # Panics
///
/// Panics if `out` and `s` differ in length.
pub fn uc_grapheme_breaks(s: &[Ucs4], out: &mut [bool]) {
    assert_eq!(out.len(), s.len(), "one break flag per input unit");
    let mut breaker = GraphemeBreaker::new();
    for (flag, &uc) in out.iter_mut().zip(s) {
        *flag = breaker.is_break(uc);
    }
}

/// Boundaries of a string in the locale's character encoding.
pub fn ulc_grapheme_breaks(s: &[u8], out: &mut [bool]) {
    crate::uniconv::ulc_breaks(s, out, false, u8_grapheme_breaks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(s: &str) -> Vec<&str> {
        let b = s.as_bytes();
        let mut out = Vec::new();
        let mut pos = 0;
        while let Some(end) = u8_grapheme_next(b, pos) {
            out.push(&s[pos..end]);
            pos = end;
        }
        out
    }

    #[test]
    fn combining_sequence_is_one_cluster() {
        assert_eq!(u8_grapheme_next(&[0x65, 0xCC, 0x81], 0), Some(3));
        assert_eq!(u8_grapheme_next(&[0x65, 0xCC, 0x81], 3), None);
        assert_eq!(u8_grapheme_prev(&[0x65, 0xCC, 0x81], 3), Some(0));
    }

    #[test]
    fn pairwise_rules() {
        assert!(!uc_is_grapheme_break('\r' as u32, '\n' as u32));
        assert!(uc_is_grapheme_break('\n' as u32, '\r' as u32));
        assert!(uc_is_grapheme_break('a' as u32, 'b' as u32));
        assert!(!uc_is_grapheme_break('a' as u32, 0x0301));
        assert!(!uc_is_grapheme_break(0x1100, 0x1161)); // L V
        assert!(!uc_is_grapheme_break(0xAC00, 0x11A8)); // LV T
        assert!(uc_is_grapheme_break(0x11A8, 0x1100)); // T L
        assert!(!uc_is_grapheme_break(0x0600, 'a' as u32)); // Prepend
        assert!(!uc_is_grapheme_break(0x200D, 0x1F600));
    }

    #[test]
    fn emoji_sequences() {
        // Woman, ZWJ, laptop.
        assert_eq!(clusters("\u{1F469}\u{200D}\u{1F4BB}x"), vec!["\u{1F469}\u{200D}\u{1F4BB}", "x"]);
        // ZWJ not preceded by a pictograph does not join.
        assert_eq!(clusters("a\u{200D}\u{1F600}"), vec!["a\u{200D}", "\u{1F600}"]);
        // Skin tone modifier is Extend.
        assert_eq!(clusters("\u{1F44D}\u{1F3FD}!"), vec!["\u{1F44D}\u{1F3FD}", "!"]);
    }

    #[test]
    fn regional_indicator_pairs() {
        let flags = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}\u{1F1EC}";
        assert_eq!(
            clusters(flags),
            vec!["\u{1F1E9}\u{1F1EA}", "\u{1F1EB}\u{1F1F7}", "\u{1F1EC}"]
        );
        let b = flags.as_bytes();
        assert_eq!(u8_grapheme_prev(b, b.len()), Some(16));
        assert_eq!(u8_grapheme_prev(b, 16), Some(8));
        assert_eq!(u8_grapheme_prev(b, 8), Some(0));
    }

    #[test]
    fn prev_walks_emoji_zwj() {
        let s = "x\u{1F469}\u{200D}\u{1F4BB}";
        let b = s.as_bytes();
        assert_eq!(u8_grapheme_prev(b, b.len()), Some(1));
        assert_eq!(u8_grapheme_prev(b, 1), Some(0));
        assert_eq!(u8_grapheme_prev(b, 0), None);
    }

    #[test]
    fn crlf_and_controls() {
        assert_eq!(clusters("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(clusters("\u{301}a"), vec!["\u{301}", "a"]);
    }

    #[test]
    fn breaks_array() {
        let s = "e\u{301}x".as_bytes();
        let mut out = vec![false; s.len()];
        u8_grapheme_breaks(s, &mut out);
        assert_eq!(out, vec![true, false, false, true]);

        let w: Vec<u16> = "😀a".encode_utf16().collect();
        let mut out = vec![false; w.len()];
        u16_grapheme_breaks(&w, &mut out);
        assert_eq!(out, vec![true, false, true]);

        let mut out = vec![false; 3];
        uc_grapheme_breaks(&[0x61, 0x301, 0x62], &mut out);
        assert_eq!(out, vec![true, false, true]);
    }

    #[test]
    fn malformed_units_stand_alone() {
        let s = [b'a', 0xFF, 0xCC, 0x81];
        let mut out = vec![false; s.len()];
        u8_grapheme_breaks(&s, &mut out);
        // The bad byte is a cluster of its own and the accent attaches to it.
        assert_eq!(out, vec![true, true, false, false]);
    }

    #[test]
    fn hangul_syllables() {
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}\u{1100}"), vec!["\u{1100}\u{1161}\u{11A8}", "\u{1100}"]);
        assert_eq!(clusters("한글"), vec!["한", "글"]);
    }

    #[test]
    #[should_panic(expected = "one break flag per input unit")]
    fn code_point_breaks_need_a_flag_per_code_point() {
        let mut out = [false; 2];
        uc_grapheme_breaks(&[0x61, 0x62, 0x63], &mut out);
    }

    #[test]
    #[should_panic(expected = "one break flag per input unit")]
    fn unit_breaks_reject_a_longer_output() {
        let mut out = [false; 4];
        u8_grapheme_breaks(b"abc", &mut out);
    }
}

// uniwbrk.rs - Word boundaries (UAX #29).
//
//! Default word boundary detection.
//!
//! The input is decoded once into a list of code points with their
//! Word_Break classes, then each boundary is decided by the rules WB3 to
//! WB16. Extend, Format and ZWJ attach to the preceding character (WB4), so
//! the rules past WB4 look through them in both directions.
//!
//! # Panics
//!
//! The `*_wordbreaks` functions fill one flag per input unit and panic
//! unless `out.len() == s.len()`.

use crate::unictype::{uc_is_extended_pictographic, uc_wordbreak_property, WordBreakProperty};
use crate::unistr::{mbtouc, UtfUnit};

use WordBreakProperty as Wbp;

#[derive(Debug, Clone, Copy)]
struct Item {
    prop: Wbp,
    pict: bool,
    offset: usize,
}

#[inline]
fn is_newline(p: Wbp) -> bool {
    matches!(p, Wbp::Newline | Wbp::Cr | Wbp::Lf)
}

#[inline]
fn is_ignorable(p: Wbp) -> bool {
    matches!(p, Wbp::Extend | Wbp::Format | Wbp::Zwj)
}

#[inline]
fn is_ahletter(p: Wbp) -> bool {
    matches!(p, Wbp::ALetter | Wbp::HebrewLetter)
}

#[inline]
fn is_midnumletq(p: Wbp) -> bool {
    matches!(p, Wbp::MidNumLet | Wbp::SingleQuote)
}

// Effective class of the character ending before `i`, looking through
// ignorables unless they follow a newline or the start of text.
fn prev_effective(items: &[Item], i: usize) -> Option<usize> {
    if i == 0 {
        return None;
    }
    let mut j = i - 1;
    while is_ignorable(items[j].prop) {
        if j == 0 || is_newline(items[j - 1].prop) {
            return Some(j);
        }
        j -= 1;
    }
    Some(j)
}

fn next_effective(items: &[Item], i: usize) -> Option<usize> {
    (i + 1..items.len()).find(|&j| !is_ignorable(items[j].prop))
}

fn prop_at(items: &[Item], i: Option<usize>) -> Option<Wbp> {
    i.map(|i| items[i].prop)
}

fn is_word_break(items: &[Item], i: usize) -> bool {
    let p_raw = items[i - 1].prop;
    let n = items[i].prop;

    // WB3 - WB3d operate on adjacent characters.
    if p_raw == Wbp::Cr && n == Wbp::Lf {
        return false;
    }
    if is_newline(p_raw) || is_newline(n) {
        return true;
    }
    if p_raw == Wbp::Zwj && items[i].pict {
        return false;
    }
    if p_raw == Wbp::WSegSpace && n == Wbp::WSegSpace {
        return false;
    }
    // WB4
    if is_ignorable(n) {
        return false;
    }

    let pi = prev_effective(items, i);
    let Some(p) = prop_at(items, pi) else {
        return true;
    };
    let pp = prop_at(items, pi.and_then(|k| prev_effective(items, k)));
    let nn = prop_at(items, next_effective(items, i));

    let ahletter_p = is_ahletter(p);
    let ahletter_n = is_ahletter(n);
    match () {
        // WB5
        _ if ahletter_p && ahletter_n => false,
        // WB6
        _ if ahletter_p
            && (n == Wbp::MidLetter || is_midnumletq(n))
            && nn.is_some_and(is_ahletter) =>
        {
            false
        }
        // WB7
        _ if pp.is_some_and(is_ahletter) && (p == Wbp::MidLetter || is_midnumletq(p)) && ahletter_n => {
            false
        }
        // WB7a
        _ if p == Wbp::HebrewLetter && n == Wbp::SingleQuote => false,
        // WB7b
        _ if p == Wbp::HebrewLetter && n == Wbp::DoubleQuote && nn == Some(Wbp::HebrewLetter) => false,
        // WB7c
        _ if pp == Some(Wbp::HebrewLetter) && p == Wbp::DoubleQuote && n == Wbp::HebrewLetter => false,
        // WB8, WB9, WB10
        _ if (p == Wbp::Numeric || ahletter_p) && (n == Wbp::Numeric || ahletter_n) => false,
        // WB11
        _ if pp == Some(Wbp::Numeric) && (p == Wbp::MidNum || is_midnumletq(p)) && n == Wbp::Numeric => {
            false
        }
        // WB12
        _ if p == Wbp::Numeric && (n == Wbp::MidNum || is_midnumletq(n)) && nn == Some(Wbp::Numeric) => {
            false
        }
        // WB13
        _ if p == Wbp::Katakana && n == Wbp::Katakana => false,
        // WB13a
        _ if (ahletter_p || matches!(p, Wbp::Numeric | Wbp::Katakana | Wbp::ExtendNumLet))
            && n == Wbp::ExtendNumLet =>
        {
            false
        }
        // WB13b
        _ if p == Wbp::ExtendNumLet && (ahletter_n || matches!(n, Wbp::Numeric | Wbp::Katakana)) => false,
        // WB15, WB16
        _ if p == Wbp::RegionalIndicator && n == Wbp::RegionalIndicator => {
            ri_run(items, pi) % 2 == 0
        }
        _ => true,
    }
}

// Regional indicators ending at `last`, looking through ignorables.
fn ri_run(items: &[Item], mut last: Option<usize>) -> usize {
    let mut count = 0;
    while let Some(k) = last {
        if items[k].prop != Wbp::RegionalIndicator {
            break;
        }
        count += 1;
        last = prev_effective(items, k);
    }
    count
}

/// Fills `out[i]` with true when a word boundary lies between units `i - 1`
/// and `i`. `out[0]` is false, as are the non-initial units of a character.
///
/// # Panics
///
/// Panics if `out` and `s` differ in length.
pub fn wordbreaks<U: UtfUnit>(s: &[U], out: &mut [bool]) {
    assert_eq!(out.len(), s.len(), "one break flag per input unit");
    let mut items = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let (uc, n) = mbtouc(&s[i..]);
        items.push(Item { prop: uc_wordbreak_property(uc), pict: uc_is_extended_pictographic(uc), offset: i });
        out[i..i + n].fill(false);
        i += n;
    }
    for k in 1..items.len() {
        out[items[k].offset] = is_word_break(&items, k);
    }
}

pub fn u8_wordbreaks(s: &[u8], out: &mut [bool]) {
    wordbreaks(s, out)
}

pub fn u16_wordbreaks(s: &[u16], out: &mut [bool]) {
    wordbreaks(s, out)
}

pub fn u32_wordbreaks(s: &[u32], out: &mut [bool]) {
    wordbreaks(s, out)
}

/// Word boundaries of a string in the locale's character encoding.
pub fn ulc_wordbreaks(s: &[u8], out: &mut [bool]) {
    crate::uniconv::ulc_breaks(s, out, false, u8_wordbreaks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        let b = s.as_bytes();
        let mut out = vec![false; b.len()];
        u8_wordbreaks(b, &mut out);
        let mut segs = Vec::new();
        let mut start = 0;
        for i in 1..b.len() {
            if out[i] {
                segs.push(&s[start..i]);
                start = i;
            }
        }
        if !b.is_empty() {
            segs.push(&s[start..]);
        }
        segs
    }

    #[test]
    fn simple_sentence() {
        assert_eq!(words("The quick (\"brown\") fox."), vec![
            "The", " ", "quick", " ", "(", "\"", "brown", "\"", ")", " ", "fox", "."
        ]);
    }

    #[test]
    fn apostrophes_and_numbers() {
        assert_eq!(words("can't 3.14 a.b"), vec!["can't", " ", "3.14", " ", "a.b"]);
        assert_eq!(words("1,000,000"), vec!["1,000,000"]);
        assert_eq!(words("a1_b2"), vec!["a1_b2"]);
        assert_eq!(words("end."), vec!["end", "."]);
    }

    #[test]
    fn spaces_and_newlines() {
        assert_eq!(words("a   b"), vec!["a", "   ", "b"]);
        assert_eq!(words("a\r\nb"), vec!["a", "\r\n", "b"]);
    }

    #[test]
    fn extend_is_transparent() {
        assert_eq!(words("cafe\u{301}s ok"), vec!["cafe\u{301}s", " ", "ok"]);
        assert_eq!(words("a\u{AD}b"), vec!["a\u{AD}b"]);
    }

    #[test]
    fn katakana_and_ideographs() {
        assert_eq!(words("カタカナ漢字"), vec!["カタカナ", "漢", "字"]);
    }

    #[test]
    fn hebrew_quotes() {
        assert_eq!(words("צה\"ל"), vec!["צה\"ל"]);
    }

    #[test]
    fn emoji_and_flags() {
        assert_eq!(words("\u{1F469}\u{200D}\u{1F4BB}"), vec!["\u{1F469}\u{200D}\u{1F4BB}"]);
        assert_eq!(
            words("\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}"),
            vec!["\u{1F1E9}\u{1F1EA}", "\u{1F1EB}\u{1F1F7}"]
        );
    }

    #[test]
    fn first_flag_is_false() {
        let mut out = vec![true; 3];
        u8_wordbreaks(b"a b", &mut out);
        assert_eq!(out, vec![false, true, true]);
        let w: Vec<u16> = "x😀".encode_utf16().collect();
        let mut out = vec![true; 3];
        u16_wordbreaks(&w, &mut out);
        assert_eq!(out, vec![false, true, false]);
    }

    #[test]
    #[should_panic(expected = "one break flag per input unit")]
    fn output_must_match_the_input() {
        let mut out = [false; 2];
        u8_wordbreaks(b"a b", &mut out);
    }
}

// unicase/mod.rs - Case mapping and case-insensitive comparison.
//
//! Simple (one code point to one code point) and full (SpecialCasing,
//! CaseFolding) case mappings.
//!
//! The string functions apply the full mappings with the context rules that
//! do not depend on a dictionary: Final_Sigma, and the dotted/dotless i of
//! Turkish and Azerbaijani when `iso639_language` is `"tr"` or `"az"`.
//! Each takes an optional normalization form that is applied to the result.

mod tables;

use std::cmp::Ordering;

use tables::{
    SPECIAL_FOLD, SPECIAL_LOWER, SPECIAL_TITLE, SPECIAL_UPPER, TOCASEFOLD, TOLOWER, TOTITLE,
    TOUPPER,
};

use crate::error::UnistringError;
use crate::unictype::trie::Trie;
use crate::unictype::{uc_is_property_case_ignorable, uc_is_property_cased};
use crate::uninorm::{self, uninorm_decomposing_form, UninormT};
use crate::unistr::{convert, UtfUnit};
use crate::uniwbrk;
use crate::unitypes::Ucs4;

// === Simple mappings ===

#[inline]
fn simple(trie: &Trie, uc: Ucs4) -> Ucs4 {
    match trie.get_signed(uc) {
        0 => uc,
        delta => uc.wrapping_add_signed(delta),
    }
}

/// Simple uppercase mapping. Code points without one map to themselves.
#[inline]
pub fn uc_toupper(uc: Ucs4) -> Ucs4 {
    simple(&TOUPPER, uc)
}

#[inline]
pub fn uc_tolower(uc: Ucs4) -> Ucs4 {
    simple(&TOLOWER, uc)
}

#[inline]
pub fn uc_totitle(uc: Ucs4) -> Ucs4 {
    simple(&TOTITLE, uc)
}

/// Simple case folding (CaseFolding.txt statuses C and S).
#[inline]
pub fn uc_tocasefold(uc: Ucs4) -> Ucs4 {
    simple(&TOCASEFOLD, uc)
}

// === Full mappings ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mapping {
    Upper,
    Lower,
    Title,
    Fold,
}

impl Mapping {
    fn special(self) -> &'static [(u32, &'static [u32])] {
        match self {
            Mapping::Upper => &SPECIAL_UPPER,
            Mapping::Lower => &SPECIAL_LOWER,
            Mapping::Title => &SPECIAL_TITLE,
            Mapping::Fold => &SPECIAL_FOLD,
        }
    }

    fn simple(self, uc: Ucs4) -> Ucs4 {
        match self {
            Mapping::Upper => uc_toupper(uc),
            Mapping::Lower => uc_tolower(uc),
            Mapping::Title => uc_totitle(uc),
            Mapping::Fold => uc_tocasefold(uc),
        }
    }
}

fn is_turkic(language: Option<&str>) -> bool {
    matches!(language, Some("tr") | Some("az"))
}

// U+03A3 becomes final sigma when a cased letter precedes it and none
// follows, case-ignorable characters being skipped in both directions.
fn is_final_sigma(s: &[Ucs4], i: usize) -> bool {
    let before = s[..i].iter().rev().find(|&&c| !uc_is_property_case_ignorable(c));
    let after = s[i + 1..].iter().find(|&&c| !uc_is_property_case_ignorable(c));
    before.is_some_and(|&c| uc_is_property_cased(c)) && !after.is_some_and(|&c| uc_is_property_cased(c))
}

/// Maps `s[i]`, appending to `out`. Returns the number of input code points
/// consumed (2 when a Turkish I absorbs a following U+0307).
fn map_at(s: &[Ucs4], i: usize, mapping: Mapping, language: Option<&str>, out: &mut Vec<Ucs4>) -> usize {
    let uc = s[i];
    if is_turkic(language) {
        match (mapping, uc) {
            (Mapping::Upper | Mapping::Title, 0x0069) => {
                out.push(0x0130);
                return 1;
            }
            (Mapping::Lower, 0x0049) if s.get(i + 1) == Some(&0x0307) => {
                out.push(0x0069);
                return 2;
            }
            (Mapping::Lower | Mapping::Fold, 0x0049) => {
                out.push(0x0131);
                return 1;
            }
            (Mapping::Lower | Mapping::Fold, 0x0130) => {
                out.push(0x0069);
                return 1;
            }
            _ => {}
        }
    }
    if uc == 0x03A3 && mapping == Mapping::Lower && is_final_sigma(s, i) {
        out.push(0x03C2);
        return 1;
    }
    let table = mapping.special();
    match table.binary_search_by_key(&uc, |&(c, _)| c) {
        Ok(k) => out.extend_from_slice(table[k].1),
        Err(_) => out.push(mapping.simple(uc)),
    }
    1
}

fn map_chars(s: &[Ucs4], mapping: Mapping, language: Option<&str>) -> Result<Vec<Ucs4>, UnistringError> {
    let mut out = Vec::new();
    out.try_reserve(s.len())?;
    let mut i = 0;
    while i < s.len() {
        i += map_at(s, i, mapping, language, &mut out);
    }
    Ok(out)
}

// First cased letter of each word is titlecased, everything else lowercased.
fn title_chars(s: &[Ucs4], language: Option<&str>) -> Result<Vec<Ucs4>, UnistringError> {
    let mut breaks = vec![false; s.len()];
    uniwbrk::u32_wordbreaks(s, &mut breaks);
    let mut out = Vec::new();
    out.try_reserve(s.len())?;
    let mut seen_cased = false;
    let mut i = 0;
    while i < s.len() {
        if breaks[i] {
            seen_cased = false;
        }
        let mapping = if !seen_cased && uc_is_property_cased(s[i]) {
            seen_cased = true;
            Mapping::Title
        } else {
            Mapping::Lower
        };
        i += map_at(s, i, mapping, language, &mut out);
    }
    Ok(out)
}

fn fold_chars(s: &[Ucs4], language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<Ucs4>, UnistringError> {
    match nf {
        None => map_chars(s, Mapping::Fold, language),
        Some(nf) => {
            // Canonical caseless matching: decompose, fold, then normalize.
            let decomposed = uninorm::normalize_chars(uninorm_decomposing_form(nf), s)?;
            let folded = map_chars(&decomposed, Mapping::Fold, language)?;
            uninorm::normalize_chars(nf, &folded)
        }
    }
}

fn finish(chars: Vec<Ucs4>, nf: Option<UninormT>) -> Result<Vec<Ucs4>, UnistringError> {
    match nf {
        Some(nf) => uninorm::normalize_chars(nf, &chars),
        None => Ok(chars),
    }
}

// === Generic string operations ===

fn toupper<U: UtfUnit>(s: &[U], language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<U>, UnistringError> {
    let chars = convert::<U, u32>(s)?;
    convert(&finish(map_chars(&chars, Mapping::Upper, language)?, nf)?)
}

fn tolower<U: UtfUnit>(s: &[U], language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<U>, UnistringError> {
    let chars = convert::<U, u32>(s)?;
    convert(&finish(map_chars(&chars, Mapping::Lower, language)?, nf)?)
}

fn totitle<U: UtfUnit>(s: &[U], language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<U>, UnistringError> {
    let chars = convert::<U, u32>(s)?;
    convert(&finish(title_chars(&chars, language)?, nf)?)
}

fn casefold<U: UtfUnit>(s: &[U], language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<U>, UnistringError> {
    let chars = convert::<U, u32>(s)?;
    convert(&fold_chars(&chars, language, nf)?)
}

fn casecmp<U: UtfUnit>(
    s1: &[U],
    s2: &[U],
    language: Option<&str>,
    nf: Option<UninormT>,
) -> Result<Ordering, UnistringError> {
    let a = fold_chars(&convert::<U, u32>(s1)?, language, nf)?;
    let b = fold_chars(&convert::<U, u32>(s2)?, language, nf)?;
    Ok(a.cmp(&b))
}

fn casexfrm<U: UtfUnit>(s: &[U], language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<u8>, UnistringError> {
    let folded = fold_chars(&convert::<U, u32>(s)?, language, nf)?;
    uninorm::xfrm_current(&convert::<u32, u8>(&folded)?)
}

fn casecoll<U: UtfUnit>(
    s1: &[U],
    s2: &[U],
    language: Option<&str>,
    nf: Option<UninormT>,
) -> Result<Ordering, UnistringError> {
    Ok(casexfrm(s1, language, nf)?.cmp(&casexfrm(s2, language, nf)?))
}

fn unchanged_by<U: UtfUnit>(s: &[U], language: Option<&str>, mapping: Mapping) -> Result<bool, UnistringError> {
    let chars = uninorm::normalize_chars(UninormT::Nfd, &convert::<U, u32>(s)?)?;
    let mapped = match mapping {
        Mapping::Title => title_chars(&chars, language)?,
        Mapping::Fold => fold_chars(&chars, language, Some(UninormT::Nfd))?,
        other => uninorm::normalize_chars(UninormT::Nfd, &map_chars(&chars, other, language)?)?,
    };
    Ok(mapped == chars)
}

fn is_cased<U: UtfUnit>(s: &[U], language: Option<&str>) -> Result<bool, UnistringError> {
    Ok(!(unchanged_by(s, language, Mapping::Upper)?
        && unchanged_by(s, language, Mapping::Lower)?
        && unchanged_by(s, language, Mapping::Title)?))
}

// Instantiates the per-width case functions.
macro_rules! case_functions {
    (
        $u:ty,
        $toupper:ident, $tolower:ident, $totitle:ident, $casefold:ident,
        $casecmp:ident, $casecoll:ident, $casexfrm:ident,
        $is_uppercase:ident, $is_lowercase:ident, $is_titlecase:ident,
        $is_casefolded:ident, $is_cased:ident
    ) => {
        /// Full uppercase mapping.
        pub fn $toupper(s: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<$u>, UnistringError> {
            toupper(s, iso639_language, nf)
        }
        /// Full lowercase mapping, with Final_Sigma.
        pub fn $tolower(s: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<$u>, UnistringError> {
            tolower(s, iso639_language, nf)
        }
        /// Titlecases the first cased letter of each word and lowercases the rest.
        pub fn $totitle(s: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<$u>, UnistringError> {
            totitle(s, iso639_language, nf)
        }
        /// Full case folding. With `nf`, the input is decomposed first and
        /// the result normalized to `nf`.
        pub fn $casefold(s: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<$u>, UnistringError> {
            casefold(s, iso639_language, nf)
        }
        /// Compares the case folded strings in code point order.
        pub fn $casecmp(s1: &[$u], s2: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Ordering, UnistringError> {
            casecmp(s1, s2, iso639_language, nf)
        }
        /// Compares the case folded strings with the collation of the
        /// current locale.
        pub fn $casecoll(s1: &[$u], s2: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Ordering, UnistringError> {
            casecoll(s1, s2, iso639_language, nf)
        }
        /// Sort key of the case folded string in the current locale.
        pub fn $casexfrm(s: &[$u], iso639_language: Option<&str>, nf: Option<UninormT>) -> Result<Vec<u8>, UnistringError> {
            casexfrm(s, iso639_language, nf)
        }
        pub fn $is_uppercase(s: &[$u], iso639_language: Option<&str>) -> Result<bool, UnistringError> {
            unchanged_by(s, iso639_language, Mapping::Upper)
        }
        pub fn $is_lowercase(s: &[$u], iso639_language: Option<&str>) -> Result<bool, UnistringError> {
            unchanged_by(s, iso639_language, Mapping::Lower)
        }
        pub fn $is_titlecase(s: &[$u], iso639_language: Option<&str>) -> Result<bool, UnistringError> {
            unchanged_by(s, iso639_language, Mapping::Title)
        }
        pub fn $is_casefolded(s: &[$u], iso639_language: Option<&str>) -> Result<bool, UnistringError> {
            unchanged_by(s, iso639_language, Mapping::Fold)
        }
        /// True when any of the case mappings changes `s`.
        pub fn $is_cased(s: &[$u], iso639_language: Option<&str>) -> Result<bool, UnistringError> {
            is_cased(s, iso639_language)
        }
    };
}

case_functions!(
    u8,
    u8_toupper, u8_tolower, u8_totitle, u8_casefold,
    u8_casecmp, u8_casecoll, u8_casexfrm,
    u8_is_uppercase, u8_is_lowercase, u8_is_titlecase,
    u8_is_casefolded, u8_is_cased
);
case_functions!(
    u16,
    u16_toupper, u16_tolower, u16_totitle, u16_casefold,
    u16_casecmp, u16_casecoll, u16_casexfrm,
    u16_is_uppercase, u16_is_lowercase, u16_is_titlecase,
    u16_is_casefolded, u16_is_cased
);
case_functions!(
    u32,
    u32_toupper, u32_tolower, u32_totitle, u32_casefold,
    u32_casecmp, u32_casecoll, u32_casexfrm,
    u32_is_uppercase, u32_is_lowercase, u32_is_titlecase,
    u32_is_casefolded, u32_is_cased
);

/// Language part of the current `LC_CTYPE` locale, e.g. `"tr"` for
/// `tr_TR.UTF-8`. `None` for the C/POSIX locale.
pub fn uc_locale_language() -> Option<String> {
    let name = crate::uniconv::locale_name()?;
    let lang: String = name.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    match lang.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str, lang: Option<&str>) -> String {
        String::from_utf8(u8_toupper(s.as_bytes(), lang, None).unwrap()).unwrap()
    }

    fn lower(s: &str, lang: Option<&str>) -> String {
        String::from_utf8(u8_tolower(s.as_bytes(), lang, None).unwrap()).unwrap()
    }

    fn title(s: &str) -> String {
        String::from_utf8(u8_totitle(s.as_bytes(), None, None).unwrap()).unwrap()
    }

    fn fold(s: &str) -> String {
        String::from_utf8(u8_casefold(s.as_bytes(), None, None).unwrap()).unwrap()
    }

    #[test]
    fn simple_mappings() {
        assert_eq!(uc_toupper('a' as u32), 'A' as u32);
        assert_eq!(uc_tolower('Ä' as u32), 'ä' as u32);
        assert_eq!(uc_toupper(0x00DF), 0x00DF);
        assert_eq!(uc_totitle(0x01C6), 0x01C5); // dž -> Dž
        assert_eq!(uc_toupper(0x01C6), 0x01C4);
        assert_eq!(uc_tocasefold('K' as u32), 'k' as u32);
        assert_eq!(uc_tocasefold(0x212A), 'k' as u32); // Kelvin sign
        assert_eq!(uc_toupper(0x10428), 0x10400); // Deseret
        assert_eq!(uc_toupper('1' as u32), '1' as u32);
        assert_eq!(uc_toupper(0x110000), 0x110000);
    }

    #[test]
    fn simple_mappings_agree_with_std_where_single() {
        use crate::unictype::{uc_general_category, UcGeneralCategory};
        let assigned = |c: char| uc_general_category(c as u32) != UcGeneralCategory::CN;
        for c in (0..0x2000u32).filter_map(char::from_u32).filter(|&c| assigned(c)) {
            let mut it = c.to_uppercase();
            if let (Some(u), None) = (it.next(), it.next()) {
                if !assigned(u) {
                    continue;
                }
                assert_eq!(uc_toupper(c as u32), u as u32, "U+{:04X}", c as u32);
            }
        }
    }

    #[test]
    fn full_mappings() {
        assert_eq!(upper("straße", None), "STRASSE");
        assert_eq!(upper("ﬁ", None), "FI");
        assert_eq!(lower("İ", None), "i\u{307}");
        assert_eq!(fold("Straße"), "strasse");
        assert_eq!(fold("ΣΊΣΥΦΟΣ"), "σίσυφοσ");
    }

    #[test]
    fn final_sigma() {
        assert_eq!(lower("ΣΊΣΥΦΟΣ", None), "σίσυφος");
        assert_eq!(lower("Σ", None), "σ");
        assert_eq!(lower("ΑΣ.", None), "ας.");
        assert_eq!(lower("ΑΣΑ", None), "ασα");
    }

    #[test]
    fn turkish_i() {
        assert_eq!(upper("istanbul", Some("tr")), "İSTANBUL");
        assert_eq!(lower("DİYARBAKIR", Some("tr")), "diyarbakır");
        assert_eq!(lower("I\u{307}", Some("az")), "i");
        assert_eq!(upper("istanbul", None), "ISTANBUL");
        assert_eq!(lower("I", None), "i");
    }

    #[test]
    fn titlecase_words() {
        assert_eq!(title("hello wORLD"), "Hello World");
        assert_eq!(title("ǆemal"), "ǅemal");
        assert_eq!(title("ßa"), "Ssa");
        assert_eq!(title("o'neil"), "O'neil");
    }

    #[test]
    fn caseless_compare() {
        assert_eq!(u8_casecmp("Straße".as_bytes(), "STRASSE".as_bytes(), None, None), Ok(Ordering::Equal));
        assert_eq!(u8_casecmp(b"apple", b"BANANA", None, None), Ok(Ordering::Less));
        // Precomposed and decomposed forms only match after normalization.
        let a = "Å".as_bytes();
        let b = "a\u{30A}".as_bytes();
        assert_ne!(u8_casecmp(a, b, None, None), Ok(Ordering::Equal));
        assert_eq!(u8_casecmp(a, b, None, Some(UninormT::Nfd)), Ok(Ordering::Equal));
        assert_eq!(
            u8_casecmp(&[0xFF], b"a", None, None),
            Err(UnistringError::IllegalSequence { offset: 0 })
        );
    }

    #[test]
    fn predicates() {
        assert_eq!(u8_is_uppercase(b"HELLO 1", None), Ok(true));
        assert_eq!(u8_is_uppercase(b"Hello", None), Ok(false));
        assert_eq!(u8_is_lowercase(b"hello", None), Ok(true));
        assert_eq!(u8_is_titlecase(b"Hello World", None), Ok(true));
        assert_eq!(u8_is_casefolded("strasse".as_bytes(), None), Ok(true));
        assert_eq!(u8_is_casefolded("straße".as_bytes(), None), Ok(false));
        assert_eq!(u8_is_cased(b"123", None), Ok(false));
        assert_eq!(u8_is_cased(b"abc", None), Ok(true));
    }

    #[test]
    fn other_widths() {
        let s: Vec<u16> = "groß".encode_utf16().collect();
        let up = u16_toupper(&s, None, None).unwrap();
        assert_eq!(String::from_utf16(&up).unwrap(), "GROSS");
        let s: Vec<u32> = "ǅ".chars().map(|c| c as u32).collect();
        assert_eq!(u32_tolower(&s, None, None).unwrap(), vec![0x01C6]);
        assert_eq!(u32_casecmp(&[0x41], &[0x61], None, None), Ok(Ordering::Equal));
    }

    #[test]
    fn normalized_output() {
        let out = u8_toupper("e\u{301}".as_bytes(), None, Some(UninormT::Nfc)).unwrap();
        assert_eq!(out, "É".as_bytes());
    }
}

// uninorm/mod.rs - Normalization forms and normalization-insensitive comparison.
//
//! Unicode normalization (UAX #15) and comparison of strings up to
//! canonical or compatibility equivalence.
//!
//! The forms themselves come from the `unicode-normalization` crate. The
//! comparison functions normalize both strings first; the collating variants
//! then re-encode the result in a [`Locale`]'s charset and compare the
//! [`Collator`] keys.
//!
//! # Unicode version
//!
//! `unicode-normalization` ships decomposition data for a newer Unicode
//! release than [`crate::unictype::UNICODE_VERSION`]. Code points the property
//! tables leave unassigned (category `Cn`) are treated as they are in that
//! version: they have no decomposition, take part in no composition, and
//! normalize to themselves in every form. Characters assigned in both
//! versions normalize identically, since normalization data for assigned
//! characters is stable across releases.

mod collate;

use std::cmp::Ordering;

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

use crate::error::UnistringError;
use crate::unictype::{uc_general_category, UcGeneralCategory};
use crate::unistr::{convert, UtfUnit};
use crate::unitypes::{uc_is_valid, Ucs4};

pub use collate::{CCollator, Collator, Locale};

/// A normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UninormT {
    /// Canonical decomposition.
    Nfd,
    /// Canonical decomposition followed by canonical composition.
    Nfc,
    /// Compatibility decomposition.
    Nfkd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
}

pub const UNINORM_NFD: UninormT = UninormT::Nfd;
pub const UNINORM_NFC: UninormT = UninormT::Nfc;
pub const UNINORM_NFKD: UninormT = UninormT::Nfkd;
pub const UNINORM_NFKC: UninormT = UninormT::Nfkc;

pub fn uninorm_is_compat_decomposing(nf: UninormT) -> bool {
    matches!(nf, UninormT::Nfkd | UninormT::Nfkc)
}

pub fn uninorm_is_composing(nf: UninormT) -> bool {
    matches!(nf, UninormT::Nfc | UninormT::Nfkc)
}

/// The form that decomposes like `nf` without composing.
pub fn uninorm_decomposing_form(nf: UninormT) -> UninormT {
    match nf {
        UninormT::Nfd | UninormT::Nfc => UninormT::Nfd,
        UninormT::Nfkd | UninormT::Nfkc => UninormT::Nfkd,
    }
}

// === Single characters ===

// Unassigned in the property tables, whatever the normalizer's data says.
fn is_unassigned(uc: Ucs4) -> bool {
    uc_general_category(uc) == UcGeneralCategory::CN
}

fn decomposition(uc: Ucs4, compat: bool) -> Option<Vec<Ucs4>> {
    if is_unassigned(uc) {
        return None;
    }
    let c = char::from_u32(uc)?;
    let mut out = Vec::new();
    let mut emit = |d: char| out.push(d as Ucs4);
    if compat {
        unicode_normalization::char::decompose_compatible(c, &mut emit);
    } else {
        unicode_normalization::char::decompose_canonical(c, &mut emit);
    }
    (out != [uc]).then_some(out)
}

/// Full canonical decomposition of `uc`, or `None` if it has none.
pub fn uc_canonical_decomposition(uc: Ucs4) -> Option<Vec<Ucs4>> {
    decomposition(uc, false)
}

/// Full compatibility decomposition of `uc`, or `None` if it has none.
pub fn uc_compat_decomposition(uc: Ucs4) -> Option<Vec<Ucs4>> {
    decomposition(uc, true)
}

/// The primary composite of `uc1` followed by `uc2`, if there is one.
pub fn uc_composition(uc1: Ucs4, uc2: Ucs4) -> Option<Ucs4> {
    if is_unassigned(uc1) || is_unassigned(uc2) {
        return None;
    }
    let a = char::from_u32(uc1)?;
    let b = char::from_u32(uc2)?;
    unicode_normalization::char::compose(a, b)
        .map(|c| c as Ucs4)
        .filter(|&c| !is_unassigned(c))
}

// === Strings ===

/// Normalizes a code point sequence. Rejects anything that is not a scalar
/// value.
pub(crate) fn normalize_chars(nf: UninormT, s: &[Ucs4]) -> Result<Vec<Ucs4>, UnistringError> {
    if let Some(&code) = s.iter().find(|&&u| !uc_is_valid(u)) {
        return Err(UnistringError::InvalidCodePoint { code });
    }
    let chars = s.iter().map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER));
    let mut out = Vec::new();
    out.try_reserve(s.len())?;
    normalize_with(nf, chars, |c| out.push(c as Ucs4));
    Ok(out)
}

/// Feeds `chars` in form `nf` to `emit`.
///
/// Unassigned code points pass through unchanged. Each one is a starter that
/// blocks reordering and composition, so the runs between them are normalized
/// independently.
pub(crate) fn normalize_with(nf: UninormT, chars: impl Iterator<Item = char>, mut emit: impl FnMut(char)) {
    let mut run: SmallVec<[char; 64]> = SmallVec::new();
    for c in chars {
        if is_unassigned(c as Ucs4) {
            flush_run(nf, &mut run, &mut emit);
            emit(c);
        } else {
            run.push(c);
        }
    }
    flush_run(nf, &mut run, &mut emit);
}

fn flush_run(nf: UninormT, run: &mut SmallVec<[char; 64]>, emit: &mut impl FnMut(char)) {
    if run.is_empty() {
        return;
    }
    let chars = run.drain(..);
    match nf {
        UninormT::Nfd => chars.nfd().for_each(emit),
        UninormT::Nfc => chars.nfc().for_each(emit),
        UninormT::Nfkd => chars.nfkd().for_each(emit),
        UninormT::Nfkc => chars.nfkc().for_each(emit),
    }
}

/// Returns `s` in normalization form `nf`.
pub fn normalize<U: UtfUnit>(nf: UninormT, s: &[U]) -> Result<Vec<U>, UnistringError> {
    convert(&normalize_chars(nf, &convert::<U, u32>(s)?)?)
}

/// Compares `s1` and `s2` in code point order after normalizing both.
pub fn normcmp<U: UtfUnit>(s1: &[U], s2: &[U], nf: UninormT) -> Result<Ordering, UnistringError> {
    let a = normalize_chars(nf, &convert::<U, u32>(s1)?)?;
    let b = normalize_chars(nf, &convert::<U, u32>(s2)?)?;
    Ok(a.cmp(&b))
}

// Normalized UTF-8 of `s`, on the stack for short strings.
fn normalized_utf8<U: UtfUnit>(s: &[U], nf: UninormT) -> Result<SmallVec<[u8; 512]>, UnistringError> {
    let chars = normalize_chars(nf, &convert::<U, u32>(s)?)?;
    let mut out = SmallVec::new();
    let mut buf = [0u8; 4];
    for uc in chars {
        let n = u8::encoded_len(uc);
        u8::encode_unchecked(uc, &mut buf);
        out.extend_from_slice(&buf[..n]);
    }
    Ok(out)
}

/// Collation key of `s` after normalization, in `locale`.
pub fn normxfrm_in<U: UtfUnit>(s: &[U], nf: UninormT, locale: &Locale) -> Result<Vec<u8>, UnistringError> {
    locale.xfrm(&normalized_utf8(s, nf)?)
}

/// Collation order of `s1` and `s2` after normalization, in `locale`.
pub fn normcoll_in<U: UtfUnit>(
    s1: &[U],
    s2: &[U],
    nf: UninormT,
    locale: &Locale,
) -> Result<Ordering, UnistringError> {
    locale.compare(&normalized_utf8(s1, nf)?, &normalized_utf8(s2, nf)?)
}

/// Collation key of a UTF-8 string in the current locale.
pub(crate) fn xfrm_current(utf8: &[u8]) -> Result<Vec<u8>, UnistringError> {
    Locale::current().xfrm(utf8)
}

// Instantiates the per-width normalization functions.
macro_rules! norm_functions {
    ($u:ty, $normalize:ident, $normcmp:ident, $normxfrm:ident, $normcoll:ident, $normcoll_in:ident) => {
        pub fn $normalize(nf: UninormT, s: &[$u]) -> Result<Vec<$u>, UnistringError> {
            normalize(nf, s)
        }

        pub fn $normcmp(s1: &[$u], s2: &[$u], nf: UninormT) -> Result<Ordering, UnistringError> {
            normcmp(s1, s2, nf)
        }

        /// Collation key in the current locale.
        pub fn $normxfrm(s: &[$u], nf: UninormT) -> Result<Vec<u8>, UnistringError> {
            normxfrm_in(s, nf, &Locale::current())
        }

        /// Collation order in the current locale.
        pub fn $normcoll(s1: &[$u], s2: &[$u], nf: UninormT) -> Result<Ordering, UnistringError> {
            normcoll_in(s1, s2, nf, &Locale::current())
        }

        pub fn $normcoll_in(s1: &[$u], s2: &[$u], nf: UninormT, locale: &Locale) -> Result<Ordering, UnistringError> {
            normcoll_in(s1, s2, nf, locale)
        }
    };
}

norm_functions!(u8, u8_normalize, u8_normcmp, u8_normxfrm, u8_normcoll, u8_normcoll_in);
norm_functions!(u16, u16_normalize, u16_normcmp, u16_normxfrm, u16_normcoll, u16_normcoll_in);
norm_functions!(u32, u32_normalize, u32_normcmp, u32_normxfrm, u32_normcoll, u32_normcoll_in);

#[cfg(test)]
mod tests {
    use super::*;

    const FORMS: [UninormT; 4] = [UNINORM_NFD, UNINORM_NFC, UNINORM_NFKD, UNINORM_NFKC];

    #[test]
    fn form_properties() {
        assert!(uninorm_is_composing(UNINORM_NFC));
        assert!(!uninorm_is_composing(UNINORM_NFKD));
        assert!(uninorm_is_compat_decomposing(UNINORM_NFKC));
        assert!(!uninorm_is_compat_decomposing(UNINORM_NFD));
        assert_eq!(uninorm_decomposing_form(UNINORM_NFKC), UNINORM_NFKD);
        assert_eq!(uninorm_decomposing_form(UNINORM_NFD), UNINORM_NFD);
    }

    #[test]
    fn decompositions() {
        assert_eq!(uc_canonical_decomposition(0xE9), Some(vec![0x65, 0x301]));
        assert_eq!(uc_canonical_decomposition(0xAC00), Some(vec![0x1100, 0x1161]));
        assert_eq!(uc_canonical_decomposition(0x41), None);
        assert_eq!(uc_canonical_decomposition(0xFB01), None);
        assert_eq!(uc_compat_decomposition(0xFB01), Some(vec![0x66, 0x69]));
        assert_eq!(uc_canonical_decomposition(0xD800), None);
        assert_eq!(uc_composition(0x65, 0x301), Some(0xE9));
        assert_eq!(uc_composition(0x1100, 0x1161), Some(0xAC00));
        assert_eq!(uc_composition(0x41, 0x42), None);
    }

    #[test]
    fn unassigned_code_points_are_left_alone() {
        // Cyrillic extended-D, assigned after the property tables' version.
        assert_eq!(crate::unictype::UNICODE_VERSION, "14.0.0");
        assert!(is_unassigned(0x1E030));
        assert_eq!(uc_compat_decomposition(0x1E030), None);
        assert_eq!(uc_canonical_decomposition(0x1E030), None);
        for nf in FORMS {
            assert_eq!(
                u32_normalize(nf, &[0x61, 0x1E030, 0x62]).unwrap(),
                vec![0x61, 0x1E030, 0x62],
                "{nf:?}"
            );
        }
        // Runs on either side still normalize.
        assert_eq!(
            u32_normalize(UNINORM_NFKC, &[0x65, 0x301, 0x1E030, 0xFB01, 0x1E030]).unwrap(),
            vec![0xE9, 0x1E030, 0x66, 0x69, 0x1E030]
        );
        assert_eq!(
            u32_normalize(UNINORM_NFD, &[0x1E030, 0x61, 0x301, 0x323]).unwrap(),
            vec![0x1E030, 0x61, 0x323, 0x301]
        );
        assert_eq!(uc_composition(0x1E030, 0x301), None);
        assert_eq!(
            u8_normcmp("\u{1E030}".as_bytes(), "\u{430}".as_bytes(), UNINORM_NFKD),
            Ok(Ordering::Greater)
        );
    }

    #[test]
    fn normalize_strings() {
        assert_eq!(u8_normalize(UNINORM_NFC, "e\u{301}".as_bytes()).unwrap(), "é".as_bytes());
        assert_eq!(u8_normalize(UNINORM_NFD, "é".as_bytes()).unwrap(), "e\u{301}".as_bytes());
        assert_eq!(u8_normalize(UNINORM_NFKC, "ﬁ".as_bytes()).unwrap(), b"fi");
        // Canonical reordering of combining marks.
        assert_eq!(
            u32_normalize(UNINORM_NFD, &[0x61, 0x301, 0x323]).unwrap(),
            vec![0x61, 0x323, 0x301]
        );
        let w: Vec<u16> = "Å".encode_utf16().collect();
        assert_eq!(u16_normalize(UNINORM_NFD, &w).unwrap(), vec![0x41, 0x30A]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = ["e\u{301}", "ﬁ\u{212B}", "\u{1E9B}\u{323}", "한국어", "a\u{301}\u{323}b"];
        for s in samples {
            for nf in FORMS {
                let once = u8_normalize(nf, s.as_bytes()).unwrap();
                assert_eq!(u8_normalize(nf, &once).unwrap(), once, "{s:?} {nf:?}");
            }
        }
    }

    #[test]
    fn ill_formed_input() {
        assert_eq!(u8_normalize(UNINORM_NFC, b"a\xFF"), Err(UnistringError::illegal(1)));
        assert_eq!(
            u32_normalize(UNINORM_NFC, &[0x41, 0x110000]),
            Err(UnistringError::illegal(1))
        );
    }

    #[test]
    fn compare_equivalent_strings() {
        assert_eq!(u8_normcmp("é".as_bytes(), "e\u{301}".as_bytes(), UNINORM_NFD), Ok(Ordering::Equal));
        assert_eq!(u8_normcmp("ﬁ".as_bytes(), b"fi", UNINORM_NFC), Ok(Ordering::Greater));
        assert_eq!(u8_normcmp("ﬁ".as_bytes(), b"fi", UNINORM_NFKC), Ok(Ordering::Equal));
        assert_eq!(u8_normcmp(b"a", b"b", UNINORM_NFC), Ok(Ordering::Less));
    }

    #[test]
    fn collate_in_locale() {
        let latin1 = Locale::new("ISO-8859-1", CCollator);
        assert_eq!(
            u8_normcoll_in("é".as_bytes(), "e\u{301}".as_bytes(), UNINORM_NFC, &latin1),
            Ok(Ordering::Equal)
        );
        assert_eq!(normxfrm_in("e\u{301}".as_bytes(), UNINORM_NFC, &latin1).unwrap(), vec![0xE9]);
        // NFD leaves U+0301, which Latin-1 cannot encode.
        assert!(u8_normcoll_in("é".as_bytes(), b"e", UNINORM_NFD, &latin1).is_err());
    }

    #[test]
    fn long_strings_collate_like_short_ones() {
        let utf8 = Locale::new("UTF-8", CCollator);
        let short_a = "e\u{301}x";
        let short_b = "éy";
        let long_a = short_a.repeat(300);
        let long_b = format!("{}y", "é".repeat(300));
        assert_eq!(
            u8_normcoll_in(short_a.as_bytes(), short_b.as_bytes(), UNINORM_NFC, &utf8),
            Ok(Ordering::Less)
        );
        assert_eq!(
            u8_normcoll_in(long_a.as_bytes(), long_b.as_bytes(), UNINORM_NFC, &utf8),
            Ok(Ordering::Less)
        );
        let key = normxfrm_in(long_a.as_bytes(), UNINORM_NFC, &utf8).unwrap();
        assert_eq!(key, "éx".repeat(300).into_bytes());
    }
}

// compat_uninorm.rs - Integration tests for normalization, case mapping and
// collation.
//
// Helpers:
//   nf(form, s)   -> `s` normalized to `form`, as a String
//   upper/lower/fold(s, lang) -> full case mappings of `s`

use std::cmp::Ordering;

use unistring::error::UnistringError;
use unistring::unicase::*;
use unistring::uninorm::*;

const FORMS: [UninormT; 4] = [UNINORM_NFD, UNINORM_NFC, UNINORM_NFKD, UNINORM_NFKC];

fn nf(form: UninormT, s: &str) -> String {
    String::from_utf8(u8_normalize(form, s.as_bytes()).unwrap()).unwrap()
}

fn upper(s: &str, lang: Option<&str>) -> String {
    String::from_utf8(u8_toupper(s.as_bytes(), lang, None).unwrap()).unwrap()
}

fn lower(s: &str, lang: Option<&str>) -> String {
    String::from_utf8(u8_tolower(s.as_bytes(), lang, None).unwrap()).unwrap()
}

fn fold(s: &str) -> String {
    String::from_utf8(u8_casefold(s.as_bytes(), None, None).unwrap()).unwrap()
}

// Samples with decompositions, reordering, Hangul and compatibility forms.
const SAMPLES: [&str; 8] = [
    "Ångström",
    "e\u{301}\u{327}",
    "a\u{327}\u{301}",
    "한국어",
    "\u{1100}\u{1161}\u{11A8}",
    "ﬁ ① ½ ㎏",
    "\u{1E9B}\u{323}",
    "ǅ Ǆ ǆ",
];

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn normalization_is_idempotent() {
    for form in FORMS {
        for s in SAMPLES {
            let once = nf(form, s);
            assert_eq!(nf(form, &once), once, "{form:?} {s:?}");
        }
    }
}

#[test]
fn composition_inverts_decomposition() {
    for s in SAMPLES {
        assert_eq!(nf(UNINORM_NFC, &nf(UNINORM_NFD, s)), nf(UNINORM_NFC, s), "{s:?}");
        assert_eq!(nf(UNINORM_NFKC, &nf(UNINORM_NFKD, s)), nf(UNINORM_NFKC, s), "{s:?}");
    }
}

#[test]
fn canonical_reordering() {
    // Cedilla (ccc 202) sorts before acute (ccc 230).
    assert_eq!(nf(UNINORM_NFD, "e\u{301}\u{327}"), "e\u{327}\u{301}");
    assert_eq!(nf(UNINORM_NFC, "e\u{301}\u{327}"), "\u{229}\u{301}");
}

#[test]
fn hangul() {
    assert_eq!(nf(UNINORM_NFD, "한"), "\u{1112}\u{1161}\u{11AB}");
    assert_eq!(nf(UNINORM_NFC, "\u{1112}\u{1161}\u{11AB}"), "한");
    assert_eq!(uc_composition(0x1100, 0x1161), Some(0xAC00));
    assert_eq!(uc_canonical_decomposition(0xAC00), Some(vec![0x1100, 0x1161]));
}

#[test]
fn compatibility_forms() {
    assert_eq!(nf(UNINORM_NFKD, "ﬁ ① ½"), "fi 1 1\u{2044}2");
    assert_eq!(uc_compat_decomposition(0x2460), Some(vec![0x31]));
    assert_eq!(uc_canonical_decomposition(0x2460), None);
    assert_eq!(uc_compat_decomposition('a' as u32), None);
}

#[test]
fn all_widths_agree() {
    for s in SAMPLES {
        let w: Vec<u16> = s.encode_utf16().collect();
        let u: Vec<u32> = s.chars().map(|c| c as u32).collect();
        for form in FORMS {
            let n8 = nf(form, s);
            let n16 = u16_normalize(form, &w).unwrap();
            let n32 = u32_normalize(form, &u).unwrap();
            assert_eq!(String::from_utf16(&n16).unwrap(), n8);
            assert_eq!(n32, n8.chars().map(|c| c as u32).collect::<Vec<_>>());
        }
    }
}

#[test]
fn ill_formed_input_is_rejected() {
    assert!(matches!(
        u8_normalize(UNINORM_NFC, b"a\xFF"),
        Err(UnistringError::IllegalSequence { offset: 1 })
    ));
    assert!(u32_normalize(UNINORM_NFC, &[0x61, 0xD800]).is_err());
}

// ============================================================================
// Comparison and collation
// ============================================================================

#[test]
fn normcmp_treats_equivalents_as_equal() {
    let a = "\u{212B}ngstr\u{F6}m".as_bytes();
    let b = "A\u{30A}ngstro\u{308}m".as_bytes();
    assert_eq!(u8_normcmp(a, b, UNINORM_NFD), Ok(Ordering::Equal));
    assert_eq!(u8_normcmp(a, b, UNINORM_NFC), Ok(Ordering::Equal));
    assert_ne!(unistring::unistr::u8_cmp(a, b), Ordering::Equal);
    assert_eq!(u8_normcmp("ﬁ".as_bytes(), b"fi", UNINORM_NFD), Ok(Ordering::Greater));
    assert_eq!(u8_normcmp("ﬁ".as_bytes(), b"fi", UNINORM_NFKD), Ok(Ordering::Equal));
}

#[test]
fn collation_in_latin1() {
    let latin1 = Locale::new("ISO-8859-1", CCollator);
    let a = "e\u{301}".as_bytes();
    let b = "\u{E9}".as_bytes();
    assert_eq!(u8_normcoll_in(a, b, UNINORM_NFC, &latin1), Ok(Ordering::Equal));
    assert_eq!(u8_normcoll_in(b"z", b, UNINORM_NFC, &latin1), Ok(Ordering::Less));
    assert_eq!(
        normxfrm_in(b, UNINORM_NFC, &latin1).unwrap(),
        normxfrm_in(a, UNINORM_NFC, &latin1).unwrap()
    );
    assert!(u8_normcoll_in("€".as_bytes(), b"a", UNINORM_NFC, &latin1).is_err());
}

#[test]
fn ascii_collation_in_current_locale() {
    assert_eq!(u8_normcoll(b"abc", b"abd", UNINORM_NFC), Ok(Ordering::Less));
    assert_eq!(u8_normxfrm(b"abc", UNINORM_NFC).map(|k| k.is_empty()), Ok(false));
}

// ============================================================================
// Case mapping
// ============================================================================

#[test]
fn full_case_mappings() {
    assert_eq!(upper("Maße", None), "MASSE");
    assert_eq!(upper("ǆ", None), "Ǆ");
    assert_eq!(
        lower("\u{1F48}\u{394}\u{3A5}\u{3A3}\u{3A3}\u{395}\u{38E}\u{3A3}", None),
        "\u{1F40}\u{3B4}\u{3C5}\u{3C3}\u{3C3}\u{3B5}\u{3CD}\u{3C2}"
    );
    assert_eq!(fold("Maße"), "masse");
    assert_eq!(fold("ﬃ"), "ffi");
}

#[test]
fn language_tailoring() {
    assert_eq!(upper("i", Some("tr")), "İ");
    assert_eq!(lower("I", Some("tr")), "ı");
    assert_eq!(upper("i", Some("de")), "I");
}

#[test]
fn case_mapping_with_normalization() {
    let out = u8_tolower("Å".as_bytes(), None, Some(UNINORM_NFD)).unwrap();
    assert_eq!(out, "a\u{30A}".as_bytes());
    let out = u8_toupper("a\u{30A}".as_bytes(), None, Some(UNINORM_NFC)).unwrap();
    assert_eq!(out, "Å".as_bytes());
}

#[test]
fn caseless_comparison() {
    assert_eq!(u8_casecmp("MASSE".as_bytes(), "maße".as_bytes(), None, None), Ok(Ordering::Equal));
    assert_eq!(
        u8_casecmp("\u{212B}".as_bytes(), "a\u{30A}".as_bytes(), None, Some(UNINORM_NFD)),
        Ok(Ordering::Equal)
    );
    let a: Vec<u16> = "HELLO".encode_utf16().collect();
    let b: Vec<u16> = "hello".encode_utf16().collect();
    assert_eq!(u16_casecmp(&a, &b, None, None), Ok(Ordering::Equal));
}

#[test]
fn case_predicates() {
    assert_eq!(u8_is_uppercase("ÀÉÎ".as_bytes(), None), Ok(true));
    assert_eq!(u8_is_lowercase("àéî".as_bytes(), None), Ok(true));
    assert_eq!(u8_is_titlecase("Ǆemal".as_bytes(), None), Ok(false));
    assert_eq!(u8_is_titlecase("ǅemal".as_bytes(), None), Ok(true));
    assert_eq!(u8_is_cased("日本".as_bytes(), None), Ok(false));
}

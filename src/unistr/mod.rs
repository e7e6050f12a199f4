// unistr/mod.rs - UTF-8, UTF-16 and UTF-32 string primitives.
//
//! Unit-width generic string primitives.
//!
//! Every algorithm is written once over [`UtfUnit`] and instantiated for
//! `u8`, `u16` and `u32`. The `u8_*`, `u16_*` and `u32_*` functions are thin
//! wrappers with the classic names.
//!
//! Decoding comes in two flavours:
//!
//! - permissive ([`u8_mbtouc`] and friends): ill-formed input decodes to
//!   U+FFFD and at least one unit is consumed, so loops always progress;
//! - strict ([`u8_mbtoucr`], [`u8_next`], [`u8_prev`]): ill-formed input is
//!   reported as a [`Malformed`] value or `None`.

use std::cmp::Ordering;

use crate::error::UnistringError;
use crate::unitypes::{uc_is_valid, Ucs4, REPLACEMENT_CHARACTER};

/// Strict decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed {
    /// Units making up the ill-formed subsequence (at least 1 for
    /// non-empty input).
    pub skip: usize,
    /// True when the input ends in the middle of an otherwise valid sequence.
    pub incomplete: bool,
}

impl Malformed {
    /// The C-style return code: -2 for an incomplete sequence, -1 otherwise.
    pub fn code(&self) -> i32 {
        if self.incomplete {
            -2
        } else {
            -1
        }
    }

    pub(crate) fn invalid(skip: usize) -> Self {
        Malformed { skip, incomplete: false }
    }

    pub(crate) fn truncated(skip: usize) -> Self {
        Malformed { skip, incomplete: true }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A UTF code unit: `u8` (UTF-8), `u16` (UTF-16) or `u32` (UTF-32).
pub trait UtfUnit: Copy + Eq + Ord + Default + std::fmt::Debug + sealed::Sealed + 'static {
    /// Maximum number of units per code point.
    const MAX_LEN: usize;

    fn to_u32(self) -> u32;

    /// Strictly decodes the first code point of a non-empty slice.
    fn decode(s: &[Self]) -> Result<(Ucs4, usize), Malformed>;

    /// Number of units needed to encode the scalar value `uc`.
    fn encoded_len(uc: Ucs4) -> usize;

    /// Writes the scalar value `uc` into `out`, which holds at least
    /// `encoded_len(uc)` units.
    fn encode_unchecked(uc: Ucs4, out: &mut [Self]);

    /// True for units that can start a sequence.
    fn is_lead(self) -> bool;

    /// Finds the first occurrence of `needle` in `haystack`.
    fn find(haystack: &[Self], needle: &[Self]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        haystack.windows(needle.len()).position(|w| w == needle)
    }
}

// === Single code point ===

/// Permissive decode: returns the first code point of `s` and the number of
/// units consumed. Ill-formed input yields U+FFFD and the length of the
/// maximal ill-formed subpart. Empty input yields `(U+FFFD, 0)`.
#[inline]
pub fn mbtouc<U: UtfUnit>(s: &[U]) -> (Ucs4, usize) {
    if s.is_empty() {
        return (REPLACEMENT_CHARACTER, 0);
    }
    match U::decode(s) {
        Ok(r) => r,
        Err(m) => (REPLACEMENT_CHARACTER, m.skip),
    }
}

/// Same contract as [`mbtouc`]. Input is always validated.
#[inline]
pub fn mbtouc_unsafe<U: UtfUnit>(s: &[U]) -> (Ucs4, usize) {
    mbtouc(s)
}

/// Strict decode of the first code point of `s`.
#[inline]
pub fn mbtoucr<U: UtfUnit>(s: &[U]) -> Result<(Ucs4, usize), Malformed> {
    if s.is_empty() {
        return Err(Malformed::truncated(0));
    }
    U::decode(s)
}

/// Encodes `uc` into `out`. Returns the number of units written, -1 if `uc`
/// is not a scalar value, or -2 if `out` is too small. Nothing is written on
/// failure.
pub fn uctomb<U: UtfUnit>(uc: Ucs4, out: &mut [U]) -> i32 {
    if !uc_is_valid(uc) {
        return -1;
    }
    let n = U::encoded_len(uc);
    if out.len() < n {
        return -2;
    }
    U::encode_unchecked(uc, out);
    n as i32
}

/// Appends the encoding of `uc` to `out`.
pub fn push_uc<U: UtfUnit>(out: &mut Vec<U>, uc: Ucs4) -> Result<(), UnistringError> {
    if !uc_is_valid(uc) {
        return Err(UnistringError::InvalidCodePoint { code: uc });
    }
    let mut buf = [U::default(); 4];
    let n = U::encoded_len(uc);
    U::encode_unchecked(uc, &mut buf);
    out.try_reserve(n)?;
    out.extend_from_slice(&buf[..n]);
    Ok(())
}

/// Length of the character at the start of `s`: 0 for NUL, -1 for empty or
/// ill-formed input.
pub fn mblen<U: UtfUnit>(s: &[U]) -> i32 {
    match s.first() {
        None => -1,
        Some(u) if u.to_u32() == 0 => 0,
        Some(_) => match U::decode(s) {
            Ok((_, n)) => n as i32,
            Err(_) => -1,
        },
    }
}

// === Whole strings ===

/// Returns the index of the first ill-formed unit, or `None` if `s` is
/// well-formed.
pub fn check<U: UtfUnit>(s: &[U]) -> Option<usize> {
    let mut i = 0;
    while i < s.len() {
        match U::decode(&s[i..]) {
            Ok((_, n)) => i += n,
            Err(_) => return Some(i),
        }
    }
    None
}

/// Decodes the code point at `pos`. Returns it with the position of the next
/// character, or `None` at the end of `s` or on ill-formed input.
pub fn next<U: UtfUnit>(s: &[U], pos: usize) -> Option<(Ucs4, usize)> {
    if pos >= s.len() {
        return None;
    }
    U::decode(&s[pos..]).ok().map(|(uc, n)| (uc, pos + n))
}

/// Decodes the code point ending at `pos`. Returns it with its starting
/// position, or `None` at the start of `s` or when no well-formed sequence
/// ends at `pos` within `U::MAX_LEN` units.
pub fn prev<U: UtfUnit>(s: &[U], pos: usize) -> Option<(Ucs4, usize)> {
    let pos = pos.min(s.len());
    let limit = U::MAX_LEN.min(pos);
    for k in 1..=limit {
        let start = pos - k;
        if s[start].is_lead() {
            return match U::decode(&s[start..pos]) {
                Ok((uc, n)) if n == k => Some((uc, start)),
                _ => None,
            };
        }
    }
    None
}

/// Permissive backward step: the code point ending at `pos` and its start.
/// Positions match a forward walk with [`mbtouc`]: an ill-formed subpart
/// that `mbtouc` consumes at once is stepped over as a single U+FFFD.
/// `pos` must be greater than 0.
pub(crate) fn mbtouc_back<U: UtfUnit>(s: &[U], pos: usize) -> (Ucs4, usize) {
    let pos = pos.min(s.len());
    for k in 1..=U::MAX_LEN.min(pos) {
        let start = pos - k;
        if s[start].is_lead() {
            // A sequence never extends past the next lead unit.
            let (uc, n) = mbtouc(&s[start..]);
            if start + n == pos {
                return (uc, start);
            }
            break;
        }
    }
    (REPLACEMENT_CHARACTER, pos - 1)
}

/// Number of units before the first NUL, or `s.len()`.
pub fn strlen<U: UtfUnit>(s: &[U]) -> usize {
    s.iter().position(|u| u.to_u32() == 0).unwrap_or(s.len())
}

/// Number of code points in `s`; each ill-formed subpart counts as one.
pub fn mbsnlen<U: UtfUnit>(s: &[U]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < s.len() {
        let (_, n) = mbtouc(&s[i..]);
        i += n;
        count += 1;
    }
    count
}

/// Compares two strings in code point order. A proper prefix sorts first.
pub fn cmp<U: UtfUnit>(s1: &[U], s2: &[U]) -> Ordering {
    let (mut i, mut j) = (0, 0);
    while i < s1.len() && j < s2.len() {
        let (c1, n1) = mbtouc(&s1[i..]);
        let (c2, n2) = mbtouc(&s2[j..]);
        match c1.cmp(&c2) {
            Ordering::Equal => {}
            other => return other,
        }
        i += n1;
        j += n2;
    }
    (s1.len() - i).cmp(&(s2.len() - j))
}

/// Like [`cmp`], but each string ends at its first NUL.
pub fn strcmp<U: UtfUnit>(s1: &[U], s2: &[U]) -> Ordering {
    cmp(&s1[..strlen(s1)], &s2[..strlen(s2)])
}

/// Returns the index of the first occurrence of `uc` in `s`.
pub fn chr<U: UtfUnit>(s: &[U], uc: Ucs4) -> Option<usize> {
    let mut buf = [U::default(); 4];
    match uctomb(uc, &mut buf) {
        n if n > 0 => U::find(s, &buf[..n as usize]),
        _ => None,
    }
}

/// Returns the index of the first occurrence of `needle` in `haystack`.
pub fn strstr<U: UtfUnit>(haystack: &[U], needle: &[U]) -> Option<usize> {
    U::find(haystack, needle)
}

pub fn startswith<U: UtfUnit>(s: &[U], prefix: &[U]) -> bool {
    s.starts_with(prefix)
}

pub fn endswith<U: UtfUnit>(s: &[U], suffix: &[U]) -> bool {
    s.ends_with(suffix)
}

/// Re-encodes a well-formed string in another unit width. Fails with
/// `IllegalSequence` at the first ill-formed unit.
pub fn convert<S: UtfUnit, D: UtfUnit>(s: &[S]) -> Result<Vec<D>, UnistringError> {
    let mut out = Vec::new();
    out.try_reserve(s.len())?;
    let mut i = 0;
    while i < s.len() {
        let (uc, n) = S::decode(&s[i..]).map_err(|_| UnistringError::illegal(i))?;
        push_uc(&mut out, uc)?;
        i += n;
    }
    Ok(out)
}

// Instantiates the classic per-width function names.
macro_rules! unit_functions {
    (
        $u:ty,
        $mbtouc:ident, $mbtouc_unsafe:ident, $mbtoucr:ident, $uctomb:ident,
        $mblen:ident, $check:ident, $next:ident, $prev:ident, $strlen:ident,
        $mbsnlen:ident, $cmp:ident, $strcmp:ident, $chr:ident, $strstr:ident,
        $startswith:ident, $endswith:ident
    ) => {
        #[inline]
        pub fn $mbtouc(s: &[$u]) -> (Ucs4, usize) {
            super::mbtouc(s)
        }
        #[inline]
        pub fn $mbtouc_unsafe(s: &[$u]) -> (Ucs4, usize) {
            super::mbtouc_unsafe(s)
        }
        #[inline]
        pub fn $mbtoucr(s: &[$u]) -> Result<(Ucs4, usize), Malformed> {
            super::mbtoucr(s)
        }
        #[inline]
        pub fn $uctomb(uc: Ucs4, out: &mut [$u]) -> i32 {
            super::uctomb(uc, out)
        }
        pub fn $mblen(s: &[$u]) -> i32 {
            super::mblen(s)
        }
        pub fn $check(s: &[$u]) -> Option<usize> {
            super::check(s)
        }
        pub fn $next(s: &[$u], pos: usize) -> Option<(Ucs4, usize)> {
            super::next(s, pos)
        }
        pub fn $prev(s: &[$u], pos: usize) -> Option<(Ucs4, usize)> {
            super::prev(s, pos)
        }
        pub fn $strlen(s: &[$u]) -> usize {
            super::strlen(s)
        }
        pub fn $mbsnlen(s: &[$u]) -> usize {
            super::mbsnlen(s)
        }
        pub fn $cmp(s1: &[$u], s2: &[$u]) -> std::cmp::Ordering {
            super::cmp(s1, s2)
        }
        pub fn $strcmp(s1: &[$u], s2: &[$u]) -> std::cmp::Ordering {
            super::strcmp(s1, s2)
        }
        pub fn $chr(s: &[$u], uc: Ucs4) -> Option<usize> {
            super::chr(s, uc)
        }
        pub fn $strstr(haystack: &[$u], needle: &[$u]) -> Option<usize> {
            super::strstr(haystack, needle)
        }
        pub fn $startswith(s: &[$u], prefix: &[$u]) -> bool {
            super::startswith(s, prefix)
        }
        pub fn $endswith(s: &[$u], suffix: &[$u]) -> bool {
            super::endswith(s, suffix)
        }
    };
}

mod iter;
mod mbstate;
mod utf16;
mod utf32;
mod utf8;

pub use iter::UcIter;
pub use mbstate::{u8_mbrtouc, MbState, MbrResult};
pub use utf16::*;
pub use utf32::*;
pub use utf8::*;

pub fn u8_to_u16(s: &[u8]) -> Result<Vec<u16>, UnistringError> {
    convert(s)
}

pub fn u8_to_u32(s: &[u8]) -> Result<Vec<u32>, UnistringError> {
    convert(s)
}

pub fn u16_to_u8(s: &[u16]) -> Result<Vec<u8>, UnistringError> {
    convert(s)
}

pub fn u16_to_u32(s: &[u16]) -> Result<Vec<u32>, UnistringError> {
    convert(s)
}

pub fn u32_to_u8(s: &[u32]) -> Result<Vec<u8>, UnistringError> {
    convert(s)
}

pub fn u32_to_u16(s: &[u32]) -> Result<Vec<u16>, UnistringError> {
    convert(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mblen_cases() {
        assert_eq!(u8_mblen(b""), -1);
        assert_eq!(u8_mblen(b"\0abc"), 0);
        assert_eq!(u8_mblen("é".as_bytes()), 2);
        assert_eq!(u8_mblen(&[0xC3]), -1);
        assert_eq!(u16_mblen(&[0xD83D, 0xDE00]), 2);
        assert_eq!(u32_mblen(&[0x110000]), -1);
    }

    #[test]
    fn check_reports_first_bad_unit() {
        assert_eq!(u8_check("héllo".as_bytes()), None);
        assert_eq!(u8_check(&[b'a', 0xC0, 0x80]), Some(1));
        assert_eq!(u16_check(&[0x61, 0xDC00]), Some(1));
        assert_eq!(u32_check(&[0x61, 0xD800]), Some(1));
    }

    #[test]
    fn next_and_prev() {
        let s = "a€😀".as_bytes();
        assert_eq!(u8_next(s, 0), Some(('a' as u32, 1)));
        assert_eq!(u8_next(s, 1), Some((0x20AC, 4)));
        assert_eq!(u8_next(s, 4), Some((0x1F600, 8)));
        assert_eq!(u8_next(s, 8), None);
        assert_eq!(u8_prev(s, 8), Some((0x1F600, 4)));
        assert_eq!(u8_prev(s, 4), Some((0x20AC, 1)));
        assert_eq!(u8_prev(s, 1), Some(('a' as u32, 0)));
        assert_eq!(u8_prev(s, 0), None);
    }

    #[test]
    fn prev_fails_on_damage() {
        // Stray continuation bytes: no lead byte within 4 units.
        let s = [b'a', 0x80, 0x80, 0x80, 0x80];
        assert_eq!(u8_prev(&s, 5), None);
        // Lead byte found but the sequence is too short.
        let s = [b'a', 0xE2, 0x82];
        assert_eq!(u8_prev(&s, 3), None);
        // Overlong sequence behind a valid lead position.
        let s = [0xC0, 0x80];
        assert_eq!(u8_prev(&s, 2), None);
        // UTF-16: lone high surrogate before the cursor.
        assert_eq!(u16_prev(&[0x61, 0xD800], 2), None);
        assert_eq!(u16_prev(&[0xD83D, 0xDE00], 2), Some((0x1F600, 0)));
        assert_eq!(u16_prev(&[0xDE00], 1), None);
    }

    #[test]
    fn lengths() {
        assert_eq!(u8_strlen(b"abc\0def"), 3);
        assert_eq!(u8_strlen(b"abc"), 3);
        assert_eq!(u16_strlen(&[1, 2, 0, 3]), 2);
        assert_eq!(u8_mbsnlen("a€😀".as_bytes()), 3);
        assert_eq!(u8_mbsnlen(&[b'a', 0xFF, b'b']), 3);
        assert_eq!(u16_mbsnlen(&[0xD83D, 0xDE00, 0x61]), 2);
    }

    #[test]
    fn compare_in_code_point_order() {
        assert_eq!(u8_cmp(b"abc", b"abd"), Ordering::Less);
        assert_eq!(u8_cmp(b"ab", b"abc"), Ordering::Less);
        assert_eq!(u8_cmp(b"abc", b"abc"), Ordering::Equal);
        // U+FF61 < U+1F600 in code point order even though the UTF-16
        // surrogate 0xD83D sorts below 0xFF61 as a raw unit.
        assert_eq!(u16_cmp(&[0xFF61], &[0xD83D, 0xDE00]), Ordering::Less);
        assert_eq!(u8_strcmp(b"abc\0x", b"abc\0y"), Ordering::Equal);
    }

    #[test]
    fn search() {
        let s = "naïve café".as_bytes();
        assert_eq!(u8_chr(s, 'ï' as u32), Some(2));
        assert_eq!(u8_chr(s, 'é' as u32), Some(10));
        assert_eq!(u8_chr(s, 'z' as u32), None);
        assert_eq!(u8_chr(s, 0xD800), None);
        assert_eq!(u8_strstr(s, "café".as_bytes()), Some(7));
        assert_eq!(u8_strstr(s, b""), Some(0));
        let w: Vec<u16> = "x😀y".encode_utf16().collect();
        assert_eq!(u16_chr(&w, 0x1F600), Some(1));
        assert!(u16_startswith(&w, &[0x78]));
        assert!(u32_endswith(&[1, 2, 3], &[2, 3]));
    }

    #[test]
    fn width_conversions() {
        let text = "Grüße, 世界 😀";
        let u16s = u8_to_u16(text.as_bytes()).unwrap();
        assert_eq!(u16s, text.encode_utf16().collect::<Vec<_>>());
        let u32s = u16_to_u32(&u16s).unwrap();
        assert_eq!(u32s, text.chars().map(|c| c as u32).collect::<Vec<_>>());
        assert_eq!(u32_to_u8(&u32s).unwrap(), text.as_bytes());
        assert_eq!(u32_to_u16(&u32s).unwrap(), u16s);
        assert_eq!(u16_to_u8(&u16s).unwrap(), text.as_bytes());
        assert_eq!(u8_to_u32(text.as_bytes()).unwrap(), u32s);
    }

    #[test]
    fn width_conversion_errors() {
        assert_eq!(
            u8_to_u16(&[b'a', b'b', 0xFF]),
            Err(UnistringError::IllegalSequence { offset: 2 })
        );
        assert_eq!(
            u16_to_u8(&[0x61, 0xDC00]),
            Err(UnistringError::IllegalSequence { offset: 1 })
        );
        assert_eq!(
            u32_to_u8(&[0x110000]),
            Err(UnistringError::IllegalSequence { offset: 0 })
        );
    }

    #[test]
    fn push_rejects_surrogates() {
        let mut v: Vec<u8> = Vec::new();
        assert!(push_uc(&mut v, 0x20AC).is_ok());
        assert_eq!(v, "€".as_bytes());
        assert_eq!(
            push_uc(&mut v, 0xDFFF),
            Err(UnistringError::InvalidCodePoint { code: 0xDFFF })
        );
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn malformed_codes() {
        assert_eq!(u8_mbtoucr(&[0xE2, 0x82]).unwrap_err().code(), -2);
        assert_eq!(u8_mbtoucr(&[0xFF]).unwrap_err().code(), -1);
    }
}

// compat_unistr.rs - Integration tests for the UTF-8/16/32 codecs.
//
// Helpers:
//   dec8(bytes, uc, len) -> u8_mbtouc decodes `uc` consuming `len` bytes
//   bad8(bytes, len)     -> u8_mbtoucr fails, skipping `len` bytes
//   enc8(uc, bytes)      -> u8_uctomb writes exactly `bytes`

use std::cmp::Ordering;

use unistring::error::UnistringError;
use unistring::unistr::*;
use unistring::unitypes::{uc_is_valid, Ucs4, UNICODE_MAX};

fn dec8(bytes: &[u8], uc: Ucs4, len: usize) {
    assert_eq!(u8_mbtouc(bytes), (uc, len), "u8_mbtouc({bytes:02X?})");
}

fn bad8(bytes: &[u8], len: usize) {
    match u8_mbtoucr(bytes) {
        Err(m) => assert_eq!(m.skip, len, "skip for {bytes:02X?}"),
        Ok(r) => panic!("u8_mbtoucr({bytes:02X?}) decoded {r:?}"),
    }
    assert_eq!(u8_mbtouc(bytes), (0xFFFD, len), "u8_mbtouc({bytes:02X?})");
}

fn enc8(uc: Ucs4, expected: &[u8]) {
    let mut buf = [0u8; 4];
    assert_eq!(u8_uctomb(uc, &mut buf), expected.len() as i32);
    assert_eq!(&buf[..expected.len()], expected);
}

// ============================================================================
// Round trips over every code point
// ============================================================================

#[test]
fn round_trip_all_scalars_u8() {
    let mut buf = [0u8; 4];
    for uc in 0..=UNICODE_MAX {
        let n = u8_uctomb(uc, &mut buf);
        if !uc_is_valid(uc) {
            assert_eq!(n, -1, "U+{uc:04X}");
            continue;
        }
        assert!(n > 0);
        assert_eq!(u8_mbtoucr(&buf[..n as usize]), Ok((uc, n as usize)), "U+{uc:04X}");
    }
}

#[test]
fn round_trip_all_scalars_u16() {
    let mut buf = [0u16; 2];
    for uc in (0..=UNICODE_MAX).filter(|&u| uc_is_valid(u)) {
        let n = u16_uctomb(uc, &mut buf) as usize;
        assert_eq!(u16_mbtouc(&buf[..n]), (uc, n), "U+{uc:04X}");
    }
}

#[test]
fn round_trip_all_scalars_u32() {
    let mut buf = [0u32; 1];
    for uc in (0..=UNICODE_MAX).filter(|&u| uc_is_valid(u)) {
        assert_eq!(u32_uctomb(uc, &mut buf), 1);
        assert_eq!(u32_mbtouc(&buf), (uc, 1));
    }
    assert_eq!(u32_uctomb(0x110000, &mut buf), -1);
}

// ============================================================================
// UTF-8 decoding
// ============================================================================

#[test]
fn euro_sign() {
    dec8(&[0xE2, 0x82, 0xAC], 0x20AC, 3);
}

#[test]
fn boundaries() {
    dec8(b"\x7F", 0x7F, 1);
    dec8(&[0xC2, 0x80], 0x80, 2);
    dec8(&[0xDF, 0xBF], 0x7FF, 2);
    dec8(&[0xE0, 0xA0, 0x80], 0x800, 3);
    dec8(&[0xED, 0x9F, 0xBF], 0xD7FF, 3);
    dec8(&[0xEE, 0x80, 0x80], 0xE000, 3);
    dec8(&[0xF0, 0x90, 0x80, 0x80], 0x10000, 4);
    dec8(&[0xF4, 0x8F, 0xBF, 0xBF], 0x10FFFF, 4);
}

#[test]
fn maximal_subparts() {
    bad8(&[0x80], 1);
    bad8(&[0xC0, 0x80], 1);
    bad8(&[0xC1, 0xBF], 1);
    bad8(&[0xE0, 0x80, 0x80], 1);
    bad8(&[0xED, 0xA0, 0x80], 1);
    bad8(&[0xF4, 0x90, 0x80, 0x80], 1);
    bad8(&[0xF5, 0x80], 1);
    bad8(&[0xE2, 0x82, 0x41], 2);
    bad8(&[0xF0, 0x9F, 0x98], 3);
}

#[test]
fn truncated_sequences_are_incomplete() {
    let m = u8_mbtoucr(&[0xE2, 0x82]).unwrap_err();
    assert!(m.incomplete);
    let m = u8_mbtoucr(&[0xE2, 0x41]).unwrap_err();
    assert!(!m.incomplete);
}

#[test]
fn encoding() {
    enc8(0x41, b"A");
    enc8(0xE9, &[0xC3, 0xA9]);
    enc8(0x20AC, &[0xE2, 0x82, 0xAC]);
    enc8(0x1F600, &[0xF0, 0x9F, 0x98, 0x80]);
    let mut small = [0u8; 2];
    assert_eq!(u8_uctomb(0x20AC, &mut small), -2);
    assert_eq!(small, [0, 0]);
    assert_eq!(u8_uctomb(0xD800, &mut small), -1);
}

// ============================================================================
// UTF-16
// ============================================================================

#[test]
fn utf16_surrogates() {
    assert_eq!(u16_mbtouc(&[0xD83D, 0xDE00]), (0x1F600, 2));
    assert_eq!(u16_mbtouc(&[0xDE00, 0x41]), (0xFFFD, 1));
    assert_eq!(u16_mbtouc(&[0xD83D, 0x41]), (0xFFFD, 1));
    assert!(u16_mbtoucr(&[0xD83D]).unwrap_err().incomplete);
    assert_eq!(u16_check(&[0x41, 0xDC00]), Some(1));
}

// ============================================================================
// String functions
// ============================================================================

#[test]
fn lengths_and_search() {
    let s = "h€llo wörld".as_bytes();
    assert_eq!(u8_mbsnlen(s), 11);
    assert_eq!(u8_strlen(b"ab\0cd"), 2);
    assert_eq!(u8_chr(s, 0xF6), Some(9));
    assert_eq!(u8_chr(s, 0x20AC), Some(1));
    assert_eq!(u8_chr(s, 0x263A), None);
    assert_eq!(u8_strstr(s, "wö".as_bytes()), Some(8));
    assert!(u8_startswith(s, "h€".as_bytes()));
    assert!(u8_endswith(s, b"rld"));
}

#[test]
fn code_point_order() {
    // UTF-16 code unit order would put U+FF21 after U+1F600.
    let a: Vec<u16> = "\u{FF21}".encode_utf16().collect();
    let b: Vec<u16> = "\u{1F600}".encode_utf16().collect();
    assert_eq!(u16_cmp(&a, &b), Ordering::Less);
    assert_eq!(u8_cmp(b"ab", b"abc"), Ordering::Less);
    assert_eq!(u8_strcmp(b"abc\0x", b"abc\0y"), Ordering::Equal);
}

#[test]
fn next_and_prev() {
    let s = "a€b".as_bytes();
    assert_eq!(u8_next(s, 0), Some((0x61, 1)));
    assert_eq!(u8_next(s, 1), Some((0x20AC, 4)));
    assert_eq!(u8_next(s, 5), None);
    assert_eq!(u8_prev(s, 4), Some((0x20AC, 1)));
    assert_eq!(u8_prev(s, 0), None);
    assert_eq!(u8_prev(&[0x61, 0x82], 2), None);
}

#[test]
fn width_conversions() {
    let s = "a€😀";
    let w = u8_to_u16(s.as_bytes()).unwrap();
    assert_eq!(w, s.encode_utf16().collect::<Vec<_>>());
    let u = u16_to_u32(&w).unwrap();
    assert_eq!(u, vec![0x61, 0x20AC, 0x1F600]);
    assert_eq!(u32_to_u8(&u).unwrap(), s.as_bytes());
    assert_eq!(u8_to_u32(b"ab\xFF"), Err(UnistringError::IllegalSequence { offset: 2 }));
}

// ============================================================================
// Iteration and streaming
// ============================================================================

#[test]
fn iterator_both_ways() {
    let s = "x€\u{1F600}".as_bytes();
    let fwd: Vec<Ucs4> = UcIter::new(s).collect();
    assert_eq!(fwd, vec![0x78, 0x20AC, 0x1F600]);
    let back: Vec<Ucs4> = UcIter::new(s).rev().collect();
    assert_eq!(back, vec![0x1F600, 0x20AC, 0x78]);

    let mut it = UcIter::new(&b"a\xFFb"[..]);
    assert_eq!(it.next_uc(), Some(Ok(0x61)));
    assert!(matches!(it.next_uc(), Some(Err(_))));
    assert_eq!(it.next_uc(), Some(Ok(0x62)));
    assert_eq!(it.next_uc(), None);
}

#[test]
fn streaming_decode_across_calls() {
    let mut state = MbState::new();
    assert_eq!(u8_mbrtouc(&mut state, &[0xF0, 0x9F]), MbrResult::Incomplete { consumed: 2 });
    assert!(!state.is_initial());
    assert_eq!(
        u8_mbrtouc(&mut state, &[0x98, 0x80, 0x41]),
        MbrResult::Char { uc: 0x1F600, consumed: 2 }
    );
    assert!(state.is_initial());
    assert_eq!(u8_mbrtouc(&mut state, &[0x41]), MbrResult::Char { uc: 0x41, consumed: 1 });
    assert_eq!(u8_mbrtouc(&mut state, &[0xFF]), MbrResult::Invalid);
}

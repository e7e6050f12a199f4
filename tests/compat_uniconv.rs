// compat_uniconv.rs - Integration tests for legacy encoding conversion.
//
// Helpers:
//   to(enc, s, bytes)    -> UTF-8 `s` converts to `bytes` under the error policy
//   from(enc, bytes, s)  -> `bytes` convert back to UTF-8 `s`

use unistring::error::UnistringError;
use unistring::uniconv::*;

fn to(encoding: &str, s: &str, expected: &[u8]) {
    let out = u8_conv_to_encoding(encoding, IconvEhandler::Error, s.as_bytes(), None)
        .unwrap_or_else(|e| panic!("{s:?} -> {encoding}: {e}"));
    assert_eq!(out, expected, "{s:?} -> {encoding}");
}

fn from(encoding: &str, bytes: &[u8], expected: &str) {
    let out = u8_conv_from_encoding(encoding, IconvEhandler::Error, bytes, None)
        .unwrap_or_else(|e| panic!("{bytes:02X?} <- {encoding}: {e}"));
    assert_eq!(out, expected.as_bytes(), "{bytes:02X?} <- {encoding}");
}

fn both(encoding: &str, s: &str, bytes: &[u8]) {
    to(encoding, s, bytes);
    from(encoding, bytes, s);
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn cafe_through_latin1() {
    both("ISO-8859-1", "café", b"caf\xE9");
}

#[test]
fn single_byte_encodings() {
    both("KOI8-R", "Привет", &[0xF0, 0xD2, 0xC9, 0xD7, 0xC5, 0xD4]);
    both("windows-1252", "€1", &[0x80, 0x31]);
    both("ISO-8859-15", "€", &[0xA4]);
    both("ASCII", "plain", b"plain");
}

#[test]
fn multibyte_encodings() {
    both("SHIFT_JIS", "aあ", &[0x61, 0x82, 0xA0]);
    both("CP932", "あ", &[0x82, 0xA0]);
    both("EUC-JP", "日", &[0xC6, 0xFC]);
    both("EUC-KR", "한", &[0xC7, 0xD1]);
    both("GBK", "中", &[0xD6, 0xD0]);
    both("GB18030", "中", &[0xD6, 0xD0]);
    both("BIG5", "中", &[0xA4, 0xA4]);
}

#[test]
fn unicode_encodings() {
    both("UTF-16BE", "a€", &[0x00, 0x61, 0x20, 0xAC]);
    both("UTF-16LE", "😀", &[0x3D, 0xD8, 0x00, 0xDE]);
    both("UTF-32LE", "a", &[0x61, 0, 0, 0]);
    to("UTF-16", "a", &[0xFE, 0xFF, 0x00, 0x61]);
    from("UTF-16", &[0xFF, 0xFE, 0x61, 0x00], "a");
    from("UTF-16", &[0x00, 0x61], "a");
    from("UTF-32", &[0x00, 0x00, 0xFE, 0xFF, 0x00, 0x00, 0x00, 0x61], "a");
}

// ============================================================================
// Error policies
// ============================================================================

#[test]
fn euro_is_not_latin1() {
    let src = "x€".as_bytes();
    let err = u8_conv_to_encoding("ISO-8859-1", IconvEhandler::Error, src, None).unwrap_err();
    assert_eq!(err, UnistringError::IllegalSequence { offset: 1 });
    assert_eq!(err.code(), libc::EILSEQ);
    assert_eq!(
        u8_conv_to_encoding("ISO-8859-1", IconvEhandler::QuestionMark, src, None).unwrap(),
        b"x?"
    );
    assert_eq!(
        u8_conv_to_encoding("ISO-8859-1", ICONVEH_ESCAPE_SEQUENCE, src, None).unwrap(),
        b"x\\u20AC"
    );
}

#[test]
fn escapes_outside_the_bmp() {
    let out = u8_conv_to_encoding("KOI8-R", IconvEhandler::EscapeSequence, "😀".as_bytes(), None).unwrap();
    assert_eq!(out, b"\\U0001F600");
}

#[test]
fn ill_formed_input() {
    assert_eq!(
        mem_iconveh(b"ab\xFFc", "UTF-8", "ISO-8859-1", IconvEhandler::Error, None),
        Err(UnistringError::IllegalSequence { offset: 2 })
    );
    assert_eq!(
        mem_iconveh(b"ab\xFFc", "UTF-8", "ISO-8859-1", IconvEhandler::QuestionMark, None).unwrap(),
        b"ab?c"
    );
    assert_eq!(
        mem_iconveh(&[0x61, 0xFF], "SHIFT_JIS", "UTF-8", IconvEhandler::Error, None),
        Err(UnistringError::IllegalSequence { offset: 1 })
    );
    assert!(mem_iconveh(&[0x61, 0xE9], "ASCII", "UTF-8", IconvEhandler::Error, None).is_err());
}

#[test]
fn truncated_input() {
    assert_eq!(
        mem_iconveh(&[0x61, 0xC6], "EUC-JP", "UTF-8", IconvEhandler::Error, None),
        Err(UnistringError::IllegalSequence { offset: 1 })
    );
    assert!(mem_iconveh(&[0x00, 0x61, 0x00], "UTF-16BE", "UTF-8", IconvEhandler::Error, None).is_err());
}

#[test]
fn unsupported_encoding_is_einval() {
    let err = mem_iconveh(b"x", "NOT-A-CHARSET", "UTF-8", IconvEhandler::Error, None).unwrap_err();
    assert!(matches!(err, UnistringError::UnsupportedEncoding { .. }));
    assert_eq!(err.code(), libc::EINVAL);
}

// ============================================================================
// Offsets
// ============================================================================

#[test]
fn offsets_between_multibyte_encodings() {
    let mut offsets = Vec::new();
    let out = mem_iconveh(&[0x82, 0xA0, 0x61], "SHIFT_JIS", "EUC-JP", IconvEhandler::Error, Some(&mut offsets)).unwrap();
    assert_eq!(out, [0xA4, 0xA2, 0x61]);
    assert_eq!(offsets, [0, OFFSET_NONE, 2]);
}

#[test]
fn offsets_for_wide_output() {
    let mut offsets = Vec::new();
    let out = u16_conv_from_encoding("UTF-8", IconvEhandler::Error, "é😀".as_bytes(), Some(&mut offsets)).unwrap();
    assert_eq!(out, [0xE9, 0xD83D, 0xDE00]);
    assert_eq!(offsets, [0, 2, OFFSET_NONE]);
}

#[test]
fn wide_input() {
    let src: Vec<u32> = "Ωmega".chars().map(|c| c as u32).collect();
    let out = u32_conv_to_encoding("ISO-8859-7", IconvEhandler::Error, &src, None).unwrap();
    assert_eq!(out, [0xD9, b'm', b'e', b'g', b'a']);
    let w: Vec<u16> = "Ωmega".encode_utf16().collect();
    assert_eq!(u16_conv_to_encoding("ISO-8859-7", IconvEhandler::Error, &w, None).unwrap(), out);
}

// ============================================================================
// NUL-terminated strings and the locale
// ============================================================================

#[test]
fn strconv() {
    assert_eq!(u8_strconv_from_encoding(b"gr\xFC\xDF\0junk", "ISO-8859-1", IconvEhandler::Error).unwrap(), "grüß");
    assert_eq!(u8_strconv_to_encoding("grüß", "ISO-8859-1", IconvEhandler::Error).unwrap(), b"gr\xFC\xDF");
}

#[test]
fn locale_charset_is_never_empty() {
    assert!(!locale_charset().is_empty());
}

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn stream_byte_by_byte() {
    let src = [0xC7, 0xD1, 0xB1, 0xDB, 0x20, 0x61];
    let mut stream = ConvStream::new("EUC-KR", IconvEhandler::Error).unwrap();
    assert!(stream.is_initial());
    let mut out = Vec::new();
    for b in src {
        stream.feed(&[b], &mut out).unwrap();
    }
    stream.finish(&mut out).unwrap();
    assert_eq!(out, "한글 a".as_bytes());
    assert!(stream.is_initial());
}

#[test]
fn stream_error_offset_counts_from_start() {
    let mut stream = ConvStream::new("UTF-8", IconvEhandler::Error).unwrap();
    let mut out = Vec::new();
    stream.feed(b"abc", &mut out).unwrap();
    let err = stream.feed(b"d\xFF", &mut out).unwrap_err();
    assert_eq!(err, UnistringError::IllegalSequence { offset: 4 });
}

#[test]
fn stream_substitutes() {
    let mut stream = ConvStream::new("UTF-8", IconvEhandler::QuestionMark).unwrap();
    let mut out = Vec::new();
    stream.feed(b"a\xE2\x82", &mut out).unwrap();
    stream.finish(&mut out).unwrap();
    assert_eq!(out, b"a?");
}

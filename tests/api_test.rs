// api_test.rs - Integration tests for the idiomatic Rust API.

use std::cmp::Ordering;

use unistring::error::UnistringError;
use unistring::prelude::*;
use unistring::uniconv::OFFSET_NONE;

fn texts<'t>(it: impl Iterator<Item = Segment<'t>>) -> Vec<&'t str> {
    it.map(|s| s.as_str().expect("well-formed segment")).collect()
}

// === Graphemes ===

#[test]
fn combining_sequence_is_one_grapheme() {
    let g: Vec<Segment> = graphemes("e\u{301}").collect();
    assert_eq!(g.len(), 1);
    assert_eq!(g[0].range(), 0..3);
    assert_eq!(g[0].len(), 3);
    assert!(!g[0].is_empty());
}

#[test]
fn flags_and_families() {
    let s = "🇩🇪🇫🇷👨\u{200D}👩\u{200D}👧";
    assert_eq!(texts(graphemes(s)), ["🇩🇪", "🇫🇷", "👨\u{200D}👩\u{200D}👧"]);
    assert_eq!(graphemes(s).rev().count(), 3);
}

#[test]
fn segments_cover_the_text() {
    let s = "Ünïcödé\r\ntëxt 日本";
    let mut end = 0;
    for g in graphemes(s) {
        assert_eq!(g.start(), end);
        end = g.end();
    }
    assert_eq!(end, s.len());
}

#[test]
fn damaged_bytes_are_their_own_segments() {
    let segs: Vec<(usize, usize)> = Graphemes::new(b"x\xE2\x82y").map(|g| (g.start(), g.end())).collect();
    assert_eq!(segs, [(0, 1), (1, 3), (3, 4)]);
    let mut back: Vec<(usize, usize)> = Graphemes::new(b"x\xE2\x82y").rev().map(|g| (g.start(), g.end())).collect();
    back.reverse();
    assert_eq!(back, segs);
}

// === Words ===

#[test]
fn words_with_punctuation() {
    assert_eq!(texts(words("3.14 is π")), ["3.14", " ", "is", " ", "π"]);
    assert_eq!(texts(words("e-mail")), ["e", "-", "mail"]);
}

#[test]
fn words_concatenate_back() {
    let s = "The quick (\"brown\") fox can't jump 32.3 feet, right?";
    let joined: String = texts(words(s)).concat();
    assert_eq!(joined, s);
}

// === LineBreaker ===

#[test]
fn wrap_respects_width() {
    let text = "The quick brown fox jumps over the lazy dog";
    let lines = LineBreaker::new().width(16).wrap(text);
    assert_eq!(lines.concat(), text);
    for line in &lines {
        assert!(line.trim_end().chars().count() <= 16, "{line:?}");
    }
}

#[test]
fn wrap_with_start_column() {
    let lb = LineBreaker::new().width(10).start_column(6);
    assert_eq!(lb.wrap("abc defg"), ["abc ", "defg"]);
    assert_eq!(lb.end_column("abc defg"), 4);
}

#[test]
fn at_end_columns_reserve_space() {
    let lb = LineBreaker::new().width(7);
    assert_eq!(lb.wrap("abc def"), ["abc def"]);
    assert_eq!(lb.clone().at_end_columns(1).wrap("abc def"), ["abc ", "def"]);
}

#[test]
fn ambiguous_width_follows_encoding() {
    let text = "§§ §§";
    assert_eq!(LineBreaker::new().width(5).wrap(text), [text]);
    let cjk = LineBreaker::new().width(5).encoding("EUC-JP").wrap(text);
    assert!(cjk.len() > 1, "{cjk:?}");
}

#[test]
fn mandatory_breaks_without_width() {
    let b = LineBreaker::new().breaks("x\ny");
    assert_eq!(b, [UcBreak::Prohibited, UcBreak::Mandatory, UcBreak::Prohibited]);
}

// === Converter ===

#[test]
fn convert_round_trip() {
    let latin1 = Converter::new("UTF-8", "ISO-8859-1").convert("café".as_bytes()).unwrap();
    assert_eq!(latin1, b"caf\xE9");
    let back = Converter::new("ISO-8859-1", "UTF-8").convert(&latin1).unwrap();
    assert_eq!(back, "café".as_bytes());
}

#[test]
fn convert_policies() {
    let src = "€5".as_bytes();
    let err = Converter::new("UTF-8", "ISO-8859-1").convert(src).unwrap_err();
    assert!(matches!(err, UnistringError::IllegalSequence { .. }));
    assert_eq!(err.code(), libc::EILSEQ);

    let lossy = Converter::new("UTF-8", "ISO-8859-1").handler(IconvEhandler::QuestionMark);
    assert_eq!(lossy.convert(src).unwrap(), b"?5");
}

#[test]
fn convert_with_offsets_maps_output_to_input() {
    let (out, offsets) = Converter::new("UTF-8", "UTF-16LE").convert_with_offsets("a€".as_bytes()).unwrap();
    assert_eq!(out, [0x61, 0x00, 0xAC, 0x20]);
    assert_eq!(offsets, [0, OFFSET_NONE, 1, OFFSET_NONE]);
}

#[test]
fn unknown_encoding() {
    let err = Converter::new("UTF-8", "X-NO-SUCH").convert(b"a").unwrap_err();
    assert_eq!(err, UnistringError::UnsupportedEncoding { name: "X-NO-SUCH".into() });
}

// === ConvStream ===

#[test]
fn stream_matches_one_shot() {
    let src = "Grüße aus Köln".as_bytes();
    let latin1 = Converter::new("UTF-8", "ISO-8859-1").convert(src).unwrap();

    let mut stream = ConvStream::new("ISO-8859-1", IconvEhandler::Error).unwrap();
    let mut out = Vec::new();
    for chunk in latin1.chunks(3) {
        stream.feed(chunk, &mut out).unwrap();
    }
    stream.finish(&mut out).unwrap();
    assert_eq!(out, src);
}

// === Normalization and comparison ===

#[test]
fn normalize_forms() {
    assert_eq!(normalize("\u{212B}", UninormT::Nfd), "A\u{30A}");
    assert_eq!(normalize("\u{212B}", UninormT::Nfc), "\u{C5}");
    assert_eq!(normalize("ﬁ", UninormT::Nfc), "ﬁ");
    assert_eq!(normalize("ﬁ", UninormT::Nfkc), "fi");
}

#[test]
fn comparisons() {
    assert_eq!(compare_normalized("\u{C5}", "A\u{30A}", UninormT::Nfc), Ordering::Equal);
    assert_eq!(compare_normalized("ﬁ", "fi", UninormT::Nfc), Ordering::Greater);
    assert_eq!(compare_normalized("ﬁ", "fi", UninormT::Nfkd), Ordering::Equal);
    assert_eq!(compare_caseless("ΣΊΣΥΦΟΣ", "σίσυφος"), Ok(Ordering::Equal));
    assert_eq!(compare_caseless("apple", "Banana"), Ok(Ordering::Less));
}

#[test]
fn locale_collation() {
    let c = Locale::c();
    assert_eq!(c.compare(b"a", b"b"), Ok(Ordering::Less));
    assert_eq!(c.compare(b"b", b"b"), Ok(Ordering::Equal));
}

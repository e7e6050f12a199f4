// compat_segmentation.rs - Integration tests for grapheme, word and line
// segmentation and display width.
//
// Helpers:
//   gbrk(s)            -> byte offsets where a grapheme cluster starts
//   wbrk(s)            -> byte offsets where a word break occurs
//   lbrk(s, enc)       -> line break classification of every byte

use unistring::unigbrk::*;
use unistring::unilbrk::*;
use unistring::uniwbrk::*;
use unistring::uniwidth::*;

fn flagged(flags: &[bool]) -> Vec<usize> {
    flags.iter().enumerate().filter(|(_, &b)| b).map(|(i, _)| i).collect()
}

fn gbrk(s: &str) -> Vec<usize> {
    let mut out = vec![false; s.len()];
    u8_grapheme_breaks(s.as_bytes(), &mut out);
    flagged(&out)
}

fn wbrk(s: &str) -> Vec<usize> {
    let mut out = vec![false; s.len()];
    u8_wordbreaks(s.as_bytes(), &mut out);
    flagged(&out)
}

fn lbrk(s: &str, encoding: &str) -> Vec<UcBreak> {
    let mut out = vec![UcBreak::Undefined; s.len()];
    u8_possible_linebreaks(s.as_bytes(), encoding, &mut out);
    out
}

fn opportunities(breaks: &[UcBreak]) -> Vec<usize> {
    breaks
        .iter()
        .enumerate()
        .filter(|(_, b)| matches!(b, UcBreak::Possible | UcBreak::Hyphenation))
        .map(|(i, _)| i)
        .collect()
}

// ============================================================================
// Grapheme clusters
// ============================================================================

#[test]
fn e_with_combining_acute() {
    assert_eq!(u8_grapheme_next(&[0x65, 0xCC, 0x81], 0), Some(3));
    assert_eq!(u8_grapheme_prev(&[0x65, 0xCC, 0x81], 3), Some(0));
    assert_eq!(u8_grapheme_next(&[0x65, 0xCC, 0x81], 3), None);
}

#[test]
fn grapheme_boundaries() {
    assert_eq!(gbrk("abc"), [0, 1, 2]);
    assert_eq!(gbrk("a\r\nb"), [0, 1, 3]);
    assert_eq!(gbrk("\u{1100}\u{1161}\u{11A8}x"), [0, 9]);
    assert_eq!(gbrk("\u{1F1FA}\u{1F1F8}\u{1F1EC}"), [0, 8]);
    assert_eq!(gbrk("\u{1F44D}\u{1F3FD}!"), [0, 8]);
}

#[test]
fn next_and_prev_agree() {
    let s = "x\u{1F469}\u{200D}\u{1F52C}e\u{301}\u{1F1EF}\u{1F1F5}\r\n";
    let b = s.as_bytes();
    let mut forward = vec![0];
    let mut pos = 0;
    while let Some(end) = u8_grapheme_next(b, pos) {
        forward.push(end);
        pos = end;
    }
    let mut backward = vec![b.len()];
    let mut pos = b.len();
    while let Some(start) = u8_grapheme_prev(b, pos) {
        backward.push(start);
        pos = start;
    }
    backward.reverse();
    assert_eq!(forward, backward);
    let mut starts = forward.clone();
    starts.pop();
    assert_eq!(gbrk(s), starts);
}

fn forward_boundaries(b: &[u8]) -> Vec<usize> {
    let mut out = vec![0];
    let mut pos = 0;
    while let Some(end) = u8_grapheme_next(b, pos) {
        out.push(end);
        pos = end;
    }
    out
}

fn backward_boundaries(b: &[u8]) -> Vec<usize> {
    let mut out = vec![b.len()];
    let mut pos = b.len();
    while let Some(start) = u8_grapheme_prev(b, pos) {
        out.push(start);
        pos = start;
    }
    out.reverse();
    out
}

#[test]
fn next_and_prev_agree_on_ill_formed_input() {
    let samples: [&[u8]; 6] = [
        &[0x61, 0xF0, 0x9F, 0x98],
        &[0xF0, 0x9F, 0x98, 0x61, 0xCC, 0x81],
        &[0x61, 0xE2, 0x82, 0x62],
        &[0xC3, 0xA9, 0x80, 0x80, 0x61],
        &[0xE0, 0x80, 0xAF, 0xFF],
        &[0xED, 0xA0, 0x80, 0xCC, 0x81],
    ];
    for b in samples {
        let forward = forward_boundaries(b);
        assert_eq!(backward_boundaries(b), forward, "{b:02X?}");
        let mut flags = vec![false; b.len()];
        u8_grapheme_breaks(b, &mut flags);
        let starts = &forward[..forward.len() - 1];
        assert_eq!(flagged(&flags), starts, "{b:02X?}");
    }
    assert_eq!(forward_boundaries(&[0x61, 0xF0, 0x9F, 0x98]), [0, 1, 4]);
    assert_eq!(backward_boundaries(&[0xF0, 0x9F, 0x98, 0x61, 0xCC, 0x81]), [0, 3, 6]);
}

#[test]
fn widths_produce_same_clusters() {
    let s = "ÅA\u{30A}\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}";
    let count8 = {
        let mut n = 0;
        let mut p = 0;
        while let Some(e) = u8_grapheme_next(s.as_bytes(), p) {
            n += 1;
            p = e;
        }
        n
    };
    let w: Vec<u16> = s.encode_utf16().collect();
    let mut f16 = vec![false; w.len()];
    u16_grapheme_breaks(&w, &mut f16);
    let u: Vec<u32> = s.chars().map(|c| c as u32).collect();
    let mut f32 = vec![false; u.len()];
    u32_grapheme_breaks(&u, &mut f32);
    assert_eq!(count8, 3);
    assert_eq!(f16.iter().filter(|&&b| b).count(), 3);
    assert_eq!(f32.iter().filter(|&&b| b).count(), 3);
}

#[test]
fn pairwise_and_streaming() {
    assert!(!uc_is_grapheme_break('e' as u32, 0x301));
    assert!(uc_is_grapheme_break('a' as u32, 'b' as u32));
    assert!(!uc_is_grapheme_break('\r' as u32, '\n' as u32));

    let mut gb = GraphemeBreaker::new();
    let flags: Vec<bool> = [0x1F1E6, 0x1F1E7, 0x1F1E8].iter().map(|&c| gb.is_break(c)).collect();
    assert_eq!(flags, [true, false, true]);
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn word_boundaries() {
    assert_eq!(wbrk("Hello world"), [5, 6]);
    assert_eq!(wbrk("can't"), Vec::<usize>::new());
    assert_eq!(wbrk("1,000.5 x"), [7, 8]);
    assert_eq!(wbrk("a_b"), Vec::<usize>::new());
}

#[test]
fn word_breaks_by_width_agree() {
    let s = "Das Café (\"3.5€\")";
    let w: Vec<u16> = s.encode_utf16().collect();
    let mut f16 = vec![false; w.len()];
    u16_wordbreaks(&w, &mut f16);
    // Map UTF-16 offsets back to byte offsets.
    let mut starts = Vec::new();
    let mut b = 0;
    let mut i = 0;
    for c in s.chars() {
        if f16[i] {
            starts.push(b);
        }
        i += c.len_utf16();
        b += c.len_utf8();
    }
    assert_eq!(starts, wbrk(s));
}

// ============================================================================
// Width
// ============================================================================

#[test]
fn width_is_additive() {
    let parts = ["abc", "日本語", "e\u{301}", "한글", "§", "\u{1F600}"];
    for enc in ["UTF-8", "EUC-JP", "GB18030"] {
        let whole: String = parts.concat();
        let sum: i32 = parts.iter().map(|p| u8_width(p.as_bytes(), enc)).sum();
        assert_eq!(u8_width(whole.as_bytes(), enc), sum, "{enc}");
    }
}

#[test]
fn width_of_controls() {
    assert_eq!(u8_width(b"a\x07", "UTF-8"), -1);
    assert_eq!(u8_strwidth(b"ab\0\x07", "UTF-8"), 2);
}

// ============================================================================
// Line breaking
// ============================================================================

#[test]
fn cjk_text_classifies_the_same_in_gb18030_and_gb2312() {
    let s = "日本語,中文,한글";
    assert_eq!(lbrk(s, "GB18030"), lbrk(s, "GB2312"));
    assert_eq!(u8_width(s.as_bytes(), "GB18030"), u8_width(s.as_bytes(), "GB2312"));
}

#[test]
fn ambiguous_characters_depend_on_encoding() {
    let s = "§×·";
    assert_ne!(lbrk(s, "GB18030"), lbrk(s, "GB2312"));
    assert_eq!(opportunities(&lbrk(s, "GB18030")), Vec::<usize>::new());
    assert_eq!(opportunities(&lbrk(s, "GB2312")), [2, 4]);
    assert_eq!(u8_width(s.as_bytes(), "GB18030"), 3);
    assert_eq!(u8_width(s.as_bytes(), "GB2312"), 6);
}

#[test]
fn every_unit_is_classified() {
    let s = "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich.\n日本語";
    let b = lbrk(s, "UTF-8");
    assert!(b.iter().all(|&x| x != UcBreak::Undefined));
    assert_eq!(b[0], UcBreak::Prohibited);
}

#[test]
fn spaces_at_the_start_of_a_line() {
    assert_eq!(opportunities(&lbrk(" a", "UTF-8")), [1]);
    assert_eq!(opportunities(&lbrk(" \u{300}a", "UTF-8")), [1]);
    assert_eq!(lbrk("\u{B} a", "UTF-8"), [UcBreak::Mandatory, UcBreak::Prohibited, UcBreak::Possible]);
    assert_eq!(opportunities(&lbrk("ab\r\n  cd ef", "UTF-8")), [6, 9]);
    // Closing punctuation still may not start a line.
    assert_eq!(opportunities(&lbrk("  )", "UTF-8")), Vec::<usize>::new());
}

#[test]
fn width_fitted_breaks() {
    let s = "aaa bbb ccc";
    let mut out = vec![UcBreak::Undefined; s.len()];
    let end = u8_width_linebreaks(s.as_bytes(), 8, 0, 0, None, "UTF-8", &mut out);
    assert_eq!(opportunities(&out), [8]);
    assert_eq!(end, 3);

    let w: Vec<u16> = s.encode_utf16().collect();
    let mut out16 = vec![UcBreak::Undefined; w.len()];
    let end16 = u16_width_linebreaks(&w, 8, 0, 0, None, "UTF-8", &mut out16);
    assert_eq!(out16, out);
    assert_eq!(end16, end);
}

#[test]
fn cr_lf_classification() {
    let mut v1 = vec![UcBreak::Undefined; 4];
    u8_possible_linebreaks(b"a\r\nb", "UTF-8", &mut v1);
    let mut v2 = vec![UcBreak::Undefined; 4];
    u8_possible_linebreaks_v2(b"a\r\nb", "UTF-8", &mut v2);
    assert_eq!(v1[1], UcBreak::Prohibited);
    assert_eq!(v2[1], UcBreak::CrBeforeLf);
    assert_eq!(v1[2], UcBreak::Mandatory);
    assert_eq!(v2[2], UcBreak::Mandatory);
}

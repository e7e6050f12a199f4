// api.rs - Idiomatic Rust API for unistring.
//
// Wraps the C-style function families (u8_grapheme_next, u8_wordbreaks,
// u8_width_linebreaks, mem_iconveh, ...) with Rust-native types: Segment,
// Graphemes, Words, LineBreaker, Converter.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::UnistringError;
use crate::unicase::u8_casecmp;
use crate::uniconv::{mem_iconveh, IconvEhandler};
use crate::unigbrk::{u8_grapheme_next, u8_grapheme_prev};
use crate::unilbrk::{
    u8_possible_linebreaks, u8_possible_linebreaks_v2, u8_width_linebreaks, u8_width_linebreaks_v2, UcBreak,
};
use crate::uninorm::{normalize_with, UninormT};
use crate::unistr::mbtouc;
use crate::uniwbrk::u8_wordbreaks;

// === Segment ===

/// A piece of a text produced by one of the segmenting iterators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'t> {
    text: &'t [u8],
    start: usize,
    end: usize,
}

impl<'t> Segment<'t> {
    /// Byte offset of the start of the segment.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the segment (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_bytes(&self) -> &'t [u8] {
        &self.text[self.start..self.end]
    }

    /// The segment as a `&str`, or `None` if the bytes are not valid UTF-8.
    /// Segments of a `&str` always are.
    pub fn as_str(&self) -> Option<&'t str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Graphemes ===

/// Iterator over the extended grapheme clusters of a text.
///
/// # Examples
///
/// ```
/// use unistring::api::graphemes;
///
/// let clusters: Vec<&str> = graphemes("e\u{301}🇩🇪!").filter_map(|g| g.as_str()).collect();
/// assert_eq!(clusters, ["e\u{301}", "🇩🇪", "!"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graphemes<'t> {
    text: &'t [u8],
    front: usize,
    back: usize,
}

impl<'t> Graphemes<'t> {
    /// Clusters of a byte string. Ill-formed sequences count as U+FFFD.
    pub fn new(text: &'t [u8]) -> Self {
        Graphemes { text, front: 0, back: text.len() }
    }
}

/// Grapheme clusters of `s`.
pub fn graphemes(s: &str) -> Graphemes<'_> {
    Graphemes::new(s.as_bytes())
}

impl<'t> Iterator for Graphemes<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Segment<'t>> {
        if self.front >= self.back {
            return None;
        }
        let end = u8_grapheme_next(self.text, self.front)?.min(self.back);
        let seg = Segment { text: self.text, start: self.front, end };
        self.front = end;
        Some(seg)
    }
}

impl<'t> DoubleEndedIterator for Graphemes<'t> {
    fn next_back(&mut self) -> Option<Segment<'t>> {
        if self.front >= self.back {
            return None;
        }
        let start = u8_grapheme_prev(self.text, self.back)?.max(self.front);
        let seg = Segment { text: self.text, start, end: self.back };
        self.back = start;
        Some(seg)
    }
}

// === Words ===

/// Iterator over the pieces of a text between word boundaries: words,
/// runs of spaces and punctuation.
///
/// # Examples
///
/// ```
/// use unistring::api::words;
///
/// let pieces: Vec<&str> = words("can't stop").filter_map(|w| w.as_str()).collect();
/// assert_eq!(pieces, ["can't", " ", "stop"]);
/// ```
#[derive(Debug, Clone)]
pub struct Words<'t> {
    text: &'t [u8],
    breaks: Vec<bool>,
    pos: usize,
}

impl<'t> Words<'t> {
    pub fn new(text: &'t [u8]) -> Self {
        let mut breaks = vec![false; text.len()];
        u8_wordbreaks(text, &mut breaks);
        Words { text, breaks, pos: 0 }
    }
}

/// Word segments of `s`.
pub fn words(s: &str) -> Words<'_> {
    Words::new(s.as_bytes())
}

impl<'t> Iterator for Words<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Segment<'t>> {
        if self.pos >= self.text.len() {
            return None;
        }
        let start = self.pos;
        let end = (start + 1..self.text.len())
            .find(|&i| self.breaks[i])
            .unwrap_or(self.text.len());
        self.pos = end;
        Some(Segment { text: self.text, start, end })
    }
}

// === LineBreaker ===

/// Builder-style configuration for line breaking.
///
/// Without a width only the break opportunities are computed; with one,
/// breaks are chosen greedily so that lines fit.
///
/// # Examples
///
/// ```
/// use unistring::api::LineBreaker;
///
/// let lines = LineBreaker::new().width(10).wrap("the quick brown fox");
/// assert_eq!(lines, ["the quick ", "brown fox"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineBreaker {
    width: Option<i32>,
    start_column: i32,
    at_end_columns: i32,
    encoding: String,
    overrides: Option<Vec<UcBreak>>,
    cr_before_lf: bool,
}

impl Default for LineBreaker {
    fn default() -> Self {
        LineBreaker::new()
    }
}

impl LineBreaker {
    pub fn new() -> Self {
        LineBreaker {
            width: None,
            start_column: 0,
            at_end_columns: 0,
            encoding: "UTF-8".to_string(),
            overrides: None,
            cr_before_lf: true,
        }
    }

    /// Fit lines into `columns` columns.
    pub fn width(mut self, columns: i32) -> Self {
        self.width = Some(columns);
        self
    }

    /// Column the first line starts at.
    pub fn start_column(mut self, column: i32) -> Self {
        self.start_column = column;
        self
    }

    /// Columns to keep free after the last line.
    pub fn at_end_columns(mut self, columns: i32) -> Self {
        self.at_end_columns = columns;
        self
    }

    /// Encoding whose conventions decide ambiguous widths and classes.
    pub fn encoding(mut self, encoding: &str) -> Self {
        self.encoding = encoding.to_string();
        self
    }

    /// Per-byte values that replace the computed ones where not
    /// [`UcBreak::Undefined`].
    pub fn overrides(mut self, overrides: Vec<UcBreak>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Report the CR of a CR LF pair as [`UcBreak::CrBeforeLf`] (default)
    /// instead of [`UcBreak::Prohibited`].
    pub fn cr_before_lf(mut self, yes: bool) -> Self {
        self.cr_before_lf = yes;
        self
    }

    /// Break classification of every byte of `s` and the column the text
    /// ends at.
    pub fn breaks_with_end_column(&self, s: &str) -> (Vec<UcBreak>, i32) {
        let bytes = s.as_bytes();
        let mut out = vec![UcBreak::Prohibited; bytes.len()];
        match self.width {
            Some(width) => {
                let linebreaks = if self.cr_before_lf { u8_width_linebreaks_v2 } else { u8_width_linebreaks };
                let column = linebreaks(
                    bytes,
                    width,
                    self.start_column,
                    self.at_end_columns,
                    self.overrides.as_deref(),
                    &self.encoding,
                    &mut out,
                );
                (out, column)
            }
            None => {
                if self.cr_before_lf {
                    u8_possible_linebreaks_v2(bytes, &self.encoding, &mut out);
                } else {
                    u8_possible_linebreaks(bytes, &self.encoding, &mut out);
                }
                if let Some(overrides) = &self.overrides {
                    for (o, &v) in out.iter_mut().zip(overrides) {
                        if v != UcBreak::Undefined {
                            *o = v;
                        }
                    }
                }
                (out, self.start_column)
            }
        }
    }

    pub fn breaks(&self, s: &str) -> Vec<UcBreak> {
        self.breaks_with_end_column(s).0
    }

    /// Column after the last character, once `s` has been broken into lines.
    pub fn end_column(&self, s: &str) -> i32 {
        self.breaks_with_end_column(s).1
    }

    /// Splits `s` into lines at the chosen breaks. Line terminators stay at
    /// the end of their line.
    pub fn wrap<'t>(&self, s: &'t str) -> Vec<&'t str> {
        let bytes = s.as_bytes();
        let breaks = self.breaks(s);
        let mut lines = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let (_, n) = mbtouc(&bytes[i..]);
            match breaks[i] {
                UcBreak::Possible | UcBreak::Hyphenation if i > start => {
                    lines.push(&s[start..i]);
                    start = i;
                }
                UcBreak::Mandatory => {
                    lines.push(&s[start..i + n]);
                    start = i + n;
                }
                _ => {}
            }
            i += n;
        }
        if start < bytes.len() {
            lines.push(&s[start..]);
        }
        lines
    }
}

// === Converter ===

/// Builder-style converter between two encodings.
///
/// # Examples
///
/// ```
/// use unistring::api::Converter;
/// use unistring::uniconv::IconvEhandler;
///
/// let latin1 = Converter::new("UTF-8", "ISO-8859-1").convert("café".as_bytes()).unwrap();
/// assert_eq!(latin1, b"caf\xE9");
///
/// let lossy = Converter::new("UTF-8", "ISO-8859-1")
///     .handler(IconvEhandler::QuestionMark)
///     .convert("5€".as_bytes())
///     .unwrap();
/// assert_eq!(lossy, b"5?");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    from: String,
    to: String,
    handler: IconvEhandler,
}

impl Converter {
    /// A converter that fails on anything it cannot convert.
    pub fn new(from: &str, to: &str) -> Self {
        Converter { from: from.to_string(), to: to.to_string(), handler: IconvEhandler::Error }
    }

    pub fn handler(mut self, handler: IconvEhandler) -> Self {
        self.handler = handler;
        self
    }

    pub fn convert(&self, src: &[u8]) -> Result<Vec<u8>, UnistringError> {
        mem_iconveh(src, &self.from, &self.to, self.handler, None)
    }

    /// Converts `src` and returns, for each output byte, the input offset of
    /// the character it starts or [`crate::uniconv::OFFSET_NONE`].
    pub fn convert_with_offsets(&self, src: &[u8]) -> Result<(Vec<u8>, Vec<usize>), UnistringError> {
        let mut offsets = Vec::new();
        let out = mem_iconveh(src, &self.from, &self.to, self.handler, Some(&mut offsets))?;
        Ok((out, offsets))
    }
}

// === Normalization and comparison ===

/// `s` in normalization form `form`.
pub fn normalize(s: &str, form: UninormT) -> String {
    let mut out = String::with_capacity(s.len());
    normalize_with(form, s.chars(), |c| out.push(c));
    out
}

/// Code point order of `a` and `b` after normalizing both to `form`.
pub fn compare_normalized(a: &str, b: &str, form: UninormT) -> Ordering {
    // UTF-8 byte order is code point order.
    normalize(a, form).cmp(&normalize(b, form))
}

/// Order of `a` and `b` ignoring case and canonical equivalence.
pub fn compare_caseless(a: &str, b: &str) -> Result<Ordering, UnistringError> {
    u8_casecmp(a.as_bytes(), b.as_bytes(), None, Some(UninormT::Nfd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniconv::OFFSET_NONE;

    fn strs<'t>(it: impl Iterator<Item = Segment<'t>>) -> Vec<&'t str> {
        it.filter_map(|s| s.as_str()).collect()
    }

    #[test]
    fn graphemes_forward_and_back() {
        let s = "a\r\nb\u{1F469}\u{200D}\u{1F4BB}";
        assert_eq!(strs(graphemes(s)), vec!["a", "\r\n", "b", "\u{1F469}\u{200D}\u{1F4BB}"]);
        assert_eq!(strs(graphemes(s).rev()), vec!["\u{1F469}\u{200D}\u{1F4BB}", "b", "\r\n", "a"]);
    }

    #[test]
    fn graphemes_meet_in_the_middle() {
        let mut it = graphemes("abc");
        assert_eq!(it.next().map(|g| g.range()), Some(0..1));
        assert_eq!(it.next_back().map(|g| g.range()), Some(2..3));
        assert_eq!(it.next().map(|g| g.range()), Some(1..2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn graphemes_of_bytes() {
        let segs: Vec<Range<usize>> = Graphemes::new(b"a\xFF\xC3").map(|g| g.range()).collect();
        assert_eq!(segs, vec![0..1, 1..2, 2..3]);
        assert_eq!(Graphemes::new(b"\xFF").next().and_then(|g| g.as_str()), None);
    }

    #[test]
    fn word_segments() {
        assert_eq!(strs(words("Hello, world!")), vec!["Hello", ",", " ", "world", "!"]);
        assert_eq!(words("").count(), 0);
    }

    #[test]
    fn line_breaks_without_width() {
        let b = LineBreaker::new().breaks("a b\r\nc");
        assert_eq!(b[2], UcBreak::Possible);
        assert_eq!(b[3], UcBreak::CrBeforeLf);
        assert_eq!(b[4], UcBreak::Mandatory);
        let b = LineBreaker::new().cr_before_lf(false).breaks("a b\r\nc");
        assert_eq!(b[3], UcBreak::Prohibited);
    }

    #[test]
    fn wrap_keeps_terminators() {
        assert_eq!(LineBreaker::new().wrap("one two\nthree"), vec!["one ", "two\n", "three"]);
        assert_eq!(LineBreaker::new().width(80).wrap("one two\r\nthree"), vec!["one two\r\n", "three"]);
    }

    #[test]
    fn wrap_to_width() {
        let lb = LineBreaker::new().width(7);
        assert_eq!(lb.wrap("aaa bbb ccc ddd"), vec!["aaa ", "bbb ", "ccc ddd"]);
        assert_eq!(lb.end_column("aaa bbb ccc ddd"), 7);
    }

    #[test]
    fn overrides_apply() {
        let mut overrides = vec![UcBreak::Undefined; 3];
        overrides[1] = UcBreak::Possible;
        let lb = LineBreaker::new().overrides(overrides);
        assert_eq!(lb.wrap("abc"), vec!["a", "bc"]);
    }

    #[test]
    fn converter_offsets() {
        let (out, offsets) = Converter::new("ISO-8859-1", "UTF-8").convert_with_offsets(b"\xE9a").unwrap();
        assert_eq!(out, "éa".as_bytes());
        assert_eq!(offsets, vec![0, OFFSET_NONE, 1]);
        assert!(Converter::new("UTF-8", "NOPE").convert(b"x").is_err());
    }

    #[test]
    fn normalization_helpers() {
        assert_eq!(normalize("e\u{301}", UninormT::Nfc), "é");
        assert_eq!(compare_normalized("é", "e\u{301}", UninormT::Nfd), Ordering::Equal);
        assert_eq!(compare_normalized("a", "b", UninormT::Nfc), Ordering::Less);
        assert_eq!(normalize("\u{1E030}ﬁ", UninormT::Nfkc), "\u{1E030}fi");
        assert_eq!(compare_caseless("STRASSE", "straße"), Ok(Ordering::Equal));
        assert_eq!(compare_caseless("Å", "a\u{30A}"), Ok(Ordering::Equal));
        assert_eq!(compare_caseless("abc", "ABD"), Ok(Ordering::Less));
    }
}

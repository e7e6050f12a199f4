// unilbrk/mod.rs - Line breaking (UAX #14).
//
//! Line break opportunities and width-constrained line filling.
//!
//! `out[i]` describes the position before unit `i`, except that line
//! terminators carry `Mandatory` (or `CrBeforeLf`) on themselves. The
//! `encoding` argument selects how ambiguous characters are treated: under
//! a CJK legacy encoding they behave as ideographs and take two columns.
//!
//! The `_v2` functions report the CR of a CR LF pair as
//! [`UcBreak::CrBeforeLf`]; the older entry points report it as
//! [`UcBreak::Prohibited`].
//!
//! # Panics
//!
//! Every function here panics unless `out.len() == s.len()`. An `overrides`
//! table may be shorter than `s`; missing entries count as
//! [`UcBreak::Undefined`].

mod possible;
mod width;

use crate::uniconv::{self, LocaleView};

/// Classification of a position in a string for line breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum UcBreak {
    /// No value; only meaningful in override tables.
    #[default]
    Undefined,
    Prohibited,
    Possible,
    /// The character is a line terminator.
    Mandatory,
    /// A break is possible and a hyphen must be shown (after U+00AD).
    Hyphenation,
    /// The character is a CR followed by LF.
    CrBeforeLf,
}

pub const UC_BREAK_UNDEFINED: UcBreak = UcBreak::Undefined;
pub const UC_BREAK_PROHIBITED: UcBreak = UcBreak::Prohibited;
pub const UC_BREAK_POSSIBLE: UcBreak = UcBreak::Possible;
pub const UC_BREAK_MANDATORY: UcBreak = UcBreak::Mandatory;
pub const UC_BREAK_HYPHENATION: UcBreak = UcBreak::Hyphenation;
pub const UC_BREAK_CR_BEFORE_LF: UcBreak = UcBreak::CrBeforeLf;

macro_rules! linebreak_functions {
    ($u:ty, $possible:ident, $possible_v2:ident, $width:ident, $width_v2:ident) => {
        pub fn $possible(s: &[$u], encoding: &str, out: &mut [UcBreak]) {
            possible::possible_linebreaks(s, encoding, false, out)
        }

        pub fn $possible_v2(s: &[$u], encoding: &str, out: &mut [UcBreak]) {
            possible::possible_linebreaks(s, encoding, true, out)
        }

        #[allow(clippy::too_many_arguments)]
        pub fn $width(
            s: &[$u],
            width: i32,
            start_column: i32,
            at_end_columns: i32,
            overrides: Option<&[UcBreak]>,
            encoding: &str,
            out: &mut [UcBreak],
        ) -> i32 {
            width::width_linebreaks(s, width, start_column, at_end_columns, overrides, encoding, false, out)
        }

        #[allow(clippy::too_many_arguments)]
        pub fn $width_v2(
            s: &[$u],
            width: i32,
            start_column: i32,
            at_end_columns: i32,
            overrides: Option<&[UcBreak]>,
            encoding: &str,
            out: &mut [UcBreak],
        ) -> i32 {
            width::width_linebreaks(s, width, start_column, at_end_columns, overrides, encoding, true, out)
        }
    };
}

linebreak_functions!(u8, u8_possible_linebreaks, u8_possible_linebreaks_v2, u8_width_linebreaks, u8_width_linebreaks_v2);
linebreak_functions!(u16, u16_possible_linebreaks, u16_possible_linebreaks_v2, u16_width_linebreaks, u16_width_linebreaks_v2);
linebreak_functions!(u32, u32_possible_linebreaks, u32_possible_linebreaks_v2, u32_width_linebreaks, u32_width_linebreaks_v2);

// === Strings in a legacy encoding ===

fn ulc_possible(s: &[u8], encoding: &str, cr_before_lf: bool, out: &mut [UcBreak]) {
    uniconv::ulc_breaks_in(encoding, s, out, UcBreak::Prohibited, |utf8, flags| {
        possible::possible_linebreaks(utf8, encoding, cr_before_lf, flags)
    });
}

/// Break opportunities of `s`, which is encoded in `encoding`.
pub fn ulc_possible_linebreaks(s: &[u8], encoding: &str, out: &mut [UcBreak]) {
    ulc_possible(s, encoding, false, out)
}

pub fn ulc_possible_linebreaks_v2(s: &[u8], encoding: &str, out: &mut [UcBreak]) {
    ulc_possible(s, encoding, true, out)
}

#[allow(clippy::too_many_arguments)]
fn ulc_width(
    s: &[u8],
    width: i32,
    start_column: i32,
    at_end_columns: i32,
    overrides: Option<&[UcBreak]>,
    encoding: &str,
    cr_before_lf: bool,
    out: &mut [UcBreak],
) -> i32 {
    assert_eq!(out.len(), s.len(), "one break value per input unit");
    let view = LocaleView::new(encoding, s);
    let overrides = overrides.map(|o| view.gather(o, UcBreak::Undefined));
    let mut flags = vec![UcBreak::Undefined; view.utf8().len()];
    let column = width::width_linebreaks(
        view.utf8(),
        width,
        start_column,
        at_end_columns,
        overrides.as_deref(),
        encoding,
        cr_before_lf,
        &mut flags,
    );
    view.scatter(&flags, out, UcBreak::Prohibited);
    column
}

/// Width-constrained breaks of `s`, which is encoded in `encoding`.
/// `overrides` is indexed by byte of `s`.
#[allow(clippy::too_many_arguments)]
pub fn ulc_width_linebreaks(
    s: &[u8],
    width: i32,
    start_column: i32,
    at_end_columns: i32,
    overrides: Option<&[UcBreak]>,
    encoding: &str,
    out: &mut [UcBreak],
) -> i32 {
    ulc_width(s, width, start_column, at_end_columns, overrides, encoding, false, out)
}

#[allow(clippy::too_many_arguments)]
pub fn ulc_width_linebreaks_v2(
    s: &[u8],
    width: i32,
    start_column: i32,
    at_end_columns: i32,
    overrides: Option<&[UcBreak]>,
    encoding: &str,
    out: &mut [UcBreak],
) -> i32 {
    ulc_width(s, width, start_column, at_end_columns, overrides, encoding, true, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_characters_follow_the_encoding() {
        let s = "§×·".as_bytes();
        let mut gb18030 = vec![UcBreak::Undefined; s.len()];
        let mut gb2312 = vec![UcBreak::Undefined; s.len()];
        u8_possible_linebreaks(s, "GB18030", &mut gb18030);
        u8_possible_linebreaks(s, "GB2312", &mut gb2312);
        // Letters hold together; ideographs may be broken between.
        assert_eq!(gb18030[2], UcBreak::Prohibited);
        assert_eq!(gb2312[2], UcBreak::Possible);
        assert_ne!(gb18030, gb2312);
    }

    #[test]
    fn widths_by_unit() {
        let s: Vec<u32> = "ab cd".chars().map(|c| c as u32).collect();
        let mut out = vec![UcBreak::Undefined; s.len()];
        assert_eq!(u32_width_linebreaks(&s, 3, 0, 0, None, "UTF-8", &mut out), 2);
        assert_eq!(out[3], UcBreak::Possible);

        let w: Vec<u16> = "a\r\nb".encode_utf16().collect();
        let mut out = vec![UcBreak::Undefined; w.len()];
        u16_possible_linebreaks_v2(&w, "UTF-8", &mut out);
        assert_eq!(out[1], UcBreak::CrBeforeLf);
        u16_possible_linebreaks(&w, "UTF-8", &mut out);
        assert_eq!(out[1], UcBreak::Prohibited);
    }

    #[test]
    fn legacy_encoded_input() {
        // "a b" followed by e-acute in ISO-8859-1.
        let s = [b'a', b' ', 0xE9, b'x'];
        let mut out = vec![UcBreak::Undefined; s.len()];
        ulc_possible_linebreaks(&s, "ISO-8859-1", &mut out);
        assert_eq!(out, vec![
            UcBreak::Prohibited,
            UcBreak::Prohibited,
            UcBreak::Possible,
            UcBreak::Prohibited
        ]);

        let mut out = vec![UcBreak::Undefined; s.len()];
        let col = ulc_width_linebreaks(&s, 2, 0, 0, None, "ISO-8859-1", &mut out);
        assert_eq!(out[2], UcBreak::Possible);
        assert_eq!(col, 2);
    }

    #[test]
    #[should_panic(expected = "one break value per input unit")]
    fn possible_breaks_need_one_value_per_unit() {
        let mut out = [UcBreak::Undefined; 2];
        u8_possible_linebreaks(b"a b", "UTF-8", &mut out);
    }

    #[test]
    #[should_panic(expected = "one break value per input unit")]
    fn legacy_width_breaks_need_one_value_per_byte() {
        let mut out = [UcBreak::Undefined; 5];
        ulc_width_linebreaks(&[b'a', b' ', 0xE9, b'x'], 2, 0, 0, None, "ISO-8859-1", &mut out);
    }

    #[test]
    fn short_overrides_leave_the_rest_undefined() {
        let s = [b'a', b' ', 0xE9, b'x'];
        let overrides = [UcBreak::Undefined, UcBreak::Undefined, UcBreak::Prohibited];
        let mut out = vec![UcBreak::Undefined; s.len()];
        ulc_width_linebreaks(&s, 80, 0, 0, Some(&overrides), "ISO-8859-1", &mut out);
        assert_eq!(out, vec![UcBreak::Prohibited; 4]);
    }
}

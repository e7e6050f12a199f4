// unilbrk/width.rs - Fitting break opportunities to a column width.

use super::possible::possible_linebreaks;
use super::UcBreak;
use crate::unistr::{mbtouc, UtfUnit};
use crate::uniwidth::uc_width;

/// Greedy line filling over the opportunities of [`possible_linebreaks`].
///
/// On return `out` holds `Possible` only where a line has to be broken to
/// stay within `width` columns, `Mandatory`/`CrBeforeLf` at the line
/// terminators and `Prohibited` everywhere else. Entries of `overrides`
/// other than `Undefined` replace the computed opportunity first. Returns
/// the column after the last character.
#[allow(clippy::too_many_arguments)]
pub(crate) fn width_linebreaks<U: UtfUnit>(
    s: &[U],
    width: i32,
    start_column: i32,
    at_end_columns: i32,
    overrides: Option<&[UcBreak]>,
    encoding: &str,
    cr_before_lf: bool,
    out: &mut [UcBreak],
) -> i32 {
    possible_linebreaks(s, encoding, cr_before_lf, out);

    let mut last: Option<(usize, UcBreak)> = None;
    let mut last_column = start_column;
    let mut piece_width = 0;
    let mut i = 0;
    while i < s.len() {
        let (uc, n) = mbtouc(&s[i..]);
        if let Some(o) = overrides.and_then(|o| o.get(i)) {
            if *o != UcBreak::Undefined {
                out[i] = *o;
            }
        }

        let brk = out[i];
        let is_opportunity = matches!(brk, UcBreak::Possible | UcBreak::Hyphenation);
        let is_newline = matches!(brk, UcBreak::Mandatory | UcBreak::CrBeforeLf);
        if is_opportunity || is_newline {
            // A piece of text ends here; move it to a new line if it overflows.
            if let Some((at, kind)) = last {
                if last_column + piece_width > width {
                    out[at] = kind;
                    last_column = 0;
                }
            }
        }

        if is_newline {
            last = None;
            last_column = 0;
            piece_width = 0;
        } else {
            if is_opportunity {
                last = Some((i, brk));
                last_column += piece_width;
                piece_width = 0;
            }
            out[i] = UcBreak::Prohibited;
            let w = uc_width(uc, encoding);
            if w >= 0 {
                piece_width += w;
            }
        }
        i += n;
    }

    if let Some((at, kind)) = last {
        if last_column + piece_width + at_end_columns > width {
            out[at] = kind;
            last_column = 0;
        }
    }
    last_column + piece_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use UcBreak::*;

    fn wrap(s: &str, width: i32) -> (Vec<usize>, i32) {
        let mut out = vec![Undefined; s.len()];
        let end = width_linebreaks(s.as_bytes(), width, 0, 0, None, "UTF-8", true, &mut out);
        let at = out.iter().enumerate().filter(|(_, b)| **b == Possible).map(|(i, _)| i).collect();
        (at, end)
    }

    #[test]
    fn fits_without_breaks() {
        assert_eq!(wrap("hello world", 20), (vec![], 11));
    }

    #[test]
    fn breaks_before_overflowing_word() {
        assert_eq!(wrap("hello world", 8), (vec![6], 5));
        // Trailing spaces count towards the width.
        assert_eq!(wrap("aaa bbb ccc ddd", 7), (vec![4, 8], 7));
    }

    #[test]
    fn long_word_stays_whole() {
        assert_eq!(wrap("abcdefghij k", 4), (vec![11], 1));
    }

    #[test]
    fn start_and_end_columns() {
        let s = "aa bb";
        let mut out = vec![Undefined; s.len()];
        assert_eq!(width_linebreaks(s.as_bytes(), 6, 3, 0, None, "UTF-8", true, &mut out), 2);
        assert_eq!(out[3], Possible);

        let mut out = vec![Undefined; s.len()];
        assert_eq!(width_linebreaks(s.as_bytes(), 6, 0, 2, None, "UTF-8", true, &mut out), 2);
        assert_eq!(out[3], Possible);
    }

    #[test]
    fn newlines_reset_the_column() {
        let s = "aaaa\nbb cc";
        let mut out = vec![Undefined; s.len()];
        let end = width_linebreaks(s.as_bytes(), 5, 0, 0, None, "UTF-8", true, &mut out);
        assert_eq!(out[4], Mandatory);
        assert!(out.iter().all(|b| *b != Possible));
        assert_eq!(end, 5);
    }

    #[test]
    fn overrides_win() {
        let s = "ab cd";
        let mut overrides = vec![Undefined; s.len()];
        overrides[1] = Possible;
        overrides[3] = Prohibited;
        let mut out = vec![Undefined; s.len()];
        width_linebreaks(s.as_bytes(), 3, 0, 0, Some(&overrides), "UTF-8", true, &mut out);
        assert_eq!(out[1], Possible);
        assert_eq!(out[3], Prohibited);
    }

    #[test]
    fn wide_characters_count_double() {
        // Five ideographs, two columns each.
        let (at, end) = wrap("一二三四五", 6);
        assert_eq!(at, vec![9]);
        assert_eq!(end, 4);
    }
}

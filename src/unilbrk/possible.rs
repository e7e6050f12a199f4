// unilbrk/possible.rs - Line break opportunities (UAX #14, LB2 - LB31).

use super::UcBreak;
use crate::unictype::{
    uc_east_asian_width, uc_general_category, uc_is_extended_pictographic, uc_linebreak_property,
    EastAsianWidth, LineBreakClass, UcGeneralCategory,
};
use crate::unistr::{mbtouc, UtfUnit};
use crate::unitypes::Ucs4;
use crate::uniwidth::is_cjk_encoding;

use LineBreakClass as Lb;

const SOFT_HYPHEN: Ucs4 = 0x00AD;

/// LB1: maps the classes UAX #14 leaves to the implementation.
pub(crate) fn resolve_class(uc: Ucs4, cjk: bool) -> Lb {
    match uc_linebreak_property(uc) {
        Lb::Ai => {
            if cjk {
                Lb::Id
            } else {
                Lb::Al
            }
        }
        Lb::Sa => {
            if uc_general_category(uc).intersects(UcGeneralCategory::MN | UcGeneralCategory::MC) {
                Lb::Cm
            } else {
                Lb::Al
            }
        }
        Lb::Sg | Lb::Xx => Lb::Al,
        Lb::Cj => Lb::Ns,
        other => other,
    }
}

fn is_wide(uc: Ucs4) -> bool {
    matches!(
        uc_east_asian_width(uc),
        EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
    )
}

#[derive(Debug)]
struct State {
    // Last non-space class after LB9/LB10; None until the first non-space
    // character of a line.
    prev: Option<Lb>,
    prev_prev: Option<Lb>,
    // Class of the character right before the current one.
    raw_prev: Option<Lb>,
    spaces: bool,
    ri_count: usize,
    prev_wide: bool,
    prev_pict_unassigned: bool,
    prev_soft_hyphen: bool,
}

impl State {
    fn new() -> Self {
        State {
            prev: None,
            prev_prev: None,
            raw_prev: None,
            spaces: false,
            ri_count: 0,
            prev_wide: false,
            prev_pict_unassigned: false,
            prev_soft_hyphen: false,
        }
    }

    fn newline(&mut self, class: Lb) {
        *self = State::new();
        self.raw_prev = Some(class);
    }

    /// Decides the break before a character of class `c` and advances.
    fn step(&mut self, uc: Ucs4, c: Lb) -> UcBreak {
        // LB7
        if c == Lb::Sp {
            self.spaces = true;
            self.raw_prev = Some(c);
            return UcBreak::Prohibited;
        }
        let Some(p) = self.prev else {
            // Start of a line. LB2 and LB4 - LB6 leave nothing to break
            // before the first character; after leading spaces LB18 does,
            // unless LB7, LB11 or LB13 forbid it.
            let n = if matches!(c, Lb::Cm | Lb::Zwj) { Lb::Al } else { c };
            let brk = if self.spaces && !matches!(n, Lb::Zw | Lb::Wj | Lb::Cl | Lb::Cp | Lb::Ex | Lb::Is | Lb::Sy) {
                UcBreak::Possible
            } else {
                UcBreak::Prohibited
            };
            self.advance(uc, n, c);
            return brk;
        };
        if c == Lb::Zw {
            self.advance(uc, c, c);
            return UcBreak::Prohibited;
        }
        // LB8
        if p == Lb::Zw {
            self.advance(uc, if matches!(c, Lb::Cm | Lb::Zwj) { Lb::Al } else { c }, c);
            return UcBreak::Possible;
        }
        // LB8a
        let after_zwj = self.raw_prev == Some(Lb::Zwj);
        // LB9: combining marks take the class of their base.
        if matches!(c, Lb::Cm | Lb::Zwj) && !self.spaces {
            self.raw_prev = Some(c);
            return UcBreak::Prohibited;
        }
        // LB10
        let n = if matches!(c, Lb::Cm | Lb::Zwj) { Lb::Al } else { c };
        let brk = if after_zwj {
            UcBreak::Prohibited
        } else {
            self.pair(p, n, uc)
        };
        let brk = if brk == UcBreak::Possible && self.prev_soft_hyphen && !self.spaces {
            UcBreak::Hyphenation
        } else {
            brk
        };
        self.advance(uc, n, c);
        brk
    }

    fn advance(&mut self, uc: Ucs4, n: Lb, raw: Lb) {
        self.ri_count = match (n, self.spaces) {
            (Lb::Ri, false) => self.ri_count + 1,
            (Lb::Ri, true) => 1,
            _ => 0,
        };
        self.prev_prev = self.prev;
        self.prev = Some(n);
        self.raw_prev = Some(raw);
        self.spaces = false;
        self.prev_wide = is_wide(uc);
        self.prev_pict_unassigned = uc_is_extended_pictographic(uc)
            && uc_general_category(uc) == UcGeneralCategory::CN;
        self.prev_soft_hyphen = uc == SOFT_HYPHEN;
    }

    // LB11 - LB31 for a boundary between the classes `p` and `n`, possibly
    // separated by spaces.
    fn pair(&self, p: Lb, n: Lb, uc: Ucs4) -> UcBreak {
        use UcBreak::{Possible, Prohibited};

        let spaces = self.spaces;
        // LB11
        if n == Lb::Wj || (p == Lb::Wj && !spaces) {
            return Prohibited;
        }
        // LB12, LB12a
        if !spaces && (p == Lb::Gl || (n == Lb::Gl && !matches!(p, Lb::Ba | Lb::Hy))) {
            return Prohibited;
        }
        // LB13 - LB17 hold across spaces.
        if matches!(n, Lb::Cl | Lb::Cp | Lb::Ex | Lb::Is | Lb::Sy) {
            return Prohibited;
        }
        if p == Lb::Op
            || (p == Lb::Qu && n == Lb::Op)
            || (matches!(p, Lb::Cl | Lb::Cp) && n == Lb::Ns)
            || (p == Lb::B2 && n == Lb::B2)
        {
            return Prohibited;
        }
        // LB18
        if spaces {
            return Possible;
        }
        let alpha = |c: Lb| matches!(c, Lb::Al | Lb::Hl);
        let ideo = |c: Lb| matches!(c, Lb::Id | Lb::Eb | Lb::Em);
        let hangul = |c: Lb| matches!(c, Lb::Jl | Lb::Jv | Lb::Jt | Lb::H2 | Lb::H3);
        let joined = match (p, n) {
            // LB19
            (Lb::Qu, _) | (_, Lb::Qu) => true,
            // LB20
            (Lb::Cb, _) | (_, Lb::Cb) => return Possible,
            // LB21
            (_, Lb::Ba | Lb::Hy | Lb::Ns) | (Lb::Bb, _) => true,
            // LB21a
            (Lb::Hy | Lb::Ba, _) if self.prev_prev == Some(Lb::Hl) => true,
            // LB21b
            (Lb::Sy, Lb::Hl) => true,
            // LB22
            (_, Lb::In) => true,
            // LB23
            (a, Lb::Nu) if alpha(a) => true,
            (Lb::Nu, b) if alpha(b) => true,
            // LB23a
            (Lb::Pr, b) if ideo(b) => true,
            (a, Lb::Po) if ideo(a) => true,
            // LB24
            (Lb::Pr | Lb::Po, b) if alpha(b) => true,
            (a, Lb::Pr | Lb::Po) if alpha(a) => true,
            // LB25
            (Lb::Cl | Lb::Cp | Lb::Nu, Lb::Po | Lb::Pr) => true,
            (Lb::Po | Lb::Pr, Lb::Op | Lb::Nu) => true,
            (Lb::Hy | Lb::Is | Lb::Nu | Lb::Sy, Lb::Nu) => true,
            // LB26
            (Lb::Jl, Lb::Jl | Lb::Jv | Lb::H2 | Lb::H3) => true,
            (Lb::Jv | Lb::H2, Lb::Jv | Lb::Jt) => true,
            (Lb::Jt | Lb::H3, Lb::Jt) => true,
            // LB27
            (a, Lb::Po) if hangul(a) => true,
            (Lb::Pr, b) if hangul(b) => true,
            // LB28
            (a, b) if alpha(a) && alpha(b) => true,
            // LB29
            (Lb::Is, b) if alpha(b) => true,
            // LB30
            (Lb::Al | Lb::Hl | Lb::Nu, Lb::Op) => !is_wide(uc),
            (Lb::Cp, Lb::Al | Lb::Hl | Lb::Nu) => !self.prev_wide,
            // LB30a
            (Lb::Ri, Lb::Ri) => self.ri_count % 2 == 1,
            // LB30b
            (Lb::Eb, Lb::Em) => true,
            (_, Lb::Em) => self.prev_pict_unassigned,
            _ => false,
        };
        if joined {
            Prohibited
        } else {
            Possible
        }
    }
}

struct Item {
    uc: Ucs4,
    class: Lb,
    offset: usize,
    len: usize,
}

/// Classifies every unit of `s`. With `cr_before_lf`, the CR of a CR LF
/// pair is reported as [`UcBreak::CrBeforeLf`], otherwise as prohibited.
pub(crate) fn possible_linebreaks<U: UtfUnit>(s: &[U], encoding: &str, cr_before_lf: bool, out: &mut [UcBreak]) {
    assert_eq!(out.len(), s.len(), "one break value per input unit");
    let cjk = is_cjk_encoding(encoding);
    let mut items = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let (uc, n) = mbtouc(&s[i..]);
        items.push(Item { uc, class: resolve_class(uc, cjk), offset: i, len: n });
        i += n;
    }

    let mut state = State::new();
    for (k, item) in items.iter().enumerate() {
        let brk = match item.class {
            Lb::Bk | Lb::Lf | Lb::Nl => {
                state.newline(item.class);
                UcBreak::Mandatory
            }
            Lb::Cr => {
                state.newline(item.class);
                match items.get(k + 1) {
                    Some(next) if next.class == Lb::Lf => {
                        if cr_before_lf {
                            UcBreak::CrBeforeLf
                        } else {
                            UcBreak::Prohibited
                        }
                    }
                    _ => UcBreak::Mandatory,
                }
            }
            class => state.step(item.uc, class),
        };
        out[item.offset] = brk;
        out[item.offset + 1..item.offset + item.len].fill(UcBreak::Prohibited);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use UcBreak::*;

    fn breaks(s: &str) -> Vec<UcBreak> {
        let mut out = vec![Undefined; s.len()];
        possible_linebreaks(s.as_bytes(), "UTF-8", true, &mut out);
        out
    }

    // Positions where a break is possible, as byte offsets.
    fn opportunities(s: &str) -> Vec<usize> {
        breaks(s)
            .iter()
            .enumerate()
            .filter(|(_, b)| matches!(b, Possible | Hyphenation))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn words_and_spaces() {
        assert_eq!(opportunities("hello world"), vec![6]);
        assert_eq!(opportunities("a  b"), vec![3]);
        assert_eq!(breaks("ab")[0], Prohibited);
    }

    #[test]
    fn leading_spaces() {
        assert_eq!(opportunities(" a"), vec![1]);
        assert_eq!(opportunities("   a b"), vec![3, 5]);
        assert_eq!(opportunities(" \u{300}a"), vec![1]);
        assert_eq!(opportunities(" )"), Vec::<usize>::new());
        assert_eq!(opportunities(" \u{2060}a"), Vec::<usize>::new());
        // The same holds at the start of every line.
        let b = breaks("\u{B} a");
        assert_eq!(b, vec![Mandatory, Prohibited, Possible]);
        assert_eq!(opportunities("x\n  y"), vec![4]);
    }

    #[test]
    fn punctuation() {
        // No break before closing punctuation, after opening.
        assert_eq!(opportunities("(a) b"), vec![4]);
        assert_eq!(opportunities("a, b"), vec![3]);
        assert_eq!(opportunities("well-known"), vec![5]);
        assert_eq!(opportunities("\"quoted\" text"), vec![9]);
    }

    #[test]
    fn numbers() {
        assert_eq!(opportunities("$12.50 now"), vec![7]);
        assert_eq!(opportunities("100%"), Vec::<usize>::new());
    }

    #[test]
    fn newlines_are_mandatory() {
        let b = breaks("a\nb");
        assert_eq!(b, vec![Prohibited, Mandatory, Prohibited]);
        let b = breaks("a\r\nb");
        assert_eq!(b, vec![Prohibited, CrBeforeLf, Mandatory, Prohibited]);
        let mut v1 = vec![Undefined; 4];
        possible_linebreaks("a\r\nb".as_bytes(), "UTF-8", false, &mut v1);
        assert_eq!(v1, vec![Prohibited, Prohibited, Mandatory, Prohibited]);
        assert_eq!(breaks("a\rb")[1], Mandatory);
    }

    #[test]
    fn ideographs_break_anywhere() {
        // Every ideograph is 3 bytes; no break before the comma.
        assert_eq!(opportunities("日本語,中文"), vec![3, 6, 10, 13]);
    }

    #[test]
    fn combining_marks_follow_base() {
        assert_eq!(opportunities("e\u{301} x"), vec![4]);
        // A mark after a space acts as a letter.
        assert_eq!(opportunities("a \u{301}"), vec![2]);
    }

    #[test]
    fn glue_and_zero_width() {
        assert_eq!(opportunities("a\u{A0}b"), Vec::<usize>::new());
        assert_eq!(opportunities("a\u{200B}b"), vec![4]);
        assert_eq!(opportunities("a\u{2060}b"), Vec::<usize>::new());
    }

    #[test]
    fn soft_hyphen() {
        assert_eq!(breaks("ab\u{AD}cd")[4], Hyphenation);
    }

    #[test]
    fn regional_indicators() {
        let s = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}";
        assert_eq!(opportunities(s), vec![8]);
    }

    #[test]
    fn ambiguous_resolution() {
        assert_eq!(resolve_class(0x00A7, false), Lb::Al);
        assert_eq!(resolve_class(0x00A7, true), Lb::Id);
        assert_eq!(resolve_class(0x0E01, false), Lb::Al);
        assert_eq!(resolve_class(0x0E31, false), Lb::Cm);
        assert_eq!(resolve_class(0x3041, false), Lb::Ns);
    }

    #[test]
    fn multi_unit_characters() {
        let s: Vec<u16> = "a 😀".encode_utf16().collect();
        let mut out = vec![Undefined; s.len()];
        possible_linebreaks(&s, "UTF-8", true, &mut out);
        assert_eq!(out, vec![Prohibited, Prohibited, Possible, Prohibited]);
    }
}

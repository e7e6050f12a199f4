// unictype/breakprop.rs - Segmentation classes and East Asian width.
//
// Raw property values consumed by the grapheme, word and line breakers.
// Enum discriminants equal the values stored in the generated tries.

use super::tables::{
    EAST_ASIAN_WIDTH, GRAPHEME_BREAK, LINE_BREAK, PROP_EXTENDED_PICTOGRAPHIC, WORD_BREAK,
};
use crate::unitypes::Ucs4;

// === Grapheme_Cluster_Break ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GraphemeClusterBreak {
    Other = 0,
    Cr = 1,
    Lf = 2,
    Control = 3,
    Extend = 4,
    Prepend = 5,
    SpacingMark = 6,
    L = 7,
    V = 8,
    T = 9,
    Lv = 10,
    Lvt = 11,
    RegionalIndicator = 12,
    Zwj = 13,
}

static GBP_VALUES: [GraphemeClusterBreak; 14] = {
    use GraphemeClusterBreak::*;
    [Other, Cr, Lf, Control, Extend, Prepend, SpacingMark, L, V, T, Lv, Lvt, RegionalIndicator, Zwj]
};

#[inline]
pub fn uc_graphemeclusterbreak_property(uc: Ucs4) -> GraphemeClusterBreak {
    GBP_VALUES
        .get(GRAPHEME_BREAK.get(uc) as usize)
        .copied()
        .unwrap_or(GraphemeClusterBreak::Other)
}

/// Extended_Pictographic, used by the emoji rules of all three breakers.
#[inline]
pub fn uc_is_extended_pictographic(uc: Ucs4) -> bool {
    PROP_EXTENDED_PICTOGRAPHIC.contains(uc)
}

// === Word_Break ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WordBreakProperty {
    Other = 0,
    Katakana = 1,
    ALetter = 2,
    MidNumLet = 3,
    MidLetter = 4,
    MidNum = 5,
    Numeric = 6,
    ExtendNumLet = 7,
    Extend = 8,
    Format = 9,
    Newline = 10,
    Cr = 11,
    Lf = 12,
    RegionalIndicator = 13,
    DoubleQuote = 14,
    SingleQuote = 15,
    HebrewLetter = 16,
    Zwj = 17,
    WSegSpace = 22,
}

#[inline]
pub fn uc_wordbreak_property(uc: Ucs4) -> WordBreakProperty {
    use WordBreakProperty::*;
    match WORD_BREAK.get(uc) {
        1 => Katakana,
        2 => ALetter,
        3 => MidNumLet,
        4 => MidLetter,
        5 => MidNum,
        6 => Numeric,
        7 => ExtendNumLet,
        8 => Extend,
        9 => Format,
        10 => Newline,
        11 => Cr,
        12 => Lf,
        13 => RegionalIndicator,
        14 => DoubleQuote,
        15 => SingleQuote,
        16 => HebrewLetter,
        17 => Zwj,
        22 => WSegSpace,
        _ => Other,
    }
}

// === Line_Break ===

/// Line_Break classes (UAX #14), unresolved: AI, SA, SG, XX and CJ are
/// returned as stored and resolved by the line breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineBreakClass {
    Bk = 0,
    Cr,
    Lf,
    Cm,
    Wj,
    Zw,
    Gl,
    Sp,
    B2,
    Ba,
    Bb,
    Hy,
    Cb,
    Cl,
    Cp,
    Ex,
    In,
    Ns,
    Op,
    Qu,
    Is,
    Nu,
    Po,
    Pr,
    Sy,
    Ai,
    Al,
    Cj,
    Eb,
    Em,
    H2,
    H3,
    Hl,
    Id,
    Jl,
    Jv,
    Jt,
    Ri,
    Sa,
    Sg,
    Xx,
    Nl,
    Zwj,
}

static LBP_VALUES: [LineBreakClass; 43] = {
    use LineBreakClass::*;
    [
        Bk, Cr, Lf, Cm, Wj, Zw, Gl, Sp, B2, Ba, Bb, Hy, Cb, Cl, Cp, Ex, In, Ns, Op, Qu, Is, Nu,
        Po, Pr, Sy, Ai, Al, Cj, Eb, Em, H2, H3, Hl, Id, Jl, Jv, Jt, Ri, Sa, Sg, Xx, Nl, Zwj,
    ]
};

#[inline]
pub fn uc_linebreak_property(uc: Ucs4) -> LineBreakClass {
    LBP_VALUES
        .get(LINE_BREAK.get(uc) as usize)
        .copied()
        .unwrap_or(LineBreakClass::Xx)
}

// === East_Asian_Width ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EastAsianWidth {
    Neutral = 0,
    Ambiguous,
    Halfwidth,
    Wide,
    Fullwidth,
    Narrow,
}

#[inline]
pub fn uc_east_asian_width(uc: Ucs4) -> EastAsianWidth {
    use EastAsianWidth::*;
    match EAST_ASIAN_WIDTH.get(uc) {
        1 => Ambiguous,
        2 => Halfwidth,
        3 => Wide,
        4 => Fullwidth,
        5 => Narrow,
        _ => Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grapheme_classes() {
        use GraphemeClusterBreak::*;
        assert_eq!(uc_graphemeclusterbreak_property('\r' as u32), Cr);
        assert_eq!(uc_graphemeclusterbreak_property('\n' as u32), Lf);
        assert_eq!(uc_graphemeclusterbreak_property(0x0301), Extend);
        assert_eq!(uc_graphemeclusterbreak_property(0x200D), Zwj);
        assert_eq!(uc_graphemeclusterbreak_property(0x1100), L);
        assert_eq!(uc_graphemeclusterbreak_property(0xAC00), Lv);
        assert_eq!(uc_graphemeclusterbreak_property(0xAC01), Lvt);
        assert_eq!(uc_graphemeclusterbreak_property(0x1F1E6), RegionalIndicator);
        assert_eq!(uc_graphemeclusterbreak_property(0x0903), SpacingMark);
        assert_eq!(uc_graphemeclusterbreak_property(0x0600), Prepend);
        assert_eq!(uc_graphemeclusterbreak_property('a' as u32), Other);
        assert!(uc_is_extended_pictographic(0x1F600));
        assert!(!uc_is_extended_pictographic('a' as u32));
    }

    #[test]
    fn word_classes() {
        use WordBreakProperty::*;
        assert_eq!(uc_wordbreak_property('a' as u32), ALetter);
        assert_eq!(uc_wordbreak_property('1' as u32), Numeric);
        assert_eq!(uc_wordbreak_property('\'' as u32), SingleQuote);
        assert_eq!(uc_wordbreak_property('"' as u32), DoubleQuote);
        assert_eq!(uc_wordbreak_property('.' as u32), MidNumLet);
        assert_eq!(uc_wordbreak_property(':' as u32), MidLetter);
        assert_eq!(uc_wordbreak_property(',' as u32), MidNum);
        assert_eq!(uc_wordbreak_property('_' as u32), ExtendNumLet);
        assert_eq!(uc_wordbreak_property(0x30A2), Katakana);
        assert_eq!(uc_wordbreak_property(0x05D0), HebrewLetter);
        assert_eq!(uc_wordbreak_property(' ' as u32), WSegSpace);
        assert_eq!(uc_wordbreak_property(0x00A0), Other);
        assert_eq!(uc_wordbreak_property(0x4E2D), Other);
    }

    #[test]
    fn line_classes() {
        use LineBreakClass::*;
        assert_eq!(uc_linebreak_property('a' as u32), Al);
        assert_eq!(uc_linebreak_property(' ' as u32), Sp);
        assert_eq!(uc_linebreak_property('\n' as u32), Lf);
        assert_eq!(uc_linebreak_property(',' as u32), Is);
        assert_eq!(uc_linebreak_property(0x4E2D), Id);
        assert_eq!(uc_linebreak_property(0xD55C), H3);
        assert_eq!(uc_linebreak_property(0x03B1), Al);
        assert_eq!(uc_linebreak_property(0x00A7), Ai);
        assert_eq!(uc_linebreak_property(0x0E01), Sa);
        assert_eq!(uc_linebreak_property(0x3041), Cj);
        assert_eq!(uc_linebreak_property(0x0378), Xx);
        assert_eq!(uc_linebreak_property(0x110000), Xx);
    }

    #[test]
    fn east_asian_widths() {
        assert_eq!(uc_east_asian_width('a' as u32), EastAsianWidth::Narrow);
        assert_eq!(uc_east_asian_width(0x4E2D), EastAsianWidth::Wide);
        assert_eq!(uc_east_asian_width(0xFF21), EastAsianWidth::Fullwidth);
        assert_eq!(uc_east_asian_width(0xFF61), EastAsianWidth::Halfwidth);
        assert_eq!(uc_east_asian_width(0x03B1), EastAsianWidth::Ambiguous);
        assert_eq!(uc_east_asian_width(0x0300), EastAsianWidth::Ambiguous);
        assert_eq!(uc_east_asian_width(0x05D0), EastAsianWidth::Neutral);
    }
}

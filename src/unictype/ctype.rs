// unictype/ctype.rs - <ctype.h>-style classification of code points.
//
// Digits and hex digits are ASCII only, as for the C functions; letters,
// spaces and punctuation follow the Unicode properties.

use super::categ::{uc_general_category, UcGeneralCategory};
use super::tables::PROP_ALPHABETIC;
use crate::unicase::{uc_tolower, uc_toupper};
use crate::unitypes::Ucs4;

// No-break spaces are excluded from isspace/isblank.
#[inline]
fn is_nobreak_space(uc: Ucs4) -> bool {
    matches!(uc, 0x00A0 | 0x2007 | 0x202F)
}

pub fn uc_is_alpha(uc: Ucs4) -> bool {
    PROP_ALPHABETIC.contains(uc)
}

pub fn uc_is_digit(uc: Ucs4) -> bool {
    (0x30..=0x39).contains(&uc)
}

pub fn uc_is_xdigit(uc: Ucs4) -> bool {
    uc_is_digit(uc) || (0x41..=0x46).contains(&uc) || (0x61..=0x66).contains(&uc)
}

pub fn uc_is_alnum(uc: Ucs4) -> bool {
    uc_is_alpha(uc) || uc_is_digit(uc)
}

pub fn uc_is_space(uc: Ucs4) -> bool {
    matches!(uc, 0x09..=0x0D | 0x20)
        || (!is_nobreak_space(uc) && uc_general_category(uc).intersects(UcGeneralCategory::Z))
}

pub fn uc_is_blank(uc: Ucs4) -> bool {
    uc == 0x09
        || (!is_nobreak_space(uc) && uc_general_category(uc) == UcGeneralCategory::ZS)
}

pub fn uc_is_cntrl(uc: Ucs4) -> bool {
    uc_general_category(uc).intersects(UcGeneralCategory::CC | UcGeneralCategory::ZL | UcGeneralCategory::ZP)
}

pub fn uc_is_print(uc: Ucs4) -> bool {
    let not_printable = UcGeneralCategory::CC
        | UcGeneralCategory::CS
        | UcGeneralCategory::CN
        | UcGeneralCategory::ZL
        | UcGeneralCategory::ZP;
    !uc_general_category(uc).intersects(not_printable)
}

pub fn uc_is_graph(uc: Ucs4) -> bool {
    uc_is_print(uc) && uc_general_category(uc) != UcGeneralCategory::ZS
}

pub fn uc_is_punct(uc: Ucs4) -> bool {
    uc_is_graph(uc) && !uc_is_alnum(uc)
}

/// True for characters that have a lowercase mapping but are their own
/// uppercase.
pub fn uc_is_upper(uc: Ucs4) -> bool {
    uc_tolower(uc) != uc && uc_toupper(uc) == uc
}

pub fn uc_is_lower(uc: Ucs4) -> bool {
    uc_toupper(uc) != uc && uc_tolower(uc) == uc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_ascii_only() {
        assert!(uc_is_digit('0' as u32));
        assert!(!uc_is_digit(0x0663));
        assert!(uc_is_xdigit('f' as u32));
        assert!(!uc_is_xdigit('g' as u32));
        assert!(!uc_is_xdigit(0xFF21));
    }

    #[test]
    fn letters() {
        assert!(uc_is_alpha(0x00E9));
        assert!(uc_is_alpha(0x4E2D));
        assert!(!uc_is_alpha('1' as u32));
        assert!(uc_is_alnum('1' as u32));
        assert!(uc_is_upper('A' as u32));
        assert!(uc_is_upper(0x0416));
        assert!(!uc_is_upper(0x01C5)); // titlecase: neither
        assert!(!uc_is_lower(0x01C5));
        assert!(!uc_is_upper(0x00DF));
        assert!(uc_is_lower('z' as u32));
    }

    #[test]
    fn spaces() {
        assert!(uc_is_space('\n' as u32));
        assert!(uc_is_space(0x2003));
        assert!(uc_is_space(0x2028));
        assert!(!uc_is_space(0x00A0));
        assert!(uc_is_blank('\t' as u32));
        assert!(uc_is_blank(0x3000));
        assert!(!uc_is_blank('\n' as u32));
        assert!(!uc_is_blank(0x202F));
    }

    #[test]
    fn print_graph_punct_cntrl() {
        assert!(uc_is_print(' ' as u32));
        assert!(!uc_is_graph(' ' as u32));
        assert!(uc_is_graph('!' as u32));
        assert!(uc_is_punct('!' as u32));
        assert!(uc_is_punct(0x20AC));
        assert!(!uc_is_punct('a' as u32));
        assert!(uc_is_cntrl(0x1B));
        assert!(uc_is_cntrl(0x2029));
        assert!(!uc_is_print(0x1B));
        assert!(!uc_is_print(0x0378));
    }
}

// unictype/categ.rs - General category lookup and category masks.
//
// A category is a bit set: single categories have one bit, the major
// classes (L, M, N, ...) are unions, and arbitrary unions can be built with
// uc_general_category_or. Bit positions follow the value order stored in the
// generated CATEGORY trie.

use bitflags::bitflags;

use super::names;
use super::tables::CATEGORY;
use crate::unitypes::Ucs4;

bitflags! {
    /// Bit mask over the 30 two-letter general categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UcGeneralCategory: u32 {
        const LU = 1 << 0;
        const LL = 1 << 1;
        const LT = 1 << 2;
        const LM = 1 << 3;
        const LO = 1 << 4;
        const MN = 1 << 5;
        const MC = 1 << 6;
        const ME = 1 << 7;
        const ND = 1 << 8;
        const NL = 1 << 9;
        const NO = 1 << 10;
        const PC = 1 << 11;
        const PD = 1 << 12;
        const PS = 1 << 13;
        const PE = 1 << 14;
        const PI = 1 << 15;
        const PF = 1 << 16;
        const PO = 1 << 17;
        const SM = 1 << 18;
        const SC = 1 << 19;
        const SK = 1 << 20;
        const SO = 1 << 21;
        const ZS = 1 << 22;
        const ZL = 1 << 23;
        const ZP = 1 << 24;
        const CC = 1 << 25;
        const CF = 1 << 26;
        const CS = 1 << 27;
        const CO = 1 << 28;
        const CN = 1 << 29;

        const L = Self::LU.bits() | Self::LL.bits() | Self::LT.bits() | Self::LM.bits() | Self::LO.bits();
        const LC = Self::LU.bits() | Self::LL.bits() | Self::LT.bits();
        const M = Self::MN.bits() | Self::MC.bits() | Self::ME.bits();
        const N = Self::ND.bits() | Self::NL.bits() | Self::NO.bits();
        const P = Self::PC.bits() | Self::PD.bits() | Self::PS.bits() | Self::PE.bits()
            | Self::PI.bits() | Self::PF.bits() | Self::PO.bits();
        const S = Self::SM.bits() | Self::SC.bits() | Self::SK.bits() | Self::SO.bits();
        const Z = Self::ZS.bits() | Self::ZL.bits() | Self::ZP.bits();
        const C = Self::CC.bits() | Self::CF.bits() | Self::CS.bits() | Self::CO.bits() | Self::CN.bits();
    }
}

// (mask, short name, long name), singles first in bit order, then unions.
static CATEGORY_NAMES: [(UcGeneralCategory, &str, &str); 38] = [
    (UcGeneralCategory::LU, "Lu", "Uppercase Letter"),
    (UcGeneralCategory::LL, "Ll", "Lowercase Letter"),
    (UcGeneralCategory::LT, "Lt", "Titlecase Letter"),
    (UcGeneralCategory::LM, "Lm", "Modifier Letter"),
    (UcGeneralCategory::LO, "Lo", "Other Letter"),
    (UcGeneralCategory::MN, "Mn", "Nonspacing Mark"),
    (UcGeneralCategory::MC, "Mc", "Spacing Mark"),
    (UcGeneralCategory::ME, "Me", "Enclosing Mark"),
    (UcGeneralCategory::ND, "Nd", "Decimal Number"),
    (UcGeneralCategory::NL, "Nl", "Letter Number"),
    (UcGeneralCategory::NO, "No", "Other Number"),
    (UcGeneralCategory::PC, "Pc", "Connector Punctuation"),
    (UcGeneralCategory::PD, "Pd", "Dash Punctuation"),
    (UcGeneralCategory::PS, "Ps", "Open Punctuation"),
    (UcGeneralCategory::PE, "Pe", "Close Punctuation"),
    (UcGeneralCategory::PI, "Pi", "Initial Punctuation"),
    (UcGeneralCategory::PF, "Pf", "Final Punctuation"),
    (UcGeneralCategory::PO, "Po", "Other Punctuation"),
    (UcGeneralCategory::SM, "Sm", "Math Symbol"),
    (UcGeneralCategory::SC, "Sc", "Currency Symbol"),
    (UcGeneralCategory::SK, "Sk", "Modifier Symbol"),
    (UcGeneralCategory::SO, "So", "Other Symbol"),
    (UcGeneralCategory::ZS, "Zs", "Space Separator"),
    (UcGeneralCategory::ZL, "Zl", "Line Separator"),
    (UcGeneralCategory::ZP, "Zp", "Paragraph Separator"),
    (UcGeneralCategory::CC, "Cc", "Control"),
    (UcGeneralCategory::CF, "Cf", "Format"),
    (UcGeneralCategory::CS, "Cs", "Surrogate"),
    (UcGeneralCategory::CO, "Co", "Private Use"),
    (UcGeneralCategory::CN, "Cn", "Unassigned"),
    (UcGeneralCategory::L, "L", "Letter"),
    (UcGeneralCategory::LC, "LC", "Cased Letter"),
    (UcGeneralCategory::M, "M", "Mark"),
    (UcGeneralCategory::N, "N", "Number"),
    (UcGeneralCategory::P, "P", "Punctuation"),
    (UcGeneralCategory::S, "S", "Symbol"),
    (UcGeneralCategory::Z, "Z", "Separator"),
    (UcGeneralCategory::C, "C", "Other"),
];

// Extra spellings accepted by uc_general_category_byname.
static CATEGORY_ALIASES: [(&str, UcGeneralCategory); 5] = [
    ("Combining Mark", UcGeneralCategory::M),
    ("digit", UcGeneralCategory::ND),
    ("punct", UcGeneralCategory::P),
    ("cntrl", UcGeneralCategory::CC),
    ("Not Assigned", UcGeneralCategory::CN),
];

/// Returns the general category of `uc` as a single-bit mask.
///
/// Unassigned code points and values above U+10FFFF are `CN`.
#[inline]
pub fn uc_general_category(uc: Ucs4) -> UcGeneralCategory {
    UcGeneralCategory::from_bits_truncate(1 << CATEGORY.get(uc))
}

/// Tests whether the category of `uc` is contained in `category`.
#[inline]
pub fn uc_is_general_category(uc: Ucs4, category: UcGeneralCategory) -> bool {
    category.contains(uc_general_category(uc))
}

pub fn uc_general_category_or(a: UcGeneralCategory, b: UcGeneralCategory) -> UcGeneralCategory {
    a | b
}

pub fn uc_general_category_and(a: UcGeneralCategory, b: UcGeneralCategory) -> UcGeneralCategory {
    a & b
}

pub fn uc_general_category_and_not(a: UcGeneralCategory, b: UcGeneralCategory) -> UcGeneralCategory {
    a - b
}

/// Returns the one- or two-letter name of a single category or major class.
pub fn uc_general_category_name(category: UcGeneralCategory) -> Option<&'static str> {
    CATEGORY_NAMES
        .iter()
        .find(|(mask, _, _)| *mask == category)
        .map(|(_, name, _)| *name)
}

/// Returns the descriptive name, e.g. "Uppercase Letter" for `LU`.
pub fn uc_general_category_long_name(category: UcGeneralCategory) -> Option<&'static str> {
    CATEGORY_NAMES
        .iter()
        .find(|(mask, _, _)| *mask == category)
        .map(|(_, _, long)| *long)
}

/// Looks a category up by short or long name.
///
/// Short names must match exactly; long names and aliases are matched
/// loosely.
pub fn uc_general_category_byname(name: &str) -> Option<UcGeneralCategory> {
    if let Some((mask, _, _)) = CATEGORY_NAMES.iter().find(|(_, short, _)| *short == name) {
        return Some(*mask);
    }
    CATEGORY_NAMES
        .iter()
        .find(|(_, _, long)| names::loose_eq(name, long))
        .map(|(mask, _, _)| *mask)
        .or_else(|| names::lookup(name, &CATEGORY_ALIASES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_categories() {
        assert_eq!(uc_general_category('A' as u32), UcGeneralCategory::LU);
        assert_eq!(uc_general_category('z' as u32), UcGeneralCategory::LL);
        assert_eq!(uc_general_category('7' as u32), UcGeneralCategory::ND);
        assert_eq!(uc_general_category(' ' as u32), UcGeneralCategory::ZS);
        assert_eq!(uc_general_category('\n' as u32), UcGeneralCategory::CC);
        assert_eq!(uc_general_category('$' as u32), UcGeneralCategory::SC);
    }

    #[test]
    fn non_ascii_categories() {
        assert_eq!(uc_general_category(0x0301), UcGeneralCategory::MN);
        assert_eq!(uc_general_category(0x01C5), UcGeneralCategory::LT);
        assert_eq!(uc_general_category(0x4E2D), UcGeneralCategory::LO);
        assert_eq!(uc_general_category(0x2028), UcGeneralCategory::ZL);
        assert_eq!(uc_general_category(0xD800), UcGeneralCategory::CS);
        assert_eq!(uc_general_category(0xE000), UcGeneralCategory::CO);
        assert_eq!(uc_general_category(0x200D), UcGeneralCategory::CF);
    }

    #[test]
    fn unassigned_and_out_of_range() {
        assert_eq!(uc_general_category(0x0378), UcGeneralCategory::CN);
        assert_eq!(uc_general_category(0x10FFFF), UcGeneralCategory::CN);
        assert_eq!(uc_general_category(0x110000), UcGeneralCategory::CN);
        assert_eq!(uc_general_category(u32::MAX), UcGeneralCategory::CN);
    }

    #[test]
    fn masks() {
        assert!(uc_is_general_category('a' as u32, UcGeneralCategory::L));
        assert!(uc_is_general_category('a' as u32, UcGeneralCategory::LC));
        assert!(!uc_is_general_category('a' as u32, UcGeneralCategory::N));
        let letters_or_digits = uc_general_category_or(UcGeneralCategory::L, UcGeneralCategory::ND);
        assert!(uc_is_general_category('5' as u32, letters_or_digits));
        let no_upper = uc_general_category_and_not(UcGeneralCategory::L, UcGeneralCategory::LU);
        assert!(!uc_is_general_category('A' as u32, no_upper));
        assert_eq!(
            uc_general_category_and(UcGeneralCategory::L, UcGeneralCategory::LC),
            UcGeneralCategory::LC
        );
    }

    #[test]
    fn names() {
        assert_eq!(uc_general_category_name(UcGeneralCategory::LU), Some("Lu"));
        assert_eq!(uc_general_category_name(UcGeneralCategory::P), Some("P"));
        assert_eq!(uc_general_category_long_name(UcGeneralCategory::ZS), Some("Space Separator"));
        assert_eq!(uc_general_category_name(UcGeneralCategory::LU | UcGeneralCategory::ND), None);
    }

    #[test]
    fn byname() {
        assert_eq!(uc_general_category_byname("Lu"), Some(UcGeneralCategory::LU));
        assert_eq!(uc_general_category_byname("LC"), Some(UcGeneralCategory::LC));
        assert_eq!(uc_general_category_byname("uppercase_letter"), Some(UcGeneralCategory::LU));
        assert_eq!(uc_general_category_byname("Combining_Mark"), Some(UcGeneralCategory::M));
        assert_eq!(uc_general_category_byname("Xx"), None);
    }
}

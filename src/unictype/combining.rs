// unictype/combining.rs - Canonical combining class.

use super::names;
use super::tables::COMBINING_CLASS;
use crate::unitypes::Ucs4;

pub const UC_CCC_NR: i32 = 0;
pub const UC_CCC_OV: i32 = 1;
pub const UC_CCC_NK: i32 = 7;
pub const UC_CCC_KV: i32 = 8;
pub const UC_CCC_VR: i32 = 9;
pub const UC_CCC_ATBL: i32 = 200;
pub const UC_CCC_ATB: i32 = 202;
pub const UC_CCC_ATA: i32 = 214;
pub const UC_CCC_ATAR: i32 = 216;
pub const UC_CCC_BL: i32 = 218;
pub const UC_CCC_B: i32 = 220;
pub const UC_CCC_BR: i32 = 222;
pub const UC_CCC_L: i32 = 224;
pub const UC_CCC_R: i32 = 226;
pub const UC_CCC_AL: i32 = 228;
pub const UC_CCC_A: i32 = 230;
pub const UC_CCC_AR: i32 = 232;
pub const UC_CCC_DB: i32 = 233;
pub const UC_CCC_DA: i32 = 234;
pub const UC_CCC_IS: i32 = 240;

static CLASS_NAMES: [(i32, &str, &str); 20] = [
    (UC_CCC_NR, "NR", "Not Reordered"),
    (UC_CCC_OV, "OV", "Overlay"),
    (UC_CCC_NK, "NK", "Nukta"),
    (UC_CCC_KV, "KV", "Kana Voicing"),
    (UC_CCC_VR, "VR", "Virama"),
    (UC_CCC_ATBL, "ATBL", "Attached Below Left"),
    (UC_CCC_ATB, "ATB", "Attached Below"),
    (UC_CCC_ATA, "ATA", "Attached Above"),
    (UC_CCC_ATAR, "ATAR", "Attached Above Right"),
    (UC_CCC_BL, "BL", "Below Left"),
    (UC_CCC_B, "B", "Below"),
    (UC_CCC_BR, "BR", "Below Right"),
    (UC_CCC_L, "L", "Left"),
    (UC_CCC_R, "R", "Right"),
    (UC_CCC_AL, "AL", "Above Left"),
    (UC_CCC_A, "A", "Above"),
    (UC_CCC_AR, "AR", "Above Right"),
    (UC_CCC_DB, "DB", "Double Below"),
    (UC_CCC_DA, "DA", "Double Above"),
    (UC_CCC_IS, "IS", "Iota Subscript"),
];

/// Returns the canonical combining class of `uc` (0..=254).
#[inline]
pub fn uc_combining_class(uc: Ucs4) -> i32 {
    COMBINING_CLASS.get(uc) as i32
}

/// Returns the abbreviated name of a named combining class.
///
/// The fixed-position classes 10..=199 have no name.
pub fn uc_combining_class_name(ccc: i32) -> Option<&'static str> {
    CLASS_NAMES
        .iter()
        .find(|(c, _, _)| *c == ccc)
        .map(|(_, name, _)| *name)
}

pub fn uc_combining_class_long_name(ccc: i32) -> Option<&'static str> {
    CLASS_NAMES
        .iter()
        .find(|(c, _, _)| *c == ccc)
        .map(|(_, _, long)| *long)
}

/// Looks a combining class up by abbreviated or long name.
pub fn uc_combining_class_byname(name: &str) -> Option<i32> {
    CLASS_NAMES
        .iter()
        .find(|(_, short, long)| names::loose_eq(name, short) || names::loose_eq(name, long))
        .map(|(ccc, _, _)| *ccc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(uc_combining_class('a' as u32), UC_CCC_NR);
        assert_eq!(uc_combining_class(0x0301), UC_CCC_A);
        assert_eq!(uc_combining_class(0x0316), UC_CCC_B);
        assert_eq!(uc_combining_class(0x0345), UC_CCC_IS);
        assert_eq!(uc_combining_class(0x094D), UC_CCC_VR);
        assert_eq!(uc_combining_class(0x05B0), 10);
        assert_eq!(uc_combining_class(0x110000), 0);
    }

    #[test]
    fn names() {
        assert_eq!(uc_combining_class_name(UC_CCC_A), Some("A"));
        assert_eq!(uc_combining_class_long_name(UC_CCC_ATAR), Some("Attached Above Right"));
        assert_eq!(uc_combining_class_name(10), None);
        assert_eq!(uc_combining_class_byname("iota_subscript"), Some(UC_CCC_IS));
        assert_eq!(uc_combining_class_byname("vr"), Some(UC_CCC_VR));
        assert_eq!(uc_combining_class_byname("nowhere"), None);
    }
}

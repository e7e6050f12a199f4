// unictype/bidi.rs - Bidirectional class.

use super::names;
use super::tables::BIDI_CLASS;
use crate::unitypes::Ucs4;

/// Bidi_Class values, in the order stored in the BIDI_CLASS trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UcBidiClass {
    L = 0,
    Lre,
    Lro,
    R,
    Al,
    Rle,
    Rlo,
    Pdf,
    En,
    Es,
    Et,
    An,
    Cs,
    Nsm,
    Bn,
    B,
    S,
    Ws,
    On,
    Lri,
    Rli,
    Fsi,
    Pdi,
}

use UcBidiClass::*;

static CLASSES: [(UcBidiClass, &str, &str); 23] = [
    (L, "L", "Left_To_Right"),
    (Lre, "LRE", "Left_To_Right_Embedding"),
    (Lro, "LRO", "Left_To_Right_Override"),
    (R, "R", "Right_To_Left"),
    (Al, "AL", "Arabic_Letter"),
    (Rle, "RLE", "Right_To_Left_Embedding"),
    (Rlo, "RLO", "Right_To_Left_Override"),
    (Pdf, "PDF", "Pop_Directional_Format"),
    (En, "EN", "European_Number"),
    (Es, "ES", "European_Separator"),
    (Et, "ET", "European_Terminator"),
    (An, "AN", "Arabic_Number"),
    (Cs, "CS", "Common_Separator"),
    (Nsm, "NSM", "Nonspacing_Mark"),
    (Bn, "BN", "Boundary_Neutral"),
    (B, "B", "Paragraph_Separator"),
    (S, "S", "Segment_Separator"),
    (Ws, "WS", "White_Space"),
    (On, "ON", "Other_Neutral"),
    (Lri, "LRI", "Left_To_Right_Isolate"),
    (Rli, "RLI", "Right_To_Left_Isolate"),
    (Fsi, "FSI", "First_Strong_Isolate"),
    (Pdi, "PDI", "Pop_Directional_Isolate"),
];

/// Returns the bidi class of `uc`. Code points without an explicit value get `L`.
#[inline]
pub fn uc_bidi_class(uc: Ucs4) -> UcBidiClass {
    CLASSES
        .get(BIDI_CLASS.get(uc) as usize)
        .map_or(L, |(class, _, _)| *class)
}

#[inline]
pub fn uc_is_bidi_class(uc: Ucs4, bidi_class: UcBidiClass) -> bool {
    uc_bidi_class(uc) == bidi_class
}

/// Returns the abbreviated name, e.g. "AL".
pub fn uc_bidi_class_name(bidi_class: UcBidiClass) -> &'static str {
    CLASSES[bidi_class as usize].1
}

/// Returns the long name, e.g. "Arabic_Letter".
pub fn uc_bidi_class_long_name(bidi_class: UcBidiClass) -> &'static str {
    CLASSES[bidi_class as usize].2
}

/// Looks a bidi class up by abbreviated or long name, ignoring case, spaces,
/// hyphens and underscores.
pub fn uc_bidi_class_byname(name: &str) -> Option<UcBidiClass> {
    CLASSES
        .iter()
        .find(|(_, short, long)| names::loose_eq(name, short) || names::loose_eq(name, long))
        .map(|(class, _, _)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(uc_bidi_class('a' as u32), UcBidiClass::L);
        assert_eq!(uc_bidi_class('1' as u32), UcBidiClass::En);
        assert_eq!(uc_bidi_class(0x05D0), UcBidiClass::R);
        assert_eq!(uc_bidi_class(0x0627), UcBidiClass::Al);
        assert_eq!(uc_bidi_class(0x0661), UcBidiClass::An);
        assert_eq!(uc_bidi_class(0x0300), UcBidiClass::Nsm);
        assert_eq!(uc_bidi_class(' ' as u32), UcBidiClass::Ws);
        assert_eq!(uc_bidi_class(0x2029), UcBidiClass::B);
        assert_eq!(uc_bidi_class(0x2067), UcBidiClass::Rli);
        assert!(uc_is_bidi_class(',' as u32, UcBidiClass::Cs));
    }

    #[test]
    fn out_of_range_is_left_to_right() {
        assert_eq!(uc_bidi_class(0x110000), UcBidiClass::L);
    }

    #[test]
    fn names() {
        assert_eq!(uc_bidi_class_name(UcBidiClass::Al), "AL");
        assert_eq!(uc_bidi_class_long_name(UcBidiClass::Al), "Arabic_Letter");
        assert_eq!(uc_bidi_class_long_name(UcBidiClass::Pdi), "Pop_Directional_Isolate");
    }

    #[test]
    fn byname_is_loose() {
        assert_eq!(uc_bidi_class_byname("Arabic_Letter"), Some(UcBidiClass::Al));
        assert_eq!(uc_bidi_class_byname("arabic-letter"), uc_bidi_class_byname("Arabic_Letter"));
        assert_eq!(uc_bidi_class_byname("AL"), Some(UcBidiClass::Al));
        assert_eq!(uc_bidi_class_byname("nsm"), Some(UcBidiClass::Nsm));
        assert_eq!(uc_bidi_class_byname("Top_To_Bottom"), None);
    }
}

// compat_unictype.rs - Integration tests for character property lookup.
//
// Every lookup must be total over the full u32 range, and properties that are
// derived from each other must agree for every code point.

use unistring::unicase::{uc_tolower, uc_toupper};
use unistring::unictype::*;
use unistring::unitypes::{Ucs4, UNICODE_MAX};

fn all_code_points() -> impl Iterator<Item = Ucs4> {
    0..=UNICODE_MAX
}

const OUT_OF_RANGE: [Ucs4; 4] = [0x110000, 0x1FFFFF, 0x7FFF_FFFF, u32::MAX];

// ============================================================================
// Totality
// ============================================================================

#[test]
fn every_code_point_has_a_named_category() {
    for uc in all_code_points() {
        let cat = uc_general_category(uc);
        assert!(uc_general_category_name(cat).is_some(), "U+{uc:04X}");
    }
}

#[test]
fn out_of_range_values_get_defaults() {
    for uc in OUT_OF_RANGE {
        assert_eq!(uc_general_category(uc), UcGeneralCategory::CN);
        assert_eq!(uc_bidi_class(uc), UcBidiClass::L);
        assert_eq!(uc_combining_class(uc), 0);
        assert_eq!(uc_joining_type(uc), UcJoiningType::U);
        assert!(uc_script(uc).is_none());
        assert!(uc_block(uc).is_none());
        assert_eq!(uc_mirror_char(uc), None);
        assert_eq!(uc_decimal_value(uc), -1);
        assert!(!uc_is_property_alphabetic(uc));
        assert_eq!(uc_toupper(uc), uc);
        assert_eq!(uc_tolower(uc), uc);
    }
}

#[test]
fn surrogates_and_private_use() {
    for uc in 0xD800..=0xDFFF {
        assert_eq!(uc_general_category(uc), UcGeneralCategory::CS);
    }
    for uc in [0xE000, 0xF8FF, 0xF0000, 0x10FFFD] {
        assert_eq!(uc_general_category(uc), UcGeneralCategory::CO, "U+{uc:04X}");
        assert!(uc_is_property_private_use(uc));
    }
}

// ============================================================================
// Consistency between properties
// ============================================================================

#[test]
fn blocks_contain_their_members() {
    for block in uc_all_blocks() {
        assert_eq!(uc_block(block.start).map(|b| b.name), Some(block.name));
        assert_eq!(uc_block(block.end).map(|b| b.name), Some(block.name));
        assert!(uc_is_block(block.start, block));
    }
}

#[test]
fn scripts_round_trip_through_names() {
    for script in uc_all_scripts() {
        let found = uc_script_byname(script.name).expect(script.name);
        assert_eq!(found.index, script.index);
    }
}

#[test]
fn decimal_digits_are_digits() {
    for uc in all_code_points() {
        let d = uc_decimal_value(uc);
        if d >= 0 {
            assert!((0..=9).contains(&d), "U+{uc:04X}");
            assert_eq!(uc_digit_value(uc), d);
            assert!(uc_is_general_category(uc, UcGeneralCategory::ND), "U+{uc:04X}");
        }
    }
}

#[test]
fn mirror_glyphs_belong_to_mirrored_characters() {
    for uc in all_code_points() {
        if let Some(m) = uc_mirror_char(uc) {
            assert_ne!(m, uc, "U+{uc:04X}");
            assert!(uc_is_property(uc, UcProperty::BidiMirrored), "U+{uc:04X}");
        }
    }
    assert_eq!(uc_mirror_char('[' as u32), Some(']' as u32));
}

#[test]
fn canonical_combining_class_names() {
    for uc in [0x0301, 0x0316, 0x0345, 0x094D] {
        let ccc = uc_combining_class(uc);
        let name = uc_combining_class_name(ccc).expect("named class");
        assert_eq!(uc_combining_class_byname(name), Some(ccc));
    }
}

// ============================================================================
// Name lookup
// ============================================================================

#[test]
fn bidi_names_are_loose() {
    assert_eq!(uc_bidi_class_byname("Arabic_Letter"), uc_bidi_class_byname("arabic-letter"));
    assert_eq!(uc_bidi_class_byname("Arabic Letter"), Some(UcBidiClass::Al));
    assert_eq!(uc_bidi_class_byname("AL"), Some(UcBidiClass::Al));
    assert_eq!(uc_bidi_class_byname("Arabic"), None);
    assert_eq!(uc_bidi_class(0x0627), UcBidiClass::Al);
    assert_eq!(uc_bidi_class_name(UcBidiClass::Al), "AL");
    assert_eq!(uc_bidi_class_long_name(UcBidiClass::Al), "Arabic_Letter");
}

#[test]
fn property_names() {
    let ws = uc_property_byname("White_Space").unwrap();
    assert_eq!(Some(ws), uc_property_byname("white space"));
    assert_eq!(ws.name(), "White_Space");
    assert!(uc_is_property(0x3000, ws));
    assert_eq!(uc_property_byname("no such property"), None);
}

#[test]
fn category_names() {
    for name in ["L", "Lu", "Nd", "Zs", "Cn", "LC"] {
        let cat = uc_general_category_byname(name).expect(name);
        assert_eq!(uc_general_category_name(cat), Some(name));
    }
}

// ============================================================================
// Break properties
// ============================================================================

#[test]
fn break_properties_are_total() {
    for uc in all_code_points().step_by(7).chain(OUT_OF_RANGE) {
        let _ = uc_graphemeclusterbreak_property(uc);
        let _ = uc_wordbreak_property(uc);
        let _ = uc_linebreak_property(uc);
        let _ = uc_east_asian_width(uc);
    }
    assert_eq!(uc_linebreak_property(u32::MAX), LineBreakClass::Xx);
}

#[test]
fn regional_indicators_agree() {
    for uc in 0x1F1E6..=0x1F1FF {
        assert_eq!(uc_graphemeclusterbreak_property(uc), GraphemeClusterBreak::RegionalIndicator);
        assert!(uc_is_property_regional_indicator(uc));
        assert_eq!(uc_linebreak_property(uc), LineBreakClass::Ri);
    }
}

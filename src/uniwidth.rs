// uniwidth.rs - Display width of characters and strings.
//
//! Column counts for terminal output.
//!
//! Combining and format characters take no columns, East Asian Wide and
//! Fullwidth characters take two, and under a CJK legacy encoding the
//! ambiguous range U+00A1..U+FF60 is also drawn two columns wide.

use crate::unictype::{
    uc_east_asian_width, uc_general_category, uc_is_property_prepended_concatenation_mark,
    EastAsianWidth, UcGeneralCategory,
};
use crate::unistr::{mbtouc, strlen, UtfUnit};
use crate::unitypes::Ucs4;

static CJK_ENCODINGS: [&str; 8] = ["EUC-JP", "GB2312", "GBK", "EUC-TW", "BIG5", "EUC-KR", "CP949", "JOHAB"];

/// True for the legacy encodings whose fonts draw ambiguous characters
/// double width.
pub fn is_cjk_encoding(encoding: &str) -> bool {
    CJK_ENCODINGS.iter().any(|e| e.eq_ignore_ascii_case(encoding))
}

fn is_zero_width(uc: Ucs4) -> bool {
    if matches!(uc, 0x1160..=0x11FF | 0xD7B0..=0xD7FF | 0x200B) {
        return true;
    }
    let cat = uc_general_category(uc);
    if cat.intersects(UcGeneralCategory::MN | UcGeneralCategory::ME) {
        return true;
    }
    cat == UcGeneralCategory::CF && !uc_is_property_prepended_concatenation_mark(uc)
}

fn is_double_width(uc: Ucs4) -> bool {
    // Unassigned ideograph planes default to Wide.
    matches!(uc_east_asian_width(uc), EastAsianWidth::Wide | EastAsianWidth::Fullwidth)
        || matches!(uc, 0x20000..=0x2FFFD | 0x30000..=0x3FFFD)
}

/// Number of columns `uc` occupies: 0, 1 or 2, or -1 for a control
/// character other than NUL.
pub fn uc_width(uc: Ucs4, encoding: &str) -> i32 {
    if uc == 0 {
        return 0;
    }
    if uc < 0x20 || (0x7F..0xA0).contains(&uc) {
        return -1;
    }
    if is_zero_width(uc) {
        return 0;
    }
    if is_double_width(uc) {
        return 2;
    }
    if (0x00A1..0xFF61).contains(&uc) && uc != 0x20A9 && is_cjk_encoding(encoding) {
        return 2;
    }
    1
}

/// Total width of `s`, or -1 if it contains a control character.
/// Ill-formed sequences count as U+FFFD.
pub fn width<U: UtfUnit>(s: &[U], encoding: &str) -> i32 {
    let mut total = 0i32;
    let mut i = 0;
    while i < s.len() {
        let (uc, n) = mbtouc(&s[i..]);
        i += n;
        match uc_width(uc, encoding) {
            w if w < 0 => return -1,
            w => total = total.saturating_add(w),
        }
    }
    total
}

pub fn u8_width(s: &[u8], encoding: &str) -> i32 {
    width(s, encoding)
}

pub fn u16_width(s: &[u16], encoding: &str) -> i32 {
    width(s, encoding)
}

pub fn u32_width(s: &[u32], encoding: &str) -> i32 {
    width(s, encoding)
}

/// Width of the string up to its first NUL.
pub fn u8_strwidth(s: &[u8], encoding: &str) -> i32 {
    width(&s[..strlen(s)], encoding)
}

pub fn u16_strwidth(s: &[u16], encoding: &str) -> i32 {
    width(&s[..strlen(s)], encoding)
}

pub fn u32_strwidth(s: &[u32], encoding: &str) -> i32 {
    width(&s[..strlen(s)], encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters() {
        assert_eq!(uc_width('a' as u32, "UTF-8"), 1);
        assert_eq!(uc_width(0, "UTF-8"), 0);
        assert_eq!(uc_width('\n' as u32, "UTF-8"), -1);
        assert_eq!(uc_width(0x85, "UTF-8"), -1);
        assert_eq!(uc_width(0x0301, "UTF-8"), 0);
        assert_eq!(uc_width(0x200B, "UTF-8"), 0);
        assert_eq!(uc_width(0x00AD, "UTF-8"), 0); // soft hyphen is Cf
        assert_eq!(uc_width(0x0600, "UTF-8"), 1); // prepended concatenation mark
        assert_eq!(uc_width(0x1160, "UTF-8"), 0);
        assert_eq!(uc_width(0x4E2D, "UTF-8"), 2);
        assert_eq!(uc_width(0xFF21, "UTF-8"), 2);
        assert_eq!(uc_width(0x1F600, "UTF-8"), 2);
        assert_eq!(uc_width(0x2A6E0, "UTF-8"), 2);
    }

    #[test]
    fn ambiguous_characters_depend_on_encoding() {
        assert_eq!(uc_width(0x00A7, "UTF-8"), 1);
        assert_eq!(uc_width(0x00A7, "EUC-JP"), 2);
        assert_eq!(uc_width(0x03B1, "gb2312"), 2);
        assert_eq!(uc_width(0x20A9, "EUC-KR"), 1);
        assert_eq!(uc_width(0xFF61, "EUC-JP"), 1);
        assert_eq!(uc_width(0x00A7, "GB18030"), 1);
    }

    #[test]
    fn strings() {
        assert_eq!(u8_width("abc".as_bytes(), "UTF-8"), 3);
        assert_eq!(u8_width("日本語".as_bytes(), "UTF-8"), 6);
        assert_eq!(u8_width("e\u{301}".as_bytes(), "UTF-8"), 1);
        assert_eq!(u8_width("a\tb".as_bytes(), "UTF-8"), -1);
        assert_eq!(u8_strwidth(b"ab\0\x01", "UTF-8"), 2);
        let w: Vec<u16> = "中a".encode_utf16().collect();
        assert_eq!(u16_width(&w, "UTF-8"), 3);
        assert_eq!(u32_strwidth(&[0x4E2D, 0], "UTF-8"), 2);
    }

    #[test]
    fn cjk_encoding_names() {
        assert!(is_cjk_encoding("EUC-JP"));
        assert!(is_cjk_encoding("big5"));
        assert!(!is_cjk_encoding("UTF-8"));
        assert!(!is_cjk_encoding("GB18030"));
    }
}

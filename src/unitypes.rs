// unitypes.rs - Basic types shared by every Unicode module.

/// A Unicode code point. Decoders only ever produce scalar values; encoders
/// reject surrogates and values above [`UNICODE_MAX`].
pub type Ucs4 = u32;

/// Largest Unicode code point.
pub const UNICODE_MAX: Ucs4 = 0x10FFFF;

/// U+FFFD, substituted by the permissive decoders for ill-formed input.
pub const REPLACEMENT_CHARACTER: Ucs4 = 0xFFFD;

/// Returns true for Unicode scalar values (no surrogates, nothing above U+10FFFF).
#[inline]
pub fn uc_is_valid(uc: Ucs4) -> bool {
    uc < 0xD800 || (0xE000..=UNICODE_MAX).contains(&uc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_values() {
        assert!(uc_is_valid(0));
        assert!(uc_is_valid(0xD7FF));
        assert!(!uc_is_valid(0xD800));
        assert!(!uc_is_valid(0xDFFF));
        assert!(uc_is_valid(0xE000));
        assert!(uc_is_valid(UNICODE_MAX));
        assert!(!uc_is_valid(0x110000));
    }
}

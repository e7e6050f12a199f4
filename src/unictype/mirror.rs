// unictype/mirror.rs - Bidi mirroring glyphs.

use super::tables::MIRROR;
use crate::unitypes::Ucs4;

/// Returns the mirrored counterpart of `uc`, if it has one.
#[inline]
pub fn uc_mirror_char(uc: Ucs4) -> Option<Ucs4> {
    match MIRROR.get_signed(uc) {
        0 => None,
        delta => Some(uc.wrapping_add_signed(delta)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets() {
        assert_eq!(uc_mirror_char('(' as u32), Some(')' as u32));
        assert_eq!(uc_mirror_char(')' as u32), Some('(' as u32));
        assert_eq!(uc_mirror_char('<' as u32), Some('>' as u32));
        assert_eq!(uc_mirror_char(0x00AB), Some(0x00BB));
        assert_eq!(uc_mirror_char(0x2264), Some(0x2265));
    }

    #[test]
    fn no_mirror() {
        assert_eq!(uc_mirror_char('a' as u32), None);
        assert_eq!(uc_mirror_char(0x110000), None);
    }
}

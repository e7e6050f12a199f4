// unistr/utf32.rs - UTF-32 code unit.

use super::{Malformed, UtfUnit};
use crate::unitypes::{uc_is_valid, Ucs4};

impl UtfUnit for u32 {
    const MAX_LEN: usize = 1;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn decode(s: &[u32]) -> Result<(Ucs4, usize), Malformed> {
        if uc_is_valid(s[0]) {
            Ok((s[0], 1))
        } else {
            Err(Malformed::invalid(1))
        }
    }

    #[inline]
    fn encoded_len(_uc: Ucs4) -> usize {
        1
    }

    #[inline]
    fn encode_unchecked(uc: Ucs4, out: &mut [u32]) {
        out[0] = uc;
    }

    #[inline]
    fn is_lead(self) -> bool {
        true
    }
}

unit_functions!(
    u32,
    u32_mbtouc, u32_mbtouc_unsafe, u32_mbtoucr, u32_uctomb,
    u32_mblen, u32_check, u32_next, u32_prev, u32_strlen,
    u32_mbsnlen, u32_cmp, u32_strcmp, u32_chr, u32_strstr,
    u32_startswith, u32_endswith
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert_eq!(u32_mbtouc(&[0x10FFFF]), (0x10FFFF, 1));
        assert_eq!(u32_mbtouc(&[0x110000]), (0xFFFD, 1));
        assert_eq!(u32_mbtouc(&[0xDFFF]), (0xFFFD, 1));
        assert_eq!(u32_mbtoucr(&[0xD800]).unwrap_err().code(), -1);
    }

    #[test]
    fn encode() {
        let mut buf = [0u32; 1];
        assert_eq!(u32_uctomb(0x1F600, &mut buf), 1);
        assert_eq!(buf, [0x1F600]);
        assert_eq!(u32_uctomb(0xD800, &mut buf), -1);
        assert_eq!(u32_uctomb(0x41, &mut []), -2);
    }

    #[test]
    fn prev_is_single_unit() {
        assert_eq!(u32_prev(&[0x41, 0x42], 2), Some((0x42, 1)));
        assert_eq!(u32_prev(&[0x41, 0xD800], 2), None);
    }
}

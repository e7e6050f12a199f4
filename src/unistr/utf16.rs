// unistr/utf16.rs - UTF-16 code unit.

use super::{Malformed, UtfUnit};
use crate::unitypes::Ucs4;

#[inline]
fn is_high_surrogate(u: u16) -> bool {
    (0xd800..0xdc00).contains(&u)
}

#[inline]
fn is_low_surrogate(u: u16) -> bool {
    (0xdc00..0xe000).contains(&u)
}

impl UtfUnit for u16 {
    const MAX_LEN: usize = 2;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    fn decode(s: &[u16]) -> Result<(Ucs4, usize), Malformed> {
        let c = s[0];
        if is_high_surrogate(c) {
            return match s.get(1) {
                None => Err(Malformed::truncated(1)),
                Some(&c2) if is_low_surrogate(c2) => {
                    Ok((0x10000 + (((c as Ucs4 - 0xd800) << 10) | (c2 as Ucs4 - 0xdc00)), 2))
                }
                Some(_) => Err(Malformed::invalid(1)),
            };
        }
        if is_low_surrogate(c) {
            return Err(Malformed::invalid(1));
        }
        Ok((c as Ucs4, 1))
    }

    #[inline]
    fn encoded_len(uc: Ucs4) -> usize {
        if uc < 0x10000 {
            1
        } else {
            2
        }
    }

    fn encode_unchecked(uc: Ucs4, out: &mut [u16]) {
        if uc < 0x10000 {
            out[0] = uc as u16;
        } else {
            let v = uc - 0x10000;
            out[0] = 0xd800 | (v >> 10) as u16;
            out[1] = 0xdc00 | (v & 0x3ff) as u16;
        }
    }

    #[inline]
    fn is_lead(self) -> bool {
        !is_low_surrogate(self)
    }
}

unit_functions!(
    u16,
    u16_mbtouc, u16_mbtouc_unsafe, u16_mbtoucr, u16_uctomb,
    u16_mblen, u16_check, u16_next, u16_prev, u16_strlen,
    u16_mbsnlen, u16_cmp, u16_strcmp, u16_chr, u16_strstr,
    u16_startswith, u16_endswith
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogate_pairs() {
        assert_eq!(u16_mbtouc(&[0xD83D, 0xDE00]), (0x1F600, 2));
        assert_eq!(u16_mbtouc(&[0xDBFF, 0xDFFF]), (0x10FFFF, 2));
        let mut buf = [0u16; 2];
        assert_eq!(u16_uctomb(0x1F600, &mut buf), 2);
        assert_eq!(buf, [0xD83D, 0xDE00]);
        assert_eq!(u16_uctomb(0x20AC, &mut buf), 1);
        assert_eq!(buf[0], 0x20AC);
    }

    #[test]
    fn lone_surrogates() {
        assert_eq!(u16_mbtouc(&[0xDC00, 0x61]), (0xFFFD, 1));
        assert_eq!(u16_mbtouc(&[0xD800, 0x61]), (0xFFFD, 1));
        assert_eq!(
            u16_mbtoucr(&[0xD800]),
            Err(Malformed { skip: 1, incomplete: true })
        );
        assert_eq!(
            u16_mbtoucr(&[0xDC00]),
            Err(Malformed { skip: 1, incomplete: false })
        );
    }

    #[test]
    fn encode_rejects_surrogates_and_capacity() {
        let mut buf = [0u16; 1];
        assert_eq!(u16_uctomb(0xDC00, &mut buf), -1);
        assert_eq!(u16_uctomb(0x10000, &mut buf), -2);
        assert_eq!(buf, [0]);
    }
}

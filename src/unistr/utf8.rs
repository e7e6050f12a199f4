// unistr/utf8.rs - UTF-8 code unit (RFC 3629: U+0000 - U+10FFFF).

use super::{Malformed, UtfUnit};
use crate::unitypes::Ucs4;

#[inline]
fn is_trail(b: u8) -> bool {
    (b & 0xc0) == 0x80
}

// Valid range of the second byte, indexed by lead byte - 0xE0 (3-byte
// sequences) or lead byte - 0xF0 (4-byte sequences). Excludes overlongs,
// surrogates and values above U+10FFFF.
static TRAIL1_RANGE_3: [(u8, u8); 16] = [
    (0xa0, 0xbf), // E0
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0x9f), // ED
    (0x80, 0xbf),
    (0x80, 0xbf),
];

static TRAIL1_RANGE_4: [(u8, u8); 5] = [
    (0x90, 0xbf), // F0
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0xbf),
    (0x80, 0x8f), // F4
];

impl UtfUnit for u8 {
    const MAX_LEN: usize = 4;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    fn decode(s: &[u8]) -> Result<(Ucs4, usize), Malformed> {
        let c = s[0];
        if c < 0x80 {
            return Ok((c as Ucs4, 1));
        }
        let (len, range, mut uc) = match c {
            0xc2..=0xdf => (2, (0x80, 0xbf), (c & 0x1f) as Ucs4),
            0xe0..=0xef => (3, TRAIL1_RANGE_3[(c - 0xe0) as usize], (c & 0x0f) as Ucs4),
            0xf0..=0xf4 => (4, TRAIL1_RANGE_4[(c - 0xf0) as usize], (c & 0x07) as Ucs4),
            _ => return Err(Malformed::invalid(1)),
        };
        // Walk the trail bytes; stop at the first one that does not fit,
        // so the reported length is the maximal ill-formed subpart.
        for i in 1..len {
            let Some(&b) = s.get(i) else {
                return Err(Malformed::truncated(i));
            };
            let ok = if i == 1 {
                (range.0..=range.1).contains(&b)
            } else {
                is_trail(b)
            };
            if !ok {
                return Err(Malformed::invalid(i));
            }
            uc = (uc << 6) | (b & 0x3f) as Ucs4;
        }
        Ok((uc, len))
    }

    #[inline]
    fn encoded_len(uc: Ucs4) -> usize {
        match uc {
            0..=0x7f => 1,
            0x80..=0x7ff => 2,
            0x800..=0xffff => 3,
            _ => 4,
        }
    }

    fn encode_unchecked(uc: Ucs4, out: &mut [u8]) {
        match Self::encoded_len(uc) {
            1 => out[0] = uc as u8,
            2 => {
                out[0] = 0xc0 | (uc >> 6) as u8;
                out[1] = 0x80 | (uc & 0x3f) as u8;
            }
            3 => {
                out[0] = 0xe0 | (uc >> 12) as u8;
                out[1] = 0x80 | ((uc >> 6) & 0x3f) as u8;
                out[2] = 0x80 | (uc & 0x3f) as u8;
            }
            _ => {
                out[0] = 0xf0 | (uc >> 18) as u8;
                out[1] = 0x80 | ((uc >> 12) & 0x3f) as u8;
                out[2] = 0x80 | ((uc >> 6) & 0x3f) as u8;
                out[3] = 0x80 | (uc & 0x3f) as u8;
            }
        }
    }

    #[inline]
    fn is_lead(self) -> bool {
        !is_trail(self)
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        match needle {
            [] => Some(0),
            [b] => memchr::memchr(*b, haystack),
            _ => memchr::memmem::find(haystack, needle),
        }
    }
}

unit_functions!(
    u8,
    u8_mbtouc, u8_mbtouc_unsafe, u8_mbtoucr, u8_uctomb,
    u8_mblen, u8_check, u8_next, u8_prev, u8_strlen,
    u8_mbsnlen, u8_cmp, u8_strcmp, u8_chr, u8_strstr,
    u8_startswith, u8_endswith
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_euro_sign() {
        assert_eq!(u8_mbtouc(&[0xE2, 0x82, 0xAC]), (0x20AC, 3));
        assert_eq!(u8_mbtoucr(&[0xE2, 0x82, 0xAC]), Ok((0x20AC, 3)));
    }

    #[test]
    fn decode_all_lengths() {
        assert_eq!(u8_mbtouc(b"A"), (0x41, 1));
        assert_eq!(u8_mbtouc(&[0xC3, 0xA9]), (0xE9, 2));
        assert_eq!(u8_mbtouc(&[0xF0, 0x9F, 0x98, 0x80]), (0x1F600, 4));
        assert_eq!(u8_mbtouc(&[0xF4, 0x8F, 0xBF, 0xBF]), (0x10FFFF, 4));
    }

    #[test]
    fn permissive_decode_consumes_maximal_subpart() {
        // Stray continuation byte.
        assert_eq!(u8_mbtouc(&[0x80, 0x41]), (0xFFFD, 1));
        // Overlong two-byte form.
        assert_eq!(u8_mbtouc(&[0xC0, 0xAF]), (0xFFFD, 1));
        // Surrogate: ED A0 is never valid.
        assert_eq!(u8_mbtouc(&[0xED, 0xA0, 0x80]), (0xFFFD, 1));
        // Above U+10FFFF.
        assert_eq!(u8_mbtouc(&[0xF4, 0x90, 0x80, 0x80]), (0xFFFD, 1));
        // Truncated three-byte sequence followed by ASCII.
        assert_eq!(u8_mbtouc(&[0xE2, 0x82, 0x41]), (0xFFFD, 2));
        // Truncated at the end of input.
        assert_eq!(u8_mbtouc(&[0xF0, 0x9F, 0x98]), (0xFFFD, 3));
        assert_eq!(u8_mbtouc(&[0xFF]), (0xFFFD, 1));
        assert_eq!(u8_mbtouc(&[]), (0xFFFD, 0));
        assert_eq!(u8_mbtouc_unsafe(&[0x80]), (0xFFFD, 1));
    }

    #[test]
    fn strict_decode_distinguishes_incomplete() {
        assert_eq!(
            u8_mbtoucr(&[0xF0, 0x9F]),
            Err(Malformed { skip: 2, incomplete: true })
        );
        assert_eq!(
            u8_mbtoucr(&[0xF0, 0x41]),
            Err(Malformed { skip: 1, incomplete: false })
        );
        assert_eq!(u8_mbtoucr(&[]), Err(Malformed { skip: 0, incomplete: true }));
    }

    #[test]
    fn encode() {
        let mut buf = [0u8; 4];
        assert_eq!(u8_uctomb(0x20AC, &mut buf), 3);
        assert_eq!(&buf[..3], &[0xE2, 0x82, 0xAC]);
        assert_eq!(u8_uctomb(0x41, &mut buf), 1);
        assert_eq!(u8_uctomb(0x10FFFF, &mut buf), 4);
        assert_eq!(buf, [0xF4, 0x8F, 0xBF, 0xBF]);
    }

    #[test]
    fn encode_errors_leave_buffer_untouched() {
        let mut buf = [0u8; 2];
        assert_eq!(u8_uctomb(0xD800, &mut buf), -1);
        assert_eq!(u8_uctomb(0x110000, &mut buf), -1);
        assert_eq!(u8_uctomb(0x20AC, &mut buf), -2);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn matches_std_for_every_scalar_value() {
        let mut buf = [0u8; 4];
        for c in (0..=0x10FFFFu32).filter_map(char::from_u32).step_by(7) {
            let n = u8_uctomb(c as u32, &mut buf) as usize;
            assert_eq!(&buf[..n], c.encode_utf8(&mut [0u8; 4]).as_bytes());
        }
    }
}

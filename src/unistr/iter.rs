// unistr/iter.rs - Bidirectional code point iterator.

use super::{mbtouc, mbtouc_back, prev, Malformed, UtfUnit};
use crate::unitypes::Ucs4;

/// Walks a UTF-8/16/32 string by code point from either end.
///
/// The [`Iterator`] implementation is permissive and yields U+FFFD for
/// ill-formed subsequences. [`UcIter::next_uc`] and [`UcIter::prev_uc`]
/// report them instead.
#[derive(Debug, Clone)]
pub struct UcIter<'a, U: UtfUnit> {
    s: &'a [U],
    front: usize,
    back: usize,
}

impl<'a, U: UtfUnit> UcIter<'a, U> {
    pub fn new(s: &'a [U]) -> Self {
        UcIter { s, front: 0, back: s.len() }
    }

    /// Starts the forward cursor at `pos` (clamped to the string length).
    pub fn with_position(s: &'a [U], pos: usize) -> Self {
        UcIter { s, front: pos.min(s.len()), back: s.len() }
    }

    /// Offset of the forward cursor.
    pub fn position(&self) -> usize {
        self.front
    }

    /// Offset of the backward cursor.
    pub fn back_position(&self) -> usize {
        self.back
    }

    /// The units not yet consumed from either end.
    pub fn as_slice(&self) -> &'a [U] {
        &self.s[self.front..self.back]
    }

    /// Strict forward step. On error the cursor moves past the ill-formed
    /// subsequence so iteration can resume.
    pub fn next_uc(&mut self) -> Option<Result<Ucs4, Malformed>> {
        if self.front >= self.back {
            return None;
        }
        match U::decode(&self.s[self.front..self.back]) {
            Ok((uc, n)) => {
                self.front += n;
                Some(Ok(uc))
            }
            Err(m) => {
                self.front += m.skip.max(1);
                Some(Err(m))
            }
        }
    }

    /// Strict backward step. On error the cursor moves back by one unit.
    pub fn prev_uc(&mut self) -> Option<Result<Ucs4, Malformed>> {
        if self.back <= self.front {
            return None;
        }
        match prev(&self.s[self.front..self.back], self.back - self.front) {
            Some((uc, start)) => {
                self.back = self.front + start;
                Some(Ok(uc))
            }
            None => {
                self.back -= 1;
                Some(Err(Malformed::invalid(1)))
            }
        }
    }
}

impl<U: UtfUnit> Iterator for UcIter<'_, U> {
    type Item = Ucs4;

    fn next(&mut self) -> Option<Ucs4> {
        if self.front >= self.back {
            return None;
        }
        let (uc, n) = mbtouc(&self.s[self.front..self.back]);
        self.front += n;
        Some(uc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n.div_ceil(U::MAX_LEN), Some(n))
    }
}

impl<U: UtfUnit> DoubleEndedIterator for UcIter<'_, U> {
    fn next_back(&mut self) -> Option<Ucs4> {
        if self.back <= self.front {
            return None;
        }
        let (uc, start) = mbtouc_back(&self.s[self.front..self.back], self.back - self.front);
        self.back = self.front + start;
        Some(uc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_backward() {
        let s = "a€😀".as_bytes();
        let fwd: Vec<Ucs4> = UcIter::new(s).collect();
        assert_eq!(fwd, vec![0x61, 0x20AC, 0x1F600]);
        let back: Vec<Ucs4> = UcIter::new(s).rev().collect();
        assert_eq!(back, vec![0x1F600, 0x20AC, 0x61]);
    }

    #[test]
    fn cursors_meet_in_the_middle() {
        let s: Vec<u16> = "x😀y".encode_utf16().collect();
        let mut it = UcIter::new(&s[..]);
        assert_eq!(it.next(), Some(0x78));
        assert_eq!(it.next_back(), Some(0x79));
        assert_eq!(it.as_slice(), &[0xD83D, 0xDE00]);
        assert_eq!(it.next_back(), Some(0x1F600));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn strict_steps_report_damage() {
        let s = [b'a', 0xFF, b'b'];
        let mut it = UcIter::new(&s[..]);
        assert_eq!(it.next_uc(), Some(Ok(0x61)));
        assert_eq!(it.next_uc(), Some(Err(Malformed { skip: 1, incomplete: false })));
        assert_eq!(it.position(), 2);
        assert_eq!(it.next_uc(), Some(Ok(0x62)));
        assert_eq!(it.next_uc(), None);

        let mut it = UcIter::new(&s[..]);
        assert_eq!(it.prev_uc(), Some(Ok(0x62)));
        assert!(matches!(it.prev_uc(), Some(Err(_))));
        assert_eq!(it.prev_uc(), Some(Ok(0x61)));
        assert_eq!(it.prev_uc(), None);
    }

    #[test]
    fn permissive_iteration_replaces() {
        let s = [b'a', 0xE2, 0x82, b'b'];
        let v: Vec<Ucs4> = UcIter::new(&s[..]).collect();
        assert_eq!(v, vec![0x61, 0xFFFD, 0x62]);
    }

    #[test]
    fn backward_iteration_mirrors_forward() {
        let samples: [&[u8]; 4] = [
            &[b'a', 0xE2, 0x82, b'b'],
            &[b'a', 0xF0, 0x9F, 0x98],
            &[0xC3, 0xA9, 0x80, 0x80],
            &[0xE0, 0x80, 0xAF, 0xFF],
        ];
        for s in samples {
            let fwd: Vec<Ucs4> = UcIter::new(s).collect();
            let mut back: Vec<Ucs4> = UcIter::new(s).rev().collect();
            back.reverse();
            assert_eq!(fwd, back, "{s:02X?}");
        }
        let s: [u16; 4] = [0x61, 0xDC00, 0xD800, 0x62];
        let mut back: Vec<Ucs4> = UcIter::new(&s[..]).rev().collect();
        back.reverse();
        assert_eq!(back, UcIter::new(&s[..]).collect::<Vec<_>>());
    }

    #[test]
    fn start_in_the_middle() {
        let s = "héllo".as_bytes();
        let mut it = UcIter::with_position(s, 3);
        assert_eq!(it.next(), Some('l' as u32));
        assert_eq!(UcIter::with_position(s, 99).next(), None);
    }
}

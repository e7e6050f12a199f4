// unictype/trie.rs - Three-level packed lookup table.
//
// Layout, shared with scripts/gen-unicode-tables.pl:
//   level 1: indexed by cp >> 16, 17 entries, each a level-2 block number
//   level 2: blocks of 512 entries indexed by (cp >> 7) & 511, each a
//            level-3 block number
//   level 3: blocks of 128 values of `bits` width, packed little-endian
//            into u32 words, followed by one padding word
// NONE in level 1 or level 2 means every code point below it has the
// default value.

use crate::unitypes::Ucs4;

const NONE: u16 = 0xFFFF;

const LEVEL1_SHIFT: u32 = 16;
const LEVEL2_SHIFT: u32 = 7;
const LEVEL2_MASK: u32 = 511;
const LEVEL2_BLOCK: usize = 512;
const LEVEL3_MASK: u32 = 127;
const LEVEL3_BLOCK: usize = 128;

const LEVEL1_SIZE: usize = 17;

/// A read-only property table keyed by code point.
///
/// Instances are generated constant data; lookup is a total function and
/// returns `default` for unassigned code points and anything above U+10FFFF.
#[derive(Debug)]
pub struct Trie {
    pub(crate) level1: &'static [u16],
    pub(crate) level2: &'static [u16],
    pub(crate) level3: &'static [u32],
    pub(crate) bits: u32,
    pub(crate) default: u32,
}

impl Trie {
    /// Looks up the raw unsigned value stored for `uc`.
    #[inline]
    pub fn get(&self, uc: Ucs4) -> u32 {
        let i1 = (uc >> LEVEL1_SHIFT) as usize;
        if i1 >= LEVEL1_SIZE {
            return self.default;
        }
        let b2 = self.level1[i1];
        if b2 == NONE {
            return self.default;
        }
        let i2 = b2 as usize * LEVEL2_BLOCK + ((uc >> LEVEL2_SHIFT) & LEVEL2_MASK) as usize;
        let b3 = self.level2[i2];
        if b3 == NONE {
            return self.default;
        }
        let index = b3 as usize * LEVEL3_BLOCK + (uc & LEVEL3_MASK) as usize;
        self.unpack(index)
    }

    /// Looks up a value stored in two's complement, such as a mapping delta.
    #[inline]
    pub fn get_signed(&self, uc: Ucs4) -> i32 {
        let raw = self.get(uc);
        let shift = 32 - self.bits;
        ((raw << shift) as i32) >> shift
    }

    /// Returns true when the 1-bit property is set for `uc`.
    #[inline]
    pub fn contains(&self, uc: Ucs4) -> bool {
        self.get(uc) != 0
    }

    #[inline]
    fn unpack(&self, index: usize) -> u32 {
        let bitpos = index * self.bits as usize;
        let word = bitpos >> 5;
        let pair = self.level3[word] as u64 | (self.level3[word + 1] as u64) << 32;
        let mask = if self.bits == 32 {
            u32::MAX as u64
        } else {
            (1u64 << self.bits) - 1
        };
        ((pair >> (bitpos & 31)) & mask) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two code points with non-default values: U+0041 = 3, U+10000 = 5.
    static SMALL: Trie = Trie {
        level1: &[0x0000, 0x0001, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE],
        level2: &{
            let mut l2 = [NONE; 1024];
            l2[0] = 0;
            l2[512] = 1;
            l2
        },
        level3: &{
            // 3 bits per entry, 2 blocks of 128 entries = 768 bits = 24 words, plus padding.
            let mut w = [0u32; 25];
            // block 0, entry 0x41: bit 195
            w[195 >> 5] |= 3 << (195 & 31);
            // block 1, entry 0: bit 384
            w[384 >> 5] |= 5 << (384 & 31);
            w
        },
        bits: 3,
        default: 7,
    };

    #[test]
    fn lookup_assigned() {
        assert_eq!(SMALL.get(0x41), 3);
        assert_eq!(SMALL.get(0x10000), 5);
    }

    #[test]
    fn lookup_block_zero_entries() {
        assert_eq!(SMALL.get(0x40), 0);
        assert_eq!(SMALL.get(0x42), 0);
    }

    #[test]
    fn lookup_default() {
        assert_eq!(SMALL.get(0x80), 7);
        assert_eq!(SMALL.get(0x20000), 7);
        assert_eq!(SMALL.get(0x10FFFF), 7);
    }

    #[test]
    fn lookup_out_of_range() {
        assert_eq!(SMALL.get(0x110000), 7);
        assert_eq!(SMALL.get(u32::MAX), 7);
    }

    #[test]
    fn signed_values() {
        // 3-bit two's complement: 5 = 0b101 = -3, 3 = 0b011 = 3.
        assert_eq!(SMALL.get_signed(0x10000), -3);
        assert_eq!(SMALL.get_signed(0x41), 3);
    }
}

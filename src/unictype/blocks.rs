// unictype/blocks.rs - Block property.

use std::cmp::Ordering;

use super::names;
use super::tables::BLOCKS;
use crate::unitypes::Ucs4;

/// A contiguous range of code points with a block name.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct UcBlock {
    pub start: Ucs4,
    pub end: Ucs4,
    pub name: &'static str,
}

/// Returns the block containing `uc`, or `None` if `uc` lies outside every
/// block.
pub fn uc_block(uc: Ucs4) -> Option<&'static UcBlock> {
    BLOCKS
        .binary_search_by(|b| {
            if b.end < uc {
                Ordering::Less
            } else if b.start > uc {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|i| &BLOCKS[i])
}

#[inline]
pub fn uc_is_block(uc: Ucs4, block: &UcBlock) -> bool {
    block.start <= uc && uc <= block.end
}

pub fn uc_block_byname(name: &str) -> Option<&'static UcBlock> {
    names::position(name, BLOCKS.iter().map(|b| b.name)).map(|i| &BLOCKS[i])
}

/// Returns all blocks in code point order.
pub fn uc_all_blocks() -> &'static [UcBlock] {
    &BLOCKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let b = uc_block('a' as u32).unwrap();
        assert_eq!(b.name, "Basic Latin");
        assert_eq!((b.start, b.end), (0x0000, 0x007F));
        assert_eq!(uc_block(0x00E9).unwrap().name, "Latin-1 Supplement");
        assert_eq!(uc_block(0x4E2D).unwrap().name, "CJK Unified Ideographs");
        assert_eq!(uc_block(0x1F600).unwrap().name, "Emoticons");
    }

    #[test]
    fn gaps_and_out_of_range() {
        // U+2FE0..U+2FEF is not allocated to any block.
        assert!(uc_block(0x2FE0).is_none());
        assert!(uc_block(0x110000).is_none());
    }

    #[test]
    fn membership_and_byname() {
        let greek = uc_block_byname("greek and coptic").unwrap();
        assert!(uc_is_block(0x03B1, greek));
        assert!(!uc_is_block('a' as u32, greek));
    }

    #[test]
    fn blocks_are_sorted_and_disjoint() {
        let all = uc_all_blocks();
        assert!(all.windows(2).all(|w| w[0].end < w[1].start));
        assert!(all.iter().all(|b| b.start <= b.end));
    }
}

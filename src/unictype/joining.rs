// unictype/joining.rs - Arabic/Syriac joining type and joining group.

use super::names;
use super::tables::{JOINING_GROUP, JOINING_GROUP_NAMES, JOINING_TYPE};
use crate::unitypes::Ucs4;

/// Joining_Type values, in the order stored in the JOINING_TYPE trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UcJoiningType {
    /// Non_Joining
    U = 0,
    /// Transparent
    T,
    /// Join_Causing
    C,
    /// Left_Joining
    L,
    /// Right_Joining
    R,
    /// Dual_Joining
    D,
}

static TYPES: [(UcJoiningType, &str, &str); 6] = [
    (UcJoiningType::U, "U", "Non_Joining"),
    (UcJoiningType::T, "T", "Transparent"),
    (UcJoiningType::C, "C", "Join_Causing"),
    (UcJoiningType::L, "L", "Left_Joining"),
    (UcJoiningType::R, "R", "Right_Joining"),
    (UcJoiningType::D, "D", "Dual_Joining"),
];

#[inline]
pub fn uc_joining_type(uc: Ucs4) -> UcJoiningType {
    TYPES
        .get(JOINING_TYPE.get(uc) as usize)
        .map_or(UcJoiningType::U, |(t, _, _)| *t)
}

pub fn uc_joining_type_name(joining_type: UcJoiningType) -> &'static str {
    TYPES[joining_type as usize].1
}

pub fn uc_joining_type_long_name(joining_type: UcJoiningType) -> &'static str {
    TYPES[joining_type as usize].2
}

pub fn uc_joining_type_byname(name: &str) -> Option<UcJoiningType> {
    TYPES
        .iter()
        .find(|(_, short, long)| names::loose_eq(name, short) || names::loose_eq(name, long))
        .map(|(t, _, _)| *t)
}

/// A Joining_Group value. The named constants (`UcJoiningGroup::BEH`, ...)
/// are generated alongside the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UcJoiningGroup(pub(crate) u8);

impl UcJoiningGroup {
    pub fn value(self) -> u8 {
        self.0
    }
}

#[inline]
pub fn uc_joining_group(uc: Ucs4) -> UcJoiningGroup {
    UcJoiningGroup(JOINING_GROUP.get(uc) as u8)
}

/// Returns the group name, e.g. "Teh Marbuta".
pub fn uc_joining_group_name(group: UcJoiningGroup) -> Option<&'static str> {
    JOINING_GROUP_NAMES.get(group.0 as usize).copied()
}

pub fn uc_joining_group_byname(name: &str) -> Option<UcJoiningGroup> {
    names::position(name, JOINING_GROUP_NAMES.iter().copied()).map(|i| UcJoiningGroup(i as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joining_types() {
        assert_eq!(uc_joining_type('a' as u32), UcJoiningType::U);
        assert_eq!(uc_joining_type(0x0628), UcJoiningType::D); // BEH
        assert_eq!(uc_joining_type(0x0627), UcJoiningType::R); // ALEF
        assert_eq!(uc_joining_type(0x064B), UcJoiningType::T); // FATHATAN
        assert_eq!(uc_joining_type(0x200D), UcJoiningType::C); // ZWJ
        assert_eq!(uc_joining_type(0x110000), UcJoiningType::U);
    }

    #[test]
    fn joining_type_names() {
        assert_eq!(uc_joining_type_name(UcJoiningType::D), "D");
        assert_eq!(uc_joining_type_long_name(UcJoiningType::D), "Dual_Joining");
        assert_eq!(uc_joining_type_byname("right joining"), Some(UcJoiningType::R));
        assert_eq!(uc_joining_type_byname("X"), None);
    }

    #[test]
    fn joining_groups() {
        assert_eq!(uc_joining_group(0x0628), UcJoiningGroup::BEH);
        assert_eq!(uc_joining_group(0x0629), UcJoiningGroup::TEH_MARBUTA);
        assert_eq!(uc_joining_group('a' as u32), UcJoiningGroup::NONE);
        assert_eq!(uc_joining_group_name(UcJoiningGroup::TEH_MARBUTA), Some("Teh Marbuta"));
        assert_eq!(uc_joining_group_byname("TEH_MARBUTA"), Some(UcJoiningGroup::TEH_MARBUTA));
        assert_eq!(uc_joining_group_byname("no joining group"), Some(UcJoiningGroup::NONE));
    }
}

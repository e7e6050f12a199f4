// unictype/scripts.rs - Script property.

use super::names;
use super::tables::{SCRIPT, SCRIPTS};
use crate::unitypes::Ucs4;

/// A script descriptor. Descriptors are static; compare them by identity or
/// by `index`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct UcScript {
    pub index: u8,
    pub name: &'static str,
}

/// Returns the script of `uc`, or `None` for code points in no script
/// (Unknown), including everything above U+10FFFF.
#[inline]
pub fn uc_script(uc: Ucs4) -> Option<&'static UcScript> {
    match SCRIPT.get(uc) {
        0 => None,
        n => SCRIPTS.get(n as usize - 1),
    }
}

#[inline]
pub fn uc_is_script(uc: Ucs4, script: &UcScript) -> bool {
    uc_script(uc).is_some_and(|s| s.index == script.index)
}

/// Looks a script up by name ("Latin", "old-italic", ...).
pub fn uc_script_byname(name: &str) -> Option<&'static UcScript> {
    names::position(name, SCRIPTS.iter().map(|s| s.name)).map(|i| &SCRIPTS[i])
}

/// Returns all scripts, sorted by name.
pub fn uc_all_scripts() -> &'static [UcScript] {
    &SCRIPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_scripts() {
        assert_eq!(uc_script('A' as u32).map(|s| s.name), Some("Latin"));
        assert_eq!(uc_script(0x03B1).map(|s| s.name), Some("Greek"));
        assert_eq!(uc_script(0x0416).map(|s| s.name), Some("Cyrillic"));
        assert_eq!(uc_script(0x4E2D).map(|s| s.name), Some("Han"));
        assert_eq!(uc_script(0xD55C).map(|s| s.name), Some("Hangul"));
        assert_eq!(uc_script(' ' as u32).map(|s| s.name), Some("Common"));
        assert_eq!(uc_script(0x0301).map(|s| s.name), Some("Inherited"));
    }

    #[test]
    fn unknown_script() {
        assert!(uc_script(0x0378).is_none());
        assert!(uc_script(0x110000).is_none());
    }

    #[test]
    fn byname_and_membership() {
        let latin = uc_script_byname("latin").unwrap();
        assert!(uc_is_script('q' as u32, latin));
        assert!(!uc_is_script(0x03B1, latin));
        assert_eq!(
            uc_script_byname("Old Italic").map(|s| s.name),
            Some("Old_Italic")
        );
        assert!(uc_script_byname("Klingon").is_none());
    }

    #[test]
    fn all_scripts_sorted_and_indexed() {
        let all = uc_all_scripts();
        assert!(all.len() > 150);
        for (i, s) in all.iter().enumerate() {
            assert_eq!(s.index as usize, i);
        }
        assert!(all.windows(2).all(|w| w[0].name < w[1].name));
    }
}

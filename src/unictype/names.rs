// unictype/names.rs - Loose matching for property and value names.
//
// Names compare equal when they match after dropping ' ', '-' and '_' and
// folding ASCII case, so "Arabic_Letter", "arabic-letter" and "ArabicLetter"
// all select the same value.

#[inline]
fn is_separator(b: u8) -> bool {
    b == b' ' || b == b'-' || b == b'_'
}

fn loose_bytes(name: &str) -> impl Iterator<Item = u8> + '_ {
    name.bytes()
        .filter(|&b| !is_separator(b))
        .map(|b| b.to_ascii_lowercase())
}

/// Returns true when `a` and `b` name the same thing under loose matching.
pub(crate) fn loose_eq(a: &str, b: &str) -> bool {
    loose_bytes(a).eq(loose_bytes(b))
}

/// Finds the value whose name loosely matches `name`.
pub(crate) fn lookup<T: Copy>(name: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| loose_eq(name, candidate))
        .map(|&(_, value)| value)
}

/// Finds the index of the first candidate that loosely matches `name`.
pub(crate) fn position<'a, I>(name: &str, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().position(|c| loose_eq(name, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_case() {
        assert!(loose_eq("Arabic_Letter", "arabic-letter"));
        assert!(loose_eq("Arabic Letter", "ARABICLETTER"));
        assert!(!loose_eq("Arabic_Letter", "Arabic_Number"));
        assert!(!loose_eq("L", "LRE"));
        assert!(loose_eq("", "_-_"));
    }

    #[test]
    fn lookup_table() {
        let table = [("Left_To_Right", 0), ("Right_To_Left", 3)];
        assert_eq!(lookup("right to left", &table), Some(3));
        assert_eq!(lookup("up_to_down", &table), None);
    }

    #[test]
    fn position_in_list() {
        let names = ["Basic Latin", "Latin-1 Supplement"];
        assert_eq!(position("latin_1_supplement", names), Some(1));
        assert_eq!(position("Latin", names), None);
    }
}

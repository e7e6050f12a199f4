// unictype/numeric.rs - Decimal, digit and numeric values.
//
// The NUMERIC trie stores (value index << 2) | numeric type; the index
// selects a fraction in NUMERIC_VALUES.

use super::tables::{NUMERIC, NUMERIC_VALUES};
use crate::unitypes::Ucs4;

const TYPE_DECIMAL: u32 = 1;
const TYPE_DIGIT: u32 = 2;

/// A rational numeric value. Non-numeric characters yield `0/0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UcFraction {
    pub numerator: i64,
    pub denominator: i32,
}

impl UcFraction {
    pub fn is_numeric(&self) -> bool {
        self.denominator != 0
    }
}

#[inline]
fn lookup(uc: Ucs4) -> (u32, UcFraction) {
    let packed = NUMERIC.get(uc);
    let (numerator, denominator) = NUMERIC_VALUES
        .get((packed >> 2) as usize)
        .copied()
        .unwrap_or((0, 0));
    (packed & 3, UcFraction { numerator, denominator })
}

/// Returns the decimal digit value (Numeric_Type=Decimal), or -1.
pub fn uc_decimal_value(uc: Ucs4) -> i32 {
    match lookup(uc) {
        (TYPE_DECIMAL, v) => v.numerator as i32,
        _ => -1,
    }
}

/// Returns the digit value (Numeric_Type=Decimal or Digit), or -1.
pub fn uc_digit_value(uc: Ucs4) -> i32 {
    match lookup(uc) {
        (TYPE_DECIMAL | TYPE_DIGIT, v) => v.numerator as i32,
        _ => -1,
    }
}

/// Returns the numeric value of `uc` as a fraction.
pub fn uc_numeric_value(uc: Ucs4) -> UcFraction {
    lookup(uc).1
}

/// Numeric_Type other than None.
pub(crate) fn has_numeric_type(uc: Ucs4) -> bool {
    NUMERIC.get(uc) & 3 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digits() {
        assert_eq!(uc_decimal_value('7' as u32), 7);
        assert_eq!(uc_decimal_value(0x0663), 3); // ARABIC-INDIC DIGIT THREE
        assert_eq!(uc_decimal_value(0xFF10), 0); // FULLWIDTH DIGIT ZERO
        assert_eq!(uc_decimal_value('a' as u32), -1);
        assert_eq!(uc_decimal_value(0x00B2), -1);
    }

    #[test]
    fn digits() {
        assert_eq!(uc_digit_value(0x00B2), 2); // SUPERSCRIPT TWO
        assert_eq!(uc_digit_value(0x2460), 1); // CIRCLED DIGIT ONE
        assert_eq!(uc_digit_value('9' as u32), 9);
        assert_eq!(uc_digit_value(0x2155), -1);
    }

    #[test]
    fn numeric_values() {
        assert_eq!(uc_numeric_value(0x00BD), UcFraction { numerator: 1, denominator: 2 });
        assert_eq!(uc_numeric_value(0x2155), UcFraction { numerator: 1, denominator: 5 });
        assert_eq!(uc_numeric_value(0x216F), UcFraction { numerator: 1000, denominator: 1 });
        assert_eq!(uc_numeric_value(0x0F33), UcFraction { numerator: -1, denominator: 2 });
        assert_eq!(uc_numeric_value(0x4E07), UcFraction { numerator: 10000, denominator: 1 });
        let none = uc_numeric_value('x' as u32);
        assert!(!none.is_numeric());
        assert_eq!(none, UcFraction { numerator: 0, denominator: 0 });
    }

    #[test]
    fn out_of_range_is_not_numeric() {
        assert!(!uc_numeric_value(0x110000).is_numeric());
        assert!(!has_numeric_type(0x110000));
        assert!(has_numeric_type('5' as u32));
    }
}

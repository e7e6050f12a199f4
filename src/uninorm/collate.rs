// uninorm/collate.rs - Locale collation seam.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::UnistringError;
use crate::uniconv::{locale_charset, u8_conv_to_encoding, IconvEhandler};

/// Locale-dependent string transformation, the equivalent of `strxfrm`.
///
/// Comparing two transformed strings byte by byte gives the locale's
/// collation order of the originals.
pub trait Collator: Send + Sync {
    /// Collation key of `s`, which is in the locale's encoding.
    fn transform(&self, s: &[u8]) -> Vec<u8>;

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        self.transform(a).cmp(&self.transform(b))
    }
}

/// Collation of the C and POSIX locales: plain byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CCollator;

impl Collator for CCollator {
    fn transform(&self, s: &[u8]) -> Vec<u8> {
        s.to_vec()
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }
}

/// A character encoding together with the collation rules to apply to
/// strings in it.
pub struct Locale {
    charset: String,
    utf8: bool,
    collator: Box<dyn Collator>,
}

impl Locale {
    pub fn new(charset: impl Into<String>, collator: impl Collator + 'static) -> Self {
        let charset = charset.into();
        let utf8 = charset.eq_ignore_ascii_case("UTF-8") || charset.eq_ignore_ascii_case("UTF8");
        Locale { charset, utf8, collator: Box::new(collator) }
    }

    /// The C locale: ASCII with byte order collation.
    pub fn c() -> Self {
        Locale::new("ASCII", CCollator)
    }

    /// The encoding of the current locale with byte order collation.
    pub fn current() -> Self {
        Locale::new(locale_charset(), CCollator)
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    // UTF-8 text re-encoded in this locale's charset. Characters the charset
    // lacks are an error.
    fn encode<'a>(&self, utf8: &'a [u8]) -> Result<Cow<'a, [u8]>, UnistringError> {
        if self.utf8 {
            return Ok(Cow::Borrowed(utf8));
        }
        u8_conv_to_encoding(&self.charset, IconvEhandler::Error, utf8, None).map(Cow::Owned)
    }

    /// Collation key of the UTF-8 string `utf8`.
    pub fn xfrm(&self, utf8: &[u8]) -> Result<Vec<u8>, UnistringError> {
        Ok(self.collator.transform(&self.encode(utf8)?))
    }

    /// Collation order of two UTF-8 strings.
    pub fn compare(&self, a: &[u8], b: &[u8]) -> Result<Ordering, UnistringError> {
        let a = self.encode(a)?;
        let b = self.encode(b)?;
        Ok(self.collator.compare(&a, &b))
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale").field("charset", &self.charset).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reversed;

    impl Collator for Reversed {
        fn transform(&self, s: &[u8]) -> Vec<u8> {
            s.iter().map(|b| !b).collect()
        }
    }

    #[test]
    fn c_locale_is_byte_order() {
        let c = Locale::c();
        assert_eq!(c.compare(b"abc", b"abd"), Ok(Ordering::Less));
        assert_eq!(c.xfrm(b"abc").unwrap(), b"abc");
        assert_eq!(c.charset(), "ASCII");
    }

    #[test]
    fn characters_outside_the_charset_fail() {
        let c = Locale::c();
        assert!(matches!(c.xfrm("é".as_bytes()), Err(UnistringError::IllegalSequence { offset: 0 })));
    }

    #[test]
    fn custom_collator() {
        let loc = Locale::new("ISO-8859-1", Reversed);
        assert_eq!(loc.compare(b"a", b"b"), Ok(Ordering::Greater));
        assert_eq!(loc.xfrm("é".as_bytes()).unwrap(), vec![!0xE9u8]);
    }

    #[test]
    fn utf8_locale_skips_conversion() {
        let loc = Locale::new("utf8", CCollator);
        assert_eq!(loc.xfrm("é".as_bytes()).unwrap(), "é".as_bytes());
    }
}

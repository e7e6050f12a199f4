// uniconv/localcharset.rs - Character encoding of the current locale.

use std::env;

use log::debug;

// Spellings seen in locale names, keyed by their lowercase form with '-'
// and '_' removed.
static CANONICAL_NAMES: [(&str, &str); 22] = [
    ("utf8", "UTF-8"),
    ("eucjp", "EUC-JP"),
    ("euckr", "EUC-KR"),
    ("euctw", "EUC-TW"),
    ("euccn", "GB2312"),
    ("gb2312", "GB2312"),
    ("gbk", "GBK"),
    ("gb18030", "GB18030"),
    ("big5", "BIG5"),
    ("big5hkscs", "BIG5-HKSCS"),
    ("sjis", "SHIFT_JIS"),
    ("shiftjis", "SHIFT_JIS"),
    ("cp949", "CP949"),
    ("johab", "JOHAB"),
    ("iso88591", "ISO-8859-1"),
    ("iso88592", "ISO-8859-2"),
    ("iso88595", "ISO-8859-5"),
    ("iso88597", "ISO-8859-7"),
    ("iso885915", "ISO-8859-15"),
    ("koi8r", "KOI8-R"),
    ("koi8u", "KOI8-U"),
    ("cp1252", "CP1252"),
];

/// The locale name in effect for character classification: the first
/// non-empty value of `LC_ALL`, `LC_CTYPE` and `LANG`.
pub(crate) fn locale_name() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|v| !v.is_empty())
}

fn canonical_charset(codeset: &str) -> String {
    let key: String = codeset
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match CANONICAL_NAMES.iter().find(|(k, _)| *k == key) {
        Some((_, name)) => name.to_string(),
        None => codeset.to_ascii_uppercase(),
    }
}

/// Charset named by a locale name such as `de_DE.utf8@euro`.
pub(crate) fn charset_of_locale(locale: &str) -> Option<String> {
    let locale = locale.split('@').next().unwrap_or(locale);
    if locale == "C" || locale == "POSIX" {
        return None;
    }
    let (_, codeset) = locale.split_once('.')?;
    if codeset.is_empty() {
        return None;
    }
    Some(canonical_charset(codeset))
}

/// Returns the canonical name of the character encoding used by the current
/// locale. The C and POSIX locales, and locale names without a codeset, give
/// `"ASCII"`.
pub fn locale_charset() -> String {
    match locale_name() {
        Some(name) => match charset_of_locale(&name) {
            Some(charset) => charset,
            None => {
                debug!("locale {name:?} names no codeset, using ASCII");
                "ASCII".to_string()
            }
        },
        None => {
            debug!("no locale set, using ASCII");
            "ASCII".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codeset_spellings() {
        assert_eq!(charset_of_locale("en_US.UTF-8").as_deref(), Some("UTF-8"));
        assert_eq!(charset_of_locale("de_DE.utf8").as_deref(), Some("UTF-8"));
        assert_eq!(charset_of_locale("ja_JP.eucJP").as_deref(), Some("EUC-JP"));
        assert_eq!(charset_of_locale("zh_CN.gb18030").as_deref(), Some("GB18030"));
        assert_eq!(charset_of_locale("de_DE.ISO-8859-15@euro").as_deref(), Some("ISO-8859-15"));
        assert_eq!(charset_of_locale("ru_RU.koi8r").as_deref(), Some("KOI8-R"));
        assert_eq!(charset_of_locale("xx_XX.FOO-1").as_deref(), Some("FOO-1"));
    }

    #[test]
    fn no_codeset() {
        assert_eq!(charset_of_locale("C"), None);
        assert_eq!(charset_of_locale("POSIX"), None);
        assert_eq!(charset_of_locale("de_DE"), None);
        assert_eq!(charset_of_locale("de_DE.@euro"), None);
    }

    #[test]
    fn c_utf8() {
        assert_eq!(charset_of_locale("C.UTF-8").as_deref(), Some("UTF-8"));
    }
}

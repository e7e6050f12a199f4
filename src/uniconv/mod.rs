// uniconv/mod.rs - Conversion between Unicode strings and legacy encodings.
//
//! Conversion between legacy character encodings and UTF-8, UTF-16 and
//! UTF-32.
//!
//! Every conversion decodes the input to code points and encodes them again,
//! recording for each character the input position it came from. The
//! optional offset map returned by the `offsets` arguments has one entry per
//! output unit: the index of the first input unit of the character that
//! produced it, or [`OFFSET_NONE`] for the remaining units of a character.
//!
//! | Input problem | `Error` | `QuestionMark` | `EscapeSequence` |
//! |---|---|---|---|
//! | ill-formed input | `IllegalSequence` | `?` | `?` |
//! | not representable in the target | `IllegalSequence` | `?` | `\uXXXX` |

mod codeset;
mod localcharset;
mod stream;

use std::borrow::Cow;

use log::{debug, trace};

use crate::error::UnistringError;
use crate::unistr::{check, strlen, UtfUnit};
use codeset::{decode_units, encode_units, Codeset, DecodeState, Decoded};

pub use localcharset::locale_charset;
pub(crate) use localcharset::locale_name;
pub use stream::ConvStream;

/// Offset map entry for output units that do not start a character.
pub const OFFSET_NONE: usize = usize::MAX;

/// What to do with input that cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconvEhandler {
    /// Fail with [`UnistringError::IllegalSequence`].
    Error,
    /// Substitute `?`.
    QuestionMark,
    /// Substitute `?` for ill-formed input and an escape such as `\u20AC`
    /// for unrepresentable characters.
    EscapeSequence,
}

pub const ICONVEH_ERROR: IconvEhandler = IconvEhandler::Error;
pub const ICONVEH_QUESTION_MARK: IconvEhandler = IconvEhandler::QuestionMark;
pub const ICONVEH_ESCAPE_SEQUENCE: IconvEhandler = IconvEhandler::EscapeSequence;

fn decode_bytes(src: &[u8], from: Codeset, handler: IconvEhandler) -> Result<Decoded, UnistringError> {
    let mut decoded = Decoded::with_capacity(src.len())?;
    from.decode(&mut DecodeState::default(), src, 0, true, handler, &mut decoded)?;
    Ok(decoded)
}

// Identity copy of well-formed UTF-8 with the offsets a conversion would give.
fn copy_utf8(src: &[u8], offsets: Option<&mut Vec<usize>>) -> Result<Vec<u8>, UnistringError> {
    let mut out = Vec::new();
    out.try_reserve(src.len())?;
    out.extend_from_slice(src);
    if let Some(o) = offsets {
        o.clear();
        o.try_reserve(src.len())?;
        o.extend(src.iter().enumerate().map(|(i, b)| if b.is_lead() { i } else { OFFSET_NONE }));
    }
    Ok(out)
}

/// Converts `src` from `from_codeset` to `to_codeset`.
pub fn mem_iconveh(
    src: &[u8],
    from_codeset: &str,
    to_codeset: &str,
    handler: IconvEhandler,
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u8>, UnistringError> {
    let from = Codeset::resolve(from_codeset)?;
    let to = Codeset::resolve(to_codeset)?;
    if from == Codeset::Utf8 && to == Codeset::Utf8 && check(src).is_none() {
        trace!("validating copy of {} bytes", src.len());
        return copy_utf8(src, offsets);
    }
    trace!("converting {} bytes from {} to {}", src.len(), from.name(), to.name());
    let decoded = decode_bytes(src, from, handler)?;
    let mut out = Vec::new();
    out.try_reserve(decoded.chars.len())?;
    to.encode(&decoded, handler, &mut out, offsets)?;
    Ok(out)
}

fn conv_from_encoding<U: UtfUnit>(
    fromcode: &str,
    handler: IconvEhandler,
    src: &[u8],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<U>, UnistringError> {
    let from = Codeset::resolve(fromcode)?;
    trace!("decoding {} bytes from {}", src.len(), from.name());
    let decoded = decode_bytes(src, from, handler)?;
    let mut out = Vec::new();
    out.try_reserve(decoded.chars.len())?;
    encode_units(&decoded, &mut out, offsets)?;
    Ok(out)
}

fn conv_to_encoding<U: UtfUnit>(
    tocode: &str,
    handler: IconvEhandler,
    src: &[U],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u8>, UnistringError> {
    let to = Codeset::resolve(tocode)?;
    trace!("encoding {} units to {}", src.len(), to.name());
    let mut decoded = Decoded::with_capacity(src.len())?;
    decode_units(src, 0, true, handler, &mut decoded)?;
    let mut out = Vec::new();
    out.try_reserve(src.len())?;
    to.encode(&decoded, handler, &mut out, offsets)?;
    Ok(out)
}

/// Converts `src` from `fromcode` to UTF-8.
pub fn u8_conv_from_encoding(
    fromcode: &str,
    handler: IconvEhandler,
    src: &[u8],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u8>, UnistringError> {
    mem_iconveh(src, fromcode, "UTF-8", handler, offsets)
}

/// Converts UTF-8 `src` to `tocode`.
pub fn u8_conv_to_encoding(
    tocode: &str,
    handler: IconvEhandler,
    src: &[u8],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u8>, UnistringError> {
    mem_iconveh(src, "UTF-8", tocode, handler, offsets)
}

pub fn u16_conv_from_encoding(
    fromcode: &str,
    handler: IconvEhandler,
    src: &[u8],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u16>, UnistringError> {
    conv_from_encoding(fromcode, handler, src, offsets)
}

pub fn u16_conv_to_encoding(
    tocode: &str,
    handler: IconvEhandler,
    src: &[u16],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u8>, UnistringError> {
    conv_to_encoding(tocode, handler, src, offsets)
}

pub fn u32_conv_from_encoding(
    fromcode: &str,
    handler: IconvEhandler,
    src: &[u8],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u32>, UnistringError> {
    conv_from_encoding(fromcode, handler, src, offsets)
}

pub fn u32_conv_to_encoding(
    tocode: &str,
    handler: IconvEhandler,
    src: &[u32],
    offsets: Option<&mut Vec<usize>>,
) -> Result<Vec<u8>, UnistringError> {
    conv_to_encoding(tocode, handler, src, offsets)
}

// === NUL-terminated strings ===

/// Converts the NUL-terminated `string` from `fromcode`. The NUL and
/// anything after it is not part of the input.
pub fn u8_strconv_from_encoding(
    string: &[u8],
    fromcode: &str,
    handler: IconvEhandler,
) -> Result<String, UnistringError> {
    let wide = matches!(Codeset::resolve(fromcode)?, Codeset::Utf16(_) | Codeset::Utf32(_));
    // A zero byte terminates only byte-oriented input.
    let end = if wide { string.len() } else { strlen(string) };
    let utf8 = mem_iconveh(&string[..end], fromcode, "UTF-8", handler, None)?;
    String::from_utf8(utf8).map_err(|e| UnistringError::illegal(e.utf8_error().valid_up_to()))
}

pub fn u8_strconv_to_encoding(
    string: &str,
    tocode: &str,
    handler: IconvEhandler,
) -> Result<Vec<u8>, UnistringError> {
    let end = strlen(string.as_bytes());
    mem_iconveh(&string.as_bytes()[..end], "UTF-8", tocode, handler, None)
}

/// Converts from the locale's encoding, substituting `?` for anything that
/// does not convert.
pub fn u8_strconv_from_locale(string: &[u8]) -> Result<String, UnistringError> {
    u8_strconv_from_encoding(string, &locale_charset(), IconvEhandler::QuestionMark)
}

pub fn u8_strconv_to_locale(string: &str) -> Result<Vec<u8>, UnistringError> {
    u8_strconv_to_encoding(string, &locale_charset(), IconvEhandler::QuestionMark)
}

// === Locale-encoded input for the segmentation functions ===

/// A string in some encoding seen as UTF-8, with the map back to the input.
pub(crate) struct LocaleView<'a> {
    utf8: Cow<'a, [u8]>,
    // Per UTF-8 unit, the input position of the character it starts. `None`
    // when the positions coincide.
    offsets: Option<Vec<usize>>,
}

impl<'a> LocaleView<'a> {
    pub(crate) fn new(encoding: &str, s: &'a [u8]) -> Self {
        if matches!(Codeset::resolve(encoding), Ok(Codeset::Utf8)) {
            return LocaleView { utf8: Cow::Borrowed(s), offsets: None };
        }
        let mut offsets = Vec::new();
        match mem_iconveh(s, encoding, "UTF-8", IconvEhandler::QuestionMark, Some(&mut offsets)) {
            Ok(utf8) => LocaleView { utf8: Cow::Owned(utf8), offsets: Some(offsets) },
            Err(err) => {
                // Keep ASCII and treat every other byte as one unknown character.
                debug!("cannot decode locale string as {encoding:?} ({err}), using ASCII projection");
                let ascii = s.iter().map(|&b| if b < 0x80 { b } else { b'?' }).collect();
                LocaleView { utf8: Cow::Owned(ascii), offsets: None }
            }
        }
    }

    pub(crate) fn utf8(&self) -> &[u8] {
        &self.utf8
    }

    /// Moves per-UTF-8-unit `values` to the input positions in `out`, which
    /// has one entry per input unit. Input units that do not start a
    /// character get `fill`.
    pub(crate) fn scatter<T: Copy>(&self, values: &[T], out: &mut [T], fill: T) {
        match &self.offsets {
            None => out.copy_from_slice(&values[..out.len()]),
            Some(offsets) => {
                out.fill(fill);
                for (&o, &v) in offsets.iter().zip(values) {
                    if o != OFFSET_NONE {
                        out[o] = v;
                    }
                }
            }
        }
    }

    /// Per-UTF-8-unit copy of the per-input-unit `values`. Positions past
    /// the end of `values` get `fill`.
    pub(crate) fn gather<T: Copy>(&self, values: &[T], fill: T) -> Vec<T> {
        match &self.offsets {
            None => values.to_vec(),
            Some(offsets) => offsets
                .iter()
                .map(|&o| if o == OFFSET_NONE { fill } else { values.get(o).copied().unwrap_or(fill) })
                .collect(),
        }
    }
}

/// Runs a UTF-8 break function over `s`, which is in `encoding`, and maps
/// its per-unit results back onto `out`.
///
/// # Panics
///
/// Panics if `out` and `s` differ in length.
pub(crate) fn ulc_breaks_in<T: Copy>(
    encoding: &str,
    s: &[u8],
    out: &mut [T],
    fill: T,
    compute: impl FnOnce(&[u8], &mut [T]),
) {
    assert_eq!(out.len(), s.len(), "one break value per input unit");
    let view = LocaleView::new(encoding, s);
    let mut values = vec![fill; view.utf8().len()];
    compute(view.utf8(), &mut values);
    view.scatter(&values, out, fill);
}

/// [`ulc_breaks_in`] with the locale's encoding.
pub(crate) fn ulc_breaks<T: Copy>(s: &[u8], out: &mut [T], fill: T, compute: impl FnOnce(&[u8], &mut [T])) {
    ulc_breaks_in(&locale_charset(), s, out, fill, compute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_round_trip() {
        let latin1 = u8_conv_to_encoding("ISO-8859-1", IconvEhandler::Error, "café".as_bytes(), None).unwrap();
        assert_eq!(latin1, b"caf\xE9");
        let back = u8_conv_from_encoding("ISO-8859-1", IconvEhandler::Error, &latin1, None).unwrap();
        assert_eq!(back, "café".as_bytes());
    }

    #[test]
    fn unrepresentable_character_policies() {
        let src = "5€".as_bytes();
        assert_eq!(
            u8_conv_to_encoding("ISO-8859-1", IconvEhandler::Error, src, None),
            Err(UnistringError::illegal(1))
        );
        assert_eq!(
            u8_conv_to_encoding("ISO-8859-1", IconvEhandler::QuestionMark, src, None).unwrap(),
            b"5?"
        );
        assert_eq!(
            u8_conv_to_encoding("ISO-8859-1", IconvEhandler::EscapeSequence, src, None).unwrap(),
            b"5\\u20AC"
        );
    }

    #[test]
    fn offsets_point_at_character_starts() {
        let mut offsets = Vec::new();
        let out = u8_conv_from_encoding("ISO-8859-1", IconvEhandler::Error, b"a\xE9b", Some(&mut offsets)).unwrap();
        assert_eq!(out, "aéb".as_bytes());
        assert_eq!(offsets, vec![0, 1, OFFSET_NONE, 2]);

        let out = u8_conv_to_encoding("ISO-8859-1", IconvEhandler::EscapeSequence, "€x".as_bytes(), Some(&mut offsets))
            .unwrap();
        assert_eq!(out, b"\\u20ACx");
        assert_eq!(offsets, vec![0, OFFSET_NONE, OFFSET_NONE, OFFSET_NONE, OFFSET_NONE, OFFSET_NONE, 3]);
    }

    #[test]
    fn validating_copy() {
        let mut offsets = Vec::new();
        let out = mem_iconveh("né".as_bytes(), "UTF-8", "utf8", IconvEhandler::Error, Some(&mut offsets)).unwrap();
        assert_eq!(out, "né".as_bytes());
        assert_eq!(offsets, vec![0, 1, OFFSET_NONE]);
        assert_eq!(
            mem_iconveh(b"a\xFFb", "UTF-8", "UTF-8", IconvEhandler::Error, None),
            Err(UnistringError::illegal(1))
        );
        assert_eq!(mem_iconveh(b"a\xFFb", "UTF-8", "UTF-8", IconvEhandler::QuestionMark, None).unwrap(), b"a?b");
    }

    #[test]
    fn utf16_output_has_bom() {
        let mut offsets = Vec::new();
        let out = u8_conv_to_encoding("UTF-16", IconvEhandler::Error, b"A", Some(&mut offsets)).unwrap();
        assert_eq!(out, vec![0xFE, 0xFF, 0x00, 0x41]);
        assert_eq!(offsets, vec![OFFSET_NONE, OFFSET_NONE, 0, OFFSET_NONE]);
        let out = u8_conv_to_encoding("UTF-16LE", IconvEhandler::Error, b"A", None).unwrap();
        assert_eq!(out, vec![0x41, 0x00]);
    }

    #[test]
    fn wide_units() {
        let mut offsets = Vec::new();
        let u16s = u16_conv_from_encoding("EUC-JP", IconvEhandler::Error, &[0x61, 0xC6, 0xFC], Some(&mut offsets))
            .unwrap();
        assert_eq!(u16s, vec![0x61, 0x65E5]);
        assert_eq!(offsets, vec![0, 1]);
        let bytes = u16_conv_to_encoding("EUC-JP", IconvEhandler::Error, &u16s, None).unwrap();
        assert_eq!(bytes, vec![0x61, 0xC6, 0xFC]);
        let u32s = u32_conv_from_encoding("UTF-8", IconvEhandler::Error, "😀".as_bytes(), None).unwrap();
        assert_eq!(u32s, vec![0x1F600]);
        assert_eq!(
            u32_conv_to_encoding("ASCII", IconvEhandler::Error, &[0x41, 0xD800], None),
            Err(UnistringError::illegal(1))
        );
    }

    #[test]
    fn external_unmappable() {
        assert_eq!(
            u8_conv_to_encoding("SHIFT_JIS", IconvEhandler::Error, "aé".as_bytes(), None),
            Err(UnistringError::illegal(1))
        );
        assert_eq!(
            u8_conv_to_encoding("SHIFT_JIS", IconvEhandler::EscapeSequence, "aé".as_bytes(), None).unwrap(),
            b"a\\u00E9"
        );
    }

    #[test]
    fn unsupported_names() {
        let err = mem_iconveh(b"x", "UTF-8", "EBCDIC-XYZ", IconvEhandler::Error, None).unwrap_err();
        assert_eq!(err.code(), libc::EINVAL);
        // UTF-16LE through encoding_rs would write UTF-8; the native codec
        // is used instead, but the WHATWG "replacement" encoding is refused.
        assert!(u8_conv_to_encoding("iso-2022-kr", IconvEhandler::Error, b"x", None).is_err());
    }

    #[test]
    fn strconv_stops_at_nul() {
        assert_eq!(u8_strconv_from_encoding(b"ab\xE9\0zz", "ISO-8859-1", IconvEhandler::Error).unwrap(), "abé");
        assert_eq!(u8_strconv_to_encoding("é\0x", "ISO-8859-1", IconvEhandler::Error).unwrap(), b"\xE9");
        assert_eq!(
            u8_strconv_from_encoding(&[0x00, 0x41], "UTF-16BE", IconvEhandler::Error).unwrap(),
            "A"
        );
    }

    #[test]
    fn locale_view_maps_back() {
        let mut out = [false; 4];
        ulc_breaks_in("ISO-8859-1", b"a\xE9 b", &mut out, false, |utf8, flags: &mut [bool]| {
            assert_eq!(utf8, "aé b".as_bytes());
            for (i, f) in flags.iter_mut().enumerate() {
                *f = i > 0 && utf8[i] == b' ';
            }
        });
        assert_eq!(out, [false, false, true, false]);

        let view = LocaleView::new("ISO-8859-1", b"\xE9x");
        assert_eq!(view.gather(&[7, 9], 0), vec![7, 0, 9]);

        let view = LocaleView::new("NO-SUCH-CHARSET", b"a\xE9");
        assert_eq!(view.utf8(), b"a?");
    }

    #[test]
    #[should_panic(expected = "one break value per input unit")]
    fn legacy_breaks_need_one_value_per_byte() {
        let mut out = [false; 1];
        ulc_breaks_in("ISO-8859-1", b"a\xE9", &mut out, false, |utf8, flags| {
            assert_eq!(flags.len(), utf8.len());
        });
    }
}

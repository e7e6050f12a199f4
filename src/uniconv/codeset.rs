// uniconv/codeset.rs - Codeset resolution and the per-codeset codecs.
//
// UTF-8, UTF-16, UTF-32, ISO-8859-1 and ASCII are handled natively. Every
// other name goes to encoding_rs, whose label table follows WHATWG (where
// "ISO-8859-1" means windows-1252, hence the native Latin-1 codec).

use encoding_rs::{Decoder, DecoderResult, Encoder, EncoderResult, Encoding};
use log::debug;
use smallvec::{smallvec, SmallVec};

use super::{IconvEhandler, OFFSET_NONE};
use crate::error::UnistringError;
use crate::unistr::UtfUnit;
use crate::unitypes::Ucs4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Big,
    Little,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Codeset {
    Utf8,
    /// `None` is the unmarked form: a byte order mark selects the order on
    /// input, big endian otherwise. Output starts with a big-endian mark.
    Utf16(Option<Endian>),
    Utf32(Option<Endian>),
    Latin1,
    Ascii,
    External(&'static Encoding),
}

// iconv spellings that are not WHATWG labels.
static LABEL_ALIASES: [(&str, &str); 6] = [
    ("CP949", "windows-949"),
    ("UHC", "windows-949"),
    ("CP936", "gbk"),
    ("CP932", "shift_jis"),
    ("SJIS", "shift_jis"),
    ("BIG5HKSCS", "big5"),
];

impl Codeset {
    pub(crate) fn resolve(name: &str) -> Result<Codeset, UnistringError> {
        let key = name.trim().to_ascii_uppercase();
        let native = match key.as_str() {
            "UTF-8" | "UTF8" => Some(Codeset::Utf8),
            "UTF-16" | "UTF16" => Some(Codeset::Utf16(None)),
            "UTF-16BE" | "UTF16BE" | "UCS-2BE" => Some(Codeset::Utf16(Some(Endian::Big))),
            "UTF-16LE" | "UTF16LE" | "UCS-2LE" => Some(Codeset::Utf16(Some(Endian::Little))),
            "UTF-32" | "UTF32" => Some(Codeset::Utf32(None)),
            "UTF-32BE" | "UTF32BE" | "UCS-4" | "UCS-4BE" => Some(Codeset::Utf32(Some(Endian::Big))),
            "UTF-32LE" | "UTF32LE" | "UCS-4LE" => Some(Codeset::Utf32(Some(Endian::Little))),
            "ISO-8859-1" | "ISO_8859-1" | "ISO8859-1" | "LATIN1" | "L1" | "CP819" | "IBM819" => {
                Some(Codeset::Latin1)
            }
            "ASCII" | "US-ASCII" | "ANSI_X3.4-1968" | "646" => Some(Codeset::Ascii),
            _ => None,
        };
        if let Some(cs) = native {
            debug!("encoding {name:?} handled natively as {cs:?}");
            return Ok(cs);
        }
        let squeezed: String = key.chars().filter(|c| *c != '-' && *c != '_').collect();
        let label = LABEL_ALIASES
            .iter()
            .find(|(alias, _)| *alias == squeezed)
            .map_or(name.trim(), |(_, label)| *label);
        match Encoding::for_label(label.as_bytes()) {
            Some(enc) => {
                debug!("encoding {name:?} resolved to {}", enc.name());
                Ok(Codeset::External(enc))
            }
            None => {
                debug!("encoding {name:?} is not supported");
                Err(UnistringError::unsupported(name))
            }
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Codeset::Utf8 => "UTF-8",
            Codeset::Utf16(None) => "UTF-16",
            Codeset::Utf16(Some(Endian::Big)) => "UTF-16BE",
            Codeset::Utf16(Some(Endian::Little)) => "UTF-16LE",
            Codeset::Utf32(None) => "UTF-32",
            Codeset::Utf32(Some(Endian::Big)) => "UTF-32BE",
            Codeset::Utf32(Some(Endian::Little)) => "UTF-32LE",
            Codeset::Latin1 => "ISO-8859-1",
            Codeset::Ascii => "ASCII",
            Codeset::External(enc) => enc.name(),
        }
    }
}

// === Decoding ===

/// Code points decoded from some input together with the index of the input
/// unit each one starts at. Characters produced together by one input
/// sequence share a start.
#[derive(Debug, Default)]
pub(crate) struct Decoded {
    pub chars: Vec<Ucs4>,
    pub starts: Vec<usize>,
}

impl Decoded {
    pub(crate) fn with_capacity(n: usize) -> Result<Self, UnistringError> {
        let mut d = Decoded::default();
        d.chars.try_reserve(n)?;
        d.starts.try_reserve(n)?;
        Ok(d)
    }

    fn push(&mut self, uc: Ucs4, start: usize) {
        self.chars.push(uc);
        self.starts.push(start);
    }

    fn invalid(&mut self, handler: IconvEhandler, start: usize) -> Result<(), UnistringError> {
        match handler {
            IconvEhandler::Error => Err(UnistringError::illegal(start)),
            IconvEhandler::QuestionMark | IconvEhandler::EscapeSequence => {
                self.push('?' as Ucs4, start);
                Ok(())
            }
        }
    }
}

/// State a decoder carries between chunks.
#[derive(Default)]
pub(crate) struct DecodeState {
    endian: Option<Endian>,
    decoder: Option<Decoder>,
    char_start: usize,
}

impl DecodeState {
    pub(crate) fn is_initial(&self) -> bool {
        self.decoder.is_none() && self.endian.is_none()
    }
}

impl Codeset {
    /// Decodes `src`, whose first byte is input byte `base`, appending to
    /// `out`. Unless `last` is set, an incomplete sequence at the end is left
    /// unconsumed. Returns the number of bytes consumed.
    pub(crate) fn decode(
        &self,
        st: &mut DecodeState,
        src: &[u8],
        base: usize,
        last: bool,
        handler: IconvEhandler,
        out: &mut Decoded,
    ) -> Result<usize, UnistringError> {
        match *self {
            Codeset::Utf8 => decode_units(src, base, last, handler, out),
            Codeset::Utf16(order) => decode_wide::<2>(st, order, src, base, last, handler, out),
            Codeset::Utf32(order) => decode_wide::<4>(st, order, src, base, last, handler, out),
            Codeset::Latin1 => {
                for (i, &b) in src.iter().enumerate() {
                    out.push(b as Ucs4, base + i);
                }
                Ok(src.len())
            }
            Codeset::Ascii => {
                for (i, &b) in src.iter().enumerate() {
                    if b < 0x80 {
                        out.push(b as Ucs4, base + i);
                    } else {
                        out.invalid(handler, base + i)?;
                    }
                }
                Ok(src.len())
            }
            Codeset::External(enc) => decode_external(enc, st, src, base, last, handler, out),
        }
    }
}

/// Strict decode of a unit slice. Used for UTF-8 input and for the
/// `u16`/`u32` entry points.
pub(crate) fn decode_units<U: UtfUnit>(
    src: &[U],
    base: usize,
    last: bool,
    handler: IconvEhandler,
    out: &mut Decoded,
) -> Result<usize, UnistringError> {
    let mut i = 0;
    while i < src.len() {
        match U::decode(&src[i..]) {
            Ok((uc, n)) => {
                out.push(uc, base + i);
                i += n;
            }
            Err(m) if m.incomplete && !last => break,
            Err(m) => {
                out.invalid(handler, base + i)?;
                i += m.skip.max(1);
            }
        }
    }
    Ok(i)
}

fn read_unit<const N: usize>(b: &[u8], order: Endian) -> u32 {
    let v = b[..N].iter().fold(0u32, |acc, &x| (acc << 8) | x as u32);
    match (order, N) {
        (Endian::Big, _) => v,
        (Endian::Little, 2) => (v as u16).swap_bytes() as u32,
        (Endian::Little, _) => v.swap_bytes(),
    }
}

fn sniff_bom<const N: usize>(src: &[u8]) -> Option<Endian> {
    match (N, src) {
        (2, [0xFE, 0xFF, ..]) | (4, [0x00, 0x00, 0xFE, 0xFF, ..]) => Some(Endian::Big),
        (2, [0xFF, 0xFE, ..]) | (4, [0xFF, 0xFE, 0x00, 0x00, ..]) => Some(Endian::Little),
        _ => None,
    }
}

fn decode_wide<const N: usize>(
    st: &mut DecodeState,
    order: Option<Endian>,
    src: &[u8],
    base: usize,
    last: bool,
    handler: IconvEhandler,
    out: &mut Decoded,
) -> Result<usize, UnistringError> {
    let mut i = 0;
    let order = match (order, st.endian) {
        (Some(e), _) | (None, Some(e)) => e,
        (None, None) => {
            if src.len() < N && !last {
                return Ok(0);
            }
            let e = match sniff_bom::<N>(src) {
                Some(e) => {
                    i = N;
                    e
                }
                None => Endian::Big,
            };
            st.endian = Some(e);
            e
        }
    };
    while i + N <= src.len() {
        let first = read_unit::<N>(&src[i..], order);
        let decoded = if N == 2 {
            let mut units = [first as u16, 0];
            let avail = if i + 2 * N <= src.len() {
                units[1] = read_unit::<N>(&src[i + N..], order) as u16;
                2
            } else {
                1
            };
            u16::decode(&units[..avail])
        } else {
            u32::decode(&[first])
        };
        match decoded {
            Ok((uc, n)) => {
                out.push(uc, base + i);
                i += n * N;
            }
            Err(m) if m.incomplete && !last => return Ok(i),
            Err(m) => {
                out.invalid(handler, base + i)?;
                i += m.skip.max(1) * N;
            }
        }
    }
    if i < src.len() && last {
        out.invalid(handler, base + i)?;
        i = src.len();
    }
    Ok(i)
}

// encoding_rs reports where a malformed sequence ended but not where each
// character started, so input is fed one byte at a time.
fn decode_external(
    enc: &'static Encoding,
    st: &mut DecodeState,
    src: &[u8],
    base: usize,
    last: bool,
    handler: IconvEhandler,
    out: &mut Decoded,
) -> Result<usize, UnistringError> {
    if st.decoder.is_none() {
        st.char_start = base;
    }
    let decoder = st.decoder.get_or_insert_with(|| enc.new_decoder_without_bom_handling());
    let cap = decoder.max_utf8_buffer_length_without_replacement(1).unwrap_or(32);
    let mut buf: SmallVec<[u8; 32]> = smallvec![0; cap];
    let mut k = 0;
    while k < src.len() {
        let (result, read, written) = decoder.decode_to_utf8_without_replacement(&src[k..k + 1], &mut buf, false);
        let start = st.char_start;
        emit_utf8(&buf[..written], start, out)?;
        k += read;
        match result {
            // An ASCII byte that cannot trail is left unread and decoded
            // again on the next round.
            DecoderResult::Malformed(_, extra) => {
                out.invalid(handler, start)?;
                st.char_start = (base + k).saturating_sub(extra as usize);
            }
            _ if read == 0 => break,
            _ if written > 0 => st.char_start = base + k,
            _ => {}
        }
    }
    if last {
        let cap = decoder.max_utf8_buffer_length_without_replacement(0).unwrap_or(32);
        let mut tail: SmallVec<[u8; 32]> = smallvec![0; cap];
        let (result, _, written) = decoder.decode_to_utf8_without_replacement(&[], &mut tail, true);
        emit_utf8(&tail[..written], st.char_start, out)?;
        if let DecoderResult::Malformed(..) = result {
            out.invalid(handler, st.char_start)?;
        }
        st.decoder = None;
    }
    Ok(src.len())
}

// Decoder output is UTF-8 by contract; a violation is reported at the
// input position that produced it rather than dropped.
fn emit_utf8(bytes: &[u8], start: usize, out: &mut Decoded) -> Result<(), UnistringError> {
    let s = std::str::from_utf8(bytes).map_err(|_| UnistringError::illegal(start))?;
    for c in s.chars() {
        out.push(c as Ucs4, start);
    }
    Ok(())
}

// === Encoding ===

/// Output bytes plus the optional offset map. A unit gets an offset only if
/// it is the first one produced for its input position.
struct Sink<'a, T> {
    out: &'a mut Vec<T>,
    offsets: Option<&'a mut Vec<usize>>,
    last_start: usize,
}

impl<'a, T: Copy> Sink<'a, T> {
    fn new(out: &'a mut Vec<T>, mut offsets: Option<&'a mut Vec<usize>>) -> Self {
        if let Some(o) = offsets.as_deref_mut() {
            o.clear();
        }
        Sink { out, offsets, last_start: OFFSET_NONE }
    }

    fn put(&mut self, units: &[T], start: usize) -> Result<(), UnistringError> {
        if units.is_empty() {
            return Ok(());
        }
        self.out.try_reserve(units.len())?;
        self.out.extend_from_slice(units);
        if let Some(o) = self.offsets.as_deref_mut() {
            o.try_reserve(units.len())?;
            let first = if start == self.last_start { OFFSET_NONE } else { start };
            o.push(first);
            o.extend(std::iter::repeat(OFFSET_NONE).take(units.len() - 1));
        }
        if start != OFFSET_NONE {
            self.last_start = start;
        }
        Ok(())
    }
}

/// The replacement for a character the target cannot represent.
pub(crate) fn substitute(
    handler: IconvEhandler,
    uc: Ucs4,
    start: usize,
) -> Result<SmallVec<[Ucs4; 10]>, UnistringError> {
    match handler {
        IconvEhandler::Error => Err(UnistringError::illegal(start)),
        IconvEhandler::QuestionMark => Ok(smallvec!['?' as Ucs4]),
        IconvEhandler::EscapeSequence => {
            let esc = if uc < 0x10000 { format!("\\u{uc:04X}") } else { format!("\\U{uc:08X}") };
            Ok(esc.chars().map(|c| c as Ucs4).collect())
        }
    }
}

impl Codeset {
    fn bom(&self) -> &'static [u8] {
        match self {
            Codeset::Utf16(None) => &[0xFE, 0xFF],
            Codeset::Utf32(None) => &[0x00, 0x00, 0xFE, 0xFF],
            _ => &[],
        }
    }

    // Appends the encoding of `uc` to `buf`, or returns false if the codeset
    // cannot represent it.
    fn encode_char(&self, uc: Ucs4, encoder: Option<&mut Encoder>, buf: &mut SmallVec<[u8; 16]>) -> bool {
        let Some(c) = char::from_u32(uc) else {
            return false;
        };
        match *self {
            Codeset::Utf8 => {
                let mut tmp = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
            }
            Codeset::Utf16(order) => {
                let mut tmp = [0u16; 2];
                for &u in c.encode_utf16(&mut tmp).iter() {
                    match order {
                        Some(Endian::Little) => buf.extend_from_slice(&u.to_le_bytes()),
                        _ => buf.extend_from_slice(&u.to_be_bytes()),
                    }
                }
            }
            Codeset::Utf32(order) => match order {
                Some(Endian::Little) => buf.extend_from_slice(&uc.to_le_bytes()),
                _ => buf.extend_from_slice(&uc.to_be_bytes()),
            },
            Codeset::Latin1 if uc <= 0xFF => buf.push(uc as u8),
            Codeset::Ascii if uc < 0x80 => buf.push(uc as u8),
            Codeset::Latin1 | Codeset::Ascii => return false,
            Codeset::External(_) => {
                let Some(encoder) = encoder else {
                    return false;
                };
                let mut utf8 = [0u8; 4];
                let cap = encoder.max_buffer_length_from_utf8_without_replacement(4).unwrap_or(32);
                let mut tmp: SmallVec<[u8; 32]> = smallvec![0; cap];
                let (result, _, written) =
                    encoder.encode_from_utf8_without_replacement(c.encode_utf8(&mut utf8), &mut tmp, false);
                // Stateful encoders may switch modes before reporting.
                buf.extend_from_slice(&tmp[..written]);
                return matches!(result, EncoderResult::InputEmpty);
            }
        }
        true
    }

    /// Encodes `dec` into `out`, recording an offset map if one is given.
    pub(crate) fn encode(
        &self,
        dec: &Decoded,
        handler: IconvEhandler,
        out: &mut Vec<u8>,
        offsets: Option<&mut Vec<usize>>,
    ) -> Result<(), UnistringError> {
        let mut encoder = match *self {
            Codeset::External(enc) if enc.output_encoding() != enc => {
                debug!("encoding {} cannot be used as a conversion target", enc.name());
                return Err(UnistringError::unsupported(enc.name()));
            }
            Codeset::External(enc) => Some(enc.new_encoder()),
            _ => None,
        };
        let mut sink = Sink::new(out, offsets);
        sink.put(self.bom(), OFFSET_NONE)?;
        let mut buf: SmallVec<[u8; 16]> = SmallVec::new();
        for (&uc, &start) in dec.chars.iter().zip(&dec.starts) {
            buf.clear();
            if !self.encode_char(uc, encoder.as_mut(), &mut buf) {
                for r in substitute(handler, uc, start)? {
                    if !self.encode_char(r, encoder.as_mut(), &mut buf) {
                        return Err(UnistringError::illegal(start));
                    }
                }
            }
            sink.put(&buf, start)?;
        }
        if let Some(encoder) = encoder.as_mut() {
            let mut tail = [0u8; 16];
            let (_, _, written) = encoder.encode_from_utf8_without_replacement("", &mut tail, true);
            sink.put(&tail[..written], OFFSET_NONE)?;
        }
        Ok(())
    }
}

/// Encodes `dec` as Unicode units of width `U`.
pub(crate) fn encode_units<U: UtfUnit>(
    dec: &Decoded,
    out: &mut Vec<U>,
    offsets: Option<&mut Vec<usize>>,
) -> Result<(), UnistringError> {
    let mut sink = Sink::new(out, offsets);
    let mut buf = [U::default(); 4];
    for (&uc, &start) in dec.chars.iter().zip(&dec.starts) {
        let n = U::encoded_len(uc);
        U::encode_unchecked(uc, &mut buf);
        sink.put(&buf[..n], start)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(cs: Codeset, src: &[u8], handler: IconvEhandler) -> Result<Vec<Ucs4>, UnistringError> {
        let mut st = DecodeState::default();
        let mut d = Decoded::default();
        cs.decode(&mut st, src, 0, true, handler, &mut d)?;
        Ok(d.chars)
    }

    #[test]
    fn resolves_native_and_external_names() {
        assert_eq!(Codeset::resolve("utf-8"), Ok(Codeset::Utf8));
        assert_eq!(Codeset::resolve("UTF-16LE"), Ok(Codeset::Utf16(Some(Endian::Little))));
        assert_eq!(Codeset::resolve("latin1"), Ok(Codeset::Latin1));
        assert_eq!(Codeset::resolve("ISO-8859-1"), Ok(Codeset::Latin1));
        assert_eq!(Codeset::resolve("EUC-JP"), Ok(Codeset::External(encoding_rs::EUC_JP)));
        assert_eq!(Codeset::resolve("CP949"), Ok(Codeset::External(encoding_rs::EUC_KR)));
        assert_eq!(Codeset::resolve("sjis"), Ok(Codeset::External(encoding_rs::SHIFT_JIS)));
        assert!(matches!(
            Codeset::resolve("NO-SUCH-CHARSET"),
            Err(UnistringError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn utf16_bom_selects_byte_order() {
        let le = [0xFF, 0xFE, 0x41, 0x00, 0x3D, 0xD8, 0x00, 0xDE];
        assert_eq!(decode_all(Codeset::Utf16(None), &le, IconvEhandler::Error), Ok(vec![0x41, 0x1F600]));
        let unmarked = [0x00, 0x41];
        assert_eq!(decode_all(Codeset::Utf16(None), &unmarked, IconvEhandler::Error), Ok(vec![0x41]));
        // A fixed byte order keeps U+FEFF as a character.
        let be = [0xFE, 0xFF, 0x00, 0x41];
        assert_eq!(
            decode_all(Codeset::Utf16(Some(Endian::Big)), &be, IconvEhandler::Error),
            Ok(vec![0xFEFF, 0x41])
        );
    }

    #[test]
    fn utf16_odd_trailing_byte() {
        let src = [0x00, 0x41, 0x00];
        assert_eq!(
            decode_all(Codeset::Utf16(Some(Endian::Big)), &src, IconvEhandler::Error),
            Err(UnistringError::illegal(2))
        );
        assert_eq!(
            decode_all(Codeset::Utf16(Some(Endian::Big)), &src, IconvEhandler::QuestionMark),
            Ok(vec![0x41, '?' as u32])
        );
    }

    #[test]
    fn utf32_little_endian() {
        let src = [0x00, 0xF6, 0x01, 0x00];
        assert_eq!(
            decode_all(Codeset::Utf32(Some(Endian::Little)), &src, IconvEhandler::Error),
            Ok(vec![0x1F600])
        );
        let bad = [0x00, 0x00, 0x11, 0x00];
        assert!(decode_all(Codeset::Utf32(Some(Endian::Little)), &bad, IconvEhandler::Error).is_err());
    }

    #[test]
    fn external_decoder_records_starts() {
        let mut st = DecodeState::default();
        let mut d = Decoded::default();
        // "aあb" in Shift_JIS
        let src = [0x61, 0x82, 0xA0, 0x62];
        let cs = Codeset::External(encoding_rs::SHIFT_JIS);
        cs.decode(&mut st, &src, 0, true, IconvEhandler::Error, &mut d).unwrap();
        assert_eq!(d.chars, vec![0x61, 0x3042, 0x62]);
        assert_eq!(d.starts, vec![0, 1, 3]);
    }

    #[test]
    fn external_decoder_reports_malformed_offset() {
        let cs = Codeset::External(encoding_rs::SHIFT_JIS);
        // 0x82 followed by a byte that cannot trail it.
        let src = [0x61, 0x82, 0x20];
        assert_eq!(decode_all(cs, &src, IconvEhandler::Error), Err(UnistringError::illegal(1)));
        assert_eq!(decode_all(cs, &src, IconvEhandler::QuestionMark), Ok(vec![0x61, '?' as u32, 0x20]));
    }

    #[test]
    fn escape_sequences() {
        let esc: Vec<u32> = substitute(IconvEhandler::EscapeSequence, 0x20AC, 0).unwrap().to_vec();
        assert_eq!(esc, "\\u20AC".chars().map(|c| c as u32).collect::<Vec<_>>());
        let esc: Vec<u32> = substitute(IconvEhandler::EscapeSequence, 0x1F600, 0).unwrap().to_vec();
        assert_eq!(esc, "\\U0001F600".chars().map(|c| c as u32).collect::<Vec<_>>());
    }

    #[test]
    fn decoder_output_must_be_utf8() {
        let mut d = Decoded::default();
        assert_eq!(emit_utf8("aé".as_bytes(), 7, &mut d), Ok(()));
        assert_eq!(d.chars, vec![0x61, 0xE9]);
        assert_eq!(d.starts, vec![7, 7]);
        assert_eq!(emit_utf8(b"b\xC3", 9, &mut d), Err(UnistringError::illegal(9)));
        assert_eq!(d.chars.len(), 2);
    }
}

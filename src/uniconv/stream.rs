// uniconv/stream.rs - Chunked conversion of legacy input to UTF-8.

use super::codeset::{encode_units, Codeset, DecodeState, Decoded};
use super::IconvEhandler;
use crate::error::UnistringError;

/// Converts input in some encoding to UTF-8 one chunk at a time.
///
/// The stream holds any partial multibyte sequence left at the end of a
/// chunk and completes it with the next one. Error offsets count bytes from
/// the start of the whole input.
///
/// ```
/// use unistring::uniconv::{ConvStream, IconvEhandler};
///
/// let mut stream = ConvStream::new("SHIFT_JIS", IconvEhandler::Error).unwrap();
/// let mut out = Vec::new();
/// stream.feed(&[0x61, 0x82], &mut out).unwrap();
/// stream.feed(&[0xA0], &mut out).unwrap();
/// stream.finish(&mut out).unwrap();
/// assert_eq!(out, "aあ".as_bytes());
/// ```
pub struct ConvStream {
    codeset: Codeset,
    handler: IconvEhandler,
    state: DecodeState,
    pending: Vec<u8>,
    position: usize,
}

impl ConvStream {
    pub fn new(fromcode: &str, handler: IconvEhandler) -> Result<Self, UnistringError> {
        Ok(ConvStream {
            codeset: Codeset::resolve(fromcode)?,
            handler,
            state: DecodeState::default(),
            pending: Vec::new(),
            position: 0,
        })
    }

    /// Name of the source encoding.
    pub fn encoding(&self) -> &'static str {
        self.codeset.name()
    }

    /// True when no input has been fed since creation or the last `finish`.
    pub fn is_initial(&self) -> bool {
        self.position == 0 && self.pending.is_empty() && self.state.is_initial()
    }

    /// Converts `chunk`, appending UTF-8 to `out`. Returns the number of
    /// bytes appended.
    pub fn feed(&mut self, chunk: &[u8], out: &mut Vec<u8>) -> Result<usize, UnistringError> {
        self.step(chunk, false, out)
    }

    /// Flushes the stream. A partial sequence still pending is ill-formed
    /// input. The stream is reset afterwards.
    pub fn finish(&mut self, out: &mut Vec<u8>) -> Result<usize, UnistringError> {
        let result = self.step(&[], true, out);
        self.reset();
        result
    }

    pub fn reset(&mut self) {
        self.state = DecodeState::default();
        self.pending.clear();
        self.position = 0;
    }

    fn step(&mut self, chunk: &[u8], last: bool, out: &mut Vec<u8>) -> Result<usize, UnistringError> {
        self.pending.try_reserve(chunk.len())?;
        self.pending.extend_from_slice(chunk);
        let mut decoded = Decoded::with_capacity(self.pending.len())?;
        let consumed = self
            .codeset
            .decode(&mut self.state, &self.pending, self.position, last, self.handler, &mut decoded)?;
        self.pending.drain(..consumed);
        self.position += consumed;
        let mut utf8 = Vec::new();
        encode_units::<u8>(&decoded, &mut utf8, None)?;
        out.try_reserve(utf8.len())?;
        out.extend_from_slice(&utf8);
        Ok(utf8.len())
    }
}

impl std::fmt::Debug for ConvStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvStream")
            .field("encoding", &self.codeset.name())
            .field("handler", &self.handler)
            .field("pending", &self.pending)
            .field("position", &self.position)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, chunks: &[&[u8]], handler: IconvEhandler) -> Result<Vec<u8>, UnistringError> {
        let mut stream = ConvStream::new(name, handler)?;
        let mut out = Vec::new();
        for chunk in chunks {
            stream.feed(chunk, &mut out)?;
        }
        stream.finish(&mut out)?;
        Ok(out)
    }

    #[test]
    fn utf8_split_sequence() {
        let s = "h€llo".as_bytes();
        let out = run("UTF-8", &[&s[..2], &s[2..3], &s[3..]], IconvEhandler::Error).unwrap();
        assert_eq!(out, s);
    }

    #[test]
    fn utf16_split_surrogates() {
        let src = [0xFF, 0xFE, 0x3D, 0xD8, 0x00, 0xDE, 0x41, 0x00];
        let out = run("UTF-16", &[&src[..1], &src[1..3], &src[3..5], &src[5..]], IconvEhandler::Error).unwrap();
        assert_eq!(out, "😀A".as_bytes());
    }

    #[test]
    fn truncated_at_finish() {
        let err = run("UTF-8", &[b"ab\xE2\x82"], IconvEhandler::Error).unwrap_err();
        assert_eq!(err, UnistringError::illegal(2));
        let out = run("UTF-8", &[b"ab\xE2\x82"], IconvEhandler::QuestionMark).unwrap();
        assert_eq!(out, b"ab?");
    }

    #[test]
    fn offsets_span_chunks() {
        let err = run("ISO-8859-1", &[b"abc"], IconvEhandler::Error);
        assert_eq!(err.unwrap(), b"abc");
        let err = run("ASCII", &[b"abc", b"d\xE9"], IconvEhandler::Error).unwrap_err();
        assert_eq!(err, UnistringError::illegal(4));
    }

    #[test]
    fn euc_jp_chunks() {
        // "日本" in EUC-JP, split inside the first character.
        let src = [0xC6, 0xFC, 0xCB, 0xDC];
        let out = run("EUC-JP", &[&src[..1], &src[1..]], IconvEhandler::Error).unwrap();
        assert_eq!(out, "日本".as_bytes());
    }

    #[test]
    fn reset_state() {
        let mut stream = ConvStream::new("UTF-8", IconvEhandler::Error).unwrap();
        assert!(stream.is_initial());
        let mut out = Vec::new();
        stream.feed(b"\xC3", &mut out).unwrap();
        assert!(!stream.is_initial());
        stream.reset();
        assert!(stream.is_initial());
        assert_eq!(stream.encoding(), "UTF-8");
    }
}

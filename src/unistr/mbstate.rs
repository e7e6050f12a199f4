// unistr/mbstate.rs - Restartable UTF-8 decoding.

use super::UtfUnit;
use crate::unitypes::Ucs4;

/// Bytes of a UTF-8 sequence split across calls to [`u8_mbrtouc`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MbState {
    buf: [u8; 4],
    len: u8,
}

impl MbState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no partial sequence is pending.
    pub fn is_initial(&self) -> bool {
        self.len == 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbrResult {
    /// A complete character; `consumed` counts bytes taken from this call's
    /// input only.
    Char { uc: Ucs4, consumed: usize },
    /// All input was consumed into the state without completing a character.
    Incomplete { consumed: usize },
    /// Ill-formed input. The state is reset.
    Invalid,
}

/// Decodes one character from `s`, continuing any sequence left pending in
/// `state` by a previous call.
pub fn u8_mbrtouc(state: &mut MbState, s: &[u8]) -> MbrResult {
    let pending = state.len as usize;
    let take = s.len().min(4 - pending);
    let mut buf = state.buf;
    buf[pending..pending + take].copy_from_slice(&s[..take]);
    let total = pending + take;
    if total == 0 {
        return MbrResult::Incomplete { consumed: 0 };
    }
    match u8::decode(&buf[..total]) {
        Ok((uc, n)) => {
            state.reset();
            MbrResult::Char { uc, consumed: n - pending }
        }
        Err(m) if m.incomplete && take == s.len() => {
            state.buf = buf;
            state.len = total as u8;
            MbrResult::Incomplete { consumed: take }
        }
        Err(_) => {
            state.reset();
            MbrResult::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sequence() {
        let mut st = MbState::new();
        assert_eq!(u8_mbrtouc(&mut st, &[0xF0, 0x9F]), MbrResult::Incomplete { consumed: 2 });
        assert!(!st.is_initial());
        assert_eq!(u8_mbrtouc(&mut st, &[0x98]), MbrResult::Incomplete { consumed: 1 });
        assert_eq!(
            u8_mbrtouc(&mut st, &[0x80, b'x']),
            MbrResult::Char { uc: 0x1F600, consumed: 1 }
        );
        assert!(st.is_initial());
    }

    #[test]
    fn whole_characters() {
        let mut st = MbState::new();
        assert_eq!(u8_mbrtouc(&mut st, b"ab"), MbrResult::Char { uc: 0x61, consumed: 1 });
        assert_eq!(
            u8_mbrtouc(&mut st, "€".as_bytes()),
            MbrResult::Char { uc: 0x20AC, consumed: 3 }
        );
        assert_eq!(u8_mbrtouc(&mut st, b""), MbrResult::Incomplete { consumed: 0 });
    }

    #[test]
    fn invalid_resets() {
        let mut st = MbState::new();
        assert_eq!(u8_mbrtouc(&mut st, &[0xE2]), MbrResult::Incomplete { consumed: 1 });
        assert_eq!(u8_mbrtouc(&mut st, &[0x41]), MbrResult::Invalid);
        assert!(st.is_initial());
        assert_eq!(u8_mbrtouc(&mut st, &[0x80]), MbrResult::Invalid);
    }
}

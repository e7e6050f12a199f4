// error.rs - Error type for the allocating conversion, normalization and
// case-mapping functions.
//
// Every variant maps to the errno value the C-style interface reports, so a
// caller can go from the idiomatic `Result` to the classic error code with
// `UnistringError::code`.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for operations that allocate or transcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnistringError {
    /// Ill-formed or incomplete input, or a character the target encoding
    /// cannot represent. `offset` indexes the offending input unit.
    #[error("invalid or incomplete multibyte or wide character at offset {offset}")]
    IllegalSequence { offset: usize },
    /// Memory allocation failure.
    #[error("cannot allocate memory")]
    OutOfMemory,
    /// No converter exists for the named encoding.
    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },
    /// A value outside the Unicode scalar range was given to an encoder.
    #[error("invalid code point U+{code:04X}")]
    InvalidCodePoint { code: u32 },
    /// The caller-provided buffer is too small.
    #[error("output buffer too small ({needed} units needed)")]
    InsufficientCapacity { needed: usize },
}

impl UnistringError {
    /// Returns the errno value the C interface reports for this error.
    pub fn code(&self) -> i32 {
        match self {
            UnistringError::IllegalSequence { .. } => libc::EILSEQ,
            UnistringError::InvalidCodePoint { .. } => libc::EILSEQ,
            UnistringError::OutOfMemory => libc::ENOMEM,
            UnistringError::UnsupportedEncoding { .. } => libc::EINVAL,
            UnistringError::InsufficientCapacity { .. } => libc::E2BIG,
        }
    }

    pub(crate) fn illegal(offset: usize) -> Self {
        UnistringError::IllegalSequence { offset }
    }

    pub(crate) fn unsupported(name: &str) -> Self {
        UnistringError::UnsupportedEncoding {
            name: name.to_string(),
        }
    }
}

impl From<TryReserveError> for UnistringError {
    fn from(_: TryReserveError) -> Self {
        UnistringError::OutOfMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_sequence_is_eilseq() {
        let err = UnistringError::illegal(3);
        assert_eq!(err.code(), libc::EILSEQ);
        assert_eq!(
            err.to_string(),
            "invalid or incomplete multibyte or wide character at offset 3"
        );
    }

    #[test]
    fn out_of_memory_is_enomem() {
        assert_eq!(UnistringError::OutOfMemory.code(), libc::ENOMEM);
        assert_eq!(UnistringError::OutOfMemory.to_string(), "cannot allocate memory");
    }

    #[test]
    fn unsupported_encoding() {
        let err = UnistringError::unsupported("X-BOGUS");
        assert_eq!(err.code(), libc::EINVAL);
        assert!(err.to_string().contains("X-BOGUS"));
    }

    #[test]
    fn invalid_code_point_display() {
        let err = UnistringError::InvalidCodePoint { code: 0xD800 };
        assert_eq!(err.to_string(), "invalid code point U+D800");
        assert_eq!(err.code(), libc::EILSEQ);
    }

    #[test]
    fn try_reserve_failure_maps_to_out_of_memory() {
        let mut v: Vec<u8> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(UnistringError::from(err), UnistringError::OutOfMemory);
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(UnistringError::OutOfMemory);
        assert_eq!(err.to_string(), "cannot allocate memory");
    }
}

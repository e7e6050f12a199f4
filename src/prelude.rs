// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use unistring::prelude::*;
//!
//! let n = graphemes("e\u{301}x").count();
//! assert_eq!(n, 2);
//! assert_eq!(normalize("e\u{301}", UninormT::Nfc), "é");
//! ```

pub use crate::api::{
    compare_caseless, compare_normalized, graphemes, normalize, words, Converter, Graphemes, LineBreaker, Segment,
    Words,
};
pub use crate::error::UnistringError;
pub use crate::uniconv::{ConvStream, IconvEhandler};
pub use crate::unilbrk::UcBreak;
pub use crate::uninorm::{Collator, Locale, UninormT};
pub use crate::unitypes::Ucs4;

//! # unistring
//!
//! Unicode text processing in pure Rust: character properties from packed
//! tries, UTF-8/16/32 codecs, conversion from and to legacy encodings,
//! grapheme, word and line segmentation, display width, case mapping and
//! normalization-insensitive comparison.
//!
//! The classic function families keep their names (`u8_mbtouc`,
//! `uc_is_property_alphabetic`, `u8_grapheme_breaks`, `u8_normcmp`, ...) so
//! code written against the C interface finds them where it expects. Every
//! `u8_` function has `u16_` and `u32_` siblings built on one generic
//! implementation.
//!
//! ## Quick Start
//!
//! ```rust
//! use unistring::prelude::*;
//!
//! let clusters: Vec<&str> = graphemes("🇫🇷e\u{301}").filter_map(|g| g.as_str()).collect();
//! assert_eq!(clusters, ["🇫🇷", "e\u{301}"]);
//!
//! let lines = LineBreaker::new().width(12).wrap("Lorem ipsum dolor sit amet");
//! assert_eq!(lines, ["Lorem ipsum ", "dolor sit ", "amet"]);
//! ```
//!
//! Conversion to a legacy encoding, with a policy for what does not fit:
//!
//! ```rust
//! use unistring::prelude::*;
//!
//! let out = Converter::new("UTF-8", "ISO-8859-1")
//!     .handler(IconvEhandler::EscapeSequence)
//!     .convert("1 € = 1 €".as_bytes())
//!     .unwrap();
//! assert_eq!(out, b"1 \\u20AC = 1 \\u20AC");
//! ```
//!
//! ## Low-Level C-Style API
//!
//! ```rust
//! use unistring::unictype::{uc_general_category, uc_general_category_name};
//! use unistring::unistr::u8_mbtouc;
//! use unistring::uniwidth::u8_width;
//!
//! let (uc, len) = u8_mbtouc("€".as_bytes());
//! assert_eq!((uc, len), (0x20AC, 3));
//! assert_eq!(uc_general_category_name(uc_general_category(uc)), Some("Sc"));
//! assert_eq!(u8_width("日本".as_bytes(), "UTF-8"), 4);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`unitypes`] | Code point type and limits |
//! | [`error`] | Error type and errno mapping |
//! | [`unictype`] | Character properties (three-level tries) |
//! | [`unistr`] | UTF-8/16/32 decoding, encoding and string functions |
//! | [`uniwidth`] | Display width |
//! | [`unigbrk`] | Grapheme cluster boundaries |
//! | [`uniwbrk`] | Word boundaries |
//! | [`unilbrk`] | Line breaking |
//! | [`uniconv`] | Legacy encoding conversion, locale charset |
//! | [`uninorm`] | Normalization forms and collation |
//! | [`unicase`] | Case mapping and caseless comparison |
//! | [`api`] | Iterators and builders |

// The per-width function families take the C argument lists.
#![allow(clippy::too_many_arguments)]
// Enable #[coverage(off)] attribute when running under cargo-llvm-cov on nightly.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod prelude;
pub mod unicase;
pub mod uniconv;
pub mod unictype;
pub mod unigbrk;
pub mod unilbrk;
pub mod uninorm;
pub mod unistr;
pub mod unitypes;
pub mod uniwbrk;
pub mod uniwidth;

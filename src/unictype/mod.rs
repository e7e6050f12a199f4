// unictype/mod.rs - Character properties.
//
//! Character property lookup backed by generated three-level tries.
//!
//! Every lookup is a total function: unassigned code points and values above
//! U+10FFFF get the property's documented default (category `Cn`, bidi class
//! `L`, joining type `U`, no script, ...).

mod names;
mod tables;

pub mod bidi;
pub mod blocks;
pub mod breakprop;
pub mod categ;
pub mod combining;
pub mod ctype;
pub mod joining;
pub mod mirror;
pub mod numeric;
pub mod property;
pub mod scripts;
pub mod trie;

pub use bidi::*;
pub use blocks::*;
pub use breakprop::*;
pub use categ::*;
pub use combining::*;
pub use ctype::*;
pub use joining::*;
pub use mirror::*;
pub use numeric::*;
pub use property::*;
pub use scripts::*;
pub use tables::UNICODE_VERSION;

//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters and their matching rules.
//!
//! ## Types
//!
//! - **`CodeSpan`**: backtick runs, closer of exactly equal length
//! - **`LinkSpan`** / **`Link`** / **`Image`**: `[text](url "title")`, `![alt](src)`
//! - **`Escape`**: backslash plus escapable punctuation
//! - **`Strikethrough`**, **`Strong`**, **`Emphasis`**: `~~`, `**`, `*` closers
//!
//! ## Design Principle
//!
//! All delimiter constants and closer heuristics live here. The parser only
//! decides the order in which they are tried.

pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough, Strong};
pub use escape::{Escape, is_whitespace};
pub use link::{Image, Link, LinkSpan};

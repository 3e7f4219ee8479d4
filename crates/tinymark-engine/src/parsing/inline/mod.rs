//! # Inline Parsing
//!
//! Cursor-based delimiter scanning over the content of one line.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the content of
//! headings, quotes, list items, block links and paragraphs.
//!
//! The scanner makes one left-to-right pass with a pending text buffer:
//! - Code spans are raw zones; nothing inside them is scanned
//! - Image alt text is kept verbatim
//! - Emphasis, strong, strikethrough and link text are scanned recursively
//!
//! ## Modules
//!
//! - **`kinds`**: inline types with owned delimiters and closer rules
//! - **`cursor`**: `Cursor` for byte-wise scanning that never splits a char
//! - **`parser`**: `InlineParser` and `parse_inline()` with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Code spans take precedence: `` `[not](a link)` `` parses as a single code
//! node, not as text containing a link.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::{InlineParser, parse_inline};

//! Parsing core for a small Markdown dialect.
//!
//! [`parse`] turns a document into a [`Node`] tree. Parsing never fails:
//! anything that does not form a construct is kept as literal text.
//!
//! ```
//! use tinymark_engine::parse;
//!
//! let doc = parse("# Hello *world*");
//! assert_eq!(doc.kind(), "document");
//! assert_eq!(doc.children()[0].kind(), "heading");
//! ```

pub mod ast;
pub mod options;
pub mod parsing;

pub use ast::{AstError, Node, validate};
pub use options::ParseOptions;
pub use parsing::inline::parse_inline;

/// Parses `markdown` with default options.
pub fn parse(markdown: &str) -> Node {
    parsing::parse_document(markdown, &ParseOptions::default())
}

pub fn parse_with_options(markdown: &str, options: &ParseOptions) -> Node {
    parsing::parse_document(markdown, options)
}

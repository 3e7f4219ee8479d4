//! # Block Kinds
//!
//! Block-specific types that own their markers and line patterns. The
//! dispatcher in `open`/`builder` decides precedence; the kinds only answer
//! "does this line look like me, and what is its content".

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::Heading;
pub use list_item::{ListItem, ListKind};
pub use thematic_break::ThematicBreak;

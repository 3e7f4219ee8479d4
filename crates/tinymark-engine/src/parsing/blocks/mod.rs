//! # Block Parsing
//!
//! Line-at-a-time block dispatch.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (physically empty, fence opener).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` runs the handler
//!    chain for each line and appends nodes to the document's children.
//!
//! ## Modules
//!
//! - **`kinds`**: block-specific types with owned markers (BlockQuote,
//!   CodeFence, Heading, ListItem, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` precedence for single-line constructs
//! - **`containers`**: the list accumulator
//! - **`builder`**: `BlockBuilder` handler chain
//!
//! ## Key Invariants
//!
//! - Only fenced code blocks span more than one line
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Lists are flat; indentation is discarded

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};

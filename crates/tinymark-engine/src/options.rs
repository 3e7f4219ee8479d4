use serde::{Deserialize, Serialize};

/// Tuning knobs for [`crate::parse_with_options`].
///
/// The parser has no behavioural switches; the only setting is the hardening
/// limit on inline recursion. `Deserialize` is derived so a host can embed
/// this in its own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ParseOptions {
    /// Maximum depth at which inline container content (emphasis, strong,
    /// strikethrough, link text) is still scanned for formatting.
    ///
    /// Content that would be scanned deeper than this is kept as one literal
    /// text node. Block content is scanned at depth 0, so `0` disables all
    /// nested formatting.
    pub max_nesting: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING: usize = 64;

    /// Equivalent to `ParseOptions::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; the builder decides what the facts
/// mean in context (a fence opener only counts if a closer follows).
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    pub text: &'a str,
    /// True only for a physically empty line. Whitespace-only lines are not
    /// blank here; they fall through to the paragraph handler.
    pub is_blank: bool,
    /// If the line looks like a fence opener.
    pub fence_sig: Option<FenceSig<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        LineClass {
            text: line,
            is_blank: line.is_empty(),
            fence_sig: CodeFence::sig(line),
        }
    }
}

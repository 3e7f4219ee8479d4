use crate::parsing::inline::kinds::is_whitespace;

/// Blockquote block type with owned delimiter constant.
///
/// Quotes are single-line: each `>` line becomes its own quote node and
/// there is no nesting by repeated `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix and its single whitespace separator.
    ///
    /// # Returns
    /// The content after the separator, or `None` if the line is not a quote.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        let sep = rest.chars().next().filter(|&c| is_whitespace(c))?;
        Some(&rest[sep.len_utf8()..])
    }
}

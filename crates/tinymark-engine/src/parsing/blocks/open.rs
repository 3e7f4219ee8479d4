use crate::parsing::inline::kinds::LinkSpan;

use super::kinds::{BlockQuote, Heading, ListItem, ThematicBreak};

/// A single-line block construct recognised at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Heading { level: u8, content: &'a str },
    Image(LinkSpan<'a>),
    ThematicBreak,
    Link(LinkSpan<'a>),
    BlockQuote { content: &'a str },
}

/// Tries the single-line classifiers in precedence order:
/// heading, image, horizontal rule, link, quote.
pub fn try_open_leaf(line: &str) -> Option<BlockOpen<'_>> {
    if let Some((level, content)) = Heading::parse(line) {
        return Some(BlockOpen::Heading { level, content });
    }
    if let Some(span) = LinkSpan::parse_image(line) {
        if span.len < line.len() {
            log::trace!(
                "block image drops {} trailing bytes",
                line.len() - span.len
            );
        }
        return Some(BlockOpen::Image(span));
    }
    if ThematicBreak::matches(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    // A block link must span the whole line.
    if let Some(span) = LinkSpan::parse(line).filter(|s| s.len == line.len()) {
        return Some(BlockOpen::Link(span));
    }
    if let Some(content) = BlockQuote::strip_prefix(line) {
        return Some(BlockOpen::BlockQuote { content });
    }
    None
}

pub fn try_open_list_item(line: &str) -> Option<ListItem<'_>> {
    ListItem::parse(line)
}

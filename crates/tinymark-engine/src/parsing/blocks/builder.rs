use crate::{ast::Node, options::ParseOptions, parsing::inline::InlineParser};

use super::{
    classify::LineClass,
    containers::append_list_item,
    kinds::{CodeFence, FenceSig},
    open::{BlockOpen, try_open_leaf, try_open_list_item},
};

/// Line driver that turns classified lines into document children.
///
/// Handlers are tried in a fixed order for each line: blank line, fenced code
/// block, single-line classifiers, list item, paragraph. Every handler
/// consumes one line except the fence, which consumes through its closer.
pub struct BlockBuilder<'o> {
    inline: InlineParser<'o>,
    out: Vec<Node>,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            inline: InlineParser::new(options),
            out: vec![],
        }
    }

    /// Handles one line and returns how many lines it consumed (at least one).
    ///
    /// `following` is every line after `c`, for handlers that look ahead.
    pub fn push(&mut self, c: &LineClass<'_>, following: &[&str]) -> usize {
        if c.is_blank {
            self.out.push(Node::LineBreak);
            return 1;
        }

        if let Some(sig) = c.fence_sig {
            match self.try_fence(&sig, following) {
                Some(consumed) => return consumed,
                None => log::trace!("unclosed fence {:?}, reading opener as text", c.text),
            }
        }

        if let Some(open) = try_open_leaf(c.text) {
            self.open_leaf(open);
            return 1;
        }

        if let Some(item) = try_open_list_item(c.text) {
            let node = item.kind.item(self.inline.parse(item.content));
            append_list_item(&mut self.out, item.kind, node);
            return 1;
        }

        self.push_paragraph(c.text);
        1
    }

    pub fn finish(self) -> Vec<Node> {
        self.out
    }

    fn try_fence(&mut self, sig: &FenceSig<'_>, following: &[&str]) -> Option<usize> {
        let close = CodeFence::find_close(sig, following)?;
        let (language, meta) = CodeFence::split_info(sig.info);
        self.out.push(Node::CodeBlock {
            language: language.map(str::to_string),
            meta: meta.map(str::to_string),
            value: following[..close].join("\n"),
        });
        // opener, body, closer
        Some(close + 2)
    }

    fn open_leaf(&mut self, open: BlockOpen<'_>) {
        let node = match open {
            BlockOpen::Heading { level, content } => Node::Heading {
                level,
                children: self.inline.parse(content),
            },
            BlockOpen::Image(span) => span.image_node(),
            BlockOpen::ThematicBreak => Node::HorizontalRule,
            BlockOpen::Link(span) => span.link_node(self.inline.parse(span.text)),
            BlockOpen::BlockQuote { content } => Node::Quote {
                children: self.inline.parse(content),
            },
        };
        self.out.push(node);
    }

    fn push_paragraph(&mut self, line: &str) {
        let children = self.inline.parse(line);
        if !children.is_empty() {
            self.out.push(Node::paragraph(children));
        }
    }
}

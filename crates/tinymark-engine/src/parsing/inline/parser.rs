use crate::{ast::Node, options::ParseOptions};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Escape, Image, Link, LinkSpan, Strikethrough, Strong},
};

/// Parses inline content with default options.
///
/// See [`InlineParser::parse`].
pub fn parse_inline(s: &str) -> Vec<Node> {
    InlineParser::new(&ParseOptions::default()).parse(s)
}

/// Inline delimiter scanner.
///
/// A single left-to-right pass that accumulates literal text and flushes it
/// into a `text` node whenever a construct is recognised. Emphasis, strong,
/// strikethrough and link text are scanned recursively, up to
/// [`ParseOptions::max_nesting`] levels deep.
pub struct InlineParser<'o> {
    options: &'o ParseOptions,
}

impl<'o> InlineParser<'o> {
    pub fn new(options: &'o ParseOptions) -> Self {
        Self { options }
    }

    /// Scans one line of block content into inline nodes.
    ///
    /// # Precedence
    /// At each position the first applicable rule wins:
    /// code span, image, link, backslash escape, literal `****`,
    /// strikethrough, strong, emphasis, plain character.
    ///
    /// # Returns
    /// Nodes in source order. Text nodes are never empty, so an empty input
    /// yields an empty vector.
    pub fn parse(&self, s: &str) -> Vec<Node> {
        self.scan(s, 0)
    }

    fn scan(&self, s: &str, depth: usize) -> Vec<Node> {
        let mut cur = Cursor::new(s);
        let mut out = vec![];
        let mut text = String::new();

        while !cur.eof() {
            if cur.peek() == Some(CodeSpan::TICK) {
                match try_parse_code_span(&mut cur) {
                    Some(node) => emit(&mut out, &mut text, node),
                    None => {
                        // the whole run is literal, so no shorter span can start inside it
                        let run = cur.run_len(CodeSpan::TICK);
                        text.extend(std::iter::repeat_n(CodeSpan::TICK as char, run));
                        cur.bump_n(run);
                    }
                }
                continue;
            }
            if cur.starts_with(Image::OPEN.as_bytes())
                && let Some(node) = try_parse_image(&mut cur)
            {
                emit(&mut out, &mut text, node);
                continue;
            }
            if cur.peek() == Some(Link::OPEN)
                && let Some(node) = self.try_parse_link(&mut cur, depth)
            {
                emit(&mut out, &mut text, node);
                continue;
            }
            if let Some(c) = try_parse_escape(&mut cur) {
                text.push(c);
                continue;
            }
            if cur.starts_with(Strong::LITERAL_RUN.as_bytes()) {
                text.push_str(Strong::LITERAL_RUN);
                cur.bump_n(Strong::LITERAL_RUN.len());
                continue;
            }
            if cur.starts_with(Strikethrough::MARKER.as_bytes()) {
                match self.try_parse_strikethrough(&mut cur, depth) {
                    Some(node) => emit(&mut out, &mut text, node),
                    None => {
                        text.push_str(Strikethrough::MARKER);
                        cur.bump_n(Strikethrough::MARKER.len());
                    }
                }
                continue;
            }
            if cur.starts_with(Strong::MARKER.as_bytes()) {
                match self.try_parse_strong(&mut cur, depth) {
                    Some(node) => emit(&mut out, &mut text, node),
                    None => {
                        text.push_str(Strong::MARKER);
                        cur.bump_n(Strong::MARKER.len());
                    }
                }
                continue;
            }
            if cur.peek() == Some(Emphasis::MARKER)
                && let Some(node) = self.try_parse_emphasis(&mut cur, depth)
            {
                emit(&mut out, &mut text, node);
                continue;
            }
            if let Some(c) = cur.bump_char() {
                text.push(c);
            }
        }

        flush_text(&mut out, &mut text);
        out
    }

    /// Scans the content of an inline container one level deeper.
    ///
    /// Past the nesting limit the content is kept as literal text.
    fn scan_nested(&self, content: &str, depth: usize) -> Vec<Node> {
        if depth >= self.options.max_nesting {
            log::trace!(
                "inline nesting limit {} reached, keeping {} bytes literal",
                self.options.max_nesting,
                content.len()
            );
            if content.is_empty() {
                return vec![];
            }
            return vec![Node::text(content)];
        }
        self.scan(content, depth + 1)
    }

    fn try_parse_link(&self, cur: &mut Cursor<'_>, depth: usize) -> Option<Node> {
        let span = LinkSpan::parse(cur.rest())?;
        cur.bump_n(span.len);
        Some(span.link_node(self.scan_nested(span.text, depth)))
    }

    fn try_parse_strikethrough(&self, cur: &mut Cursor<'_>, depth: usize) -> Option<Node> {
        let close = Strikethrough::find_close(cur.s, cur.i)?;
        let children = self.delimited(cur, Strikethrough::MARKER.len(), close, depth)?;
        Some(Node::Strikethrough { children })
    }

    fn try_parse_strong(&self, cur: &mut Cursor<'_>, depth: usize) -> Option<Node> {
        let close = Strong::find_close(cur.s, cur.i)?;
        let children = self.delimited(cur, Strong::MARKER.len(), close, depth)?;
        Some(Node::Strong { children })
    }

    fn try_parse_emphasis(&self, cur: &mut Cursor<'_>, depth: usize) -> Option<Node> {
        let close = Emphasis::find_close(cur.s, cur.i)?;
        let children = self.delimited(cur, 1, close, depth)?;
        Some(Node::Emphasis { children })
    }

    /// Scans the content between an opener at the cursor and a closer of the
    /// same width at `close`, leaving the cursor after the closer.
    fn delimited(
        &self,
        cur: &mut Cursor<'_>,
        width: usize,
        close: usize,
        depth: usize,
    ) -> Option<Vec<Node>> {
        let content = cur.s.get(cur.i + width..close)?;
        cur.i = close + width;
        Some(self.scan_nested(content, depth))
    }
}

/// Attempts to parse a code span at a backtick run.
///
/// Returns `None` when no closing run of the same length exists; the cursor
/// is left untouched.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Node> {
    let run = cur.run_len(CodeSpan::TICK);
    let inner = cur.i + run;

    if let Some(close) = CodeSpan::find_close(cur.s, inner, run) {
        let content = cur.s.get(inner..close)?;
        let node = Node::code(CodeSpan::strip_padding(content));
        cur.i = close + run;
        return Some(node);
    }

    if CodeSpan::is_empty_pair(run, cur.peek_at(run)) {
        cur.bump_n(run);
        return Some(Node::code(""));
    }
    None
}

fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Node> {
    let span = LinkSpan::parse_image(cur.rest())?;
    cur.bump_n(span.len);
    Some(span.image_node())
}

/// Consumes `\` plus an escapable character, returning that character.
///
/// A backslash before anything else is left for the plain-character rule.
fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<char> {
    if cur.peek() != Some(Escape::BACKSLASH) {
        return None;
    }
    let next = cur.peek_at(1).filter(|&b| Escape::is_escapable(b))?;
    cur.bump_n(2);
    Some(char::from(next))
}

fn flush_text(out: &mut Vec<Node>, text: &mut String) {
    if !text.is_empty() {
        out.push(Node::text(std::mem::take(text)));
    }
}

fn emit(out: &mut Vec<Node>, text: &mut String, node: Node) {
    flush_text(out, text);
    out.push(node);
}

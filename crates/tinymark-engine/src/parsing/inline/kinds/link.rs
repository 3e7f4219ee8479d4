use std::sync::OnceLock;

use regex::Regex;

use crate::ast::Node;

/// Link delimiters: `[text](url)` or `[text](url "title")`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Separates the link text from its destination.
    pub const TEXT_CLOSE: &'static str = "](";
    pub const DEST_CLOSE: char = ')';
}

/// Image delimiters: a link span prefixed with `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
    pub const OPEN: &'static str = "![";
}

/// A well-formed `[text](destination)` span found at the start of a string.
///
/// The text runs to the first `](`, the destination to the first `)` after
/// that. A destination ending in whitespace plus a double-quoted string is
/// split into url and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSpan<'a> {
    pub text: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
    /// Bytes consumed, from the `[` through the closing `)`.
    pub len: usize,
}

impl<'a> LinkSpan<'a> {
    /// Parses a link span at the start of `s`, which must begin with `[`.
    pub fn parse(s: &'a str) -> Option<Self> {
        let body = s.strip_prefix(Link::OPEN as char)?;
        let text_end = body.find(Link::TEXT_CLOSE)?;
        let dest_start = text_end + Link::TEXT_CLOSE.len();
        let dest_len = body.get(dest_start..)?.find(Link::DEST_CLOSE)?;
        let dest = body.get(dest_start..dest_start + dest_len)?;
        let (url, title) = split_title(dest);

        Some(LinkSpan {
            text: body.get(..text_end)?,
            url,
            title,
            len: 1 + dest_start + dest_len + 1,
        })
    }

    /// Parses an image span (`![alt](src)`) at the start of `s`.
    ///
    /// The returned span's `len` includes the leading `!`.
    pub fn parse_image(s: &'a str) -> Option<Self> {
        let span = Self::parse(s.strip_prefix(Image::BANG as char)?)?;
        Some(LinkSpan {
            len: span.len + 1,
            ..span
        })
    }

    /// Builds a `link` node; the caller supplies the scanned link text.
    pub fn link_node(&self, children: Vec<Node>) -> Node {
        Node::Link {
            url: self.url.to_string(),
            title: self.title.map(str::to_string),
            children,
        }
    }

    /// Builds an `image` leaf; the span text is used verbatim as `alt`.
    pub fn image_node(&self) -> Node {
        Node::Image {
            alt: self.text.to_string(),
            src: self.url.to_string(),
            title: self.title.map(str::to_string),
        }
    }
}

fn split_title(dest: &str) -> (&str, Option<&str>) {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    let re = TITLE.get_or_init(|| Regex::new(r#"^(.*?)\s+"(.*)"$"#).expect("Invalid title regex"));

    match re.captures(dest) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(url), Some(title)) => (url.as_str(), Some(title.as_str())),
            _ => (dest, None),
        },
        None => (dest, None),
    }
}

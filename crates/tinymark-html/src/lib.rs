//! HTML rendering for tinymark document trees.
//!
//! A pure mapping from [`Node`] to markup. Every literal text value and every
//! attribute value goes through [`escape_html`]; nothing from the source is
//! emitted raw.

use std::borrow::Cow;

use tinymark_engine::{AstError, Node, parse};

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text or a quoted attribute.
///
/// Returns the input unchanged (borrowed) when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut result = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}

/// Renders a tree to HTML. Unknown nodes render as nothing.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(&mut out, node);
    out
}

/// Renders a tree received in its JSON wire form.
pub fn render_json(json: &str) -> Result<String, AstError> {
    Ok(render(&Node::from_json(json)?))
}

/// Parses and renders in one step.
pub fn markdown_to_html(markdown: &str) -> String {
    render(&parse(markdown))
}

fn render_into(out: &mut String, node: &Node) {
    match node {
        Node::Document { children } => render_children(out, children),
        Node::Paragraph { children } => wrap(out, "p", children),
        Node::Heading { level, children } => {
            let tag = format!("h{level}");
            wrap(out, &tag, children);
        }
        Node::Quote { children } => {
            out.push_str("<blockquote>");
            wrap(out, "p", children);
            out.push_str("</blockquote>");
        }
        Node::List { children } => wrap(out, "ul", children),
        Node::OrderedList { children } => wrap(out, "ol", children),
        Node::ListItem { children } | Node::OrderedListItem { children } => {
            wrap(out, "li", children)
        }
        Node::LineBreak => out.push_str("<br>"),
        Node::HorizontalRule => out.push_str("<hr>"),
        Node::Emphasis { children } => wrap(out, "em", children),
        Node::Strong { children } => wrap(out, "strong", children),
        Node::Strikethrough { children } => wrap(out, "del", children),
        Node::Link {
            url,
            title,
            children,
        } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_html(url));
            out.push('"');
            push_title(out, title.as_deref());
            out.push('>');
            render_children(out, children);
            out.push_str("</a>");
        }
        Node::Image { alt, src, title } => {
            out.push_str("<img src=\"");
            out.push_str(&escape_html(src));
            out.push_str("\" alt=\"");
            out.push_str(&escape_html(alt));
            out.push('"');
            push_title(out, title.as_deref());
            out.push('>');
        }
        Node::CodeBlock {
            language, value, ..
        } => {
            out.push_str("<pre><code");
            if let Some(lang) = language.as_deref().filter(|l| !l.is_empty()) {
                out.push_str(" class=\"language-");
                out.push_str(&escape_html(lang));
                out.push('"');
            }
            out.push('>');
            out.push_str(&escape_html(value));
            out.push_str("</code></pre>");
        }
        Node::Code { value } => {
            out.push_str("<code>");
            out.push_str(&escape_html(value));
            out.push_str("</code>");
        }
        Node::Text { value } => out.push_str(&escape_html(value)),
        Node::Div { children } => wrap(out, "div", children),
        Node::Unknown => log::trace!("skipping node of unknown type"),
    }
}

fn render_children(out: &mut String, children: &[Node]) {
    for child in children {
        render_into(out, child);
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Node]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_children(out, children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Empty titles are dropped.
fn push_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        out.push_str(" title=\"");
        out.push_str(&escape_html(title));
        out.push('"');
    }
}

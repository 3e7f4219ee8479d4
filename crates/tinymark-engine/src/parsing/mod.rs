pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::{ast::Node, options::ParseOptions};

use blocks::{BlockBuilder, MarkdownLineClassifier};

/// Parses a whole document.
///
/// Lines are split on `\n` only, so a trailing newline yields one final
/// empty line. Input made only of whitespace lines collapses to an empty
/// document, except a single non-empty line of whitespace, which is kept as
/// a paragraph.
pub fn parse_document(markdown: &str, options: &ParseOptions) -> Node {
    if markdown.is_empty() {
        return Node::document(vec![]);
    }

    let lines: Vec<&str> = markdown.split('\n').collect();
    if lines.iter().all(|l| l.trim().is_empty()) && lines.len() != 1 {
        log::debug!("{} whitespace-only lines, empty document", lines.len());
        return Node::document(vec![]);
    }

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(options);
    let mut i = 0;
    while i < lines.len() {
        let lc = classifier.classify(lines[i]);
        i += builder.push(&lc, &lines[i + 1..]);
    }

    let children = builder.finish();
    log::debug!("parsed {} lines into {} blocks", lines.len(), children.len());
    Node::document(children)
}

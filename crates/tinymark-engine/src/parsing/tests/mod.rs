//! Behaviour tests for the whole parsing pipeline.
//!
//! Each test feeds raw markdown through `parse_document` and compares the
//! resulting children against hand-built trees.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    ast::{Node, validate},
    options::ParseOptions,
    parsing::{inline::kinds::Escape, parse_document},
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn blocks(md: &str) -> Vec<Node> {
    init_logging();
    let doc = parse_document(md, &ParseOptions::default());
    if let Err(e) = validate(&doc) {
        panic!("invalid tree for {md:?}: {e}");
    }
    match doc {
        Node::Document { children } => children,
        other => panic!("expected document, got {}", other.kind()),
    }
}

fn t(value: &str) -> Node {
    Node::text(value)
}

fn p(children: Vec<Node>) -> Node {
    Node::paragraph(children)
}

fn em(children: Vec<Node>) -> Node {
    Node::Emphasis { children }
}

fn strong(children: Vec<Node>) -> Node {
    Node::Strong { children }
}

fn link(url: &str, children: Vec<Node>) -> Node {
    Node::Link {
        url: url.into(),
        title: None,
        children,
    }
}

// Document level

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n")]
#[case("   \n  ")]
#[case("\t\n\n ")]
fn blank_input_collapses_to_empty_document(#[case] md: &str) {
    assert!(blocks(md).is_empty());
}

#[test]
fn single_whitespace_line_is_a_paragraph() {
    assert_eq!(blocks("   "), vec![p(vec![t("   ")])]);
}

#[test]
fn trailing_newline_adds_line_break() {
    assert_eq!(blocks("a\n"), vec![p(vec![t("a")]), Node::LineBreak]);
}

#[test]
fn whitespace_line_between_content_is_a_paragraph() {
    assert_eq!(
        blocks("a\n  \nb"),
        vec![p(vec![t("a")]), p(vec![t("  ")]), p(vec![t("b")])]
    );
}

#[test]
fn node_tree_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Node>();
    assert_send_sync::<ParseOptions>();
}

// Headings

#[rstest]
#[case("# One", 1)]
#[case("## Two", 2)]
#[case("### Three", 3)]
#[case("#### Four", 4)]
#[case("##### Five", 5)]
#[case("###### Six", 6)]
fn heading_levels(#[case] md: &str, #[case] level: u8) {
    let content = md.trim_start_matches('#').trim_start();
    assert_eq!(
        blocks(md),
        vec![Node::Heading {
            level,
            children: vec![t(content)],
        }]
    );
}

#[test]
fn heading_keeps_spacing_after_separator() {
    assert_eq!(
        blocks("##  Spaced Heading  "),
        vec![Node::Heading {
            level: 2,
            children: vec![t(" Spaced Heading  ")],
        }]
    );
}

#[test]
fn heading_content_is_inline_scanned() {
    assert_eq!(
        blocks("# Hello *world*"),
        vec![Node::Heading {
            level: 1,
            children: vec![t("Hello "), em(vec![t("world")])],
        }]
    );
}

#[rstest]
#[case("#NoSpace")]
#[case("####### Seven")]
fn malformed_headings_are_paragraphs(#[case] md: &str) {
    assert_eq!(blocks(md), vec![p(vec![t(md)])]);
}

// Quotes and rules

#[test]
fn each_quote_line_is_its_own_quote() {
    assert_eq!(
        blocks("> a\n> **b**"),
        vec![
            Node::Quote {
                children: vec![t("a")]
            },
            Node::Quote {
                children: vec![strong(vec![t("b")])]
            },
        ]
    );
}

#[rstest]
#[case("---")]
#[case("- - -")]
#[case("___")]
#[case("***")]
#[case("*****")]
fn horizontal_rules(#[case] md: &str) {
    assert_eq!(blocks(md), vec![Node::HorizontalRule]);
}

#[test]
fn four_asterisks_are_literal_text() {
    assert_eq!(blocks("****"), vec![p(vec![t("****")])]);
}

// Fenced code

#[test]
fn fence_with_language() {
    assert_eq!(
        blocks("```js\ncode\n```"),
        vec![Node::CodeBlock {
            language: Some("js".into()),
            meta: None,
            value: "code".into(),
        }]
    );
}

#[test]
fn fence_with_meta() {
    assert_eq!(
        blocks("```js title=\"example.js\"\nconsole.log(1)\n```"),
        vec![Node::CodeBlock {
            language: Some("js".into()),
            meta: Some("title=\"example.js\"".into()),
            value: "console.log(1)".into(),
        }]
    );
}

#[test]
fn unclosed_fence_is_a_paragraph() {
    assert_eq!(
        blocks("```js\ncode"),
        vec![p(vec![t("```js")]), p(vec![t("code")])]
    );
}

#[test]
fn longer_fence_needs_longer_closer() {
    assert_eq!(
        blocks("````\n```\ninner\n```\n````"),
        vec![Node::CodeBlock {
            language: None,
            meta: None,
            value: "```\ninner\n```".into(),
        }]
    );
}

#[test]
fn fence_body_is_raw() {
    assert_eq!(
        blocks("~~~\n# not a heading\n- *nor* a list\n~~~"),
        vec![Node::CodeBlock {
            language: None,
            meta: None,
            value: "# not a heading\n- *nor* a list".into(),
        }]
    );
}

// Lists

#[test]
fn consecutive_items_share_a_list() {
    assert_eq!(
        blocks("- A\n- B"),
        vec![Node::List {
            children: vec![
                Node::ListItem {
                    children: vec![t("A")]
                },
                Node::ListItem {
                    children: vec![t("B")]
                },
            ]
        }]
    );
}

#[test]
fn list_kinds_never_merge() {
    let kinds: Vec<_> = blocks("- A\n1. B\n- C").iter().map(Node::kind).collect();
    assert_eq!(kinds, ["list", "ordered-list", "list"]);
}

#[test]
fn indentation_is_flattened() {
    let out = blocks("- a\n  - b\n    - c");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].children().len(), 3);
}

#[test]
fn extra_spacing_after_bullet_is_kept() {
    assert_eq!(
        blocks("-   Item A"),
        vec![Node::List {
            children: vec![Node::ListItem {
                children: vec![t("  Item A")]
            }]
        }]
    );
}

#[test]
fn ordered_items() {
    assert_eq!(
        blocks("1. First\n10. Tenth"),
        vec![Node::OrderedList {
            children: vec![
                Node::OrderedListItem {
                    children: vec![t("First")]
                },
                Node::OrderedListItem {
                    children: vec![t("Tenth")]
                },
            ]
        }]
    );
}

#[test]
fn blank_line_splits_lists() {
    let kinds: Vec<_> = blocks("- a\n\n- b").iter().map(Node::kind).collect();
    assert_eq!(kinds, ["list", "line-break", "list"]);
}

// Block links and images

#[test]
fn block_link_has_no_title_key() {
    let out = blocks("[Example](http://example.com)");
    assert_eq!(out, vec![link("http://example.com", vec![t("Example")])]);
    let json = out[0].to_json().unwrap();
    assert!(!json.contains("title"), "{json}");
}

#[test]
fn two_links_on_a_line_form_a_paragraph() {
    assert_eq!(
        blocks("[Start](http://a.com) middle [end](http://b.com)"),
        vec![p(vec![
            link("http://a.com", vec![t("Start")]),
            t(" middle "),
            link("http://b.com", vec![t("end")]),
        ])]
    );
}

#[test]
fn block_image_with_title() {
    assert_eq!(
        blocks("![Alt text](image.jpg \"Image title\")"),
        vec![Node::Image {
            alt: "Alt text".into(),
            src: "image.jpg".into(),
            title: Some("Image title".into()),
        }]
    );
}

#[test]
fn block_image_discards_trailing_text() {
    assert_eq!(
        blocks("![a](b.png) caption"),
        vec![Node::Image {
            alt: "a".into(),
            src: "b.png".into(),
            title: None,
        }]
    );
}

// Inline formatting

#[test]
fn triple_asterisks_nest_emphasis_in_strong() {
    assert_eq!(
        blocks("***text***"),
        vec![p(vec![strong(vec![em(vec![t("text")])])])]
    );
}

#[test]
fn trailing_double_asterisk_is_literal() {
    assert_eq!(
        blocks("**bold****"),
        vec![p(vec![strong(vec![t("bold")]), t("**")])]
    );
}

#[test]
fn adjacent_formatting_runs() {
    assert_eq!(
        blocks("*italic***bold**~~strike~~"),
        vec![p(vec![
            em(vec![t("italic")]),
            strong(vec![t("bold")]),
            Node::Strikethrough {
                children: vec![t("strike")]
            },
        ])]
    );
}

#[test]
fn emphasis_of_a_space() {
    assert_eq!(
        blocks("Em * * phasis"),
        vec![p(vec![t("Em "), em(vec![t(" ")]), t(" phasis")])]
    );
}

#[rstest]
#[case("wo*rd*le", em(vec![t("rd")]))]
#[case("wo**rd**le", strong(vec![t("rd")]))]
fn intraword_delimiters(#[case] md: &str, #[case] inner: Node) {
    assert_eq!(blocks(md), vec![p(vec![t("wo"), inner, t("le")])]);
}

#[rstest]
#[case("word *")]
#[case("** and")]
#[case("~~strike")]
#[case("~~~~")]
#[case("a ** b")]
fn unmatched_delimiters_stay_literal(#[case] md: &str) {
    assert_eq!(blocks(md), vec![p(vec![t(md)])]);
}

#[test]
fn emphasis_around_strong() {
    assert_eq!(
        blocks("*italic **bold** italic*"),
        vec![p(vec![em(vec![
            t("italic "),
            strong(vec![t("bold")]),
            t(" italic"),
        ])])]
    );
}

#[test]
fn link_text_is_scanned() {
    assert_eq!(
        blocks("See [**docs**](/d \"Docs\")"),
        vec![p(vec![
            t("See "),
            Node::Link {
                url: "/d".into(),
                title: Some("Docs".into()),
                children: vec![strong(vec![t("docs")])],
            },
        ])]
    );
}

// Code spans

#[test]
fn empty_double_tick_span() {
    assert_eq!(
        blocks("Empty: `` and text"),
        vec![p(vec![t("Empty: "), Node::code(""), t(" and text")])]
    );
}

#[test]
fn double_tick_span_holds_backticks() {
    assert_eq!(
        blocks("Code: `` `backtick` inside ``"),
        vec![p(vec![t("Code: "), Node::code("`backtick` inside")])]
    );
}

#[test]
fn double_padding_is_kept() {
    assert_eq!(
        blocks("`  special **chars** & symbols  `"),
        vec![p(vec![Node::code("  special **chars** & symbols  ")])]
    );
}

#[test]
fn unclosed_code_span_is_literal() {
    assert_eq!(
        blocks("`unclosed code"),
        vec![p(vec![t("`unclosed code")])]
    );
}

// Escapes

#[test]
fn every_escapable_character_round_trips() {
    for c in Escape::ESCAPABLE.chars() {
        let md = format!("\\{c}");
        assert_eq!(blocks(&md), vec![p(vec![t(&c.to_string())])], "{md:?}");
    }
}

#[test]
fn invalid_escapes_keep_backslash() {
    let md = "Invalid escape: \\z and \\1 and \\space";
    assert_eq!(blocks(md), vec![p(vec![t(md)])]);
}

#[test]
fn lone_backslash() {
    assert_eq!(blocks("\\"), vec![p(vec![t("\\")])]);
}

#[rstest]
#[case("\\*not emphasis\\*", "*not emphasis*")]
#[case("\\# not heading", "# not heading")]
#[case("\\- not list", "- not list")]
#[case("\\[not](link)", "[not](link)")]
fn escapes_suppress_constructs(#[case] md: &str, #[case] text: &str) {
    assert_eq!(blocks(md), vec![p(vec![t(text)])]);
}

// Options

#[test]
fn nesting_limit_applies_to_block_content() {
    let opts = ParseOptions::new().with_max_nesting(0);
    let doc = parse_document("# **a *b* c**", &opts);
    assert_eq!(
        doc,
        Node::document(vec![Node::Heading {
            level: 1,
            children: vec![strong(vec![t("a *b* c")])],
        }])
    );
}

use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule line.
///
/// Dashes and underscores need three or more, optionally space-separated.
/// Asterisks are accepted as exactly three or as five or more, unseparated;
/// a run of four is left to the inline `****` rule.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(line: &str) -> bool {
        static RULE: OnceLock<Regex> = OnceLock::new();
        RULE.get_or_init(|| {
            Regex::new(r"^\s*(-{3,}|-( +-){2,}|_{3,}|_( +_){2,}|\*{3}|\*{5,})$")
                .expect("Invalid thematic break regex")
        })
        .is_match(line)
    }
}

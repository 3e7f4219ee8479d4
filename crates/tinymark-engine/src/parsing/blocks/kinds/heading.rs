use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: one to six `#`, one whitespace character, then content.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns `(level, content)`.
    ///
    /// Only the single separator character is consumed, so `##  x` yields
    /// content ` x`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static HEADING: OnceLock<Regex> = OnceLock::new();
        let re = HEADING.get_or_init(|| Regex::new(r"^(#{1,6})\s(.*)$").expect("Invalid heading regex"));

        let caps = re.captures(line)?;
        let level = u8::try_from(caps.get(1)?.len()).ok()?;
        Some((level, caps.get(2)?.as_str()))
    }
}

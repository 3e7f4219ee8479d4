//! Asterisk and tilde delimiter runs.
//!
//! Each `find_close` takes the byte index of the opening delimiter and
//! returns the byte index of the closing one, or `None` when the opener has
//! no usable closer (unclosed, or the content would be empty). On `None` the
//! caller emits the opener as literal text.

/// `~~strikethrough~~`
pub struct Strikethrough;

impl Strikethrough {
    pub const MARKER: &'static str = "~~";

    /// Closes on the nearest following `~~`.
    pub fn find_close(s: &str, open: usize) -> Option<usize> {
        let from = open + Self::MARKER.len();
        let end = find_from(s, Self::MARKER, from)?;
        (end > from).then_some(end)
    }
}

/// `**strong**`
pub struct Strong;

impl Strong {
    pub const MARKER: &'static str = "**";
    /// Four asterisks in a row are always literal.
    pub const LITERAL_RUN: &'static str = "****";

    /// Closes on the nearest following `**`, except that an opener followed by a
    /// third `*` may reach for the next `**` when the longer content is itself
    /// wrapped in single asterisks. That makes `***x***` strong(emphasis(x)).
    pub fn find_close(s: &str, open: usize) -> Option<usize> {
        let from = open + Self::MARKER.len();
        let mut end = find_from(s, Self::MARKER, from)?;

        if s.as_bytes().get(from) == Some(&Emphasis::MARKER)
            && let Some(next) = find_from(s, Self::MARKER, end + 1)
            && let Some(wider) = s.get(from..next)
            && wider.len() > 2
            && wider.starts_with('*')
            && wider.ends_with('*')
        {
            end = next;
        }

        (end > from).then_some(end)
    }
}

/// `*emphasis*`
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: u8 = b'*';

    /// Scans for the first `*` that can close the span.
    ///
    /// A candidate is skipped when the byte before it is another `*` (other than
    /// the opener), or when it starts a `**` run that is not followed by a third
    /// `*`.
    pub fn find_close(s: &str, open: usize) -> Option<usize> {
        let b = s.as_bytes();
        for k in open + 1..b.len() {
            if b[k] != Self::MARKER {
                continue;
            }
            let prev_star = b[k - 1] == Self::MARKER && k - 1 != open;
            let next_star = b.get(k + 1) == Some(&Self::MARKER);
            let run_of_three = next_star && b.get(k + 2) == Some(&Self::MARKER);

            if !prev_star && (!next_star || run_of_three) {
                return (k > open + 1).then_some(k);
            }
        }
        None
    }
}

fn find_from(s: &str, pat: &str, from: usize) -> Option<usize> {
    s.get(from..)?.find(pat).map(|p| p + from)
}

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: nothing inside them is scanned further.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds a closing backtick run of exactly `run` ticks at or after `from`.
    ///
    /// Runs are compared whole: a run of three never closes a span opened by two.
    /// Returns the byte index where the closing run starts.
    pub fn find_close(s: &str, from: usize, run: usize) -> Option<usize> {
        let b = s.as_bytes();
        let mut j = from;
        while j < b.len() {
            if b[j] != Self::TICK {
                j += 1;
                continue;
            }
            let start = j;
            while j < b.len() && b[j] == Self::TICK {
                j += 1;
            }
            if j - start == run {
                return Some(start);
            }
        }
        None
    }

    /// An unclosed double-tick run followed by end of text or a space is read
    /// as an empty code span.
    ///
    /// The closer search is never retried with a single tick: a later lone
    /// backtick does not close the pair, and everything after it stays text.
    pub fn is_empty_pair(run: usize, next: Option<u8>) -> bool {
        run == 2 && matches!(next, None | Some(b' '))
    }

    /// Strips one leading and one trailing space from span content.
    ///
    /// Applies only when the content is at least two bytes, is not all spaces,
    /// and is padded by exactly one space on each side.
    pub fn strip_padding(content: &str) -> &str {
        let b = content.as_bytes();
        let n = b.len();
        if n < 2 || b.iter().all(|&c| c == b' ') {
            return content;
        }
        if b[0] == b' ' && b[n - 1] == b' ' && b[1] != b' ' && b[n - 2] != b' ' {
            return &content[1..n - 1];
        }
        content
    }
}

/// Backslash escapes.
///
/// A backslash followed by one of [`Escape::ESCAPABLE`] yields that character
/// literally. Any other backslash is kept as-is and does not pair with the
/// character after it.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// The escapable punctuation set.
    pub const ESCAPABLE: &'static str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

    pub fn is_escapable(b: u8) -> bool {
        Self::ESCAPABLE.as_bytes().contains(&b)
    }
}

/// Whitespace test shared by the inline and block layers.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

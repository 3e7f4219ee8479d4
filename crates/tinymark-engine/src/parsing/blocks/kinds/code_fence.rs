use crate::parsing::inline::kinds::is_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn marker(self) -> char {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICK,
            FenceKind::Tildes => CodeFence::TILDE,
        }
    }
}

/// A fence opener: which character, how long the run is, and the info string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    pub kind: FenceKind,
    pub len: usize,
    /// Rest of the opener line after the run, trimmed.
    pub info: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_RUN: usize = 3;

    /// Detects a fence opener at the very start of `line`.
    ///
    /// Indented fences are not recognised.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let kind = match line.chars().next()? {
            Self::BACKTICK => FenceKind::Backticks,
            Self::TILDE => FenceKind::Tildes,
            _ => return None,
        };
        let marker = kind.marker();
        let len = line.bytes().take_while(|&b| b == marker as u8).count();
        if len < Self::MIN_RUN {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: line[len..].trim(),
        })
    }

    /// A closer is the opener's character repeated at least as many times,
    /// with nothing else on the line but trailing whitespace.
    pub fn closes(open: &FenceSig<'_>, line: &str) -> bool {
        let body = line.trim_end();
        body.len() >= open.len && body.chars().all(|c| c == open.kind.marker())
    }

    /// Index into `following` of the first line that closes `open`.
    pub fn find_close(open: &FenceSig<'_>, following: &[&str]) -> Option<usize> {
        following.iter().position(|line| Self::closes(open, line))
    }

    /// Splits an info string into `(language, meta)`.
    ///
    /// `language` is the first whitespace-separated token; `meta` is whatever
    /// follows it, trimmed, and only when non-empty.
    pub fn split_info(info: &str) -> (Option<&str>, Option<&str>) {
        let info = info.trim();
        if info.is_empty() {
            return (None, None);
        }
        match info.split_once(is_whitespace) {
            Some((lang, rest)) => {
                let rest = rest.trim();
                (Some(lang), (!rest.is_empty()).then_some(rest))
            }
            None => (Some(info), None),
        }
    }
}

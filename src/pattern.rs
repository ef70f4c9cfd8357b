// third-party imports
use memchr::memchr;

// local imports
use crate::class;

/// Tests whether the whole `text` matches `pattern`.
///
/// A leading `!` negates the result of matching the rest of the pattern. It is
/// recognized only once and only at the very first position, so `!!x` is the
/// negation of the literal pattern `!x`.
///
/// Pattern syntax:
/// - `*` matches zero or more bytes
/// - `?` matches exactly one byte
/// - `[...]` matches one byte from a set of members and `start-end` ranges
/// - `\` escapes the next byte
/// - any other byte matches itself, case-sensitively
///
/// Malformed patterns never fail loudly: an unclosed `[`, an empty `[]` or a
/// trailing `\` simply make the pattern match nothing (or everything, if negated).
/// Use [`validate`](crate::validate) to detect them up front.
///
/// # Examples
///
/// ```
/// use globmatch::matches;
///
/// assert!(matches("*.rs", "main.rs"));
/// assert!(matches("Letter[0-9]", "Letter5"));
/// assert!(!matches("[CB]at", "cat"));
/// assert!(matches("!*.tmp", "file.txt"));
/// assert!(!matches("!*.tmp", "file.tmp"));
/// assert!(matches(r"\*", "*"));
/// ```
pub fn matches(pattern: impl AsRef<[u8]>, text: impl AsRef<[u8]>) -> bool {
    match pattern.as_ref() {
        [b'!', rest @ ..] => !matches_core(rest, text.as_ref()),
        pattern => matches_core(pattern, text.as_ref()),
    }
}

/// Tests whether the whole `text` matches `pattern` without negation support.
///
/// A leading `!` is an ordinary literal here.
///
/// Runs in `O(pattern.len() * text.len())` time in the worst case and without recursion.
pub fn matches_core(pattern: &[u8], text: &[u8]) -> bool {
    let mut p = 0;
    let mut t = 0;
    let mut star: Option<Star> = None;

    loop {
        if p < pattern.len() {
            let (token, width) = Token::parse(&pattern[p..]);
            match token {
                Token::Star => {
                    let resume = p + width;
                    if resume == pattern.len() {
                        return true;
                    }
                    let Some(next) = seek(pattern, resume, text, t) else {
                        return false;
                    };
                    star = Some(Star { pattern: resume, text: next });
                    p = resume;
                    t = next;
                    continue;
                }
                Token::Malformed => return false,
                token if t < text.len() && token.accepts(text[t]) => {
                    p += width;
                    t += 1;
                    continue;
                }
                _ => {}
            }
        } else if t == text.len() {
            return true;
        }

        // Retry from the most recent star, letting it consume one more byte.
        let Some(s) = &mut star else {
            return false;
        };
        if s.text >= text.len() {
            return false;
        }
        let Some(next) = seek(pattern, s.pattern, text, s.text + 1) else {
            return false;
        };
        s.text = next;
        p = s.pattern;
        t = next;
    }
}

// ---

/// Backtracking point after a `*`.
#[derive(Debug, Clone, Copy)]
struct Star {
    // Pattern position right after the star.
    pattern: usize,
    // Text position the rest of the pattern is currently tried at.
    text: usize,
}

/// Finds the first text position at or after `from` where the pattern tail
/// starting at `p` can possibly begin matching.
///
/// Only literal heads are used to skip ahead; for anything else `from` is returned as is.
#[inline]
fn seek(pattern: &[u8], p: usize, text: &[u8], from: usize) -> Option<usize> {
    if p >= pattern.len() {
        return Some(from);
    }

    match Token::parse(&pattern[p..]).0 {
        Token::Literal(byte) => memchr(byte, &text[from..]).map(|offset| from + offset),
        _ => Some(from),
    }
}

// ---

/// A single pattern element.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Token<'a> {
    Star,
    Any,
    Literal(u8),
    Class(&'a [u8]),
    // Unclosed bracket, empty bracket or trailing backslash; can never be consumed.
    Malformed,
}

impl<'a> Token<'a> {
    /// Parses the token at the start of a non-empty pattern, returning it with its width in bytes.
    #[inline]
    fn parse(pattern: &'a [u8]) -> (Self, usize) {
        match pattern {
            [b'*', ..] => (Self::Star, 1),
            [b'?', ..] => (Self::Any, 1),
            [b'\\', escaped, ..] => (Self::Literal(*escaped), 2),
            [b'\\'] => (Self::Malformed, 1),
            [b'[', rest @ ..] => match memchr(b']', rest) {
                Some(0) | None => (Self::Malformed, 1),
                Some(len) => (Self::Class(&rest[..len]), len + 2),
            },
            [byte, ..] => (Self::Literal(*byte), 1),
            [] => (Self::Malformed, 0),
        }
    }

    /// Tests whether the token consumes the given text byte.
    ///
    /// Stars and malformed tokens never consume a byte on their own.
    #[inline]
    fn accepts(&self, byte: u8) -> bool {
        match *self {
            Self::Any => true,
            Self::Literal(expected) => byte == expected,
            Self::Class(class) => class::contains(class, byte),
            Self::Star | Self::Malformed => false,
        }
    }
}

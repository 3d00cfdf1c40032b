//! Clock readings embedded in result lines.

use crate::errors::LineError;
use regex::Regex;
use std::sync::LazyLock;

/// Elapsed time in seconds.
pub type Seconds = u64;

// ASCII digits only, so every reading found here also converts in `to_seconds`.
static SHORT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+:[0-9]+").unwrap());
static LONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+:[0-9]+:[0-9]+").unwrap());
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+:[0-9]+(?::[0-9]+)?").unwrap());

/// A clock reading (`mm:ss` or `hh:mm:ss`) and where it sits in its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl TimeToken<'_> {
    /// Does this reading carry an hour field?
    pub fn has_hours(&self) -> bool {
        self.text.bytes().filter(|&b| b == b':').count() == 2
    }
}

/// All clock readings in `line`, left to right.
///
/// At each position the longest reading wins, so `01:02:03` is one token.
pub fn time_tokens(line: &str) -> Vec<TimeToken<'_>> {
    TOKEN_RE
        .find_iter(line)
        .map(|m| TimeToken {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Number of non-overlapping `mm:ss` matches in `line`.
///
/// An `hh:mm:ss` reading counts once: the match consumes `hh:mm` and the
/// leftover `:ss` cannot start another one.
pub fn count_clock_times(line: &str) -> usize {
    SHORT_RE.find_iter(line).count()
}

/// Offset where the first clock reading starts.
pub fn first_time_pos(line: &str) -> Option<usize> {
    SHORT_RE.find(line).map(|m| m.start())
}

/// Offset where the last clock reading ends.
///
/// The last `hh:mm:ss` reading is preferred; lines that only have `mm:ss`
/// readings fall back to the last of those.
pub fn last_time_pos(line: &str) -> Option<usize> {
    LONG_RE
        .find_iter(line)
        .last()
        .or_else(|| SHORT_RE.find_iter(line).last())
        .map(|m| m.end())
}

/// Convert `hh:mm:ss` or `mm:ss` to seconds.
pub fn to_seconds(token: &str) -> Result<Seconds, LineError> {
    let bad = || LineError::TimeFormat {
        token: token.to_owned(),
    };
    let mut fields = Vec::with_capacity(3);
    for field in token.split(':') {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        fields.push(field.parse::<Seconds>().map_err(|_| bad())?);
    }
    let (h, m, s) = match fields[..] {
        [m, s] => (0, m, s),
        [h, m, s] => (h, m, s),
        _ => return Err(bad()),
    };
    h.checked_mul(3600)
        .and_then(|h| m.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(s))
        .ok_or_else(bad)
}

/// Render seconds as `HH:MM:SS`. Hours do not wrap at 24.
pub fn format_seconds(seconds: Seconds) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    )
}

//! Errors and error-related utilities.

use serde::{Serialize, Serializer};
use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// A failure of the whole run rather than of one line.
#[derive(Debug, PartialEq, Eq)]
pub enum RunError {
    /// The sheet, or the converter producing it, is unusable.
    Input(String),
    /// An option value makes no sense.
    Argument(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Input(s) => write!(f, "invalid input: {s}"),
            RunError::Argument(s) => write!(f, "invalid argument: {s}"),
        }
    }
}

impl error::Error for RunError {}

pub fn invalid_input(s: impl Into<String>) -> Box<dyn error::Error> {
    RunError::Input(s.into()).into()
}

pub fn invalid_argument(s: impl Into<String>) -> Box<dyn error::Error> {
    RunError::Argument(s.into()).into()
}

/// Why a single line could not be turned into a record.
///
/// These never abort a batch; the driver records them next to the line
/// that caused them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineError {
    /// No clock time anywhere in the line.
    MalformedLine,
    /// The text before the first clock time has fewer than two fragments.
    IdentityParse { preamble: String },
    /// A token picked for a segment is not `mm:ss` or `hh:mm:ss`.
    TimeFormat { token: String },
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineError::MalformedLine => write!(f, "no clock time found"),
            LineError::IdentityParse { preamble } => {
                write!(f, "cannot find name, age and sex in '{preamble}'")
            }
            LineError::TimeFormat { token } => write!(f, "not a clock time: '{token}'"),
        }
    }
}

impl error::Error for LineError {}

impl Serialize for LineError {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn line_error_display() {
        assert_eq!(LineError::MalformedLine.to_string(), "no clock time found");
        assert_eq!(
            LineError::IdentityParse {
                preamble: "SMITH ".to_owned()
            }
            .to_string(),
            "cannot find name, age and sex in 'SMITH '"
        );
        assert_eq!(
            LineError::TimeFormat {
                token: "F".to_owned()
            }
            .to_string(),
            "not a clock time: 'F'"
        );
    }

    #[test]
    fn run_error_display() {
        assert_eq!(
            invalid_argument("bad separator").to_string(),
            "invalid argument: bad separator"
        );
        assert_eq!(
            invalid_input(format!("no results in {}", "x.txt")).to_string(),
            "invalid input: no results in x.txt"
        );
    }

    #[test]
    fn line_error_json() {
        let e = LineError::TimeFormat {
            token: "1:2:3:4".to_owned(),
        };
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            "\"not a clock time: '1:2:3:4'\""
        );
    }
}

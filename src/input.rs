//! Getting text lines out of a results sheet.

use crate::errors::{self, Result};
use log::{debug, info, warn};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Default external PDF-to-text converter.
pub const DEFAULT_CONVERTER: &str = "pdftotext";

/// Where the results sheet comes from.
pub enum Source<'a> {
    /// Plain text or markdown, already converted.
    Text(&'a Path),
    /// A PDF, converted with `converter -layout <pdf> -`.
    Pdf { path: &'a Path, converter: &'a str },
}

/// Read the whole sheet as text.
pub fn read(source: &Source) -> Result<String> {
    match source {
        Source::Text(path) => {
            info!(target: "racesplits", "read: {}", path.display());
            Ok(decode(&fs::read(path)?))
        }
        Source::Pdf { path, converter } => convert_pdf(path, converter),
    }
}

/// Run an external converter on a PDF and capture its text output.
pub fn convert_pdf(path: &Path, converter: &str) -> Result<String> {
    info!(target: "racesplits", "convert: {} with {converter}", path.display());
    let output = Command::new(converter)
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| errors::invalid_argument(format!("cannot run {converter}: {e}")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(errors::invalid_input(format!(
            "{converter} failed on {}: {}",
            path.display(),
            stderr.trim()
        )));
    }
    let text = decode(&output.stdout);
    debug!(target: "racesplits", "converted {} bytes of text", text.len());
    Ok(text)
}

/// Text from raw bytes. Invalid UTF-8 (e.g. a Latin-1 name) becomes U+FFFD
/// so that one bad line does not cost the whole sheet.
pub fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!(target: "racesplits", "input is not valid UTF-8; bad bytes replaced");
    }
    text.into_owned()
}

/// Split text into lines. Line numbers match the text as written; page
/// breaks (form feeds) stay on their line and are trimmed by the driver.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

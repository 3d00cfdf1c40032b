//! Writing records as delimited text or JSON.

use crate::clock::{self, Seconds};
use crate::driver::Batch;
use crate::errors::{self, Result};
use crate::record::RaceRecord;
use crate::variant::{EventVariant, Segment};
use serde::Serialize;
use std::io;

/// Default field separator; commas already appear inside names and places.
pub const DEFAULT_SEPARATOR: &str = ";";

/// Error report written by the command line tools.
#[derive(Serialize)]
pub struct OError {
    pub infile: String,
    pub error: String,
}

/// Check that a separator is a single ASCII character.
pub fn parse_separator(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() && *b != b'\n' && *b != b'"' => Ok(*b),
        _ => Err(errors::invalid_argument(format!(
            "separator should be one ASCII character, got '{s}'"
        ))),
    }
}

fn column_name(variant: EventVariant, segment: Segment) -> &'static str {
    match (variant, segment) {
        (_, Segment::Total) => "Combined",
        (EventVariant::Challenge | EventVariant::Goofy, Segment::Half) => "Race #1",
        (EventVariant::Challenge | EventVariant::Goofy, Segment::Full) => "Race #2",
        (_, Segment::FiveK) => "5k",
        (_, Segment::TenK) => "10k",
        (_, Segment::Half) => "Half",
        (_, Segment::Full) => "Full",
    }
}

fn columns(variant: EventVariant) -> Vec<Segment> {
    let mut segments = variant.segments();
    segments.push(Segment::Total);
    segments
}

/// Header row for a variant.
pub fn header(variant: EventVariant) -> Vec<String> {
    let mut row: Vec<String> = ["Name", "Age", "Gender", "Location"]
        .iter()
        .map(|&s| s.to_owned())
        .collect();
    for segment in columns(variant) {
        let name = column_name(variant, segment);
        row.push(format!("{name} Seconds"));
        row.push(format!("{name} Time"));
    }
    row
}

/// One row per record: identity, then seconds and `HH:MM:SS` per segment.
pub fn row(variant: EventVariant, record: &RaceRecord) -> Vec<String> {
    let id = &record.identity;
    let mut row = vec![
        id.name.clone(),
        id.age.clone(),
        id.sex.clone(),
        record.origin.clone(),
    ];
    for segment in columns(variant) {
        let seconds: Seconds = record.seconds(segment);
        row.push(seconds.to_string());
        row.push(clock::format_seconds(seconds));
    }
    row
}

/// Write records as delimited text with a header row.
pub fn write_csv<W: io::Write>(
    writer: W,
    variant: EventVariant,
    separator: u8,
    records: &[RaceRecord],
) -> Result<()> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(separator)
        .from_writer(writer);
    w.write_record(header(variant))?;
    for record in records {
        w.write_record(row(variant, record))?;
    }
    w.flush()?;
    Ok(())
}

/// Write the whole batch, diagnostics included, as JSON.
pub fn write_json<W: io::Write>(writer: W, batch: &Batch, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(writer, batch)?;
    } else {
        serde_json::to_writer_pretty(writer, batch)?;
    }
    Ok(())
}

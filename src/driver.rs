//! Main entry point for turning a results sheet into records.

use crate::classify;
use crate::errors::{self, LineError, Result};
use crate::extract;
use crate::parallelism;
use crate::record::RaceRecord;
use crate::variant::EventVariant;
use itertools::Itertools;
use log::{debug, info, warn};
use serde::Serialize;

/// What to extract?
pub struct DriverArgs {
    /// Which event the results sheet comes from.
    /// Decides which segments are read and from which positions.
    pub variant: EventVariant,

    /// Minimum number of clock readings.
    /// Lines with fewer readings are headers, footers or other noise and are dropped without comment.
    pub min_times: usize,

    /// Number of worker threads.
    /// 1 processes lines in the calling thread; 0 uses one thread per CPU.
    pub jobs: usize,
}

impl DriverArgs {
    pub fn new(variant: EventVariant) -> DriverArgs {
        DriverArgs {
            variant,
            min_times: classify::DEFAULT_MIN_TIMES,
            jobs: 1,
        }
    }
}

/// A line that looked like a result but could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// 1-based.
    pub line_no: usize,
    pub line: String,
    pub error: LineError,
}

/// Everything extracted from one sheet.
#[derive(Debug, Serialize)]
pub struct Batch {
    pub variant: EventVariant,
    /// Number of input lines.
    pub lines: usize,
    /// Lines with enough clock readings to be parsed.
    pub qualifying: usize,
    /// In input order.
    pub records: Vec<RaceRecord>,
    pub skipped: Vec<Skipped>,
}

/// Extract records from all lines.
///
/// Bad lines are collected in [Batch::skipped] and do not stop the rest.
pub fn calc<S>(args: &DriverArgs, lines: &[S]) -> Result<Batch>
where
    S: AsRef<str> + Sync,
{
    if args.min_times == 0 {
        return Err(errors::invalid_argument(
            "minimum number of times must be at least 1",
        ));
    }
    let candidates = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.as_ref().trim()))
        .filter(|&(_, line)| classify::qualifies(line, args.min_times))
        .collect_vec();
    debug!(
        target: "racesplits",
        "{} of {} lines have at least {} times",
        candidates.len(),
        lines.len(),
        args.min_times
    );
    let nthreads = parallelism::thread_count(args.jobs);
    let results = parallelism::map_ordered(&candidates, nthreads, |&(_, line)| {
        extract::extract(line, args.variant)
    });

    let mut records = Vec::with_capacity(results.len());
    let mut skipped = vec![];
    for (&(line_no, line), result) in candidates.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(target: "racesplits", "line {line_no}: {error}: {line}");
                skipped.push(Skipped {
                    line_no,
                    line: line.to_owned(),
                    error,
                });
            }
        }
    }
    let batch = Batch {
        variant: args.variant,
        lines: lines.len(),
        qualifying: candidates.len(),
        records,
        skipped,
    };
    info!(target: "racesplits", "{}", summary(&batch));
    Ok(batch)
}

/// One-line account of a batch.
pub fn summary(batch: &Batch) -> String {
    format!(
        "{}: {} lines, {} with times, {} records, {} skipped",
        batch.variant,
        batch.lines,
        batch.qualifying,
        batch.records.len(),
        batch.skipped.len()
    )
}

/// Fail if nothing at all was extracted.
pub fn require_records(batch: &Batch) -> Result<()> {
    if batch.records.is_empty() {
        return Err(errors::invalid_input(format!(
            "no results found ({})",
            summary(batch)
        )));
    }
    Ok(())
}

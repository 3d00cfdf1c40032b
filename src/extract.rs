//! Turn one result line into a [RaceRecord].
//!
//! A line looks like `DOE, JANE 34 F 31:02 1:05:40 2:20:11 4:50:09 Orlando, FL`:
//! identity fields, then a block of clock readings, then where the runner
//! is from. The block is cut out by position: it starts at the first
//! `mm:ss` reading and ends after the last `hh:mm:ss` reading.

use crate::clock::{self, Seconds};
use crate::errors::LineError;
use crate::record::{Identity, RaceRecord};
use crate::variant::{EventVariant, Segment};
use itertools::Itertools;
use log::trace;

/// A line cut into its three parts.
#[derive(Debug, PartialEq, Eq)]
pub struct Parts<'a> {
    pub preamble: &'a str,
    pub time_block: &'a str,
    pub postamble: &'a str,
}

/// Cut `line` around its clock readings.
pub fn split_line(line: &str) -> Result<Parts<'_>, LineError> {
    let first = clock::first_time_pos(line).ok_or(LineError::MalformedLine)?;
    let last = clock::last_time_pos(line).ok_or(LineError::MalformedLine)?;
    debug_assert!(first < last);
    Ok(Parts {
        preamble: &line[..first],
        time_block: &line[first..last],
        postamble: &line[last..],
    })
}

/// Name, age and sex from the text before the times.
///
/// The last two fragments are age and sex; everything before them is the
/// name.
pub fn parse_identity(preamble: &str) -> Result<Identity, LineError> {
    let fragments = preamble.split_whitespace().collect_vec();
    let [name @ .., age, sex] = &fragments[..] else {
        return Err(LineError::IdentityParse {
            preamble: preamble.to_owned(),
        });
    };
    Ok(Identity {
        name: name.join(" "),
        age: age.trim_matches(',').to_owned(),
        sex: sex.trim_matches(',').to_owned(),
    })
}

pub fn parse_origin(postamble: &str) -> String {
    postamble
        .trim()
        .trim_end_matches(',')
        .trim_end()
        .to_owned()
}

/// Assign the readings of a time block to segments.
///
/// Readings are taken from the back of the block according to
/// [EventVariant::slots]; slots beyond the start of the block stay empty.
pub fn parse_times(
    time_block: &str,
    variant: EventVariant,
) -> Result<Vec<(Segment, Seconds)>, LineError> {
    let tokens = time_block.split(' ').filter(|t| !t.is_empty()).collect_vec();
    let mut found = Vec::with_capacity(variant.slots().len());
    for &(from_end, segment) in variant.slots() {
        if from_end > tokens.len() {
            continue;
        }
        let token = tokens[tokens.len() - from_end];
        trace!(target: "racesplits", "{segment}: '{token}'");
        found.push((segment, clock::to_seconds(token)?));
    }
    Ok(found)
}

/// Extract a record from one line.
pub fn extract(line: &str, variant: EventVariant) -> Result<RaceRecord, LineError> {
    let parts = split_line(line)?;
    trace!(target: "racesplits", "times: '{}'", parts.time_block);
    let identity = parse_identity(parts.preamble)?;
    let found = parse_times(parts.time_block, variant)?;
    let origin = parse_origin(parts.postamble);
    Ok(RaceRecord::new(identity, origin, variant, &found))
}

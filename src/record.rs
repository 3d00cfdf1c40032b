//! Data structures for extracted results.

use crate::clock::Seconds;
use crate::variant::{EventVariant, Segment};
use serde::Serialize;
use std::collections::BTreeMap;

/// Who the runner is, as printed before the times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Usually `LASTNAME, FIRSTNAME`.
    pub name: String,
    /// Kept as printed.
    pub age: String,
    /// Kept as printed.
    pub sex: String,
}

/// One runner's line from a results sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RaceRecord {
    #[serde(flatten)]
    pub identity: Identity,
    pub origin: String,
    /// Every [Segment] is present; segments the event does not have are 0.
    pub splits: BTreeMap<Segment, Seconds>,
}

impl RaceRecord {
    /// Build a record from the segment times found in a line.
    ///
    /// [Segment::Total] is computed here from the variant's segments; any
    /// value passed in for it, or for a segment the variant does not have,
    /// is ignored.
    pub fn new(
        identity: Identity,
        origin: String,
        variant: EventVariant,
        found: &[(Segment, Seconds)],
    ) -> RaceRecord {
        let mut splits: BTreeMap<Segment, Seconds> =
            Segment::ALL.iter().map(|&s| (s, 0)).collect();
        for &(segment, seconds) in found {
            if variant.applies(segment) {
                splits.insert(segment, seconds);
            }
        }
        let total = variant.segments().iter().map(|s| splits[s]).sum();
        splits.insert(Segment::Total, total);
        RaceRecord {
            identity,
            origin,
            splits,
        }
    }

    pub fn seconds(&self, segment: Segment) -> Seconds {
        self.splits.get(&segment).copied().unwrap_or(0)
    }

    pub fn total(&self) -> Seconds {
        self.seconds(Segment::Total)
    }
}

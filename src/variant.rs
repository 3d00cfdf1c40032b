//! Event variants and the segments they report.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// A timed part of a multi-race event, or the combined total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Segment {
    #[serde(rename = "5k")]
    FiveK,
    #[serde(rename = "10k")]
    TenK,
    #[serde(rename = "half")]
    Half,
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "total")]
    Total,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::FiveK,
        Segment::TenK,
        Segment::Half,
        Segment::Full,
        Segment::Total,
    ];
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::FiveK => write!(f, "5k"),
            Segment::TenK => write!(f, "10k"),
            Segment::Half => write!(f, "half marathon"),
            Segment::Full => write!(f, "marathon"),
            Segment::Total => write!(f, "total"),
        }
    }
}

/// Which event produced the results sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventVariant {
    /// Two-race challenge: half marathon, then marathon.
    Challenge,
    /// Older name for the two-race challenge.
    Goofy,
    /// Four races: 5k, 10k, half marathon, marathon.
    Dopey,
}

/// Slot counted from the end of the time block (1 = last token), and the
/// segment read from it.
pub type Slot = (usize, Segment);

// Two-race sheets print every checkpoint twice, clock time then net time.
// Only the net time (the second of each pair) is kept.
const CHALLENGE_SLOTS: &[Slot] = &[(1, Segment::Full), (3, Segment::Half)];

// Four-race sheets print one time per race.
const DOPEY_SLOTS: &[Slot] = &[
    (1, Segment::Full),
    (2, Segment::Half),
    (3, Segment::TenK),
    (4, Segment::FiveK),
];

impl EventVariant {
    /// Where each segment sits in the time block, nearest the end first.
    pub fn slots(self) -> &'static [Slot] {
        match self {
            EventVariant::Challenge | EventVariant::Goofy => CHALLENGE_SLOTS,
            EventVariant::Dopey => DOPEY_SLOTS,
        }
    }

    /// Segments this variant reports, in race order. [Segment::Total] excluded.
    pub fn segments(self) -> Vec<Segment> {
        self.slots().iter().rev().map(|&(_, s)| s).collect()
    }

    pub fn applies(self, segment: Segment) -> bool {
        self.slots().iter().any(|&(_, s)| s == segment)
    }
}

impl fmt::Display for EventVariant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventVariant::Challenge => write!(f, "challenge"),
            EventVariant::Goofy => write!(f, "goofy"),
            EventVariant::Dopey => write!(f, "dopey"),
        }
    }
}

//! Cheap pre-filter for result lines.

use crate::clock;

/// Default minimum number of clock readings for a line to be parsed.
pub const DEFAULT_MIN_TIMES: usize = 2;

/// Does `line` hold at least `min_times` clock readings?
pub fn qualifies(line: &str, min_times: usize) -> bool {
    clock::count_clock_times(line) >= min_times
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_time_rejected() {
        assert!(!qualifies("DOE, JANE 30 F 25:13 Boston, MA", 2));
        assert!(!qualifies("Page 3 of 120", 2));
        assert!(!qualifies("", 2));
    }

    #[test]
    fn two_times_accepted() {
        assert!(qualifies("DOE, JANE 30 F 25:13 52:10 Boston, MA", 2));
        assert!(qualifies("junk 1:00 junk 2:00 junk", 2));
        assert!(qualifies(
            "DOE, JANE 30 F 2:01:00 2:00:30 4:31:00 4:30:00 Boston",
            2
        ));
    }

    #[test]
    fn long_readings_count_once() {
        assert!(!qualifies("Printed 10:15:22", 2));
        assert!(qualifies("10:15:22 10:15:23", 2));
        assert!(!qualifies("10:15:22 10:15:23", 3));
    }

    #[test]
    fn threshold_one() {
        assert!(qualifies("25:13", 1));
        assert!(!qualifies("2513", 1));
    }
}

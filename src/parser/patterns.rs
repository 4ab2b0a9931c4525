//! Line patterns of the schedule grammar.

use std::sync::OnceLock;

use regex::Regex;

use crate::calculation::accepted_weekday_spellings;

/// `<weekday> <dd>.<mm>` on its own line.
pub(super) fn day_header() -> &'static Regex {
    static DAY_HEADER: OnceLock<Regex> = OnceLock::new();
    DAY_HEADER.get_or_init(|| {
        let names = accepted_weekday_spellings()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"^(?P<dow>{names})\s+(?P<date>\d{{1,2}}\.\d{{1,2}})$");
        Regex::new(&pattern).expect("day header pattern is valid")
    })
}

/// `<name> <start>-<end>` with an optional ` (<start>-<end>)` break.
pub(super) fn shift_entry() -> &'static Regex {
    static SHIFT_ENTRY: OnceLock<Regex> = OnceLock::new();
    SHIFT_ENTRY.get_or_init(|| {
        Regex::new(
            r"^(?P<name>[\p{L}'’\- ]+?)\s+(?P<start>\d{1,2}:\d{2})-(?P<end>\d{1,2}:\d{2})(?:\s*\((?P<bstart>\d{1,2}:\d{2})-(?P<bend>\d{1,2}:\d{2})\))?$",
        )
        .expect("shift entry pattern is valid")
    })
}

//! Weekday naming and detection.
//!
//! Schedules name their days in Ukrainian. This module owns the canonical
//! name of every weekday, the alias table of known misspellings, and the
//! weekend rule used by the tabulated duration policy.

use chrono::Weekday;

/// Canonical weekday names in Monday..Sunday order.
pub const WEEKDAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Понеділок"),
    (Weekday::Tue, "Вівторок"),
    (Weekday::Wed, "Середа"),
    (Weekday::Thu, "Четвер"),
    (Weekday::Fri, "П'ятниця"),
    (Weekday::Sat, "Субота"),
    (Weekday::Sun, "Неділя"),
];

/// Known alternate spellings accepted in day headers.
///
/// `Cереда` starts with a Latin `C` that renders identically to the Cyrillic
/// one; `П’ятниця` uses a typographic apostrophe.
pub const WEEKDAY_ALIASES: [(&str, Weekday); 2] =
    [("Cереда", Weekday::Wed), ("П’ятниця", Weekday::Fri)];

/// Returns the canonical name for a weekday.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::weekday_name;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_name(Weekday::Wed), "Середа");
/// ```
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize].1
}

/// Resolves a canonical name or a known alias to its weekday.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use schedule_engine::calculation::parse_weekday_name;
/// use chrono::Weekday;
///
/// assert_eq!(parse_weekday_name("Середа"), Some(Weekday::Wed));
/// assert_eq!(parse_weekday_name("Cереда"), Some(Weekday::Wed));
/// assert_eq!(parse_weekday_name("середа"), None);
/// ```
pub fn parse_weekday_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|(_, canonical)| *canonical == name)
        .map(|(weekday, _)| *weekday)
        .or_else(|| {
            WEEKDAY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, weekday)| *weekday)
        })
}

/// Every spelling a day header may use: canonical names first, then aliases.
pub fn accepted_weekday_spellings() -> impl Iterator<Item = &'static str> {
    WEEKDAY_NAMES
        .iter()
        .map(|(_, name)| *name)
        .chain(WEEKDAY_ALIASES.iter().map(|(alias, _)| *alias))
}

/// Returns true for the two weekend days, Saturday and Sunday.
pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Weekdays in canonical Monday..Sunday order.
pub fn canonical_weekdays() -> impl Iterator<Item = Weekday> {
    WEEKDAY_NAMES.iter().map(|(weekday, _)| *weekday)
}

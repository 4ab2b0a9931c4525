//! Clock-time arithmetic.
//!
//! Pure helpers converting `H:MM`/`HH:MM` tokens into minute-of-day offsets
//! and minute spans into hour figures rounded to two decimal places.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Minutes in one hour, as a Decimal divisor.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Number of decimal places kept on every hour figure.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// Converts an `H:MM` or `HH:MM` token into minutes since midnight.
///
/// The hour must be in `0..=23` and the minute in `0..=59`. Anything else,
/// including surrounding whitespace or a missing leading minute digit,
/// yields [`EngineError::InvalidTime`].
///
/// # Examples
///
/// ```
/// use schedule_engine::calculation::to_minutes;
///
/// assert_eq!(to_minutes("8:00").unwrap(), 480);
/// assert_eq!(to_minutes("13:30").unwrap(), 810);
/// assert!(to_minutes("24:00").is_err());
/// assert!(to_minutes("9:5").is_err());
/// ```
pub fn to_minutes(hhmm: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidTime {
        value: hhmm.to_string(),
    };

    let (hour, minute) = hhmm.split_once(':').ok_or_else(invalid)?;
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
        return Err(invalid());
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

/// Returns `(to - from) / 60` hours, rounded to two decimal places.
///
/// Negative and zero spans are returned as-is; callers decide whether such
/// spans are acceptable.
///
/// # Examples
///
/// ```
/// use schedule_engine::calculation::hours_between;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_between(480, 1080), Decimal::new(10, 0));
/// assert_eq!(hours_between(750, 780), Decimal::new(5, 1));
/// assert_eq!(hours_between(600, 580), Decimal::new(-33, 2));
/// ```
pub fn hours_between(from_minutes: u32, to_minutes: u32) -> Decimal {
    let span = i64::from(to_minutes) - i64::from(from_minutes);
    round_hours(Decimal::from(span) / MINUTES_PER_HOUR)
}

/// Rounds an hour figure to two decimal places (banker's rounding).
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp(HOURS_DECIMAL_PLACES)
}

//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps. Stored
//! metadata ([`jiff::Timestamp`]) is rendered in the system time zone;
//! schedule instants ([`jiff::Zoned`]) are rendered in whatever zone or
//! offset the schedule itself carries, never converted.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp, Zoned};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A wrapper around `Zoned` for compact schedule entry stamps.
///
/// # Format
///
/// `Www HH:MM` (e.g. `Sat 09:00`), in the zone the schedule carries. The
/// weekday is included because baking schedules routinely cross midnight.
pub struct WallClock<'a>(pub &'a Zoned);

impl fmt::Display for WallClock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %H:%M"))
    }
}

/// A wrapper around `Zoned` for full schedule boundary timestamps.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM TZ`, in the zone the schedule carries.
pub struct WallDateTime<'a>(pub &'a Zoned);

impl fmt::Display for WallDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M %Z"))
    }
}

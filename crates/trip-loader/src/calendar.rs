//! Calendar tables and human-readable time formatting.
//!
//! The trip files only cover January through June, so the month table stops
//! there. Month numbers are 1-based (as derived from timestamps), weekday
//! indices are 0-based with Monday = 0.

use std::fmt;

/// Month names addressable by `number - 1`
pub const MONTH_NAMES: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

/// Weekday names addressable by index (Monday = 0)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// =============================================================================
// Month
// =============================================================================

/// A month covered by the trip datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based month number, matching the derived `month` field of a trip
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Self> {
        let idx = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(idx).copied()
    }

    /// Case-insensitive lookup by full month name
    pub fn from_name(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name.trim()))
            .map(|idx| Self::ALL[idx])
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// DayOfWeek
// =============================================================================

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// 0-based index, matching the derived `day_of_week` field of a trip
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// Case-insensitive lookup by full weekday name
    pub fn from_name(name: &str) -> Option<Self> {
        WEEKDAY_NAMES
            .iter()
            .position(|d| d.eq_ignore_ascii_case(name.trim()))
            .map(|idx| Self::ALL[idx])
    }

    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Labels
// =============================================================================

/// Display name for a derived month number.
///
/// Months outside the January–June table fall back to their number so a
/// stray row never breaks the report.
pub fn month_label(number: u32) -> String {
    Month::from_number(number)
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("Month {}", number))
}

/// Display name for a derived weekday index
pub fn day_label(index: u32) -> String {
    DayOfWeek::from_index(index)
        .map(|d| d.name().to_string())
        .unwrap_or_else(|| format!("Day {}", index))
}

/// Convert a 24-hour clock hour to a 12-hour label such as "3 PM"
pub fn hour_to_12h_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{} AM", h),
        h => format!("{} PM", h - 12),
    }
}

/// Render a number of seconds as weeks, days, hours, minutes and seconds.
///
/// Zero-valued units are omitted. The seconds component is only appended
/// when `total_seconds > 59`, so anything under a minute renders as an empty
/// string while e.g. 90000 renders as "1 days, 1 hours, 0 seconds".
pub fn seconds_to_duration_label(total_seconds: u64) -> String {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);
    let (weeks, days) = (days / 7, days % 7);

    let mut label = String::new();
    for (value, unit) in [(weeks, "weeks"), (days, "days"), (hours, "hours"), (minutes, "minutes")] {
        if value > 0 {
            label.push_str(&format!("{} {}, ", value, unit));
        }
    }

    if total_seconds > 59 {
        label.push_str(&format!("{} seconds", seconds));
    }

    label
}

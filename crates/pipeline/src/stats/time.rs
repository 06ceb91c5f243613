//! Most frequent times of travel.

use super::{ensure_rows, mode, Result, StatsError};
use crate::view::TripView;
use trip_loader::{day_label, hour_to_12h_label, month_label};

/// Most common month (1-based), weekday (Monday = 0) and start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub day_of_week: u32,
    pub hour: u32,
}

impl TimeStats {
    pub fn month_label(&self) -> String {
        month_label(self.month)
    }

    pub fn day_label(&self) -> String {
        day_label(self.day_of_week)
    }

    /// Start hour on a 12-hour clock, e.g. "5 PM"
    pub fn hour_label(&self) -> String {
        hour_to_12h_label(self.hour)
    }
}

/// Compute the most frequent month, weekday and start hour.
///
/// Trips without a parseable start time are skipped.
pub fn time_stats(view: &TripView<'_>) -> Result<TimeStats> {
    ensure_rows(view)?;
    let no_times = StatsError::NoValues { column: "Start Time" };

    let (month, _) = mode(view.iter().filter_map(|t| t.month)).ok_or(no_times.clone())?;
    let (day_of_week, _) = mode(view.iter().filter_map(|t| t.day_of_week)).ok_or(no_times.clone())?;
    let (hour, _) = mode(view.iter().filter_map(|t| t.hour)).ok_or(no_times)?;

    Ok(TimeStats {
        month,
        day_of_week,
        hour,
    })
}

//! Filter trips by the weekday they started on.

use crate::traits::Filter;
use anyhow::Result;
use trip_loader::{DayOfWeek, TripRecord};

/// Keeps trips whose derived `day_of_week` equals the selected day's
/// 0-based index (Monday = 0).
pub struct DayOfWeekFilter {
    day: DayOfWeek,
}

impl DayOfWeekFilter {
    pub fn new(day: DayOfWeek) -> Self {
        Self { day }
    }
}

impl Filter for DayOfWeekFilter {
    fn name(&self) -> &str {
        "DayOfWeekFilter"
    }

    fn apply<'a>(&self, trips: Vec<&'a TripRecord>) -> Result<Vec<&'a TripRecord>> {
        let wanted = self.day.index();
        Ok(trips
            .into_iter()
            .filter(|trip| trip.day_of_week == Some(wanted))
            .collect())
    }
}

/// Apply an optional day selection; `None` ("all") keeps every trip.
pub fn apply_day_filter<'a>(trips: Vec<&'a TripRecord>, day: Option<DayOfWeek>) -> Result<Vec<&'a TripRecord>> {
    match day {
        Some(day) => DayOfWeekFilter::new(day).apply(trips),
        None => Ok(trips),
    }
}

//! Filter trips by the month they started in.

use crate::traits::Filter;
use anyhow::Result;
use trip_loader::{Month, TripRecord};

/// Keeps trips whose derived `month` equals the selected month's number.
///
/// Trips with an unparseable start time have no month and never match.
pub struct MonthFilter {
    month: Month,
}

impl MonthFilter {
    pub fn new(month: Month) -> Self {
        Self { month }
    }
}

impl Filter for MonthFilter {
    fn name(&self) -> &str {
        "MonthFilter"
    }

    fn apply<'a>(&self, trips: Vec<&'a TripRecord>) -> Result<Vec<&'a TripRecord>> {
        let wanted = self.month.number();
        Ok(trips
            .into_iter()
            .filter(|trip| trip.month == Some(wanted))
            .collect())
    }
}

/// Apply an optional month selection; `None` ("all") keeps every trip.
pub fn apply_month_filter<'a>(trips: Vec<&'a TripRecord>, month: Option<Month>) -> Result<Vec<&'a TripRecord>> {
    match month {
        Some(month) => MonthFilter::new(month).apply(trips),
        None => Ok(trips),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::trip_in;

    #[test]
    fn test_month_filter_keeps_only_matching_month() {
        let trips: Vec<TripRecord> = (1..=6)
            .flat_map(|m| (0..3).map(move |h| trip_in(m, 0, h)))
            .collect();
        let refs: Vec<&TripRecord> = trips.iter().collect();

        let march = Month::from_name("march").unwrap();
        let filtered = MonthFilter::new(march).apply(refs).unwrap();

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|t| t.month == Some(3)));
    }

    #[test]
    fn test_unparsed_start_time_never_matches() {
        let mut trip = trip_in(3, 0, 9);
        trip.month = None;

        let filtered = MonthFilter::new(Month::March).apply(vec![&trip]).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_all_months_is_a_no_op() {
        let trips = vec![trip_in(1, 0, 0), trip_in(6, 2, 0)];
        let refs: Vec<&TripRecord> = trips.iter().collect();

        let filtered = apply_month_filter(refs, None).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}

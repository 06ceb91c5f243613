//! Total and mean trip duration.

use super::{ensure_rows, Result, StatsError};
use crate::view::TripView;
use trip_loader::seconds_to_duration_label;

/// Whole seconds; fractional accumulations are truncated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    pub total_seconds: u64,
    pub mean_seconds: u64,
}

impl DurationStats {
    pub fn total_label(&self) -> String {
        seconds_to_duration_label(self.total_seconds)
    }

    pub fn mean_label(&self) -> String {
        seconds_to_duration_label(self.mean_seconds)
    }
}

/// Sum and mean of `Trip Duration` over trips that have one.
pub fn duration_stats(view: &TripView<'_>) -> Result<DurationStats> {
    ensure_rows(view)?;

    let (sum, count) = view
        .iter()
        .filter_map(|t| t.trip_duration)
        .fold((0.0_f64, 0usize), |(sum, count), d| (sum + d, count + 1));

    if count == 0 {
        return Err(StatsError::NoValues { column: "Trip Duration" });
    }

    Ok(DurationStats {
        total_seconds: sum as u64,
        mean_seconds: (sum / count as f64) as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::trip_between;
    use trip_loader::{City, ColumnSet, TripRecord, TripTable};

    fn lasting(seconds: Option<f64>) -> TripRecord {
        TripRecord {
            trip_duration: seconds,
            ..trip_between("A", "B")
        }
    }

    #[test]
    fn test_sum_and_mean_truncate() {
        let table = TripTable::new(
            City::Washington,
            vec![lasting(Some(100.6)), lasting(Some(200.7)), lasting(None), lasting(Some(3600.0))],
            ColumnSet::default(),
        );
        let stats = duration_stats(&TripView::all(&table)).unwrap();

        // 3901.3 seconds across 3 trips
        assert_eq!(stats.total_seconds, 3901);
        assert_eq!(stats.mean_seconds, 1300);
        assert_eq!(stats.total_label(), "1 hours, 5 minutes, 1 seconds");
        assert_eq!(stats.mean_label(), "21 minutes, 40 seconds");
    }

    #[test]
    fn test_empty_view() {
        let table = TripTable::new(City::Chicago, vec![lasting(Some(1.0))], ColumnSet::default());
        let view = TripView::new(&table, Vec::new());

        assert_eq!(duration_stats(&view), Err(StatsError::NoMatchingRides));
    }

    #[test]
    fn test_no_durations() {
        let table = TripTable::new(City::Chicago, vec![lasting(None)], ColumnSet::default());

        assert_eq!(
            duration_stats(&TripView::all(&table)),
            Err(StatsError::NoValues { column: "Trip Duration" })
        );
    }
}

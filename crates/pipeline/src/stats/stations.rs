//! Most popular stations and trip.

use super::{ensure_rows, mode, Result, StatsError};
use crate::view::TripView;

/// A station and how many filtered trips used it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub station: String,
    pub trips: usize,
}

/// An ordered origin/destination pair and how many trips took it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripPairCount {
    pub start_station: String,
    pub end_station: String,
    pub trips: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: StationCount,
    pub end: StationCount,
    /// Direction matters: A→B and B→A are different trips
    pub trip: TripPairCount,
    pub filtered_rides: usize,
}

pub fn station_stats(view: &TripView<'_>) -> Result<StationStats> {
    ensure_rows(view)?;

    // Blank station cells are missing values, not a station
    let (start, start_trips) = mode(view.iter().filter_map(|t| named(&t.start_station)))
        .ok_or(StatsError::NoValues { column: "Start Station" })?;
    let (end, end_trips) = mode(view.iter().filter_map(|t| named(&t.end_station)))
        .ok_or(StatsError::NoValues { column: "End Station" })?;
    let ((pair_start, pair_end), pair_trips) = mode(
        view.iter()
            .filter_map(|t| Some((named(&t.start_station)?, named(&t.end_station)?))),
    )
    .ok_or(StatsError::NoValues { column: "Start Station" })?;

    Ok(StationStats {
        start: StationCount {
            station: start.to_string(),
            trips: start_trips,
        },
        end: StationCount {
            station: end.to_string(),
            trips: end_trips,
        },
        trip: TripPairCount {
            start_station: pair_start.to_string(),
            end_station: pair_end.to_string(),
            trips: pair_trips,
        },
        filtered_rides: view.len(),
    })
}

fn named(station: &str) -> Option<&str> {
    let station = station.trim();
    (!station.is_empty()).then_some(station)
}

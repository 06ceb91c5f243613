//! Descriptive statistics over a filtered view.
//!
//! Each group is computed by its own function, reads the view only, and can
//! run in any order:
//! - `time_stats`: most common month, weekday and start hour
//! - `station_stats`: most common start station, end station and trip
//! - `duration_stats`: total and mean trip duration
//! - `user_stats`: user type, gender and birth year breakdowns
//!
//! ## Ties
//! When several values share the highest count, the lowest value wins
//! (alphabetical for stations, numeric for months/days/hours/years).
//! Frequency tables list ties in the same ascending order.
//!
//! Every function fails with `StatsError::NoMatchingRides` on an empty view.

pub mod counting;
pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

pub use counting::{mode, value_counts};
pub use duration::{duration_stats, DurationStats};
pub use stations::{station_stats, StationCount, StationStats, TripPairCount};
pub use time::{time_stats, TimeStats};
pub use users::{user_stats, BirthYearStats, UserStats};

use crate::view::TripView;
use thiserror::Error;

/// Why a statistic could not be computed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The filters left no trips to describe
    #[error("No rides match this filter combination")]
    NoMatchingRides,

    /// Trips matched, but none of them has a usable value in this column
    #[error("No usable values in column '{column}'")]
    NoValues { column: &'static str },
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Reject empty views before any mode/min/max is taken
pub(crate) fn ensure_rows(view: &TripView<'_>) -> Result<()> {
    if view.is_empty() {
        Err(StatsError::NoMatchingRides)
    } else {
        Ok(())
    }
}

//! Core domain types for the bikeshare datasets.
//!
//! - `City` names the three fixed datasets and their backing files
//! - `TripRecord` is one row plus the fields derived from its start time
//! - `TripTable` owns every record of one city and never changes after load
//! - `FilterSelection` is what the user picks at the start of each cycle

use crate::calendar::{DayOfWeek, Month};
use chrono::NaiveDateTime;
use std::fmt;

// =============================================================================
// City
// =============================================================================

/// One of the cities with a trip dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities, in the order they are offered to the user
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// File name of the city's dataset inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Trip Record
// =============================================================================

/// A single bikeshare trip.
///
/// `month`, `day_of_week` and `hour` are derived from `start_time` at load
/// time. They are `None` whenever the raw start time could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Start time exactly as it appeared in the file
    pub start_time_raw: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: String,
    /// Seconds; some datasets carry fractional values
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,

    // Only Chicago and New York City have these columns
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // Derived fields
    pub month: Option<u32>,
    /// 0 = Monday … 6 = Sunday
    pub day_of_week: Option<u32>,
    pub hour: Option<u32>,
}

// =============================================================================
// Trip Table
// =============================================================================

/// Which optional columns the source file carried
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSet {
    pub gender: bool,
    pub birth_year: bool,
}

/// Every trip of one city, in file order.
///
/// Filtering borrows from the table and never mutates it, so a table can be
/// summarised against its `initial_row_count` after any number of filters.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub(crate) city: City,
    pub(crate) records: Vec<TripRecord>,
    pub(crate) columns: ColumnSet,
}

impl TripTable {
    /// Build a table from already-parsed records
    pub fn new(city: City, records: Vec<TripRecord>, columns: ColumnSet) -> Self {
        Self {
            city,
            records,
            columns,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    /// Number of rows before any filter is applied
    pub fn initial_row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Filter Selection
// =============================================================================

/// The user's choice for one query cycle. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<DayOfWeek>,
}

impl FilterSelection {
    pub fn new(city: City, month: Option<Month>, day: Option<DayOfWeek>) -> Self {
        Self { city, month, day }
    }

    /// Month filter as shown to the user ("all" when unfiltered)
    pub fn month_label(&self) -> &'static str {
        self.month.map(Month::name).unwrap_or("all")
    }

    /// Day filter as shown to the user ("all" when unfiltered)
    pub fn day_label(&self) -> &'static str {
        self.day.map(DayOfWeek::name).unwrap_or("all")
    }
}

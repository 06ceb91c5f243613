//! # Trip Loader Crate
//!
//! This crate loads the bikeshare trip datasets (Chicago, New York City,
//! Washington) into memory.
//!
//! ## Main Components
//!
//! - **calendar**: month/weekday tables, 12-hour and duration labels
//! - **types**: Core domain types (City, TripRecord, TripTable, FilterSelection)
//! - **parser**: Parse city CSV files into `TripRecord`s
//! - **loader**: Open a city's file and build a `TripTable`
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use trip_loader::{City, TripTable};
//! use std::path::Path;
//!
//! let table = TripTable::load(Path::new("data"), City::Chicago)?;
//! println!("{} has {} trips", table.city(), table.initial_row_count());
//! ```

// Public modules
pub mod calendar;
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use calendar::{
    day_label, hour_to_12h_label, month_label, seconds_to_duration_label, DayOfWeek, Month,
    MONTH_NAMES, WEEKDAY_NAMES,
};
pub use error::{DataLoadError, Result};
pub use types::{City, ColumnSet, FilterSelection, TripRecord, TripTable};

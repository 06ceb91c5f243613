//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a city's trips.

use anyhow::Result;
use trip_loader::TripRecord;

/// Core trait for filtering trips.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters work on borrowed records, so the loaded `TripTable` is never
///   copied or changed by filtering
/// - Each filter takes ownership of the current selection and returns the
///   rows it keeps, in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of trips.
    ///
    /// # Arguments
    /// * `trips` - The trips to filter (takes ownership of the references)
    ///
    /// # Returns
    /// * `Ok(Vec<&TripRecord>)` - The trips that passed
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, trips: Vec<&'a TripRecord>) -> Result<Vec<&'a TripRecord>>;
}

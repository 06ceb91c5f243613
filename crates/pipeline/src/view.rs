//! Filtered views over a `TripTable` and their summary counts.

use std::collections::HashSet;
use trip_loader::{ColumnSet, TripRecord, TripTable};

/// The trips of one table that survived filtering, in table order.
#[derive(Debug, Clone)]
pub struct TripView<'a> {
    table: &'a TripTable,
    rows: Vec<&'a TripRecord>,
}

/// Row and station counts describing a filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub initial_row_count: usize,
    pub filtered_row_count: usize,
    pub start_stations: usize,
    pub end_stations: usize,
}

impl<'a> TripView<'a> {
    pub fn new(table: &'a TripTable, rows: Vec<&'a TripRecord>) -> Self {
        Self { table, rows }
    }

    /// An unfiltered view over every trip in the table
    pub fn all(table: &'a TripTable) -> Self {
        Self::new(table, table.records().iter().collect())
    }

    pub fn rows(&self) -> &[&'a TripRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Optional columns of the underlying table
    pub fn columns(&self) -> ColumnSet {
        self.table.columns()
    }

    pub fn initial_row_count(&self) -> usize {
        self.table.initial_row_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.rows.iter().copied()
    }

    /// Count rows and distinct start/end stations
    pub fn summarize(&self) -> FilterSummary {
        let start_stations: HashSet<&str> = self.iter().map(|t| t.start_station.as_str()).collect();
        let end_stations: HashSet<&str> = self.iter().map(|t| t.end_station.as_str()).collect();

        FilterSummary {
            initial_row_count: self.initial_row_count(),
            filtered_row_count: self.len(),
            start_stations: start_stations.len(),
            end_stations: end_stations.len(),
        }
    }
}

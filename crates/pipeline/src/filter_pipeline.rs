//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, and turns a loaded
//! `TripTable` into a filtered `TripView`.

use crate::filters::{DayOfWeekFilter, MonthFilter};
use crate::traits::Filter;
use crate::view::TripView;
use anyhow::Result;
use trip_loader::{FilterSelection, TripRecord, TripTable};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MonthFilter::new(Month::March))
///     .add_filter(DayOfWeekFilter::new(DayOfWeek::Monday));
///
/// let view = pipeline.apply(&table)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a user's selection.
    ///
    /// "all" selections add no filter at all. The month filter runs first.
    pub fn for_selection(selection: &FilterSelection) -> Self {
        let mut pipeline = Self::new();
        if let Some(month) = selection.month {
            pipeline = pipeline.add_filter(MonthFilter::new(month));
        }
        if let Some(day) = selection.day {
            pipeline = pipeline.add_filter(DayOfWeekFilter::new(day));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the table's trips.
    ///
    /// The table is only borrowed; the returned view references its rows.
    pub fn apply<'a>(&self, table: &'a TripTable) -> Result<TripView<'a>> {
        let mut current: Vec<&'a TripRecord> = table.records().iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(TripView::new(table, current))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::trip_in;
    use trip_loader::{City, ColumnSet, DayOfWeek, Month};

    fn table() -> TripTable {
        TripTable::new(
            City::Chicago,
            vec![
                trip_in(3, 0, 8),
                trip_in(3, 1, 9),
                trip_in(4, 0, 10),
                trip_in(3, 0, 11),
            ],
            ColumnSet::default(),
        )
    }

    #[test]
    fn test_empty_pipeline() {
        let table = table();
        let view = FilterPipeline::new().apply(&table).unwrap();

        assert_eq!(view.len(), 4);
        assert_eq!(view.initial_row_count(), 4);
    }

    #[test]
    fn test_all_selection_adds_no_filters() {
        let selection = FilterSelection::new(City::Chicago, None, None);
        assert!(FilterPipeline::for_selection(&selection).is_empty());
    }

    #[test]
    fn test_month_and_day_compose() {
        let table = table();
        let selection = FilterSelection::new(City::Chicago, Some(Month::March), Some(DayOfWeek::Monday));

        let pipeline = FilterPipeline::for_selection(&selection);
        assert_eq!(pipeline.len(), 2);

        let view = pipeline.apply(&table).unwrap();
        let hours: Vec<Option<u32>> = view.rows().iter().map(|t| t.hour).collect();
        assert_eq!(hours, [Some(8), Some(11)]);
        // the table itself is untouched
        assert_eq!(table.records().len(), 4);
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let table = table();

        let month_first = FilterPipeline::new()
            .add_filter(MonthFilter::new(Month::March))
            .add_filter(DayOfWeekFilter::new(DayOfWeek::Monday))
            .apply(&table)
            .unwrap();
        let day_first = FilterPipeline::new()
            .add_filter(DayOfWeekFilter::new(DayOfWeek::Monday))
            .add_filter(MonthFilter::new(Month::March))
            .apply(&table)
            .unwrap();

        assert_eq!(month_first.rows(), day_first.rows());
    }
}

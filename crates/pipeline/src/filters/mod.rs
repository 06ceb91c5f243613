//! Filter implementations for the trip pipeline.
//!
//! This module contains the concrete filters that can be composed into a
//! FilterPipeline. Both are equality predicates on disjoint derived fields,
//! so the order they run in does not change the result.

pub mod day_of_week;
pub mod month;

// Re-export for convenience
pub use day_of_week::{apply_day_filter, DayOfWeekFilter};
pub use month::{apply_month_filter, MonthFilter};

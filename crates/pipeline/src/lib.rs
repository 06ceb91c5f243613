//! Filtering and statistics over bikeshare trips.
//!
//! This crate provides:
//! - Filter trait and the month / day-of-week filters
//! - FilterPipeline for composing filters into a `TripView`
//! - Summary counts and descriptive statistics over a view
//! - RawDataPager for stepping through raw rows
//!
//! ## Architecture
//! A query cycle processes one city's `TripTable` in stages:
//! 1. Filters narrow the table to the selected month and weekday
//! 2. The view is summarised (row and station counts)
//! 3. Four independent statistic passes describe the view
//! 4. The pager hands out raw rows five at a time
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{stats, FilterPipeline};
//!
//! let view = FilterPipeline::for_selection(&selection).apply(&table)?;
//! let summary = view.summarize();
//! let times = stats::time_stats(&view)?;
//! let stations = stats::station_stats(&view)?;
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod view;
pub mod stats;
pub mod pager;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use view::{FilterSummary, TripView};
pub use stats::StatsError;
pub use pager::{RawDataPager, PAGE_SIZE};

//! User type, gender and birth year breakdowns.
//!
//! Gender and Birth Year only exist for some cities. Their statistics are
//! `None` when the table has no such column, never an error.

use super::{ensure_rows, mode, value_counts, Result};
use crate::view::TripView;

/// Earliest, most recent and most common year of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Every user type with its count, most common first
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city has no Gender column
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the city has no Birth Year column, or no filtered trip
    /// has a birth year
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_stats(view: &TripView<'_>) -> Result<UserStats> {
    ensure_rows(view)?;
    let columns = view.columns();

    let user_types = owned(value_counts(view.iter().filter_map(|t| t.user_type.as_deref())));

    let genders = columns
        .gender
        .then(|| owned(value_counts(view.iter().filter_map(|t| t.gender.as_deref()))));

    let birth_years = if columns.birth_year {
        let stats = birth_year_stats(view);
        if stats.is_none() {
            tracing::debug!("Birth Year column present but empty for this filter");
        }
        stats
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_stats(view: &TripView<'_>) -> Option<BirthYearStats> {
    let years: Vec<i32> = view.iter().filter_map(|t| t.birth_year).collect();

    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?.0,
    })
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

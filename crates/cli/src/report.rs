//! Rendering of summaries, statistics and raw rows.
//!
//! Every section ends with a right-aligned processing-time line and a
//! separator, so the output reads as a sequence of framed blocks.

use colored::Colorize;
use pipeline::stats::{BirthYearStats, DurationStats, StationStats, TimeStats, UserStats};
use pipeline::FilterSummary;
use std::io::{self, Write};
use std::time::Duration;
use trip_loader::{ColumnSet, FilterSelection, TripRecord};

/// Width of separator lines and the timing column
pub const LINE_WIDTH: usize = 100;

pub fn separator(out: &mut impl Write, ch: char) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(LINE_WIDTH))
}

/// "[This took N seconds]" right-aligned, then a separator
pub fn section_footer(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    let took = format!("[This took {:.3} seconds]", elapsed.as_secs_f64());
    writeln!(out, "{:>width$}", took, width = LINE_WIDTH)?;
    separator(out, '=')
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    separator(out, '=')?;
    writeln!(out, "\n  {}\n", "Hello! Let's explore some US bikeshare data!".bold().blue())
}

pub fn write_summary(
    out: &mut impl Write,
    selection: &FilterSelection,
    summary: &FilterSummary,
) -> io::Result<()> {
    writeln!(out, "  Processing statistics for:      {}", selection.city.to_string().bold())?;
    writeln!(
        out,
        "    Filters (month, day):         {}, {}",
        selection.month_label(),
        selection.day_label()
    )?;
    writeln!(out, "    Total rides in dataset:       {}", summary.initial_row_count)?;
    writeln!(out, "    Rides in filtered set:        {}", summary.filtered_row_count)?;
    writeln!(out, "    Number of start stations:     {}", summary.start_stations)?;
    writeln!(out, "    Number of end stations:       {}", summary.end_stations)
}

pub fn write_time_stats(out: &mut impl Write, stats: &TimeStats) -> io::Result<()> {
    writeln!(out, "  {}", "Most Frequent Times of Travel...".bold())?;
    writeln!(out, "    Month:                {}", stats.month_label())?;
    writeln!(out, "    Day of the week:      {}", stats.day_label())?;
    writeln!(out, "    Start hour:           {}", stats.hour_label())
}

pub fn write_station_stats(out: &mut impl Write, stats: &StationStats) -> io::Result<()> {
    let rides = stats.filtered_rides;
    writeln!(out, "  {}", "Most Popular Stations and Trip...".bold())?;
    writeln!(out, "    Start station:        {}", stats.start.station)?;
    writeln!(out, "{:30}{}/{} trips", "", stats.start.trips, rides)?;
    writeln!(out, "    End station:          {}", stats.end.station)?;
    writeln!(out, "{:30}{}/{} trips", "", stats.end.trips, rides)?;
    writeln!(
        out,
        "    Frequent trip:        {}, {}",
        stats.trip.start_station, stats.trip.end_station
    )?;
    writeln!(out, "{:30}{} trips", "", stats.trip.trips)
}

pub fn write_duration_stats(out: &mut impl Write, stats: &DurationStats) -> io::Result<()> {
    writeln!(out, "  {}", "Trip Duration...".bold())?;
    writeln!(out, "    Total travel time:    {} seconds", stats.total_seconds)?;
    writeln!(out, "{:29}{}", "", stats.total_label())?;
    writeln!(out, "    Mean travel time:     {} seconds", stats.mean_seconds)?;
    writeln!(out, "{:29}{}", "", stats.mean_label())
}

pub fn write_user_stats(out: &mut impl Write, stats: &UserStats) -> io::Result<()> {
    writeln!(out, "  {}", "User Stats...".bold())?;
    for (user_type, count) in &stats.user_types {
        writeln!(out, "    {:21} {}", format!("{}:", user_type), count)?;
    }
    if let Some(genders) = &stats.genders {
        for (gender, count) in genders {
            writeln!(out, "    {:21} {}", format!("{}:", gender), count)?;
        }
    }
    if let Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    }) = stats.birth_years
    {
        writeln!(out, "    Year of Birth...")?;
        writeln!(out, "        Earliest:         {}", earliest)?;
        writeln!(out, "        Most recent:      {}", most_recent)?;
        writeln!(out, "        Most common:      {}", most_common)?;
    }
    Ok(())
}

/// One line per trip, every loaded column, `starting_at` is the row number
/// of the first trip in `rows`
pub fn write_raw_rows(
    out: &mut impl Write,
    rows: &[&TripRecord],
    columns: ColumnSet,
    starting_at: usize,
) -> io::Result<()> {
    let mut header = vec![
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if columns.gender {
        header.push("Gender");
    }
    if columns.birth_year {
        header.push("Birth Year");
    }
    writeln!(out, "{:>6} | {}", "#", header.join(" | ").dimmed())?;

    for (offset, trip) in rows.iter().enumerate() {
        let mut fields = vec![
            trip.start_time_raw.clone(),
            trip.end_time.clone(),
            trip.trip_duration.map(|d| d.to_string()).unwrap_or_default(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if columns.gender {
            fields.push(trip.gender.clone().unwrap_or_default());
        }
        if columns.birth_year {
            fields.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        writeln!(out, "{:>6} | {}", starting_at + offset, fields.join(" | "))?;
    }
    Ok(())
}

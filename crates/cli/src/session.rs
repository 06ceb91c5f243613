//! The query cycle: select, load, filter, describe, page, restart.

use crate::console::{parse_yes_no, Console};
use crate::report;
use anyhow::Result;
use colored::Colorize;
use pipeline::stats::{self, StatsError};
use pipeline::{FilterPipeline, RawDataPager, TripView};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use trip_loader::TripTable;

pub struct Session<R, W> {
    console: Console<R, W>,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, data_dir: PathBuf) -> Self {
        Self { console, data_dir }
    }

    /// Run cycles until the user declines to restart
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.run_cycle()?;
            if !self.console.confirm("\n    Would you like to restart? Enter yes or no  ")? {
                return Ok(());
            }
        }
    }

    /// One full cycle. Load failures and empty results end the cycle early
    /// with a message; only console I/O errors propagate.
    pub fn run_cycle(&mut self) -> Result<()> {
        report::banner(self.console.output())?;
        let selection = self.console.select_filters()?;
        tracing::info!(
            "Selected {} (month: {}, day: {})",
            selection.city,
            selection.month_label(),
            selection.day_label()
        );

        let start = Instant::now();
        let table = match TripTable::load(&self.data_dir, selection.city) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Load failed: {}", e);
                let out = self.console.output();
                writeln!(out, "\n  {} {}", "Could not load trip data:".red().bold(), e)?;
                report::separator(out, '=')?;
                return Ok(());
            }
        };
        let view = FilterPipeline::for_selection(&selection).apply(&table)?;

        let out = self.console.output();
        report::write_summary(out, &selection, &view.summarize())?;
        report::section_footer(out, start.elapsed())?;

        if view.is_empty() {
            writeln!(out, "  {}", StatsError::NoMatchingRides.to_string().yellow())?;
            report::separator(out, '=')?;
            return Ok(());
        }

        self.write_stats(&view)?;
        self.page_raw_rows(&view)
    }

    /// The four statistic passes, each in its own timed section
    fn write_stats(&mut self, view: &TripView<'_>) -> Result<()> {
        let out = self.console.output();

        let start = Instant::now();
        match stats::time_stats(view) {
            Ok(s) => report::write_time_stats(out, &s)?,
            Err(e) => writeln!(out, "  {}", e.to_string().yellow())?,
        }
        report::section_footer(out, start.elapsed())?;

        let start = Instant::now();
        match stats::station_stats(view) {
            Ok(s) => report::write_station_stats(out, &s)?,
            Err(e) => writeln!(out, "  {}", e.to_string().yellow())?,
        }
        report::section_footer(out, start.elapsed())?;

        let start = Instant::now();
        match stats::duration_stats(view) {
            Ok(s) => report::write_duration_stats(out, &s)?,
            Err(e) => writeln!(out, "  {}", e.to_string().yellow())?,
        }
        report::section_footer(out, start.elapsed())?;

        let start = Instant::now();
        match stats::user_stats(view) {
            Ok(s) => report::write_user_stats(out, &s)?,
            Err(e) => writeln!(out, "  {}", e.to_string().yellow())?,
        }
        report::section_footer(out, start.elapsed())?;

        Ok(())
    }

    /// First window after a yes/no (re-asked until valid), then one more
    /// window per "yes"
    fn page_raw_rows(&mut self, view: &TripView<'_>) -> Result<()> {
        let mut pager = RawDataPager::new(view.rows());

        let wants_rows = self.console.ask_until(
            "\n    Would you like to view raw data? Enter yes or no  ",
            Some("Pls try again! Valid inputs only:  yes or no"),
            parse_yes_no,
        )?;

        if wants_rows {
            loop {
                let first_row = pager.cursor();
                let page = pager.next_window();
                report::write_raw_rows(self.console.output(), page, view.columns(), first_row)?;

                if pager.is_exhausted() {
                    writeln!(self.console.output(), "    {}", "No more rows.".dimmed())?;
                    break;
                }
                if !self.console.confirm("    Do you wish to view more raw data?  ")? {
                    break;
                }
            }
        }

        report::separator(self.console.output(), '*')?;
        Ok(())
    }
}

//! Paging through the raw rows of a filtered view.

use trip_loader::TripRecord;

/// Rows shown per page
pub const PAGE_SIZE: usize = 5;

/// The page of `rows` starting at `cursor`.
///
/// Near the end the page is shorter, and past the end it is empty.
pub fn window<T>(rows: &[T], cursor: usize) -> &[T] {
    let start = cursor.min(rows.len());
    let end = cursor.saturating_add(PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// Hands out successive `PAGE_SIZE` windows, starting at the first row
#[derive(Debug, Clone)]
pub struct RawDataPager<'v, 'a> {
    rows: &'v [&'a TripRecord],
    cursor: usize,
}

impl<'v, 'a> RawDataPager<'v, 'a> {
    pub fn new(rows: &'v [&'a TripRecord]) -> Self {
        Self { rows, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every row has been handed out
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.rows.len()
    }

    /// Return the page at the cursor and advance the cursor by one page
    pub fn next_window(&mut self) -> &'v [&'a TripRecord] {
        let page = window(self.rows, self.cursor);
        self.cursor = self.cursor.saturating_add(PAGE_SIZE);
        page
    }
}

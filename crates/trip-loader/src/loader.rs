//! Loading a city's trip file into a `TripTable`.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{City, TripTable};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

impl TripTable {
    /// Load one city's dataset from `data_dir`.
    ///
    /// A missing file is reported as `FileNotFound`; any other failure to
    /// open or read it surfaces as an I/O or parse error. Nothing is retried.
    pub fn load(data_dir: &Path, city: City) -> Result<Self> {
        let path = data_dir.join(city.file_name());
        let start = Instant::now();

        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let (records, columns) = parser::parse_trips(BufReader::new(file), city.file_name())?;

        tracing::info!(
            "Loaded {} trips for {} from {} in {:?}",
            records.len(),
            city,
            path.display(),
            start.elapsed()
        );

        Ok(TripTable::new(city, records, columns))
    }
}

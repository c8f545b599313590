//! CSV storage for parsed records
//!
//! The intermediate table has exactly three columns, `Name`,
//! `Date and Time` and `Status`. Reading matches headers loosely (BOM, case
//! and whitespace are ignored) but requires all three.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use thiserror::Error;

use crate::domain::RawRecord;

/// Column headers in write order
pub const COLUMNS: [&str; 3] = ["Name", "Date and Time", "Status"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabularError {
    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: &'static str },
}

/// Store for one bucket's records in CSV format
pub struct TabularStore {
    path: PathBuf,
}

impl TabularStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes all records (full rewrite), header first, in input order
    pub fn write_all(&self, records: &[RawRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create table: {}", self.path.display()))?;
        let mut writer = WriterBuilder::new().from_writer(file);

        writer
            .write_record(COLUMNS)
            .context("Failed to write table header")?;
        for record in records {
            writer
                .write_record([&record.name, &record.date_and_time, &record.status])
                .with_context(|| format!("Failed to write row for {}", record.name))?;
        }

        writer.flush().context("Failed to flush table")?;
        Ok(())
    }

    /// Reads all records.
    ///
    /// Fails with [`TabularError::MissingColumn`] when a required header is
    /// absent. Short rows read missing cells as empty strings.
    pub fn read_all(&self) -> Result<Vec<RawRecord>> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open table: {}", self.path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header: {}", self.path.display()))?
            .clone();
        let columns = self.locate_columns(&headers)?;

        let mut records = Vec::new();
        for (row_num, row) in reader.records().enumerate() {
            let row = row.with_context(|| {
                format!("Failed to read row {} of {}", row_num + 2, self.path.display())
            })?;
            let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();
            records.push(RawRecord::new(cell(columns[0]), cell(columns[1]), cell(columns[2])));
        }

        Ok(records)
    }

    /// Maps each required column to its position in the header row
    fn locate_columns(&self, headers: &StringRecord) -> Result<[usize; 3], TabularError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut positions = [0usize; 3];

        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            let wanted = normalize_header(column);
            *slot = normalized
                .iter()
                .position(|h| *h == wanted)
                .ok_or_else(|| TabularError::MissingColumn {
                    file: self.file_name(),
                    column,
                })?;
        }

        Ok(positions)
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Strips BOMs, collapses whitespace and lowercases
fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

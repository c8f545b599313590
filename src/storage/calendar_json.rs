//! JSON storage for the generated calendar
//!
//! Writes go to a temp file first and are renamed into place, so readers
//! never see a half-written document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::CalendarOutput;

/// Store for the calendar document
pub struct CalendarStore {
    path: PathBuf,
}

impl CalendarStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the document
    pub fn read(&self) -> Result<CalendarOutput> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open calendar: {}", self.path.display()))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse calendar: {}", self.path.display()))
    }

    /// Writes the document as pretty-printed JSON (full rewrite)
    pub fn write(&self, output: &CalendarOutput) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = File::create(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
            let mut writer = BufWriter::new(file);

            serde_json::to_writer_pretty(&mut writer, output)
                .context("Failed to serialize calendar")?;
            writeln!(writer).context("Failed to write calendar")?;
            writer.flush().context("Failed to flush calendar")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

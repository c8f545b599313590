//! Raw paste files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A raw export pasted into a text file
pub struct RawStore {
    path: PathBuf,
}

impl RawStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the paste as UTF-8 with any leading byte-order mark removed
    pub fn read_text(&self) -> Result<String> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read raw paste: {}", self.path.display()))?;

        Ok(match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}

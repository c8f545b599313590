//! Project layout
//!
//! Resolves the conventional input and output locations for a project root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::{Config, CONFIG_FILE};
use crate::domain::Bucket;

/// A directory holding pastes, tables and the generated calendar
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens the project at the given root, loading `timeoff.toml` if present
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::for_project(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the nearest project above the current directory, or the current
    /// directory itself when no `timeoff.toml` is found
    pub fn open_current() -> Result<Self> {
        let root = match Config::find_project_root() {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };

        Self::open(root)
    }

    /// Scaffolds a project: config file plus data and output directories.
    ///
    /// Existing files are left untouched.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create directory: {}", root.display()))?;

        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, Config::default_file_contents())
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let project = Self::open(root)?;

        let data_dir = project.data_dir();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        if let Some(parent) = project.output_path().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }

        Ok(project)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(&self.config.data_dir)
    }

    /// Raw paste for a bucket, e.g. `data/raw_foh.txt`
    pub fn raw_path(&self, bucket: Bucket) -> PathBuf {
        self.data_dir().join(format!("raw_{}.txt", bucket))
    }

    /// Intermediate table for a bucket, e.g. `data/timeoff_foh.csv`
    pub fn tabular_path(&self, bucket: Bucket) -> PathBuf {
        self.data_dir().join(format!("timeoff_{}.csv", bucket))
    }

    /// Generated calendar document
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.output)
    }
}

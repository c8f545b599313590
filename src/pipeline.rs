//! # Pipeline stages
//!
//! The two batch steps, each a full recompute over the project's files:
//!
//! 1. [`parse_raw`] - every `raw_{bucket}.txt` → `timeoff_{bucket}.csv`
//! 2. [`extract_calendar`] - every `timeoff_{bucket}.csv` → `calendar.json`
//!
//! The stages share no in-memory state; the CSV files are the handoff.
//! Missing inputs skip a bucket with a warning. A table with a broken header
//! aborts extraction outright.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, warn};

use crate::domain::{extract_records, Bucket, Calendar, RawParseError, RawParser};
use crate::storage::{CalendarStore, Project, RawStore, TabularStore};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No raw files found in {}", .0.display())]
    NoRawInputs(PathBuf),
}

/// What happened to one bucket during a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BucketOutcome {
    /// Input read; `rows` records written or used
    Processed { rows: usize },
    /// Raw paste had no header row; an empty table was written
    NoHeader,
    /// Input file absent
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketReport {
    pub bucket: Bucket,
    pub input: PathBuf,
    #[serde(flatten)]
    pub outcome: BucketOutcome,
}

/// Result of the raw → tabular stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub buckets: Vec<BucketReport>,
}

/// Result of the tabular → calendar stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractReport {
    pub buckets: Vec<BucketReport>,
    pub output: PathBuf,
    pub dates: usize,
    pub generated_at: DateTime<Utc>,
}

/// Parses every bucket's raw paste into its intermediate table.
///
/// Fails with [`PipelineError::NoRawInputs`] when no bucket has a raw file.
pub fn parse_raw(project: &Project) -> Result<ParseReport> {
    let parser = RawParser::new(project.config().header_marker.clone());
    let mut buckets = Vec::with_capacity(Bucket::ALL.len());

    for bucket in Bucket::ALL {
        let span = info_span!("parse", bucket = %bucket);
        let _enter = span.enter();

        let raw = RawStore::new(project.raw_path(bucket));
        let table = TabularStore::new(project.tabular_path(bucket));

        if !raw.exists() {
            warn!(path = %raw.path().display(), "Raw paste not found, skipping");
            buckets.push(BucketReport {
                bucket,
                input: raw.path().to_path_buf(),
                outcome: BucketOutcome::Skipped,
            });
            continue;
        }

        let text = raw.read_text()?;
        let (records, outcome) = match parser.parse(&text) {
            Ok(records) => {
                let rows = records.len();
                (records, BucketOutcome::Processed { rows })
            }
            Err(RawParseError::MissingHeader(marker)) => {
                warn!(path = %raw.path().display(), marker = ?marker, "No header row found");
                (Vec::new(), BucketOutcome::NoHeader)
            }
        };

        table.write_all(&records)?;
        info!(rows = records.len(), path = %table.path().display(), "Wrote table");

        buckets.push(BucketReport {
            bucket,
            input: raw.path().to_path_buf(),
            outcome,
        });
    }

    if buckets.iter().all(|b| b.outcome == BucketOutcome::Skipped) {
        return Err(PipelineError::NoRawInputs(project.data_dir()).into());
    }

    Ok(ParseReport { buckets })
}

/// Builds the calendar from every bucket's table and writes the document.
///
/// Buckets without a table are skipped, so a run with no tables at all
/// still writes an empty calendar.
pub fn extract_calendar(project: &Project, generated_at: DateTime<Utc>) -> Result<ExtractReport> {
    let mut calendar = Calendar::new();
    let mut buckets = Vec::with_capacity(Bucket::ALL.len());

    for bucket in Bucket::ALL {
        let span = info_span!("extract", bucket = %bucket);
        let _enter = span.enter();

        let table = TabularStore::new(project.tabular_path(bucket));
        if !table.exists() {
            warn!(path = %table.path().display(), "Table not found, skipping");
            buckets.push(BucketReport {
                bucket,
                input: table.path().to_path_buf(),
                outcome: BucketOutcome::Skipped,
            });
            continue;
        }

        let records = table.read_all()?;
        let rows = extract_records(&records, bucket, &mut calendar);
        info!(records = records.len(), used = rows, "Extracted dates");

        buckets.push(BucketReport {
            bucket,
            input: table.path().to_path_buf(),
            outcome: BucketOutcome::Processed { rows },
        });
    }

    let store = CalendarStore::new(project.output_path());
    store.write(&calendar.to_output(generated_at))?;
    info!(dates = calendar.len(), path = %store.path().display(), "Wrote calendar");

    Ok(ExtractReport {
        buckets,
        output: store.path().to_path_buf(),
        dates: calendar.len(),
        generated_at,
    })
}

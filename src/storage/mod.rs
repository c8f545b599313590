//! # Storage Layer
//!
//! Flat-file inputs and outputs for the two pipeline stages.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Raw pastes | Tab-separated text, UTF-8 (BOM allowed) | `data/raw_{bucket}.txt` |
//! | Parsed records | CSV, 3 columns | `data/timeoff_{bucket}.csv` |
//! | Calendar | Pretty JSON | `docs/calendar.json` |
//! | Config | TOML | `timeoff.toml` |
//!
//! All locations are relative to the project root and can be moved through
//! [`Config`].
//!
//! ## Key Types
//!
//! - [`Project`] - Resolves paths for a project root
//! - [`RawStore`] - Reads raw pastes
//! - [`TabularStore`] - Read/write parsed records as CSV
//! - [`CalendarStore`] - Read/write the calendar document

mod config;
mod project;
mod raw;
mod tabular;
mod calendar_json;

pub use config::{Config, ConfigError, CONFIG_FILE};
pub use project::Project;
pub use raw::RawStore;
pub use tabular::{TabularError, TabularStore, COLUMNS};
pub use calendar_json::CalendarStore;

//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init` | Create `timeoff.toml`, `data/` and `docs/` |
//! | `parse` | Raw pastes → CSV tables |
//! | `extract` | CSV tables → `calendar.json` |
//! | `build` | `parse` then `extract` |
//! | `show` | Inspect the generated calendar |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logging on stderr:
//! ```bash
//! timeoff --verbose build
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod logging;
mod output;
mod pipeline_cmd;
mod show;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use show::{BucketFilter, LoadLevel};

//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::output::{Output, OutputFormat};
use super::show::{self, BucketFilter};
use super::{logging, pipeline_cmd};
use crate::storage::Project;

#[derive(Parser)]
#[command(name = "timeoff")]
#[command(author, version, about = "Build a time-off calendar from pasted scheduling exports")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory with timeoff.toml)
    #[arg(long, global = true, env = "TIMEOFF_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create timeoff.toml and the data/output directories
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Parse raw pastes into CSV tables
    Parse,

    /// Build calendar.json from the CSV tables
    Extract,

    /// Run parse, then extract
    Build,

    /// Show who is off, for one date or as a per-date summary
    Show {
        /// Date to show (YYYY-MM-DD); omit for a summary of every date
        date: Option<NaiveDate>,

        /// Department to show
        #[arg(long, value_enum, default_value_t = BucketFilter::All)]
        bucket: BucketFilter,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let output = Output::new(cli.format);

    debug!("timeoff starting");

    if let Commands::Init { path } = &cli.command {
        let project = Project::init(path)?;
        output.success(&format!(
            "Initialized time-off project at {}",
            project.root().display()
        ));
        return Ok(());
    }

    let project = match &cli.root {
        Some(root) => Project::open(root)?,
        None => Project::open_current()?,
    };
    debug!(root = %project.root().display(), "Opened project");

    match cli.command {
        Commands::Init { .. } => {}
        Commands::Parse => pipeline_cmd::parse(&project, &output)?,
        Commands::Extract => pipeline_cmd::extract(&project, &output)?,
        Commands::Build => {
            pipeline_cmd::parse(&project, &output)?;
            pipeline_cmd::extract(&project, &output)?;
        }
        Commands::Show { date, bucket } => show::run(&project, &output, date, bucket)?,
    }

    debug!("Command completed successfully");
    Ok(())
}

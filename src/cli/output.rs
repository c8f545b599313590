//! Output formatting for CLI commands

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Routes command results to stdout in the selected format.
///
/// Diagnostics go through `tracing` to stderr instead.
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a one-line outcome; JSON mode wraps it as `{"success": true, ...}`
    pub fn success(&self, message: &str) {
        if self.is_json() {
            println!("{}", serde_json::json!({ "success": true, "message": message }));
        } else {
            println!("{}", message);
        }
    }

    /// Prints an indented `LABEL: message` line (text only)
    pub fn detail(&self, label: &str, message: &str) {
        if !self.is_json() {
            println!("  {}: {}", label, message);
        }
    }

    /// Prints a tab-separated table row (text only)
    pub fn row(&self, columns: &[&str]) {
        if !self.is_json() {
            println!("{}", columns.join("\t"));
        }
    }

    /// Prints a serializable value as compact JSON, or pretty JSON in text mode
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = if self.is_json() {
            serde_json::to_string(data)
        } else {
            serde_json::to_string_pretty(data)
        };
        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "Failed to render output"),
        }
    }
}

//! Record and classification types shared by both pipeline stages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Department partition a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Front of house
    Foh,
    /// Back of house
    Boh,
}

impl Bucket {
    /// Every bucket, in processing order
    pub const ALL: [Bucket; 2] = [Bucket::Foh, Bucket::Boh];

    /// Returns the lowercase key used in file names and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Foh => "foh",
            Bucket::Boh => "boh",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foh" => Ok(Bucket::Foh),
            "boh" => Ok(Bucket::Boh),
            other => Err(format!("Unknown bucket '{}' (expected foh or boh)", other)),
        }
    }
}

/// Normalized approval status of a time-off request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Approved,
    Pending,
}

impl Status {
    /// Normalizes free-form status text.
    ///
    /// Matching is a case-insensitive substring test, with "approved" taking
    /// precedence over "pending". Anything else (e.g. "Denied") is `None`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        if lowered.contains("approved") {
            Some(Status::Approved)
        } else if lowered.contains("pending") {
            Some(Status::Pending)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Approved => "approved",
            Status::Pending => "pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One time-off request recovered from a raw paste.
///
/// All three fields hold the source text as-is (trimmed); interpretation
/// happens later during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub date_and_time: String,
    pub status: String,
}

impl RawRecord {
    pub fn new(
        name: impl Into<String>,
        date_and_time: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_and_time: date_and_time.into(),
            status: status.into(),
        }
    }
}

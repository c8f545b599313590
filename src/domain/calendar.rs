//! Calendar accumulator and aggregated output
//!
//! The accumulator is an explicit date → day → department → status → name set
//! hierarchy. Aggregation turns it into the published shape: per date an `all`
//! view (union of both departments) plus one view per department.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Bucket, Status};

/// Output key format for dates
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Unique names per approval status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSets {
    pub approved: BTreeSet<String>,
    pub pending: BTreeSet<String>,
}

impl StatusSets {
    pub fn get(&self, status: Status) -> &BTreeSet<String> {
        match status {
            Status::Approved => &self.approved,
            Status::Pending => &self.pending,
        }
    }

    pub fn get_mut(&mut self, status: Status) -> &mut BTreeSet<String> {
        match status {
            Status::Approved => &mut self.approved,
            Status::Pending => &mut self.pending,
        }
    }

    /// Number of names across both statuses (a name in both counts twice)
    pub fn count(&self) -> usize {
        self.approved.len() + self.pending.len()
    }

    /// Set union with another department's sets
    pub fn union(&self, other: &StatusSets) -> StatusSets {
        StatusSets {
            approved: self.approved.union(&other.approved).cloned().collect(),
            pending: self.pending.union(&other.pending).cloned().collect(),
        }
    }
}

/// Everyone off on one date, split by department
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarDay {
    pub foh: StatusSets,
    pub boh: StatusSets,
}

impl CalendarDay {
    pub fn bucket(&self, bucket: Bucket) -> &StatusSets {
        match bucket {
            Bucket::Foh => &self.foh,
            Bucket::Boh => &self.boh,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut StatusSets {
        match bucket {
            Bucket::Foh => &mut self.foh,
            Bucket::Boh => &mut self.boh,
        }
    }
}

/// Mutable accumulator filled by extraction, one per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    days: BTreeMap<NaiveDate, CalendarDay>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name to a date. Returns false if it was already present.
    pub fn add(&mut self, date: NaiveDate, bucket: Bucket, status: Status, name: &str) -> bool {
        self.days
            .entry(date)
            .or_default()
            .bucket_mut(bucket)
            .get_mut(status)
            .insert(name.to_string())
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.get(&date)
    }

    /// Iterates days in chronological order
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &CalendarDay)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Builds the published per-date views
    pub fn aggregate(&self) -> BTreeMap<String, DayView> {
        self.days
            .iter()
            .map(|(date, day)| (date.format(DATE_KEY_FORMAT).to_string(), DayView::from(day)))
            .collect()
    }

    /// Wraps the aggregated views with a generation timestamp
    pub fn to_output(&self, generated_at: DateTime<Utc>) -> CalendarOutput {
        CalendarOutput {
            generated_at,
            data: self.aggregate(),
        }
    }
}

/// Sorted names and their count for one view of a day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub approved: Vec<String>,
    pub pending: Vec<String>,
    pub count: usize,
}

impl From<&StatusSets> for StatusView {
    fn from(sets: &StatusSets) -> Self {
        Self {
            approved: sets.approved.iter().cloned().collect(),
            pending: sets.pending.iter().cloned().collect(),
            count: sets.count(),
        }
    }
}

/// Published shape of one date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayView {
    pub all: StatusView,
    pub foh: StatusView,
    pub boh: StatusView,
}

impl DayView {
    /// Returns the combined view or a single department's view
    pub fn view(&self, bucket: Option<Bucket>) -> &StatusView {
        match bucket {
            None => &self.all,
            Some(Bucket::Foh) => &self.foh,
            Some(Bucket::Boh) => &self.boh,
        }
    }
}

impl From<&CalendarDay> for DayView {
    fn from(day: &CalendarDay) -> Self {
        Self {
            all: StatusView::from(&day.foh.union(&day.boh)),
            foh: StatusView::from(&day.foh),
            boh: StatusView::from(&day.boh),
        }
    }
}

/// The document written to `calendar.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOutput {
    pub generated_at: DateTime<Utc>,
    pub data: BTreeMap<String, DayView>,
}

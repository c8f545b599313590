//! Calendar viewing commands

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use chrono::NaiveDate;

use super::output::Output;
use crate::domain::{Bucket, DayView, DATE_KEY_FORMAT};
use crate::storage::{CalendarStore, Project};

/// Department filter for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BucketFilter {
    /// Both departments combined
    #[default]
    All,
    Foh,
    Boh,
}

impl BucketFilter {
    /// The single bucket selected, or `None` for the combined view
    pub fn bucket(self) -> Option<Bucket> {
        match self {
            BucketFilter::All => None,
            BucketFilter::Foh => Some(Bucket::Foh),
            BucketFilter::Boh => Some(Bucket::Boh),
        }
    }
}

/// How busy a date is, by number of people off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadLevel {
    Empty,
    Low,
    Medium,
    High,
    Critical,
}

impl LoadLevel {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => LoadLevel::Empty,
            1..=2 => LoadLevel::Low,
            3..=4 => LoadLevel::Medium,
            5..=6 => LoadLevel::High,
            _ => LoadLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadLevel::Empty => "none",
            LoadLevel::Low => "low",
            LoadLevel::Medium => "medium",
            LoadLevel::High => "high",
            LoadLevel::Critical => "critical",
        }
    }
}

pub fn run(
    project: &Project,
    output: &Output,
    date: Option<NaiveDate>,
    filter: BucketFilter,
) -> Result<()> {
    let bucket = filter.bucket();
    let store = CalendarStore::new(project.output_path());
    if !store.exists() {
        bail!(
            "No calendar at {}. Run 'timeoff build' first.",
            store.path().display()
        );
    }
    let calendar = store.read()?;

    match date {
        Some(date) => {
            let key = date.format(DATE_KEY_FORMAT).to_string();
            let empty = DayView::default();
            let day = calendar.data.get(&key).unwrap_or(&empty);
            show_day(output, &key, day, bucket);
        }
        None => show_summary(output, &calendar.data, bucket),
    }

    Ok(())
}

fn show_day(output: &Output, key: &str, day: &DayView, bucket: Option<Bucket>) {
    let view = day.view(bucket);
    let level = LoadLevel::from_count(view.count);

    if output.is_json() {
        output.data(&serde_json::json!({
            "date": key,
            "bucket": bucket.map(|b| b.as_str()).unwrap_or("all"),
            "approved": view.approved,
            "pending": view.pending,
            "count": view.count,
            "level": level.as_str(),
        }));
        return;
    }

    println!("{} ({} off, {})", key, view.count, level.as_str());
    for (label, names) in [("Approved", &view.approved), ("Pending", &view.pending)] {
        println!("{}:", label);
        if names.is_empty() {
            println!("  (none)");
        }
        for name in names {
            println!("  {}", name);
        }
    }
}

fn show_summary(output: &Output, data: &BTreeMap<String, DayView>, bucket: Option<Bucket>) {
    if output.is_json() {
        let items: Vec<_> = data
            .iter()
            .map(|(key, day)| {
                let view = day.view(bucket);
                serde_json::json!({
                    "date": key,
                    "approved": view.approved.len(),
                    "pending": view.pending.len(),
                    "count": view.count,
                    "level": LoadLevel::from_count(view.count).as_str(),
                })
            })
            .collect();
        output.data(&items);
        return;
    }

    if data.is_empty() {
        println!("Calendar is empty");
        return;
    }

    output.row(&["DATE", "APPROVED", "PENDING", "COUNT", "LEVEL"]);
    for (key, day) in data {
        let view = day.view(bucket);
        let approved = view.approved.len().to_string();
        let pending = view.pending.len().to_string();
        let count = view.count.to_string();
        output.row(&[
            key.as_str(),
            approved.as_str(),
            pending.as_str(),
            count.as_str(),
            LoadLevel::from_count(view.count).as_str(),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_filter_maps_to_view() {
        assert_eq!(BucketFilter::All.bucket(), None);
        assert_eq!(BucketFilter::Foh.bucket(), Some(Bucket::Foh));
        assert_eq!(BucketFilter::Boh.bucket(), Some(Bucket::Boh));
        assert_eq!(BucketFilter::default(), BucketFilter::All);
    }

    #[test]
    fn bucket_filter_accepts_all() {
        use clap::ValueEnum;

        assert_eq!(BucketFilter::from_str("all", true), Ok(BucketFilter::All));
        assert_eq!(BucketFilter::from_str("BOH", true), Ok(BucketFilter::Boh));
        assert!(BucketFilter::from_str("kitchen", true).is_err());
    }

    #[test]
    fn load_level_tiers() {
        assert_eq!(LoadLevel::from_count(0), LoadLevel::Empty);
        assert_eq!(LoadLevel::from_count(1), LoadLevel::Low);
        assert_eq!(LoadLevel::from_count(2), LoadLevel::Low);
        assert_eq!(LoadLevel::from_count(3), LoadLevel::Medium);
        assert_eq!(LoadLevel::from_count(4), LoadLevel::Medium);
        assert_eq!(LoadLevel::from_count(6), LoadLevel::High);
        assert_eq!(LoadLevel::from_count(7), LoadLevel::Critical);
        assert_eq!(LoadLevel::from_count(40), LoadLevel::Critical);
    }
}

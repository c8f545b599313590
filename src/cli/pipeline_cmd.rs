//! Pipeline CLI commands

use anyhow::Result;
use chrono::Utc;

use super::output::Output;
use crate::pipeline::{self, BucketOutcome, BucketReport};
use crate::storage::Project;

/// Raw pastes → CSV tables
pub fn parse(project: &Project, output: &Output) -> Result<()> {
    let report = pipeline::parse_raw(project)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "stage": "parse", "report": report }));
        return Ok(());
    }

    for bucket in &report.buckets {
        print_bucket(output, bucket, "written");
    }
    Ok(())
}

/// CSV tables → calendar.json
pub fn extract(project: &Project, output: &Output) -> Result<()> {
    let report = pipeline::extract_calendar(project, Utc::now())?;

    if output.is_json() {
        output.data(&serde_json::json!({ "stage": "extract", "report": report }));
        return Ok(());
    }

    for bucket in &report.buckets {
        print_bucket(output, bucket, "used");
    }
    output.success(&format!(
        "Wrote {} ({} dates)",
        report.output.display(),
        report.dates
    ));
    Ok(())
}

fn print_bucket(output: &Output, report: &BucketReport, verb: &str) {
    let label = report.bucket.as_str().to_uppercase();
    output.detail(&label, &bucket_message(report, verb));
}

fn bucket_message(report: &BucketReport, verb: &str) -> String {
    let file = report
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match report.outcome {
        BucketOutcome::Processed { rows } => format!("{} rows {} from {}", rows, verb, file),
        BucketOutcome::NoHeader => format!("no header row in {}, wrote empty table", file),
        BucketOutcome::Skipped => format!("{} not found, skipped", file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bucket;

    fn report(outcome: BucketOutcome) -> BucketReport {
        BucketReport {
            bucket: Bucket::Boh,
            input: "data/raw_boh.txt".into(),
            outcome,
        }
    }

    #[test]
    fn bucket_messages() {
        assert_eq!(
            bucket_message(&report(BucketOutcome::Processed { rows: 3 }), "written"),
            "3 rows written from raw_boh.txt"
        );
        assert_eq!(
            bucket_message(&report(BucketOutcome::NoHeader), "written"),
            "no header row in raw_boh.txt, wrote empty table"
        );
        assert_eq!(
            bucket_message(&report(BucketOutcome::Skipped), "used"),
            "raw_boh.txt not found, skipped"
        );
    }
}

//! Date extraction from tabular records
//!
//! Turns each record's free-form "Date and Time" text into the calendar days
//! it occupies and files the name under those days.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::calendar::Calendar;
use super::patterns::{find_dates, parse_mdyy, DateError, MIDNIGHT_END_RE, THROUGH_RE};
use super::record::{Bucket, RawRecord, Status};

/// Calendar days covered by a date-and-time text.
///
/// Returns an empty list when the text has no usable date. A through-range
/// is half-open: its last date is not occupied. Only the first and last dates
/// of a range are considered.
pub fn occupied_days(date_and_time: &str) -> Result<Vec<NaiveDate>, DateError> {
    let mut fragments = find_dates(date_and_time);

    if MIDNIGHT_END_RE.is_match(date_and_time) {
        fragments.pop();
    }

    let (Some(first), Some(last)) = (fragments.first(), fragments.last()) else {
        return Ok(Vec::new());
    };

    if THROUGH_RE.is_match(date_and_time) && fragments.len() >= 2 {
        let start = parse_mdyy(first)?;
        let end = parse_mdyy(last)?;
        Ok(days_between(start, end).collect())
    } else {
        Ok(vec![parse_mdyy(first)?])
    }
}

/// Days in `[start, end)`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.checked_add_days(Days::new(1)))
        .take_while(move |d| *d < end)
}

/// Files each record of a bucket into the calendar.
///
/// Returns how many records contributed at least one day. Records with an
/// unrecognized status, an empty name or no usable date are skipped.
pub fn extract_records<'a, I>(records: I, bucket: Bucket, calendar: &mut Calendar) -> usize
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut used = 0;

    for record in records {
        let name = record.name.trim();
        let Some(status) = Status::normalize(&record.status) else {
            debug!(
                bucket = %bucket,
                status = %record.status,
                "Skipped record with unrecognized status"
            );
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let days = match occupied_days(&record.date_and_time) {
            Ok(days) => days,
            Err(e) => {
                debug!(
                    bucket = %bucket,
                    employee = name,
                    error = %e,
                    "Skipped record with bad date"
                );
                continue;
            }
        };
        if days.is_empty() {
            debug!(
                bucket = %bucket,
                employee = name,
                text = %record.date_and_time,
                "Skipped record without dates"
            );
            continue;
        }

        for day in days {
            calendar.add(day, bucket, status, name);
        }
        used += 1;
    }

    used
}

//! Raw paste parser
//!
//! Scheduling exports pasted as text have no record delimiters. A request is
//! recovered from three kinds of lines that follow the header row:
//!
//! | Line | Shape | Effect |
//! |------|-------|--------|
//! | Name | no date, fewer than 6 tab fields | becomes the current name |
//! | Date prefix | contains `M/D/YY`, fewer than 6 fields | held for the next data row |
//! | Data row | 6+ tab fields | emits a record for the current name |
//!
//! Anything that does not fit is dropped without error.

use thiserror::Error;
use tracing::debug;

use super::patterns::contains_date;
use super::record::RawRecord;

/// Marker identifying the export's column header row
pub const DEFAULT_HEADER_MARKER: &str = "Date and Time\tType\t";

/// Minimum tab-separated fields for a line to count as a data row
const DATA_ROW_MIN_FIELDS: usize = 6;
const DATE_COLUMN: usize = 0;
const STATUS_COLUMN: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RawParseError {
    #[error("No header row containing {0:?} found")]
    MissingHeader(String),
}

/// Mutable state carried from one line to the next
#[derive(Debug, Default)]
struct ParseState {
    current_name: Option<String>,
    date_prefix: Option<String>,
}

impl ParseState {
    fn set_name(&mut self, name: &str) {
        self.current_name = Some(name.to_string());
        self.date_prefix = None;
    }

    fn set_prefix(&mut self, prefix: &str) {
        self.date_prefix = Some(prefix.to_string());
    }

    /// Builds a record from a data row, consuming any pending prefix
    fn take_row(&mut self, fields: &[&str]) -> Option<RawRecord> {
        let Some(name) = self.current_name.as_ref() else {
            self.date_prefix = None;
            return None;
        };

        let mut date_and_time = fields[DATE_COLUMN].trim().to_string();
        let status = fields[STATUS_COLUMN].trim();

        if let Some(prefix) = self.date_prefix.take() {
            date_and_time = format!("{} {}", prefix, date_and_time);
        }

        if date_and_time.trim().is_empty() || status.is_empty() {
            return None;
        }

        Some(RawRecord::new(name.clone(), date_and_time, status))
    }
}

/// Parser for one raw export
#[derive(Debug, Clone)]
pub struct RawParser {
    header_marker: String,
}

impl Default for RawParser {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_MARKER)
    }
}

impl RawParser {
    /// Creates a parser that starts reading after the first line containing `header_marker`
    pub fn new(header_marker: impl Into<String>) -> Self {
        Self {
            header_marker: header_marker.into(),
        }
    }

    pub fn header_marker(&self) -> &str {
        &self.header_marker
    }

    /// Parses raw text into records, in encounter order.
    ///
    /// A leading byte-order mark is ignored and CRLF line endings are accepted.
    pub fn parse(&self, text: &str) -> Result<Vec<RawRecord>, RawParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let header_idx = lines
            .iter()
            .position(|line| line.contains(self.header_marker.as_str()))
            .ok_or_else(|| RawParseError::MissingHeader(self.header_marker.clone()))?;

        let mut state = ParseState::default();
        let mut records = Vec::new();

        for (offset, line) in lines[header_idx + 1..].iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();

            if fields.len() >= DATA_ROW_MIN_FIELDS {
                match state.take_row(&fields) {
                    Some(record) => records.push(record),
                    None => debug!(line = header_idx + 2 + offset, "Dropped data row"),
                }
                continue;
            }

            let candidate = line.trim();
            if contains_date(candidate) {
                state.set_prefix(candidate);
            } else {
                state.set_name(candidate);
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date and Time\tType\tHours\tSubmitted\tBy\tStatus";

    fn row(date: &str, status: &str) -> String {
        format!("{}\tVacation\t8.00\t2/1/26\tManager\t{}", date, status)
    }

    fn paste(lines: &[&str]) -> String {
        let mut text = String::from("Time Off Requests\nStore 01234\n");
        text.push_str(HEADER);
        text.push('\n');
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    #[test]
    fn missing_header() {
        let parser = RawParser::default();
        let err = parser.parse("Jane Doe\nsomething else\n").unwrap_err();
        assert_eq!(err, RawParseError::MissingHeader(DEFAULT_HEADER_MARKER.to_string()));
    }

    #[test]
    fn single_request() {
        let text = paste(&["Jane Doe", &row("Mon 3/16/26 All Day", "Approved")]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new("Jane Doe", "Mon 3/16/26 All Day", "Approved")]
        );
    }

    #[test]
    fn continuation_line_is_stitched() {
        let text = paste(&[
            "Jane Doe",
            "Mon 3/16/26 Through",
            &row("Fri 3/20/26", "Approved"),
        ]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new(
                "Jane Doe",
                "Mon 3/16/26 Through Fri 3/20/26",
                "Approved"
            )]
        );
    }

    #[test]
    fn name_applies_to_following_rows() {
        let text = paste(&[
            "Jane Doe",
            &row("Mon 3/16/26", "Approved"),
            &row("Tue 3/17/26", "Pending"),
            "",
            "John Smith",
            &row("Wed 3/18/26", "Approved"),
        ]);
        let records = RawParser::default().parse(&text).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Jane Doe", "John Smith"]);
    }

    #[test]
    fn rows_before_any_name_are_dropped() {
        let text = paste(&[
            "Mon 3/16/26 Through",
            &row("Fri 3/20/26", "Approved"),
            "Jane Doe",
            &row("Tue 3/17/26", "Pending"),
        ]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new("Jane Doe", "Tue 3/17/26", "Pending")]
        );
    }

    #[test]
    fn later_date_line_replaces_pending_prefix() {
        let text = paste(&[
            "Jane Doe",
            "Mon 3/16/26 Through",
            "Tue 3/17/26 Through",
            &row("Fri 3/20/26", "Approved"),
        ]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new(
                "Jane Doe",
                "Tue 3/17/26 Through Fri 3/20/26",
                "Approved"
            )]
        );
    }

    #[test]
    fn name_line_discards_stale_prefix() {
        let text = paste(&[
            "Jane Doe",
            "Mon 3/16/26 Through",
            "John Smith",
            &row("Fri 3/20/26", "Approved"),
        ]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new("John Smith", "Fri 3/20/26", "Approved")]
        );
    }

    #[test]
    fn date_line_is_never_a_name() {
        let text = paste(&["Jane Doe", "3/16/26", &row("3/17/26", "Approved")]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Jane Doe");
        assert_eq!(records[0].date_and_time, "3/16/26 3/17/26");
    }

    #[test]
    fn empty_status_is_dropped() {
        let text = paste(&["Jane Doe", &row("Mon 3/16/26", "  ")]);
        let records = RawParser::default().parse(&text).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_date_is_dropped() {
        let text = paste(&["Jane Doe", &row("", "Approved")]);
        let records = RawParser::default().parse(&text).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn bom_and_crlf_are_tolerated() {
        let text = format!(
            "\u{feff}{}\r\nJane Doe\r\n{}\r\n",
            HEADER,
            row("Mon 3/16/26", "Approved")
        );
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(
            records,
            vec![RawRecord::new("Jane Doe", "Mon 3/16/26", "Approved")]
        );
    }

    #[test]
    fn lines_before_header_are_ignored() {
        let text = format!(
            "Ghost Name\n{}\n{}\nJane Doe\n{}\n",
            row("Mon 3/2/26", "Approved"),
            HEADER,
            row("Mon 3/16/26", "Approved")
        );
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date_and_time, "Mon 3/16/26");
    }

    #[test]
    fn duplicates_are_preserved() {
        let line = row("Mon 3/16/26", "Approved");
        let text = paste(&["Jane Doe", &line, &line]);
        let records = RawParser::default().parse(&text).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn custom_marker() {
        let parser = RawParser::new("When\tKind\t");
        let text = format!("When\tKind\tHours\nJane Doe\n{}\n", row("3/16/26", "Approved"));
        let records = parser.parse(&text).unwrap();
        assert_eq!(records.len(), 1);
    }
}

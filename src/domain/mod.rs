//! Domain models for the time-off calendar
//!
//! Contains the parsing and aggregation logic without any I/O concerns.

mod record;
mod patterns;
mod raw_parser;
mod extract;
mod calendar;

pub use record::{Bucket, RawRecord, Status};
pub use patterns::{contains_date, find_dates, parse_mdyy, DateError};
pub use raw_parser::{RawParseError, RawParser, DEFAULT_HEADER_MARKER};
pub use extract::{days_between, extract_records, occupied_days};
pub use calendar::{
    Calendar, CalendarDay, CalendarOutput, DayView, StatusSets, StatusView, DATE_KEY_FORMAT,
};

//! Time-off calendar builder
//!
//! Converts time-off requests pasted from a scheduling system into a
//! date-indexed calendar. Two batch stages run in sequence: raw pastes are
//! parsed into CSV tables, then the tables are expanded into per-date sets of
//! names by department and approval status.

pub mod domain;
pub mod storage;
pub mod pipeline;
pub mod cli;

pub use domain::{Bucket, Calendar, CalendarOutput, RawParser, RawRecord, Status};

//! timeoff - build a time-off calendar from pasted scheduling exports

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = timeoff_calendar::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

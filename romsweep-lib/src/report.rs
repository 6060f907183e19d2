//! JSON run report.
//!
//! An optional machine-readable record of what a run decided: the options in
//! effect and every group's selection. Written after planning and before
//! execution, so a dry run can hand the would-be moves to other tooling.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::CleanError;
use crate::plan::{CleanOptions, MovePlan, Selection};

#[derive(Debug, Serialize)]
struct Report<'a> {
    rom_dir: &'a Path,
    dest_dir: &'a Path,
    preferences: String,
    dry_run: bool,
    keep_singletons: bool,
    selections: &'a [Selection],
}

/// Write the plan as pretty-printed JSON to `path`.
///
/// The report is an explicitly requested output, so failing to write it is
/// fatal like any other I/O failure.
pub fn write_report(
    path: &Path,
    plan: &MovePlan,
    options: &CleanOptions,
) -> Result<(), CleanError> {
    let report = Report {
        rom_dir: &options.rom_dir,
        dest_dir: &options.dest_dir,
        preferences: options.preferences.to_string(),
        dry_run: options.dry_run,
        keep_singletons: options.keep_singletons,
        selections: &plan.selections,
    };

    let write_err = |source: io::Error| CleanError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let contents = serde_json::to_string_pretty(&report)
        .map_err(|e| write_err(io::Error::from(e)))?;
    fs::write(path, contents).map_err(write_err)
}

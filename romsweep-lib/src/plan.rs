//! Selection planning and move execution.
//!
//! Planning is pure: it walks the title groups and picks at most one winner
//! per group. Execution is the only place files move, and it stops dead at
//! the first failure; files already moved stay where they landed.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use romsweep_core::{PreferenceList, RomFile, find_preferred};

use crate::error::CleanError;
use crate::fsio::Filesystem;
use crate::scanner::RomGroups;

/// Immutable options for one cleanup run, built once by the caller.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Directory being cleaned.
    pub rom_dir: PathBuf,
    /// Where winners are moved.
    pub dest_dir: PathBuf,
    /// Attribute tokens to keep, most preferred first.
    pub preferences: PreferenceList,
    /// Compute and report selections without touching any file.
    pub dry_run: bool,
    /// Keep a group's only file even when it matches no preference.
    pub keep_singletons: bool,
}

impl CleanOptions {
    /// Options for cleaning `rom_dir`, with the destination defaulted to
    /// `{rom_dir}/moved`, an empty preference list, and dry-run on.
    pub fn new(rom_dir: impl Into<PathBuf>) -> Self {
        let rom_dir = rom_dir.into();
        let dest_dir = default_dest_dir(&rom_dir);
        Self {
            rom_dir,
            dest_dir,
            preferences: PreferenceList::default(),
            dry_run: true,
            keep_singletons: false,
        }
    }

    pub fn dest_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dest_dir = dir.into();
        self
    }

    pub fn preferences(mut self, preferences: PreferenceList) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn keep_singletons(mut self, keep: bool) -> Self {
        self.keep_singletons = keep;
        self
    }
}

/// The default destination directory: `moved/` inside the ROM directory.
pub fn default_dest_dir(rom_dir: &Path) -> PathBuf {
    rom_dir.join("moved")
}

/// One group's outcome: the title and the chosen file, if any.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub base_title: String,
    /// The file to keep, or `None` when no variant matched.
    pub winner: Option<RomFile>,
}

impl fmt::Display for Selection {
    /// The per-group report line: `OK: {title} - found: {filename}` for a
    /// selection, `KO: {title}` for a group with no acceptable variant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.winner {
            Some(winner) => write!(f, "OK: {} - found: {}", self.base_title, winner.filename),
            None => write!(f, "KO: {}", self.base_title),
        }
    }
}

/// The computed plan for one run: every group's selection, sorted by title.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MovePlan {
    pub selections: Vec<Selection>,
}

impl MovePlan {
    /// Groups that got a winner.
    pub fn matched(&self) -> usize {
        self.selections.iter().filter(|s| s.winner.is_some()).count()
    }

    /// Groups where no variant matched any preference.
    pub fn unmatched(&self) -> usize {
        self.selections.len() - self.matched()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// What a real run did.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSummary {
    /// Files moved into the destination directory.
    pub moved: usize,
}

/// Select a winner for every group.
///
/// Pure string work, no filesystem. The singleton override runs after the
/// preference search: with the policy on, a group's only file is kept even
/// when nothing matched.
pub fn plan_moves(groups: &RomGroups, options: &CleanOptions) -> MovePlan {
    let mut selections = Vec::with_capacity(groups.len());

    for (base_title, files) in groups {
        let mut winner = find_preferred(files, &options.preferences);
        if options.keep_singletons && files.len() == 1 {
            winner = files.first();
        }
        selections.push(Selection {
            base_title: base_title.clone(),
            winner: winner.cloned(),
        });
    }

    MovePlan { selections }
}

/// Carry out a plan: create the destination directory, then move each winner
/// into it under its original filename.
///
/// Dry-run options execute nothing. Any failure aborts the run at that point;
/// there is no retry and no rollback.
pub fn execute_moves(
    fs: &dyn Filesystem,
    plan: &MovePlan,
    options: &CleanOptions,
) -> Result<MoveSummary, CleanError> {
    let mut summary = MoveSummary::default();
    if options.dry_run {
        return Ok(summary);
    }

    fs.create_dir_all(&options.dest_dir)
        .map_err(|source| CleanError::CreateDestDir {
            dir: options.dest_dir.clone(),
            source,
        })?;

    for selection in &plan.selections {
        let Some(winner) = &selection.winner else {
            continue;
        };
        let from = options.rom_dir.join(&winner.filename);
        let to = options.dest_dir.join(&winner.filename);
        fs.rename(&from, &to)
            .map_err(|source| CleanError::Rename { from, to, source })?;
        summary.moved += 1;
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "tests/plan_tests.rs"]
mod tests;

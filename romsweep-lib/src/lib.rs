//! Orchestration for ROM set cleanup.
//!
//! The whole run is scan → plan → (report) → execute, single-threaded and
//! fail-fast: any filesystem error aborts the run where it happened. The
//! pure string logic lives in `romsweep-core`; this crate adds the
//! filesystem seam, grouping, selection planning and the move step.

pub mod error;
pub mod fsio;
pub mod plan;
pub mod report;
pub mod scanner;
pub mod settings;

pub use error::CleanError;
pub use fsio::{Filesystem, OsFilesystem};
pub use plan::{
    CleanOptions, MovePlan, MoveSummary, Selection, default_dest_dir, execute_moves, plan_moves,
};
pub use report::write_report;
pub use scanner::{Inventory, RomGroups, scan_groups, scan_inventory};
pub use settings::{DEFAULT_KEEP, resolve_preferences, settings_path};

// Core types the CLI needs travel through this crate.
pub use romsweep_core::{NameError, PreferenceList, RomFile};

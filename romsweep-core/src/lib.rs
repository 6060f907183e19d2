//! Filename-level ROM deduplication logic.
//!
//! Everything in this crate is pure string work: normalizing tag delimiters,
//! extracting attribute tokens, and picking the preferred file out of a group
//! that shares a base title. Directory scanning and file moves live in
//! `romsweep-lib`; nothing here touches the filesystem.

pub mod error;
pub mod matcher;
pub mod name_parser;
pub mod rom;

pub use error::NameError;
pub use matcher::{PreferenceList, find_preferred};
pub use name_parser::{NormalizedName, extract_attributes, normalize_filename};
pub use rom::RomFile;

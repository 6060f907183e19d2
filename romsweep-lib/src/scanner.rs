//! Directory scanner for ROM set cleanup.
//!
//! One flat listing of the ROM directory, parsed into title groups. No
//! recursion: subdirectories are not listed by the [`Filesystem`] trait, and
//! names without a tag region are dropped before grouping.

use std::collections::BTreeMap;
use std::path::Path;

use romsweep_core::{RomFile, extract_attributes, normalize_filename};

use crate::error::CleanError;
use crate::fsio::Filesystem;

/// Files grouped by base title, sorted by title.
///
/// Within a group, records keep the sorted directory-listing order; the
/// matcher's reverse walk relies on it to favor later-listed revisions.
pub type RomGroups = BTreeMap<String, Vec<RomFile>>;

/// Everything one directory listing produced: the title groups plus the
/// names that were dropped as unparseable.
#[derive(Debug, Default)]
pub struct Inventory {
    pub groups: RomGroups,
    /// Names with no usable tag region, in listing order.
    pub skipped: Vec<String>,
}

/// List `rom_dir` and build the title groups.
///
/// A name that fails normalization can never be grouped, so it is recorded
/// as skipped and otherwise invisible to the rest of the run.
pub fn scan_inventory(fs: &dyn Filesystem, rom_dir: &Path) -> Result<Inventory, CleanError> {
    let names = fs
        .read_file_names(rom_dir)
        .map_err(|source| CleanError::ReadDir {
            dir: rom_dir.to_path_buf(),
            source,
        })?;

    let mut inventory = Inventory::default();
    for name in names {
        match normalize_filename(&name) {
            Ok(normalized) => {
                let attributes = extract_attributes(&normalized.filename);
                inventory
                    .groups
                    .entry(normalized.base_title)
                    .or_default()
                    .push(RomFile::new(name, attributes));
            }
            Err(e) => {
                log::debug!("Skipping unparseable name: {e}");
                inventory.skipped.push(name);
            }
        }
    }

    Ok(inventory)
}

/// The groups alone, for callers that do not care about skipped names.
pub fn scan_groups(fs: &dyn Filesystem, rom_dir: &Path) -> Result<RomGroups, CleanError> {
    Ok(scan_inventory(fs, rom_dir)?.groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsio::fake::MemoryFilesystem;

    fn sample_fs() -> MemoryFilesystem {
        MemoryFilesystem::new()
            .with_dir("roms")
            .with_file("roms/FooBar (foo).tst")
            .with_file("roms/FooBar (bar) (oof,baz) (boof 1).tst")
            .with_file("roms/FooBar Foo Edition.tst")
            .with_file("roms/BarFoo (one).tst")
    }

    #[test]
    fn groups_by_base_title() {
        let inventory = scan_inventory(&sample_fs(), Path::new("roms")).unwrap();

        assert_eq!(inventory.groups.len(), 2);
        assert_eq!(inventory.groups["BarFoo"].len(), 1);
        assert_eq!(inventory.groups["FooBar"].len(), 2);
    }

    #[test]
    fn records_carry_original_name_and_attributes() {
        let groups = scan_groups(&sample_fs(), Path::new("roms")).unwrap();

        let barfoo = &groups["BarFoo"][0];
        assert_eq!(barfoo.filename, "BarFoo (one).tst");
        assert_eq!(barfoo.attributes, vec!["one"]);

        let multi = &groups["FooBar"][0];
        assert_eq!(multi.filename, "FooBar (bar) (oof,baz) (boof 1).tst");
        assert_eq!(multi.attributes, vec!["bar", "oof", "baz", "boof1"]);
    }

    #[test]
    fn unparseable_names_are_skipped_not_grouped() {
        let inventory = scan_inventory(&sample_fs(), Path::new("roms")).unwrap();

        assert_eq!(inventory.skipped, vec!["FooBar Foo Edition.tst"]);
        for group in inventory.groups.values() {
            assert!(group.iter().all(|r| r.filename != "FooBar Foo Edition.tst"));
        }
    }

    #[test]
    fn group_order_follows_the_sorted_listing() {
        // listed name order: "(bar)..." sorts before "(foo)" within FooBar
        let groups = scan_groups(&sample_fs(), Path::new("roms")).unwrap();
        let filenames: Vec<&str> = groups["FooBar"]
            .iter()
            .map(|r| r.filename.as_str())
            .collect();
        assert_eq!(
            filenames,
            vec!["FooBar (bar) (oof,baz) (boof 1).tst", "FooBar (foo).tst"]
        );
    }

    #[test]
    fn bracket_names_group_with_paren_names() {
        let fs = MemoryFilesystem::new()
            .with_dir("roms")
            .with_file("roms/Game [USA].bin")
            .with_file("roms/Game (Europe).bin");

        let groups = scan_groups(&fs, Path::new("roms")).unwrap();
        assert_eq!(groups["Game"].len(), 2);
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let fs = MemoryFilesystem::new();
        let err = scan_groups(&fs, Path::new("nowhere")).unwrap_err();
        assert!(matches!(err, CleanError::ReadDir { .. }));
    }
}

//! Settings file: `~/.config/romsweep/settings.toml`.
//!
//! One optional key matters to the cleaner: a standing preference list for
//! collectors who always keep the same regions and want to skip `--keep`.
//!
//! ```toml
//! [cleaner]
//! keep = "fr,europe,usa"
//! ```

use std::path::PathBuf;

use romsweep_core::PreferenceList;

/// Built-in preference default: a rough "favor European dumps, fall back to
/// English-speaking releases" ordering.
pub const DEFAULT_KEEP: &str = "french,france,fr,europe,eur,eu,english,en,eng,uk,world,usa,us";

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romsweep").join("settings.toml")
}

/// Resolve the preference list using a priority chain:
///
/// 1. CLI `--keep` value (if `Some`)
/// 2. Saved `cleaner.keep` in `settings.toml`
/// 3. The built-in default
pub fn resolve_preferences(cli_override: Option<&str>) -> PreferenceList {
    if let Some(raw) = cli_override {
        return PreferenceList::parse(raw);
    }
    if let Some(raw) = load_keep_setting() {
        return PreferenceList::parse(&raw);
    }
    PreferenceList::parse(DEFAULT_KEEP)
}

/// Read `cleaner.keep` from `settings.toml`, if set.
fn load_keep_setting() -> Option<String> {
    let path = settings_path();
    let contents = std::fs::read_to_string(&path).ok()?;
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Ignoring unparseable {}: {e}", path.display());
            return None;
        }
    };
    let keep = doc.get("cleaner")?.get("keep")?.as_str()?;
    if keep.is_empty() {
        None
    } else {
        Some(keep.to_string())
    }
}

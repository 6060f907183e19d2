use serde::{Deserialize, Serialize};

/// A ROM file as seen in the source directory.
///
/// `filename` is the directory-entry name exactly as listed (brackets and
/// all), so later move operations target the real file. `attributes` are the
/// lowercase tokens extracted from its tag regions. Records are built once
/// during the scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomFile {
    /// Original filename, e.g. `"Some Game [USA] (Rev 1).bin"`.
    pub filename: String,
    /// Extracted tag tokens in filename order, e.g. `["usa", "rev1"]`.
    pub attributes: Vec<String>,
}

impl RomFile {
    pub fn new(filename: impl Into<String>, attributes: Vec<String>) -> Self {
        Self {
            filename: filename.into(),
            attributes,
        }
    }

    /// True when this file carries the given attribute token.
    pub fn has_attribute(&self, token: &str) -> bool {
        self.attributes.iter().any(|a| a == token)
    }
}

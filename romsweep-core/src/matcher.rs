//! Preference-driven winner selection within a group of ROM files.

use std::fmt;

use crate::rom::RomFile;

/// Ordered attribute tokens the user wants to keep, most preferred first.
///
/// Built once per run from a comma-separated string and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceList {
    tokens: Vec<String>,
}

impl PreferenceList {
    /// Parse a comma-separated preference string.
    ///
    /// All whitespace is stripped, tokens are folded to lowercase to line up
    /// with extracted attributes, empty tokens are dropped, and order is
    /// preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use romsweep_core::matcher::PreferenceList;
    ///
    /// let prefs = PreferenceList::parse("Europe, fr , usa");
    /// assert_eq!(prefs.tokens(), ["europe", "fr", "usa"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let tokens = stripped
            .to_lowercase()
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// The tokens in priority order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for PreferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(","))
    }
}

/// Pick the record to keep out of one group.
///
/// Preferences are tried in order, and for each token the records are walked
/// in *reverse* scan order. Walking backwards means that when several records
/// carry the same token (say "Game (USA)" and "Game (USA) (Rev 1)"), the one
/// listed later wins, which favors revision releases over the plain dump
/// without comparing version numbers. `None` when nothing matches any token;
/// that is a normal outcome, not an error.
pub fn find_preferred<'a>(
    records: &'a [RomFile],
    preferences: &PreferenceList,
) -> Option<&'a RomFile> {
    for token in preferences.tokens() {
        for rom in records.iter().rev() {
            if rom.has_attribute(token) {
                return Some(rom);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;

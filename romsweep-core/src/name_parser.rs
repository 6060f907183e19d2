//! Parser for region/language tags in ROM filenames.
//!
//! ROM sets name their dumps with the base title first and a run of
//! parenthesized or bracketed tags after it:
//! ```text
//! Game Name (USA) (En,Fr,De) [Rev 1].bin
//! ```
//!
//! Both delimiter styles mean the same thing, so normalization rewrites
//! brackets to parentheses before anything else looks at the name. A name
//! without a tag region cannot be grouped and is rejected as malformed.

use crate::error::NameError;

/// A filename with its tag delimiters canonicalized to parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// The full filename with every `[`/`]` rewritten to `(`/`)`.
    pub filename: String,
    /// Title preceding the first tag, trimmed of surrounding whitespace.
    /// Grouping key for deduplication.
    pub base_title: String,
}

/// Canonicalize bracket styles and split off the base title.
///
/// Fails with [`NameError::MalformedFilename`] when the name has no `(`, or
/// when the last `)` sits at or before the position right after the first
/// `(`; an empty `()` region and a `)` that precedes its `(` both count.
///
/// # Examples
///
/// ```
/// use romsweep_core::name_parser::normalize_filename;
///
/// let name = normalize_filename("filename [EUR] (Rev 1) [beta].tst").unwrap();
/// assert_eq!(name.filename, "filename (EUR) (Rev 1) (beta).tst");
/// assert_eq!(name.base_title, "filename");
///
/// assert!(normalize_filename("filename.tst").is_err());
/// ```
pub fn normalize_filename(filename: &str) -> Result<NormalizedName, NameError> {
    let cleaned: String = filename
        .chars()
        .map(|c| match c {
            '[' => '(',
            ']' => ')',
            other => other,
        })
        .collect();

    let open = match cleaned.find('(') {
        Some(pos) => pos,
        None => return Err(NameError::malformed(cleaned)),
    };
    match cleaned.rfind(')') {
        Some(close) if close > open + 1 => {}
        _ => return Err(NameError::malformed(cleaned)),
    }

    let base_title = cleaned[..open].trim().to_string();

    Ok(NormalizedName {
        filename: cleaned,
        base_title,
    })
}

/// Extract every tag token from a normalized filename, in filename order.
///
/// The name is lowercased and stripped of all whitespace first, so
/// `"( baz , 1 )"` and `"(baz,1)"` extract identically. A tag group is a
/// `(...)` pair whose contents are one or more word-character runs separated
/// by single commas, with nothing else and no nested parentheses. Groups
/// that do not fit that grammar contribute no tokens (but a well-formed
/// group inside a malformed one is still found). Never fails; a name
/// without any well-formed group yields an empty list.
///
/// # Examples
///
/// ```
/// use romsweep_core::name_parser::extract_attributes;
///
/// let attrs = extract_attributes("FooBar (foo) (oof,baz 1).tst");
/// assert_eq!(attrs, vec!["foo", "oof", "baz1"]);
/// ```
pub fn extract_attributes(normalized: &str) -> Vec<String> {
    let folded: Vec<char> = normalized
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut attributes = Vec::new();
    let mut i = 0;

    while i < folded.len() {
        if folded[i] != '(' {
            i += 1;
            continue;
        }
        match scan_tag_body(&folded[i + 1..]) {
            Some(len) => {
                let body: String = folded[i + 1..i + 1 + len].iter().collect();
                attributes.extend(body.split(',').map(str::to_string));
                // past the closing paren
                i += len + 2;
            }
            // a failed group attempt consumes nothing
            None => i += 1,
        }
    }

    attributes
}

// ── Internal scanning ───────────────────────────────────────────────────────

/// Scan a tag body starting just after its `(`.
///
/// Returns the body length when the characters form comma-separated word
/// runs closed by `)`; `None` on an empty run, a stray character, or a
/// missing close.
fn scan_tag_body(rest: &[char]) -> Option<usize> {
    let mut len = 0;
    loop {
        let token_start = len;
        while len < rest.len() && is_word_char(rest[len]) {
            len += 1;
        }
        if len == token_start {
            return None;
        }
        match rest.get(len) {
            Some(')') => return Some(len),
            Some(',') => len += 1,
            _ => return None,
        }
    }
}

/// Word characters inside a tag: ASCII alphanumerics and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "tests/name_parser_tests.rs"]
mod tests;

use thiserror::Error;

/// Errors that can occur while parsing ROM filenames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The filename carries no usable parenthesized tag region, so it cannot
    /// be grouped or matched.
    #[error("no tag region found in \"{0}\"")]
    MalformedFilename(String),
}

impl NameError {
    pub fn malformed(name: impl Into<String>) -> Self {
        Self::MalformedFilename(name.into())
    }
}

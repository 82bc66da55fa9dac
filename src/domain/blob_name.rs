use std::fmt;

const TEXT_EXTENSION: &str = ".txt";

/// Name of a blob inside the configured container. Names are stored
/// verbatim, so segments the object store would refuse are rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobName(String);

impl BlobName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidBlobName> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidBlobName::Empty);
        }
        let bad_segment = trimmed
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
        if bad_segment || trimmed.chars().any(char::is_control) {
            return Err(InvalidBlobName::Malformed(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only plain-text uploads are accepted.
    pub fn is_text_file(&self) -> bool {
        self.0.to_ascii_lowercase().ends_with(TEXT_EXTENSION)
    }
}

impl fmt::Display for BlobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBlobName {
    #[error("blob name is empty")]
    Empty,
    #[error("malformed blob name: {0}")]
    Malformed(String),
}

//! Error types for accordion operations.

use std::path::PathBuf;

/// Result type alias for accordion operations.
pub type Result<T> = std::result::Result<T, AccordionError>;

/// Which collection an out-of-range index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// A section position.
    Section,
    /// An item position within a section.
    Item,
    /// A flat visible-row position.
    Row,
    /// An insertion position (may equal the length).
    Insertion,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Section => "section",
            Self::Item => "item",
            Self::Row => "row",
            Self::Insertion => "insertion position",
        };
        f.write_str(name)
    }
}

/// Errors reported by the model, the projector and the controller.
///
/// A call that returns an error has not modified anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccordionError {
    /// A section with this identifier already exists.
    #[error("section id '{id}' is already in use")]
    DuplicateId { id: String },

    /// An index argument was outside the current bounds.
    #[error("{kind} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
}

impl AccordionError {
    /// Create a duplicate id error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(kind: IndexKind, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }

    /// Returns `true` for [`AccordionError::IndexOutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("Invalid accordion config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize accordion config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

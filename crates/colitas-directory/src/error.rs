//! Error types for loading and querying the directory.
//!
//! [`LoadError`] covers every way the one-time startup load can fail; all
//! of them are fatal. [`QueryError`] is the request-time error and only
//! signals malformed input. A lookup miss is not an error.

use colitas_types::{AnimalId, InvalidId, ShelterId};

/// Errors that can occur while loading the directory data files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A data file could not be read.
    #[error("failed to read {origin}: {source}")]
    Io {
        /// The file that could not be read.
        origin: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A data file is not valid JSON or does not match the record shape.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// The file (or inline source) being parsed.
        origin: String,
        /// The underlying JSON error, including line and column.
        source: serde_json::Error,
    },

    /// A record parsed but failed field validation.
    #[error("invalid record #{index} in {origin}: {source}")]
    Invalid {
        /// The file (or inline source) being validated.
        origin: String,
        /// Zero-based position of the record in the file.
        index: usize,
        /// The failed field checks.
        source: validator::ValidationErrors,
    },

    /// Two shelters share the same ID.
    #[error("duplicate shelter id {id}")]
    DuplicateShelterId {
        /// The repeated shelter ID.
        id: ShelterId,
    },

    /// Two animals of the same shelter share the same ID.
    #[error("duplicate animal id {animal_id} in shelter {shelter_id}")]
    DuplicateAnimalId {
        /// The shelter hosting both animals.
        shelter_id: ShelterId,
        /// The repeated animal ID.
        animal_id: AnimalId,
    },
}

/// Errors returned by the query service for malformed request input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A path parameter is not a well-formed identifier.
    #[error(transparent)]
    InvalidId(#[from] InvalidId),
}

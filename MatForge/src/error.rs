//! Error types for `MatForge`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `MatForge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Material Block Errors ====================
    /// The buffer is too short to hold the offset header.
    #[error(
        "material header truncated: need {needed} bytes at offset {offset}, buffer has {available}"
    )]
    HeaderTooShort {
        /// Where the header was expected to start.
        offset: usize,
        /// Bytes required for the header.
        needed: usize,
        /// Bytes actually available in the buffer.
        available: usize,
    },

    /// A nonzero offset points outside the buffer.
    #[error("{what} offset 0x{offset:X} is outside the buffer ({len} bytes)")]
    OffsetOutOfBounds {
        /// Which structure the offset belongs to.
        what: &'static str,
        /// The resolved absolute offset.
        offset: usize,
        /// Total buffer length.
        len: usize,
    },

    /// A material declares more properties than the configured bound.
    #[error("material {material} has more than {max} properties")]
    TooManyProperties {
        /// Index of the offending material.
        material: usize,
        /// The configured bound.
        max: usize,
    },

    /// A property record declares more values than a parameter vector holds.
    #[error("property '{name}' declares {count} values (max 4)")]
    TooManyPropertyValues {
        /// The property name.
        name: String,
        /// The declared value count.
        count: u32,
    },

    /// A property name in the string block is not valid UTF-8 or is unterminated.
    #[error("invalid property name at string offset 0x{offset:X}")]
    InvalidPropertyName {
        /// Absolute offset of the name.
        offset: usize,
    },

    /// A material holds more textures than its count field can record.
    #[error("material {material} has {count} textures (max 65535)")]
    TooManyTextures {
        /// Index of the offending material.
        material: usize,
        /// Number of textures on the material.
        count: usize,
    },

    /// A property name cannot be stored as a NUL-terminated string.
    #[error("property name {name:?} contains a NUL byte")]
    PropertyNameContainsNul {
        /// The offending name.
        name: String,
    },

    /// A tolerated anomaly was promoted to an error by strict decoding.
    #[error("strict decode rejected material data: {0}")]
    StrictDecode(String),

    // ==================== Material List Errors ====================
    /// A material list is empty or exceeds the per-polygon cap.
    #[error("material list has {count} materials (expected 1-{max})")]
    MaterialCountOutOfRange {
        /// Number of materials supplied.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    // ==================== Catalog / Preset Errors ====================
    /// The parameter is not in the known-parameter catalog.
    #[error("unknown material parameter: {0}")]
    UnknownParameter(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A preset file was not found in the library.
    #[error("preset not found: {path}")]
    PresetNotFound {
        /// The expected preset path.
        path: PathBuf,
    },

    /// No preset library directory could be determined.
    #[error("could not determine preset library directory")]
    PresetLibraryNotFound,

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `MatForge` operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Codec configuration
//!
//! Controls byte order, table bounds and how strictly malformed material data
//! is treated.

/// Default bound on the number of properties in one material
pub const DEFAULT_MAX_PROPERTIES: usize = 128;

/// Byte order of a material block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Preset files
    #[default]
    Little,
    /// Console-native model files
    Big,
}

/// Options for decoding and encoding material blocks.
///
/// # Example
///
/// ```
/// use matforge::formats::nud::{CodecOptions, Endian};
///
/// let options = CodecOptions::new()
///     .with_endian(Endian::Big)
///     .with_max_properties(64)
///     .with_strict(true);
/// assert_eq!(options.endian, Endian::Big);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Byte order of all multi-byte fields
    pub endian: Endian,

    /// Maximum number of properties per material before decoding fails
    pub max_properties: usize,

    /// Reject structural anomalies (texture count mismatches, duplicate or
    /// short properties) instead of logging them as warnings.
    /// Unknown enumeration codes are always accepted.
    pub strict: bool,
}

impl CodecOptions {
    /// Create options with the defaults (little endian, tolerant).
    #[must_use]
    pub fn new() -> Self {
        Self {
            endian: Endian::Little,
            max_properties: DEFAULT_MAX_PROPERTIES,
            strict: false,
        }
    }

    #[must_use]
    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    #[must_use]
    pub fn with_max_properties(mut self, max: usize) -> Self {
        self.max_properties = max;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::new()
    }
}

//! # MatForge
//!
//! A pure-Rust library for reading, editing and writing the materials of
//! NUD models and material presets (`.nmt`).
//!
//! ## Features
//!
//! - **Material codec** - Lossless decoding and encoding of material blocks,
//!   little or big endian
//! - **Editing** - Bounded mutations for textures, properties and material lists
//! - **Presets** - Load, save and apply presets, and browse a preset library
//! - **Parameter catalog** - Labels and ranges for known material properties
//!
//! ## Quick Start
//!
//! ### Reading a Preset
//!
//! ```no_run
//! use matforge::preset::load_preset;
//!
//! let materials = load_preset("metal.nmt")?;
//! for material in &materials {
//!     println!("flags 0x{:08X}, {} textures", material.flags(), material.textures.len());
//! }
//! # Ok::<(), matforge::Error>(())
//! ```
//!
//! ### Editing Materials
//!
//! ```
//! use matforge::prelude::*;
//!
//! let mut material = Material::default();
//! material.add_property("NU_specularParams");
//! material.set_property_value("NU_specularParams", 1, 40.0);
//! material.set_cull_mode_by_label("Cull Outside");
//!
//! let bytes = encode_materials(&[material.clone()], &CodecOptions::default())?;
//! let decoded = decode_materials(&bytes, 0, &CodecOptions::default())?;
//! assert_eq!(decoded.materials, vec![material]);
//! # Ok::<(), matforge::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `matforge` command-line binary

pub mod catalog;
pub mod error;
pub mod formats;
pub mod preset;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::nud::{
        Capabilities, CodecOptions, DecodeWarning, DecodedMaterials, DummyTexture, Endian,
        MatTexture, Material, TextureLayout, TextureSlot, add_default_material,
        decode_materials, encode_materials, remove_material,
    };

    pub use crate::catalog::{MatParam, ParamCatalog};
    pub use crate::preset::{PresetLibrary, apply_preset, load_preset, save_preset};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

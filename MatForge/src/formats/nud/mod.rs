//! NUD material records
//!
//! A NUD polygon carries one or two materials. Each material is a 32-byte
//! header followed by texture records and a linked list of named four-float
//! properties whose names live in a separate string block. The same layout
//! is stored on its own as a material preset (`.nmt`).
//!
//! # Example
//!
//! ```no_run
//! use matforge::formats::nud::{CodecOptions, decode_materials, encode_materials};
//!
//! let data = std::fs::read("metal.nmt")?;
//! let decoded = decode_materials(&data, 0, &CodecOptions::default())?;
//! for warning in &decoded.warnings {
//!     println!("{warning}");
//! }
//! let bytes = encode_materials(&decoded.materials, &CodecOptions::default())?;
//! # Ok::<(), matforge::Error>(())
//! ```

pub mod describe;
mod editor;
pub mod enums;
pub mod header;
pub mod layout;
pub mod material;
pub mod options;
pub mod reader;
pub mod texture;
pub mod writer;

pub use editor::{add_default_material, remove_material};
pub use enums::{DummyTexture, LabelTable};
pub use header::{OffsetHeader, SlotOffset};
pub use layout::{Capabilities, TextureLayout, TextureSlot};
pub use material::{MatTexture, Material, ParamValues};
pub use options::{CodecOptions, Endian};
pub use reader::{DecodeWarning, DecodedMaterials, decode_materials};
pub use texture::{ResolvedTexture, TextureSource, resolve_texture};
pub use writer::{MaterialBlock, encode_material_block, encode_materials};

/// Size of a material header record
pub const MATERIAL_HEADER_SIZE: usize = 32;

/// Size of a texture record
pub const TEXTURE_RECORD_SIZE: usize = 24;

/// Size of a property record before its values
pub const PROPERTY_HEADER_SIZE: usize = 16;

/// Values in a parameter vector
pub const PROPERTY_VALUE_COUNT: usize = 4;

/// Size of a property record as written
pub const PROPERTY_RECORD_SIZE: usize = PROPERTY_HEADER_SIZE + 4 * PROPERTY_VALUE_COUNT;

/// Alignment of each name in the string block
pub const STRING_ALIGNMENT: usize = 16;

/// Alignment of the material block in a preset file
pub const PRESET_ALIGNMENT: usize = 32;

/// Fill byte between the material block and the string block
pub const PADDING_BYTE: u8 = 0xFF;

/// Textures a single material may hold
pub const MAX_TEXTURES: usize = 4;

/// Materials a single polygon may hold
pub const MAX_MATERIALS: usize = 2;

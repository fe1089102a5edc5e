//! File format handlers
//!
//! Only the material side of the NUD model format is handled here; meshes,
//! bones and textures are out of scope.

pub mod nud;

// Re-export main material types
pub use nud::{CodecOptions, DecodeWarning, DecodedMaterials, Endian, MatTexture, Material};
pub use nud::{decode_materials, encode_materials};

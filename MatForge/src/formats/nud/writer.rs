//! Material block writing

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use std::io::Write;

use super::header::{HEADER_SIZE, MATERIAL_SLOTS, OffsetHeader};
use super::material::{MatTexture, Material};
use super::options::{CodecOptions, Endian};
use super::{
    PADDING_BYTE, PRESET_ALIGNMENT, PROPERTY_RECORD_SIZE, PROPERTY_VALUE_COUNT, STRING_ALIGNMENT,
};
use crate::error::{Error, Result};

/// Encoded materials, before they are placed behind an offset header
#[derive(Debug, Clone, Default)]
pub struct MaterialBlock {
    /// Material headers, texture records and property records
    pub data: Vec<u8>,
    /// Property names referenced by the property records
    pub strings: Vec<u8>,
    /// Start of each material within `data`
    pub offsets: Vec<u32>,
}

/// Encode materials into a block plus its string block.
///
/// Property name offsets are relative to the start of `strings`.
///
/// # Errors
/// Returns [`Error::MaterialCountOutOfRange`] for an empty list or one with
/// more materials than the header can address, [`Error::TooManyTextures`]
/// when a texture count does not fit its field, and
/// [`Error::PropertyNameContainsNul`] for a name that would be cut short.
pub fn encode_material_block<B: ByteOrder>(materials: &[Material]) -> Result<MaterialBlock> {
    if materials.is_empty() || materials.len() > MATERIAL_SLOTS {
        return Err(Error::MaterialCountOutOfRange {
            count: materials.len(),
            max: MATERIAL_SLOTS,
        });
    }

    let mut block = MaterialBlock::default();
    for (index, material) in materials.iter().enumerate() {
        block.offsets.push(block.data.len() as u32);
        write_material::<B>(&mut block.data, &mut block.strings, index, material)?;
    }
    Ok(block)
}

/// Encode materials as a preset: offset header, material block padded to a
/// 32-byte boundary, then the string block.
///
/// # Errors
/// Fails for the same inputs as [`encode_material_block`].
pub fn encode_materials(materials: &[Material], options: &CodecOptions) -> Result<Vec<u8>> {
    match options.endian {
        Endian::Little => encode_with::<LittleEndian>(materials),
        Endian::Big => encode_with::<BigEndian>(materials),
    }
}

fn encode_with<B: ByteOrder>(materials: &[Material]) -> Result<Vec<u8>> {
    let block = encode_material_block::<B>(materials)?;

    let string_block = aligned(HEADER_SIZE + block.data.len(), PRESET_ALIGNMENT);
    let header =
        OffsetHeader::from_relative(&block.offsets, HEADER_SIZE as u32, string_block as u32);

    let mut output = Vec::with_capacity(string_block + block.strings.len());
    header.write::<B, _>(&mut output)?;
    output.extend_from_slice(&block.data);
    pad(&mut output, PRESET_ALIGNMENT, PADDING_BYTE);
    output.extend_from_slice(&block.strings);

    tracing::debug!(
        "Encoded {} materials: {} bytes, strings at 0x{:X}",
        materials.len(),
        output.len(),
        string_block
    );

    Ok(output)
}

fn write_material<B: ByteOrder>(
    data: &mut Vec<u8>,
    strings: &mut Vec<u8>,
    index: usize,
    material: &Material,
) -> Result<()> {
    let texture_count =
        u16::try_from(material.textures.len()).map_err(|_| Error::TooManyTextures {
            material: index,
            count: material.textures.len(),
        })?;
    if let Some(name) = material.entries.keys().find(|name| name.contains('\0')) {
        return Err(Error::PropertyNameContainsNul { name: name.clone() });
    }

    data.write_u32::<B>(material.flags())?;
    data.write_u32::<B>(0)?;
    data.write_u16::<B>(material.src_factor)?;
    data.write_u16::<B>(texture_count)?;
    data.write_u16::<B>(material.dst_factor)?;
    data.write_u8(material.alpha_test)?;
    data.write_u8(material.alpha_function)?;
    data.write_u16::<B>(material.ref_alpha)?;
    data.write_u16::<B>(material.cull_mode)?;
    data.write_u32::<B>(material.unknown)?;
    data.write_u32::<B>(0)?;
    data.write_i32::<B>(material.z_buffer_offset)?;

    for texture in &material.textures {
        write_texture::<B>(data, texture)?;
    }

    let last = material.entries.len().saturating_sub(1);
    for (i, (name, values)) in material.entries.iter().enumerate() {
        let next = if i == last { 0 } else { PROPERTY_RECORD_SIZE as u32 };
        data.write_u32::<B>(next)?;
        data.write_u32::<B>(strings.len() as u32)?;
        data.write_u32::<B>(0)?;
        data.write_u32::<B>(PROPERTY_VALUE_COUNT as u32)?;
        for &value in values {
            data.write_f32::<B>(value)?;
        }

        strings.write_all(name.as_bytes())?;
        strings.write_u8(0)?;
        pad(strings, STRING_ALIGNMENT, 0);
    }

    Ok(())
}

fn write_texture<B: ByteOrder>(data: &mut Vec<u8>, texture: &MatTexture) -> Result<()> {
    data.write_u32::<B>(texture.hash)?;
    data.write_u32::<B>(0)?;
    data.write_u16::<B>(0)?;
    data.write_u16::<B>(texture.map_mode)?;
    data.write_u8(texture.wrap_mode_s)?;
    data.write_u8(texture.wrap_mode_t)?;
    data.write_u8(texture.min_filter)?;
    data.write_u8(texture.mag_filter)?;
    data.write_u8(texture.mip_detail)?;
    data.write_u8(texture.unknown)?;
    data.write_u32::<B>(0)?;
    data.write_u16::<B>(texture.unknown2)?;
    Ok(())
}

const fn aligned(len: usize, alignment: usize) -> usize {
    len.div_ceil(alignment) * alignment
}

fn pad(data: &mut Vec<u8>, alignment: usize, byte: u8) {
    let padding = aligned(data.len(), alignment) - data.len();
    data.extend(std::iter::repeat_n(byte, padding));
}

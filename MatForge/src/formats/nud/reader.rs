//! Material block reading
//!
//! Decoding is tolerant of data the game itself accepts: unknown enumeration
//! codes are kept as-is, and texture counts that disagree with the flags are
//! reported as warnings rather than rejected. Only structural damage (an
//! unreadable header, offsets outside the buffer, oversized tables) is fatal.

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use std::fmt;
use std::io::Cursor;

use super::enums::{
    ALPHA_FUNCTIONS, CULL_MODES, LabelTable, MAG_FILTERS, MAP_MODES, MIN_FILTERS, MIP_DETAILS,
    WRAP_MODES,
};
use super::header::OffsetHeader;
use super::material::{MatTexture, Material, ParamValues};
use super::options::{CodecOptions, Endian};
use super::{
    MATERIAL_HEADER_SIZE, MAX_MATERIALS, PADDING_BYTE, PROPERTY_HEADER_SIZE, PROPERTY_VALUE_COUNT,
    TEXTURE_RECORD_SIZE,
};
use crate::error::{Error, Result};

/// Materials decoded from a block, with the anomalies that were tolerated
#[derive(Debug, Clone, Default)]
pub struct DecodedMaterials {
    pub materials: Vec<Material>,
    pub warnings: Vec<DecodeWarning>,
}

/// A tolerated anomaly found while decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// The header addresses no material at all
    NoMaterials,
    /// More materials than a polygon may hold
    TooManyMaterials { count: usize },
    /// The texture count field disagrees with the flag-derived slot count
    TextureCountMismatch {
        material: usize,
        declared: usize,
        expected: usize,
    },
    /// The buffer ended before all declared textures were read
    TexturesTruncated {
        material: usize,
        declared: usize,
        read: usize,
    },
    /// A property name appeared twice; the first value was kept
    DuplicateProperty { material: usize, name: String },
    /// A property had fewer than four values; the rest were zero filled
    ShortPropertyValues {
        material: usize,
        name: String,
        count: u32,
    },
    /// A field holds a code with no known label (kept unchanged)
    UnknownCode {
        material: usize,
        texture: Option<usize>,
        field: &'static str,
        value: u32,
    },
}

impl DecodeWarning {
    /// Whether the anomaly concerns the structure of the data rather than
    /// an undocumented value
    #[must_use]
    pub fn is_structural(&self) -> bool {
        !matches!(self, DecodeWarning::UnknownCode { .. })
    }
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::NoMaterials => write!(f, "header addresses no materials"),
            DecodeWarning::TooManyMaterials { count } => {
                write!(f, "{count} materials (a polygon holds at most {MAX_MATERIALS})")
            }
            DecodeWarning::TextureCountMismatch {
                material,
                declared,
                expected,
            } => write!(
                f,
                "material {material}: {declared} textures declared, flags expect {expected}"
            ),
            DecodeWarning::TexturesTruncated {
                material,
                declared,
                read,
            } => write!(
                f,
                "material {material}: only {read} of {declared} textures fit in the buffer"
            ),
            DecodeWarning::DuplicateProperty { material, name } => {
                write!(f, "material {material}: duplicate property '{name}'")
            }
            DecodeWarning::ShortPropertyValues {
                material,
                name,
                count,
            } => write!(f, "material {material}: property '{name}' has {count} values"),
            DecodeWarning::UnknownCode {
                material,
                texture: Some(texture),
                field,
                value,
            } => write!(
                f,
                "material {material} texture {texture}: unknown {field} 0x{value:X}"
            ),
            DecodeWarning::UnknownCode {
                material,
                texture: None,
                field,
                value,
            } => write!(f, "material {material}: unknown {field} 0x{value:X}"),
        }
    }
}

/// Decode the material block whose offset header starts at `start`.
///
/// All offsets in the header are relative to `start`.
///
/// # Errors
///
/// Returns [`Error::HeaderTooShort`] if the header cannot be read,
/// [`Error::OffsetOutOfBounds`] if an offset or record lies outside the buffer,
/// [`Error::TooManyProperties`] / [`Error::TooManyPropertyValues`] for
/// oversized property tables, and [`Error::StrictDecode`] when strict
/// decoding is enabled and a structural anomaly was found.
pub fn decode_materials(
    data: &[u8],
    start: usize,
    options: &CodecOptions,
) -> Result<DecodedMaterials> {
    match options.endian {
        Endian::Little => decode_with::<LittleEndian>(data, start, options),
        Endian::Big => decode_with::<BigEndian>(data, start, options),
    }
}

fn decode_with<B: ByteOrder>(
    data: &[u8],
    start: usize,
    options: &CodecOptions,
) -> Result<DecodedMaterials> {
    let header = OffsetHeader::read::<B>(data, start)?;

    let string_base = start + header.string_block as usize;
    if string_base > data.len() {
        return Err(Error::OffsetOutOfBounds {
            what: "string block",
            offset: string_base,
            len: data.len(),
        });
    }

    let offsets = header
        .material_offsets()
        .into_iter()
        .map(|relative| {
            let offset = start + relative as usize;
            if offset >= data.len() {
                Err(Error::OffsetOutOfBounds {
                    what: "material",
                    offset,
                    len: data.len(),
                })
            } else {
                Ok(offset)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        "Material block at 0x{:X}: {} materials, strings at 0x{:X}",
        start,
        offsets.len(),
        string_base
    );

    let mut warnings = Vec::new();
    if offsets.is_empty() {
        warnings.push(DecodeWarning::NoMaterials);
    } else if offsets.len() > MAX_MATERIALS {
        warnings.push(DecodeWarning::TooManyMaterials {
            count: offsets.len(),
        });
    }

    let mut materials = Vec::with_capacity(offsets.len());
    for (index, &offset) in offsets.iter().enumerate() {
        let context = MaterialContext {
            data,
            index,
            offset,
            end: region_end(offset, &offsets, string_base, data.len()),
            string_base,
            options,
        };
        materials.push(context.read::<B>(&mut warnings)?);
    }

    for warning in &warnings {
        if warning.is_structural() {
            tracing::warn!("{}", warning);
        } else {
            tracing::debug!("{}", warning);
        }
    }

    if options.strict {
        if let Some(warning) = warnings.iter().find(|w| w.is_structural()) {
            return Err(Error::StrictDecode(warning.to_string()));
        }
    }

    Ok(DecodedMaterials {
        materials,
        warnings,
    })
}

/// End of the region a material may occupy: the next material, the string
/// block, or the end of the buffer, whichever comes first.
fn region_end(offset: usize, offsets: &[usize], string_base: usize, len: usize) -> usize {
    offsets
        .iter()
        .copied()
        .chain(std::iter::once(string_base))
        .filter(|&o| o > offset)
        .fold(len, usize::min)
}

struct MaterialContext<'a> {
    data: &'a [u8],
    index: usize,
    offset: usize,
    end: usize,
    string_base: usize,
    options: &'a CodecOptions,
}

impl MaterialContext<'_> {
    fn read<B: ByteOrder>(&self, warnings: &mut Vec<DecodeWarning>) -> Result<Material> {
        ensure(self.data, self.offset, MATERIAL_HEADER_SIZE, "material header")?;

        let mut cursor = Cursor::new(self.data);
        cursor.set_position(self.offset as u64);

        let flags = cursor.read_u32::<B>()?;
        let _padding = cursor.read_u32::<B>()?;
        let mut material = Material::with_flags(flags);
        material.src_factor = cursor.read_u16::<B>()?;
        let texture_count = cursor.read_u16::<B>()? as usize;
        material.dst_factor = cursor.read_u16::<B>()?;
        material.alpha_test = cursor.read_u8()?;
        material.alpha_function = cursor.read_u8()?;
        material.ref_alpha = cursor.read_u16::<B>()?;
        material.cull_mode = cursor.read_u16::<B>()?;
        material.unknown = cursor.read_u32::<B>()?;
        let _padding = cursor.read_u32::<B>()?;
        material.z_buffer_offset = cursor.read_i32::<B>()?;

        self.check_code(warnings, None, &CULL_MODES, u32::from(material.cull_mode));
        self.check_code(warnings, None, &ALPHA_FUNCTIONS, u32::from(material.alpha_function));

        let expected = material.expected_slots(self.index).len();
        if texture_count != expected {
            warnings.push(DecodeWarning::TextureCountMismatch {
                material: self.index,
                declared: texture_count,
                expected,
            });
        }

        let mut truncated = false;
        for i in 0..texture_count {
            let position = cursor.position() as usize;
            if position + TEXTURE_RECORD_SIZE > self.data.len() {
                warnings.push(DecodeWarning::TexturesTruncated {
                    material: self.index,
                    declared: texture_count,
                    read: i,
                });
                truncated = true;
                break;
            }
            let texture = read_texture::<B>(&mut cursor)?;
            self.check_texture_codes(warnings, i, &texture);
            material.textures.push(texture);
        }

        // Properties follow the texture table; without it there are none to find.
        if !truncated {
            self.read_properties::<B>(&mut cursor, &mut material, warnings)?;
        }

        tracing::debug!(
            "Material {} at 0x{:X}: flags 0x{:08X}, {} textures, {} properties",
            self.index,
            self.offset,
            flags,
            material.textures.len(),
            material.entries.len()
        );

        Ok(material)
    }

    fn read_properties<B: ByteOrder>(
        &self,
        cursor: &mut Cursor<&[u8]>,
        material: &mut Material,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<()> {
        let mut position = cursor.position() as usize;

        // Nothing but alignment padding left: the material has no properties.
        if position >= self.end
            || self.data[position..self.end]
                .iter()
                .all(|&b| b == PADDING_BYTE)
        {
            return Ok(());
        }

        let mut count = 0;
        loop {
            if count == self.options.max_properties {
                return Err(Error::TooManyProperties {
                    material: self.index,
                    max: self.options.max_properties,
                });
            }

            ensure(self.data, position, PROPERTY_HEADER_SIZE, "property")?;
            cursor.set_position(position as u64);

            let next = cursor.read_u32::<B>()? as usize;
            let name_offset = cursor.read_u32::<B>()? as usize;
            let _padding = cursor.read_u32::<B>()?;
            let value_count = cursor.read_u32::<B>()?;

            let name = read_name(self.data, self.string_base + name_offset)?;
            if value_count as usize > PROPERTY_VALUE_COUNT {
                return Err(Error::TooManyPropertyValues {
                    name,
                    count: value_count,
                });
            }

            ensure(
                self.data,
                position + PROPERTY_HEADER_SIZE,
                4 * value_count as usize,
                "property values",
            )?;
            let mut values: ParamValues = [0.0; PROPERTY_VALUE_COUNT];
            for value in values.iter_mut().take(value_count as usize) {
                *value = cursor.read_f32::<B>()?;
            }

            if (value_count as usize) < PROPERTY_VALUE_COUNT {
                warnings.push(DecodeWarning::ShortPropertyValues {
                    material: self.index,
                    name: name.clone(),
                    count: value_count,
                });
            }

            if material.entries.contains_key(&name) {
                warnings.push(DecodeWarning::DuplicateProperty {
                    material: self.index,
                    name,
                });
            } else {
                material.entries.insert(name, values);
            }

            count += 1;
            if next == 0 {
                break;
            }
            position = position.saturating_add(next);
        }

        Ok(())
    }

    fn check_code(
        &self,
        warnings: &mut Vec<DecodeWarning>,
        texture: Option<usize>,
        table: &LabelTable,
        value: u32,
    ) {
        if !table.contains(value) {
            warnings.push(DecodeWarning::UnknownCode {
                material: self.index,
                texture,
                field: table.name(),
                value,
            });
        }
    }

    fn check_texture_codes(
        &self,
        warnings: &mut Vec<DecodeWarning>,
        index: usize,
        tex: &MatTexture,
    ) {
        let texture = Some(index);
        self.check_code(warnings, texture, &MAP_MODES, u32::from(tex.map_mode));
        self.check_code(warnings, texture, &WRAP_MODES, u32::from(tex.wrap_mode_s));
        self.check_code(warnings, texture, &WRAP_MODES, u32::from(tex.wrap_mode_t));
        self.check_code(warnings, texture, &MIN_FILTERS, u32::from(tex.min_filter));
        self.check_code(warnings, texture, &MAG_FILTERS, u32::from(tex.mag_filter));
        self.check_code(warnings, texture, &MIP_DETAILS, u32::from(tex.mip_detail));
    }
}

fn read_texture<B: ByteOrder>(cursor: &mut Cursor<&[u8]>) -> Result<MatTexture> {
    let hash = cursor.read_u32::<B>()?;
    let _padding = cursor.read_u32::<B>()?;
    let _padding = cursor.read_u16::<B>()?;
    let map_mode = cursor.read_u16::<B>()?;
    let wrap_mode_s = cursor.read_u8()?;
    let wrap_mode_t = cursor.read_u8()?;
    let min_filter = cursor.read_u8()?;
    let mag_filter = cursor.read_u8()?;
    let mip_detail = cursor.read_u8()?;
    let unknown = cursor.read_u8()?;
    let _padding = cursor.read_u32::<B>()?;
    let unknown2 = cursor.read_u16::<B>()?;

    Ok(MatTexture {
        hash,
        map_mode,
        wrap_mode_s,
        wrap_mode_t,
        min_filter,
        mag_filter,
        mip_detail,
        unknown,
        unknown2,
    })
}

/// Read a NUL-terminated property name
fn read_name(data: &[u8], offset: usize) -> Result<String> {
    if offset >= data.len() {
        return Err(Error::OffsetOutOfBounds {
            what: "property name",
            offset,
            len: data.len(),
        });
    }

    let bytes = &data[offset..];
    let len = bytes
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::InvalidPropertyName { offset })?;

    String::from_utf8(bytes[..len].to_vec()).map_err(|_| Error::InvalidPropertyName { offset })
}

fn ensure(data: &[u8], offset: usize, len: usize, what: &'static str) -> Result<()> {
    if offset
        .checked_add(len)
        .is_none_or(|end| end > data.len())
    {
        return Err(Error::OffsetOutOfBounds {
            what,
            offset,
            len: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::nud::layout::flag;
    use crate::formats::nud::writer::encode_materials;

    /// A property record as stored: name offset, declared count, values
    struct RawProperty {
        name_offset: u32,
        count: u32,
        values: Vec<f32>,
    }

    fn raw(name_offset: u32, values: &[f32]) -> RawProperty {
        RawProperty {
            name_offset,
            count: values.len() as u32,
            values: values.to_vec(),
        }
    }

    /// One diffuse material with a single texture, the given property
    /// records, then `strings` as the string block
    fn build_block(properties: &[RawProperty], strings: &[u8]) -> Vec<u8> {
        let mut body: Vec<u8> = Vec::new();

        // Material header
        body.extend(flag::DIFFUSE.to_le_bytes());
        body.extend(0u32.to_le_bytes());
        body.extend(0u16.to_le_bytes());
        body.extend(1u16.to_le_bytes());
        body.extend(0u16.to_le_bytes());
        body.extend([0, 0]);
        body.extend(0u16.to_le_bytes());
        body.extend(0x0405u16.to_le_bytes());
        body.extend([0u8; 12]);

        // Texture
        body.extend(0x4000u32.to_le_bytes());
        body.extend([0u8; 8]);
        body.extend([1, 1, 3, 2, 6, 0]);
        body.extend([0u8; 6]);

        for (i, property) in properties.iter().enumerate() {
            let size = PROPERTY_HEADER_SIZE + 4 * property.values.len();
            let next = if i + 1 == properties.len() { 0 } else { size as u32 };
            body.extend(next.to_le_bytes());
            body.extend(property.name_offset.to_le_bytes());
            body.extend(0u32.to_le_bytes());
            body.extend(property.count.to_le_bytes());
            for value in &property.values {
                body.extend(value.to_le_bytes());
            }
        }

        let string_block = 20 + body.len() as u32;
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend(string_block.to_le_bytes());
        bytes.extend(20u32.to_le_bytes());
        bytes.extend([0u8; 12]);
        bytes.extend(body);
        bytes.extend_from_slice(strings);
        bytes
    }

    fn sample_material(flags: u32, textures: usize) -> Material {
        let mut mat = Material::with_flags(flags);
        mat.cull_mode = 0x405;
        mat.textures = (0..textures).map(|i| MatTexture::new(0x4000 + i as u32)).collect();
        mat.entries.insert("NU_colorSamplerUV".to_string(), [1.0, 1.0, 0.0, 0.0]);
        mat.set_material_hash(0xCAFEBABE);
        mat
    }

    #[test]
    fn test_decode_diffuse_normal_material() {
        let mat = sample_material(flag::DIFFUSE | flag::NORMAL_MAP, 2);
        let bytes = encode_materials(&[mat.clone()], &CodecOptions::default()).unwrap();
        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();

        assert_eq!(decoded.materials, vec![mat]);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_texture_count_mismatch_is_tolerated() {
        // Flags expect two textures, three are stored
        let mat = sample_material(flag::DIFFUSE | flag::NORMAL_MAP, 3);
        let bytes = encode_materials(&[mat], &CodecOptions::default()).unwrap();
        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();

        assert_eq!(decoded.materials[0].textures.len(), 3);
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::TextureCountMismatch {
                material: 0,
                declared: 3,
                expected: 2,
            }]
        );
    }

    #[test]
    fn test_strict_rejects_texture_count_mismatch() {
        let mat = sample_material(flag::DIFFUSE, 2);
        let bytes = encode_materials(&[mat], &CodecOptions::default()).unwrap();
        let err = decode_materials(&bytes, 0, &CodecOptions::new().with_strict(true)).unwrap_err();
        assert!(matches!(err, Error::StrictDecode(_)));
    }

    #[test]
    fn test_unknown_codes_are_kept() {
        let mut mat = sample_material(flag::DIFFUSE, 1);
        mat.cull_mode = 0x123;
        mat.textures[0].wrap_mode_s = 0x09;
        let bytes = encode_materials(&[mat], &CodecOptions::default()).unwrap();
        let decoded = decode_materials(&bytes, 0, &CodecOptions::new().with_strict(true)).unwrap();

        assert_eq!(decoded.materials[0].cull_mode, 0x123);
        assert_eq!(decoded.materials[0].textures[0].wrap_mode_s, 0x09);
        assert_eq!(decoded.warnings.len(), 2);
        assert!(decoded.warnings.iter().all(|w| !w.is_structural()));
    }

    #[test]
    fn test_offset_outside_buffer_is_fatal() {
        let mut bytes = vec![0u8; 20];
        bytes[4..8].copy_from_slice(&0x400u32.to_le_bytes());
        let err = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap_err();
        assert!(matches!(err, Error::OffsetOutOfBounds { what: "material", .. }));
    }

    #[test]
    fn test_property_bound_is_enforced() {
        let mut mat = sample_material(flag::DIFFUSE, 1);
        for i in 0..8 {
            mat.entries.insert(format!("NU_param{i}"), [0.0; 4]);
        }
        let bytes = encode_materials(&[mat], &CodecOptions::default()).unwrap();
        let err =
            decode_materials(&bytes, 0, &CodecOptions::new().with_max_properties(4)).unwrap_err();
        assert!(matches!(err, Error::TooManyProperties { max: 4, .. }));
    }

    #[test]
    fn test_truncated_textures_keep_parsed_prefix() {
        let mat = sample_material(flag::DIFFUSE | flag::NORMAL_MAP, 2);
        let bytes = encode_materials(&[mat], &CodecOptions::default()).unwrap();
        // Header + material header + one texture and a half
        let cut = 20 + MATERIAL_HEADER_SIZE + TEXTURE_RECORD_SIZE + 10;
        let mut truncated = bytes[..cut].to_vec();
        // Point the string block at the end so the header stays valid
        truncated[0..4].copy_from_slice(&(cut as u32).to_le_bytes());

        let decoded = decode_materials(&truncated, 0, &CodecOptions::default()).unwrap();
        assert_eq!(decoded.materials[0].textures.len(), 1);
        assert!(decoded.warnings.contains(&DecodeWarning::TexturesTruncated {
            material: 0,
            declared: 2,
            read: 1,
        }));
        assert!(decoded.materials[0].entries.is_empty());
    }

    #[test]
    fn test_decode_at_nonzero_start() {
        let mat = sample_material(flag::DIFFUSE, 1);
        let bytes = encode_materials(&[mat.clone()], &CodecOptions::default()).unwrap();
        let mut embedded = vec![0xAB; 64];
        embedded.extend_from_slice(&bytes);

        let decoded = decode_materials(&embedded, 64, &CodecOptions::default()).unwrap();
        assert_eq!(decoded.materials, vec![mat]);
    }

    #[test]
    fn test_big_endian_round_trip() {
        let mat = sample_material(flag::DIFFUSE | flag::NORMAL_MAP, 2);
        let options = CodecOptions::new().with_endian(Endian::Big);
        let bytes = encode_materials(&[mat.clone()], &options).unwrap();
        assert_eq!(&bytes[20..24], &(flag::DIFFUSE | flag::NORMAL_MAP).to_be_bytes());

        let decoded = decode_materials(&bytes, 0, &options).unwrap();
        assert_eq!(decoded.materials, vec![mat]);
    }

    #[test]
    fn test_hand_built_block_decodes_cleanly() {
        let bytes = build_block(&[raw(0, &[1.0, 2.0, 3.0, 4.0])], b"NU_first\0");
        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();

        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.materials[0].textures, vec![MatTexture::new(0x4000)]);
        assert_eq!(
            decoded.materials[0].property("NU_first"),
            Some(&[1.0, 2.0, 3.0, 4.0])
        );
    }

    #[test]
    fn test_too_many_property_values_is_fatal() {
        let bytes = build_block(&[raw(0, &[1.0, 2.0, 3.0, 4.0, 5.0])], b"NU_wide\0");
        let err = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::TooManyPropertyValues { ref name, count: 5 } if name == "NU_wide"
        ));
    }

    #[test]
    fn test_unterminated_property_name_is_fatal() {
        let bytes = build_block(&[raw(0, &[0.0; 4])], b"NU_open");
        let string_base = bytes.len() - 7;
        let err = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidPropertyName { offset } if offset == string_base));
    }

    #[test]
    fn test_non_utf8_property_name_is_fatal() {
        let bytes = build_block(&[raw(0, &[0.0; 4])], &[b'N', b'U', 0xFF, 0xFE, 0]);
        let err = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidPropertyName { .. }));
    }

    #[test]
    fn test_string_block_outside_buffer_is_fatal() {
        let mut bytes = build_block(&[raw(0, &[0.0; 4])], b"NU_name\0");
        let past_end = bytes.len() as u32 + 1;
        bytes[0..4].copy_from_slice(&past_end.to_le_bytes());

        let err = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::OffsetOutOfBounds { what: "string block", offset, len }
                if offset == len + 1
        ));
    }

    #[test]
    fn test_property_name_outside_buffer_is_fatal() {
        let bytes = build_block(&[raw(0x100, &[0.0; 4])], b"NU_name\0");
        let err = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::OffsetOutOfBounds {
                what: "property name",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_property_keeps_first_value() {
        let bytes = build_block(
            &[
                raw(0, &[1.0, 1.0, 1.0, 1.0]),
                raw(16, &[0.5; 4]),
                raw(0, &[2.0, 2.0, 2.0, 2.0]),
            ],
            b"NU_dup\0\0\0\0\0\0\0\0\0\0NU_other\0",
        );
        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();

        let material = &decoded.materials[0];
        assert_eq!(material.entries.len(), 2);
        assert_eq!(material.property("NU_dup"), Some(&[1.0; 4]));
        assert_eq!(material.property("NU_other"), Some(&[0.5; 4]));
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::DuplicateProperty {
                material: 0,
                name: "NU_dup".to_string(),
            }]
        );

        let strict = CodecOptions::new().with_strict(true);
        let err = decode_materials(&bytes, 0, &strict).unwrap_err();
        assert!(matches!(err, Error::StrictDecode(_)));
    }

    #[test]
    fn test_short_property_values_are_zero_padded() {
        let bytes = build_block(
            &[raw(0, &[0.5, 0.25]), raw(16, &[1.0; 4])],
            b"NU_short\0\0\0\0\0\0\0\0NU_after\0",
        );
        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();

        let material = &decoded.materials[0];
        assert_eq!(material.property("NU_short"), Some(&[0.5, 0.25, 0.0, 0.0]));
        assert_eq!(material.property("NU_after"), Some(&[1.0; 4]));
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::ShortPropertyValues {
                material: 0,
                name: "NU_short".to_string(),
                count: 2,
            }]
        );
    }

    #[test]
    fn test_header_without_materials() {
        let mut bytes = vec![0u8; 20];
        bytes[0..4].copy_from_slice(&20u32.to_le_bytes());

        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();
        assert!(decoded.materials.is_empty());
        assert_eq!(decoded.warnings, vec![DecodeWarning::NoMaterials]);
    }

    #[test]
    fn test_more_materials_than_a_polygon_holds() {
        let materials = vec![sample_material(flag::DIFFUSE, 1); 3];
        let bytes = encode_materials(&materials, &CodecOptions::default()).unwrap();

        let decoded = decode_materials(&bytes, 0, &CodecOptions::default()).unwrap();
        assert_eq!(decoded.materials, materials);
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::TooManyMaterials { count: 3 }]
        );

        let err = decode_materials(&bytes, 0, &CodecOptions::new().with_strict(true)).unwrap_err();
        assert!(matches!(err, Error::StrictDecode(_)));
    }
}

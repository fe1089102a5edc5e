//! Material and texture records

use indexmap::IndexMap;

use super::enums::{DummyTexture, alpha_test};
use super::layout::{Capabilities, TextureLayout, TextureSlot};

/// Property whose first value holds a 32-bit hash stored as float bits
pub const MATERIAL_HASH_PROPERTY: &str = "NU_materialHash";

/// Flags of the default material template
pub const DEFAULT_FLAGS: u32 = 0x94010161;

/// Cull mode of the default material template ("Cull Inside")
pub const DEFAULT_CULL_MODE: u16 = 0x0405;

/// Material hash of the default template (bytes 12, 34, 56, 78)
pub const DEFAULT_MATERIAL_HASH: u32 = 0x4E38220C;

/// Hash of a freshly added texture
pub const DEFAULT_TEXTURE_HASH: u32 = 0x10000000;

/// A parameter vector
pub type ParamValues = [f32; 4];

/// A texture reference inside a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatTexture {
    /// Texture hash id, or a [`DummyTexture`] sentinel
    pub hash: u32,
    pub map_mode: u16,
    pub wrap_mode_s: u8,
    pub wrap_mode_t: u8,
    pub min_filter: u8,
    pub mag_filter: u8,
    pub mip_detail: u8,
    /// Undocumented byte following the mip detail
    pub unknown: u8,
    /// Undocumented trailing field
    pub unknown2: u16,
}

impl MatTexture {
    /// Texture with default sampler settings for the given hash
    #[must_use]
    pub fn new(hash: u32) -> Self {
        Self {
            hash,
            map_mode: 0,
            wrap_mode_s: 1,
            wrap_mode_t: 1,
            min_filter: 3,
            mag_filter: 2,
            mip_detail: 6,
            unknown: 0,
            unknown2: 0,
        }
    }

    /// The dummy texture this hash refers to, if it is reserved
    #[must_use]
    pub fn dummy(&self) -> Option<DummyTexture> {
        DummyTexture::from_hash(self.hash)
    }
}

impl Default for MatTexture {
    fn default() -> Self {
        Self::new(DEFAULT_TEXTURE_HASH)
    }
}

/// A material record of a NUD polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    flags: u32,
    pub src_factor: u16,
    pub dst_factor: u16,
    pub alpha_test: u8,
    pub alpha_function: u8,
    pub ref_alpha: u16,
    pub cull_mode: u16,
    /// Undocumented header word after the cull mode
    pub unknown: u32,
    pub z_buffer_offset: i32,
    capabilities: Capabilities,
    /// Textures in slot order
    pub textures: Vec<MatTexture>,
    /// Named parameter vectors in file order
    pub entries: IndexMap<String, ParamValues>,
}

impl Material {
    /// An empty material with the given flags and no textures or properties
    #[must_use]
    pub fn with_flags(flags: u32) -> Self {
        Self {
            flags,
            src_factor: 0,
            dst_factor: 0,
            alpha_test: alpha_test::DISABLED,
            alpha_function: 0,
            ref_alpha: 0,
            cull_mode: 0,
            unknown: 0,
            z_buffer_offset: 0,
            capabilities: Capabilities::from_flags(flags),
            textures: Vec::new(),
            entries: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// Set the flags and re-derive the texture capabilities from them
    pub fn set_flags(&mut self, flags: u32) {
        self.flags = flags;
        self.capabilities = Capabilities::from_flags(flags);
    }

    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Write edited capabilities back into the low flag byte.
    ///
    /// Capabilities are then re-derived, so combinations the flags cannot
    /// express are normalized.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.set_flags(capabilities.to_flags(self.flags));
    }

    pub fn set_sphere_map(&mut self, enabled: bool) {
        let mut capabilities = self.capabilities;
        capabilities.has_sphere_map = enabled;
        self.set_capabilities(capabilities);
    }

    pub fn set_shadow(&mut self, enabled: bool) {
        let mut capabilities = self.capabilities;
        capabilities.has_shadow = enabled;
        self.set_capabilities(capabilities);
    }

    pub fn set_glow(&mut self, enabled: bool) {
        let mut capabilities = self.capabilities;
        capabilities.glow = enabled;
        self.set_capabilities(capabilities);
    }

    #[must_use]
    pub fn layout(&self) -> TextureLayout {
        TextureLayout::classify(self.flags)
    }

    /// Slots this material is expected to fill, in order
    #[must_use]
    pub fn expected_slots(&self, material_index: usize) -> Vec<TextureSlot> {
        self.layout().slots(&self.capabilities, material_index)
    }

    /// Pair each texture with its slot. Textures past the expected slots get `None`.
    #[must_use]
    pub fn texture_slots(
        &self,
        material_index: usize,
    ) -> Vec<(Option<TextureSlot>, &MatTexture)> {
        let slots = self.expected_slots(material_index);
        self.textures
            .iter()
            .enumerate()
            .map(|(i, tex)| (slots.get(i).copied(), tex))
            .collect()
    }

    /// Texture bound to a slot, if present
    #[must_use]
    pub fn texture_for_slot(
        &self,
        slot: TextureSlot,
        material_index: usize,
    ) -> Option<&MatTexture> {
        self.expected_slots(material_index)
            .iter()
            .position(|s| *s == slot)
            .and_then(|i| self.textures.get(i))
    }

    /// Copy texture hashes from `source`, matching textures by slot role.
    ///
    /// Only hashes change; sampler settings stay as they are. Both materials
    /// are treated as the first material of their polygon.
    ///
    /// # Returns
    /// Number of texture hashes copied
    pub fn copy_texture_ids(&mut self, source: &Material) -> usize {
        let slots = self.expected_slots(0);
        let mut copied = 0;
        for (texture, slot) in self.textures.iter_mut().zip(slots) {
            if let Some(src) = source.texture_for_slot(slot, 0) {
                texture.hash = src.hash;
                copied += 1;
            }
        }
        copied
    }

    /// Whether the material carries the `NU_materialHash` property
    #[must_use]
    pub fn has_material_hash(&self) -> bool {
        self.entries.contains_key(MATERIAL_HASH_PROPERTY)
    }

    /// The material hash, reinterpreting the first value's float bits
    #[must_use]
    pub fn material_hash(&self) -> Option<u32> {
        self.entries
            .get(MATERIAL_HASH_PROPERTY)
            .map(|values| values[0].to_bits())
    }

    /// Store a material hash as float bits, adding the property if missing
    pub fn set_material_hash(&mut self, hash: u32) {
        self.entries
            .entry(MATERIAL_HASH_PROPERTY.to_string())
            .or_insert([0.0; 4])[0] = f32::from_bits(hash);
    }

    #[must_use]
    pub fn alpha_test_enabled(&self) -> bool {
        self.alpha_test == alpha_test::ENABLED
    }

    pub fn set_alpha_test_enabled(&mut self, enabled: bool) {
        self.alpha_test = if enabled {
            alpha_test::ENABLED
        } else {
            alpha_test::DISABLED
        };
    }
}

impl Default for Material {
    /// The template used for new materials
    fn default() -> Self {
        let mut material = Self::with_flags(DEFAULT_FLAGS);
        material.cull_mode = DEFAULT_CULL_MODE;

        let entries: [(&str, ParamValues); 8] = [
            ("NU_colorSamplerUV", [1.0, 1.0, 0.0, 0.0]),
            ("NU_fresnelColor", [1.0, 1.0, 1.0, 1.0]),
            ("NU_blinkColor", [0.0; 4]),
            ("NU_aoMinGain", [0.0; 4]),
            ("NU_lightMapColorOffset", [0.0; 4]),
            ("NU_fresnelParams", [1.0, 0.0, 0.0, 0.0]),
            ("NU_alphaBlendParams", [0.0; 4]),
            (MATERIAL_HASH_PROPERTY, [f32::from_bits(DEFAULT_MATERIAL_HASH), 0.0, 0.0, 0.0]),
        ];
        material.entries = entries
            .into_iter()
            .map(|(name, values)| (name.to_string(), values))
            .collect();

        material.textures = vec![
            MatTexture::new(DEFAULT_TEXTURE_HASH),
            MatTexture::new(DummyTexture::DummyRamp.hash()),
        ];
        material
    }
}

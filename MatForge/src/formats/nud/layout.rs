//! Texture slot layouts
//!
//! The engine expects a material's textures in a fixed order that is implied
//! by its flags. Most materials follow the standard order gated by their
//! capability bits; two flag values found on specific character models use a
//! hard-coded slot list instead.

/// Flag bits that gate texture capabilities
pub mod flag {
    pub const DIFFUSE: u32 = 0x01;
    pub const NORMAL_MAP: u32 = 0x02;
    pub const RAMP_CUBE_MAP: u32 = 0x04;
    pub const STAGE_AO_MAP: u32 = 0x08;
    pub const SPHERE_MAP: u32 = 0x10;
    pub const DUMMY_RAMP: u32 = 0x20;
    pub const SHADOW: u32 = 0x40;
    pub const GLOW: u32 = 0x80;
}

/// Flags of Jigglypuff's eye material
pub const JIGGLYPUFF_EYES_FLAGS: u32 = 0x9AE11163;

/// Flags of a material pair whose second material shares the first's ramps
pub const SPECIAL_PAIR_FLAGS: u32 = 0x92F01101;

/// Bit patterns in the second byte that mark a third diffuse texture
const DIFFUSE3_PATTERNS: [u32; 3] = [0x9100, 0x9600, 0x9900];

/// Role of a texture within a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Diffuse,
    SphereMap,
    Diffuse2,
    Diffuse3,
    StageMap,
    CubeMap,
    AoMap,
    NormalMap,
    Ramp,
    DummyRamp,
}

impl TextureSlot {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TextureSlot::Diffuse => "Diffuse",
            TextureSlot::SphereMap => "SphereMap",
            TextureSlot::Diffuse2 => "Diffuse2",
            TextureSlot::Diffuse3 => "Diffuse3",
            TextureSlot::StageMap => "StageMap",
            TextureSlot::CubeMap => "Cubemap",
            TextureSlot::AoMap => "AOMap",
            TextureSlot::NormalMap => "NormalMap",
            TextureSlot::Ramp => "Ramp",
            TextureSlot::DummyRamp => "DummyRamp",
        }
    }
}

impl std::fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Texture capabilities of a material.
///
/// Derived from the flags. [`Capabilities::to_flags`] goes the other way, so
/// an edited set can be written back into the low flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub has_shadow: bool,
    pub glow: bool,
    pub has_diffuse: bool,
    pub has_diffuse2: bool,
    pub has_diffuse3: bool,
    pub has_sphere_map: bool,
    pub has_stage_map: bool,
    pub has_cube_map: bool,
    pub has_ao_map: bool,
    pub has_normal_map: bool,
    pub has_ramp: bool,
    pub has_dummy_ramp: bool,
}

impl Capabilities {
    /// Derive capabilities from a flags value
    #[must_use]
    pub fn from_flags(flags: u32) -> Self {
        let bit = |mask: u32| flags & mask != 0;

        let has_dummy_ramp = bit(flag::DUMMY_RAMP);
        let has_normal_map = bit(flag::NORMAL_MAP);
        let has_diffuse3 = DIFFUSE3_PATTERNS.iter().any(|&p| flags & p == p);
        let ramp_cube = bit(flag::RAMP_CUBE_MAP);

        // The ramp/cube bit selects exactly one of Diffuse2, Ramp or CubeMap.
        let has_diffuse2 = ramp_cube && !has_normal_map && (has_dummy_ramp || has_diffuse3);
        let has_ramp = ramp_cube && !has_diffuse2 && has_dummy_ramp;
        let has_cube_map = ramp_cube && !has_diffuse2 && !has_dummy_ramp;

        Self {
            has_shadow: bit(flag::SHADOW),
            glow: bit(flag::GLOW),
            has_diffuse: bit(flag::DIFFUSE),
            has_diffuse2,
            has_diffuse3,
            has_sphere_map: bit(flag::SPHERE_MAP),
            has_stage_map: bit(flag::STAGE_AO_MAP) && has_dummy_ramp,
            has_cube_map,
            has_ao_map: bit(flag::STAGE_AO_MAP) && !has_dummy_ramp,
            has_normal_map,
            has_ramp,
            has_dummy_ramp,
        }
    }

    /// Rebuild the low flag byte of `flags` from these capabilities.
    ///
    /// The upper bytes are kept, so `has_diffuse3` always follows them. When
    /// nothing changed, `flags` is returned as is.
    #[must_use]
    pub fn to_flags(&self, flags: u32) -> u32 {
        if Self::from_flags(flags) == *self {
            return flags;
        }

        let bits = [
            (self.has_diffuse, flag::DIFFUSE),
            (self.has_normal_map, flag::NORMAL_MAP),
            (self.has_diffuse2 || self.has_ramp || self.has_cube_map, flag::RAMP_CUBE_MAP),
            (self.has_stage_map || self.has_ao_map, flag::STAGE_AO_MAP),
            (self.has_sphere_map, flag::SPHERE_MAP),
            (self.has_dummy_ramp || self.has_ramp || self.has_stage_map, flag::DUMMY_RAMP),
            (self.has_shadow, flag::SHADOW),
            (self.glow, flag::GLOW),
        ];
        bits.into_iter()
            .filter(|(present, _)| *present)
            .fold(flags & !0xFF, |acc, (_, bit)| acc | bit)
    }

    /// Texture slots in engine order for the standard layout
    #[must_use]
    pub fn standard_slots(&self) -> Vec<TextureSlot> {
        [
            (self.has_diffuse, TextureSlot::Diffuse),
            (self.has_sphere_map, TextureSlot::SphereMap),
            (self.has_diffuse2, TextureSlot::Diffuse2),
            (self.has_diffuse3, TextureSlot::Diffuse3),
            (self.has_stage_map, TextureSlot::StageMap),
            (self.has_cube_map, TextureSlot::CubeMap),
            (self.has_ao_map, TextureSlot::AoMap),
            (self.has_normal_map, TextureSlot::NormalMap),
            (self.has_ramp, TextureSlot::Ramp),
            (self.has_dummy_ramp, TextureSlot::DummyRamp),
        ]
        .into_iter()
        .filter_map(|(present, slot)| present.then_some(slot))
        .collect()
    }
}

/// How a material's textures map onto slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureLayout {
    /// Slots follow the capability flags
    Standard,
    /// Diffuse, Diffuse2, NormalMap
    JigglypuffEyes,
    /// Diffuse, Diffuse2, plus Ramp and DummyRamp on the first material only
    SpecialPair,
}

impl TextureLayout {
    #[must_use]
    pub fn classify(flags: u32) -> Self {
        match flags {
            JIGGLYPUFF_EYES_FLAGS => TextureLayout::JigglypuffEyes,
            SPECIAL_PAIR_FLAGS => TextureLayout::SpecialPair,
            _ => TextureLayout::Standard,
        }
    }

    /// Slots in order for a material at `material_index` within its polygon
    #[must_use]
    pub fn slots(self, capabilities: &Capabilities, material_index: usize) -> Vec<TextureSlot> {
        match self {
            TextureLayout::Standard => capabilities.standard_slots(),
            TextureLayout::JigglypuffEyes => vec![
                TextureSlot::Diffuse,
                TextureSlot::Diffuse2,
                TextureSlot::NormalMap,
            ],
            TextureLayout::SpecialPair if material_index == 0 => vec![
                TextureSlot::Diffuse,
                TextureSlot::Diffuse2,
                TextureSlot::Ramp,
                TextureSlot::DummyRamp,
            ],
            // The second material reuses the first material's ramps.
            TextureLayout::SpecialPair => vec![TextureSlot::Diffuse, TextureSlot::Diffuse2],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TextureLayout::Standard => "Standard",
            TextureLayout::JigglypuffEyes => "JigglypuffEyes",
            TextureLayout::SpecialPair => "SpecialPair",
        }
    }
}

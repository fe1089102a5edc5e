//! Code/label tables for the small integer fields of a material
//!
//! The engine accepts values outside these tables in shipped assets, so the
//! tables are only used for display and reverse lookup. Nothing here rejects
//! or rewrites a raw value.

/// A fixed, ordered mapping between raw codes and display labels.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable {
    name: &'static str,
    entries: &'static [(u32, &'static str)],
}

impl LabelTable {
    const fn new(name: &'static str, entries: &'static [(u32, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Name of the field this table describes
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Label for a raw code, `None` when the code is not documented
    #[must_use]
    pub fn label(&self, code: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Raw code for a label (exact match)
    #[must_use]
    pub fn code(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(code, _)| *code)
    }

    /// Whether the code has a label
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        self.label(code).is_some()
    }

    /// All entries in display order
    #[must_use]
    pub fn entries(&self) -> &'static [(u32, &'static str)] {
        self.entries
    }

    /// Label for display, falling back to the hex value for unknown codes
    #[must_use]
    pub fn describe(&self, code: u32) -> String {
        match self.label(code) {
            Some(label) => label.to_string(),
            None => format!("Unknown (0x{code:X})"),
        }
    }
}

pub static CULL_MODES: LabelTable = LabelTable::new(
    "cull mode",
    &[
        (0x000, "Cull None"),
        // Behaves like any other invalid value in Smash; Pokkén culls inside faces.
        (0x002, "Cull Inside (Pokkén)"),
        (0x404, "Cull Outside"),
        (0x405, "Cull Inside"),
    ],
);

pub static ALPHA_FUNCTIONS: LabelTable = LabelTable::new(
    "alpha function",
    &[
        (0x00, "Never"),
        (0x04, "Gequal Ref Alpha"),
        (0x06, "Gequal Ref Alpha + ???"),
    ],
);

pub static MAP_MODES: LabelTable = LabelTable::new(
    "map mode",
    &[
        (0x00, "TexCoord"),
        (0x1D00, "EnvCamera"),
        (0x1E00, "Projection"),
        (0x1ECD, "EnvLight"),
        (0x1F00, "EnvSpec"),
    ],
);

pub static MIN_FILTERS: LabelTable = LabelTable::new(
    "min filter",
    &[
        (0x00, "Linear_Mipmap_Linear"),
        (0x01, "Nearest"),
        (0x02, "Linear"),
        (0x03, "Nearest_Mipmap_Linear"),
    ],
);

pub static MAG_FILTERS: LabelTable = LabelTable::new(
    "mag filter",
    &[(0x00, "???"), (0x01, "Nearest"), (0x02, "Linear")],
);

pub static WRAP_MODES: LabelTable = LabelTable::new(
    "wrap mode",
    &[(0x01, "Repeat"), (0x02, "Mirror"), (0x03, "Clamp")],
);

pub static MIP_DETAILS: LabelTable = LabelTable::new(
    "mip detail",
    &[
        (0x01, "1 mip level, anisotropic off"),
        (0x02, "1 mip level, anisotropic off 2"),
        (0x03, "4 mip levels"),
        (0x04, "4 mip levels, anisotropic"),
        (0x05, "4 mip levels, trilinear"),
        (0x06, "4 mip levels, trilinear, anisotropic"),
    ],
);

/// Alpha test byte values
pub mod alpha_test {
    pub const DISABLED: u8 = 0x00;
    pub const ENABLED: u8 = 0x02;
}

/// Reserved texture hashes that the engine substitutes with built-in textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DummyTexture {
    StageMapLow,
    StageMapHigh,
    PokemonStadium,
    PunchOut,
    DummyRamp,
    ShadowMap,
}

impl DummyTexture {
    pub const ALL: [DummyTexture; 6] = [
        DummyTexture::StageMapLow,
        DummyTexture::StageMapHigh,
        DummyTexture::PokemonStadium,
        DummyTexture::PunchOut,
        DummyTexture::DummyRamp,
        DummyTexture::ShadowMap,
    ];

    /// The reserved hash value
    #[must_use]
    pub const fn hash(self) -> u32 {
        match self {
            DummyTexture::StageMapLow => 0x10101000,
            DummyTexture::StageMapHigh => 0x10102000,
            DummyTexture::PokemonStadium => 0x10040000,
            DummyTexture::PunchOut => 0x40000001,
            DummyTexture::DummyRamp => 0x10080000,
            DummyTexture::ShadowMap => 0x10100000,
        }
    }

    /// Look up the dummy texture for a hash, if it is reserved
    #[must_use]
    pub fn from_hash(hash: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.hash() == hash)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DummyTexture::StageMapLow => "StageMapLow",
            DummyTexture::StageMapHigh => "StageMapHigh",
            DummyTexture::PokemonStadium => "PokemonStadium",
            DummyTexture::PunchOut => "PunchOut",
            DummyTexture::DummyRamp => "DummyRamp",
            DummyTexture::ShadowMap => "ShadowMap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup_both_ways() {
        assert_eq!(CULL_MODES.label(0x405), Some("Cull Inside"));
        assert_eq!(CULL_MODES.code("Cull Outside"), Some(0x404));
        assert_eq!(WRAP_MODES.label(0x03), Some("Clamp"));
        assert_eq!(MAP_MODES.code("EnvLight"), Some(0x1ECD));
    }

    #[test]
    fn test_unknown_code_has_no_label() {
        assert_eq!(WRAP_MODES.label(0x07), None);
        assert!(!MIP_DETAILS.contains(0));
        assert_eq!(WRAP_MODES.describe(0x07), "Unknown (0x7)");
    }

    #[test]
    fn test_dummy_texture_hashes() {
        assert_eq!(DummyTexture::from_hash(0x10080000), Some(DummyTexture::DummyRamp));
        assert_eq!(DummyTexture::from_hash(0x40000001), Some(DummyTexture::PunchOut));
        assert_eq!(DummyTexture::from_hash(0x10000000), None);
        for dummy in DummyTexture::ALL {
            assert_eq!(DummyTexture::from_hash(dummy.hash()), Some(dummy));
        }
    }
}

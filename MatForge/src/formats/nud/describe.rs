//! Human-readable views of materials
//!
//! Raw codes are paired with their labels and hashes are rendered in hex, so
//! the views serialize to JSON without losing the float-bit material hash.

use indexmap::IndexMap;
use serde::Serialize;

use super::enums::{
    ALPHA_FUNCTIONS, CULL_MODES, LabelTable, MAG_FILTERS, MAP_MODES, MIN_FILTERS, MIP_DETAILS,
    WRAP_MODES,
};
use super::material::{MATERIAL_HASH_PROPERTY, MatTexture, Material, ParamValues};

/// A raw code with its label, if it has one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelledCode {
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl LabelledCode {
    fn new(table: &LabelTable, value: impl Into<u32>) -> Self {
        let value = value.into();
        Self {
            value,
            label: table.label(value),
        }
    }
}

impl std::fmt::Display for LabelledCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label {
            Some(label) => write!(f, "{label} (0x{:X})", self.value),
            None => write!(f, "Unknown (0x{:X})", self.value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextureSummary {
    /// Slot role, `None` when the material holds more textures than its flags expect
    pub slot: Option<&'static str>,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dummy: Option<&'static str>,
    pub map_mode: LabelledCode,
    pub wrap_mode_s: LabelledCode,
    pub wrap_mode_t: LabelledCode,
    pub min_filter: LabelledCode,
    pub mag_filter: LabelledCode,
    pub mip_detail: LabelledCode,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialSummary {
    pub index: usize,
    pub flags: String,
    pub layout: &'static str,
    pub src_factor: u16,
    pub dst_factor: u16,
    pub alpha_test: bool,
    pub alpha_function: LabelledCode,
    pub ref_alpha: u16,
    pub cull_mode: LabelledCode,
    pub z_buffer_offset: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_hash: Option<String>,
    pub textures: Vec<TextureSummary>,
    /// Properties in file order, without the material hash
    pub properties: IndexMap<String, ParamValues>,
}

impl MaterialSummary {
    #[must_use]
    pub fn new(material: &Material, index: usize) -> Self {
        let textures = material
            .texture_slots(index)
            .into_iter()
            .map(|(slot, texture)| summarize_texture(slot.map(|s| s.name()), texture))
            .collect();

        let properties = material
            .entries
            .iter()
            .filter(|(name, _)| name.as_str() != MATERIAL_HASH_PROPERTY)
            .map(|(name, values)| (name.clone(), *values))
            .collect();

        Self {
            index,
            flags: format!("0x{:08X}", material.flags()),
            layout: material.layout().name(),
            src_factor: material.src_factor,
            dst_factor: material.dst_factor,
            alpha_test: material.alpha_test_enabled(),
            alpha_function: LabelledCode::new(&ALPHA_FUNCTIONS, material.alpha_function),
            ref_alpha: material.ref_alpha,
            cull_mode: LabelledCode::new(&CULL_MODES, material.cull_mode),
            z_buffer_offset: material.z_buffer_offset,
            material_hash: material.material_hash().map(|hash| format!("0x{hash:08X}")),
            textures,
            properties,
        }
    }
}

fn summarize_texture(slot: Option<&'static str>, texture: &MatTexture) -> TextureSummary {
    TextureSummary {
        slot,
        hash: format!("0x{:08X}", texture.hash),
        dummy: texture.dummy().map(|d| d.name()),
        map_mode: LabelledCode::new(&MAP_MODES, texture.map_mode),
        wrap_mode_s: LabelledCode::new(&WRAP_MODES, texture.wrap_mode_s),
        wrap_mode_t: LabelledCode::new(&WRAP_MODES, texture.wrap_mode_t),
        min_filter: LabelledCode::new(&MIN_FILTERS, texture.min_filter),
        mag_filter: LabelledCode::new(&MAG_FILTERS, texture.mag_filter),
        mip_detail: LabelledCode::new(&MIP_DETAILS, texture.mip_detail),
    }
}

/// Summaries of a polygon's materials in order
#[must_use]
pub fn describe_materials(materials: &[Material]) -> Vec<MaterialSummary> {
    materials
        .iter()
        .enumerate()
        .map(|(index, material)| MaterialSummary::new(material, index))
        .collect()
}

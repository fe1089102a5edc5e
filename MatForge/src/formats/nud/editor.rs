//! Material editing operations
//!
//! Bounded mutations on a material and on a polygon's material list:
//! - Add and remove textures (1 to 4 per material)
//! - Add, remove and edit named properties
//! - Set enumeration fields by their display label
//! - Add and remove materials (1 to 2 per polygon)

use super::enums::{
    ALPHA_FUNCTIONS, CULL_MODES, LabelTable, MAG_FILTERS, MAP_MODES, MIN_FILTERS, MIP_DETAILS,
    WRAP_MODES,
};
use super::material::{MatTexture, Material, ParamValues};
use super::{MAX_MATERIALS, MAX_TEXTURES, PROPERTY_VALUE_COUNT};

// ============================================================================
// Material editing methods
// ============================================================================

impl Material {
    /// Append a texture with default sampler settings
    ///
    /// # Returns
    /// `false` if the material already holds the maximum number of textures
    pub fn add_texture(&mut self) -> bool {
        if self.textures.len() >= MAX_TEXTURES {
            return false;
        }
        self.textures.push(MatTexture::default());
        true
    }

    /// Remove the texture at `index`
    ///
    /// # Returns
    /// `false` if the index is invalid or it is the only texture left
    pub fn remove_texture(&mut self, index: usize) -> bool {
        if self.textures.len() <= 1 || index >= self.textures.len() {
            return false;
        }
        self.textures.remove(index);
        true
    }

    /// Add a property with all values set to zero
    ///
    /// # Returns
    /// `false` if the name is empty or already present
    pub fn add_property(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || name.contains('\0') || self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, [0.0; PROPERTY_VALUE_COUNT]);
        true
    }

    /// Remove a property, keeping the order of the others
    ///
    /// # Returns
    /// The removed values if the property existed
    pub fn remove_property(&mut self, name: &str) -> Option<ParamValues> {
        self.entries.shift_remove(name)
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&ParamValues> {
        self.entries.get(name)
    }

    /// Set one value of a property
    ///
    /// # Returns
    /// `false` if the property does not exist or `index` is out of range
    pub fn set_property_value(&mut self, name: &str, index: usize, value: f32) -> bool {
        match self.entries.get_mut(name).and_then(|values| values.get_mut(index)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Set the material hash from hex text, with or without a `0x` prefix
    ///
    /// # Returns
    /// `false` (leaving the hash unchanged) if the text is not a 32-bit hex value
    pub fn set_material_hash_hex(&mut self, text: &str) -> bool {
        let digits = text.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        match u32::from_str_radix(digits, 16) {
            Ok(hash) => {
                self.set_material_hash(hash);
                true
            }
            Err(_) => false,
        }
    }

    /// First three values of a property as an RGB preview colour
    #[must_use]
    pub fn property_color(&self, name: &str) -> Option<[u8; 3]> {
        self.entries
            .get(name)
            .map(|values| [0, 1, 2].map(|i| float_to_channel(values[i])))
    }

    /// Set the cull mode from its label
    ///
    /// # Returns
    /// `false` (leaving the value unchanged) if the label is unknown
    pub fn set_cull_mode_by_label(&mut self, label: &str) -> bool {
        set_by_label(&CULL_MODES, label, &mut self.cull_mode)
    }

    /// Set the alpha function from its label
    pub fn set_alpha_function_by_label(&mut self, label: &str) -> bool {
        set_by_label(&ALPHA_FUNCTIONS, label, &mut self.alpha_function)
    }
}

impl MatTexture {
    pub fn set_map_mode_by_label(&mut self, label: &str) -> bool {
        set_by_label(&MAP_MODES, label, &mut self.map_mode)
    }

    pub fn set_wrap_mode_s_by_label(&mut self, label: &str) -> bool {
        set_by_label(&WRAP_MODES, label, &mut self.wrap_mode_s)
    }

    pub fn set_wrap_mode_t_by_label(&mut self, label: &str) -> bool {
        set_by_label(&WRAP_MODES, label, &mut self.wrap_mode_t)
    }

    pub fn set_min_filter_by_label(&mut self, label: &str) -> bool {
        set_by_label(&MIN_FILTERS, label, &mut self.min_filter)
    }

    pub fn set_mag_filter_by_label(&mut self, label: &str) -> bool {
        set_by_label(&MAG_FILTERS, label, &mut self.mag_filter)
    }

    pub fn set_mip_detail_by_label(&mut self, label: &str) -> bool {
        set_by_label(&MIP_DETAILS, label, &mut self.mip_detail)
    }
}

// ============================================================================
// Material list editing
// ============================================================================

/// Append the default material to a polygon's list
///
/// # Returns
/// `false` if the polygon already has the maximum number of materials
pub fn add_default_material(materials: &mut Vec<Material>) -> bool {
    if materials.len() >= MAX_MATERIALS {
        return false;
    }
    materials.push(Material::default());
    true
}

/// Remove the material at `index`
///
/// # Returns
/// The removed material, or `None` if the index is invalid or it is the last one
pub fn remove_material(materials: &mut Vec<Material>, index: usize) -> Option<Material> {
    if materials.len() <= 1 || index >= materials.len() {
        return None;
    }
    Some(materials.remove(index))
}

fn set_by_label<T: TryFrom<u32>>(table: &LabelTable, label: &str, field: &mut T) -> bool {
    match table.code(label).and_then(|code| T::try_from(code).ok()) {
        Some(value) => {
            *field = value;
            true
        }
        None => false,
    }
}

fn float_to_channel(value: f32) -> u8 {
    // NaN maps to 0
    (value * 255.0).clamp(0.0, 255.0) as u8
}

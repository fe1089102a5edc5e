//! Known material parameter catalog
//!
//! Describes the named properties a material may carry: what each of the
//! four values means and the range an editor slider should cover. The
//! catalog is loaded from a JSON list:
//!
//! ```json
//! [
//!   {
//!     "name": "NU_fresnelColor",
//!     "description": "Fresnel colour",
//!     "param_labels": ["R", "G", "B", "Intensity"],
//!     "max_values": [1.0, 1.0, 1.0, 1.0]
//!   }
//! ]
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formats::nud::{Material, PROPERTY_VALUE_COUNT};

/// Slider maximum used when a parameter has no catalog entry
pub const DEFAULT_MAX_VALUE: f32 = 1.0;

/// Description of one named material property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatParam {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub param_descriptions: [String; PROPERTY_VALUE_COUNT],
    /// Short label per value; empty falls back to `ParamN`
    #[serde(default)]
    pub param_labels: [String; PROPERTY_VALUE_COUNT],
    #[serde(default = "default_max_values")]
    pub max_values: [f32; PROPERTY_VALUE_COUNT],
    #[serde(default = "default_use_track_bar")]
    pub use_track_bar: bool,
}

fn default_max_values() -> [f32; PROPERTY_VALUE_COUNT] {
    [DEFAULT_MAX_VALUE; PROPERTY_VALUE_COUNT]
}

fn default_use_track_bar() -> bool {
    true
}

impl MatParam {
    fn builtin(name: &str, description: &str, labels: [&str; 4], max_values: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            param_descriptions: Default::default(),
            param_labels: labels.map(str::to_string),
            max_values,
            use_track_bar: true,
        }
    }
}

/// Catalog of known parameters, in definition order
#[derive(Debug, Clone, Default)]
pub struct ParamCatalog {
    params: IndexMap<String, MatParam>,
}

impl ParamCatalog {
    /// Parse a catalog from a JSON list of parameters.
    ///
    /// Later entries with the same name replace earlier ones.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Vec<MatParam> = serde_json::from_str(json)?;
        Ok(params.into_iter().collect())
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded {} material parameters from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// The parameters of the default material template, plus a few common ones
    #[must_use]
    pub fn builtin() -> Self {
        let mut hash = MatParam::builtin(
            "NU_materialHash",
            "Material hash (hex)",
            ["Hash", "", "", ""],
            [1.0; 4],
        );
        hash.use_track_bar = false;

        [
            MatParam::builtin(
                "NU_colorSamplerUV",
                "Diffuse UV transform",
                ["Scale U", "Scale V", "Offset U", "Offset V"],
                [5.0, 5.0, 1.0, 1.0],
            ),
            MatParam::builtin(
                "NU_fresnelColor",
                "Fresnel colour",
                ["R", "G", "B", "Intensity"],
                [1.0; 4],
            ),
            MatParam::builtin(
                "NU_blinkColor",
                "Blink colour",
                ["R", "G", "B", "Intensity"],
                [1.0; 4],
            ),
            MatParam::builtin(
                "NU_aoMinGain",
                "Minimum ambient occlusion",
                ["R", "G", "B", ""],
                [1.0; 4],
            ),
            MatParam::builtin(
                "NU_lightMapColorOffset",
                "Light map colour offset",
                ["R", "G", "B", ""],
                [1.0; 4],
            ),
            MatParam::builtin(
                "NU_fresnelParams",
                "Fresnel exponent",
                ["Exponent", "", "", ""],
                [10.0, 1.0, 1.0, 1.0],
            ),
            MatParam::builtin(
                "NU_alphaBlendParams",
                "Alpha blending",
                ["", "", "", ""],
                [1.0; 4],
            ),
            MatParam::builtin(
                "NU_specularColor",
                "Specular colour",
                ["R", "G", "B", "Intensity"],
                [1.0; 4],
            ),
            MatParam::builtin(
                "NU_specularParams",
                "Specular highlight",
                ["", "Exponent", "", ""],
                [1.0, 300.0, 1.0, 1.0],
            ),
            MatParam::builtin(
                "NU_reflectionColor",
                "Reflection colour",
                ["R", "G", "B", "Intensity"],
                [1.0; 4],
            ),
            hash,
        ]
        .into_iter()
        .collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MatParam> {
        self.params.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Slider maximum for value `index` of a parameter, 1.0 when unknown
    #[must_use]
    pub fn max_value(&self, name: &str, index: usize) -> f32 {
        self.get(name)
            .and_then(|param| param.max_values.get(index).copied())
            .unwrap_or(DEFAULT_MAX_VALUE)
    }

    /// Display label for value `index` of a parameter
    #[must_use]
    pub fn label(&self, name: &str, index: usize) -> String {
        self.get(name)
            .and_then(|param| param.param_labels.get(index))
            .filter(|label| !label.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Param{}", index + 1))
    }

    /// Parameter names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Add a catalogued property to a material with all values zero
    ///
    /// # Returns
    /// `false` if the material already has the property
    ///
    /// # Errors
    /// Returns [`Error::UnknownParameter`] if the name is not in the catalog.
    pub fn add_known_property(&self, material: &mut Material, name: &str) -> Result<bool> {
        if !self.contains(name) {
            return Err(Error::UnknownParameter(name.to_string()));
        }
        Ok(material.add_property(name))
    }
}

impl FromIterator<MatParam> for ParamCatalog {
    fn from_iter<I: IntoIterator<Item = MatParam>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|param| (param.name.clone(), param))
                .collect(),
        }
    }
}

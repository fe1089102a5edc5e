//! Material presets (`.nmt`)
//!
//! A preset is a material block on its own: offset header, materials, then
//! the string block. Presets carry shading only, so applying one keeps the
//! texture bindings of the material it replaces.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::formats::nud::{
    CodecOptions, DecodedMaterials, MAX_MATERIALS, Material, decode_materials, encode_materials,
};

/// File extension of material presets
pub const PRESET_EXTENSION: &str = "nmt";

/// Read a preset with default codec options
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<Vec<Material>> {
    Ok(load_preset_with(path, &CodecOptions::default())?.materials)
}

/// Read a preset, keeping the decode warnings
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
pub fn load_preset_with<P: AsRef<Path>>(
    path: P,
    options: &CodecOptions,
) -> Result<DecodedMaterials> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let decoded = decode_materials(&data, 0, options)?;
    tracing::info!(
        "Loaded {} materials from {} ({} warnings)",
        decoded.materials.len(),
        path.display(),
        decoded.warnings.len()
    );
    Ok(decoded)
}

/// Write a preset with default codec options
///
/// # Errors
/// Returns an error if the materials cannot be encoded or the file cannot be written.
pub fn save_preset<P: AsRef<Path>>(path: P, materials: &[Material]) -> Result<()> {
    save_preset_with(path, materials, &CodecOptions::default())
}

/// Write a preset
///
/// # Errors
/// Returns an error if the materials cannot be encoded or the file cannot be written.
pub fn save_preset_with<P: AsRef<Path>>(
    path: P,
    materials: &[Material],
    options: &CodecOptions,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_materials(materials, options)?;
    fs::write(path, &bytes)?;
    tracing::info!(
        "Saved {} materials to {} ({} bytes)",
        materials.len(),
        path.display(),
        bytes.len()
    );
    Ok(())
}

/// Replace a polygon's materials with a preset's, keeping the old texture ids.
///
/// Texture hashes of the previous first material are copied onto the new
/// first material by slot role.
///
/// # Returns
/// Number of texture hashes carried over
///
/// # Errors
/// Returns [`Error::MaterialCountOutOfRange`] if the preset holds no materials
/// or more than a polygon can hold. `target` is left unchanged.
pub fn apply_preset(target: &mut Vec<Material>, preset: Vec<Material>) -> Result<usize> {
    if preset.is_empty() || preset.len() > MAX_MATERIALS {
        return Err(Error::MaterialCountOutOfRange {
            count: preset.len(),
            max: MAX_MATERIALS,
        });
    }

    let original = target.first().cloned();
    *target = preset;

    let copied = match (original, target.first_mut()) {
        (Some(original), Some(first)) => first.copy_texture_ids(&original),
        _ => 0,
    };
    tracing::debug!("Applied preset: {} materials, {} texture ids kept", target.len(), copied);
    Ok(copied)
}

/// A directory of presets
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    root: PathBuf,
}

impl PresetLibrary {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Platform data directory for presets (`<data>/matforge/materials`)
    #[must_use]
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("matforge").join("materials"))
    }

    /// Open the library in the platform data directory
    ///
    /// # Errors
    /// Returns [`Error::PresetLibraryNotFound`] if the platform has no data directory.
    pub fn open_default() -> Result<Self> {
        Self::default_root()
            .map(Self::new)
            .ok_or(Error::PresetLibraryNotFound)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All presets below the root, sorted. A missing root is an empty library.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be traversed.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut presets = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(PRESET_EXTENSION))
            {
                presets.push(path.to_path_buf());
            }
        }

        presets.sort();
        Ok(presets)
    }

    /// Path of a preset by name, relative to the root. The extension is optional.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PRESET_EXTENSION))
        {
            path
        } else {
            self.root.join(format!("{name}.{PRESET_EXTENSION}"))
        }
    }

    /// Load a preset by name
    ///
    /// # Errors
    /// Returns [`Error::PresetNotFound`] if no such preset exists, or a decode error.
    pub fn load(&self, name: &str) -> Result<Vec<Material>> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(Error::PresetNotFound { path });
        }
        load_preset(path)
    }

    /// Save a preset by name, creating directories as needed
    ///
    /// # Errors
    /// Returns an error if the materials cannot be encoded or written.
    pub fn save(&self, name: &str, materials: &[Material]) -> Result<PathBuf> {
        let path = self.path_for(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_preset(&path, materials)?;
        Ok(path)
    }
}

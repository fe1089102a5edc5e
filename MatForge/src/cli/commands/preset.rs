//! CLI commands for material presets

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use crate::catalog::ParamCatalog;
use crate::formats::nud::describe::{MaterialSummary, describe_materials};
use crate::formats::nud::{
    CodecOptions, MAX_MATERIALS, Material, add_default_material, decode_materials,
    encode_materials,
};
use crate::preset::{apply_preset, load_preset_with, save_preset_with};

/// Print the materials of a preset
pub fn info(path: &Path, catalog: Option<&Path>, options: &CodecOptions) -> anyhow::Result<()> {
    let decoded = load_preset_with(path, options)?;
    let catalog = match catalog {
        Some(catalog) => ParamCatalog::load(catalog)?,
        None => ParamCatalog::builtin(),
    };

    println!("Preset: {}", path.display());
    println!("Materials: {}", decoded.materials.len());

    for summary in describe_materials(&decoded.materials) {
        println!();
        print_material(&summary, &catalog);
    }

    if !decoded.warnings.is_empty() {
        println!();
        println!("Warnings ({}):", decoded.warnings.len());
        for warning in &decoded.warnings {
            println!("  {warning}");
        }
    }

    Ok(())
}

fn print_material(summary: &MaterialSummary, catalog: &ParamCatalog) {
    println!("Material {}: flags {} ({})", summary.index, summary.flags, summary.layout);
    println!("  Cull mode:      {}", summary.cull_mode);
    println!(
        "  Alpha test:     {}",
        if summary.alpha_test { "enabled" } else { "disabled" }
    );
    println!("  Alpha function: {}", summary.alpha_function);
    println!("  Ref alpha:      {}", summary.ref_alpha);
    println!("  Blend factors:  src {} / dst {}", summary.src_factor, summary.dst_factor);
    println!("  Z offset:       {}", summary.z_buffer_offset);
    if let Some(hash) = &summary.material_hash {
        println!("  Material hash:  {hash}");
    }

    println!("  Textures ({}):", summary.textures.len());
    for (i, texture) in summary.textures.iter().enumerate() {
        let dummy = texture
            .dummy
            .map(|name| format!(" [{name}]"))
            .unwrap_or_default();
        println!(
            "    {i}: {:<10} {}{dummy}",
            texture.slot.unwrap_or("(extra)"),
            texture.hash
        );
        println!(
            "       map {}, wrap {} / {}",
            texture.map_mode, texture.wrap_mode_s, texture.wrap_mode_t
        );
        println!(
            "       min {}, mag {}, mip {}",
            texture.min_filter, texture.mag_filter, texture.mip_detail
        );
    }

    println!("  Properties ({}):", summary.properties.len());
    for (name, values) in &summary.properties {
        let labelled: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, value)| format!("{}={value}", catalog.label(name, i)))
            .collect();
        println!("    {name}: {}", labelled.join(" "));
    }
}

/// Decode and re-encode each preset and compare the bytes
pub fn verify(paths: &[PathBuf], options: &CodecOptions) -> anyhow::Result<()> {
    let mut failed = 0;

    for path in paths {
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let result = decode_materials(&data, 0, options)
            .and_then(|decoded| Ok((encode_materials(&decoded.materials, options)?, decoded)));

        match result {
            Ok((encoded, decoded)) if encoded == data => {
                println!("OK       {} ({} materials)", path.display(), decoded.materials.len());
                for warning in &decoded.warnings {
                    println!("         warning: {warning}");
                }
            }
            Ok((encoded, _)) => {
                failed += 1;
                let at = encoded
                    .iter()
                    .zip(&data)
                    .position(|(a, b)| a != b)
                    .unwrap_or_else(|| encoded.len().min(data.len()));
                println!(
                    "DIFFERS  {} (first difference at 0x{at:X}, {} -> {} bytes)",
                    path.display(),
                    data.len(),
                    encoded.len()
                );
            }
            Err(e) => {
                failed += 1;
                println!("FAILED   {}: {e}", path.display());
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} presets failed verification", paths.len());
    }
    Ok(())
}

/// Write a preset of default materials
pub fn create(output: &Path, count: usize, options: &CodecOptions) -> anyhow::Result<()> {
    if count == 0 || count > MAX_MATERIALS {
        bail!("A preset holds 1 to {MAX_MATERIALS} materials, got {count}");
    }

    let mut materials = vec![Material::default()];
    while materials.len() < count && add_default_material(&mut materials) {}

    save_preset_with(output, &materials, options)?;
    println!("Created {} with {} material(s)", output.display(), materials.len());
    Ok(())
}

/// Apply a preset onto a target preset file
pub fn apply(
    preset: &Path,
    target: &Path,
    output: Option<&Path>,
    options: &CodecOptions,
) -> anyhow::Result<()> {
    let preset_materials = load_preset_with(preset, options)?.materials;
    let mut target_materials = load_preset_with(target, options)?.materials;

    let kept = apply_preset(&mut target_materials, preset_materials)?;

    let output = output.unwrap_or(target);
    save_preset_with(output, &target_materials, options)?;
    println!(
        "Applied {} -> {} ({kept} texture ids kept)",
        preset.display(),
        output.display()
    );
    Ok(())
}

/// Export the materials of a preset as JSON
pub fn export(path: &Path, output: Option<&Path>, options: &CodecOptions) -> anyhow::Result<()> {
    let decoded = load_preset_with(path, options)?;
    let json = serde_json::to_string_pretty(&describe_materials(&decoded.materials))?;

    if let Some(output) = output {
        fs::write(output, json)?;
        println!("Exported {} materials to {}", decoded.materials.len(), output.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

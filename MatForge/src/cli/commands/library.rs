//! CLI commands for the preset library and parameter catalog

use std::path::Path;

use crate::catalog::ParamCatalog;
use crate::preset::PresetLibrary;

/// List presets in the library
pub fn list(dir: Option<&Path>) -> anyhow::Result<()> {
    let library = match dir {
        Some(dir) => PresetLibrary::new(dir),
        None => PresetLibrary::open_default()?,
    };

    let presets = library.list()?;
    if presets.is_empty() {
        println!("No presets found in {}", library.root().display());
        return Ok(());
    }

    println!("{} presets in {}:", presets.len(), library.root().display());
    for path in &presets {
        let name = path.strip_prefix(library.root()).unwrap_or(path);
        println!("  {}", name.display());
    }
    Ok(())
}

/// List known material parameters
pub fn params(catalog: Option<&Path>) -> anyhow::Result<()> {
    let catalog = match catalog {
        Some(path) => ParamCatalog::load(path)?,
        None => ParamCatalog::builtin(),
    };

    for name in catalog.names() {
        let labels: Vec<String> = (0..4).map(|i| catalog.label(name, i)).collect();
        let description = catalog
            .get(name)
            .map(|param| param.description.as_str())
            .unwrap_or_default();
        println!("{name:<24} [{}]  {description}", labels.join(", "));
    }
    Ok(())
}

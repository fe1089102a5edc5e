use clap::Subcommand;
use std::path::PathBuf;

mod execute;
pub mod library;
pub mod preset;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the materials of a preset
    Info {
        /// Preset file (.nmt)
        path: PathBuf,

        /// Parameter catalog (JSON) used to label property values
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Decode and re-encode presets, checking the bytes are unchanged
    Verify {
        /// Preset file(s)
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Write a preset made of default materials
    New {
        /// Output preset file
        output: PathBuf,

        /// Number of materials (1 or 2)
        #[arg(short, long, default_value = "1")]
        materials: usize,
    },

    /// Apply a preset onto another, keeping the target's texture ids
    Apply {
        /// Preset to apply
        preset: PathBuf,

        /// Preset whose materials are replaced
        target: PathBuf,

        /// Output file (overwrites the target if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the materials of a preset as JSON
    Export {
        /// Preset file
        path: PathBuf,

        /// Output JSON file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List presets in the preset library
    List {
        /// Library directory (defaults to the platform data directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List known material parameters
    Params {
        /// Parameter catalog (JSON); the built-in catalog is used if omitted
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

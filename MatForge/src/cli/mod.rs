//! MatForge CLI - Command-line interface for NUD material presets

pub mod commands;

use clap::Parser;
use commands::Commands;

use crate::formats::nud::{CodecOptions, Endian};

#[derive(Parser)]
#[command(name = "matforge")]
#[command(about = "MatForge: NUD material preset tools", long_about = None)]
struct Cli {
    /// Read and write material data as big endian (console model files)
    #[arg(long, global = true)]
    big_endian: bool,

    /// Fail on structural anomalies instead of warning about them
    #[arg(long, global = true)]
    strict: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn codec_options(&self) -> CodecOptions {
        let endian = if self.big_endian {
            Endian::Big
        } else {
            Endian::Little
        };
        CodecOptions::new()
            .with_endian(endian)
            .with_strict(self.strict)
    }
}

/// Run the MatForge CLI
///
/// # Errors
/// Returns an error if the selected command fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging on stderr so exported JSON stays clean
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute(&cli.codec_options())?;

    Ok(())
}

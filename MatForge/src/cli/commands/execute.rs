//! Command execution implementations

use super::Commands;
use super::{library, preset};
use crate::formats::nud::CodecOptions;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, options: &CodecOptions) -> anyhow::Result<()> {
        match self {
            Commands::Info { path, catalog } => preset::info(path, catalog.as_deref(), options),
            Commands::Verify { paths } => preset::verify(paths, options),
            Commands::New { output, materials } => preset::create(output, *materials, options),
            Commands::Apply {
                preset: source,
                target,
                output,
            } => preset::apply(source, target, output.as_deref(), options),
            Commands::Export { path, output } => preset::export(path, output.as_deref(), options),
            Commands::List { dir } => library::list(dir.as_deref()),
            Commands::Params { catalog } => library::params(catalog.as_deref()),
        }
    }
}

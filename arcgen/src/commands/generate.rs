use std::path::PathBuf;

use arcgen_manifest::ArcgenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to arcgen.toml (defaults to ./arcgen.toml)
    #[arg(short, long, default_value = "arcgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [class].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let arcgen_toml = ArcgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &arcgen_toml,
            ops::generate::GenerateOptions {
                output_dir: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

use std::path::PathBuf;

use arcgen_manifest::ArcgenToml;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to arcgen.toml (defaults to ./arcgen.toml)
    #[arg(short, long, default_value = "arcgen.toml")]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let arcgen_toml = ArcgenToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(&arcgen_toml)?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}

use std::path::PathBuf;

use arcgen_core::{File, WriteResult};
use arcgen_manifest::starter_manifest;
use clap::Args;
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create arcgen.toml in
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Qualified name of the generated class
    #[arg(short, long, default_value = "R")]
    pub class: String,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join("arcgen.toml");
        let result = File::new(&path, starter_manifest(&self.class))
            .if_missing()
            .write()
            .wrap_err("Failed to create arcgen.toml")?;

        match result {
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", path.display());
            }
            WriteResult::Written | WriteResult::Unchanged => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  edit the roots under [resources] to point at your assets");
                println!("  arcgen generate");
            }
        }
        Ok(())
    }
}

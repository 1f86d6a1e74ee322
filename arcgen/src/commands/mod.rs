mod check;
mod completions;
mod convert;
mod generate;
mod init;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for arcgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "arcgen")]
#[command(version)]
#[command(about = "Generate typed Java resource classes from mod assets")]
pub(crate) struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter arcgen.toml
    Init(InitCommand),

    /// Generate the resource class from arcgen.toml
    Generate(GenerateCommand),

    /// Validate arcgen.toml and scan asset roots without writing
    Check(CheckCommand),

    /// Convert a name between naming rules
    Convert(ConvertCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["arcgen", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

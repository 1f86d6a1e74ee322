use arcgen_core::NameRule;
use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct ConvertCommand {
    /// Name to convert
    pub name: String,

    /// Naming rule the name is written in
    #[arg(long, default_value = "kebab")]
    pub from: NameRule,

    /// Naming rule to convert to
    #[arg(long, default_value = "camel")]
    pub to: NameRule,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", NameRule::convert(&self.name, self.from, self.to));
        Ok(())
    }
}

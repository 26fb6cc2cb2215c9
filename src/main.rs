use clap::Parser;
use miette::Result;

use genesis::cli::{Cli, Commands};
use genesis::manifest::Manifest;
use genesis::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Image(args) => {
            let manifest = Manifest::discover(cli.config.as_deref())?;
            genesis::cli::image::run(args, &manifest, &printer)?
        }
        Commands::Grass(args) => {
            let manifest = Manifest::discover(cli.config.as_deref())?;
            genesis::cli::grass::run(args, &manifest, &printer)?
        }
        Commands::Validate(args) => genesis::cli::validate::run(args, &printer)?,
        Commands::Init(args) => genesis::cli::init::run(args, &printer)?,
        Commands::Completions(args) => genesis::cli::completions::run(args)?,
    }

    Ok(())
}

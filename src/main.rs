use clap::Parser;
use identicon::cli::{Cli, Commands};
use identicon::logger::configure_logger;
use identicon::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_logger(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => identicon::cli::generate::run(args, &printer)?,
        Commands::Inspect(args) => identicon::cli::inspect::run(args)?,
        Commands::Init(args) => identicon::cli::init::run(args, &printer)?,
        Commands::Completions(args) => identicon::cli::completions::run(args)?,
    }

    Ok(())
}

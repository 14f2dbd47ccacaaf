pub mod completions;
pub mod generate;
pub mod init;
pub mod inspect;

use clap::{ArgAction, Parser, Subcommand};

/// identicon - Deterministic avatars from text
#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render identicons to PNG files
    Generate(generate::GenerateArgs),

    /// Show the digest, colour and grid behind an identicon
    Inspect(inspect::InspectArgs),

    /// Create a starter identicon.yaml manifest
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

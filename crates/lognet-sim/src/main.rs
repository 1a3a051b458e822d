use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    analyze::{self, AnalyzeArgs},
    reference::{self, ReferenceArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "lognet-sim", about = "Maximum flow analysis of tiered logistics networks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a network and emit the analysis as JSON.
    Analyze(AnalyzeArgs),
    /// Write the built-in reference network as YAML.
    Reference(ReferenceArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => analyze::run(&args),
        Command::Reference(args) => reference::run(&args),
    }
}

//! lcmvec CLI - Generate LCM vector type bundles from a schema description
//!
//! Given a title phrase and an ordered field list (or a `vectors.toml` schema
//! file), emits the C++ vector type, its LCM translator, and the wire-schema
//! definition as one consistent artifact set.

use clap::{Parser, Subcommand};
use commands::generate::GenerateCommand;

mod commands;
mod error;

/// lcmvec CLI - Generate LCM vector types, translators, and wire schemas
#[derive(Debug, Parser)]
#[command(name = "lcmvec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the artifact bundle from a schema description
    #[command(name = "generate")]
    Generate(GenerateCommand),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(cmd) => cmd.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

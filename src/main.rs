//! CLI entry point for the camouflage pattern generator

use camogen::io::cli::Cli;
use clap::Parser;

fn main() -> camogen::Result<()> {
    let cli = Cli::parse();
    cli.execute()
}

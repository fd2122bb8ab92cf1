//! Rigup CLI - install catalog software on remote Linux hosts over SSH

use clap::Parser;

use rigup::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

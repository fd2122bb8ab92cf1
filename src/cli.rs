//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Install catalog software on a remote Linux host over SSH
#[derive(Parser)]
#[command(
    name = "rigup",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (NO_COLOR is also honored)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install software on a remote host
    Install(commands::install::InstallArgs),

    /// Run an installation described by a JSON request (file or stdin)
    Batch(commands::batch::BatchArgs),

    /// List the software catalog
    List,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet);
        match command {
            Command::Install(args) => commands::install::run(&ctx, args, json),
            Command::Batch(args) => commands::batch::run(&ctx, args, json),
            Command::List => commands::list::run(&ctx, json),
        }
    }
}

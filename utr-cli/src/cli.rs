pub mod extract;

use clap::{Parser, Subcommand};

#[derive(Subcommand)]
pub enum Command {
    /// Extract 5' and 3' UTR sequences from an annotated record.
    Extract(extract::Args),
}

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

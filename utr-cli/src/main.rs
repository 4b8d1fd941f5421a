use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod commands;
mod fasta;
mod fs;
mod record;

use std::io;

use clap::Parser;

use self::{
    cli::{Cli, Command},
    commands::extract,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => extract(args)?,
    }

    Ok(())
}

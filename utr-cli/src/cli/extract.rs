use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct Args {
    /// Output path prefix for the two FASTA artifacts
    /// (`{prefix}_5UTR.fasta` and `{prefix}_3UTR.fasta`).
    ///
    /// By default, the input filename without its extension.
    #[arg(long)]
    pub output_prefix: Option<String>,

    /// Input annotated record (GenBank flat file, optionally gzipped).
    pub src: PathBuf,
}

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use noodles::fasta;
use utr_core::utr::UtrResult;

const LINE_BASE_COUNT: usize = 60;

/// Writes `{output_prefix}_5UTR.fasta` and `{output_prefix}_3UTR.fasta`,
/// each a single-record FASTA.
pub fn save_utrs(result: &UtrResult, id: &str, output_prefix: &str) -> io::Result<()> {
    let (five_prime, three_prime) = result.utrs();

    write_utr(
        PathBuf::from(format!("{output_prefix}_5UTR.fasta")),
        &format!("{id}_5UTR"),
        &format!("5' UTR from {id}"),
        five_prime,
    )?;

    write_utr(
        PathBuf::from(format!("{output_prefix}_3UTR.fasta")),
        &format!("{id}_3UTR"),
        &format!("3' UTR from {id}"),
        three_prime,
    )?;

    Ok(())
}

fn write_utr(dst: PathBuf, name: &str, description: &str, sequence: &[u8]) -> io::Result<()> {
    let file = File::create(dst)?;
    let mut writer = fasta_writer(BufWriter::new(file));
    write_record(&mut writer, name, description, sequence)
}

fn fasta_writer<W>(inner: W) -> fasta::io::Writer<W>
where
    W: Write,
{
    fasta::io::writer::Builder::default()
        .set_line_base_count(LINE_BASE_COUNT)
        .build_from_writer(inner)
}

fn write_record<W>(
    writer: &mut fasta::io::Writer<W>,
    name: &str,
    description: &str,
    sequence: &[u8],
) -> io::Result<()>
where
    W: Write,
{
    let definition = fasta::record::Definition::new(name, Some(description.into()));
    let sequence = fasta::record::Sequence::from(sequence.to_vec());
    writer.write_record(&fasta::Record::new(definition, sequence))
}

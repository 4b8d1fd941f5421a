use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use thiserror::Error;
use tracing::info;
use utr_core::{
    features::Segment,
    record::Record,
    utr::{self, UtrResult},
};

use crate::{
    cli,
    fasta, fs,
    record::{self, ReadRecordError},
};

pub fn extract(args: cli::extract::Args) -> Result<(), ExtractError> {
    let src = &args.src;

    info!(src = ?src, "reading record");

    let record = read_record(src)?;

    info!(
        sequence_length = record.len(),
        feature_count = record.features.len(),
        "read record"
    );

    let result = utr::extract(&record)?;

    let id = record.id.as_deref().unwrap_or("record");
    let output_prefix = output_prefix(&args)?;

    info!(output_prefix = output_prefix.as_str(), "writing FASTA artifacts");

    fasta::save_utrs(&result, id, &output_prefix)?;

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);
    write_summary(&mut writer, id, &result)?;

    info!("done");

    Ok(())
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid record")]
    InvalidRecord(#[from] ReadRecordError),
    #[error("extraction failed")]
    Extract(#[from] utr::ExtractError),
}

fn read_record<P>(src: P) -> Result<Record, ReadRecordError>
where
    P: AsRef<Path>,
{
    let reader = fs::open(src)?;
    record::read_record(reader)
}

fn output_prefix(args: &cli::extract::Args) -> io::Result<String> {
    if let Some(output_prefix) = &args.output_prefix {
        return Ok(output_prefix.clone());
    }

    args.src
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(String::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid input filename"))
}

fn write_summary<W>(writer: &mut W, id: &str, result: &UtrResult) -> io::Result<()>
where
    W: Write,
{
    let details = result.details();

    writeln!(writer, "record: {id}")?;
    writeln!(writer, "5' UTR length: {}", details.five_prime_length)?;
    writeln!(writer, "3' UTR length: {}", details.three_prime_length)?;
    writeln!(
        writer,
        "coding region: {}..{}",
        details.envelope.start, details.envelope.end
    )?;

    write_segments(writer, "5' segments", details.five_segments)?;
    write_segments(writer, "3' segments", details.three_segments)?;
    write_segments(
        writer,
        "coding-overlapping segments",
        details.coding_overlapping,
    )?;

    for (label, spans) in details.segment_groups {
        write!(writer, "{label}:")?;

        for span in spans {
            write!(writer, " {}..{}", span.start, span.end)?;
        }

        writeln!(writer)?;
    }

    Ok(())
}

fn write_segments<W>(writer: &mut W, name: &str, segments: &[Segment]) -> io::Result<()>
where
    W: Write,
{
    if segments.is_empty() {
        return Ok(());
    }

    write!(writer, "{name}:")?;

    for segment in segments {
        let span = segment.span;

        match &segment.label {
            Some(label) => write!(writer, " {label}={}..{}", span.start, span.end)?,
            None => write!(writer, " {}..{}", span.start, span.end)?,
        }
    }

    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use utr_core::record::{Feature, FeatureKind};

    use super::*;

    #[test]
    fn test_write_summary() -> Result<(), Box<dyn std::error::Error>> {
        let record = Record::new(
            Some(String::from("R1")),
            b"aaaaaaccccccccccccgggggg".to_vec(),
            vec![
                Feature::new(FeatureKind::Coding, 6, 18),
                Feature::with_label(FeatureKind::Segment, 0, 6, "segment_1"),
                Feature::with_label(FeatureKind::Segment, 18, 24, "segment_2"),
            ],
        );

        let result = utr::extract(&record)?;

        let mut buf = Vec::new();
        write_summary(&mut buf, "R1", &result)?;

        let expected = "\
record: R1
5' UTR length: 6
3' UTR length: 6
coding region: 6..18
5' segments: segment_1=0..6
3' segments: segment_2=18..24
segment_1: 0..6
segment_2: 18..24
";

        assert_eq!(String::from_utf8(buf)?, expected);

        Ok(())
    }
}

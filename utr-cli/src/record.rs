use std::io::{self, Read};

use gb_io::reader::SeqReader;
use thiserror::Error;
use tracing::warn;
use utr_core::record::{Feature, FeatureKind, Record};

#[derive(Debug, Error)]
pub enum ReadRecordError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid GenBank record")]
    Parse(#[from] gb_io::reader::GbParserError),
    #[error("no record in input")]
    Empty,
}

/// Reads the first record in the input. Any following records are ignored.
pub fn read_record<R>(reader: R) -> Result<Record, ReadRecordError>
where
    R: Read,
{
    let mut records = SeqReader::new(reader);
    let seq = records.next().ok_or(ReadRecordError::Empty)??;
    Ok(convert(seq))
}

fn convert(seq: gb_io::seq::Seq) -> Record {
    let id = seq.accession.clone().or_else(|| seq.name.clone());

    let mut features = Vec::with_capacity(seq.features.len());

    for feature in &seq.features {
        let Ok((start, end)) = feature.location.find_bounds() else {
            warn!(kind = ?feature.kind, "skipping feature with unresolvable location");
            continue;
        };

        features.push(convert_feature(feature, start, end));
    }

    Record::new(id, seq.seq, features)
}

fn convert_feature(feature: &gb_io::seq::Feature, start: i64, end: i64) -> Feature {
    use std::borrow::Cow as Kind;

    if feature.kind == Kind::from("CDS") {
        return Feature::new(FeatureKind::Coding, start, end);
    }

    if feature.kind == Kind::from("misc_feature") {
        let label = feature
            .qualifier_values("note".into())
            .next()
            .and_then(segment_label);

        if let Some(label) = label {
            return Feature::with_label(FeatureKind::Segment, start, end, label);
        }
    }

    Feature::new(FeatureKind::Other, start, end)
}

// "locus segment 7" (any case) => "segment_7"
fn segment_label(note: &str) -> Option<String> {
    let note = note.to_lowercase();
    let (_, rest) = note.split_once("locus segment")?;

    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        None
    } else {
        Some(format!("segment_{digits}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_record() -> Result<(), ReadRecordError> {
        const DATA: &[u8] = b"\
LOCUS       TEST0001                24 bp    DNA     linear   VRL 01-JAN-2024
FEATURES             Location/Qualifiers
     source          1..24
     misc_feature    1..6
                     /note=\"locus segment 1\"
     CDS             7..18
ORIGIN
        1 aaaaaacccc ccccccccgg gggg
//
";

        let record = read_record(DATA)?;

        assert_eq!(record.id.as_deref(), Some("TEST0001"));
        assert_eq!(record.sequence, b"aaaaaaccccccccccccgggggg");

        let expected = [
            Feature::new(FeatureKind::Other, 0, 24),
            Feature::with_label(FeatureKind::Segment, 0, 6, "segment_1"),
            Feature::new(FeatureKind::Coding, 6, 18),
        ];

        assert_eq!(record.features, expected);

        Ok(())
    }

    #[test]
    fn test_read_record_with_empty_input() {
        assert!(matches!(
            read_record(&b""[..]),
            Err(ReadRecordError::Empty)
        ));
    }

    #[test]
    fn test_segment_label() {
        assert_eq!(
            segment_label("Locus Segment 2 (gene A)").as_deref(),
            Some("segment_2")
        );
        assert_eq!(segment_label("locus segment 12").as_deref(), Some("segment_12"));
        assert!(segment_label("locus segment").is_none());
        assert!(segment_label("intergenic spacer").is_none());
    }
}

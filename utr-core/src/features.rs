mod span;

use indexmap::IndexMap;
use thiserror::Error;

pub use self::span::Span;

use crate::record::{FeatureKind, Record};

#[derive(Debug, Error, Eq, PartialEq)]
pub enum MalformedFeatureError {
    #[error("negative feature coordinates: {start}..{end}")]
    Negative { start: i64, end: i64 },
    #[error("inverted feature coordinates: {start}..{end}")]
    Inverted { start: i64, end: i64 },
    #[error("feature end {end} is out of range for a sequence of length {sequence_length}")]
    OutOfRange { end: i64, sequence_length: usize },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Segment {
    pub label: Option<String>,
    pub span: Span,
}

impl Segment {
    pub fn new(label: Option<String>, span: Span) -> Self {
        Self { label, span }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FeatureIndex {
    coding: Vec<Span>,
    segments: Vec<Segment>,
}

impl FeatureIndex {
    /// Partitions a record's features by kind, preserving input order within
    /// each kind. Structural invariants are checked here once; downstream
    /// slicing relies on every span being in range.
    pub fn build(record: &Record) -> Result<Self, MalformedFeatureError> {
        let sequence_length = record.sequence.len();

        let mut coding = Vec::new();
        let mut segments = Vec::new();

        for feature in &record.features {
            let span = validate(feature.start, feature.end, sequence_length)?;

            match feature.kind {
                FeatureKind::Coding => coding.push(span),
                FeatureKind::Segment => {
                    segments.push(Segment::new(feature.label.clone(), span));
                }
                FeatureKind::Other => {}
            }
        }

        Ok(Self { coding, segments })
    }

    pub fn coding(&self) -> &[Span] {
        &self.coding
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Groups labeled segments by label, in first-seen order. Unlabeled segments
/// are skipped.
pub fn segment_groups(segments: &[Segment]) -> IndexMap<String, Vec<Span>> {
    let mut groups: IndexMap<String, Vec<Span>> = IndexMap::new();

    for segment in segments {
        if let Some(label) = &segment.label {
            groups.entry(label.clone()).or_default().push(segment.span);
        }
    }

    groups
}

fn validate(start: i64, end: i64, sequence_length: usize) -> Result<Span, MalformedFeatureError> {
    if start < 0 || end < 0 {
        return Err(MalformedFeatureError::Negative { start, end });
    }

    if start > end {
        return Err(MalformedFeatureError::Inverted { start, end });
    }

    if end > sequence_length as i64 {
        return Err(MalformedFeatureError::OutOfRange {
            end,
            sequence_length,
        });
    }

    Ok(Span::new(start as usize, end as usize))
}

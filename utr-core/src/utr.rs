pub mod boundaries;
mod result;

use thiserror::Error;
use tracing::info;

pub use self::{
    boundaries::{CodingEnvelope, NoCodingRegionError},
    result::{UtrDetails, UtrResult},
};

use crate::{
    features::{self, FeatureIndex, MalformedFeatureError, Segment},
    record::Record,
};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("record sequence is empty")]
    EmptySequence,
    #[error("malformed feature")]
    MalformedFeature(#[from] MalformedFeatureError),
    #[error("no coding region")]
    NoCodingRegion(#[from] NoCodingRegionError),
}

/// Resolves the coding envelope of a record and slices out the sequence on
/// either side of it.
pub fn extract(record: &Record) -> Result<UtrResult, ExtractError> {
    if record.sequence.is_empty() {
        return Err(ExtractError::EmptySequence);
    }

    let index = FeatureIndex::build(record)?;

    let envelope = boundaries::resolve_coding(index.coding())?;
    let segments = boundaries::resolve_segments(index.segments());

    info!(
        coding_feature_count = index.coding().len(),
        segment_count = segments.len(),
        envelope_start = envelope.start,
        envelope_end = envelope.end,
        "resolved coding envelope"
    );

    Ok(slice(record, envelope, &segments))
}

pub fn slice(record: &Record, envelope: CodingEnvelope, segments: &[Segment]) -> UtrResult {
    // Envelope bounds and segment spans were validated at index build; both
    // slices are in range.
    let five_prime = record.sequence[..envelope.start].to_vec();
    let three_prime = record.sequence[envelope.end..].to_vec();

    let mut five_segments = Vec::new();
    let mut three_segments = Vec::new();
    let mut coding_overlapping = Vec::new();

    for segment in segments {
        if segment.span.end <= envelope.start {
            five_segments.push(segment.clone());
        } else if segment.span.start >= envelope.end {
            three_segments.push(segment.clone());
        } else {
            coding_overlapping.push(segment.clone());
        }
    }

    let segment_groups = features::segment_groups(segments);

    UtrResult::assemble(
        five_prime,
        three_prime,
        envelope,
        five_segments,
        three_segments,
        coding_overlapping,
        segment_groups,
    )
}

use thiserror::Error;

use crate::features::{Segment, Span};

/// The minimal interval spanning every coding feature in a record: minimum
/// coding start to maximum coding end. Internal gaps between coding features
/// are not represented.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodingEnvelope {
    pub start: usize,
    pub end: usize,
}

impl CodingEnvelope {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("record has no coding features")]
pub struct NoCodingRegionError;

pub fn resolve_coding(coding: &[Span]) -> Result<CodingEnvelope, NoCodingRegionError> {
    let mut spans = coding.iter();

    let first = spans.next().ok_or(NoCodingRegionError)?;

    let mut envelope = CodingEnvelope {
        start: first.start,
        end: first.end,
    };

    for span in spans {
        envelope.start = envelope.start.min(span.start);
        envelope.end = envelope.end.max(span.end);
    }

    Ok(envelope)
}

pub fn resolve_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut segments = segments.to_vec();
    // Stable sort keeps exact duplicates in input order.
    segments.sort_by_key(|segment| (segment.span.start, segment.span.end));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_coding() -> Result<(), NoCodingRegionError> {
        // A single span degenerates to its own bounds.
        let envelope = resolve_coding(&[Span::new(336, 8954)])?;
        assert_eq!(envelope, CodingEnvelope { start: 336, end: 8954 });

        // Overlapping, out-of-order spans contribute only their extrema.
        let envelope = resolve_coding(&[
            Span::new(375, 2100),
            Span::new(1800, 3722),
            Span::new(500, 900),
        ])?;
        assert_eq!(envelope, CodingEnvelope { start: 375, end: 3722 });

        Ok(())
    }

    #[test]
    fn test_resolve_coding_with_no_spans() {
        assert_eq!(resolve_coding(&[]), Err(NoCodingRegionError));
    }

    #[test]
    fn test_resolve_segments() {
        let segment = |label: &str, start, end| {
            Segment::new(Some(String::from(label)), Span::new(start, end))
        };

        let actual = resolve_segments(&[
            segment("c", 8, 12),
            segment("a", 0, 6),
            segment("b", 0, 4),
            segment("d", 8, 12),
        ]);

        let expected = [
            segment("b", 0, 4),
            segment("a", 0, 6),
            segment("c", 8, 12),
            segment("d", 8, 12),
        ];

        assert_eq!(actual, expected);

        assert!(resolve_segments(&[]).is_empty());
    }
}

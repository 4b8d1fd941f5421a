use indexmap::IndexMap;

use crate::features::{Segment, Span};

use super::boundaries::CodingEnvelope;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UtrResult {
    five_prime: Vec<u8>,
    three_prime: Vec<u8>,
    envelope: CodingEnvelope,
    five_segments: Vec<Segment>,
    three_segments: Vec<Segment>,
    coding_overlapping: Vec<Segment>,
    segment_groups: IndexMap<String, Vec<Span>>,
}

impl UtrResult {
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        five_prime: Vec<u8>,
        three_prime: Vec<u8>,
        envelope: CodingEnvelope,
        five_segments: Vec<Segment>,
        three_segments: Vec<Segment>,
        coding_overlapping: Vec<Segment>,
        segment_groups: IndexMap<String, Vec<Span>>,
    ) -> Self {
        Self {
            five_prime,
            three_prime,
            envelope,
            five_segments,
            three_segments,
            coding_overlapping,
            segment_groups,
        }
    }

    pub fn utrs(&self) -> (&[u8], &[u8]) {
        (&self.five_prime, &self.three_prime)
    }

    pub fn five_prime(&self) -> &[u8] {
        &self.five_prime
    }

    pub fn three_prime(&self) -> &[u8] {
        &self.three_prime
    }

    pub fn envelope(&self) -> CodingEnvelope {
        self.envelope
    }

    pub fn details(&self) -> UtrDetails<'_> {
        UtrDetails {
            five_prime_length: self.five_prime.len(),
            three_prime_length: self.three_prime.len(),
            envelope: self.envelope,
            five_segments: &self.five_segments,
            three_segments: &self.three_segments,
            coding_overlapping: &self.coding_overlapping,
            segment_groups: &self.segment_groups,
        }
    }
}

/// The structured report for one extraction. Lengths are taken from the
/// returned subsequences themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UtrDetails<'r> {
    pub five_prime_length: usize,
    pub three_prime_length: usize,
    pub envelope: CodingEnvelope,
    pub five_segments: &'r [Segment],
    pub three_segments: &'r [Segment],
    pub coding_overlapping: &'r [Segment],
    pub segment_groups: &'r IndexMap<String, Vec<Span>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details() {
        let envelope = CodingEnvelope { start: 4, end: 8 };

        let result = UtrResult::assemble(
            b"acgt".to_vec(),
            b"gt".to_vec(),
            envelope,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            IndexMap::new(),
        );

        let details = result.details();

        assert_eq!(details.five_prime_length, result.five_prime().len());
        assert_eq!(details.three_prime_length, result.three_prime().len());
        assert_eq!(details.envelope, envelope);
    }
}

mod feature;

pub use self::feature::{Feature, FeatureKind};

/// An annotated transcript: a nucleotide sequence plus its feature table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub id: Option<String>,
    pub sequence: Vec<u8>,
    pub features: Vec<Feature>,
}

impl Record {
    pub fn new(id: Option<String>, sequence: Vec<u8>, features: Vec<Feature>) -> Self {
        Self {
            id,
            sequence,
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

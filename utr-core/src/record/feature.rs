#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FeatureKind {
    Coding,
    Segment,
    Other,
}

/// A raw annotation: inclusive-start/exclusive-end offsets into the record
/// sequence. Offsets are signed and unvalidated until index build.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    pub kind: FeatureKind,
    pub start: i64,
    pub end: i64,
    pub label: Option<String>,
}

impl Feature {
    pub fn new(kind: FeatureKind, start: i64, end: i64) -> Self {
        Self {
            kind,
            start,
            end,
            label: None,
        }
    }

    pub fn with_label<L>(kind: FeatureKind, start: i64, end: i64, label: L) -> Self
    where
        L: Into<String>,
    {
        Self {
            kind,
            start,
            end,
            label: Some(label.into()),
        }
    }
}

use serde::Serialize;

/// Kind of an intra-line text segment, as surfaced to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Plain,
    Del,
    Ins,
}

/// One rendered span of text within a [`Side`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Plain,
            text: text.into(),
        }
    }

    pub(crate) fn del(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Del,
            text: text.into(),
        }
    }

    pub(crate) fn ins(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Ins,
            text: text.into(),
        }
    }
}

/// One side (pre or post) of a [`DiffLine`]: an optional 1-based line number
/// plus the rendered segments for that side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Side {
    pub num: Option<usize>,
    pub segments: Vec<Segment>,
}

impl Side {
    pub(crate) fn empty() -> Self {
        Self::default()
    }
}

/// Classification tag for one row of the merged diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowTag {
    Equal,
    Replace,
    Delete,
    Insert,
    MovedFrom,
    MovedTo,
}

/// One row of the aligned, rendered diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub tag: RowTag,
    pub pre: Side,
    pub post: Side,
}

/// Aggregate counters over a [`DiffResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiffStats {
    pub identical: usize,
    pub changed: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub(crate) fn merge(&mut self, other: DiffStats) {
        self.identical += other.identical;
        self.changed += other.changed;
        self.added += other.added;
        self.removed += other.removed;
    }

    pub(crate) fn is_different(&self) -> bool {
        self.changed + self.added + self.removed > 0
    }
}

/// Top-level output of [`crate::diff`] / [`crate::DiffEngine::diff`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub stats: DiffStats,
    pub is_different: bool,
}

/// Failure surfaced when constructing a [`crate::DiffEngine`] with an
/// unparsable ignore pattern.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A pair of indices into `pre`/`post` whose normalized, trimmed text is
/// identical and appears exactly once in each sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Anchor {
    pub pre: usize,
    pub post: usize,
}

//! Deterministic differential engine for pre-check/post-check network device
//! logs.
//!
//! Aligns two line sequences, classifies each alignment position
//! (equal / replace / insert / delete / moved), computes intra-line
//! character-level diffs for changed pairs, and normalizes volatile fields
//! (timestamps, uptime, temperature) out of the comparison so they never
//! register as drift. The engine is a pure function of its inputs: no I/O,
//! no global state, no logging — see [`DiffEngine`].
//!
//! # Example
//!
//! ```
//! use logdiff_core::diff;
//!
//! let result = diff(
//!     &["interface Gi0/1 up".to_string(), "Up Time: 3 days".to_string()],
//!     &["interface Gi0/1 up".to_string(), "Up Time: 9 days".to_string()],
//! );
//! assert!(!result.is_different);
//! assert_eq!(result.stats.identical, 2);
//! ```

mod anchor;
mod char_diff;
mod model;
mod moves;
mod myers;
mod normalize;
mod sequence_diff;

pub use model::{ConfigError, DiffLine, DiffResult, DiffStats, RowTag, Segment, SegmentKind, Side};
pub use normalize::LineNormalizer;

use model::Anchor;

/// Compares two line sequences with the default ignore-pattern set.
///
/// Equivalent to `DiffEngine::default().diff(pre, post)`; see
/// [`DiffEngine::diff`] for the full contract.
pub fn diff(pre: &[String], post: &[String]) -> DiffResult {
    DiffEngine::default().diff(pre, post)
}

/// The differential engine (C1–C5), configured with a set of ignore
/// patterns and reusable across any number of `diff` calls.
///
/// Construction is the only fallible operation — an invalid ignore
/// pattern is reported as [`ConfigError`] up front so a misconfigured
/// engine is never built. Once constructed, `diff` cannot fail: it returns
/// a [`DiffResult`] for every input, including empty or pathological ones.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    normalizer: LineNormalizer,
}

impl DiffEngine {
    /// Builds an engine from explicit ignore-pattern regexes.
    pub fn new(ignore_patterns: &[String]) -> Result<Self, ConfigError> {
        Ok(Self { normalizer: LineNormalizer::new(ignore_patterns)? })
    }

    /// Compares `pre` against `post`, producing a fully aligned, rendered
    /// [`DiffResult`].
    ///
    /// Drives C4 (anchor alignment) over the whole input, which in turn
    /// invokes C3 (sequence diffing, itself calling C2 for changed-line
    /// pairs) on each inter-anchor slice, then runs C5 (moved-block
    /// detection) once over the merged, ordered result.
    pub fn diff(&self, pre: &[String], post: &[String]) -> DiffResult {
        let anchors = anchor::find_anchors(pre, post, &self.normalizer);

        let mut lines = Vec::new();
        let mut stats = DiffStats::default();
        let mut pre_cursor = 0usize;
        let mut post_cursor = 0usize;

        let tail = Anchor { pre: pre.len(), post: post.len() };
        for boundary in anchors.iter().copied().chain(std::iter::once(tail)) {
            let (slice_lines, slice_stats) = sequence_diff::diff_sequences(
                &pre[pre_cursor..boundary.pre],
                &post[post_cursor..boundary.post],
                pre_cursor,
                post_cursor,
                &self.normalizer,
            );
            lines.extend(slice_lines);
            stats.merge(slice_stats);

            if boundary == tail {
                pre_cursor = boundary.pre;
                post_cursor = boundary.post;
                continue;
            }

            lines.push(DiffLine {
                tag: RowTag::Equal,
                pre: Side {
                    num: Some(boundary.pre + 1),
                    segments: vec![Segment::plain(pre[boundary.pre].clone())],
                },
                post: Side {
                    num: Some(boundary.post + 1),
                    segments: vec![Segment::plain(post[boundary.post].clone())],
                },
            });
            stats.identical += 1;
            pre_cursor = boundary.pre + 1;
            post_cursor = boundary.post + 1;
        }

        moves::detect_moves(&mut lines);

        let is_different = stats.is_different();
        DiffResult { lines, stats, is_different }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self { normalizer: LineNormalizer::default() }
    }
}

use crate::char_diff;
use crate::model::{DiffLine, DiffStats, RowTag, Segment, Side};
use crate::myers::{self, RangeTag};
use crate::normalize::LineNormalizer;

/// Diffs one slice of `pre`/`post` against each other (C3), emitting fully
/// rendered [`DiffLine`]s with line numbers offset by `pre_offset`/
/// `post_offset` so the anchor aligner (C4) can reuse this on sub-slices.
pub(crate) fn diff_sequences(
    pre: &[String],
    post: &[String],
    pre_offset: usize,
    post_offset: usize,
    normalizer: &LineNormalizer,
) -> (Vec<DiffLine>, DiffStats) {
    let norm_pre: Vec<String> = pre.iter().map(|line| normalizer.normalize(line)).collect();
    let norm_post: Vec<String> = post.iter().map(|line| normalizer.normalize(line)).collect();

    let mut lines = Vec::new();
    let mut stats = DiffStats::default();

    for range in myers::diff_ranges(&norm_pre, &norm_post) {
        match range.tag {
            RangeTag::Equal => {
                stats.identical += range.a1 - range.a0;
                for (i, j) in (range.a0..range.a1).zip(range.b0..range.b1) {
                    lines.push(DiffLine {
                        tag: RowTag::Equal,
                        pre: Side {
                            num: Some(pre_offset + i + 1),
                            segments: vec![Segment::plain(pre[i].clone())],
                        },
                        post: Side {
                            num: Some(post_offset + j + 1),
                            segments: vec![Segment::plain(post[j].clone())],
                        },
                    });
                }
            }
            RangeTag::Replace => {
                let a_len = range.a1 - range.a0;
                let b_len = range.b1 - range.b0;
                stats.changed += a_len.max(b_len);
                let overlap = a_len.min(b_len);

                for k in 0..overlap {
                    let i = range.a0 + k;
                    let j = range.b0 + k;
                    let (pre_segments, post_segments) = char_diff::diff_chars(&pre[i], &post[j]);
                    lines.push(DiffLine {
                        tag: RowTag::Replace,
                        pre: Side {
                            num: Some(pre_offset + i + 1),
                            segments: pre_segments,
                        },
                        post: Side {
                            num: Some(post_offset + j + 1),
                            segments: post_segments,
                        },
                    });
                }

                for i in (range.a0 + overlap)..range.a1 {
                    lines.push(DiffLine {
                        tag: RowTag::Replace,
                        pre: Side {
                            num: Some(pre_offset + i + 1),
                            segments: vec![Segment::del(pre[i].clone())],
                        },
                        post: Side::empty(),
                    });
                }
                for j in (range.b0 + overlap)..range.b1 {
                    lines.push(DiffLine {
                        tag: RowTag::Replace,
                        pre: Side::empty(),
                        post: Side {
                            num: Some(post_offset + j + 1),
                            segments: vec![Segment::ins(post[j].clone())],
                        },
                    });
                }
            }
            RangeTag::Delete => {
                stats.removed += range.a1 - range.a0;
                for i in range.a0..range.a1 {
                    lines.push(DiffLine {
                        tag: RowTag::Delete,
                        pre: Side {
                            num: Some(pre_offset + i + 1),
                            segments: vec![Segment::del(pre[i].clone())],
                        },
                        post: Side::empty(),
                    });
                }
            }
            RangeTag::Insert => {
                stats.added += range.b1 - range.b0;
                for j in range.b0..range.b1 {
                    lines.push(DiffLine {
                        tag: RowTag::Insert,
                        pre: Side::empty(),
                        post: Side {
                            num: Some(post_offset + j + 1),
                            segments: vec![Segment::ins(post[j].clone())],
                        },
                    });
                }
            }
        }
    }

    (lines, stats)
}

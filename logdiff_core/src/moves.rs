use crate::model::{DiffLine, RowTag, Segment};

/// A maximal contiguous run of same-tagged rows, keyed by the concatenation
/// of that side's rendered text — the bit-for-bit content a move must match.
struct Block {
    start: usize,
    end: usize,
    key: String,
}

/// Reclassifies matching delete/insert block pairs as moved (C5).
///
/// Scans twice for maximal runs of `Delete` and `Insert` rows, then matches
/// each deleted block against the first not-yet-used inserted block with an
/// identical raw-text key, in `lines` order. Matching is exact over raw text
/// — no normalization — and applies no minimum-length filter, so a
/// single-line move qualifies. Idempotent: a second pass finds no more
/// `Delete`/`Insert` rows left to match.
pub(crate) fn detect_moves(lines: &mut [DiffLine]) {
    let deleted = collect_blocks(lines, RowTag::Delete, |line| concat_text(&line.pre.segments));
    let inserted = collect_blocks(lines, RowTag::Insert, |line| concat_text(&line.post.segments));

    let mut used = vec![false; inserted.len()];
    for block in &deleted {
        let Some(match_idx) = inserted
            .iter()
            .enumerate()
            .find(|(idx, candidate)| !used[*idx] && candidate.key == block.key)
            .map(|(idx, _)| idx)
        else {
            continue;
        };
        used[match_idx] = true;

        for row in &mut lines[block.start..block.end] {
            row.tag = RowTag::MovedFrom;
        }
        let matched = &inserted[match_idx];
        for row in &mut lines[matched.start..matched.end] {
            row.tag = RowTag::MovedTo;
        }
    }
}

fn collect_blocks(lines: &[DiffLine], tag: RowTag, key_of: impl Fn(&DiffLine) -> String) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut start = None;
    let mut key = String::new();

    for (i, line) in lines.iter().enumerate() {
        if line.tag == tag {
            if start.is_none() {
                start = Some(i);
            }
            key.push_str(&key_of(line));
        } else if let Some(s) = start.take() {
            blocks.push(Block { start: s, end: i, key: std::mem::take(&mut key) });
        }
    }
    if let Some(s) = start {
        blocks.push(Block { start: s, end: lines.len(), key });
    }

    blocks
}

fn concat_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

use std::collections::HashMap;

use crate::model::Anchor;
use crate::normalize::LineNormalizer;

/// Finds the monotone anchor set described by C4: lines whose normalized,
/// trimmed form appears exactly once in each sequence, filtered to a
/// strictly-increasing run on both axes.
///
/// Greedy, not a longest-increasing-subsequence: candidates are walked in
/// `pre`-ascending order and kept only if their `post` index exceeds the
/// last kept one. This mirrors `original_source/core.py`'s `_find_anchors`
/// exactly — a deliberate simplicity/quality trade-off (see the crate's
/// design notes), not an accidental omission.
pub(crate) fn find_anchors(pre: &[String], post: &[String], normalizer: &LineNormalizer) -> Vec<Anchor> {
    let pre_index = build_index(pre, normalizer);
    let post_index = build_index(post, normalizer);

    let mut candidates: Vec<Anchor> = pre_index
        .iter()
        .filter(|(_, indices)| indices.len() == 1)
        .filter_map(|(key, pre_indices)| {
            post_index
                .get(key)
                .filter(|post_indices| post_indices.len() == 1)
                .map(|post_indices| Anchor {
                    pre: pre_indices[0],
                    post: post_indices[0],
                })
        })
        .collect();
    candidates.sort_by_key(|anchor| anchor.pre);

    let mut anchors = Vec::with_capacity(candidates.len());
    let mut last_post: Option<usize> = None;
    for candidate in candidates {
        let admissible = match last_post {
            Some(last) => candidate.post > last,
            None => true,
        };
        if admissible {
            last_post = Some(candidate.post);
            anchors.push(candidate);
        }
    }
    anchors
}

fn build_index(lines: &[String], normalizer: &LineNormalizer) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, line) in lines.iter().enumerate() {
        let key = normalizer.normalize(line);
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        index.entry(key.to_string()).or_default().push(i);
    }
    index
}

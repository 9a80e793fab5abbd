use std::collections::HashMap;

use log::trace;

use crate::tokenize::{is_whitespace_token, tokenize};

/// Default minimum similarity for a deletion/insertion pair to be aligned
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.45;

/// Default cap on `deletions * insertions` before scoring is skipped
pub const DEFAULT_COMPARISON_LIMIT: usize = 10_000;

/// Tunables for pairing deletion lines with insertion lines
#[derive(Debug, Clone, PartialEq)]
pub struct AlignOptions {
    /// Candidates scoring below this are never paired
    pub similarity_threshold: f64,

    /// Blocks with more candidate pairs than this are paired by position
    pub comparison_limit: usize,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            comparison_limit: DEFAULT_COMPARISON_LIMIT,
        }
    }
}

/// One output row of a block alignment.
///
/// Indices refer to the deletion and insertion slices passed to
/// [`align_block`]. At least one side is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRow {
    pub deletion: Option<usize>,
    pub insertion: Option<usize>,
}

impl BlockRow {
    pub fn deleted(index: usize) -> Self {
        Self {
            deletion: Some(index),
            insertion: None,
        }
    }

    pub fn inserted(index: usize) -> Self {
        Self {
            deletion: None,
            insertion: Some(index),
        }
    }

    pub fn paired(deletion: usize, insertion: usize) -> Self {
        Self {
            deletion: Some(deletion),
            insertion: Some(insertion),
        }
    }

    /// Whether both sides are present
    pub fn is_paired(&self) -> bool {
        self.deletion.is_some() && self.insertion.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    deletion: usize,
    insertion: usize,
    score: f64,
    distance: usize,
}

/// Align a block of deleted lines with a block of inserted lines using the
/// default options.
pub fn align_block<S: AsRef<str>>(deletions: &[S], insertions: &[S]) -> Vec<BlockRow> {
    align_block_with(deletions, insertions, &AlignOptions::default())
}

/// Align a block of deleted lines with a block of inserted lines.
///
/// Pairs are chosen greedily by token similarity and never cross, so both
/// sides keep their original order in the output. Every deletion and every
/// insertion appears exactly once.
pub fn align_block_with<S: AsRef<str>>(
    deletions: &[S],
    insertions: &[S],
    options: &AlignOptions,
) -> Vec<BlockRow> {
    if deletions.is_empty() {
        return (0..insertions.len()).map(BlockRow::inserted).collect();
    }
    if insertions.is_empty() {
        return (0..deletions.len()).map(BlockRow::deleted).collect();
    }

    if deletions.len().saturating_mul(insertions.len()) > options.comparison_limit {
        trace!(
            "block of {}x{} lines exceeds comparison limit, pairing by position",
            deletions.len(),
            insertions.len()
        );
        return align_by_position(deletions.len(), insertions.len());
    }

    let mut matches = greedy_matches(deletions, insertions, options.similarity_threshold);
    if matches.is_empty() {
        return (0..deletions.len())
            .map(BlockRow::deleted)
            .chain((0..insertions.len()).map(BlockRow::inserted))
            .collect();
    }

    matches.sort_by_key(|&(del, ins)| (del, ins));
    merge_matches(&matches, deletions.len(), insertions.len())
}

fn align_by_position(deletions: usize, insertions: usize) -> Vec<BlockRow> {
    (0..deletions.max(insertions))
        .map(|k| BlockRow {
            deletion: (k < deletions).then_some(k),
            insertion: (k < insertions).then_some(k),
        })
        .collect()
}

fn greedy_matches<S: AsRef<str>>(
    deletions: &[S],
    insertions: &[S],
    threshold: f64,
) -> Vec<(usize, usize)> {
    let del_tokens: Vec<Vec<&str>> = deletions
        .iter()
        .map(|line| tokenize(line.as_ref().trim()))
        .collect();
    let ins_tokens: Vec<Vec<&str>> = insertions
        .iter()
        .map(|line| tokenize(line.as_ref().trim()))
        .collect();

    let mut candidates = Vec::with_capacity(deletions.len() * insertions.len());
    for (i, del) in del_tokens.iter().enumerate() {
        for (j, ins) in ins_tokens.iter().enumerate() {
            let score = similarity(del, ins);
            if score < threshold {
                continue;
            }
            candidates.push(Candidate {
                deletion: i,
                insertion: j,
                score,
                distance: i.abs_diff(j),
            });
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.distance.cmp(&b.distance))
            .then(a.deletion.cmp(&b.deletion))
            .then(a.insertion.cmp(&b.insertion))
    });

    let mut used_del = vec![false; deletions.len()];
    let mut used_ins = vec![false; insertions.len()];
    let mut matches: Vec<(usize, usize)> = Vec::new();
    for candidate in candidates {
        if used_del[candidate.deletion] || used_ins[candidate.insertion] {
            continue;
        }
        let next = (candidate.deletion, candidate.insertion);
        if matches.iter().any(|&accepted| crosses(next, accepted)) {
            continue;
        }
        used_del[candidate.deletion] = true;
        used_ins[candidate.insertion] = true;
        matches.push(next);
    }

    matches
}

fn crosses((i2, j2): (usize, usize), (i1, j1): (usize, usize)) -> bool {
    (i2 < i1 && j2 > j1) || (i2 > i1 && j2 < j1)
}

// `matches` must be sorted by deletion index
fn merge_matches(matches: &[(usize, usize)], deletions: usize, insertions: usize) -> Vec<BlockRow> {
    let mut rows = Vec::with_capacity(deletions + insertions);
    let mut next_del = 0;
    let mut next_ins = 0;

    for &(del, ins) in matches {
        rows.extend((next_del..del).map(BlockRow::deleted));
        rows.extend((next_ins..ins).map(BlockRow::inserted));
        rows.push(BlockRow::paired(del, ins));
        next_del = del + 1;
        next_ins = ins + 1;
    }
    rows.extend((next_del..deletions).map(BlockRow::deleted));
    rows.extend((next_ins..insertions).map(BlockRow::inserted));

    rows
}

/// Token similarity of two lines, in `[0, 1]`.
///
/// Dice coefficient over the multisets of non-whitespace tokens:
/// `2 * |A ∩ B| / (|A| + |B|)`. Two lines without any such token score `1.0`;
/// if only one side has none the score is `0.0`.
pub fn similarity(a: &[&str], b: &[&str]) -> f64 {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut a_len = 0usize;
    for &token in a.iter().filter(|t| !is_whitespace_token(t)) {
        *counts.entry(token).or_default() += 1;
        a_len += 1;
    }

    let mut b_len = 0usize;
    let mut shared = 0usize;
    for &token in b.iter().filter(|t| !is_whitespace_token(t)) {
        b_len += 1;
        if let Some(count) = counts.get_mut(token) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    match (a_len, b_len) {
        (0, 0) => 1.0,
        (0, _) | (_, 0) => 0.0,
        _ => (2 * shared) as f64 / (a_len + b_len) as f64,
    }
}

/// Similarity of two raw lines, trimmed and tokenized first
pub fn line_similarity(a: &str, b: &str) -> f64 {
    similarity(&tokenize(a.trim()), &tokenize(b.trim()))
}

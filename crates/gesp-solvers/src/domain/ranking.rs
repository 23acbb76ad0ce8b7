//! Competition ("1224") ranking
//!
//! Entries are ranked by key descending. Equal keys share the rank of the
//! first entry of their run; the entry after a run of k ties resumes at its
//! positional rank, skipping k-1 values.

/// Rank every entry by its key, descending. Result is indexed by original
/// input position: `ranks[i]` is the rank of `keys[i]`.
pub fn competition_ranks<K: Ord + Clone>(keys: &[K]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));

    let mut ranks = vec![0usize; keys.len()];
    let mut current_rank = 0;
    let mut prev: Option<&K> = None;

    for (pos, &idx) in order.iter().enumerate() {
        if prev != Some(&keys[idx]) {
            current_rank = pos + 1;
            prev = Some(&keys[idx]);
        }
        ranks[idx] = current_rank;
    }

    ranks
}

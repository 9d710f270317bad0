//! Look-ups of sequences by their OTU.
use definitions::{Alignment, Sequence};
use std::collections::{BTreeMap, BTreeSet};

/// Sequences belonging to any of `otus`, in alignment order.
pub fn sequences_of<'a>(aln: &'a Alignment, otus: &BTreeSet<String>) -> Vec<&'a Sequence> {
    aln.sequences
        .iter()
        .filter(|seq| otus.contains(&seq.otu))
        .collect()
}

/// Remove every sequence belonging to any of `otus`.
pub fn remove_sequences_of(aln: &mut Alignment, otus: &BTreeSet<String>) {
    let len = aln.len();
    aln.sequences.retain(|seq| !otus.contains(&seq.otu));
    trace!("REMOVE\t{}\t{}", otus.len(), len - aln.len());
}

/// The number of sequences of each receiver.
/// Receivers absent from the alignment are counted as zero.
pub fn receiver_counts(aln: &Alignment, receivers: &BTreeSet<String>) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = receivers.iter().map(|r| (r.clone(), 0)).collect();
    for seq in aln.sequences.iter() {
        if let Some(count) = counts.get_mut(&seq.otu) {
            *count += 1;
        }
    }
    counts
}

/// Convenience for a singleton OTU set.
pub(crate) fn single(otu: &str) -> BTreeSet<String> {
    std::iter::once(otu.to_string()).collect()
}

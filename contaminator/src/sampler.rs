//! Uniform sampling without replacement.
use crate::error::{ContaminationError, Result};
use rand::Rng;
use std::collections::BTreeSet;

/// Draw `k` distinct elements of `collection` uniformly at random.
/// The result is in draw order.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    collection: &[T],
    k: usize,
) -> Result<Vec<T>> {
    if collection.len() < k {
        return Err(ContaminationError::InsufficientCandidates {
            requested: k,
            available: collection.len(),
        });
    }
    let picked = rand::seq::index::sample(rng, collection.len(), k)
        .into_iter()
        .map(|i| collection[i].clone())
        .collect();
    Ok(picked)
}

/// Pick `count` OTUs out of `otus_in_msa`, never one in `exclude`.
/// If there are not enough candidates, returns an empty vector.
pub fn pick_otus_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    otus_in_msa: &BTreeSet<String>,
    count: usize,
    exclude: &BTreeSet<String>,
) -> Vec<String> {
    let candidates: Vec<&String> = otus_in_msa.difference(exclude).collect();
    if candidates.len() < count {
        debug!("PICK\t{}\t{}\tShortage", count, candidates.len());
        return vec![];
    }
    rand::seq::index::sample(rng, candidates.len(), count)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}

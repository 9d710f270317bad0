//! Collapse receivers holding several sequences and fill the gap with sequences of other OTUs.
use crate::error::Result;
use crate::provenance::{label, swapped_identifier};
use crate::query::{receiver_counts, remove_sequences_of, sequences_of, single};
use crate::sampler::{pick_otus_randomly, sample_without_replacement};
use definitions::{Alignment, Sequence};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReport {
    /// The (cumulative) number of sequences swapped out of the receivers.
    pub swap_count: usize,
    /// Sequences removed from the receivers.
    pub removed: usize,
    /// Donor sequences moved into the receivers.
    pub imported: usize,
    /// Donor OTUs emptied.
    pub donors: Vec<String>,
    pub affected_receivers: BTreeSet<String>,
}

pub trait ReplaceReceiverSeqs {
    /// For each receiver with more than one sequence, drop the surplus and move
    /// all the sequences of as many randomly chosen non-receiver OTUs into it.
    fn replace_receiver_seqs<R: Rng>(
        &mut self,
        rng: &mut R,
        receivers: &BTreeSet<String>,
    ) -> Result<SwapReport>;
}

impl ReplaceReceiverSeqs for Alignment {
    fn replace_receiver_seqs<R: Rng>(
        &mut self,
        rng: &mut R,
        receivers: &BTreeSet<String>,
    ) -> Result<SwapReport> {
        let mut report = SwapReport::default();
        for (otu, &count) in receiver_counts(self, receivers).iter() {
            if count <= 1 {
                continue;
            }
            // Accumulates over receivers. Later receivers lose and import more.
            report.swap_count += count - 1;
            let swap_count = report.swap_count;
            let receiver_seqs: Vec<u64> = sequences_of(self, &single(otu))
                .iter()
                .map(|seq| seq.id)
                .collect();
            for id in sample_without_replacement(rng, &receiver_seqs, swap_count)? {
                self.remove_sequence(id);
                report.removed += 1;
            }
            report.affected_receivers.insert(otu.clone());
            let all_otus = self.otus();
            let donors: BTreeSet<_> = pick_otus_randomly(rng, &all_otus, swap_count, receivers)
                .into_iter()
                .collect();
            let seqs: Vec<Sequence> = sequences_of(self, &donors).into_iter().cloned().collect();
            remove_sequences_of(self, &donors);
            debug!("SWAP\t{}\t{}\t{}\t{}", otu, swap_count, donors.len(), seqs.len());
            for mut seq in seqs {
                let identifier = swapped_identifier(&seq.identifier, &seq.otu);
                let desc = label(otu, &identifier);
                seq.relabel(otu, identifier, desc);
                self.insert(seq);
                report.imported += 1;
            }
            report.donors.extend(donors);
        }
        info!("SWAP\t{}\tSwapped", report.swap_count);
        info!("SWAP\t{}\tAffectedReceivers", report.affected_receivers.len());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContaminationError;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    fn mock(otus: &[(&str, usize)]) -> Alignment {
        let mut aln = Alignment::new("mock.fa", vec![]);
        for &(otu, count) in otus {
            for i in 0..count {
                let ident = format!("{}{}", otu.to_lowercase(), i);
                aln.add_sequence(None, &label(otu, &ident), "ACGTACGTAC".to_string());
            }
        }
        aln
    }
    fn otus(xs: &[&str]) -> BTreeSet<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }
    #[test]
    fn single_receiver() {
        for seed in 0..20 {
            let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
            let mut aln = mock(&[("A", 2), ("B", 1), ("C", 1)]);
            let report = aln.replace_receiver_seqs(&mut rng, &otus(&["A"])).unwrap();
            assert_eq!(report.swap_count, 1);
            assert_eq!((report.removed, report.imported), (1, 1));
            assert_eq!(report.affected_receivers, otus(&["A"]));
            assert_eq!(aln.len(), 3);
            let a = sequences_of(&aln, &otus(&["A"]));
            assert_eq!(a.len(), 2);
            let native = a.iter().filter(|s| !s.identifier.contains("_from_")).count();
            assert_eq!(native, 1);
            let donor = &report.donors[0];
            assert!(donor == "B" || donor == "C");
            assert!(!aln.otus().contains(donor));
            let imported = a.iter().find(|s| s.identifier.contains("_from_")).unwrap();
            let expected = format!("A@{}0_from_{}", donor.to_lowercase(), donor);
            assert_eq!(imported.desc, expected);
            assert!(aln.sanity_check());
        }
    }
    #[test]
    fn donors_are_evacuated() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(24);
        let mut aln = mock(&[("A", 3), ("B", 4), ("C", 2), ("D", 1)]);
        let report = aln.replace_receiver_seqs(&mut rng, &otus(&["A"])).unwrap();
        assert_eq!(report.swap_count, 2);
        assert_eq!(report.donors.len(), 2);
        // Donor sequences are moved, not lost.
        assert_eq!(aln.len(), 10 - report.removed);
        let a = sequences_of(&aln, &otus(&["A"])).len();
        assert_eq!(a, 1 + report.imported);
        for donor in report.donors.iter() {
            assert!(!aln.otus().contains(donor));
        }
    }
    #[test]
    fn no_donor_left() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(1);
        let mut aln = mock(&[("A", 3), ("B", 1)]);
        let report = aln.replace_receiver_seqs(&mut rng, &otus(&["A"])).unwrap();
        assert_eq!((report.removed, report.imported), (2, 0));
        assert!(report.donors.is_empty());
        assert_eq!(aln.len(), 2);
        assert_eq!(aln.otus(), otus(&["A", "B"]));
    }
    #[test]
    fn receivers_are_never_donors() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(5);
        let mut aln = mock(&[("A", 2), ("B", 1), ("C", 1)]);
        let report = aln
            .replace_receiver_seqs(&mut rng, &otus(&["A", "B"]))
            .unwrap();
        assert_eq!(report.donors, vec!["C".to_string()]);
        assert_eq!(aln.otus(), otus(&["A", "B"]));
        assert_eq!(sequences_of(&aln, &otus(&["B"]))[0].identifier, "b0");
    }
    #[test]
    fn cumulative_swap_count() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(8);
        let mut aln = mock(&[("A", 2), ("B", 3), ("C", 1), ("D", 1), ("E", 1), ("F", 1)]);
        let report = aln
            .replace_receiver_seqs(&mut rng, &otus(&["A", "B"]))
            .unwrap();
        // A: 1 swapped out. B: 1 + 2 swapped out, i.e., every sequence of B.
        assert_eq!(report.swap_count, 3);
        assert_eq!(report.removed, 4);
        assert_eq!(report.donors.len(), 4);
        let b = sequences_of(&aln, &otus(&["B"]));
        assert!(b.iter().all(|s| s.identifier.contains("_from_")));
        assert_eq!(b.len(), 3);
    }
    #[test]
    fn cumulative_swap_count_overflows() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(8);
        let mut aln = mock(&[("A", 3), ("B", 2), ("C", 1), ("D", 1), ("E", 1), ("F", 1)]);
        match aln.replace_receiver_seqs(&mut rng, &otus(&["A", "B"])) {
            Err(ContaminationError::InsufficientCandidates {
                requested,
                available,
            }) => assert_eq!((requested, available), (3, 2)),
            x => panic!("{:?}", x),
        }
    }
    #[test]
    fn nothing_to_do() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(8);
        let mut aln = mock(&[("A", 1), ("B", 2)]);
        let before = aln.clone();
        let report = aln
            .replace_receiver_seqs(&mut rng, &otus(&["A", "Z"]))
            .unwrap();
        assert_eq!(report, SwapReport::default());
        assert_eq!(aln, before);
    }
    #[test]
    fn reproducible() {
        let run = |seed: u64| {
            let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(seed);
            let mut aln = mock(&[("A", 3), ("B", 2), ("C", 1), ("D", 2), ("E", 1)]);
            aln.replace_receiver_seqs(&mut rng, &otus(&["A"])).unwrap();
            aln
        };
        assert_eq!(run(11), run(11));
    }
}

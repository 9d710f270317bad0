//! Inject noised copies of receiver sequences in place of sequences of other OTUs.
use crate::error::{ContaminationError, Result};
use crate::noise::add_noise;
use crate::provenance::{contaminated_identifier, label};
use crate::query::{receiver_counts, sequences_of, single};
use crate::sampler::sample_without_replacement;
use definitions::Alignment;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy)]
pub struct ContaminationConfig {
    /// Probability for each receiver to contaminate the alignment.
    likelihood: f64,
    /// Upper bound of the substitutions introduced into a contaminant.
    max_substitutions: usize,
}

impl ContaminationConfig {
    pub fn new(likelihood: f64, max_substitutions: usize) -> Result<Self> {
        if !(0f64..=1f64).contains(&likelihood) {
            return Err(ContaminationError::InvalidParameter {
                parameter: "likelihood".to_string(),
                reason: format!("{likelihood} is not in [0,1]"),
            });
        }
        if max_substitutions < 1 {
            return Err(ContaminationError::InvalidParameter {
                parameter: "max_substitutions".to_string(),
                reason: "should be at least 1".to_string(),
            });
        }
        Ok(Self {
            likelihood,
            max_substitutions,
        })
    }
    pub fn likelihood(&self) -> f64 {
        self.likelihood
    }
    pub fn max_substitutions(&self) -> usize {
        self.max_substitutions
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContaminationReport {
    pub contamination_count: usize,
    /// Ids of the synthesized sequences.
    pub contaminants: Vec<u64>,
}

pub trait CrossContaminate {
    /// Each receiver present in the alignment becomes, with probability `likelihood`,
    /// the source of a noised copy that replaces a randomly chosen sequence.
    fn cross_contaminate<R: Rng>(
        &mut self,
        rng: &mut R,
        receivers: &BTreeSet<String>,
        config: &ContaminationConfig,
    ) -> Result<ContaminationReport>;
}

impl CrossContaminate for Alignment {
    fn cross_contaminate<R: Rng>(
        &mut self,
        rng: &mut R,
        receivers: &BTreeSet<String>,
        config: &ContaminationConfig,
    ) -> Result<ContaminationReport> {
        let mut report = ContaminationReport::default();
        let threshold = config.likelihood * 100f64;
        for (otu, &count) in receiver_counts(self, receivers).iter() {
            if count == 0 {
                continue;
            }
            if threshold <= rng.gen_range(0..100u32) as f64 {
                continue;
            }
            let otu_seqs: Vec<(String, String)> = sequences_of(self, &single(otu))
                .iter()
                .map(|seq| (seq.identifier.clone(), seq.seq.clone()))
                .collect();
            // The receiver may have lost its sequences to an earlier contamination.
            if otu_seqs.is_empty() {
                debug!("CONTAMINATE\t{}\tVanished", otu);
                continue;
            }
            let (identifier, seq) = sample_without_replacement(rng, &otu_seqs, 1)?.remove(0);
            let (noised, substitutions) = add_noise(rng, &seq, config.max_substitutions)?;
            let all_seqs: Vec<(u64, String)> = self
                .sequences
                .iter()
                .map(|seq| (seq.id, seq.otu.clone()))
                .collect();
            let (contaminant, contaminant_otu) =
                sample_without_replacement(rng, &all_seqs, 1)?.remove(0);
            let identifier = contaminated_identifier(&identifier, otu, substitutions);
            let desc = label(&contaminant_otu, &identifier);
            debug!("CONTAMINATE\t{}\t{}\t{}", otu, contaminant_otu, substitutions);
            let id = self.add_sequence(None, &desc, noised);
            self.remove_sequence(contaminant);
            report.contamination_count += 1;
            report.contaminants.push(id);
        }
        let plural = if report.contamination_count == 1 { "" } else { "s" };
        info!(
            "CONTAMINATE\t{}\tSequence{}",
            report.contamination_count, plural
        );
        Ok(report)
    }
}

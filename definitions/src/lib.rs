//! Definitions -- A tiny interface for the contamination simulator.
//! Subcommands pass messages to each other via JSON object format. Specifically, the message is encoded only one, possibly large, structure named [Alignment](Alignment)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    pub input_file: String,
    pub sequences: Vec<Sequence>,
}

impl Alignment {
    pub fn new(input_file: &str, sequences: Vec<Sequence>) -> Self {
        Self {
            input_file: input_file.to_string(),
            sequences,
        }
    }
    /// The distinct OTUs having at least one sequence, in lexicographic order.
    pub fn otus(&self) -> BTreeSet<String> {
        self.sequences.iter().map(|s| s.otu.clone()).collect()
    }
    pub fn len(&self) -> usize {
        self.sequences.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
    pub fn get(&self, id: u64) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.id == id)
    }
    fn next_id(&self) -> u64 {
        self.sequences.iter().map(|s| s.id + 1).max().unwrap_or(0)
    }
    /// Construct a new sequence from its label and push it to the alignment.
    /// If `identifier` is None, it is taken from the description.
    /// Returns the id of the new sequence.
    pub fn add_sequence(
        &mut self,
        identifier: Option<&str>,
        description: &str,
        seq: String,
    ) -> u64 {
        let (otu, ident) = parse_label(description);
        let identifier = identifier.unwrap_or(ident).to_string();
        let id = self.next_id();
        self.sequences.push(Sequence {
            id,
            otu: otu.to_string(),
            identifier,
            desc: description.to_string(),
            seq,
        });
        id
    }
    /// Push a sequence as-is. Moved sequences keep their id unless it is already taken.
    pub fn insert(&mut self, mut seq: Sequence) -> u64 {
        if self.get(seq.id).is_some() {
            seq.id = self.next_id();
        }
        let id = seq.id;
        self.sequences.push(seq);
        id
    }
    pub fn remove_sequence(&mut self, id: u64) -> Option<Sequence> {
        let idx = self.sequences.iter().position(|s| s.id == id)?;
        Some(self.sequences.remove(idx))
    }
    /// True if every sequence has an OTU and the ids are unique.
    pub fn sanity_check(&self) -> bool {
        let ids: std::collections::HashSet<_> = self.sequences.iter().map(|s| s.id).collect();
        ids.len() == self.sequences.len() && self.sequences.iter().all(|s| !s.otu.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sequence {
    /// The id of the sequence. It is automatically given by the alignment.
    pub id: u64,
    pub otu: String,
    pub identifier: String,
    /// Label written to the header line. `{otu}@{identifier}` unless relabeled.
    pub desc: String,
    /// Aligned sequence. Gaps(-) and IUPAC codes allowed.
    pub seq: String,
}

impl Sequence {
    pub fn seq(&self) -> &[u8] {
        self.seq.as_bytes()
    }
    /// Re-assign this sequence to another OTU.
    /// The identifier and the description are replaced as well.
    pub fn relabel(&mut self, otu: &str, identifier: String, desc: String) {
        self.otu = otu.to_string();
        self.identifier = identifier;
        self.desc = desc;
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}", self.desc, self.seq)
    }
}

/// Split `otu@identifier` at the first `@`.
/// A label without `@` is both the OTU and the identifier.
pub fn parse_label(label: &str) -> (&str, &str) {
    match label.split_once('@') {
        Some((otu, identifier)) => (otu, identifier),
        None => (label, label),
    }
}

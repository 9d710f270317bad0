use crate::error::{ContaminationError, Result};
use definitions::{parse_label, Alignment};
use std::path::Path;

pub trait Entry: Sized {
    /// Build an alignment out of `(name, sequence)` records.
    /// The name should be `{otu}@{identifier}`.
    fn entry(input_file: &Path, records: Vec<(String, Vec<u8>)>) -> Result<Self>;
}

impl Entry for Alignment {
    fn entry(input_file: &Path, records: Vec<(String, Vec<u8>)>) -> Result<Self> {
        let mut aln = Alignment::new(&input_file.to_string_lossy(), vec![]);
        for (name, seq) in records {
            let (otu, identifier) = parse_label(&name);
            if otu.is_empty() {
                return Err(ContaminationError::InvalidLabel { label: name });
            }
            let seq = String::from_utf8_lossy(&seq).to_string();
            aln.add_sequence(Some(identifier), &name, seq);
        }
        debug!("Input\tSeqNum\t{}", aln.len());
        debug!("Input\tOTUNum\t{}", aln.otus().len());
        Ok(aln)
    }
}

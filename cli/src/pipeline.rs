//! Pipelines -- the whole pipeline of the contamination simulator.
//!
//! This module reads an alignment, swaps the sequences of the receivers, cross-contaminates it, and writes the result.
use contaminator::entry::Entry;
use contaminator::extract::Extract;
use contaminator::*;
use definitions::Alignment;
use log::*;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::path::PathBuf;

/// The configuration of the pipeline.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    /// The path to the input FASTA file.
    input_file: PathBuf,
    /// The path to the output directory.
    out_dir: PathBuf,
    prefix: String,
    verbose: usize,
    seed: u64,
    receivers: Vec<String>,
    to_swap: bool,
    likelihood: f64,
    max_substitutions: usize,
    resume: bool,
}

/// Reports of each step, dumped next to the output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PipelineReport {
    /// None if the swap was skipped or resumed from its checkpoint.
    pub swap: Option<SwapReport>,
    pub contamination: ContaminationReport,
}

pub fn run_pipeline(config: &PipelineConfig) -> std::io::Result<PipelineReport> {
    let PipelineConfig {
        input_file,
        out_dir,
        prefix,
        verbose,
        seed,
        receivers,
        to_swap,
        likelihood,
        max_substitutions,
        resume,
    } = config.clone();
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    if let Err(why) = env_logger::Builder::from_env(env).try_init() {
        debug!("{:?} Logger is already set.", why);
    }
    let contamination_config = ContaminationConfig::new(likelihood, max_substitutions)?;
    let receivers: BTreeSet<String> = receivers.into_iter().collect();
    std::fs::create_dir_all(&out_dir)?;
    let file_stem = out_dir.join(prefix);
    let entry = file_stem.with_extension("entry.json");
    let swapped = file_stem.with_extension("swapped.json");
    let contaminated = file_stem.with_extension("json");
    let fasta = file_stem.with_extension("fa");
    let report_file = file_stem.with_extension("report.json");
    let mut rng: Xoshiro256StarStar = rand::SeedableRng::seed_from_u64(seed);
    let mut report = PipelineReport::default();
    // Pipeline.
    let mut aln = parse_input(&input_file)?;
    log(&aln, &entry)?;
    if to_swap {
        if resume && matches!(swapped.try_exists(), Ok(true)) {
            aln = parse_json(&swapped)?;
            debug!("RESUME\tSwap report is not available for a resumed run.");
        } else {
            report.swap = Some(aln.replace_receiver_seqs(&mut rng, &receivers)?);
            log(&aln, &swapped)?;
        }
    }
    report.contamination = aln.cross_contaminate(&mut rng, &receivers, &contamination_config)?;
    log(&aln, &contaminated)?;
    // Flush the result.
    let mut wtr = std::fs::File::create(&fasta).map(BufWriter::new)?;
    aln.extract(&mut wtr)?;
    let wtr = std::fs::File::create(&report_file).map(BufWriter::new)?;
    serde_json::ser::to_writer_pretty(wtr, &report).map_err(std::io::Error::from)?;
    Ok(report)
}

fn parse_json(filename: &Path) -> std::io::Result<Alignment> {
    debug!("RESUME\t{filename:?}");
    let rdr = std::fs::File::open(filename).map(BufReader::new)?;
    serde_json::de::from_reader(rdr).map_err(std::io::Error::from)
}

fn log(aln: &Alignment, path: &Path) -> std::io::Result<()> {
    let mut wtr = std::fs::File::create(path).map(BufWriter::new)?;
    serde_json::ser::to_writer(&mut wtr, aln).map_err(std::io::Error::from)
}

/// Read a FASTA alignment. Headers should be `{otu}@{identifier}`.
pub fn parse_input(input_file: &Path) -> std::io::Result<Alignment> {
    debug!("Opening {:?}", input_file);
    let reader = std::fs::File::open(input_file).map(BufReader::new)?;
    let records: Vec<_> = bio_utils::fasta::parse_into_vec_from(reader)?
        .into_iter()
        .map(|record| (record.id().to_string(), record.seq().to_vec()))
        .collect();
    Ok(Alignment::entry(input_file, records)?)
}

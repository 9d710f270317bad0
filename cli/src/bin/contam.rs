use contaminator::*;
use definitions::*;
use rand_xoshiro::Xoshiro256StarStar;
use std::collections::BTreeSet;
use std::io::{BufReader, BufWriter};
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = contam_cli::contam_commands::contam_parser().get_matches();
    if let Some(("pipeline", sub_m)) = matches.subcommand() {
        let path: &String = sub_m.get_one("profile").unwrap();
        let file = std::fs::read_to_string(path)?;
        let config: contam_cli::pipeline::PipelineConfig = match toml::from_str(&file) {
            Ok(res) => res,
            Err(why) => {
                eprintln!("{}", why);
                eprintln!("Invalid profile:{}", path);
                std::process::exit(1);
            }
        };
        return contam_cli::pipeline::run_pipeline(&config).map(|_| ());
    }
    if let Some((_, sub_m)) = matches.subcommand() {
        let level = match sub_m.get_count("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
    if let Some(("entry", sub_m)) = matches.subcommand() {
        return entry(sub_m).and_then(|x| flush_file(&x));
    }
    let mut aln = get_input_file()?;
    let aln = &mut aln;
    match matches.subcommand() {
        Some(("swap", sub_m)) => swap(sub_m, aln)?,
        Some(("contaminate", sub_m)) => contaminate(sub_m, aln)?,
        Some(("extract", sub_m)) => extract(sub_m, aln)?,
        Some(("stats", sub_m)) => stats(sub_m, aln)?,
        _ => unreachable!(),
    };
    flush_file(aln)
}

fn entry(matches: &clap::ArgMatches) -> std::io::Result<Alignment> {
    debug!("START\tEntry");
    let file: &String = matches.get_one("input").unwrap();
    contam_cli::pipeline::parse_input(std::path::Path::new(file))
}

fn receivers(matches: &clap::ArgMatches) -> BTreeSet<String> {
    matches
        .get_many::<String>("receivers")
        .map(|xs| xs.cloned().collect())
        .unwrap_or_default()
}

fn rng(matches: &clap::ArgMatches) -> Xoshiro256StarStar {
    let seed: u64 = *matches.get_one("seed").unwrap();
    debug!("SEED\t{}", seed);
    rand::SeedableRng::seed_from_u64(seed)
}

fn swap(matches: &clap::ArgMatches, aln: &mut Alignment) -> std::io::Result<()> {
    debug!("START\tSwap");
    let receivers = receivers(matches);
    let mut rng = rng(matches);
    aln.replace_receiver_seqs(&mut rng, &receivers)?;
    Ok(())
}

fn contaminate(matches: &clap::ArgMatches, aln: &mut Alignment) -> std::io::Result<()> {
    debug!("START\tCross contamination");
    let receivers = receivers(matches);
    let mut rng = rng(matches);
    let likelihood: f64 = *matches.get_one("likelihood").unwrap();
    let max_substitutions: usize = *matches.get_one("max_substitutions").unwrap();
    let config = ContaminationConfig::new(likelihood, max_substitutions)?;
    aln.cross_contaminate(&mut rng, &receivers, &config)?;
    Ok(())
}

fn extract(matches: &clap::ArgMatches, aln: &mut Alignment) -> std::io::Result<()> {
    use contaminator::extract::Extract;
    debug!("START\tExtract");
    let file = std::fs::File::create(matches.get_one::<String>("output").unwrap())?;
    let mut wtr = BufWriter::new(file);
    aln.extract(&mut wtr)
}

fn stats(matches: &clap::ArgMatches, aln: &mut Alignment) -> std::io::Result<()> {
    use contaminator::stats::Stats;
    debug!("START\tStats step");
    let wtr = matches.get_one::<String>("file").unwrap().as_str();
    let wtr = BufWriter::new(std::fs::File::create(wtr)?);
    if !aln.sanity_check() {
        warn!("Sanity check failed. Some sequences have no OTU, or share their ids.");
    }
    aln.stats(wtr)
}

fn get_input_file() -> std::io::Result<Alignment> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    match serde_json::de::from_reader(reader) {
        Err(why) => {
            eprintln!("{:?}", why);
            eprintln!("Invalid Input from STDIN.");
            Err(std::io::Error::from(std::io::ErrorKind::Other))
        }
        Ok(res) => Ok(res),
    }
}

fn flush_file(aln: &Alignment) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut wtr = BufWriter::new(stdout.lock());
    match serde_json::ser::to_writer(&mut wtr, aln) {
        Err(why) => {
            eprintln!("{:?}", why);
            eprintln!("Invalid output to the STDOUT.");
            std::process::exit(1);
        }
        _ => Ok(()),
    }
}

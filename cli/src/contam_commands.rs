use clap::{Arg, ArgAction, Command};

fn verbose() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Debug mode")
}

fn receivers() -> Arg {
    Arg::new("receivers")
        .short('r')
        .long("receivers")
        .value_name("OTU")
        .required(true)
        .num_args(1..)
        .value_delimiter(',')
        .help("Receiver OTUs, separated by commas.")
}

fn seed() -> Arg {
    Arg::new("seed")
        .short('s')
        .long("seed")
        .value_name("SEED")
        .value_parser(clap::value_parser!(u64))
        .default_value("42")
        .help("Seed for pseudorandom number generators.")
}

fn subcommand_entry() -> Command {
    Command::new("entry")
        .version("0.1")
        .about("Entry point. It encodes a FASTA alignment into JSON file.")
        .arg(verbose())
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("ALIGNMENT")
                .required(true)
                .help("Input FASTA file. Headers should be OTU@IDENTIFIER."),
        )
}

fn subcommand_swap() -> Command {
    Command::new("swap")
        .version("0.1")
        .about("Replace surplus sequences of the receivers by sequences of other OTUs.")
        .arg(verbose())
        .arg(receivers())
        .arg(seed())
}

fn subcommand_contaminate() -> Command {
    Command::new("contaminate")
        .version("0.1")
        .about("Cross-contaminate the alignment with noised copies of receivers' sequences.")
        .arg(verbose())
        .arg(receivers())
        .arg(seed())
        .arg(
            Arg::new("likelihood")
                .short('l')
                .long("likelihood")
                .value_name("PROB")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.5")
                .help("Probability that a receiver contaminates the alignment."),
        )
        .arg(
            Arg::new("max_substitutions")
                .short('m')
                .long("max_substitutions")
                .value_name("SUBS")
                .value_parser(clap::value_parser!(usize))
                .default_value("5")
                .help("Maximum number of substitutions in a contaminant."),
        )
}

fn subcommand_extract() -> Command {
    Command::new("extract")
        .version("0.1")
        .about("Write the alignment in FASTA format. The JSON is passed through.")
        .arg(verbose())
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .required(true),
        )
}

fn subcommand_stats() -> Command {
    Command::new("stats")
        .version("0.1")
        .about("Write stats to the specified file.")
        .arg(verbose())
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("FILE")
                .short('f')
                .required(true),
        )
}

fn subcommand_pipeline() -> Command {
    Command::new("pipeline")
        .version("0.1")
        .about("Run the whole pipeline, from a FASTA file to a contaminated FASTA file.")
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("TOML")
                .required(true)
                .help("TOML configuration file. See `example.toml` for an example."),
        )
}

pub fn contam_parser() -> Command {
    Command::new("contam")
        .version("0.1")
        .about("Simulate contamination and mislabeling in multiple sequence alignments.")
        .arg_required_else_help(true)
        .subcommand(subcommand_entry())
        .subcommand(subcommand_swap())
        .subcommand(subcommand_contaminate())
        .subcommand(subcommand_extract())
        .subcommand(subcommand_stats())
        .subcommand(subcommand_pipeline())
}

use std::path::Path;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::LevelFilter;

use crate::constants::DEFAULT_CACHE;
use crate::errors::*;
use crate::fasta::SourceMode;
use crate::strategy::Strategy;

#[derive(Debug)]
pub struct ScanArgs {
    pub input: String,
    pub output: String,
    pub strategy: Strategy,
    pub mode: SourceMode,
    pub log_level: LevelFilter,
}

#[derive(Debug)]
pub struct CompareArgs {
    pub first: String,
    pub second: String,
    pub log_level: LevelFilter,
}

pub enum Args {
    Scan(ScanArgs),
    Compare(CompareArgs),
    None,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self {
            Args::Scan(args) => args.log_level,
            Args::Compare(args) => args.log_level,
            Args::None => LevelFilter::Info,
        }
    }
}

fn verbose_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("verbose")
        .short("v")
        .long("verbose")
        .multiple(true)
        .global(true)
        .help("Increase logging verbosity; may be repeated.")
}

fn quiet_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("quiet")
        .short("q")
        .long("quiet")
        .global(true)
        .conflicts_with("verbose")
        .help("Only log warnings and errors.")
}

fn scan_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("scan")
        .about("Find and deduplicate candidate gRNA target sites in FASTA sequence(s)")
        .arg(
            Arg::with_name("input")
                .help("FASTA file containing one or more sequences.")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .help("Path to JSON file to which results are written.")
                .required(true),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .takes_value(true)
                .default_value("sequential")
                .help("Execution strategy; either sequential, cache, or parallel."),
        )
        .arg(
            Arg::with_name("source")
                .long("source")
                .takes_value(true)
                .default_value("streaming")
                .help("How sequences are read; either streaming or two-pass."),
        )
        .arg(
            Arg::with_name("cache")
                .long("cache")
                .takes_value(true)
                .default_value(DEFAULT_CACHE)
                .help("Location of the sequence cache used by the cache strategy."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used by the parallel strategy (0 for automatic)."),
        )
}

fn compare_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("compare")
        .about("Report differences between two result files")
        .arg(
            Arg::with_name("first")
                .help("First JSON result file.")
                .required(true),
        )
        .arg(
            Arg::with_name("second")
                .help("Second JSON result file.")
                .required(true),
        )
        .alias("diff")
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_threads(matches: &ArgMatches) -> Result<usize> {
    let s = get_str(matches, "threads")?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --threads ({:?}) value: {}", s, err).into()),
    }
}

fn parse_strategy(matches: &ArgMatches) -> Result<Strategy> {
    let name = get_str(matches, "strategy")?;
    let cache = Path::new(get_str(matches, "cache")?);

    match Strategy::get(name, cache, parse_threads(matches)?) {
        Some(strategy) => Ok(strategy),
        None => Err(format!("Unknown strategy {:?}", name).into()),
    }
}

fn parse_source(matches: &ArgMatches) -> Result<SourceMode> {
    let name = get_str(matches, "source")?;

    match SourceMode::get(name) {
        Some(mode) => Ok(mode),
        None => Err(format!("Unknown source mode {:?}", name).into()),
    }
}

fn parse_log_level(matches: &ArgMatches) -> LevelFilter {
    if matches.is_present("quiet") {
        return LevelFilter::Warn;
    }

    match matches.occurrences_of("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("pamscan")
        .version("0.1.0")
        .author("Mikkel Schubert")
        .setting(AppSettings::VersionlessSubcommands)
        .arg(verbose_arg())
        .arg(quiet_arg())
        .subcommand(scan_command())
        .subcommand(compare_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("scan") {
        Ok(Args::Scan(ScanArgs {
            input: get_string(matches, "input")?,
            output: get_string(matches, "output")?,
            strategy: parse_strategy(matches)?,
            mode: parse_source(matches)?,
            log_level: parse_log_level(matches),
        }))
    } else if let Some(matches) = matches.subcommand_matches("compare") {
        Ok(Args::Compare(CompareArgs {
            first: get_string(matches, "first")?,
            second: get_string(matches, "second")?,
            log_level: parse_log_level(matches),
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}

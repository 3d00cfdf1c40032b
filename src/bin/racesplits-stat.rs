use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use itertools::Itertools;
use log::info;
use racesplits::classify::{self, DEFAULT_MIN_TIMES};
use racesplits::clock;
use racesplits::input;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Show how many clock times the lines of a results sheet hold
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input file (text or markdown)
    infile: PathBuf,
    /// Minimum number of clock times for a line to be parsed
    #[arg(short, long, default_value_t = DEFAULT_MIN_TIMES)]
    times: usize,
    /// Print up to this many example lines per count
    #[arg(long, default_value_t = 1)]
    examples: usize,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    info!(target: "racesplits", "read: {}", args.infile.display());
    let bytes =
        fs::read(&args.infile).with_context(|| format!("cannot read {}", args.infile.display()))?;
    let text = input::decode(&bytes);
    let lines = input::lines(&text).into_iter().map(str::trim).collect_vec();

    let mut by_count: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for &line in &lines {
        by_count
            .entry(clock::count_clock_times(line))
            .or_default()
            .push(line);
    }
    let qualifying = lines
        .iter()
        .filter(|line| classify::qualifies(line, args.times))
        .count();

    println!("lines: {}", lines.len());
    println!("lines with at least {} times: {}", args.times, qualifying);
    for (count, group) in &by_count {
        println!("- {} times: {} lines", count, group.len());
        for line in group.iter().take(args.examples) {
            let tokens = clock::time_tokens(line);
            let long = tokens.iter().filter(|t| t.has_hours()).count();
            println!("  {line}");
            println!("  ({} mm:ss, {} hh:mm:ss)", tokens.len() - long, long);
        }
    }
    Ok(())
}

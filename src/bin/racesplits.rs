use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{error, info};
use racesplits::classify::DEFAULT_MIN_TIMES;
use racesplits::driver::{self, DriverArgs};
use racesplits::errors::Result;
use racesplits::input::{self, DEFAULT_CONVERTER, Source};
use racesplits::output::{self, DEFAULT_SEPARATOR, OError};
use racesplits::variant::EventVariant;
use std::path::{Path, PathBuf};
use std::{error, fs, io, process};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

/// Extract race splits from a results sheet
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (text or markdown, or PDF with --pdf)
    infile: PathBuf,
    /// Output file
    outfile: PathBuf,
    /// Event that produced the results sheet
    #[arg(long, value_enum)]
    variant: EventVariant,
    /// Minimum number of clock times for a line to be parsed
    #[arg(short, long, default_value_t = DEFAULT_MIN_TIMES)]
    times: usize,
    /// Field separator for CSV output
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
    /// Input file is a PDF
    #[arg(long)]
    pdf: bool,
    /// PDF-to-text converter
    #[arg(long, default_value = DEFAULT_CONVERTER)]
    converter: String,
    /// Save the converted text to this file
    #[arg(short, long)]
    export: Option<PathBuf>,
    /// Worker threads (0 = one per CPU)
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<PathBuf>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn process(args: &Args) -> Result<()> {
    let separator = output::parse_separator(&args.separator)?;
    let source = if args.pdf {
        Source::Pdf {
            path: &args.infile,
            converter: &args.converter,
        }
    } else {
        Source::Text(&args.infile)
    };
    let text = input::read(&source)?;
    if let Some(export) = &args.export {
        info!(target: "racesplits", "export: {}", export.display());
        fs::write(export, &text)?;
    }
    let lines = input::lines(&text);
    let driver_args = DriverArgs {
        variant: args.variant,
        min_times: args.times,
        jobs: args.jobs,
    };
    let batch = driver::calc(&driver_args, &lines)?;
    driver::require_records(&batch)?;
    info!(target: "racesplits", "write: {}", args.outfile.display());
    let file = fs::File::create(&args.outfile)?;
    let writer = io::BufWriter::new(file);
    match args.format {
        Format::Csv => output::write_csv(writer, args.variant, separator, &batch.records)?,
        Format::Json => output::write_json(writer, &batch, args.compact)?,
    }
    Ok(())
}

fn write_report(path: &Path, report: &OError) -> Result<()> {
    let writer = io::BufWriter::new(fs::File::create(path)?);
    serde_json::to_writer(writer, report)?;
    Ok(())
}

/// Log a fatal error and, if asked, leave it in a JSON file as well.
fn report(args: &Args, e: &dyn error::Error) {
    let infile = args.infile.display().to_string();
    error!(target: "racesplits", "{infile}: {e}");
    if let Some(path) = &args.error_file {
        let report = OError {
            infile,
            error: e.to_string(),
        };
        match write_report(path, &report) {
            Ok(()) => info!(target: "racesplits", "error reported in {}", path.display()),
            Err(e2) => error!(target: "racesplits", "cannot write {}: {e2}", path.display()),
        }
    }
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    if let Err(e) = process(&args) {
        report(&args, &*e);
        process::exit(1);
    }
}

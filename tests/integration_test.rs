use racesplits::driver::{self, DriverArgs};
use racesplits::errors::LineError;
use racesplits::input::{self, Source};
use racesplits::output;
use racesplits::variant::{EventVariant, Segment};
use std::fs;
use std::path::PathBuf;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn path(filename: &str) -> PathBuf {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push(filename);
    path
}

fn slurp(filename: &str) -> String {
    fs::read_to_string(path(filename)).unwrap()
}

fn csv_for(variant: EventVariant, sheet: &str, jobs: usize) -> (String, driver::Batch) {
    let text = input::read(&Source::Text(&path(sheet))).unwrap();
    let lines = input::lines(&text);
    let mut args = DriverArgs::new(variant);
    args.jobs = jobs;
    let batch = driver::calc(&args, &lines).unwrap();
    let mut buf = vec![];
    output::write_csv(&mut buf, variant, b';', &batch.records).unwrap();
    (String::from_utf8(buf).unwrap(), batch)
}

fn assert_same_lines(actual: &str, expected: &str) {
    let actual: Vec<&str> = actual.lines().collect();
    let expected: Vec<&str> = expected.lines().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_dopey() {
    init();
    let (csv, batch) = csv_for(EventVariant::Dopey, "sample-data/dopey.txt", 1);
    assert_same_lines(&csv, &slurp("integration-test/expected/dopey.csv"));
    assert_eq!(batch.lines, 9);
    assert_eq!(batch.qualifying, 5);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].line_no, 9);
    assert!(matches!(
        batch.skipped[0].error,
        LineError::IdentityParse { .. }
    ));
}

#[test]
fn test_challenge() {
    init();
    let (csv, batch) = csv_for(EventVariant::Challenge, "sample-data/challenge.txt", 1);
    assert_same_lines(&csv, &slurp("integration-test/expected/challenge.csv"));
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].line_no, 7);
    assert_eq!(
        batch.skipped[0].error,
        LineError::TimeFormat {
            token: "x".to_owned()
        }
    );
}

#[test]
fn test_goofy_matches_challenge() {
    init();
    let (challenge, _) = csv_for(EventVariant::Challenge, "sample-data/challenge.txt", 1);
    let (goofy, _) = csv_for(EventVariant::Goofy, "sample-data/challenge.txt", 0);
    assert_eq!(challenge, goofy);
}

#[test]
fn test_totals() {
    init();
    for (variant, sheet) in [
        (EventVariant::Dopey, "sample-data/dopey.txt"),
        (EventVariant::Challenge, "sample-data/challenge.txt"),
    ] {
        let (_, batch) = csv_for(variant, sheet, 1);
        for r in &batch.records {
            let sum: u64 = variant.segments().iter().map(|&s| r.seconds(s)).sum();
            assert_eq!(r.seconds(Segment::Total), sum);
            assert_eq!(r.splits.len(), 5);
        }
    }
}

#[test]
fn test_json() {
    init();
    let (_, batch) = csv_for(EventVariant::Dopey, "sample-data/dopey.txt", 1);
    let mut buf = vec![];
    output::write_json(&mut buf, &batch, true).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["variant"], "dopey");
    assert_eq!(v["records"].as_array().unwrap().len(), 4);
    assert_eq!(v["records"][2]["name"], "CHEN, LI WEI");
    assert_eq!(v["records"][2]["splits"]["5k"], 0);
    assert_eq!(v["records"][2]["splits"]["total"], 32463);
    assert_eq!(v["skipped"][0]["line_no"], 9);
}

#[test]
fn test_no_results() {
    init();
    let lines = ["Results", "Page 1 of 1", "printed 12:00"];
    let batch = driver::calc(&DriverArgs::new(EventVariant::Dopey), &lines).unwrap();
    assert!(batch.records.is_empty());
    assert!(batch.skipped.is_empty());
    assert!(driver::require_records(&batch).is_err());
}

#[test]
fn test_latin1_sheet() {
    init();
    let (csv, batch) = csv_for(EventVariant::Challenge, "sample-data/latin1.txt", 1);
    assert_eq!(batch.lines, 3);
    assert!(batch.skipped.is_empty());
    let names: Vec<&str> = batch
        .records
        .iter()
        .map(|r| r.identity.name.as_str())
        .collect();
    assert_eq!(names, ["DOE, JANE", "MU\u{fffd}OZ, ANA"]);
    assert_eq!(batch.records[0].total(), 7740 + 16200);
    let first = csv.lines().nth(1).unwrap();
    assert!(first.starts_with("DOE, JANE;34;F;Orlando, FL;7740;"));
}

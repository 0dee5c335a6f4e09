use std::path::PathBuf;

use weatherlog::{Journal, LoadError, ParseError};

fn write_journal(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_reads_one_observation_per_data_row() {
    let path = write_journal(
        "weatherlog-valid.csv",
        "Date,Temperature,Humidity,Precipitation
2025-01-01,25.5,45.0,0.0
2025-01-02,10.2,55.3,5.1
",
    );

    let journal = Journal::load(path).unwrap();
    assert_eq!(journal.observations.len(), 2);
    assert_eq!(journal.observations[0].date, "2025-01-01");
    assert_eq!(journal.observations[1].precipitation, 5.1);
}

#[test]
fn load_reports_a_missing_file() {
    let path = std::env::temp_dir().join("weatherlog-does-not-exist.csv");

    match Journal::load(&path) {
        Err(LoadError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn load_fails_fast_on_a_malformed_row() {
    let path = write_journal(
        "weatherlog-malformed.csv",
        "Date,Temperature,Humidity,Precipitation
2025-01-01,25.5,45.0,0.0
2025-01-02,10.2,55.3
2025-01-03,11.0,50.0,0.0
",
    );

    // no partial journal comes back, the whole load fails
    assert!(matches!(
        Journal::load(path),
        Err(LoadError::Parse(ParseError::FieldCount { line: 3, found: 3 }))
    ));
}

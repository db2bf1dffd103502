//! End-to-end tests driving a seed file through source, statement, and sink.

use std::fs;

use seedsql::error::ErrorKind;
use seedsql::sink::write_sql;
use seedsql::source::read_rows;
use seedsql::statement::build_insert;
use seedsql_telemetry::init_test_tracing;
use tempfile::tempdir;

fn exercise_columns() -> Vec<String> {
    ["name", "muscle_group", "difficulty", "description", "image_url"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn converts_a_two_row_seed_file_end_to_end() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let input = dir.path().join("exercises_seed.csv");
    fs::write(
        &input,
        "name,muscle_group,difficulty,description,image_url\n\
         Squat,Legs,Easy,A basic compound lift,http://img/squat.png\n\
         Farmer's Walk,Full Body,Medium,,\n",
    )
    .unwrap();

    let columns = exercise_columns();
    let rows = read_rows(&input, &columns).unwrap();
    assert_eq!(rows.len(), 2);

    let sql = build_insert(&rows, &columns).unwrap();

    let output = dir.path().join("exercises_seed.sql");
    write_sql(&output, &sql).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "INSERT INTO public.exercises\n\
         \x20 (name, muscle_group, difficulty, description, image_url)\n\
         VALUES\n\
         \x20     ('Squat', 'Legs', 'Easy', 'A basic compound lift', 'http://img/squat.png'),\n\
         \x20     ('Farmer''s Walk', 'Full Body', 'Medium', NULL, NULL)\n\
         ON CONFLICT (lower(name)) DO NOTHING;\n"
    );
}

#[test]
fn null_and_nan_tokens_collapse_to_null_end_to_end() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let input = dir.path().join("seed.csv");
    fs::write(
        &input,
        "name,muscle_group,difficulty,description,image_url\n\
         Pull Up,Back,Medium,null,NaN\n",
    )
    .unwrap();

    let columns = exercise_columns();
    let rows = read_rows(&input, &columns).unwrap();
    let sql = build_insert(&rows, &columns).unwrap();

    assert!(sql.contains("('Pull Up', 'Back', 'Medium', NULL, NULL)"));
}

#[test]
fn missing_input_file_fails_with_source_io_error() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let input = dir.path().join("does_not_exist.csv");

    let error = read_rows(&input, &exercise_columns()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::SourceIoError);
}

#[test]
fn ragged_row_fails_with_invalid_data() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let input = dir.path().join("seed.csv");
    fs::write(
        &input,
        "name,muscle_group,difficulty,description,image_url\n\
         Squat,Legs,Easy\n",
    )
    .unwrap();

    let error = read_rows(&input, &exercise_columns()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidData);
}

#[test]
fn header_mismatch_fails_with_invalid_data() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let input = dir.path().join("seed.csv");
    fs::write(
        &input,
        "name,difficulty,muscle_group,description,image_url\n\
         Squat,Easy,Legs,,\n",
    )
    .unwrap();

    let error = read_rows(&input, &exercise_columns()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidData);
}

#[test]
fn header_only_file_is_rejected_at_assembly() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let input = dir.path().join("seed.csv");
    fs::write(&input, "name,muscle_group,difficulty,description,image_url\n").unwrap();

    let columns = exercise_columns();
    let rows = read_rows(&input, &columns).unwrap();
    assert!(rows.is_empty());

    let error = build_insert(&rows, &columns).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidData);
}

#[test]
fn output_overwrites_an_existing_file() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let output = dir.path().join("seed.sql");
    fs::write(&output, "stale content").unwrap();

    write_sql(&output, "fresh content\n").unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "fresh content\n");
}

#[test]
fn missing_output_directory_fails_with_destination_io_error() {
    init_test_tracing();

    let dir = tempdir().unwrap();
    let output = dir.path().join("missing").join("seed.sql");

    let error = write_sql(&output, "content\n").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::DestinationIoError);
    assert!(!output.exists());
}

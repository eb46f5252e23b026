use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{InputError, REQUIRED_COLUMNS, load_rows};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("xm_leaderboard_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

const HEADER: &str = "Entity,Function,Applied,Approved,Unique_LCs,APP_Points,APD_Points,Unique_LCs_Points";

#[test]
fn test_load_rows_parses_records() {
    let dir = make_temp_dir();
    let path = dir.join("export.csv");
    write_file(
        &path,
        &format!("{HEADER}\nCC,oGV,4,2,1,2,1,1\nCN,iGV,6,3,2,3.5,2,1\n"),
    );

    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].entity, "CC");
    assert_eq!(rows[0].function, "oGV");
    assert_eq!(rows[0].applied, 4);
    assert_eq!(rows[1].app_points, 3.5);
    assert_eq!(rows[1].unique_lcs_points, 1.0);
}

#[test]
fn test_missing_column_is_schema_error() {
    let dir = make_temp_dir();
    let path = dir.join("export.csv");
    write_file(
        &path,
        "Entity,Function,Applied,Approved,Unique_LCs,APP_Points,Unique_LCs_Points\nCC,oGV,4,2,1,2,1\n",
    );

    let err = load_rows(&path).unwrap_err();
    match err {
        InputError::MissingColumn { column } => assert_eq!(column, "APD_Points"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_non_numeric_value_fails_at_that_row() {
    let dir = make_temp_dir();
    let path = dir.join("export.csv");
    write_file(
        &path,
        &format!("{HEADER}\nCC,oGV,4,2,1,2,1,1\nCN,iGV,six,3,2,3,2,1\n"),
    );

    let err = load_rows(&path).unwrap_err();
    match err {
        InputError::Row { line, .. } => assert_eq!(line, 3),
        other => panic!("expected Row error, got {other:?}"),
    }
}

#[test]
fn test_header_only_input_yields_no_rows() {
    let dir = make_temp_dir();
    let path = dir.join("export.csv");
    write_file(&path, &format!("{HEADER}\n"));

    let rows = load_rows(&path).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_rows(&dir.join("nope.csv")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}

#[test]
fn test_extra_columns_are_ignored() {
    let dir = make_temp_dir();
    let path = dir.join("export.csv");
    write_file(
        &path,
        &format!("{HEADER},Remarks\nCC,oGV,4,2,1,2,1,1,on track\n"),
    );

    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entity, "CC");
}

#[test]
fn test_empty_entity_value_is_kept() {
    let dir = make_temp_dir();
    let path = dir.join("export.csv");
    write_file(&path, &format!("{HEADER}\n,oGV,1,0,0,1,0,0\n"));

    let rows = load_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entity, "");
}

#[test]
fn test_required_columns_cover_row_fields() {
    assert_eq!(REQUIRED_COLUMNS.len(), 8);
    assert!(REQUIRED_COLUMNS.contains(&"Unique_LCs"));
    assert!(REQUIRED_COLUMNS.contains(&"Unique_LCs_Points"));
}

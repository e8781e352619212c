// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Integration tests for the colour table converter
//!
//! Drives `colors::convert` against temporary directories and reads the
//! generated JSON back.

use std::fs;

use serde_json::{Map, Value};
use tempfile::TempDir;

use autograph_tools::colors::{self, ColorError, OutputNames};
use autograph_tools::config::DuplicatePolicy;

const TABLE: &str = "\
# Z  symbol  mass     colour
1    H       1.008    ffffff
2    He      4.0026   d9ffff

8    O       15.999   ff0d0d
";

fn write_table(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("colors.txt");
    fs::write(&path, text).unwrap();
    path
}

fn read_json(path: &std::path::Path) -> Map<String, Value> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_oxygen_line_lands_in_both_maps() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "8 O 15.999 ff0d0d\n");
    let names = OutputNames::default();

    let report = colors::convert(&input, dir.path(), &names, DuplicatePolicy::LastWriteWins)
        .unwrap();
    assert!(report.is_success());

    let by_symbol = read_json(&dir.path().join("symbol_to_color.json"));
    let by_number = read_json(&dir.path().join("number_to_color.json"));
    assert_eq!(by_symbol.get("O"), Some(&Value::from("#ff0d0d")));
    assert_eq!(by_number.get("8"), Some(&Value::from("#ff0d0d")));
}

#[test]
fn test_output_round_trips_in_memory_maps() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TABLE);
    let names = OutputNames::default();

    let report = colors::convert(&input, dir.path(), &names, DuplicatePolicy::LastWriteWins)
        .unwrap();
    let read_back = colors::read_maps(dir.path(), &names).unwrap();

    assert_eq!(read_back, report.maps);
    assert_eq!(read_back.len(), 3);
}

#[test]
fn test_output_is_compact_and_in_input_order() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TABLE);

    colors::convert(
        &input,
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::LastWriteWins,
    )
    .unwrap();

    let symbol_json = fs::read_to_string(dir.path().join("symbol_to_color.json")).unwrap();
    assert_eq!(
        symbol_json,
        r##"{"H":"#ffffff","He":"#d9ffff","O":"#ff0d0d"}"##
    );
}

#[test]
fn test_comments_and_blank_lines_produce_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "# only a comment\n\n   \n");

    let report = colors::convert(
        &input,
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::LastWriteWins,
    )
    .unwrap();

    assert_eq!(report.entries, 0);
    assert_eq!(report.skipped, 3);
    assert!(read_json(&dir.path().join("symbol_to_color.json")).is_empty());
    assert!(read_json(&dir.path().join("number_to_color.json")).is_empty());
}

#[test]
fn test_later_duplicate_wins() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "8 O 15.999 ff0d0d\n8 O 15.999 aa0000\n");

    colors::convert(
        &input,
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::LastWriteWins,
    )
    .unwrap();

    let by_symbol = read_json(&dir.path().join("symbol_to_color.json"));
    assert_eq!(by_symbol.get("O"), Some(&Value::from("#aa0000")));
}

#[test]
fn test_short_line_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "1 H 1.008 ffffff\n8 O 15.999\n");

    let report = colors::convert(
        &input,
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::LastWriteWins,
    )
    .unwrap();

    assert!(!report.is_success());
    assert!(matches!(
        report.failures[0],
        ColorError::MissingFields { line: 2, found: 3 }
    ));
    assert!(!dir.path().join("symbol_to_color.json").exists());
    assert!(!dir.path().join("number_to_color.json").exists());
}

#[test]
fn test_failed_run_leaves_previous_outputs_alone() {
    let dir = TempDir::new().unwrap();
    let names = OutputNames::default();

    let input = write_table(&dir, "1 H 1.008 ffffff\n");
    colors::convert(&input, dir.path(), &names, DuplicatePolicy::LastWriteWins).unwrap();
    let before = fs::read_to_string(dir.path().join("symbol_to_color.json")).unwrap();

    let input = write_table(&dir, "6 C 12.011 909090\nnot a number here\n");
    let report =
        colors::convert(&input, dir.path(), &names, DuplicatePolicy::LastWriteWins).unwrap();

    assert!(!report.is_success());
    let after = fs::read_to_string(dir.path().join("symbol_to_color.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_strict_policy_rejects_duplicates() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "8 O 15.999 ff0d0d\n8 O 15.999 aa0000\n");

    let report = colors::convert(
        &input,
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::Reject,
    )
    .unwrap();

    assert!(matches!(
        report.failures.as_slice(),
        [ColorError::DuplicateSymbol { line: 2, first_line: 1, .. }]
    ));
    assert!(!dir.path().join("symbol_to_color.json").exists());
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = colors::convert(
        &dir.path().join("absent.txt"),
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::LastWriteWins,
    )
    .unwrap_err();

    assert!(matches!(err, ColorError::Io { .. }));
}

#[test]
fn test_custom_output_names() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TABLE);
    let names = OutputNames {
        symbol: "by_symbol.json".into(),
        number: "by_number.json".into(),
    };

    colors::convert(&input, dir.path(), &names, DuplicatePolicy::LastWriteWins).unwrap();

    assert!(dir.path().join("by_symbol.json").exists());
    assert!(dir.path().join("by_number.json").exists());
    assert!(!dir.path().join("symbol_to_color.json").exists());
}

#[test]
fn test_unwritable_second_map_leaves_first_untouched() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "1 H 1.008 ffffff\n");
    fs::write(dir.path().join("symbol_to_color.json"), "{}").unwrap();

    let names = OutputNames {
        symbol: "symbol_to_color.json".into(),
        number: "missing/number_to_color.json".into(),
    };
    let err = colors::convert(&input, dir.path(), &names, DuplicatePolicy::LastWriteWins)
        .unwrap_err();

    assert!(matches!(err, ColorError::Io { .. }));
    assert_eq!(
        fs::read_to_string(dir.path().join("symbol_to_color.json")).unwrap(),
        "{}"
    );
    assert!(!dir.path().join(".symbol_to_color.json.tmp").exists());
}

#[test]
fn test_strict_policy_rejects_repeated_atomic_number() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "8 O 15.999 ff0d0d\n8 X 1 00ff00\n");

    let report = colors::convert(
        &input,
        dir.path(),
        &OutputNames::default(),
        DuplicatePolicy::Reject,
    )
    .unwrap();

    assert!(!report.is_success());
    assert!(matches!(
        report.failures.as_slice(),
        [ColorError::DuplicateAtomicNumber { line: 2, atomic_number: 8, .. }]
    ));
    assert!(!dir.path().join("number_to_color.json").exists());
}

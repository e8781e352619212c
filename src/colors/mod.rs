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

//! Element colour table conversion.
//!
//! This module reads a whitespace-delimited table of element colour
//! assignments and writes two JSON lookup maps: one keyed by element symbol
//! and one keyed by atomic number.
//!
//! # Input format
//!
//! ```text
//! # Z  symbol  mass     colour
//! 1    H       1.008    ffffff
//! 8    O       15.999   ff0d0d
//! ```
//!
//! # Failure handling
//!
//! Every line is parsed before anything is written. Failures are collected
//! per line, and if there are any the output files are left untouched.
//! Both maps are staged next to their targets and only moved into place once
//! both have been written.

pub mod parse;

use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    config::{AppConfig, DuplicatePolicy},
    model::{ColorMaps, ConversionReport},
};

pub use parse::parse_line;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("line {line}: expected at least 4 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: invalid atomic number {value:?}")]
    InvalidAtomicNumber { line: usize, value: String },

    #[error("line {line}: symbol {symbol:?} already assigned on line {first_line}")]
    DuplicateSymbol {
        line: usize,
        symbol: String,
        first_line: usize,
    },

    #[error("line {line}: atomic number {atomic_number} already assigned on line {first_line}")]
    DuplicateAtomicNumber {
        line: usize,
        atomic_number: u32,
        first_line: usize,
    },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid colour map in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File names of the two generated maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub symbol: String,
    pub number: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            symbol: "symbol_to_color.json".into(),
            number: "number_to_color.json".into(),
        }
    }
}

impl From<&AppConfig> for OutputNames {
    fn from(config: &AppConfig) -> Self {
        Self {
            symbol: config.symbol_output.clone(),
            number: config.number_output.clone(),
        }
    }
}

/// Parses a whole colour table into its two maps.
///
/// Entries are merged in input order. Under
/// [`DuplicatePolicy::LastWriteWins`] a repeated symbol or atomic number
/// replaces the earlier colour in place; under [`DuplicatePolicy::Reject`]
/// the repeated line is recorded as a failure and the first colour is kept,
/// so every symbol and its atomic number always share one colour.
pub fn build_maps(text: &str, policy: DuplicatePolicy) -> ConversionReport {
    let mut report = ConversionReport::default();
    let mut first_symbol: HashMap<String, usize> = HashMap::new();
    let mut first_number: HashMap<u32, usize> = HashMap::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        let entry = match parse_line(line_no, line) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                debug!(line = line_no, "rejected colour table line: {}", e);
                report.failures.push(e);
                continue;
            }
        };

        let symbol_seen = first_symbol.get(&entry.symbol).copied();
        let number_seen = first_number.get(&entry.atomic_number).copied();

        match policy {
            DuplicatePolicy::Reject => {
                if let Some(first_line) = symbol_seen {
                    report.failures.push(ColorError::DuplicateSymbol {
                        line: line_no,
                        symbol: entry.symbol,
                        first_line,
                    });
                    continue;
                }
                if let Some(first_line) = number_seen {
                    report.failures.push(ColorError::DuplicateAtomicNumber {
                        line: line_no,
                        atomic_number: entry.atomic_number,
                        first_line,
                    });
                    continue;
                }
            }
            DuplicatePolicy::LastWriteWins => {
                if let Some(first_line) = symbol_seen {
                    warn!(
                        line = line_no,
                        first_line, "symbol {} reassigned, later colour wins", entry.symbol
                    );
                }
                if let Some(first_line) = number_seen {
                    warn!(
                        line = line_no,
                        first_line,
                        "atomic number {} reassigned, later colour wins",
                        entry.atomic_number
                    );
                }
            }
        }

        first_symbol.entry(entry.symbol.clone()).or_insert(line_no);
        first_number.entry(entry.atomic_number).or_insert(line_no);

        report.maps.insert(entry);
        report.entries += 1;
    }

    report
}

/// Converts the colour table at `input` and writes both maps into `out_dir`.
///
/// The returned report carries any per-line failures; when it does, no
/// output file has been written.
///
/// # Errors
///
/// Returns an error if the input cannot be read or an output file cannot be
/// written.
pub fn convert(
    input: &Path,
    out_dir: &Path,
    names: &OutputNames,
    policy: DuplicatePolicy,
) -> Result<ConversionReport, ColorError> {
    let text = fs::read_to_string(input).map_err(|source| ColorError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let report = build_maps(&text, policy);

    if !report.is_success() {
        warn!(
            failures = report.failures.len(),
            "colour table has errors, outputs not written"
        );
        return Ok(report);
    }

    let symbol_path = out_dir.join(&names.symbol);
    let number_path = out_dir.join(&names.number);

    // Serialise and stage both before replacing either output.
    let symbol_json = to_json(report.maps.by_symbol(), &symbol_path)?;
    let number_json = to_json(report.maps.by_number(), &number_path)?;

    let symbol_staged = stage_output(&symbol_path, &symbol_json)?;
    let number_staged = match stage_output(&number_path, &number_json) {
        Ok(staged) => staged,
        Err(e) => {
            let _ = fs::remove_file(&symbol_staged);
            return Err(e);
        }
    };

    if let Err(e) = commit_output(&symbol_staged, &symbol_path) {
        let _ = fs::remove_file(&number_staged);
        return Err(e);
    }
    commit_output(&number_staged, &number_path)?;

    info!(
        entries = report.entries,
        symbols = report.maps.len(),
        "wrote colour maps to {}",
        out_dir.display()
    );

    Ok(report)
}

/// Reads both generated maps back from `out_dir`.
///
/// # Errors
///
/// Returns an error if either file is missing or is not a JSON object of
/// strings.
pub fn read_maps(out_dir: &Path, names: &OutputNames) -> Result<ColorMaps, ColorError> {
    let by_symbol = read_map(&out_dir.join(&names.symbol))?;
    let by_number = read_map(&out_dir.join(&names.number))?;

    Ok(ColorMaps::from_parts(by_symbol, by_number))
}

fn to_json(map: &Map<String, Value>, path: &Path) -> Result<String, ColorError> {
    serde_json::to_string(map).map_err(|source| ColorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `json` to a hidden sibling of `path` and returns the sibling.
fn stage_output(path: &Path, json: &str) -> Result<PathBuf, ColorError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staged = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&staged, json).map_err(|source| ColorError::Io {
        path: staged.clone(),
        source,
    })?;

    Ok(staged)
}

fn commit_output(staged: &Path, path: &Path) -> Result<(), ColorError> {
    fs::rename(staged, path).map_err(|source| {
        let _ = fs::remove_file(staged);
        ColorError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn read_map(path: &Path) -> Result<Map<String, Value>, ColorError> {
    let text = fs::read_to_string(path).map_err(|source| ColorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| ColorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

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

//! Domain models and core data structures.
//!
//! This module defines the records that flow through the two tools: colour
//! table entries and the maps they are merged into, and the rename records
//! produced when sanitising filenames. Both tools also report their outcome
//! per record, so a single bad line or file never hides which others
//! succeeded.

use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::{colors::ColorError, sanitize::SanitizeError};

/// One parsed line of the colour table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub atomic_number: u32,
    pub symbol: String,
    /// Colour in `#RRGGBB` form, the raw code with a `#` prefix.
    pub hex_color: String,
}

/// The two lookup maps built from a colour table.
///
/// Keys keep their first insertion order. Atomic numbers are stored as their
/// decimal string, which is also how they appear in the JSON output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorMaps {
    by_symbol: Map<String, Value>,
    by_number: Map<String, Value>,
}

impl ColorMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(by_symbol: Map<String, Value>, by_number: Map<String, Value>) -> Self {
        Self {
            by_symbol,
            by_number,
        }
    }

    /// Inserts an entry into both maps, returning the colour previously held
    /// by the symbol, if any.
    pub fn insert(&mut self, entry: ColorEntry) -> Option<String> {
        let colour = Value::String(entry.hex_color);
        self.by_number
            .insert(entry.atomic_number.to_string(), colour.clone());
        self.by_symbol
            .insert(entry.symbol, colour)
            .and_then(|previous| previous.as_str().map(str::to_owned))
    }

    pub fn symbol_color(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).and_then(Value::as_str)
    }

    pub fn number_color(&self, atomic_number: u32) -> Option<&str> {
        self.by_number
            .get(&atomic_number.to_string())
            .and_then(Value::as_str)
    }

    pub fn by_symbol(&self) -> &Map<String, Value> {
        &self.by_symbol
    }

    pub fn by_number(&self) -> &Map<String, Value> {
        &self.by_number
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// Outcome of parsing a whole colour table.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub maps: ColorMaps,
    /// Lines that produced an entry.
    pub entries: usize,
    /// Blank and comment lines.
    pub skipped: usize,
    pub failures: Vec<ColorError>,
}

impl ConversionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single planned or completed rename, both paths in the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Outcome of sanitising a directory.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<FileRenameRecord>,
    /// Matching files whose names were already safe.
    pub unchanged: Vec<PathBuf>,
    /// Entries skipped because of their extension or because they are not
    /// regular files.
    pub ignored: usize,
    pub failures: Vec<SanitizeError>,
    pub dry_run: bool,
}

impl RenameReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(atomic_number: u32, symbol: &str, hex_color: &str) -> ColorEntry {
        ColorEntry {
            atomic_number,
            symbol: symbol.into(),
            hex_color: hex_color.into(),
        }
    }

    #[test]
    fn test_insert_fills_both_maps() {
        let mut maps = ColorMaps::new();
        assert_eq!(maps.insert(entry(8, "O", "#ff0d0d")), None);

        assert_eq!(maps.symbol_color("O"), Some("#ff0d0d"));
        assert_eq!(maps.number_color(8), Some("#ff0d0d"));
        assert_eq!(maps.by_number().get("8"), Some(&Value::from("#ff0d0d")));
        assert_eq!(maps.len(), 1);
    }

    #[test]
    fn test_insert_last_write_wins_keeps_position() {
        let mut maps = ColorMaps::new();
        maps.insert(entry(1, "H", "#ffffff"));
        maps.insert(entry(6, "C", "#909090"));
        let previous = maps.insert(entry(1, "H", "#eeeeee"));

        assert_eq!(previous.as_deref(), Some("#ffffff"));
        assert_eq!(maps.symbol_color("H"), Some("#eeeeee"));
        assert_eq!(maps.number_color(1), Some("#eeeeee"));

        let keys: Vec<&String> = maps.by_symbol().keys().collect();
        assert_eq!(keys, ["H", "C"]);
    }
}

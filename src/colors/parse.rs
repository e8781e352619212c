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

//! Colour table line parsing.

use super::ColorError;
use crate::model::ColorEntry;

/// Number of whitespace-separated fields a data line must carry:
/// `atomic_number symbol <unused> colour_code`.
pub const MIN_FIELDS: usize = 4;

/// Parses one line of the colour table.
///
/// Blank lines and lines starting with `#` yield `Ok(None)`. Fields past the
/// fourth are ignored. The symbol and colour code are taken verbatim; the
/// colour gains a `#` prefix.
///
/// # Arguments
///
/// * `line_no` - The 1-based line number, used in error reports.
/// * `line` - The raw line text.
///
/// # Errors
///
/// Returns [`ColorError::MissingFields`] when the line is too short, or
/// [`ColorError::InvalidAtomicNumber`] when the first field is not a positive
/// integer.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ColorEntry>, ColorError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(ColorError::MissingFields {
            line: line_no,
            found: fields.len(),
        });
    }

    let atomic_number = match fields[0].parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(ColorError::InvalidAtomicNumber {
                line: line_no,
                value: fields[0].to_string(),
            });
        }
    };

    Ok(Some(ColorEntry {
        atomic_number,
        symbol: fields[1].to_string(),
        hex_color: format!("#{}", fields[3]),
    }))
}

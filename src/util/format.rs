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

use std::error::Error;

use crate::model::{ConversionReport, RenameReport};

/// Formats an error followed by each of its sources, separated by `": "`.
///
/// # Examples
///
/// ```
/// use autograph_tools::util::format::error_chain;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
/// assert_eq!(error_chain(&err), "disk on fire");
/// ```
pub fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// One-line summary of a colour table conversion.
pub fn conversion_summary(report: &ConversionReport) -> String {
    if report.is_success() {
        format!(
            "{} entries, {} symbols, {} lines skipped",
            report.entries,
            report.maps.len(),
            report.skipped
        )
    } else {
        format!(
            "{} of {} data lines failed, no output written",
            report.failures.len(),
            report.failures.len() + report.entries
        )
    }
}

/// One-line summary of a sanitise run.
pub fn rename_summary(report: &RenameReport) -> String {
    let verb = if report.dry_run { "to rename" } else { "renamed" };
    format!(
        "{} {}, {} unchanged, {} ignored, {} failed",
        report.renamed.len(),
        verb,
        report.unchanged.len(),
        report.ignored,
        report.failures.len()
    )
}

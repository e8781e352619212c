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

//! Filename sanitising.
//!
//! This module renames the files in a single directory so that their names
//! are percent-encoded, leaving a configurable set of "safe" characters
//! readable. Only files with a matching extension are touched.
//!
//! It utilizes `WalkDir` for the directory listing, limited to the directory
//! itself and sorted by file name so that every run processes files in the
//! same order.
//!
//! # Failure handling
//!
//! Each file succeeds or fails on its own. A failure is recorded in the
//! [`RenameReport`] and the batch carries on with the next file; files that
//! were already renamed stay renamed. A rename never replaces an existing
//! file.

pub mod encode;

use std::{
    collections::HashSet,
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    config::AppConfig,
    model::{FileRenameRecord, RenameReport},
};

pub use encode::{is_encoded, percent_encode};

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot rename {} to {}: target already exists", .from.display(), .to.display())]
    Conflict { from: PathBuf, to: PathBuf },

    #[error("file name of {} is not valid UTF-8", .0.display())]
    NonUtf8Name(PathBuf),

    #[error("failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to list directory entry")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Extension to match, without the leading dot.
    pub extension: String,
    pub safe_chars: String,
    pub dry_run: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for SanitizeOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            extension: config.extension.clone(),
            safe_chars: config.safe_chars.clone(),
            dry_run: false,
        }
    }
}

/// The renames a directory needs, computed without touching anything.
#[derive(Debug, Default)]
pub struct RenamePlan {
    pub records: Vec<FileRenameRecord>,
    pub unchanged: Vec<PathBuf>,
    pub ignored: usize,
    pub failures: Vec<SanitizeError>,
}

/// Checks that `dir` exists and is a directory.
///
/// # Errors
///
/// Returns [`SanitizeError::Missing`] or [`SanitizeError::NotADirectory`],
/// or [`SanitizeError::Io`] if the metadata cannot be read.
pub fn validate_dir(dir: &Path) -> Result<(), SanitizeError> {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SanitizeError::Missing(dir.to_path_buf()));
        }
        Err(source) => {
            return Err(SanitizeError::Io {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(SanitizeError::NotADirectory(dir.to_path_buf()));
    }

    Ok(())
}

/// Lists the regular files directly inside `dir` and works out which of the
/// matching ones need a new name.
pub fn plan(dir: &Path, extension: &str, safe_chars: &str) -> RenamePlan {
    let extension = extension.trim_start_matches('.');
    let mut plan = RenamePlan::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                plan.failures.push(e.into());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            debug!("not a regular file: {}", entry.path().display());
            plan.ignored += 1;
            continue;
        }

        let path = entry.path();
        if path.extension() != Some(OsStr::new(extension)) {
            plan.ignored += 1;
            continue;
        }

        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            plan.failures
                .push(SanitizeError::NonUtf8Name(path.to_path_buf()));
            continue;
        };

        let encoded = percent_encode(name, safe_chars);
        if encoded == name {
            debug!("already safe: {}", path.display());
            plan.unchanged.push(path.to_path_buf());
        } else {
            plan.records.push(FileRenameRecord {
                from: path.to_path_buf(),
                to: path.with_file_name(encoded),
            });
        }
    }

    plan
}

/// Percent-encodes the names of all matching files in `dir`.
///
/// Prints `Renamed: <old> to <new>` for every rename, or
/// `Would rename: <old> to <new>` when `options.dry_run` is set.
///
/// # Errors
///
/// Returns an error only if `dir` is not a usable directory. Failures on
/// individual files are collected in the returned report.
pub fn sanitize_dir(dir: &Path, options: &SanitizeOptions) -> Result<RenameReport, SanitizeError> {
    validate_dir(dir)?;

    let plan = plan(dir, &options.extension, &options.safe_chars);

    let mut report = RenameReport {
        unchanged: plan.unchanged,
        ignored: plan.ignored,
        failures: plan.failures,
        dry_run: options.dry_run,
        ..RenameReport::default()
    };

    // Targets taken by earlier records in this batch, so a dry run sees the
    // same conflicts as a real one.
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for record in plan.records {
        if claimed.contains(&record.to) || target_exists(&record.to) {
            let err = SanitizeError::Conflict {
                from: record.from,
                to: record.to,
            };
            warn!("{}", err);
            report.failures.push(err);
            continue;
        }

        claimed.insert(record.to.clone());

        if options.dry_run {
            println!(
                "Would rename: {} to {}",
                record.from.display(),
                record.to.display()
            );
            report.renamed.push(record);
            continue;
        }

        match fs::rename(&record.from, &record.to) {
            Ok(()) => {
                println!(
                    "Renamed: {} to {}",
                    record.from.display(),
                    record.to.display()
                );
                report.renamed.push(record);
            }
            Err(source) => {
                let err = SanitizeError::Rename {
                    from: record.from,
                    to: record.to,
                    source,
                };
                warn!("{}", err);
                report.failures.push(err);
            }
        }
    }

    info!(
        renamed = report.renamed.len(),
        unchanged = report.unchanged.len(),
        failed = report.failures.len(),
        "sanitised {}",
        dir.display()
    );

    Ok(report)
}

/// Also catches dangling symlinks, which `Path::exists` reports as absent.
fn target_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

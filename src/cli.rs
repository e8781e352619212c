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

//! Command-line argument parsing.
//!
//! Supports:
//! - `colors`: convert the element colour table to JSON maps
//! - `sanitize`: percent-encode file names in a directory
//! - `config`: show (as JSON) or store the configuration defaults
//!
//! Flags left unset fall back to the values in [`AppConfig`].

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    colors::OutputNames,
    config::{AppConfig, DuplicatePolicy},
    sanitize::SanitizeOptions,
};

/// Asset preparation tools for molecule graph data
#[derive(Parser, Debug)]
#[command(name = "autograph-tools", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an element colour table into symbol and atomic number JSON maps
    Colors(ColorsArgs),
    /// Percent-encode the names of matching files in a directory
    Sanitize(SanitizeArgs),
    /// Print the effective configuration as JSON and the TOML file it is stored in
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ColorsArgs {
    /// Colour table to read
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory the JSON maps are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Fail on a repeated symbol instead of keeping the later colour
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Directory whose files are renamed
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Only rename files with this extension
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Print the planned renames without performing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub save: bool,
}

/// Settings for a `colors` run after applying flags over the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorsSettings {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub names: OutputNames,
    pub policy: DuplicatePolicy,
}

impl ColorsArgs {
    pub fn resolve(&self, config: &AppConfig) -> ColorsSettings {
        let policy = if self.strict {
            DuplicatePolicy::Reject
        } else {
            config.duplicate_policy
        };

        ColorsSettings {
            input: self
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.colors_input)),
            out_dir: self.out_dir.clone(),
            names: OutputNames::from(config),
            policy,
        }
    }
}

impl SanitizeArgs {
    pub fn resolve(&self, config: &AppConfig) -> SanitizeOptions {
        let mut options = SanitizeOptions::from(config);
        if let Some(extension) = &self.extension {
            options.extension = extension.clone();
        }
        options.dry_run = self.dry_run;
        options
    }
}

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

//! # Autograph asset tools.
//!
//! Command-line front end for the two asset preparation tools:
//!
//! * `colors` regenerates `symbol_to_color.json` and `number_to_color.json`
//!   from `colors.txt`.
//! * `sanitize <DIR>` percent-encodes the names of the `.xyz` files in a
//!   directory.
//!
//! Each run either succeeds for every record or exits with status 1 after
//! listing the records that failed.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use autograph_tools::{
    cli::{Cli, ColorsArgs, Command, ConfigArgs, SanitizeArgs},
    colors,
    config::{self, AppConfig},
    logging, sanitize,
    util::format::{conversion_summary, error_chain, rename_summary},
};

/// The entry point of the application.
///
/// Loads the configuration, dispatches the requested subcommand, and maps
/// per-record failures to a non-zero exit status.
fn main() -> Result<ExitCode> {
    logging::init();

    let cli = Cli::parse();
    let config = config::load_config();

    let ok = match cli.command {
        Command::Colors(args) => run_colors(&args, &config)?,
        Command::Sanitize(args) => run_sanitize(&args, &config)?,
        Command::Config(args) => run_config(&args, &config)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run_colors(args: &ColorsArgs, config: &AppConfig) -> Result<bool> {
    let settings = args.resolve(config);

    let report = colors::convert(
        &settings.input,
        &settings.out_dir,
        &settings.names,
        settings.policy,
    )
    .with_context(|| format!("Failed to convert {}", settings.input.display()))?;

    for failure in &report.failures {
        eprintln!("{}: {}", settings.input.display(), error_chain(failure));
    }
    eprintln!("{}", conversion_summary(&report));

    Ok(report.is_success())
}

fn run_sanitize(args: &SanitizeArgs, config: &AppConfig) -> Result<bool> {
    let options = args.resolve(config);

    let report = sanitize::sanitize_dir(&args.dir, &options)
        .with_context(|| format!("Cannot sanitise {}", args.dir.display()))?;

    for failure in &report.failures {
        eprintln!("{}", error_chain(failure));
    }
    eprintln!("{}", rename_summary(&report));

    Ok(report.is_success())
}

/// Prints a JSON view of the configuration; the file itself is TOML.
fn run_config(args: &ConfigArgs, config: &AppConfig) -> Result<bool> {
    let path = config::config_path().context("Failed to locate configuration file")?;
    eprintln!("Configuration file (TOML): {}", path.display());

    println!(
        "{}",
        serde_json::to_string_pretty(config).context("Failed to format configuration")?
    );

    if args.save {
        config::save_config(config).context("Failed to save configuration")?;
    }

    Ok(true)
}

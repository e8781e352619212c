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

//! Application configuration.
//!
//! This module manages the application configuration file. Every value here
//! is a default that the command line can override for a single run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_NAME: &str = "autograph-tools";

/// What to do when the colour table assigns a symbol more than once.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later line replaces the earlier colour.
    #[default]
    LastWriteWins,
    /// A repeated symbol is reported as a failure for that line.
    Reject,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub colors_input: String,
    pub symbol_output: String,
    pub number_output: String,
    pub duplicate_policy: DuplicatePolicy,
    pub extension: String,
    pub safe_chars: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            colors_input: "colors.txt".into(),
            symbol_output: "symbol_to_color.json".into(),
            number_output: "number_to_color.json".into(),
            duplicate_policy: DuplicatePolicy::LastWriteWins,
            extension: "xyz".into(),
            safe_chars: "()=[]".into(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the TOML file the configuration is loaded from and saved to.
pub fn config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

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

//! Asset preparation tools for the molecule graph viewer.
//!
//! Two independent tools share this crate:
//!
//! * [`colors`] converts a flat table of element colour assignments into two
//!   JSON lookup maps, by symbol and by atomic number.
//! * [`sanitize`] percent-encodes file names in a directory so they can be
//!   served as URLs unchanged.

pub mod cli;
pub mod colors;
pub mod config;
pub mod logging;
pub mod model;
pub mod sanitize;
pub mod util;

pub use config::AppConfig;
pub use model::{ColorEntry, ColorMaps, FileRenameRecord};

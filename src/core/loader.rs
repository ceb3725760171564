// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Input file loading
//!
//! Three kinds of input reach the simulator from disk:
//!
//! - **Program binaries**: flat files of 32-bit big-endian words with no
//!   header or padding. A trailing partial word is ignored by the decoder;
//!   the loader only warns about it.
//! - **Cache configuration**: a TOML file deserialising into
//!   [`HierarchyConfig`].
//! - **Address traces** for the cache driver: one access per line,
//!   `i|r|w <address>`, addresses decimal or `0x` hex, with `#` comments
//!   and blank lines skipped:
//!
//! ```text
//! # fill a block, then write it
//! i 0x1000
//! r 0x2000
//! w 0x2000
//! ```

use std::fs;

use log::{debug, warn};

use crate::core::error::{EmulatorError, Result};
use crate::core::memory::{AccessKind, HierarchyConfig};

/// Read a program binary
///
/// # Arguments
///
/// * `path` - Path to the binary file
///
/// # Errors
///
/// Returns [`EmulatorError::Io`] if the file cannot be read.
pub fn load_program(path: &str) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    if bytes.len() % 4 != 0 {
        warn!(
            "program {path:?} is {} bytes; the trailing {} byte(s) are not a full word and will be ignored",
            bytes.len(),
            bytes.len() % 4
        );
    }
    debug!("loaded {} bytes from {path:?}", bytes.len());
    Ok(bytes)
}

/// Read a cache hierarchy configuration from a TOML file
///
/// Missing keys take their defaults (`16 / 16 / direct`); unknown keys are
/// rejected. Validation of the values themselves happens when the
/// hierarchy is constructed.
pub fn load_hierarchy_config(path: &str) -> Result<HierarchyConfig> {
    let data = fs::read_to_string(path)?;
    toml::from_str(&data).map_err(|err| EmulatorError::Config {
        message: err.to_string(),
    })
}

/// Parse an address trace
///
/// # Arguments
///
/// * `data` - Trace file contents
///
/// # Errors
///
/// Returns [`EmulatorError::TraceParse`] with a 1-based line number for
/// any malformed line.
pub fn parse_trace(data: &str) -> Result<Vec<(u64, AccessKind)>> {
    let mut accesses = Vec::new();

    for (index, raw_line) in data.lines().enumerate() {
        let line = raw_line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let kind = match fields.next() {
            Some("i") => AccessKind::Instruction,
            Some("r") => AccessKind::DataRead,
            Some("w") => AccessKind::DataWrite,
            Some(other) => {
                return Err(EmulatorError::TraceParse {
                    line: index + 1,
                    message: format!("unknown access class {other:?}, expected i, r, or w"),
                })
            }
            None => unreachable!("split_whitespace of a non-empty line yields a field"),
        };

        let text = fields.next().ok_or_else(|| EmulatorError::TraceParse {
            line: index + 1,
            message: "missing address".to_string(),
        })?;
        let address = parse_address(text).ok_or_else(|| EmulatorError::TraceParse {
            line: index + 1,
            message: format!("invalid address {text:?}"),
        })?;

        if fields.next().is_some() {
            return Err(EmulatorError::TraceParse {
                line: index + 1,
                message: "trailing fields after address".to_string(),
            });
        }

        accesses.push((address, kind));
    }

    Ok(accesses)
}

/// Read and parse an address trace file
pub fn load_trace(path: &str) -> Result<Vec<(u64, AccessKind)>> {
    parse_trace(&fs::read_to_string(path)?)
}

fn parse_address(text: &str) -> Option<u64> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}

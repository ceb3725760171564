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

//! Two-level cache hierarchy
//!
//! Models split L1 instruction/data caches in front of a unified,
//! direct-mapped L2. The L2 is only probed when L1 misses, and write
//! intent propagates to it on data-write misses. The hierarchy is driven
//! by an address stream tagged with an [`AccessKind`]; it is independent
//! of the CPU.
//!
//! # Fixed geometry
//!
//! | Cache | Size     | Block size     | Associativity            |
//! |-------|----------|----------------|--------------------------|
//! | L1-I  | 1 KiB    | 4/8/16/32      | 1 or fully associative   |
//! | L1-D  | 1 KiB    | 4/8/16/32      | 1 or fully associative   |
//! | L2    | 16 KiB   | 16/32/64       | 1 (direct-mapped)        |

use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use super::{Cache, CacheStats};
use crate::core::error::{EmulatorError, Result};

/// L1 cache size in bytes (both instruction and data)
pub const L1_CACHE_SIZE: u64 = 1024;

/// L2 cache size in bytes
pub const L2_CACHE_SIZE: u64 = 16 * 1024;

/// L1 cache organisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum L1Topology {
    /// Direct-mapped (one way per set)
    Direct,
    /// Fully associative (a single set holding every block)
    Associative,
}

impl FromStr for L1Topology {
    type Err = EmulatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "direct" => Ok(L1Topology::Direct),
            "associative" => Ok(L1Topology::Associative),
            _ => Err(EmulatorError::UnknownTopology {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for L1Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            L1Topology::Direct => write!(f, "direct"),
            L1Topology::Associative => write!(f, "associative"),
        }
    }
}

/// Cache hierarchy configuration
///
/// Deserialises from TOML, with every field optional:
///
/// ```toml
/// l1_block_size = 16
/// l2_block_size = 64
/// l1_topology = "direct"
/// ```
///
/// Validation happens in [`MemorySimulator::new`], not at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HierarchyConfig {
    /// L1 block size in bytes (4, 8, 16, or 32)
    pub l1_block_size: u64,
    /// L2 block size in bytes (16, 32, or 64)
    pub l2_block_size: u64,
    /// L1 organisation
    pub l1_topology: L1Topology,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            l1_block_size: 16,
            l2_block_size: 16,
            l1_topology: L1Topology::Direct,
        }
    }
}

/// Class of a memory access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// Instruction fetch (L1-I, no write intent)
    Instruction,
    /// Data read (L1-D, no write intent)
    DataRead,
    /// Data write (L1-D with write intent, propagated to L2 on miss)
    DataWrite,
}

/// Per-cache statistics plus the cost figure, for export
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HierarchyReport {
    /// L1 instruction cache counters
    pub l1_instruction: CacheStats,
    /// L1 data cache counters
    pub l1_data: CacheStats,
    /// Unified L2 counters
    pub l2: CacheStats,
    /// `0.5 * (misses + writebacks)` summed over all three caches
    pub cost: f64,
}

/// The memory hierarchy simulator
///
/// # Example
///
/// ```
/// use armsim::core::memory::{AccessKind, HierarchyConfig, MemorySimulator};
///
/// let mut sim = MemorySimulator::new(&HierarchyConfig::default()).unwrap();
///
/// sim.access_memory(0x1000, AccessKind::Instruction);
/// assert_eq!(sim.l1_instruction().stats().misses, 1);
/// assert_eq!(sim.l2().stats().misses, 1);
///
/// sim.access_memory(0x1000, AccessKind::Instruction);
/// assert_eq!(sim.l1_instruction().stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct MemorySimulator {
    /// L1 instruction cache
    pub(super) l1_instruction: Cache,
    /// L1 data cache
    pub(super) l1_data: Cache,
    /// Unified L2 cache, direct-mapped
    pub(super) l2: Cache,
}

impl MemorySimulator {
    /// Build the hierarchy from a validated configuration
    ///
    /// # Errors
    ///
    /// [`EmulatorError::InvalidL1BlockSize`] or
    /// [`EmulatorError::InvalidL2BlockSize`] when a block size falls
    /// outside the supported sets.
    pub fn new(config: &HierarchyConfig) -> Result<Self> {
        if !matches!(config.l1_block_size, 4 | 8 | 16 | 32) {
            return Err(EmulatorError::InvalidL1BlockSize {
                got: config.l1_block_size,
            });
        }
        if !matches!(config.l2_block_size, 16 | 32 | 64) {
            return Err(EmulatorError::InvalidL2BlockSize {
                got: config.l2_block_size,
            });
        }

        let l1_associativity = match config.l1_topology {
            L1Topology::Direct => 1,
            L1Topology::Associative => L1_CACHE_SIZE / config.l1_block_size,
        };

        Ok(Self {
            l1_instruction: Cache::new(
                L1_CACHE_SIZE,
                config.l1_block_size,
                l1_associativity,
                true,
            )?,
            l1_data: Cache::new(L1_CACHE_SIZE, config.l1_block_size, l1_associativity, true)?,
            l2: Cache::new(L2_CACHE_SIZE, config.l2_block_size, 1, true)?,
        })
    }

    /// Route one access through the hierarchy
    ///
    /// L2 is probed only when the responsible L1 misses. Main memory is
    /// not modelled; an L2 miss simply counts.
    pub fn access_memory(&mut self, address: u64, kind: AccessKind) {
        match kind {
            AccessKind::Instruction => {
                if self.l1_instruction.access(address, false).is_miss() {
                    self.l2.access(address, false);
                }
            }
            AccessKind::DataRead => {
                if self.l1_data.access(address, false).is_miss() {
                    self.l2.access(address, false);
                }
            }
            AccessKind::DataWrite => {
                if self.l1_data.access(address, true).is_miss() {
                    self.l2.access(address, true);
                }
            }
        }
    }

    /// The L1 instruction cache
    pub fn l1_instruction(&self) -> &Cache {
        &self.l1_instruction
    }

    /// The L1 data cache
    pub fn l1_data(&self) -> &Cache {
        &self.l1_data
    }

    /// The unified L2 cache
    pub fn l2(&self) -> &Cache {
        &self.l2
    }

    /// Cost figure over the whole hierarchy
    ///
    /// `0.5 * (L1-I misses + L1-D misses + L2 misses + all writebacks)`.
    pub fn cost(&self) -> f64 {
        let misses = self.l1_instruction.misses + self.l1_data.misses + self.l2.misses;
        let writebacks =
            self.l1_instruction.writebacks + self.l1_data.writebacks + self.l2.writebacks;
        0.5 * (misses + writebacks) as f64
    }

    /// Snapshot of all counters and the cost, for serialisation
    pub fn report(&self) -> HierarchyReport {
        HierarchyReport {
            l1_instruction: self.l1_instruction.stats(),
            l1_data: self.l1_data.stats(),
            l2: self.l2.stats(),
            cost: self.cost(),
        }
    }

    /// Log detailed statistics for all caches at info level
    pub fn dump_stats(&self) {
        info!("--- L1 Instruction Cache Stats ---");
        for line in self.l1_instruction.stats().to_string().lines() {
            info!("{line}");
        }
        info!("--- L1 Data Cache Stats ---");
        for line in self.l1_data.stats().to_string().lines() {
            info!("{line}");
        }
        info!("--- L2 Unified Cache Stats ---");
        for line in self.l2.stats().to_string().lines() {
            info!("{line}");
        }
        info!("Final cost: {}", self.cost());
    }
}

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

//! Set-associative cache model
//!
//! This module implements a parameterised set-associative cache with LRU
//! replacement and write-back tracking, driven by a raw address stream.
//! It is independent of the CPU: the cache never holds data, only tags and
//! bookkeeping, and every access updates monotonic hit/miss/writeback
//! counters.
//!
//! # Address mapping
//!
//! ```text
//! block_index = address / block_size
//! set         = block_index % num_sets
//! tag         = block_index / num_sets
//! ```
//!
//! # Example
//!
//! ```
//! use armsim::core::memory::Cache;
//!
//! // 1 KiB direct-mapped cache with 16-byte blocks
//! let mut cache = Cache::new(1024, 16, 1, true).unwrap();
//!
//! assert!(!cache.access(0x100, false).is_hit()); // cold miss
//! assert!(cache.access(0x100, false).is_hit());
//! assert_eq!(cache.stats().misses, 1);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::fmt;

use serde::Serialize;

use crate::core::error::{EmulatorError, Result};

mod hierarchy;

#[cfg(test)]
mod tests;

pub use hierarchy::{
    AccessKind, HierarchyConfig, HierarchyReport, L1Topology, MemorySimulator, L1_CACHE_SIZE,
    L2_CACHE_SIZE,
};

/// A single block (cache line) in a cache
///
/// Blocks hold no data, only the bookkeeping the replacement and
/// write-back policies need.
#[derive(Debug, Clone, Copy, Default)]
struct Block {
    /// Valid bit
    valid: bool,
    /// Dirty bit: written since the block was installed
    dirty: bool,
    /// Address tag distinguishing blocks that alias into the same set
    tag: u64,
    /// LRU timestamp of the last access
    last_used: u64,
}

/// Outcome of a single cache access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// A valid block with the matching tag was found
    Hit,
    /// The block was installed, possibly evicting another
    Miss,
}

impl AccessOutcome {
    /// Whether this access hit
    #[inline(always)]
    pub fn is_hit(self) -> bool {
        self == AccessOutcome::Hit
    }

    /// Whether this access missed
    #[inline(always)]
    pub fn is_miss(self) -> bool {
        self == AccessOutcome::Miss
    }
}

/// Monotonic cache access counters
///
/// `accesses == hits + misses` holds at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Total accesses
    pub accesses: u64,
    /// Accesses that found their block
    pub hits: u64,
    /// Accesses that installed their block
    pub misses: u64,
    /// Dirty blocks evicted
    pub writebacks: u64,
}

impl CacheStats {
    /// Fraction of accesses that hit (0.0 when there were none)
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed (0.0 when there were none)
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12}: {}", "Accesses", self.accesses)?;
        writeln!(f, "{:<12}: {}", "Hits", self.hits)?;
        writeln!(f, "{:<12}: {}", "Misses", self.misses)?;
        writeln!(f, "{:<12}: {}", "Writebacks", self.writebacks)?;
        writeln!(f, "{:<12}: {:.2}%", "Hit rate", self.hit_rate() * 100.0)?;
        write!(f, "{:<12}: {:.2}%", "Miss rate", self.miss_rate() * 100.0)
    }
}

/// A set-associative cache with LRU replacement and write-back tracking
///
/// The geometry is validated at construction: `block_size` and
/// `associativity` must be non-zero and `size` an exact multiple of
/// `block_size * associativity`. A direct-mapped cache is
/// `associativity == 1`; a fully associative one has a single set.
#[derive(Debug)]
pub struct Cache {
    /// Total size in bytes
    size: u64,
    /// Block (line) size in bytes
    block_size: u64,
    /// Ways per set
    associativity: u64,
    /// Derived set count
    num_sets: u64,
    /// Whether writes mark blocks dirty for write-back accounting
    write_back: bool,
    /// `blocks[set][way]`
    blocks: Vec<Vec<Block>>,
    /// Monotonic LRU timestamp, bumped on every access
    time: u64,

    // Statistics
    accesses: u64,
    hits: u64,
    misses: u64,
    writebacks: u64,
}

impl Cache {
    /// Create a cache with the given geometry
    ///
    /// # Arguments
    ///
    /// * `size` - Total size in bytes
    /// * `block_size` - Block size in bytes, non-zero
    /// * `associativity` - Ways per set, non-zero
    /// * `write_back` - Track dirty blocks and count write-backs
    ///
    /// # Errors
    ///
    /// [`EmulatorError::ZeroCacheDimension`] when `block_size` or
    /// `associativity` is zero, [`EmulatorError::InvalidCacheGeometry`]
    /// when `size` does not divide into a whole number of sets.
    pub fn new(size: u64, block_size: u64, associativity: u64, write_back: bool) -> Result<Self> {
        if block_size == 0 || associativity == 0 {
            return Err(EmulatorError::ZeroCacheDimension {
                block_size,
                associativity,
            });
        }
        if size % (block_size * associativity) != 0 {
            return Err(EmulatorError::InvalidCacheGeometry {
                size,
                block_size,
                associativity,
            });
        }
        let num_sets = size / (block_size * associativity);

        Ok(Self {
            size,
            block_size,
            associativity,
            num_sets,
            write_back,
            blocks: vec![vec![Block::default(); associativity as usize]; num_sets as usize],
            time: 0,
            accesses: 0,
            hits: 0,
            misses: 0,
            writebacks: 0,
        })
    }

    /// Access the cache at a byte address
    ///
    /// Counters and the LRU clock advance on every call. On a hit the
    /// block's timestamp is refreshed; on a miss the block is installed in
    /// an invalid way if one exists, otherwise the least-recently-used way
    /// is evicted (first way wins timestamp ties) and, if it was dirty,
    /// the write-back counter is bumped.
    ///
    /// # Arguments
    ///
    /// * `address` - Byte address of the access
    /// * `write` - Whether this access carries write intent
    ///
    /// # Example
    ///
    /// ```
    /// use armsim::core::memory::Cache;
    ///
    /// let mut cache = Cache::new(1024, 16, 1, true).unwrap();
    /// cache.access(0x200, true);        // install dirty
    /// cache.access(0x200 + 1024, false); // same set, different tag: evict
    /// assert_eq!(cache.stats().writebacks, 1);
    /// ```
    pub fn access(&mut self, address: u64, write: bool) -> AccessOutcome {
        self.accesses += 1;
        self.time += 1;
        let time = self.time;
        let mark_dirty = write && self.write_back;

        let block_index = address / self.block_size;
        let set_index = (block_index % self.num_sets) as usize;
        let tag = block_index / self.num_sets;
        let set = &mut self.blocks[set_index];

        // Hit scan
        for block in set.iter_mut() {
            if block.valid && block.tag == tag {
                self.hits += 1;
                block.last_used = time;
                if mark_dirty {
                    block.dirty = true;
                }
                return AccessOutcome::Hit;
            }
        }

        self.misses += 1;

        // Prefer an invalid way
        if let Some(block) = set.iter_mut().find(|block| !block.valid) {
            *block = Block {
                valid: true,
                dirty: mark_dirty,
                tag,
                last_used: time,
            };
            return AccessOutcome::Miss;
        }

        // All ways valid: evict the LRU way, first way wins ties
        let mut victim = 0;
        for (way, block) in set.iter().enumerate() {
            if block.last_used < set[victim].last_used {
                victim = way;
            }
        }
        if set[victim].dirty {
            self.writebacks += 1;
        }
        set[victim] = Block {
            valid: true,
            dirty: mark_dirty,
            tag,
            last_used: time,
        };
        AccessOutcome::Miss
    }

    /// Current counter snapshot
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            accesses: self.accesses,
            hits: self.hits,
            misses: self.misses,
            writebacks: self.writebacks,
        }
    }

    /// Total size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Block size in bytes
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Ways per set
    pub fn associativity(&self) -> u64 {
        self.associativity
    }

    /// Number of sets
    pub fn num_sets(&self) -> u64 {
        self.num_sets
    }

    /// Whether write-back tracking is enabled
    pub fn write_back_enabled(&self) -> bool {
        self.write_back
    }
}

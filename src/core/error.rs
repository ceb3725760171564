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

//! Simulator error types

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Simulator error types
///
/// Configuration errors are fatal at construction time: no cache or
/// simulator object is produced. Everything that can go wrong during
/// execution itself (unknown encodings, out-of-range memory accesses,
/// short input tails) is non-fatal and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmulatorError {
    /// Cache block size or associativity is zero
    #[error("cache block size and associativity must be non-zero (block_size={block_size}, associativity={associativity})")]
    ZeroCacheDimension {
        /// Configured block size in bytes
        block_size: u64,
        /// Configured number of ways per set
        associativity: u64,
    },

    /// Cache size does not divide evenly into sets
    #[error("cache size {size} is not a multiple of block_size {block_size} x associativity {associativity}")]
    InvalidCacheGeometry {
        /// Total cache size in bytes
        size: u64,
        /// Block size in bytes
        block_size: u64,
        /// Number of ways per set
        associativity: u64,
    },

    /// L1 block size outside the supported set
    #[error("L1 cache block size must be 4, 8, 16, or 32 bytes (got {got})")]
    InvalidL1BlockSize {
        /// The rejected block size
        got: u64,
    },

    /// L2 block size outside the supported set
    #[error("L2 cache block size must be 16, 32, or 64 bytes (got {got})")]
    InvalidL2BlockSize {
        /// The rejected block size
        got: u64,
    },

    /// Unrecognised L1 topology name
    #[error("unknown L1 topology {name:?}, expected \"direct\" or \"associative\"")]
    UnknownTopology {
        /// The rejected topology name
        name: String,
    },

    /// A memory image does not fit into the CPU's data memory
    #[error("memory image of {len} bytes does not fit at offset {offset}")]
    MemoryImage {
        /// Byte offset the image was to be loaded at
        offset: usize,
        /// Length of the image in bytes
        len: usize,
    },

    /// A line of an address-trace file could not be parsed
    #[error("trace line {line}: {message}")]
    TraceParse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Configuration file error
    #[error("config error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error (file operations)
    #[error("I/O error: {message}")]
    Io {
        /// Error message
        message: String,
    },
}

impl From<std::io::Error> for EmulatorError {
    fn from(err: std::io::Error) -> Self {
        EmulatorError::Io {
            message: err.to_string(),
        }
    }
}

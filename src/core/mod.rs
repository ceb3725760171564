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

//! Core simulation components
//!
//! This module contains all simulator components:
//! - CPU (ARM32 subset: registers, CPSR flags, data memory, executor)
//! - Instruction decoder (big-endian word stream to decoded records)
//! - Cache hierarchy (L1-I / L1-D / unified L2 with LRU and write-back)
//! - Loader (program binaries, cache configuration, address traces)
//! - System integration (CPU + decoded program)

pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod system;

// Re-export commonly used types
pub use cpu::decode::{decode_stream, decode_thumb, decode_word};
pub use cpu::instruction::{Condition, Instruction, Operation};
pub use cpu::{Cpsr, CPU};
pub use error::{EmulatorError, Result};
pub use memory::{
    AccessKind, AccessOutcome, Cache, CacheStats, HierarchyConfig, L1Topology, MemorySimulator,
};
pub use system::System;

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

//! ARM32 subset simulator library
//!
//! This library provides a functional simulator for a subset of the 32-bit
//! ARM instruction set together with a two-level cache hierarchy model:
//! a decoder for big-endian instruction streams, an execution engine over a
//! 16-register CPU with N/Z/C/V flags and a small data memory, and an
//! independently driven L1-I / L1-D / unified-L2 cache simulator.
//!
//! # Example
//!
//! ```
//! use armsim::core::cpu::decode::decode_word;
//! use armsim::core::cpu::CPU;
//!
//! let mut cpu = CPU::new();
//!
//! // MOV r0, #0x80
//! let instr = decode_word(0xE3A00080);
//! cpu.execute(&instr);
//! assert_eq!(cpu.reg(0), 0x80);
//! ```

pub mod core;

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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: initialization, reset, register and memory access
//! - `decode`: instruction decoding
//! - `conditions`: condition-code evaluation and conditional skips
//! - `data_processing`: MOV/ADD/SUB/CMP/AND/ORR/EOR and their flags
//! - `shifts`: standalone shift instructions
//! - `transfer`: LDR/STR
//! - `branches`: B/BL

use super::decode::decode_word;
use super::CPU;

mod basic;
mod conditions;
mod transfer;

/// Decode and execute a single word
fn exec(cpu: &mut CPU, word: u32) {
    cpu.execute(&decode_word(word));
}

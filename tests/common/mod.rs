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

//! Shared fixtures for integration tests

/// Assemble 32-bit words into a big-endian program binary
#[allow(dead_code)]
pub fn assemble(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

/// The canonical demo program exercising every instruction family
///
/// ```text
/// MOV r0, #0x80        LDR r1, [r15]       STR r2, [r1]
/// ADD r3, r1, r2       SUB r4, r2, r3      MUL r5, r1, r4
/// CMP r0, r5           AND r6, r0, r5      ORR r7, r0, r5
/// SUBNE r0, r0, r5     ADDEQ r6, r7, r8    LSL r1, r0, #2
/// LSR r2, r0, #2       ASR r4, r1, #5      ROR r0, r0, #2
/// ```
#[allow(dead_code)]
pub fn demo_program() -> Vec<u8> {
    assemble(&[
        0xE3A00080, // MOV r0, #0x80
        0xE59F1000, // LDR r1, [pc]
        0xE5812000, // STR r2, [r1]
        0xE0813002, // ADD r3, r1, r2
        0xE0424003, // SUB r4, r2, r3
        0xE0050194, // MUL r5, r1, r4
        0xE1500005, // CMP r0, r5
        0xE0006005, // AND r6, r0, r5
        0xE1807005, // ORR r7, r0, r5
        0x10400005, // SUBNE r0, r0, r5
        0x00876008, // ADDEQ r6, r7, r8
        0xE1A01100, // LSL r1, r0, #2
        0xE1A02120, // LSR r2, r0, #2
        0xE1A042C1, // ASR r4, r1, #5
        0xE1A00160, // ROR r0, r0, #2
    ])
}

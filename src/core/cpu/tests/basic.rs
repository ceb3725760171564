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

use super::super::{Cpsr, CPU};
use crate::core::error::EmulatorError;

#[test]
fn test_cpu_initialization() {
    let cpu = CPU::new();
    assert_eq!(cpu.registers(), &[0u32; 16]);
    assert_eq!(cpu.cpsr(), Cpsr::empty());
    assert!(cpu.memory().iter().all(|&byte| byte == 0));
    assert_eq!(cpu.memory().len(), CPU::MEMORY_SIZE);
}

#[test]
fn test_register_read_write() {
    let mut cpu = CPU::new();
    cpu.set_reg(5, 0x12345678);
    assert_eq!(cpu.reg(5), 0x12345678);

    cpu.set_reg(CPU::PC, 0x100);
    assert_eq!(cpu.reg(15), 0x100);
}

#[test]
fn test_cpu_reset() {
    let mut cpu = CPU::new();

    cpu.set_reg(1, 0xFFFFFFFF);
    cpu.set_reg(CPU::PC, 0x80);
    cpu.cpsr_mut().insert(Cpsr::Z | Cpsr::C);
    cpu.load_memory(0, &[1, 2, 3, 4]).unwrap();

    cpu.reset();

    assert_eq!(cpu.registers(), &[0u32; 16]);
    assert_eq!(cpu.cpsr(), Cpsr::empty());
    assert!(cpu.memory().iter().all(|&byte| byte == 0));
}

#[test]
fn test_load_memory() {
    let mut cpu = CPU::new();
    cpu.load_memory(8, &1234u32.to_le_bytes()).unwrap();
    assert_eq!(cpu.read_word(8), Some(1234));
}

#[test]
fn test_load_memory_rejects_overflow() {
    let mut cpu = CPU::new();
    let err = cpu.load_memory(1020, &[0u8; 8]).unwrap_err();
    assert_eq!(err, EmulatorError::MemoryImage { offset: 1020, len: 8 });

    // Exactly at the boundary is fine
    cpu.load_memory(1016, &[0u8; 8]).unwrap();
}

#[test]
fn test_word_access_is_little_endian() {
    let mut cpu = CPU::new();
    cpu.load_memory(0, &[0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(cpu.read_word(0), Some(0x12345678));

    cpu.write_word(4, 0xAABBCCDD).unwrap();
    assert_eq!(&cpu.memory()[4..8], &[0xDD, 0xCC, 0xBB, 0xAA]);
}

#[test]
fn test_word_access_bounds() {
    let mut cpu = CPU::new();
    assert_eq!(cpu.read_word(1020), Some(0));
    assert_eq!(cpu.read_word(1021), None);
    assert_eq!(cpu.read_word(u64::MAX), None);

    assert_eq!(cpu.write_word(1020, 1), Some(()));
    assert_eq!(cpu.write_word(1021, 1), None);
}

#[test]
fn test_display_state_block() {
    let mut cpu = CPU::new();
    cpu.set_reg(0, 0x80);
    let text = cpu.to_string();
    assert!(text.contains("R0: 00000080"));
    assert!(text.contains("R15: 00000000"));
    assert!(text.contains("CPSR: N: 0, Z: 0, C: 0, V: 0"));
}

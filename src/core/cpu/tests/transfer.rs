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
use super::exec;

#[test]
fn test_ldr_from_preloaded_memory() {
    let mut cpu = CPU::new();
    cpu.load_memory(8, &1234u32.to_le_bytes()).unwrap();

    // MOV r0, #0x80 then LDR r1, [r15]: after the MOV, R15 is 4; the LDR
    // advances it to 8 before reading the base, so it loads from 8.
    exec(&mut cpu, 0xE3A00080);
    exec(&mut cpu, 0xE59F1000);
    assert_eq!(cpu.reg(1), 1234);
}

#[test]
fn test_str_then_ldr_round_trip() {
    let mut cpu = CPU::new();
    cpu.set_reg(1, 0x40);
    cpu.set_reg(2, 0xDEADBEEF);

    exec(&mut cpu, 0xE5812000); // STR r2, [r1]
    assert_eq!(cpu.read_word(0x40), Some(0xDEADBEEF));

    exec(&mut cpu, 0xE5913000); // LDR r3, [r1]
    assert_eq!(cpu.reg(3), 0xDEADBEEF);
}

#[test]
fn test_str_is_little_endian() {
    let mut cpu = CPU::new();
    cpu.set_reg(1, 0x10);
    cpu.set_reg(2, 0x12345678);

    exec(&mut cpu, 0xE5812000); // STR r2, [r1]
    assert_eq!(&cpu.memory()[0x10..0x14], &[0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn test_ldr_immediate_offset() {
    let mut cpu = CPU::new();
    cpu.load_memory(0x28, &77u32.to_le_bytes()).unwrap();
    cpu.set_reg(0, 0x20);

    exec(&mut cpu, 0xE5901008); // LDR r1, [r0, #8]
    assert_eq!(cpu.reg(1), 77);
}

#[test]
fn test_ldr_register_offset() {
    let mut cpu = CPU::new();
    cpu.load_memory(0x30, &55u32.to_le_bytes()).unwrap();
    cpu.set_reg(1, 0x10);
    cpu.set_reg(2, 0x20);

    exec(&mut cpu, 0xE7910002); // LDR r0, [r1, r2]
    assert_eq!(cpu.reg(0), 55);
}

#[test]
fn test_out_of_range_ldr_is_skipped() {
    let mut cpu = CPU::new();
    cpu.set_reg(0, 0x400); // one past the last valid word base
    cpu.set_reg(1, 0xAAAA);

    exec(&mut cpu, 0xE5901000); // LDR r1, [r0]
    assert_eq!(cpu.reg(1), 0xAAAA); // untouched
    assert_eq!(cpu.reg(15), 4); // but R15 advanced
    assert_eq!(cpu.cpsr(), Cpsr::empty());
}

#[test]
fn test_last_valid_word_base() {
    let mut cpu = CPU::new();
    cpu.set_reg(0, 0x3FC); // 1020: the last word-sized slot
    cpu.set_reg(2, 99);

    exec(&mut cpu, 0xE5802000); // STR r2, [r0]
    assert_eq!(cpu.read_word(0x3FC), Some(99));

    cpu.set_reg(0, 0x3FD);
    cpu.set_reg(2, 11);
    exec(&mut cpu, 0xE5802000); // straddles the end: skipped
    assert_eq!(cpu.read_word(0x3FC), Some(99));
}

#[test]
fn test_out_of_range_str_is_skipped() {
    let mut cpu = CPU::new();
    cpu.set_reg(0, 0x1000);
    cpu.set_reg(2, 0xBEEF);

    exec(&mut cpu, 0xE5802000); // STR r2, [r0]
    assert!(cpu.memory().iter().all(|&byte| byte == 0));
}

#[test]
fn test_wrapping_address_does_not_alias_into_range() {
    let mut cpu = CPU::new();
    // base + offset wraps a 32-bit sum to 4, but the effective address
    // must stay out of range
    cpu.set_reg(1, 0xFFFF_FFFF);
    cpu.set_reg(2, 5);
    cpu.set_reg(0, 0x7777);

    exec(&mut cpu, 0xE7910002); // LDR r0, [r1, r2]
    assert_eq!(cpu.reg(0), 0x7777);
}

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

/// Run `MOV<cond> r0, #1` under the given flags and report whether it
/// executed
fn executes_under(condition: u8, flags: Cpsr) -> bool {
    let mut cpu = CPU::new();
    *cpu.cpsr_mut() = flags;
    let word = (u32::from(condition) << 28) | 0x03A00001;
    exec(&mut cpu, word);
    cpu.reg(0) == 1
}

#[test]
fn test_condition_table() {
    let n = Cpsr::N;
    let z = Cpsr::Z;
    let c = Cpsr::C;
    let v = Cpsr::V;
    let none = Cpsr::empty();

    // (condition, flags it passes under, flags it fails under)
    let cases: &[(u8, Cpsr, Cpsr)] = &[
        (0b0000, z, none),        // EQ
        (0b0001, none, z),        // NE
        (0b0010, c, none),        // CS
        (0b0011, none, c),        // CC
        (0b0100, n, none),        // MI
        (0b0101, none, n),        // PL
        (0b0110, v, none),        // VS
        (0b0111, none, v),        // VC
        (0b1000, c, c | z),       // HI
        (0b1001, z, c),           // LS
        (0b1010, n | v, n),       // GE
        (0b1011, v, n | v),       // LT
        (0b1100, none, z),        // GT
        (0b1101, z | n, none),    // LE
    ];

    for &(condition, pass, fail) in cases {
        assert!(
            executes_under(condition, pass),
            "condition {condition:04b} should pass under {pass:?}"
        );
        assert!(
            !executes_under(condition, fail),
            "condition {condition:04b} should fail under {fail:?}"
        );
    }
}

#[test]
fn test_al_and_nv_always_execute() {
    assert!(executes_under(0b1110, Cpsr::empty()));
    assert!(executes_under(0b1110, Cpsr::all()));
    assert!(executes_under(0b1111, Cpsr::empty()));
    assert!(executes_under(0b1111, Cpsr::all()));
}

#[test]
fn test_more_condition_corners() {
    // HI needs C set and Z clear
    assert!(!executes_under(0b1000, Cpsr::empty()));
    // LS passes on C clear even with Z clear
    assert!(executes_under(0b1001, Cpsr::empty()));
    // GE passes when both N and V are clear
    assert!(executes_under(0b1010, Cpsr::empty()));
    // GT fails when N != V even with Z clear
    assert!(!executes_under(0b1100, Cpsr::N));
    // LE passes when N != V
    assert!(executes_under(0b1101, Cpsr::V));
}

#[test]
fn test_failed_condition_is_a_complete_no_op() {
    let mut cpu = CPU::new();
    cpu.set_reg(6, 0xAAAA);
    cpu.set_reg(7, 1);
    cpu.set_reg(8, 2);
    cpu.set_reg(CPU::PC, 0x40);

    let registers_before = *cpu.registers();
    let cpsr_before = cpu.cpsr();

    // ADDEQ r6, r7, r8 with Z clear: must not even advance R15
    exec(&mut cpu, 0x00876008);

    assert_eq!(cpu.registers(), &registers_before);
    assert_eq!(cpu.cpsr(), cpsr_before);
}

#[test]
fn test_passed_condition_executes() {
    let mut cpu = CPU::new();
    cpu.set_reg(7, 1);
    cpu.set_reg(8, 2);
    cpu.cpsr_mut().insert(Cpsr::Z);

    exec(&mut cpu, 0x00876008); // ADDEQ r6, r7, r8
    assert_eq!(cpu.reg(6), 3);
    assert_eq!(cpu.reg(15), 4);
}

#[test]
fn test_subne_skipped_after_equal_compare() {
    let mut cpu = CPU::new();
    cpu.set_reg(0, 5);
    cpu.set_reg(5, 5);

    exec(&mut cpu, 0xE1500005); // CMP r0, r5 -> Z=1
    exec(&mut cpu, 0x10400005); // SUBNE r0, r0, r5: skipped
    assert_eq!(cpu.reg(0), 5);
}

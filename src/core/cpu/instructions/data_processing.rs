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

use super::super::instruction::Operand2;
use super::super::{Cpsr, CPU};

impl CPU {
    // === Data Processing Instructions ===

    /// MOV: Move
    ///
    /// Format: mov rd, op2
    /// Operation: rd = op2
    ///
    /// With S set, N and Z follow the result and C takes the shifter
    /// carry-out. An immediate operand bypasses the shifter, so its
    /// carry-out is the current C and the flag is left as it was.
    pub(in crate::core::cpu) fn op_mov(&mut self, rd: u8, op2: &Operand2, set_flags: bool) {
        let (value, carry) = self.operand2(op2);
        self.set_reg(rd, value);
        if set_flags {
            self.update_nz(value);
            self.cpsr.set(Cpsr::C, carry);
        }
    }

    /// ADD: Add
    ///
    /// Format: add rd, rn, op2
    /// Operation: rd = (rn + op2) mod 2^32
    ///
    /// With S set: C is the unsigned carry of the full 33-bit sum, V is
    /// `((rn ^ result) & (op2 ^ result)) >> 31`.
    pub(in crate::core::cpu) fn op_add(&mut self, rd: u8, rn: u8, op2: &Operand2, set_flags: bool) {
        let (op2, _) = self.operand2(op2);
        let op1 = self.reg(rn);
        let wide = u64::from(op1) + u64::from(op2);
        let result = wide as u32;
        self.set_reg(rd, result);

        if set_flags {
            self.update_nz(result);
            self.cpsr.set(Cpsr::C, wide > 0xFFFF_FFFF);
            self.cpsr
                .set(Cpsr::V, ((op1 ^ result) & (op2 ^ result)) >> 31 == 1);
        }
    }

    /// SUB: Subtract
    ///
    /// Format: sub rd, rn, op2
    /// Operation: rd = (rn - op2) mod 2^32
    ///
    /// With S set: C is ARM's "no borrow" (rn >= op2), V is
    /// `((rn ^ op2) & (rn ^ result)) >> 31`.
    pub(in crate::core::cpu) fn op_sub(&mut self, rd: u8, rn: u8, op2: &Operand2, set_flags: bool) {
        let (op2, _) = self.operand2(op2);
        let op1 = self.reg(rn);
        let result = op1.wrapping_sub(op2);
        self.set_reg(rd, result);

        if set_flags {
            self.update_nz(result);
            self.cpsr.set(Cpsr::C, op1 >= op2);
            self.cpsr
                .set(Cpsr::V, ((op1 ^ op2) & (op1 ^ result)) >> 31 == 1);
        }
    }

    /// CMP: Compare
    ///
    /// Format: cmp rn, op2
    /// Operation: rn - op2, result discarded
    ///
    /// Flags update unconditionally, exactly as SUB with S set.
    pub(in crate::core::cpu) fn op_cmp(&mut self, rn: u8, op2: &Operand2) {
        let (op2, _) = self.operand2(op2);
        let op1 = self.reg(rn);
        let result = op1.wrapping_sub(op2);

        self.update_nz(result);
        self.cpsr.set(Cpsr::C, op1 >= op2);
        self.cpsr
            .set(Cpsr::V, ((op1 ^ op2) & (op1 ^ result)) >> 31 == 1);
    }

    /// AND: Bitwise AND
    ///
    /// Format: and rd, rn, op2
    /// Operation: rd = rn & op2
    pub(in crate::core::cpu) fn op_and(&mut self, rd: u8, rn: u8, op2: &Operand2, set_flags: bool) {
        let (op2, _) = self.operand2(op2);
        let result = self.reg(rn) & op2;
        self.set_reg(rd, result);
        if set_flags {
            self.update_nz(result);
        }
    }

    /// ORR: Bitwise OR
    ///
    /// Format: orr rd, rn, op2
    /// Operation: rd = rn | op2
    pub(in crate::core::cpu) fn op_orr(&mut self, rd: u8, rn: u8, op2: &Operand2, set_flags: bool) {
        let (op2, _) = self.operand2(op2);
        let result = self.reg(rn) | op2;
        self.set_reg(rd, result);
        if set_flags {
            self.update_nz(result);
        }
    }

    /// EOR: Bitwise exclusive OR
    ///
    /// Format: eor rd, rn, op2
    /// Operation: rd = rn ^ op2
    pub(in crate::core::cpu) fn op_eor(&mut self, rd: u8, rn: u8, op2: &Operand2, set_flags: bool) {
        let (op2, _) = self.operand2(op2);
        let result = self.reg(rn) ^ op2;
        self.set_reg(rd, result);
        if set_flags {
            self.update_nz(result);
        }
    }
}

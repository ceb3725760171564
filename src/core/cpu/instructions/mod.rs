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

//! CPU instruction implementations
//!
//! This module contains all instruction implementations, organized by
//! instruction family.

use log::warn;

use super::instruction::{Instruction, Operation};
use super::CPU;

// Instruction modules organized by family
mod branch;
mod data_processing;
mod multiply;
mod shift;
mod transfer;

impl CPU {
    /// Execute a decoded instruction
    ///
    /// If the condition fails, the CPU is left bit-identical to its
    /// pre-state, including R15. Otherwise R15 advances by 4 before the
    /// instruction body runs; branches overwrite it relative to the old
    /// value.
    ///
    /// # Arguments
    ///
    /// * `instruction` - The decoded instruction to apply
    pub fn execute(&mut self, instruction: &Instruction) {
        if !self.condition_passed(instruction.condition) {
            return;
        }

        let pc = self.reg(Self::PC);
        self.set_reg(Self::PC, pc.wrapping_add(4));

        let s = instruction.set_flags;
        match &instruction.op {
            Operation::Mov { rd, op2 } => self.op_mov(*rd, op2, s),
            Operation::Add { rd, rn, op2 } => self.op_add(*rd, *rn, op2, s),
            Operation::Sub { rd, rn, op2 } => self.op_sub(*rd, *rn, op2, s),
            Operation::Cmp { rn, op2 } => self.op_cmp(*rn, op2),
            Operation::And { rd, rn, op2 } => self.op_and(*rd, *rn, op2, s),
            Operation::Orr { rd, rn, op2 } => self.op_orr(*rd, *rn, op2, s),
            Operation::Eor { rd, rn, op2 } => self.op_eor(*rd, *rn, op2, s),
            Operation::Mul { rd, rm, rs } => self.op_mul(*rd, *rm, *rs, s),
            Operation::Mla { rd, rm, rs, rn } => self.op_mla(*rd, *rm, *rs, *rn, s),
            Operation::Ldr { rd, rn, offset } => self.op_ldr(*rd, *rn, offset),
            Operation::Str { rd, rn, offset } => self.op_str(*rd, *rn, offset),
            Operation::Shift {
                kind,
                rd,
                rm,
                amount,
            } => self.op_shift(*kind, *rd, *rm, amount, s),
            Operation::Branch { link, offset24 } => self.op_branch(pc, *link, *offset24),
            Operation::UnknownDpImmediate
            | Operation::UnknownDpRegister
            | Operation::UnknownThumb
            | Operation::Unknown => {
                warn!(
                    "Unrecognised instruction 0x{:08X}, treated as NOP",
                    instruction.raw
                );
            }
        }
    }
}

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

use super::super::instruction::{ShiftAmount, ShiftKind};
use super::super::shifter::barrel_shift;
use super::super::{Cpsr, CPU};

impl CPU {
    // === Standalone Shift Instructions ===

    /// LSL / LSR / ASR / ROR: shift rm into rd
    ///
    /// Format: <shift> rd, rm, #amount | <shift> rd, rm, rs
    /// Operation: rd = shift(rm, amount)
    ///
    /// A register-specified amount uses the low byte of rs, so it may
    /// exceed 31. In this encoding an LSR or ASR amount of 0 means a
    /// 32-bit shift; LSL and ROR amounts of 0 leave the value untouched.
    /// With S set, C takes the shifter carry-out.
    pub(in crate::core::cpu) fn op_shift(
        &mut self,
        kind: ShiftKind,
        rd: u8,
        rm: u8,
        amount: &ShiftAmount,
        set_flags: bool,
    ) {
        let value = self.reg(rm);
        let amount = match amount {
            ShiftAmount::Immediate(n) => u32::from(*n),
            ShiftAmount::Register(rs) => self.reg(*rs) & 0xFF,
        };
        let amount = match kind {
            ShiftKind::Lsr | ShiftKind::Asr if amount == 0 => 32,
            _ => amount,
        };

        let (result, carry) = barrel_shift(kind, value, amount, self.cpsr.c());
        self.set_reg(rd, result);
        if set_flags {
            self.update_nz(result);
            self.cpsr.set(Cpsr::C, carry);
        }
    }
}

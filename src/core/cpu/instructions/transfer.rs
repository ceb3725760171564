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

use log::warn;

use super::super::instruction::TransferOffset;
use super::super::CPU;

impl CPU {
    // === Load/Store Instructions ===

    /// Effective address of a load/store
    ///
    /// The offset is always added (the U bit is not interpreted) and the
    /// sum is widened to 64 bits so a wrapping base+offset cannot alias
    /// back into data memory.
    fn transfer_address(&self, rn: u8, offset: &TransferOffset) -> u64 {
        let offset = match offset {
            TransferOffset::Immediate(n) => u64::from(*n),
            TransferOffset::Register { rm, .. } => u64::from(self.reg(*rm)),
        };
        u64::from(self.reg(rn)) + offset
    }

    /// LDR: Load word
    ///
    /// Format: ldr rd, [rn] | ldr rd, [rn, #offset] | ldr rd, [rn, rm]
    /// Operation: rd = mem32[rn + offset] (little-endian)
    ///
    /// An address outside data memory skips the load without touching any
    /// state.
    pub(in crate::core::cpu) fn op_ldr(&mut self, rd: u8, rn: u8, offset: &TransferOffset) {
        let address = self.transfer_address(rn, offset);
        match self.read_word(address) {
            Some(value) => self.set_reg(rd, value),
            None => warn!("LDR address 0x{address:X} out of range, skipped"),
        }
    }

    /// STR: Store word
    ///
    /// Format: str rd, [rn] | str rd, [rn, #offset] | str rd, [rn, rm]
    /// Operation: mem32[rn + offset] = rd (little-endian)
    pub(in crate::core::cpu) fn op_str(&mut self, rd: u8, rn: u8, offset: &TransferOffset) {
        let address = self.transfer_address(rn, offset);
        let value = self.reg(rd);
        if self.write_word(address, value).is_none() {
            warn!("STR address 0x{address:X} out of range, skipped");
        }
    }
}

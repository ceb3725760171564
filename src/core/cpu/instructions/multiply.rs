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

use super::super::CPU;

impl CPU {
    // === Multiply Instructions ===

    /// MUL: Multiply
    ///
    /// Format: mul rd, rm, rs
    /// Operation: rd = (rm * rs) mod 2^32
    ///
    /// With S set, only N and Z are updated.
    pub(in crate::core::cpu) fn op_mul(&mut self, rd: u8, rm: u8, rs: u8, set_flags: bool) {
        let result = self.reg(rm).wrapping_mul(self.reg(rs));
        self.set_reg(rd, result);
        if set_flags {
            self.update_nz(result);
        }
    }

    /// MLA: Multiply accumulate
    ///
    /// Format: mla rd, rm, rs, rn
    /// Operation: rd = (rm * rs + rn) mod 2^32
    pub(in crate::core::cpu) fn op_mla(&mut self, rd: u8, rm: u8, rs: u8, rn: u8, set_flags: bool) {
        let result = self
            .reg(rm)
            .wrapping_mul(self.reg(rs))
            .wrapping_add(self.reg(rn));
        self.set_reg(rd, result);
        if set_flags {
            self.update_nz(result);
        }
    }
}

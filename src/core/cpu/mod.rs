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

//! CPU (ARM32 subset) emulation implementation
//!
//! # Specifications
//! - Architecture: 32-bit ARM subset (data processing, multiply,
//!   word load/store, branch)
//! - Registers: 16 general-purpose registers; R15 is the program counter,
//!   R14 the link register
//! - Flags: CPSR N/Z/C/V
//! - Data memory: 1 KiB, little-endian 32-bit loads and stores
//!
//! The simulator is purely functional: one instruction fully retires before
//! the next begins, and a failed condition check leaves the CPU untouched.
//!
//! # Example
//! ```
//! use armsim::core::cpu::CPU;
//!
//! let mut cpu = CPU::new();
//! cpu.reset();
//! assert_eq!(cpu.reg(0), 0);
//! ```

use std::fmt;

use bitflags::bitflags;
use log::info;

use crate::core::error::{EmulatorError, Result};
use self::instruction::Condition;

pub mod decode;
pub mod instruction;
pub mod shifter;

mod instructions;

#[cfg(test)]
mod tests;

bitflags! {
    /// CPSR condition flags, at their architectural bit positions
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Cpsr: u32 {
        /// Negative: bit 31 of the last flag-setting result
        const N = 1 << 31;
        /// Zero: the last flag-setting result was zero
        const Z = 1 << 30;
        /// Carry: addition overflowed, or subtraction did not borrow
        const C = 1 << 29;
        /// Overflow: signed arithmetic overflowed
        const V = 1 << 28;
    }
}

impl Cpsr {
    /// Negative flag
    #[inline(always)]
    pub fn n(self) -> bool {
        self.contains(Cpsr::N)
    }

    /// Zero flag
    #[inline(always)]
    pub fn z(self) -> bool {
        self.contains(Cpsr::Z)
    }

    /// Carry flag
    #[inline(always)]
    pub fn c(self) -> bool {
        self.contains(Cpsr::C)
    }

    /// Overflow flag
    #[inline(always)]
    pub fn v(self) -> bool {
        self.contains(Cpsr::V)
    }
}

/// ARM32 subset CPU
///
/// Created with all registers, flags, and memory zeroed. The host may
/// preload data memory with [`CPU::load_memory`] before execution.
///
/// # Example
/// ```
/// use armsim::core::cpu::decode::decode_word;
/// use armsim::core::cpu::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.execute(&decode_word(0xE3A00080)); // MOV r0, #0x80
/// assert_eq!(cpu.reg(0), 0x80);
/// assert_eq!(cpu.reg(CPU::PC), 4);
/// ```
pub struct CPU {
    /// General purpose registers (r0-r15)
    regs: [u32; 16],

    /// Status flags
    cpsr: Cpsr,

    /// Data memory, little-endian 32-bit words
    memory: [u8; Self::MEMORY_SIZE],
}

impl CPU {
    /// Data memory size in bytes
    pub const MEMORY_SIZE: usize = 1024;

    /// Program counter register index
    pub const PC: u8 = 15;

    /// Link register index
    pub const LR: u8 = 14;

    /// Create a new CPU with zeroed registers, flags, and memory
    pub fn new() -> Self {
        Self {
            regs: [0u32; 16],
            cpsr: Cpsr::empty(),
            memory: [0u8; Self::MEMORY_SIZE],
        }
    }

    /// Reset the CPU to its initial state
    ///
    /// Mimics a power-on reset: registers, flags, and memory all return
    /// to zero.
    pub fn reset(&mut self) {
        self.regs = [0u32; 16];
        self.cpsr = Cpsr::empty();
        self.memory = [0u8; Self::MEMORY_SIZE];
    }

    /// Read a general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0-15)
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        self.regs[index as usize]
    }

    /// Write a general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0-15)
    /// - `value`: Value to write
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        self.regs[index as usize] = value;
    }

    /// The full register file
    pub fn registers(&self) -> &[u32; 16] {
        &self.regs
    }

    /// Current status flags
    pub fn cpsr(&self) -> Cpsr {
        self.cpsr
    }

    /// Mutable access to the status flags
    ///
    /// Intended for hosts that seed flag state before running a program.
    pub fn cpsr_mut(&mut self) -> &mut Cpsr {
        &mut self.cpsr
    }

    /// The data memory
    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    /// Copy an image into data memory before execution
    ///
    /// # Arguments
    /// - `offset`: Byte offset to load at
    /// - `data`: Bytes to copy
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::MemoryImage`] if the image does not fit.
    ///
    /// # Example
    /// ```
    /// use armsim::core::cpu::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load_memory(8, &1234u32.to_le_bytes()).unwrap();
    /// assert_eq!(cpu.read_word(8), Some(1234));
    /// ```
    pub fn load_memory(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        let end = offset
            .checked_add(data.len())
            .ok_or(EmulatorError::MemoryImage {
                offset,
                len: data.len(),
            })?;
        if end > Self::MEMORY_SIZE {
            return Err(EmulatorError::MemoryImage {
                offset,
                len: data.len(),
            });
        }
        self.memory[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Read a little-endian 32-bit word from data memory
    ///
    /// Returns `None` when the word does not lie entirely within memory.
    /// The address is 64-bit so a wrapped base+offset sum cannot alias
    /// back into range.
    pub fn read_word(&self, address: u64) -> Option<u32> {
        if address.checked_add(4)? <= Self::MEMORY_SIZE as u64 {
            let addr = address as usize;
            Some(u32::from_le_bytes([
                self.memory[addr],
                self.memory[addr + 1],
                self.memory[addr + 2],
                self.memory[addr + 3],
            ]))
        } else {
            None
        }
    }

    /// Write a little-endian 32-bit word to data memory
    ///
    /// Returns `None` (without touching memory) when the word does not lie
    /// entirely within memory.
    pub fn write_word(&mut self, address: u64, value: u32) -> Option<()> {
        if address.checked_add(4)? <= Self::MEMORY_SIZE as u64 {
            let addr = address as usize;
            self.memory[addr..addr + 4].copy_from_slice(&value.to_le_bytes());
            Some(())
        } else {
            None
        }
    }

    /// Check whether an instruction's condition passes against the flags
    fn condition_passed(&self, condition: Condition) -> bool {
        let cpsr = self.cpsr;
        match condition {
            Condition::Eq => cpsr.z(),
            Condition::Ne => !cpsr.z(),
            Condition::Cs => cpsr.c(),
            Condition::Cc => !cpsr.c(),
            Condition::Mi => cpsr.n(),
            Condition::Pl => !cpsr.n(),
            Condition::Vs => cpsr.v(),
            Condition::Vc => !cpsr.v(),
            Condition::Hi => cpsr.c() && !cpsr.z(),
            Condition::Ls => !cpsr.c() || cpsr.z(),
            Condition::Ge => cpsr.n() == cpsr.v(),
            Condition::Lt => cpsr.n() != cpsr.v(),
            Condition::Gt => !cpsr.z() && cpsr.n() == cpsr.v(),
            Condition::Le => cpsr.z() || cpsr.n() != cpsr.v(),
            Condition::Al | Condition::Nv => true,
        }
    }

    /// Update N and Z from a 32-bit result
    fn update_nz(&mut self, result: u32) {
        self.cpsr.set(Cpsr::N, result & 0x8000_0000 != 0);
        self.cpsr.set(Cpsr::Z, result == 0);
    }

    /// Log the register file and flags at info level
    pub fn dump_registers(&self) {
        for (i, regs) in self.regs.chunks(4).enumerate() {
            info!(
                "R{:<2}: {:08X}  R{:<2}: {:08X}  R{:<2}: {:08X}  R{:<2}: {:08X}",
                i * 4,
                regs[0],
                i * 4 + 1,
                regs[1],
                i * 4 + 2,
                regs[2],
                i * 4 + 3,
                regs[3],
            );
        }
        info!(
            "CPSR: N: {}, Z: {}, C: {}, V: {}",
            self.cpsr.n() as u8,
            self.cpsr.z() as u8,
            self.cpsr.c() as u8,
            self.cpsr.v() as u8,
        );
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CPU {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Registers: ")?;
        for (i, value) in self.regs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "R{i}: {value:08X}")?;
        }
        write!(
            f,
            "\nCPSR: N: {}, Z: {}, C: {}, V: {}",
            self.cpsr.n() as u8,
            self.cpsr.z() as u8,
            self.cpsr.c() as u8,
            self.cpsr.v() as u8,
        )
    }
}

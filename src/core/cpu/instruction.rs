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

//! Decoded instruction model
//!
//! A raw 32-bit word decodes into an [`Instruction`]: the 4-bit condition,
//! the S bit, the original word (kept for diagnostics), and an [`Operation`]
//! variant carrying exactly the operand fields that instruction kind uses.
//! Unrecognised encodings decode to the `Unknown*` variants; decoding never
//! fails.

use std::fmt;

/// ARM condition code (bits 31-28 of every instruction)
///
/// `0b1110` (AL) executes unconditionally. The nominally-unconditional
/// `0b1111` encoding is treated the same way here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Condition {
    /// Equal (Z=1)
    Eq = 0b0000,
    /// Not equal (Z=0)
    Ne = 0b0001,
    /// Carry set / unsigned higher or same (C=1)
    Cs = 0b0010,
    /// Carry clear / unsigned lower (C=0)
    Cc = 0b0011,
    /// Negative (N=1)
    Mi = 0b0100,
    /// Positive or zero (N=0)
    Pl = 0b0101,
    /// Overflow (V=1)
    Vs = 0b0110,
    /// No overflow (V=0)
    Vc = 0b0111,
    /// Unsigned higher (C=1 and Z=0)
    Hi = 0b1000,
    /// Unsigned lower or same (C=0 or Z=1)
    Ls = 0b1001,
    /// Signed greater or equal (N=V)
    Ge = 0b1010,
    /// Signed less than (N!=V)
    Lt = 0b1011,
    /// Signed greater than (Z=0 and N=V)
    Gt = 0b1100,
    /// Signed less or equal (Z=1 or N!=V)
    Le = 0b1101,
    /// Always
    Al = 0b1110,
    /// Reserved encoding, executes unconditionally
    Nv = 0b1111,
}

impl Condition {
    /// Build a condition from the low 4 bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            0b0000 => Condition::Eq,
            0b0001 => Condition::Ne,
            0b0010 => Condition::Cs,
            0b0011 => Condition::Cc,
            0b0100 => Condition::Mi,
            0b0101 => Condition::Pl,
            0b0110 => Condition::Vs,
            0b0111 => Condition::Vc,
            0b1000 => Condition::Hi,
            0b1001 => Condition::Ls,
            0b1010 => Condition::Ge,
            0b1011 => Condition::Lt,
            0b1100 => Condition::Gt,
            0b1101 => Condition::Le,
            0b1110 => Condition::Al,
            _ => Condition::Nv,
        }
    }

    /// Assembly suffix for this condition (empty for AL)
    pub fn suffix(self) -> &'static str {
        match self {
            Condition::Eq => "EQ",
            Condition::Ne => "NE",
            Condition::Cs => "CS",
            Condition::Cc => "CC",
            Condition::Mi => "MI",
            Condition::Pl => "PL",
            Condition::Vs => "VS",
            Condition::Vc => "VC",
            Condition::Hi => "HI",
            Condition::Ls => "LS",
            Condition::Ge => "GE",
            Condition::Lt => "LT",
            Condition::Gt => "GT",
            Condition::Le => "LE",
            Condition::Al => "",
            Condition::Nv => "NV",
        }
    }
}

/// Barrel shifter operation (bits 6-5 of a register operand)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftKind {
    /// Logical shift left
    Lsl,
    /// Logical shift right
    Lsr,
    /// Arithmetic shift right (sign replicating)
    Asr,
    /// Rotate right
    Ror,
}

impl ShiftKind {
    /// Build a shift kind from the low 2 bits of `bits`
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => ShiftKind::Lsl,
            0b01 => ShiftKind::Lsr,
            0b10 => ShiftKind::Asr,
            _ => ShiftKind::Ror,
        }
    }

    /// Assembly mnemonic
    pub fn mnemonic(self) -> &'static str {
        match self {
            ShiftKind::Lsl => "LSL",
            ShiftKind::Lsr => "LSR",
            ShiftKind::Asr => "ASR",
            ShiftKind::Ror => "ROR",
        }
    }
}

/// Shift amount: a 5-bit immediate or the low byte of a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftAmount {
    /// Immediate amount from bits 11-7 (0-31)
    Immediate(u8),
    /// Register index whose low byte supplies the amount
    Register(u8),
}

/// Second operand of a data-processing instruction
///
/// The immediate form carries the already ROR-decoded 32-bit value; the
/// register form carries everything the barrel shifter needs, so operand
/// evaluation is total over both (see [`crate::core::cpu::shifter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand2 {
    /// `imm8 ROR (2 * rotate_imm)`, computed at decode time
    Immediate {
        /// The rotated 32-bit immediate
        value: u32,
    },
    /// A register, optionally shifted
    Register {
        /// Source register index
        rm: u8,
        /// Shift operation applied to `rm`
        kind: ShiftKind,
        /// Where the shift amount comes from
        amount: ShiftAmount,
    },
}

/// Offset of a load/store instruction
///
/// The register form captures the encoded shift fields, but execution adds
/// only `rm`'s value: U/P/W bits, byte access, and offset shifting are not
/// interpreted by this simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOffset {
    /// 12-bit unsigned immediate offset
    Immediate(u16),
    /// Register offset with its (uninterpreted) shift fields
    Register {
        /// Offset register index
        rm: u8,
        /// Encoded shift operation (not applied)
        kind: ShiftKind,
        /// Encoded immediate shift amount (not applied)
        amount: u8,
    },
}

/// Instruction kind with its operand fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `rd = op2`
    Mov {
        /// Destination register
        rd: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rd = rn + op2`
    Add {
        /// Destination register
        rd: u8,
        /// First operand register
        rn: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rd = rn - op2`
    Sub {
        /// Destination register
        rd: u8,
        /// First operand register
        rn: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rn - op2`, flags only
    Cmp {
        /// First operand register
        rn: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rd = rn AND op2`
    And {
        /// Destination register
        rd: u8,
        /// First operand register
        rn: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rd = rn OR op2`
    Orr {
        /// Destination register
        rd: u8,
        /// First operand register
        rn: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rd = rn XOR op2`
    Eor {
        /// Destination register
        rd: u8,
        /// First operand register
        rn: u8,
        /// Second operand
        op2: Operand2,
    },
    /// `rd = rm * rs`
    Mul {
        /// Destination register
        rd: u8,
        /// Multiplicand register
        rm: u8,
        /// Multiplier register
        rs: u8,
    },
    /// `rd = rm * rs + rn`
    Mla {
        /// Destination register
        rd: u8,
        /// Multiplicand register
        rm: u8,
        /// Multiplier register
        rs: u8,
        /// Accumulator register
        rn: u8,
    },
    /// Load a 32-bit word from `rn + offset`
    Ldr {
        /// Destination register
        rd: u8,
        /// Base register
        rn: u8,
        /// Address offset
        offset: TransferOffset,
    },
    /// Store a 32-bit word to `rn + offset`
    Str {
        /// Source register
        rd: u8,
        /// Base register
        rn: u8,
        /// Address offset
        offset: TransferOffset,
    },
    /// Standalone shift (`MOV rd, rm, <shift>` with Rn = 0)
    Shift {
        /// Which shift to perform
        kind: ShiftKind,
        /// Destination register
        rd: u8,
        /// Source register
        rm: u8,
        /// Where the amount comes from
        amount: ShiftAmount,
    },
    /// Branch (with optional link) by a 24-bit word offset
    Branch {
        /// Store the return address in R14
        link: bool,
        /// Raw 24-bit offset, not yet sign-extended
        offset24: u32,
    },
    /// Unrecognised data-processing opcode, immediate operand form
    UnknownDpImmediate,
    /// Unrecognised data-processing opcode, register operand form
    UnknownDpRegister,
    /// Thumb halfword (16-bit ISA is not implemented)
    UnknownThumb,
    /// Encoding matched no instruction class
    Unknown,
}

/// A decoded instruction
///
/// Immutable record produced by [`crate::core::cpu::decode::decode_word`]
/// and consumed by [`crate::core::cpu::CPU::execute`].
///
/// # Example
///
/// ```
/// use armsim::core::cpu::decode::decode_word;
/// use armsim::core::cpu::instruction::{Condition, Operation};
///
/// // MOV r0, #0x80
/// let instr = decode_word(0xE3A00080);
/// assert_eq!(instr.condition, Condition::Al);
/// assert!(!instr.set_flags);
/// assert!(matches!(instr.op, Operation::Mov { rd: 0, .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Condition code from bits 31-28
    pub condition: Condition,
    /// S bit: update CPSR flags (forced true for CMP)
    pub set_flags: bool,
    /// The original 32-bit word, for diagnostics
    pub raw: u32,
    /// Instruction kind and operands
    pub op: Operation,
}

impl fmt::Display for Operand2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand2::Immediate { value } => write!(f, "#0x{value:X}"),
            Operand2::Register { rm, kind, amount } => match amount {
                ShiftAmount::Immediate(0) if *kind == ShiftKind::Lsl => write!(f, "r{rm}"),
                ShiftAmount::Immediate(n) => write!(f, "r{rm}, {} #{n}", kind.mnemonic()),
                ShiftAmount::Register(rs) => write!(f, "r{rm}, {} r{rs}", kind.mnemonic()),
            },
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cond = self.condition.suffix();
        let s = if self.set_flags { "S" } else { "" };
        match &self.op {
            Operation::Mov { rd, op2 } => write!(f, "MOV{cond}{s} r{rd}, {op2}"),
            Operation::Add { rd, rn, op2 } => write!(f, "ADD{cond}{s} r{rd}, r{rn}, {op2}"),
            Operation::Sub { rd, rn, op2 } => write!(f, "SUB{cond}{s} r{rd}, r{rn}, {op2}"),
            Operation::Cmp { rn, op2 } => write!(f, "CMP{cond} r{rn}, {op2}"),
            Operation::And { rd, rn, op2 } => write!(f, "AND{cond}{s} r{rd}, r{rn}, {op2}"),
            Operation::Orr { rd, rn, op2 } => write!(f, "ORR{cond}{s} r{rd}, r{rn}, {op2}"),
            Operation::Eor { rd, rn, op2 } => write!(f, "EOR{cond}{s} r{rd}, r{rn}, {op2}"),
            Operation::Mul { rd, rm, rs } => write!(f, "MUL{cond}{s} r{rd}, r{rm}, r{rs}"),
            Operation::Mla { rd, rm, rs, rn } => {
                write!(f, "MLA{cond}{s} r{rd}, r{rm}, r{rs}, r{rn}")
            }
            Operation::Ldr { rd, rn, offset } => {
                write!(f, "LDR{cond} r{rd}, ")?;
                fmt_transfer_address(f, *rn, offset)
            }
            Operation::Str { rd, rn, offset } => {
                write!(f, "STR{cond} r{rd}, ")?;
                fmt_transfer_address(f, *rn, offset)
            }
            Operation::Shift {
                kind,
                rd,
                rm,
                amount,
            } => {
                write!(f, "{}{cond}{s} r{rd}, r{rm}, ", kind.mnemonic())?;
                match amount {
                    ShiftAmount::Immediate(n) => write!(f, "#{n}"),
                    ShiftAmount::Register(rs) => write!(f, "r{rs}"),
                }
            }
            Operation::Branch { link, offset24 } => {
                let l = if *link { "L" } else { "" };
                // Sign-extend the 24-bit field and convert to a byte offset.
                let mut offset = *offset24;
                if offset & 0x0080_0000 != 0 {
                    offset |= 0xFF00_0000;
                }
                let byte_offset = (offset << 2) as i32;
                if byte_offset < 0 {
                    write!(f, "B{l}{cond} #-0x{:X}", byte_offset.unsigned_abs())
                } else {
                    write!(f, "B{l}{cond} #0x{byte_offset:X}")
                }
            }
            Operation::UnknownDpImmediate => {
                write!(f, "UNKNOWN_DP_IMM 0x{:08X}", self.raw)
            }
            Operation::UnknownDpRegister => {
                write!(f, "UNKNOWN_DP_REG 0x{:08X}", self.raw)
            }
            Operation::UnknownThumb => write!(f, "UNKNOWN_THUMB 0x{:04X}", self.raw),
            Operation::Unknown => write!(f, "UNKNOWN 0x{:08X}", self.raw),
        }
    }
}

fn fmt_transfer_address(f: &mut fmt::Formatter<'_>, rn: u8, offset: &TransferOffset) -> fmt::Result {
    match offset {
        TransferOffset::Immediate(0) => write!(f, "[r{rn}]"),
        TransferOffset::Immediate(n) => write!(f, "[r{rn}, #0x{n:X}]"),
        TransferOffset::Register { rm, .. } => write!(f, "[r{rn}, r{rm}]"),
    }
}

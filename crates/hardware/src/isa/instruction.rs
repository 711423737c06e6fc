//! Instruction encoding and decoding utilities.
//!
//! Provides the typed opcode table and the split of a 16-bit instruction word
//! into its 5-bit opcode and 11-bit operand fields.

use std::fmt;

use super::opcodes as op;
use crate::common::constants::{OPCODE_MASK, OPCODE_SHIFT, OPERAND_MASK};

/// The instruction families dispatched by the control unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Transfers between registers, main memory, and the I/O buffer.
    MemoryAccess,
    /// Operations carried out by the ALU.
    Alu,
    /// Unconditional and flag-conditional branches.
    ControlFlow,
    /// End of program.
    Termination,
}

/// Every opcode in the instruction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Write MBR to memory.
    Wm,
    /// Read memory into MBR.
    Rm,
    /// Unconditional branch.
    Br,
    /// Read the I/O buffer into IOBR.
    Rio,
    /// Write IOBR to the I/O buffer.
    Wio,
    /// Load MBR with the operand.
    Wb,
    /// Load IOBR with the operand.
    Wib,
    /// Load the accumulator from the bus.
    Wacc,
    /// Store the accumulator to the bus.
    Racc,
    /// Exchange MBR and IOBR.
    Swap,
    /// Branch if ACC - MBR is negative (SF set).
    Brlt,
    /// Branch if ACC - MBR is positive (SF and ZF clear).
    Brgt,
    /// Branch if ACC - MBR is non-zero (ZF clear).
    Brne,
    /// Branch if ACC - MBR is zero (ZF set).
    Bre,
    /// Shift right.
    Shr,
    /// Shift left.
    Shl,
    /// Bitwise exclusive-or.
    Xor,
    /// Bitwise complement.
    Not,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
    /// Booth multiply.
    Mul,
    /// Subtract.
    Sub,
    /// Add.
    Add,
    /// End of program.
    Eop,
}

impl Opcode {
    /// All opcodes, in encoding order.
    pub const ALL: [Self; 24] = [
        Self::Wm,
        Self::Rm,
        Self::Br,
        Self::Rio,
        Self::Wio,
        Self::Wb,
        Self::Wib,
        Self::Wacc,
        Self::Racc,
        Self::Swap,
        Self::Brlt,
        Self::Brgt,
        Self::Brne,
        Self::Bre,
        Self::Shr,
        Self::Shl,
        Self::Xor,
        Self::Not,
        Self::Or,
        Self::And,
        Self::Mul,
        Self::Sub,
        Self::Add,
        Self::Eop,
    ];

    /// Looks up the opcode for a 5-bit code, or `None` if the code is unassigned.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            op::OP_WM => Self::Wm,
            op::OP_RM => Self::Rm,
            op::OP_BR => Self::Br,
            op::OP_RIO => Self::Rio,
            op::OP_WIO => Self::Wio,
            op::OP_WB => Self::Wb,
            op::OP_WIB => Self::Wib,
            op::OP_WACC => Self::Wacc,
            op::OP_RACC => Self::Racc,
            op::OP_SWAP => Self::Swap,
            op::OP_BRLT => Self::Brlt,
            op::OP_BRGT => Self::Brgt,
            op::OP_BRNE => Self::Brne,
            op::OP_BRE => Self::Bre,
            op::OP_SHR => Self::Shr,
            op::OP_SHL => Self::Shl,
            op::OP_XOR => Self::Xor,
            op::OP_NOT => Self::Not,
            op::OP_OR => Self::Or,
            op::OP_AND => Self::And,
            op::OP_MUL => Self::Mul,
            op::OP_SUB => Self::Sub,
            op::OP_ADD => Self::Add,
            op::OP_EOP => Self::Eop,
            _ => return None,
        })
    }

    /// The 5-bit encoding of this opcode.
    pub const fn code(self) -> u8 {
        match self {
            Self::Wm => op::OP_WM,
            Self::Rm => op::OP_RM,
            Self::Br => op::OP_BR,
            Self::Rio => op::OP_RIO,
            Self::Wio => op::OP_WIO,
            Self::Wb => op::OP_WB,
            Self::Wib => op::OP_WIB,
            Self::Wacc => op::OP_WACC,
            Self::Racc => op::OP_RACC,
            Self::Swap => op::OP_SWAP,
            Self::Brlt => op::OP_BRLT,
            Self::Brgt => op::OP_BRGT,
            Self::Brne => op::OP_BRNE,
            Self::Bre => op::OP_BRE,
            Self::Shr => op::OP_SHR,
            Self::Shl => op::OP_SHL,
            Self::Xor => op::OP_XOR,
            Self::Not => op::OP_NOT,
            Self::Or => op::OP_OR,
            Self::And => op::OP_AND,
            Self::Mul => op::OP_MUL,
            Self::Sub => op::OP_SUB,
            Self::Add => op::OP_ADD,
            Self::Eop => op::OP_EOP,
        }
    }

    /// The assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Wm => "WM",
            Self::Rm => "RM",
            Self::Br => "BR",
            Self::Rio => "RIO",
            Self::Wio => "WIO",
            Self::Wb => "WB",
            Self::Wib => "WIB",
            Self::Wacc => "WACC",
            Self::Racc => "RACC",
            Self::Swap => "SWAP",
            Self::Brlt => "BRLT",
            Self::Brgt => "BRGT",
            Self::Brne => "BRNE",
            Self::Bre => "BRE",
            Self::Shr => "SHR",
            Self::Shl => "SHL",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Mul => "MUL",
            Self::Sub => "SUB",
            Self::Add => "ADD",
            Self::Eop => "EOP",
        }
    }

    /// Looks up an opcode by mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// The dispatch family this opcode belongs to.
    pub const fn family(self) -> Family {
        match self {
            Self::Wm | Self::Rm | Self::Rio | Self::Wio | Self::Wb | Self::Wib | Self::Swap => {
                Family::MemoryAccess
            }
            Self::Wacc
            | Self::Racc
            | Self::Shr
            | Self::Shl
            | Self::Xor
            | Self::Not
            | Self::Or
            | Self::And
            | Self::Mul
            | Self::Sub
            | Self::Add => Family::Alu,
            Self::Br | Self::Brlt | Self::Brgt | Self::Brne | Self::Bre => Family::ControlFlow,
            Self::Eop => Family::Termination,
        }
    }

    /// Returns `true` if the operand field carries meaning for this opcode.
    pub const fn takes_operand(self) -> bool {
        matches!(
            self,
            Self::Wm
                | Self::Rm
                | Self::Br
                | Self::Rio
                | Self::Wio
                | Self::Wb
                | Self::Wib
                | Self::Brlt
                | Self::Brgt
                | Self::Brne
                | Self::Bre
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A 16-bit instruction word: opcode in bits 15-11, operand in bits 10-0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction(pub u16);

impl Instruction {
    /// Assembles a word from an opcode and an operand (truncated to 11 bits).
    pub const fn encode(opcode: Opcode, operand: u16) -> Self {
        Self::from_parts(opcode.code(), operand)
    }

    /// Assembles a word from a raw 5-bit opcode and an 11-bit operand.
    pub const fn from_parts(code: u8, operand: u16) -> Self {
        Self((((code as u16) & OPCODE_MASK) << OPCODE_SHIFT) | (operand & OPERAND_MASK))
    }

    /// Joins the high and low bytes fetched from consecutive addresses.
    pub const fn from_bytes(high: u8, low: u8) -> Self {
        Self(u16::from_be_bytes([high, low]))
    }

    /// Splits the word into (high, low) bytes in fetch order.
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// The raw 5-bit opcode field.
    #[inline]
    pub const fn opcode_bits(self) -> u8 {
        ((self.0 >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    /// The 11-bit operand field.
    #[inline]
    pub const fn operand(self) -> u16 {
        self.0 & OPERAND_MASK
    }

    /// The decoded opcode, or `None` if the opcode field is unassigned.
    pub const fn opcode(self) -> Option<Opcode> {
        Opcode::from_code(self.opcode_bits())
    }
}

impl From<u16> for Instruction {
    fn from(word: u16) -> Self {
        Self(word)
    }
}

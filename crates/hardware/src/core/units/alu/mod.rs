//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the stateful accumulator ALU. The accumulator (ACC)
//! and the flags register persist across operations; BUS supplies the second
//! operand and, for RACC, receives the result.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, two's complement, Booth multiply
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shift left, shift right

/// Integer arithmetic operations (add, subtract, Booth multiply).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Single-bit shift operations.
pub mod shifts;

use tracing::warn;

use crate::common::error::AluError;
use crate::config::AluWidth;
use crate::core::arch::Flags;
use crate::isa::opcodes as op;

use logic::LogicOp;
use shifts::ShiftOp;

/// Operations decoded from the CONTROL register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// ACC ← ACC + BUS
    Add,
    /// ACC ← ACC + twos_complement(BUS)
    Sub,
    /// ACC ← Booth product of ACC and BUS
    Mul,
    /// ACC ← ACC & BUS
    And,
    /// ACC ← ACC | BUS
    Or,
    /// ACC ← ACC ^ BUS
    Xor,
    /// ACC ← !ACC
    Not,
    /// ACC ← ACC << 1
    Shl,
    /// ACC ← ACC >> 1
    Shr,
    /// ACC ← BUS
    Wacc,
    /// BUS ← ACC
    Racc,
}

impl AluOp {
    /// Decodes a control code, or `None` if the ALU does not implement it.
    pub const fn from_control(code: u8) -> Option<Self> {
        Some(match code {
            op::OP_ADD => Self::Add,
            op::OP_SUB => Self::Sub,
            op::OP_MUL => Self::Mul,
            op::OP_AND => Self::And,
            op::OP_OR => Self::Or,
            op::OP_XOR => Self::Xor,
            op::OP_NOT => Self::Not,
            op::OP_SHL => Self::Shl,
            op::OP_SHR => Self::Shr,
            op::OP_WACC => Self::Wacc,
            op::OP_RACC => Self::Racc,
            _ => return None,
        })
    }

    /// The control code that selects this operation.
    pub const fn control(self) -> u8 {
        match self {
            Self::Add => op::OP_ADD,
            Self::Sub => op::OP_SUB,
            Self::Mul => op::OP_MUL,
            Self::And => op::OP_AND,
            Self::Or => op::OP_OR,
            Self::Xor => op::OP_XOR,
            Self::Not => op::OP_NOT,
            Self::Shl => op::OP_SHL,
            Self::Shr => op::OP_SHR,
            Self::Wacc => op::OP_WACC,
            Self::Racc => op::OP_RACC,
        }
    }
}

/// Arithmetic Logic Unit with its accumulator and flags.
///
/// # Examples
///
/// ```
/// use chipcpu_core::config::AluWidth;
/// use chipcpu_core::core::units::alu::{Alu, AluOp};
///
/// let mut alu = Alu::new(AluWidth::Byte);
/// let mut bus = 0xFF;
/// alu.execute(AluOp::Add.control(), &mut bus).unwrap();
/// alu.execute(AluOp::Add.control(), &mut bus).unwrap();
/// assert_eq!(alu.acc(), 0xFE);
/// assert!(alu.flags().cf);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alu {
    acc: u16,
    flags: Flags,
    width: AluWidth,
}

impl Default for Alu {
    fn default() -> Self {
        Self::new(AluWidth::default())
    }
}

impl Alu {
    /// Creates an ALU with a cleared accumulator and flags.
    pub const fn new(width: AluWidth) -> Self {
        Self {
            acc: 0,
            flags: Flags {
                zf: false,
                cf: false,
                sf: false,
                of: false,
            },
            width,
        }
    }

    /// Current accumulator value.
    #[inline]
    pub const fn acc(&self) -> u16 {
        self.acc
    }

    /// Flags left by the most recent flag-updating operation.
    #[inline]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Configured operating width.
    #[inline]
    pub const fn width(&self) -> AluWidth {
        self.width
    }

    /// Presets the accumulator. Used by hosts to set up a run; the control
    /// unit only reaches ACC through WACC and RACC.
    pub const fn set_acc(&mut self, value: u16) {
        self.acc = value;
    }

    /// Compares ACC with `bus` by subtraction and latches the resulting flags.
    ///
    /// ACC is not written. Conditional branches use this to test ACC against
    /// MBR.
    pub fn compare(&mut self, bus: u8) -> Flags {
        let width = self.width;
        let a = u32::from(self.acc) & width.mask();
        let (_, flags) = arithmetic::sub(a, u32::from(bus), width);
        self.flags = flags;
        flags
    }

    /// Executes the operation selected by `control`.
    ///
    /// ACC is the first operand and `bus` the second. RACC writes the low byte
    /// of ACC back onto `bus`.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::InvalidControlSignal`] for codes the ALU does not
    /// implement. ACC and the flags are left unchanged in that case.
    pub fn execute(&mut self, control: u8, bus: &mut u8) -> Result<AluOp, AluError> {
        let Some(op) = AluOp::from_control(control) else {
            warn!(control, "invalid control signal");
            return Err(AluError::InvalidControlSignal(control));
        };

        let width = self.width;
        let a = u32::from(self.acc) & width.mask();
        let b = u32::from(*bus);

        let (result, flags) = match op {
            AluOp::Add => arithmetic::add(a, b, width),
            AluOp::Sub => arithmetic::sub(a, b, width),
            AluOp::Mul => arithmetic::mul(a, b, width),
            AluOp::And => logic::execute(LogicOp::And, a, b, width),
            AluOp::Or => logic::execute(LogicOp::Or, a, b, width),
            AluOp::Xor => logic::execute(LogicOp::Xor, a, b, width),
            AluOp::Not => logic::execute(LogicOp::Not, a, b, width),
            AluOp::Shl => shifts::execute(ShiftOp::Left, a, width),
            AluOp::Shr => shifts::execute(ShiftOp::Right, a, width),
            AluOp::Wacc => {
                self.acc = u16::from(*bus);
                return Ok(op);
            }
            AluOp::Racc => {
                *bus = self.acc as u8;
                return Ok(op);
            }
        };

        self.acc = result as u16;
        self.flags = flags;
        Ok(op)
    }
}

//! ALU bitwise logical operations.
//!
//! AND, OR, XOR, and NOT at register width. These refresh ZF and SF from the
//! result and clear CF and OF.

use crate::config::AluWidth;
use crate::core::arch::Flags;

/// Logical operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicOp {
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `!a` (b is ignored)
    Not,
}

/// Executes a logical operation.
pub fn execute(op: LogicOp, a: u32, b: u32, width: AluWidth) -> (u32, Flags) {
    let mask = width.mask();
    let r = match op {
        LogicOp::And => a & b,
        LogicOp::Or => a | b,
        LogicOp::Xor => a ^ b,
        LogicOp::Not => !a,
    } & mask;
    let flags = Flags {
        zf: r == 0,
        sf: r & width.sign_bit() != 0,
        cf: false,
        of: false,
    };
    (r, flags)
}

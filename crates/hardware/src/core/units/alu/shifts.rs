//! ALU shift operations.
//!
//! Single-bit logical shifts at register width. CF receives the bit shifted
//! out; ZF and SF follow the result; OF is cleared.

use crate::config::AluWidth;
use crate::core::arch::Flags;

/// Shift direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    /// Shift toward the MSB; CF receives the old sign bit.
    Left,
    /// Shift toward the LSB; CF receives the old bit 0.
    Right,
}

/// Shifts `a` by one bit.
pub fn execute(op: ShiftOp, a: u32, width: AluWidth) -> (u32, Flags) {
    let mask = width.mask();
    let a = a & mask;
    let (r, cf) = match op {
        ShiftOp::Left => ((a << 1) & mask, a & width.sign_bit() != 0),
        ShiftOp::Right => (a >> 1, a & 1 != 0),
    };
    let flags = Flags {
        zf: r == 0,
        sf: r & width.sign_bit() != 0,
        cf,
        of: false,
    };
    (r, flags)
}

//! ALU arithmetic operations.
//!
//! Implements two's-complement addition and subtraction at the configured
//! register width, and signed multiplication with Booth's algorithm.
//!
//! Operands and results are carried in `u32` and masked to the register width;
//! a Booth product occupies twice the register width.

use tracing::trace;

use crate::common::constants::{ACC_MASK, ACC_SIGN_BIT};
use crate::config::AluWidth;
use crate::core::arch::Flags;

/// Returns `(!x + 1)` truncated to the register width.
///
/// # Examples
///
/// ```
/// use chipcpu_core::config::AluWidth;
/// use chipcpu_core::core::units::alu::arithmetic::twos_complement;
///
/// assert_eq!(twos_complement(0x05, AluWidth::Byte), 0xFB);
/// assert_eq!(twos_complement(0x00, AluWidth::Byte), 0x00);
/// assert_eq!(twos_complement(0x80, AluWidth::Byte), 0x80);
/// ```
#[inline]
pub const fn twos_complement(x: u32, width: AluWidth) -> u32 {
    (!x).wrapping_add(1) & width.mask()
}

/// Zero and sign flags of a register-width result.
#[inline]
const fn zero_sign(r: u32, width: AluWidth) -> (bool, bool) {
    (r == 0, r & width.sign_bit() != 0)
}

/// `a + b` at register width.
///
/// CF is the carry out of the most significant bit; OF is set when two
/// operands of equal sign produce a result of the opposite sign.
pub fn add(a: u32, b: u32, width: AluWidth) -> (u32, Flags) {
    let mask = width.mask();
    let (a, b) = (a & mask, b & mask);
    let sum = a + b;
    let r = sum & mask;
    let (zf, sf) = zero_sign(r, width);
    let flags = Flags {
        zf,
        sf,
        cf: sum > mask,
        of: (a ^ r) & (b ^ r) & width.sign_bit() != 0,
    };
    (r, flags)
}

/// `a - b` computed as `a + !b + 1` at register width.
///
/// CF is the carry out of that addition, so it is set when no borrow
/// occurred (`a >= b` unsigned). OF is the signed overflow of `a - b`.
pub fn sub(a: u32, b: u32, width: AluWidth) -> (u32, Flags) {
    let mask = width.mask();
    let (a, b) = (a & mask, b & mask);
    let sum = a + (!b & mask) + 1;
    let r = sum & mask;
    let (zf, sf) = zero_sign(r, width);
    let flags = Flags {
        zf,
        sf,
        cf: sum > mask,
        of: (a ^ b) & (a ^ r) & width.sign_bit() != 0,
    };
    (r, flags)
}

/// Register contents at the start of one Booth iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoothStep {
    /// Iteration number; the final entry has `cycle == width.bits()`.
    pub cycle: u32,
    /// Accumulator half, truncated to register width.
    pub a: u32,
    /// Multiplier half.
    pub q: u32,
    /// The extra bit Q₋₁.
    pub q_1: u32,
    /// Multiplicand.
    pub m: u32,
}

/// Multiplies two signed register-width values with Booth's algorithm.
///
/// Returns the `2W`-bit two's-complement product.
///
/// # Examples
///
/// ```
/// use chipcpu_core::config::AluWidth;
/// use chipcpu_core::core::units::alu::arithmetic::booth_multiply;
///
/// assert_eq!(booth_multiply(0x07, 0x03, AluWidth::Byte), 21);
/// assert_eq!(booth_multiply(0xFF, 0x03, AluWidth::Byte), 0xFFFD); // -1 * 3
/// ```
pub fn booth_multiply(m: u32, q: u32, width: AluWidth) -> u32 {
    booth(m, q, width, None)
}

/// Same as [`booth_multiply`], also returning the register state of every iteration.
pub fn booth_multiply_steps(m: u32, q: u32, width: AluWidth) -> (u32, Vec<BoothStep>) {
    let mut steps = Vec::with_capacity(width.bits() as usize + 1);
    let product = booth(m, q, width, Some(&mut steps));
    (product, steps)
}

fn booth(m: u32, q: u32, width: AluWidth, mut steps: Option<&mut Vec<BoothStep>>) -> u32 {
    let bits = width.bits();
    let mask = width.mask();

    // A carries one guard bit above the register width so that -M is
    // representable when M is the most negative value.
    let a_mask = (mask << 1) | 1;
    let a_sign = 1u32 << bits;

    let m = m & mask;
    let m_ext = if m & width.sign_bit() != 0 { m | a_sign } else { m };
    let neg_m = (!m_ext).wrapping_add(1) & a_mask;

    let mut a = 0u32;
    let mut q = q & mask;
    let mut q_1 = 0u32;

    for cycle in 0..=bits {
        if let Some(steps) = steps.as_deref_mut() {
            steps.push(BoothStep {
                cycle,
                a: a & mask,
                q,
                q_1,
                m,
            });
        }
        if cycle == bits {
            break;
        }

        match (q & 1, q_1) {
            (1, 0) => a = (a + neg_m) & a_mask,
            (0, 1) => a = (a + m_ext) & a_mask,
            _ => {}
        }

        // Arithmetic shift right of A:Q:Q-1, replicating the sign of A.
        q_1 = q & 1;
        q = (q >> 1) | ((a & 1) << (bits - 1));
        a = (a >> 1) | (a & a_sign);
    }

    ((a & mask) << bits) | q
}

/// Signed `a * b` at register width, via Booth's algorithm.
///
/// Returns the full `2W`-bit product. ZF and SF describe the part of the
/// product that fits in ACC; CF and OF are set when the product does not fit
/// in a signed register-width value.
pub fn mul(a: u32, b: u32, width: AluWidth) -> (u32, Flags) {
    let product = if tracing::enabled!(tracing::Level::TRACE) {
        let (product, steps) = booth_multiply_steps(a, b, width);
        for s in &steps {
            trace!(cycle = s.cycle, a = s.a, q = s.q, q_1 = s.q_1, m = s.m, "booth step");
        }
        product
    } else {
        booth_multiply(a, b, width)
    };

    let bits = width.bits();
    let mask = width.mask();
    let low = product & mask;
    let low_ext = if low & width.sign_bit() != 0 {
        low | (mask << bits)
    } else {
        low
    };
    let wide = low_ext != product;
    let stored = product & ACC_MASK;

    let flags = Flags {
        zf: stored == 0,
        sf: stored & ACC_SIGN_BIT != 0,
        cf: wide,
        of: wide,
    };
    (product, flags)
}

//! Flags register.
//!
//! Four single-bit condition flags recomputed by the ALU after each operation
//! and tested by the conditional branches.

use std::fmt;

/// The ZF, CF, SF, and OF condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    /// Zero flag: the result was zero.
    pub zf: bool,
    /// Carry flag: carry out of the adder, or the bit shifted out.
    pub cf: bool,
    /// Sign flag: the result's most significant bit.
    pub sf: bool,
    /// Overflow flag: the signed result did not fit.
    pub of: bool,
}

impl Flags {
    /// Bit position of ZF in the packed form.
    pub const ZF_BIT: u8 = 0x01;
    /// Bit position of CF in the packed form.
    pub const CF_BIT: u8 = 0x02;
    /// Bit position of SF in the packed form.
    pub const SF_BIT: u8 = 0x04;
    /// Bit position of OF in the packed form.
    pub const OF_BIT: u8 = 0x08;

    /// Packs the flags into the low nibble of a byte.
    pub const fn bits(self) -> u8 {
        (if self.zf { Self::ZF_BIT } else { 0 })
            | (if self.cf { Self::CF_BIT } else { 0 })
            | (if self.sf { Self::SF_BIT } else { 0 })
            | (if self.of { Self::OF_BIT } else { 0 })
    }

    /// Unpacks flags from the low nibble of a byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            zf: bits & Self::ZF_BIT != 0,
            cf: bits & Self::CF_BIT != 0,
            sf: bits & Self::SF_BIT != 0,
            of: bits & Self::OF_BIT != 0,
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZF={} CF={} SF={} OF={}",
            u8::from(self.zf),
            u8::from(self.cf),
            u8::from(self.sf),
            u8::from(self.of)
        )
    }
}

//! Address and Chip Location types.
//!
//! This module defines the 11-bit machine address and its decomposition onto the
//! chip memory. It provides the following:
//! 1. **Type Safety:** `Address` wraps the raw value driven onto the ADDR lines.
//! 2. **Decomposition:** A pure function splitting an address into bank, row, and column.
//! 3. **Range Checking:** Addresses outside the 2048-byte space are rejected, never aliased.

use std::fmt;

use super::constants::{
    BANK_MASK, BANK_SHIFT, COLUMN_MASK, MAX_ADDRESS, ROW_MASK, ROW_SHIFT,
};
use super::error::SimError;

/// A byte address as carried on the ADDR lines.
///
/// The register is wider than the 11 bits the memory decodes so that a program
/// counter running past the end of memory is observable instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u16);

impl Address {
    /// Creates a new address from a raw value.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns `true` if the address maps onto the chip memory.
    #[inline]
    pub const fn in_range(self) -> bool {
        self.0 <= MAX_ADDRESS
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

impl From<u16> for Address {
    fn from(addr: u16) -> Self {
        Self(addr)
    }
}

/// The physical location of a byte inside the chip memory.
///
/// Every byte lives at the same `(row, column)` in all eight planes of one bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChipLocation {
    /// Bank (chip group) select: 0 for bank A, 1 for bank B.
    pub bank: usize,
    /// Row within each plane (0-31).
    pub row: usize,
    /// Bit column within the row element (0-31).
    pub column: usize,
}

impl ChipLocation {
    /// Decomposes an address into bank, row, and column.
    ///
    /// `bank = addr >> 10 & 1`, `row = addr >> 5 & 0x1F`, `column = addr & 0x1F`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if the address lies beyond the
    /// last byte of memory.
    pub fn decompose(addr: Address) -> Result<Self, SimError> {
        if !addr.in_range() {
            return Err(SimError::AddressOutOfRange { address: addr.val() });
        }
        let raw = addr.val();
        Ok(Self {
            bank: ((raw >> BANK_SHIFT) & BANK_MASK) as usize,
            row: ((raw >> ROW_SHIFT) & ROW_MASK) as usize,
            column: (raw & COLUMN_MASK) as usize,
        })
    }

    /// Recombines a location into the address it was decomposed from.
    pub const fn compose(self) -> Address {
        Address(
            ((self.bank as u16) << BANK_SHIFT)
                | ((self.row as u16) << ROW_SHIFT)
                | (self.column as u16),
        )
    }
}

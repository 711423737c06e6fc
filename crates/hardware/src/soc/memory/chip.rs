//! Bit-sliced Chip Memory.
//!
//! Main memory is built from sixteen single-bit "chips": two banks of eight
//! planes, each plane holding 32 rows of 32 one-bit columns. A byte is spread
//! across the eight planes of one bank at the same row and column, MSB in
//! plane 0. Reads gather one bit from each plane and pack them back into a byte.

use crate::common::addr::{Address, ChipLocation};
use crate::common::constants::{BANK_COUNT, PLANES_PER_BANK, ROWS_PER_PLANE};
use crate::common::error::SimError;

/// One bank: eight planes of 32 row elements, one bit per column.
type Bank = [[u32; ROWS_PER_PLANE]; PLANES_PER_BANK];

/// Byte-addressable storage realized as parallel single-bit memory planes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitChipMemory {
    banks: [Bank; BANK_COUNT],
}

impl Default for BitChipMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl BitChipMemory {
    /// Creates a memory with every bit cleared.
    pub const fn new() -> Self {
        Self {
            banks: [[[0; ROWS_PER_PLANE]; PLANES_PER_BANK]; BANK_COUNT],
        }
    }

    /// Reads the byte stored at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if `addr` is beyond the last byte.
    pub fn read_byte(&self, addr: Address) -> Result<u8, SimError> {
        let loc = ChipLocation::decompose(addr)?;
        Ok(self.read_at(loc))
    }

    /// Writes `value` at `addr`, touching exactly one bit in each of the bank's planes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if `addr` is beyond the last byte.
    pub fn write_byte(&mut self, addr: Address, value: u8) -> Result<(), SimError> {
        let loc = ChipLocation::decompose(addr)?;
        self.write_at(loc, value);
        Ok(())
    }

    /// Reconstructs the byte at an already-decoded location.
    pub fn read_at(&self, loc: ChipLocation) -> u8 {
        let bank = &self.banks[loc.bank];
        bank.iter().enumerate().fold(0u8, |byte, (plane, rows)| {
            let bit = ((rows[loc.row] >> loc.column) & 1) as u8;
            byte | (bit << (PLANES_PER_BANK - 1 - plane))
        })
    }

    /// Decomposes `value` into bits and stores one in each plane at `loc`.
    pub fn write_at(&mut self, loc: ChipLocation, value: u8) {
        let bank = &mut self.banks[loc.bank];
        for (plane, rows) in bank.iter_mut().enumerate() {
            let bit = (value >> (PLANES_PER_BANK - 1 - plane)) & 1;
            let cell = &mut rows[loc.row];
            if bit == 0 {
                *cell &= !(1u32 << loc.column);
            } else {
                *cell |= 1u32 << loc.column;
            }
        }
    }

    /// Returns the raw 32-bit row element of one plane, for chip-level dumps.
    ///
    /// Returns `None` if any index is outside the memory geometry.
    pub fn plane_row(&self, bank: usize, plane: usize, row: usize) -> Option<u32> {
        self.banks.get(bank)?.get(plane)?.get(row).copied()
    }

    /// Clears every bit in every plane.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

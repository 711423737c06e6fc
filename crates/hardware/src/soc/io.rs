//! I/O buffer.
//!
//! A flat 32-byte array addressed by the low five bits of ADDR. It shares the
//! bus read/write contract with main memory but has no chip decomposition.

use crate::common::addr::Address;
use crate::common::constants::{IO_ADDRESS_MASK, IO_BUFFER_SIZE};

/// The I/O buffer device.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IoBuffer {
    bytes: [u8; IO_BUFFER_SIZE],
}

impl IoBuffer {
    /// Creates a zeroed buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; IO_BUFFER_SIZE],
        }
    }

    #[inline]
    const fn index(addr: Address) -> usize {
        (addr.val() & IO_ADDRESS_MASK) as usize
    }

    /// Reads the byte selected by the low bits of `addr`.
    pub const fn read(&self, addr: Address) -> u8 {
        self.bytes[Self::index(addr)]
    }

    /// Writes the byte selected by the low bits of `addr`.
    pub const fn write(&mut self, addr: Address, value: u8) {
        self.bytes[Self::index(addr)] = value;
    }

    /// The whole buffer, in address order.
    pub const fn as_bytes(&self) -> &[u8; IO_BUFFER_SIZE] {
        &self.bytes
    }
}

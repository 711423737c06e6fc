//! Shared System Bus.
//!
//! This module models the wire group connecting the control unit, ALU, and
//! storage. It provides:
//! 1. **Lines:** The 8-bit data bus (BUS), the address register (ADDR), and three control lines.
//! 2. **Routing:** `transfer()` sends a cycle to the chip memory or the I/O buffer.
//! 3. **Gating:** A transfer happens only while output-enable is asserted.

use tracing::trace;

use crate::common::addr::Address;
use crate::common::error::SimError;
use crate::soc::io::IoBuffer;
use crate::soc::memory::BitChipMemory;

/// Direction of a bus cycle, as seen from the storage device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Storage drives BUS.
    #[default]
    Read,
    /// Storage latches BUS.
    Write,
}

/// The three external control signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlLines {
    /// Memory-enable (IOM): high selects main memory, low selects the I/O buffer.
    pub iom: bool,
    /// Read/write direction (RW).
    pub rw: Direction,
    /// Output-enable (OE): low disconnects the bus from storage.
    pub oe: bool,
}

impl ControlLines {
    /// Main-memory read cycle.
    pub const MEMORY_READ: Self = Self {
        iom: true,
        rw: Direction::Read,
        oe: true,
    };

    /// Main-memory write cycle.
    pub const MEMORY_WRITE: Self = Self {
        iom: true,
        rw: Direction::Write,
        oe: true,
    };

    /// I/O buffer read cycle.
    pub const IO_READ: Self = Self {
        iom: false,
        rw: Direction::Read,
        oe: true,
    };

    /// I/O buffer write cycle.
    pub const IO_WRITE: Self = Self {
        iom: false,
        rw: Direction::Write,
        oe: true,
    };

    /// Register-to-register cycle: storage is disconnected.
    pub const DISCONNECTED: Self = Self {
        iom: false,
        rw: Direction::Read,
        oe: false,
    };
}

/// What a call to [`Bus::transfer`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferKind {
    /// Output-enable was low; nothing moved.
    Idle,
    /// BUS was loaded from main memory.
    MemoryRead,
    /// BUS was stored into main memory.
    MemoryWrite,
    /// BUS was loaded from the I/O buffer.
    IoRead,
    /// BUS was stored into the I/O buffer.
    IoWrite,
}

/// The bus lines together with the storage devices they reach.
#[derive(Clone, Debug, Default)]
pub struct Bus {
    /// The 8-bit data bus.
    pub data: u8,
    /// The address register driving the ADDR lines.
    pub addr: Address,
    /// Current state of the control lines.
    pub control: ControlLines,
    /// Bit-sliced main memory.
    pub memory: BitChipMemory,
    /// Flat I/O buffer.
    pub io: IoBuffer,
}

impl Bus {
    /// Creates a bus with cleared lines and zeroed storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives ADDR and the control lines in preparation for a transfer.
    #[inline]
    pub const fn drive(&mut self, addr: Address, control: ControlLines) {
        self.addr = addr;
        self.control = control;
    }

    /// Performs one bus cycle according to the control lines.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AddressOutOfRange`] if a main-memory cycle is driven
    /// with an address beyond the chip memory.
    pub fn transfer(&mut self) -> Result<TransferKind, SimError> {
        let ControlLines { iom, rw, oe } = self.control;
        if !oe {
            return Ok(TransferKind::Idle);
        }
        let kind = match (iom, rw) {
            (true, Direction::Read) => {
                self.data = self.memory.read_byte(self.addr)?;
                TransferKind::MemoryRead
            }
            (true, Direction::Write) => {
                self.memory.write_byte(self.addr, self.data)?;
                TransferKind::MemoryWrite
            }
            (false, Direction::Read) => {
                self.data = self.io.read(self.addr);
                TransferKind::IoRead
            }
            (false, Direction::Write) => {
                self.io.write(self.addr, self.data);
                TransferKind::IoWrite
            }
        };
        trace!(addr = %self.addr, bus = self.data, ?kind, "bus transfer");
        Ok(kind)
    }
}

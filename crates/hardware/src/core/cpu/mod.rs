//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the entire
//! machine state. It coordinates the following:
//! 1. **Register State:** PC, IR, MAR, MBR, IOAR, IOBR, and the CONTROL latch.
//! 2. **Cycle State:** The fetch/decode/execute state machine position.
//! 3. **Units:** The accumulator ALU and the bus with its storage devices.
//!
//! Every piece of simulated hardware is a field here, so independent `Cpu`
//! values never share state.

/// Fetch/decode/execute state machine.
pub mod execution;

use std::fmt;

use crate::common::addr::Address;
use crate::config::{Config, DecodeMode};
use crate::core::arch::Flags;
use crate::core::units::Alu;
use crate::soc::bus::{Bus, ControlLines};
use crate::stats::SimStats;

/// Position of the control unit within an instruction cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CycleState {
    /// Fetch the high byte of the instruction word at PC.
    #[default]
    FetchHigh,
    /// Fetch the low byte of the instruction word at PC.
    FetchLow,
    /// Split IR into opcode and operand.
    Decode,
    /// Dispatch the decoded instruction.
    Execute,
    /// End-of-program reached; no further cycles run.
    Terminate,
}

/// Control unit registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    /// Program counter (byte address of the next fetch).
    pub pc: u16,
    /// Instruction register.
    pub ir: u16,
    /// Decoded 5-bit opcode field of IR.
    pub opcode: u8,
    /// Decoded 11-bit operand field of IR.
    pub operand: u16,
    /// Memory address register.
    pub mar: u16,
    /// Memory buffer register.
    pub mbr: u8,
    /// I/O address register.
    pub ioar: u16,
    /// I/O buffer register.
    pub iobr: u8,
    /// Control latch decoded by the ALU.
    pub control: u8,
}

/// A copy of every architecturally visible value, for traces and fault reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterSnapshot {
    /// Control unit registers.
    pub regs: Registers,
    /// Accumulator.
    pub acc: u16,
    /// Flags register.
    pub flags: Flags,
    /// Data bus.
    pub bus: u8,
    /// Address lines.
    pub addr: u16,
    /// Control lines.
    pub lines: ControlLines,
}

impl fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.regs;
        write!(
            f,
            "PC={:#05x} IR={:#06x} MAR={:#05x} MBR={:#04x} IOAR={:#05x} IOBR={:#04x} \
             ACC={:#06x} BUS={:#04x} ADDR={:#05x} [{}]",
            r.pc, r.ir, r.mar, r.mbr, r.ioar, r.iobr, self.acc, self.bus, self.addr, self.flags
        )
    }
}

/// Main CPU structure containing all machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Control unit registers.
    pub regs: Registers,
    /// Position in the instruction cycle.
    pub state: CycleState,
    /// Accumulator ALU.
    pub alu: Alu,
    /// System bus, chip memory, and I/O buffer.
    pub bus: Bus,
    /// Policy for unassigned opcodes.
    pub decode_mode: DecodeMode,
    /// Performance and diagnostic counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in the `FetchHigh` state with PC = 0 and cleared storage.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Registers::default(),
            state: CycleState::FetchHigh,
            alu: Alu::new(config.alu.width),
            bus: Bus::new(),
            decode_mode: config.decode,
            stats: SimStats::default(),
        }
    }

    /// Returns `true` once end-of-program has been executed.
    #[inline]
    pub fn halted(&self) -> bool {
        self.state == CycleState::Terminate
    }

    /// Captures the current register, bus, and flag state.
    pub fn snapshot(&self) -> RegisterSnapshot {
        RegisterSnapshot {
            regs: self.regs,
            acc: self.alu.acc(),
            flags: self.alu.flags(),
            bus: self.bus.data,
            addr: self.bus.addr.val(),
            lines: self.bus.control,
        }
    }

    /// The program counter as a bus address.
    #[inline]
    pub const fn pc_addr(&self) -> Address {
        Address(self.regs.pc)
    }
}

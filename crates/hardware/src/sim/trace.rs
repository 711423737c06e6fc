//! Per-instruction trace records and observers.
//!
//! Every completed instruction cycle yields a [`StepRecord`]. Observers
//! registered on the simulator receive each record in order; they cannot
//! influence execution.

use std::fmt;

use tracing::debug;

use crate::core::RegisterSnapshot;
use crate::isa::Opcode;

/// Outcome of one instruction cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// The instruction completed without changing control flow.
    Executed,
    /// A branch loaded PC with its operand.
    BranchTaken,
    /// A conditional branch fell through.
    BranchNotTaken,
    /// The opcode is not in the instruction table; the cycle was a NOP.
    UnknownOpcode,
    /// The ALU rejected the control code; ACC and flags are unchanged.
    InvalidControlSignal(u8),
    /// End-of-program was executed, or the machine had already halted.
    Halted,
}

/// Machine state after one instruction cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// Address the instruction's high byte was fetched from.
    pub fetch_pc: u16,
    /// Decoded opcode, or `None` if it was not in the table.
    pub opcode: Option<Opcode>,
    /// What the cycle did.
    pub event: StepEvent,
    /// Registers, bus, and flags at the end of the cycle.
    pub snapshot: RegisterSnapshot,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.opcode.map_or("???", Opcode::mnemonic);
        write!(
            f,
            "{:#05x}  {:<5} {:#05x}  {}",
            self.fetch_pc, name, self.snapshot.regs.operand, self.snapshot
        )
    }
}

/// Receives a record for every completed instruction cycle.
pub trait Observer {
    /// Called once per instruction cycle, in execution order.
    fn on_step(&mut self, record: &StepRecord);
}

impl<F> Observer for F
where
    F: FnMut(&StepRecord),
{
    fn on_step(&mut self, record: &StepRecord) {
        self(record);
    }
}

/// Emits each record as a `tracing` debug event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_step(&mut self, record: &StepRecord) {
        debug!(target: "chipcpu::trace", "{record}");
    }
}

/// Keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    /// Records in execution order.
    pub records: Vec<StepRecord>,
}

impl Observer for Recorder {
    fn on_step(&mut self, record: &StepRecord) {
        self.records.push(*record);
    }
}

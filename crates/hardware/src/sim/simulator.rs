//! Simulator: owns the CPU and the observers watching it.
//!
//! The simulator drives the control unit one instruction cycle at a time,
//! enforces the host cycle bound, and folds fatal errors into a [`RunReport`].

use std::fmt;

use tracing::{error, info};

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::{Cpu, RegisterSnapshot};
use crate::sim::loader;
use crate::sim::trace::{Observer, StepRecord, TracingObserver};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// End-of-program was executed.
    Success,
    /// An address did not map onto the chip memory.
    AddressFault {
        /// The offending address.
        address: u16,
    },
    /// The cycle bound was exhausted before end-of-program.
    RunawayProgram {
        /// The configured bound.
        limit: u64,
    },
    /// An unknown opcode was decoded in strict mode.
    IllegalInstruction {
        /// The undecodable opcode.
        opcode: u8,
        /// Address of the instruction.
        pc: u16,
    },
}

impl RunOutcome {
    /// Returns `true` only when the run reached end-of-program.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<&SimError> for RunOutcome {
    fn from(err: &SimError) -> Self {
        match *err {
            SimError::AddressOutOfRange { address } => Self::AddressFault { address },
            SimError::NonTerminatingProgram { limit } => Self::RunawayProgram { limit },
            SimError::IllegalInstruction { opcode, pc } => Self::IllegalInstruction { opcode, pc },
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Success => write!(f, "success"),
            Self::AddressFault { address } => write!(f, "address fault at {address:#05x}"),
            Self::RunawayProgram { limit } => write!(f, "runaway program (no EOP within {limit} cycles)"),
            Self::IllegalInstruction { opcode, pc } => {
                write!(f, "illegal opcode {opcode:#04x} at {pc:#05x}")
            }
        }
    }
}

/// Result of [`Simulator::run`]: how it ended and the machine state at that point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Termination reason.
    pub outcome: RunOutcome,
    /// Registers, bus, and flags when the run stopped.
    pub snapshot: RegisterSnapshot,
    /// Instruction cycles executed.
    pub cycles: u64,
}

impl RunReport {
    /// Returns `true` only when the run reached end-of-program.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// Top-level simulator: machine state plus registered observers.
pub struct Simulator {
    /// CPU state (registers, ALU, bus, memory, stats).
    pub cpu: Cpu,
    /// Instruction cycles allowed before the run is declared runaway.
    pub max_cycles: u64,
    observers: Vec<Box<dyn Observer>>,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("max_cycles", &self.max_cycles)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Simulator {
    /// Creates a simulator with empty memory.
    ///
    /// A [`TracingObserver`] is attached when `config.general.trace` is set.
    pub fn new(config: &Config) -> Self {
        let mut sim = Self {
            cpu: Cpu::new(config),
            max_cycles: config.general.max_cycles,
            observers: Vec::new(),
        };
        if config.general.trace {
            sim.add_observer(TracingObserver);
        }
        sim
    }

    /// Creates a simulator and loads `words` from address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the program does not fit.
    pub fn with_program(config: &Config, words: &[u16]) -> Result<Self, LoadError> {
        let mut sim = Self::new(config);
        sim.load(words)?;
        Ok(sim)
    }

    /// Loads `words` into memory from address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if the program does not fit.
    pub fn load(&mut self, words: &[u16]) -> Result<(), LoadError> {
        loader::load_words(&mut self.cpu.bus.memory, words)
    }

    /// Registers an observer that receives every subsequent step record.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Runs one instruction cycle and notifies the observers.
    ///
    /// # Errors
    ///
    /// Propagates fatal errors from the control unit.
    pub fn step(&mut self) -> Result<StepRecord, SimError> {
        let record = self.cpu.step()?;
        for observer in &mut self.observers {
            observer.on_step(&record);
        }
        Ok(record)
    }

    /// Runs until end-of-program or the first fatal error.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NonTerminatingProgram`] once `max_cycles`
    /// instruction cycles have run without end-of-program, or any fatal error
    /// raised by the control unit.
    pub fn try_run(&mut self) -> Result<(), SimError> {
        while !self.cpu.halted() {
            if self.cpu.stats.cycles >= self.max_cycles {
                return Err(SimError::NonTerminatingProgram {
                    limit: self.max_cycles,
                });
            }
            let _ = self.step()?;
        }
        Ok(())
    }

    /// Runs to completion and reports how the run ended.
    pub fn run(&mut self) -> RunReport {
        let outcome = match self.try_run() {
            Ok(()) => {
                info!(cycles = self.cpu.stats.cycles, "run complete");
                RunOutcome::Success
            }
            Err(err) => {
                error!(%err, state = %self.cpu.snapshot(), "run aborted");
                RunOutcome::from(&err)
            }
        };
        RunReport {
            outcome,
            snapshot: self.cpu.snapshot(),
            cycles: self.cpu.stats.cycles,
        }
    }
}

//! Simulation driver, program loading, and trace records.
//!
//! Provides the [`Simulator`] run loop, the program loader that fills memory
//! before a run, and the observers that receive per-cycle step records.

/// Program parsing and placement.
pub mod loader;

/// Run loop and termination reporting.
pub mod simulator;

/// Step records and observers.
pub mod trace;

pub use simulator::{RunOutcome, RunReport, Simulator};
pub use trace::{Observer, Recorder, StepEvent, StepRecord, TracingObserver};

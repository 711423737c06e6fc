//! Configuration system for the simulator.
//!
//! This module defines the structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values (cycle bound, register width, decode policy).
//! 2. **Structures:** `Config` with general and ALU sections.
//! 3. **Enums:** ALU register width and opcode decode policy.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants::DEFAULT_MAX_CYCLES;

/// Default configuration constants for the simulator.
mod defaults {
    /// Executed instructions allowed before a run is declared runaway.
    pub const MAX_CYCLES: u64 = super::DEFAULT_MAX_CYCLES;
}

/// Operating width of the ALU.
///
/// The accumulator is always a 16-bit register; the width selects how many of
/// its bits take part in arithmetic, logic, shifts, and Booth multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AluWidth {
    /// 8-bit operations; MUL yields a full 16-bit product.
    #[default]
    Byte,
    /// 16-bit operations; MUL keeps the low 16 bits of a 32-bit product.
    Word,
}

impl AluWidth {
    /// Number of bits in a register-width value.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Word => 16,
        }
    }

    /// Mask selecting a register-width value.
    #[inline]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0xFF,
            Self::Word => 0xFFFF,
        }
    }

    /// The sign bit of a register-width value.
    #[inline]
    pub const fn sign_bit(self) -> u32 {
        1 << (self.bits() - 1)
    }
}

/// Policy for opcodes that are not in the instruction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DecodeMode {
    /// Unknown opcodes execute as a NOP cycle and are logged.
    #[default]
    Permissive,
    /// Unknown opcodes abort the run with an illegal-instruction error.
    Strict,
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use chipcpu_core::config::{AluWidth, Config, DecodeMode};
///
/// let json = r#"{
///     "general": { "max_cycles": 500, "trace": true },
///     "alu": { "width": "Word" },
///     "decode": "Strict"
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, 500);
/// assert!(config.general.trace);
/// assert_eq!(config.alu.width, AluWidth::Word);
/// assert_eq!(config.decode, DecodeMode::Strict);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// ALU settings
    #[serde(default)]
    pub alu: AluConfig,
    /// Handling of opcodes outside the instruction table
    #[serde(default)]
    pub decode: DecodeMode,
}

impl Config {
    /// Parses a configuration from a JSON document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Host bound on executed instructions; exceeding it ends the run as runaway.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Emit a structured `tracing` event for every executed instruction.
    #[serde(default)]
    pub trace: bool,
}

impl GeneralConfig {
    /// Returns the default cycle bound.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_cycles: defaults::MAX_CYCLES,
            trace: false,
        }
    }
}

/// ALU configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AluConfig {
    /// Register width used by arithmetic and logic operations.
    #[serde(default)]
    pub width: AluWidth,
}

//! # SID Player 6502 Emulator
//!
//! A cycle-counted NMOS 6502/6510 emulator used as the execution oracle for
//! SID music player routines.
//!
//! Player code is loaded into a flat 64KB memory, its init routine is called
//! once and its play routine once per frame. Every store that lands in the SID
//! register window (`$D400-$D41C`) is captured as a timestamped
//! [`RegisterWrite`], and the window can be decoded into a [`FrameSnapshot`]
//! at any point.
//!
//! ## Quick Start
//!
//! ```rust
//! use sid6502::{CallOutcome, Cpu, SID_BASE};
//!
//! let mut cpu = Cpu::new();
//!
//! // LDA #$00 / STA $D400 / RTS
//! cpu.load(0x1000, &[0xA9, 0x00, 0x8D, 0x00, 0xD4, 0x60]).unwrap();
//! cpu.reset(0x1000, 0, 0, 0);
//!
//! let outcome = cpu.run_subroutine();
//! assert_eq!(outcome, CallOutcome::Returned { instructions: 3 });
//! assert_eq!(cpu.writes().len(), 1);
//! assert_eq!(cpu.writes()[0].address, SID_BASE);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - Processor state, the store primitive and the execution driver
//! - `status` - Status register bitfield
//! - `memory` - Flat 64KB memory and access classification
//! - `opcodes` - 256-entry opcode metadata table
//! - `addressing` - Addressing modes and effective address resolution
//! - `sid` - Register window, write events and frame snapshots
//! - `player` - Init/play session driver
//! - `config` - Emulator configuration

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod player;
pub mod sid;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::EmulatorConfig;
pub use cpu::{CallOutcome, Cpu, HaltReason, StepOutcome, SENTINEL_RETURN, STACK_BASE};
pub use memory::{Access, Memory};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use player::{FrameTrace, Player};
pub use sid::{FilterState, FrameSnapshot, RegisterWrite, VoiceState, SID_BASE, SID_REGISTER_COUNT};
pub use status::Status;

/// Errors reported for invalid emulator setup.
///
/// Running code never produces an error: halts and runaway routines are
/// reported through [`StepOutcome`] and [`CallOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A program image does not fit between its load address and `$FFFF`.
    ProgramOutOfRange {
        /// Requested load address.
        address: u16,
        /// Length of the image in bytes.
        len: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ProgramOutOfRange { address, len } => {
                write!(
                    f,
                    "Program of {} bytes does not fit at ${:04X} (ends past $FFFF)",
                    len, address
                )
            }
        }
    }
}

impl std::error::Error for Error {}

//! Emulator configuration: execution limits and the few hardware concessions.

/// Default instruction ceiling for one subroutine call.
///
/// Init routines that decompress or build tables can run for several hundred
/// thousand instructions; a play routine normally needs a few thousand.
pub const DEFAULT_INSTRUCTION_LIMIT: u64 = 1_000_000;

/// Processor port value with BASIC, KERNAL and I/O all banked in.
pub const DEFAULT_BANK_CONFIG: u8 = 0x37;

/// Configuration for constructing a [`Cpu`](crate::Cpu) or [`Player`](crate::Player).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmulatorConfig {
    /// Maximum instructions executed by one `run_subroutine` call before it
    /// reports a timeout.
    pub instruction_limit: u64,

    /// Advance the VIC raster registers (`$D011`/`$D012`) after every
    /// instruction so that players polling for the frame end make progress.
    pub simulate_raster: bool,

    /// Record per-address execute/read/write classification.
    pub track_access: bool,

    /// Treat arrival at the KERNAL IRQ exits (`$EA31`, `$EA81`) as a return
    /// while the KERNAL is banked in. Interrupt-driven players end this way.
    pub kernal_irq_exits: bool,

    /// Value poked into the processor port (`$01`) when a player is created.
    pub bank_config: Option<u8>,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            instruction_limit: DEFAULT_INSTRUCTION_LIMIT,
            simulate_raster: true,
            track_access: false,
            kernal_irq_exits: true,
            bank_config: Some(DEFAULT_BANK_CONFIG),
        }
    }
}

impl EmulatorConfig {
    /// Returns a copy with a different instruction ceiling.
    pub fn with_instruction_limit(mut self, limit: u64) -> Self {
        self.instruction_limit = limit;
        self
    }

    /// Returns a copy with access tracking switched on or off.
    pub fn with_access_tracking(mut self, enabled: bool) -> Self {
        self.track_access = enabled;
        self
    }
}

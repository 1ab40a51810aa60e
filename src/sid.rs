//! # SID Register Window
//!
//! The SID sound chip occupies 29 registers at `$D400-$D41C`. Player routines
//! drive it purely by storing into this window, so the emulator observes the
//! window two ways:
//!
//! - [`RegisterWrite`]: one event per store, in exact store order
//! - [`FrameSnapshot`]: the decoded register state at a point in time
//!
//! Replaying a frame's events onto the snapshot taken before the frame yields
//! the snapshot taken after it.
//!
//! ## Register Layout
//!
//! | Offset | Register |
//! |--------|----------|
//! | +0/+1  | voice frequency lo/hi |
//! | +2/+3  | voice pulse width lo/hi (12 bits) |
//! | +4     | voice control (waveform, gate, sync, ring) |
//! | +5     | voice attack/decay |
//! | +6     | voice sustain/release |
//!
//! Voices start at `$D400`, `$D407` and `$D40E`. `$D415/$D416` hold the 11-bit
//! filter cutoff, `$D417` resonance and routing, `$D418` filter mode and
//! volume. `$D419-$D41C` are read-only on hardware (paddles, oscillator 3,
//! envelope 3) but still part of the window.

/// First address of the SID register window.
pub const SID_BASE: u16 = 0xD400;

/// Number of registers in the window.
pub const SID_REGISTER_COUNT: usize = 29;

/// Last address of the SID register window.
pub const SID_LAST: u16 = SID_BASE + SID_REGISTER_COUNT as u16 - 1;

const VOICE_STRIDE: usize = 7;
const FILTER_CUTOFF_LO: usize = 0x15;
const FILTER_CUTOFF_HI: usize = 0x16;
const FILTER_RESONANCE_ROUTING: usize = 0x17;
const FILTER_MODE_VOLUME: usize = 0x18;

/// Returns true if `address` lies inside the SID register window.
pub fn is_sid_register(address: u16) -> bool {
    (SID_BASE..=SID_LAST).contains(&address)
}

/// A store into the SID register window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterWrite {
    /// Frame number the store happened in (0 during init).
    pub frame: u32,

    /// CPU cycle count at the start of the storing instruction.
    pub cycle: u64,

    /// Absolute address written (`$D400-$D41C`).
    pub address: u16,

    /// Value written.
    pub value: u8,
}

impl RegisterWrite {
    /// Register offset inside the window (0-28).
    ///
    /// Only meaningful when `address` lies inside the window; other addresses
    /// give a wrapped offset of 29 or more.
    pub fn register(&self) -> usize {
        self.address.wrapping_sub(SID_BASE) as usize
    }
}

/// Decoded state of one of the three SID voices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoiceState {
    /// 16-bit oscillator frequency.
    pub frequency: u16,
    /// 12-bit pulse width.
    pub pulse_width: u16,
    /// Waveform, gate, sync, ring modulation and test bits.
    pub control: u8,
    /// Attack (high nibble) and decay (low nibble).
    pub attack_decay: u8,
    /// Sustain (high nibble) and release (low nibble).
    pub sustain_release: u8,
}

impl VoiceState {
    fn decode(regs: &[u8]) -> Self {
        Self {
            frequency: u16::from_le_bytes([regs[0], regs[1]]),
            pulse_width: u16::from_le_bytes([regs[2], regs[3] & 0x0F]),
            control: regs[4],
            attack_decay: regs[5],
            sustain_release: regs[6],
        }
    }

    /// Gate bit of the control register.
    pub fn gate(&self) -> bool {
        self.control & 0x01 != 0
    }

    /// Waveform selection bits (triangle, saw, pulse, noise) in the low nibble.
    pub fn waveform(&self) -> u8 {
        self.control >> 4
    }
}

/// Decoded filter and volume state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    /// 11-bit cutoff frequency.
    pub cutoff: u16,
    /// Resonance (high nibble) and voice routing (low nibble).
    pub resonance_routing: u8,
    /// Filter mode (high nibble) and master volume (low nibble).
    pub mode_volume: u8,
}

impl FilterState {
    fn decode(regs: &[u8; SID_REGISTER_COUNT]) -> Self {
        Self {
            cutoff: ((regs[FILTER_CUTOFF_HI] as u16) << 3) | (regs[FILTER_CUTOFF_LO] & 0x07) as u16,
            resonance_routing: regs[FILTER_RESONANCE_ROUTING],
            mode_volume: regs[FILTER_MODE_VOLUME],
        }
    }

    /// Master volume (0-15).
    pub fn volume(&self) -> u8 {
        self.mode_volume & 0x0F
    }
}

/// Decoded view of the SID register window.
///
/// # Examples
///
/// ```
/// use sid6502::{FrameSnapshot, SID_REGISTER_COUNT};
///
/// let mut regs = [0u8; SID_REGISTER_COUNT];
/// regs[0] = 0x34;
/// regs[1] = 0x12;
/// regs[0x18] = 0x0F;
///
/// let snapshot = FrameSnapshot::from_registers(regs);
/// assert_eq!(snapshot.voices[0].frequency, 0x1234);
/// assert_eq!(snapshot.filter.volume(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSnapshot {
    /// The three voices.
    pub voices: [VoiceState; 3],
    /// Filter and volume.
    pub filter: FilterState,
    registers: [u8; SID_REGISTER_COUNT],
}

impl FrameSnapshot {
    /// Decodes a snapshot from the raw 29 register bytes.
    pub fn from_registers(registers: [u8; SID_REGISTER_COUNT]) -> Self {
        let voice = |n: usize| {
            let start = n * VOICE_STRIDE;
            VoiceState::decode(&registers[start..start + VOICE_STRIDE])
        };
        Self {
            voices: [voice(0), voice(1), voice(2)],
            filter: FilterState::decode(&registers),
            registers,
        }
    }

    /// Raw register bytes the snapshot was decoded from.
    pub fn registers(&self) -> &[u8; SID_REGISTER_COUNT] {
        &self.registers
    }

    /// Applies `writes` in order and returns the resulting snapshot.
    ///
    /// Writes outside the window are ignored.
    pub fn replay<'a, I>(&self, writes: I) -> FrameSnapshot
    where
        I: IntoIterator<Item = &'a RegisterWrite>,
    {
        let mut registers = self.registers;
        for write in writes {
            if is_sid_register(write.address) {
                registers[write.register()] = write.value;
            }
        }
        FrameSnapshot::from_registers(registers)
    }
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self::from_registers([0; SID_REGISTER_COUNT])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(address: u16, value: u8) -> RegisterWrite {
        RegisterWrite {
            frame: 1,
            cycle: 0,
            address,
            value,
        }
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(SID_LAST, 0xD41C);
        assert!(is_sid_register(0xD400));
        assert!(is_sid_register(0xD41C));
        assert!(!is_sid_register(0xD3FF));
        assert!(!is_sid_register(0xD41D));
    }

    #[test]
    fn test_decode_voices() {
        let mut regs = [0u8; SID_REGISTER_COUNT];
        // Voice 2: freq $1A2B, pulse $0F80 (high nibble of hi byte ignored), saw + gate
        regs[7] = 0x2B;
        regs[8] = 0x1A;
        regs[9] = 0x80;
        regs[10] = 0xFF;
        regs[11] = 0x21;
        regs[12] = 0x09;
        regs[13] = 0xA5;

        let snapshot = FrameSnapshot::from_registers(regs);
        let voice = snapshot.voices[1];
        assert_eq!(voice.frequency, 0x1A2B);
        assert_eq!(voice.pulse_width, 0x0F80);
        assert_eq!(voice.control, 0x21);
        assert!(voice.gate());
        assert_eq!(voice.waveform(), 0x2);
        assert_eq!(voice.attack_decay, 0x09);
        assert_eq!(voice.sustain_release, 0xA5);
        assert_eq!(snapshot.voices[0], VoiceState::default());
    }

    #[test]
    fn test_decode_filter() {
        let mut regs = [0u8; SID_REGISTER_COUNT];
        regs[0x15] = 0xFF; // only the low 3 bits count
        regs[0x16] = 0x80;
        regs[0x17] = 0xF1;
        regs[0x18] = 0x1F;

        let filter = FrameSnapshot::from_registers(regs).filter;
        assert_eq!(filter.cutoff, 0x407);
        assert_eq!(filter.resonance_routing, 0xF1);
        assert_eq!(filter.mode_volume, 0x1F);
        assert_eq!(filter.volume(), 0x0F);
    }

    #[test]
    fn test_replay_applies_in_order() {
        let before = FrameSnapshot::default();
        let writes = [
            write(0xD404, 0x41),
            write(0xD404, 0x40),
            write(0xD418, 0x0F),
            write(0xD500, 0xFF), // outside the window
        ];

        let after = before.replay(&writes);
        assert_eq!(after.voices[0].control, 0x40);
        assert_eq!(after.filter.volume(), 15);
        assert_eq!(after.registers()[4], 0x40);
    }

    #[test]
    fn test_register_offset() {
        assert_eq!(write(0xD400, 0).register(), 0);
        assert_eq!(write(0xD41C, 0).register(), 28);
    }

    #[test]
    fn test_register_offset_outside_window() {
        assert!(write(0xD3FF, 0).register() >= SID_REGISTER_COUNT);
        assert!(write(0x0000, 0).register() >= SID_REGISTER_COUNT);
        assert_eq!(write(0xD41D, 0).register(), SID_REGISTER_COUNT);
    }
}

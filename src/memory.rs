//! # Flat Memory
//!
//! This module provides the 64KB address space owned by each emulator instance,
//! plus an optional per-address access classification used by table locators
//! and disassemblers downstream.
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes always succeed
//! - Addresses are `u16` and values are `u8`, so every access wraps by type
//! - No memory-mapped devices: the SID window and raster registers are plain RAM

use bitflags::bitflags;

use crate::Error;

/// Size of the 6502 address space.
pub const MEMORY_SIZE: usize = 0x10000;

bitflags! {
    /// How an address has been touched while running code.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Access: u8 {
        /// Fetched as an opcode or operand byte.
        const EXECUTE = 0b001;
        /// Read as instruction data.
        const READ    = 0b010;
        /// Written by a store or read-modify-write instruction.
        const WRITE   = 0b100;
    }
}

/// Flat 64KB memory.
///
/// All 65536 addresses are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use sid6502::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// // 16-bit reads are little-endian
/// mem.write(0x1235, 0x10);
/// assert_eq!(mem.read_word(0x1234), 0x1042);
/// ```
#[derive(Clone)]
pub struct Memory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,

    /// Per-address access flags, present only while tracking is enabled
    access: Option<Box<[Access; MEMORY_SIZE]>>,
}

impl Memory {
    /// Creates a memory instance with all bytes zeroed and tracking disabled.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
            access: None,
        }
    }

    /// Reads the byte at `addr`.
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes `value` at `addr`. This is a raw store with no side channel.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads a little-endian 16-bit word; the high byte address wraps past `$FFFF`.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian 16-bit word without carrying into the next page.
    ///
    /// A pointer at `$xxFF` takes its high byte from `$xx00`. This reproduces
    /// the NMOS `JMP ($xxFF)` bug and zero-page pointer wraparound.
    pub fn read_word_page_wrapped(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let hi = self.read(hi_addr) as u16;
        (hi << 8) | lo
    }

    /// Copies `bytes` into memory starting at `address`.
    ///
    /// Returns [`Error::ProgramOutOfRange`] when the image would run past
    /// `$FFFF`; memory is left untouched in that case.
    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), Error> {
        let start = address as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(Error::ProgramOutOfRange {
                address,
                len: bytes.len(),
            });
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Enables or disables access tracking. Enabling starts from a clear map.
    pub fn set_tracking(&mut self, enabled: bool) {
        self.access = if enabled {
            Some(Box::new([Access::empty(); MEMORY_SIZE]))
        } else {
            None
        };
    }

    /// Returns true if access tracking is enabled.
    pub fn is_tracking(&self) -> bool {
        self.access.is_some()
    }

    /// Records an access kind for `addr` if tracking is enabled.
    pub(crate) fn mark(&mut self, addr: u16, kind: Access) {
        if let Some(access) = self.access.as_mut() {
            access[addr as usize] |= kind;
        }
    }

    /// Returns the recorded access flags for `addr` (empty when not tracking).
    pub fn access(&self, addr: u16) -> Access {
        self.access
            .as_ref()
            .map_or(Access::empty(), |access| access[addr as usize])
    }

    /// Returns the whole access map, if tracking is enabled.
    pub fn access_map(&self) -> Option<&[Access]> {
        self.access.as_deref().map(|access| &access[..])
    }

    /// Clears all recorded access flags, keeping tracking enabled.
    pub fn clear_access(&mut self) {
        if let Some(access) = self.access.as_mut() {
            access.fill(Access::empty());
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("tracking", &self.is_tracking())
            .finish_non_exhaustive()
    }
}

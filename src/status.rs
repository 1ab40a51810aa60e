//! # Processor Status Register
//!
//! The 6502 packs its condition flags into one byte (NV-BDIZC). Bit 5 has no
//! storage on real hardware and always reads back as 1, which player code
//! occasionally depends on after `PHP`/`PLA`.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Status: u8 {
        const CARRY     = 0b0000_0001;
        const ZERO      = 0b0000_0010;
        const INTERRUPT = 0b0000_0100;
        const DECIMAL   = 0b0000_1000;
        const BREAK     = 0b0001_0000;
        const UNUSED    = 0b0010_0000;
        const OVERFLOW  = 0b0100_0000;
        const NEGATIVE  = 0b1000_0000;
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}

impl Status {
    /// Builds a status value from a byte pulled off the stack (`PLP`, `RTI`).
    ///
    /// The break bit does not exist inside the processor, so it is dropped;
    /// the unused bit is forced on.
    pub fn from_pulled(value: u8) -> Self {
        (Status::from_bits_retain(value) - Status::BREAK) | Status::UNUSED
    }

    /// Returns the byte pushed by `PHP` and `BRK` (break and unused set).
    pub fn to_pushed(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }

    /// Returns the packed register value with bit 5 set.
    pub fn to_byte(self) -> u8 {
        (self | Status::UNUSED).bits()
    }

    /// Updates N and Z from an 8-bit result.
    pub fn set_nz(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    pub fn carry(self) -> bool {
        self.contains(Status::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Status::CARRY, value);
    }

    pub fn zero(self) -> bool {
        self.contains(Status::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Status::ZERO, value);
    }

    pub fn interrupt_disable(self) -> bool {
        self.contains(Status::INTERRUPT)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.set(Status::INTERRUPT, value);
    }

    pub fn decimal(self) -> bool {
        self.contains(Status::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Status::DECIMAL, value);
    }

    pub fn overflow(self) -> bool {
        self.contains(Status::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Status::OVERFLOW, value);
    }

    pub fn negative(self) -> bool {
        self.contains(Status::NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.set(Status::NEGATIVE, value);
    }

    /// Returns the carry flag as the 0/1 value fed into ADC/SBC/ROL/ROR.
    pub(crate) fn carry_bit(self) -> u8 {
        self.carry() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_unused_bit() {
        assert_eq!(Status::default().bits(), 0b0010_0000);
    }

    #[test]
    fn test_pushed_byte_sets_break_and_unused() {
        let status = Status::CARRY | Status::NEGATIVE;
        assert_eq!(status.to_pushed(), 0b1011_0001);
    }

    #[test]
    fn test_pulled_byte_drops_break() {
        let status = Status::from_pulled(0xFF);
        assert!(!status.contains(Status::BREAK));
        assert!(status.contains(Status::UNUSED));
        assert_eq!(status.bits(), 0xEF);

        let status = Status::from_pulled(0x00);
        assert_eq!(status.bits(), 0x20);
    }

    #[test]
    fn test_set_nz() {
        let mut status = Status::default();

        status.set_nz(0x00);
        assert!(status.zero());
        assert!(!status.negative());

        status.set_nz(0x80);
        assert!(!status.zero());
        assert!(status.negative());

        status.set_nz(0x7F);
        assert!(!status.zero());
        assert!(!status.negative());
    }

    #[test]
    fn test_named_accessors() {
        let mut status = Status::default();

        status.set_carry(true);
        status.set_decimal(true);
        status.set_overflow(true);
        status.set_interrupt_disable(true);
        assert!(status.carry());
        assert!(status.decimal());
        assert!(status.overflow());
        assert!(status.interrupt_disable());
        assert_eq!(status.carry_bit(), 1);

        status.set_carry(false);
        assert_eq!(status.carry_bit(), 0);
        assert_eq!(status.to_byte(), 0b0110_1100);
    }
}

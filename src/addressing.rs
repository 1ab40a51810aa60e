//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns an instruction's operand bytes into an effective address.
//! Each mode determines how the CPU interprets the operand bytes and whether
//! an index addition can cross a page boundary.

use crate::instructions::Instruction;
use crate::{Access, Cpu};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// True for the modes whose index addition can carry into the next page.
    pub const fn can_cross_page(self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
        )
    }
}

/// A resolved operand location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Effective address.
    ///
    /// For `Immediate` and `Relative` this is the address of the operand byte
    /// itself; `Implicit` and `Accumulator` resolve to the byte after the opcode.
    pub address: u16,

    /// True if an index addition carried into a different page.
    pub page_crossed: bool,
}

impl Operand {
    fn new(address: u16) -> Self {
        Self {
            address,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let address = base.wrapping_add(index as u16);
        Self {
            address,
            page_crossed: page_crossed(base, address),
        }
    }
}

fn page_crossed(from: u16, to: u16) -> bool {
    (from & 0xFF00) != (to & 0xFF00)
}

impl Cpu {
    /// Resolves the effective address of `ins` according to its addressing mode.
    ///
    /// Operand bytes and pointer bytes are fetched through the CPU so that
    /// access tracking sees them; the operand itself is not read.
    pub(crate) fn resolve(&mut self, ins: &Instruction) -> Operand {
        let operand_addr = ins.address.wrapping_add(1);

        match ins.metadata.addressing_mode {
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => Operand::new(operand_addr),

            AddressingMode::ZeroPage => Operand::new(self.fetch(operand_addr) as u16),

            AddressingMode::ZeroPageX => {
                let zp = self.fetch(operand_addr).wrapping_add(self.x);
                Operand::new(zp as u16)
            }

            AddressingMode::ZeroPageY => {
                let zp = self.fetch(operand_addr).wrapping_add(self.y);
                Operand::new(zp as u16)
            }

            AddressingMode::Absolute => Operand::new(self.fetch_word(operand_addr)),

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(operand_addr);
                Operand::indexed(base, self.x)
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(operand_addr);
                Operand::indexed(base, self.y)
            }

            AddressingMode::Indirect => {
                let ptr = self.fetch_word(operand_addr);
                Operand::new(self.read_pointer(ptr))
            }

            AddressingMode::IndirectX => {
                let zp = self.fetch(operand_addr).wrapping_add(self.x);
                Operand::new(self.read_pointer(zp as u16))
            }

            AddressingMode::IndirectY => {
                let zp = self.fetch(operand_addr);
                let base = self.read_pointer(zp as u16);
                Operand::indexed(base, self.y)
            }
        }
    }

    /// Computes a branch target relative to the instruction following `ins`.
    ///
    /// Returns the target and whether it lies on a different page than the
    /// following instruction.
    pub(crate) fn branch_target(&mut self, ins: &Instruction) -> (u16, bool) {
        let offset = self.fetch(ins.address.wrapping_add(1)) as i8;
        let next = ins.next_address();
        let target = next.wrapping_add_signed(offset as i16);
        (target, page_crossed(next, target))
    }

    /// Reads a 16-bit pointer whose high byte never carries into the next page.
    fn read_pointer(&mut self, ptr: u16) -> u16 {
        let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
        self.memory.mark(ptr, Access::READ);
        self.memory.mark(hi_addr, Access::READ);
        self.memory.read_word_page_wrapped(ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::Immediate.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
        assert_eq!(AddressingMode::AbsoluteX.operand_bytes(), 2);
    }

    #[test]
    fn test_indexed_operand_page_crossing() {
        let op = Operand::indexed(0x10FF, 0x01);
        assert_eq!(op.address, 0x1100);
        assert!(op.page_crossed);

        let op = Operand::indexed(0x1080, 0x7F);
        assert_eq!(op.address, 0x10FF);
        assert!(!op.page_crossed);

        // 16-bit wraparound counts as a crossing
        let op = Operand::indexed(0xFFFF, 0x01);
        assert_eq!(op.address, 0x0000);
        assert!(op.page_crossed);
    }

    #[test]
    fn test_can_cross_page() {
        assert!(AddressingMode::AbsoluteX.can_cross_page());
        assert!(AddressingMode::AbsoluteY.can_cross_page());
        assert!(AddressingMode::IndirectY.can_cross_page());
        assert!(!AddressingMode::ZeroPageX.can_cross_page());
        assert!(!AddressingMode::IndirectX.can_cross_page());
    }
}

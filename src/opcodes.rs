//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all NMOS 6502 instruction information.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - The combined read-modify-write and load/store
//!   operations, immediate oddities and NOP variants that real player routines use,
//!   plus the 12 `JAM` opcodes that lock up the processor
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Operation class (selects the handler)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes
//! - Whether a page crossing costs an extra cycle
//! - Whether the opcode is undocumented

use crate::addressing::AddressingMode;

/// Operation performed by an opcode, independent of its addressing mode.
///
/// Every variant maps to exactly one handler in the instruction dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Operation {
    // Documented
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,

    // Undocumented
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Sbx, Las, Sha,
    Shx, Shy, Tas, Xaa, Lxa, Jam,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use sid6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA absolute,X (opcode 0xBD)
/// let lda = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.operation, Operation::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert_eq!(lda.size_bytes, 3);
/// assert!(lda.page_penalty);
/// assert!(!lda.illegal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "LAX", "JAM").
    pub mnemonic: &'static str,

    /// Operation class executed by the dispatcher.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// `JAM` opcodes never complete and are listed with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether crossing a page boundary while indexing adds one cycle.
    ///
    /// Only read instructions pay the penalty; stores and read-modify-write
    /// instructions always take the worst-case time in `base_cycles`.
    pub page_penalty: bool,

    /// Whether this opcode is undocumented.
    pub illegal: bool,
}

impl OpcodeMetadata {
    /// Returns true for the opcodes that lock up an NMOS 6502.
    pub fn is_jam(&self) -> bool {
        self.operation == Operation::Jam
    }
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    page_penalty: bool,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        page_penalty,
        illegal: false,
    }
}

const fn illegal(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    page_penalty: bool,
) -> OpcodeMetadata {
    let mut metadata = op(mnemonic, operation, addressing_mode, base_cycles, page_penalty);
    metadata.illegal = true;
    metadata
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use sid6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // Undocumented LAX zero page
/// let lax = &OPCODE_TABLE[0xA7];
/// assert_eq!(lax.mnemonic, "LAX");
/// assert!(lax.illegal);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 00 */ op("BRK", Operation::Brk, AddressingMode::Implicit, 7, false),
    /* 01 */ op("ORA", Operation::Ora, AddressingMode::IndirectX, 6, false),
    /* 02 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 03 */ illegal("SLO", Operation::Slo, AddressingMode::IndirectX, 8, false),
    /* 04 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPage, 3, false),
    /* 05 */ op("ORA", Operation::Ora, AddressingMode::ZeroPage, 3, false),
    /* 06 */ op("ASL", Operation::Asl, AddressingMode::ZeroPage, 5, false),
    /* 07 */ illegal("SLO", Operation::Slo, AddressingMode::ZeroPage, 5, false),
    /* 08 */ op("PHP", Operation::Php, AddressingMode::Implicit, 3, false),
    /* 09 */ op("ORA", Operation::Ora, AddressingMode::Immediate, 2, false),
    /* 0A */ op("ASL", Operation::Asl, AddressingMode::Accumulator, 2, false),
    /* 0B */ illegal("ANC", Operation::Anc, AddressingMode::Immediate, 2, false),
    /* 0C */ illegal("NOP", Operation::Nop, AddressingMode::Absolute, 4, false),
    /* 0D */ op("ORA", Operation::Ora, AddressingMode::Absolute, 4, false),
    /* 0E */ op("ASL", Operation::Asl, AddressingMode::Absolute, 6, false),
    /* 0F */ illegal("SLO", Operation::Slo, AddressingMode::Absolute, 6, false),
    /* 10 */ op("BPL", Operation::Bpl, AddressingMode::Relative, 2, false),
    /* 11 */ op("ORA", Operation::Ora, AddressingMode::IndirectY, 5, true),
    /* 12 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 13 */ illegal("SLO", Operation::Slo, AddressingMode::IndirectY, 8, false),
    /* 14 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, false),
    /* 15 */ op("ORA", Operation::Ora, AddressingMode::ZeroPageX, 4, false),
    /* 16 */ op("ASL", Operation::Asl, AddressingMode::ZeroPageX, 6, false),
    /* 17 */ illegal("SLO", Operation::Slo, AddressingMode::ZeroPageX, 6, false),
    /* 18 */ op("CLC", Operation::Clc, AddressingMode::Implicit, 2, false),
    /* 19 */ op("ORA", Operation::Ora, AddressingMode::AbsoluteY, 4, true),
    /* 1A */ illegal("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* 1B */ illegal("SLO", Operation::Slo, AddressingMode::AbsoluteY, 7, false),
    /* 1C */ illegal("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, true),
    /* 1D */ op("ORA", Operation::Ora, AddressingMode::AbsoluteX, 4, true),
    /* 1E */ op("ASL", Operation::Asl, AddressingMode::AbsoluteX, 7, false),
    /* 1F */ illegal("SLO", Operation::Slo, AddressingMode::AbsoluteX, 7, false),
    /* 20 */ op("JSR", Operation::Jsr, AddressingMode::Absolute, 6, false),
    /* 21 */ op("AND", Operation::And, AddressingMode::IndirectX, 6, false),
    /* 22 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 23 */ illegal("RLA", Operation::Rla, AddressingMode::IndirectX, 8, false),
    /* 24 */ op("BIT", Operation::Bit, AddressingMode::ZeroPage, 3, false),
    /* 25 */ op("AND", Operation::And, AddressingMode::ZeroPage, 3, false),
    /* 26 */ op("ROL", Operation::Rol, AddressingMode::ZeroPage, 5, false),
    /* 27 */ illegal("RLA", Operation::Rla, AddressingMode::ZeroPage, 5, false),
    /* 28 */ op("PLP", Operation::Plp, AddressingMode::Implicit, 4, false),
    /* 29 */ op("AND", Operation::And, AddressingMode::Immediate, 2, false),
    /* 2A */ op("ROL", Operation::Rol, AddressingMode::Accumulator, 2, false),
    /* 2B */ illegal("ANC", Operation::Anc, AddressingMode::Immediate, 2, false),
    /* 2C */ op("BIT", Operation::Bit, AddressingMode::Absolute, 4, false),
    /* 2D */ op("AND", Operation::And, AddressingMode::Absolute, 4, false),
    /* 2E */ op("ROL", Operation::Rol, AddressingMode::Absolute, 6, false),
    /* 2F */ illegal("RLA", Operation::Rla, AddressingMode::Absolute, 6, false),
    /* 30 */ op("BMI", Operation::Bmi, AddressingMode::Relative, 2, false),
    /* 31 */ op("AND", Operation::And, AddressingMode::IndirectY, 5, true),
    /* 32 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 33 */ illegal("RLA", Operation::Rla, AddressingMode::IndirectY, 8, false),
    /* 34 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, false),
    /* 35 */ op("AND", Operation::And, AddressingMode::ZeroPageX, 4, false),
    /* 36 */ op("ROL", Operation::Rol, AddressingMode::ZeroPageX, 6, false),
    /* 37 */ illegal("RLA", Operation::Rla, AddressingMode::ZeroPageX, 6, false),
    /* 38 */ op("SEC", Operation::Sec, AddressingMode::Implicit, 2, false),
    /* 39 */ op("AND", Operation::And, AddressingMode::AbsoluteY, 4, true),
    /* 3A */ illegal("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* 3B */ illegal("RLA", Operation::Rla, AddressingMode::AbsoluteY, 7, false),
    /* 3C */ illegal("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, true),
    /* 3D */ op("AND", Operation::And, AddressingMode::AbsoluteX, 4, true),
    /* 3E */ op("ROL", Operation::Rol, AddressingMode::AbsoluteX, 7, false),
    /* 3F */ illegal("RLA", Operation::Rla, AddressingMode::AbsoluteX, 7, false),
    /* 40 */ op("RTI", Operation::Rti, AddressingMode::Implicit, 6, false),
    /* 41 */ op("EOR", Operation::Eor, AddressingMode::IndirectX, 6, false),
    /* 42 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 43 */ illegal("SRE", Operation::Sre, AddressingMode::IndirectX, 8, false),
    /* 44 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPage, 3, false),
    /* 45 */ op("EOR", Operation::Eor, AddressingMode::ZeroPage, 3, false),
    /* 46 */ op("LSR", Operation::Lsr, AddressingMode::ZeroPage, 5, false),
    /* 47 */ illegal("SRE", Operation::Sre, AddressingMode::ZeroPage, 5, false),
    /* 48 */ op("PHA", Operation::Pha, AddressingMode::Implicit, 3, false),
    /* 49 */ op("EOR", Operation::Eor, AddressingMode::Immediate, 2, false),
    /* 4A */ op("LSR", Operation::Lsr, AddressingMode::Accumulator, 2, false),
    /* 4B */ illegal("ALR", Operation::Alr, AddressingMode::Immediate, 2, false),
    /* 4C */ op("JMP", Operation::Jmp, AddressingMode::Absolute, 3, false),
    /* 4D */ op("EOR", Operation::Eor, AddressingMode::Absolute, 4, false),
    /* 4E */ op("LSR", Operation::Lsr, AddressingMode::Absolute, 6, false),
    /* 4F */ illegal("SRE", Operation::Sre, AddressingMode::Absolute, 6, false),
    /* 50 */ op("BVC", Operation::Bvc, AddressingMode::Relative, 2, false),
    /* 51 */ op("EOR", Operation::Eor, AddressingMode::IndirectY, 5, true),
    /* 52 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 53 */ illegal("SRE", Operation::Sre, AddressingMode::IndirectY, 8, false),
    /* 54 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, false),
    /* 55 */ op("EOR", Operation::Eor, AddressingMode::ZeroPageX, 4, false),
    /* 56 */ op("LSR", Operation::Lsr, AddressingMode::ZeroPageX, 6, false),
    /* 57 */ illegal("SRE", Operation::Sre, AddressingMode::ZeroPageX, 6, false),
    /* 58 */ op("CLI", Operation::Cli, AddressingMode::Implicit, 2, false),
    /* 59 */ op("EOR", Operation::Eor, AddressingMode::AbsoluteY, 4, true),
    /* 5A */ illegal("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* 5B */ illegal("SRE", Operation::Sre, AddressingMode::AbsoluteY, 7, false),
    /* 5C */ illegal("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, true),
    /* 5D */ op("EOR", Operation::Eor, AddressingMode::AbsoluteX, 4, true),
    /* 5E */ op("LSR", Operation::Lsr, AddressingMode::AbsoluteX, 7, false),
    /* 5F */ illegal("SRE", Operation::Sre, AddressingMode::AbsoluteX, 7, false),
    /* 60 */ op("RTS", Operation::Rts, AddressingMode::Implicit, 6, false),
    /* 61 */ op("ADC", Operation::Adc, AddressingMode::IndirectX, 6, false),
    /* 62 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 63 */ illegal("RRA", Operation::Rra, AddressingMode::IndirectX, 8, false),
    /* 64 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPage, 3, false),
    /* 65 */ op("ADC", Operation::Adc, AddressingMode::ZeroPage, 3, false),
    /* 66 */ op("ROR", Operation::Ror, AddressingMode::ZeroPage, 5, false),
    /* 67 */ illegal("RRA", Operation::Rra, AddressingMode::ZeroPage, 5, false),
    /* 68 */ op("PLA", Operation::Pla, AddressingMode::Implicit, 4, false),
    /* 69 */ op("ADC", Operation::Adc, AddressingMode::Immediate, 2, false),
    /* 6A */ op("ROR", Operation::Ror, AddressingMode::Accumulator, 2, false),
    /* 6B */ illegal("ARR", Operation::Arr, AddressingMode::Immediate, 2, false),
    /* 6C */ op("JMP", Operation::Jmp, AddressingMode::Indirect, 5, false),
    /* 6D */ op("ADC", Operation::Adc, AddressingMode::Absolute, 4, false),
    /* 6E */ op("ROR", Operation::Ror, AddressingMode::Absolute, 6, false),
    /* 6F */ illegal("RRA", Operation::Rra, AddressingMode::Absolute, 6, false),
    /* 70 */ op("BVS", Operation::Bvs, AddressingMode::Relative, 2, false),
    /* 71 */ op("ADC", Operation::Adc, AddressingMode::IndirectY, 5, true),
    /* 72 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 73 */ illegal("RRA", Operation::Rra, AddressingMode::IndirectY, 8, false),
    /* 74 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, false),
    /* 75 */ op("ADC", Operation::Adc, AddressingMode::ZeroPageX, 4, false),
    /* 76 */ op("ROR", Operation::Ror, AddressingMode::ZeroPageX, 6, false),
    /* 77 */ illegal("RRA", Operation::Rra, AddressingMode::ZeroPageX, 6, false),
    /* 78 */ op("SEI", Operation::Sei, AddressingMode::Implicit, 2, false),
    /* 79 */ op("ADC", Operation::Adc, AddressingMode::AbsoluteY, 4, true),
    /* 7A */ illegal("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* 7B */ illegal("RRA", Operation::Rra, AddressingMode::AbsoluteY, 7, false),
    /* 7C */ illegal("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, true),
    /* 7D */ op("ADC", Operation::Adc, AddressingMode::AbsoluteX, 4, true),
    /* 7E */ op("ROR", Operation::Ror, AddressingMode::AbsoluteX, 7, false),
    /* 7F */ illegal("RRA", Operation::Rra, AddressingMode::AbsoluteX, 7, false),
    /* 80 */ illegal("NOP", Operation::Nop, AddressingMode::Immediate, 2, false),
    /* 81 */ op("STA", Operation::Sta, AddressingMode::IndirectX, 6, false),
    /* 82 */ illegal("NOP", Operation::Nop, AddressingMode::Immediate, 2, false),
    /* 83 */ illegal("SAX", Operation::Sax, AddressingMode::IndirectX, 6, false),
    /* 84 */ op("STY", Operation::Sty, AddressingMode::ZeroPage, 3, false),
    /* 85 */ op("STA", Operation::Sta, AddressingMode::ZeroPage, 3, false),
    /* 86 */ op("STX", Operation::Stx, AddressingMode::ZeroPage, 3, false),
    /* 87 */ illegal("SAX", Operation::Sax, AddressingMode::ZeroPage, 3, false),
    /* 88 */ op("DEY", Operation::Dey, AddressingMode::Implicit, 2, false),
    /* 89 */ illegal("NOP", Operation::Nop, AddressingMode::Immediate, 2, false),
    /* 8A */ op("TXA", Operation::Txa, AddressingMode::Implicit, 2, false),
    /* 8B */ illegal("XAA", Operation::Xaa, AddressingMode::Immediate, 2, false),
    /* 8C */ op("STY", Operation::Sty, AddressingMode::Absolute, 4, false),
    /* 8D */ op("STA", Operation::Sta, AddressingMode::Absolute, 4, false),
    /* 8E */ op("STX", Operation::Stx, AddressingMode::Absolute, 4, false),
    /* 8F */ illegal("SAX", Operation::Sax, AddressingMode::Absolute, 4, false),
    /* 90 */ op("BCC", Operation::Bcc, AddressingMode::Relative, 2, false),
    /* 91 */ op("STA", Operation::Sta, AddressingMode::IndirectY, 6, false),
    /* 92 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* 93 */ illegal("SHA", Operation::Sha, AddressingMode::IndirectY, 6, false),
    /* 94 */ op("STY", Operation::Sty, AddressingMode::ZeroPageX, 4, false),
    /* 95 */ op("STA", Operation::Sta, AddressingMode::ZeroPageX, 4, false),
    /* 96 */ op("STX", Operation::Stx, AddressingMode::ZeroPageY, 4, false),
    /* 97 */ illegal("SAX", Operation::Sax, AddressingMode::ZeroPageY, 4, false),
    /* 98 */ op("TYA", Operation::Tya, AddressingMode::Implicit, 2, false),
    /* 99 */ op("STA", Operation::Sta, AddressingMode::AbsoluteY, 5, false),
    /* 9A */ op("TXS", Operation::Txs, AddressingMode::Implicit, 2, false),
    /* 9B */ illegal("TAS", Operation::Tas, AddressingMode::AbsoluteY, 5, false),
    /* 9C */ illegal("SHY", Operation::Shy, AddressingMode::AbsoluteX, 5, false),
    /* 9D */ op("STA", Operation::Sta, AddressingMode::AbsoluteX, 5, false),
    /* 9E */ illegal("SHX", Operation::Shx, AddressingMode::AbsoluteY, 5, false),
    /* 9F */ illegal("SHA", Operation::Sha, AddressingMode::AbsoluteY, 5, false),
    /* A0 */ op("LDY", Operation::Ldy, AddressingMode::Immediate, 2, false),
    /* A1 */ op("LDA", Operation::Lda, AddressingMode::IndirectX, 6, false),
    /* A2 */ op("LDX", Operation::Ldx, AddressingMode::Immediate, 2, false),
    /* A3 */ illegal("LAX", Operation::Lax, AddressingMode::IndirectX, 6, false),
    /* A4 */ op("LDY", Operation::Ldy, AddressingMode::ZeroPage, 3, false),
    /* A5 */ op("LDA", Operation::Lda, AddressingMode::ZeroPage, 3, false),
    /* A6 */ op("LDX", Operation::Ldx, AddressingMode::ZeroPage, 3, false),
    /* A7 */ illegal("LAX", Operation::Lax, AddressingMode::ZeroPage, 3, false),
    /* A8 */ op("TAY", Operation::Tay, AddressingMode::Implicit, 2, false),
    /* A9 */ op("LDA", Operation::Lda, AddressingMode::Immediate, 2, false),
    /* AA */ op("TAX", Operation::Tax, AddressingMode::Implicit, 2, false),
    /* AB */ illegal("LXA", Operation::Lxa, AddressingMode::Immediate, 2, false),
    /* AC */ op("LDY", Operation::Ldy, AddressingMode::Absolute, 4, false),
    /* AD */ op("LDA", Operation::Lda, AddressingMode::Absolute, 4, false),
    /* AE */ op("LDX", Operation::Ldx, AddressingMode::Absolute, 4, false),
    /* AF */ illegal("LAX", Operation::Lax, AddressingMode::Absolute, 4, false),
    /* B0 */ op("BCS", Operation::Bcs, AddressingMode::Relative, 2, false),
    /* B1 */ op("LDA", Operation::Lda, AddressingMode::IndirectY, 5, true),
    /* B2 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* B3 */ illegal("LAX", Operation::Lax, AddressingMode::IndirectY, 5, true),
    /* B4 */ op("LDY", Operation::Ldy, AddressingMode::ZeroPageX, 4, false),
    /* B5 */ op("LDA", Operation::Lda, AddressingMode::ZeroPageX, 4, false),
    /* B6 */ op("LDX", Operation::Ldx, AddressingMode::ZeroPageY, 4, false),
    /* B7 */ illegal("LAX", Operation::Lax, AddressingMode::ZeroPageY, 4, false),
    /* B8 */ op("CLV", Operation::Clv, AddressingMode::Implicit, 2, false),
    /* B9 */ op("LDA", Operation::Lda, AddressingMode::AbsoluteY, 4, true),
    /* BA */ op("TSX", Operation::Tsx, AddressingMode::Implicit, 2, false),
    /* BB */ illegal("LAS", Operation::Las, AddressingMode::AbsoluteY, 4, true),
    /* BC */ op("LDY", Operation::Ldy, AddressingMode::AbsoluteX, 4, true),
    /* BD */ op("LDA", Operation::Lda, AddressingMode::AbsoluteX, 4, true),
    /* BE */ op("LDX", Operation::Ldx, AddressingMode::AbsoluteY, 4, true),
    /* BF */ illegal("LAX", Operation::Lax, AddressingMode::AbsoluteY, 4, true),
    /* C0 */ op("CPY", Operation::Cpy, AddressingMode::Immediate, 2, false),
    /* C1 */ op("CMP", Operation::Cmp, AddressingMode::IndirectX, 6, false),
    /* C2 */ illegal("NOP", Operation::Nop, AddressingMode::Immediate, 2, false),
    /* C3 */ illegal("DCP", Operation::Dcp, AddressingMode::IndirectX, 8, false),
    /* C4 */ op("CPY", Operation::Cpy, AddressingMode::ZeroPage, 3, false),
    /* C5 */ op("CMP", Operation::Cmp, AddressingMode::ZeroPage, 3, false),
    /* C6 */ op("DEC", Operation::Dec, AddressingMode::ZeroPage, 5, false),
    /* C7 */ illegal("DCP", Operation::Dcp, AddressingMode::ZeroPage, 5, false),
    /* C8 */ op("INY", Operation::Iny, AddressingMode::Implicit, 2, false),
    /* C9 */ op("CMP", Operation::Cmp, AddressingMode::Immediate, 2, false),
    /* CA */ op("DEX", Operation::Dex, AddressingMode::Implicit, 2, false),
    /* CB */ illegal("SBX", Operation::Sbx, AddressingMode::Immediate, 2, false),
    /* CC */ op("CPY", Operation::Cpy, AddressingMode::Absolute, 4, false),
    /* CD */ op("CMP", Operation::Cmp, AddressingMode::Absolute, 4, false),
    /* CE */ op("DEC", Operation::Dec, AddressingMode::Absolute, 6, false),
    /* CF */ illegal("DCP", Operation::Dcp, AddressingMode::Absolute, 6, false),
    /* D0 */ op("BNE", Operation::Bne, AddressingMode::Relative, 2, false),
    /* D1 */ op("CMP", Operation::Cmp, AddressingMode::IndirectY, 5, true),
    /* D2 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* D3 */ illegal("DCP", Operation::Dcp, AddressingMode::IndirectY, 8, false),
    /* D4 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, false),
    /* D5 */ op("CMP", Operation::Cmp, AddressingMode::ZeroPageX, 4, false),
    /* D6 */ op("DEC", Operation::Dec, AddressingMode::ZeroPageX, 6, false),
    /* D7 */ illegal("DCP", Operation::Dcp, AddressingMode::ZeroPageX, 6, false),
    /* D8 */ op("CLD", Operation::Cld, AddressingMode::Implicit, 2, false),
    /* D9 */ op("CMP", Operation::Cmp, AddressingMode::AbsoluteY, 4, true),
    /* DA */ illegal("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* DB */ illegal("DCP", Operation::Dcp, AddressingMode::AbsoluteY, 7, false),
    /* DC */ illegal("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, true),
    /* DD */ op("CMP", Operation::Cmp, AddressingMode::AbsoluteX, 4, true),
    /* DE */ op("DEC", Operation::Dec, AddressingMode::AbsoluteX, 7, false),
    /* DF */ illegal("DCP", Operation::Dcp, AddressingMode::AbsoluteX, 7, false),
    /* E0 */ op("CPX", Operation::Cpx, AddressingMode::Immediate, 2, false),
    /* E1 */ op("SBC", Operation::Sbc, AddressingMode::IndirectX, 6, false),
    /* E2 */ illegal("NOP", Operation::Nop, AddressingMode::Immediate, 2, false),
    /* E3 */ illegal("ISC", Operation::Isc, AddressingMode::IndirectX, 8, false),
    /* E4 */ op("CPX", Operation::Cpx, AddressingMode::ZeroPage, 3, false),
    /* E5 */ op("SBC", Operation::Sbc, AddressingMode::ZeroPage, 3, false),
    /* E6 */ op("INC", Operation::Inc, AddressingMode::ZeroPage, 5, false),
    /* E7 */ illegal("ISC", Operation::Isc, AddressingMode::ZeroPage, 5, false),
    /* E8 */ op("INX", Operation::Inx, AddressingMode::Implicit, 2, false),
    /* E9 */ op("SBC", Operation::Sbc, AddressingMode::Immediate, 2, false),
    /* EA */ op("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* EB */ illegal("SBC", Operation::Sbc, AddressingMode::Immediate, 2, false),
    /* EC */ op("CPX", Operation::Cpx, AddressingMode::Absolute, 4, false),
    /* ED */ op("SBC", Operation::Sbc, AddressingMode::Absolute, 4, false),
    /* EE */ op("INC", Operation::Inc, AddressingMode::Absolute, 6, false),
    /* EF */ illegal("ISC", Operation::Isc, AddressingMode::Absolute, 6, false),
    /* F0 */ op("BEQ", Operation::Beq, AddressingMode::Relative, 2, false),
    /* F1 */ op("SBC", Operation::Sbc, AddressingMode::IndirectY, 5, true),
    /* F2 */ illegal("JAM", Operation::Jam, AddressingMode::Implicit, 0, false),
    /* F3 */ illegal("ISC", Operation::Isc, AddressingMode::IndirectY, 8, false),
    /* F4 */ illegal("NOP", Operation::Nop, AddressingMode::ZeroPageX, 4, false),
    /* F5 */ op("SBC", Operation::Sbc, AddressingMode::ZeroPageX, 4, false),
    /* F6 */ op("INC", Operation::Inc, AddressingMode::ZeroPageX, 6, false),
    /* F7 */ illegal("ISC", Operation::Isc, AddressingMode::ZeroPageX, 6, false),
    /* F8 */ op("SED", Operation::Sed, AddressingMode::Implicit, 2, false),
    /* F9 */ op("SBC", Operation::Sbc, AddressingMode::AbsoluteY, 4, true),
    /* FA */ illegal("NOP", Operation::Nop, AddressingMode::Implicit, 2, false),
    /* FB */ illegal("ISC", Operation::Isc, AddressingMode::AbsoluteY, 7, false),
    /* FC */ illegal("NOP", Operation::Nop, AddressingMode::AbsoluteX, 4, true),
    /* FD */ op("SBC", Operation::Sbc, AddressingMode::AbsoluteX, 4, true),
    /* FE */ op("INC", Operation::Inc, AddressingMode::AbsoluteX, 7, false),
    /* FF */ illegal("ISC", Operation::Isc, AddressingMode::AbsoluteX, 7, false),
];

//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone handler taking the CPU and the decoded instruction;
//! [`handler`] pairs every [`Operation`] in the opcode table with its function.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, JAM)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: Undocumented opcodes (SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC, ...)
//!
//! The CPU charges each opcode's base cycles before the handler runs; handlers
//! only add page-crossing and branch penalties.

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod illegal;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, Cpu, OpcodeMetadata, Operation, StepOutcome};

/// A decoded instruction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Instruction {
    /// Address of the opcode byte.
    pub address: u16,
    pub opcode: u8,
    pub metadata: &'static OpcodeMetadata,
}

impl Instruction {
    /// Address of the instruction that follows this one.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.metadata.size_bytes as u16)
    }
}

/// Signature shared by all instruction handlers.
pub(crate) type Handler = fn(&mut Cpu, &Instruction) -> StepOutcome;

/// Returns the handler implementing `operation`.
pub(crate) fn handler(operation: Operation) -> Handler {
    match operation {
        Operation::Adc => alu::execute_adc,
        Operation::And => alu::execute_and,
        Operation::Asl => shifts::execute_asl,
        Operation::Bcc => branches::execute_bcc,
        Operation::Bcs => branches::execute_bcs,
        Operation::Beq => branches::execute_beq,
        Operation::Bit => alu::execute_bit,
        Operation::Bmi => branches::execute_bmi,
        Operation::Bne => branches::execute_bne,
        Operation::Bpl => branches::execute_bpl,
        Operation::Brk => control::execute_brk,
        Operation::Bvc => branches::execute_bvc,
        Operation::Bvs => branches::execute_bvs,
        Operation::Clc => flags::execute_clc,
        Operation::Cld => flags::execute_cld,
        Operation::Cli => flags::execute_cli,
        Operation::Clv => flags::execute_clv,
        Operation::Cmp => alu::execute_cmp,
        Operation::Cpx => alu::execute_cpx,
        Operation::Cpy => alu::execute_cpy,
        Operation::Dec => inc_dec::execute_dec,
        Operation::Dex => inc_dec::execute_dex,
        Operation::Dey => inc_dec::execute_dey,
        Operation::Eor => alu::execute_eor,
        Operation::Inc => inc_dec::execute_inc,
        Operation::Inx => inc_dec::execute_inx,
        Operation::Iny => inc_dec::execute_iny,
        Operation::Jmp => control::execute_jmp,
        Operation::Jsr => control::execute_jsr,
        Operation::Lda => load_store::execute_lda,
        Operation::Ldx => load_store::execute_ldx,
        Operation::Ldy => load_store::execute_ldy,
        Operation::Lsr => shifts::execute_lsr,
        Operation::Nop => control::execute_nop,
        Operation::Ora => alu::execute_ora,
        Operation::Pha => stack::execute_pha,
        Operation::Php => stack::execute_php,
        Operation::Pla => stack::execute_pla,
        Operation::Plp => stack::execute_plp,
        Operation::Rol => shifts::execute_rol,
        Operation::Ror => shifts::execute_ror,
        Operation::Rti => control::execute_rti,
        Operation::Rts => control::execute_rts,
        Operation::Sbc => alu::execute_sbc,
        Operation::Sec => flags::execute_sec,
        Operation::Sed => flags::execute_sed,
        Operation::Sei => flags::execute_sei,
        Operation::Sta => load_store::execute_sta,
        Operation::Stx => load_store::execute_stx,
        Operation::Sty => load_store::execute_sty,
        Operation::Tax => transfer::execute_tax,
        Operation::Tay => transfer::execute_tay,
        Operation::Tsx => transfer::execute_tsx,
        Operation::Txa => transfer::execute_txa,
        Operation::Txs => transfer::execute_txs,
        Operation::Tya => transfer::execute_tya,
        Operation::Slo => illegal::execute_slo,
        Operation::Rla => illegal::execute_rla,
        Operation::Sre => illegal::execute_sre,
        Operation::Rra => illegal::execute_rra,
        Operation::Sax => illegal::execute_sax,
        Operation::Lax => illegal::execute_lax,
        Operation::Dcp => illegal::execute_dcp,
        Operation::Isc => illegal::execute_isc,
        Operation::Anc => illegal::execute_anc,
        Operation::Alr => illegal::execute_alr,
        Operation::Arr => illegal::execute_arr,
        Operation::Sbx => illegal::execute_sbx,
        Operation::Las => illegal::execute_las,
        Operation::Sha => illegal::execute_sha,
        Operation::Shx => illegal::execute_shx,
        Operation::Shy => illegal::execute_shy,
        Operation::Tas => illegal::execute_tas,
        Operation::Xaa => illegal::execute_xaa,
        Operation::Lxa => illegal::execute_lxa,
        Operation::Jam => control::execute_jam,
    }
}

/// Executes a decoded instruction.
pub(crate) fn execute(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    handler(ins.metadata.operation)(cpu, ins)
}

impl Cpu {
    /// Resolves the effective address and charges the page-crossing cycle
    /// for opcodes that pay it.
    pub(crate) fn effective_address(&mut self, ins: &Instruction) -> u16 {
        let operand = self.resolve(ins);
        if operand.page_crossed && ins.metadata.page_penalty {
            self.cycles += 1;
        }
        operand.address
    }

    /// Reads the operand value (immediate byte or memory at the effective address).
    pub(crate) fn read_operand(&mut self, ins: &Instruction) -> u8 {
        if ins.metadata.addressing_mode == AddressingMode::Immediate {
            self.fetch(ins.address.wrapping_add(1))
        } else {
            let addr = self.effective_address(ins);
            self.read(addr)
        }
    }

    /// Applies a read-modify-write operation to the accumulator or memory
    /// operand and returns the new value.
    pub(crate) fn modify(&mut self, ins: &Instruction, f: impl FnOnce(&mut Cpu, u8) -> u8) -> u8 {
        if ins.metadata.addressing_mode == AddressingMode::Accumulator {
            let a = self.a;
            let result = f(self, a);
            self.a = result;
            result
        } else {
            let addr = self.effective_address(ins);
            let value = self.read(addr);
            let result = f(self, value);
            self.write(addr, result);
            result
        }
    }
}

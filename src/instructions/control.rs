//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute, and indirect with the page-wrap bug)
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - BRK: Software interrupt, which halts player code
//! - NOP: All documented and undocumented no-operation forms
//! - JAM: Processor lock-up opcodes
//!
//! RTS and RTI report [`StepOutcome::Returned`] when they unwind the sentinel
//! frame pushed by [`Cpu::run_subroutine`].

use super::Instruction;
use crate::{AddressingMode, Cpu, HaltReason, Status, StepOutcome, SENTINEL_RETURN};

pub(crate) fn execute_jmp(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.pc = cpu.effective_address(ins);
    StepOutcome::Continue
}

/// JSR pushes the address of its own last byte; RTS adds one when pulling.
pub(crate) fn execute_jsr(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let target = cpu.effective_address(ins);
    cpu.push_word(ins.address.wrapping_add(2));
    cpu.pc = target;
    StepOutcome::Continue
}

pub(crate) fn execute_rts(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.pc = cpu.pull_word().wrapping_add(1);

    if cpu.returned_to_sentinel() {
        StepOutcome::Returned
    } else {
        StepOutcome::Continue
    }
}

/// RTI pulls status then PC (without the +1 of RTS).
///
/// Interrupt-driven players sometimes finish their play routine with RTI.
/// When only the sentinel frame is left on the stack there is no status byte
/// to pull, so the sentinel is unwound as if by RTS.
pub(crate) fn execute_rti(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    if cpu.sentinel_sp == Some(cpu.sp.wrapping_add(2)) {
        cpu.pull_word();
        cpu.pc = SENTINEL_RETURN;
        return StepOutcome::Returned;
    }

    let status = cpu.pull();
    cpu.status = Status::from_pulled(status);
    cpu.pc = cpu.pull_word();

    if cpu.returned_to_sentinel() {
        StepOutcome::Returned
    } else {
        StepOutcome::Continue
    }
}

/// BRK has no vector to service it in player code; it halts after its 7 cycles.
pub(crate) fn execute_brk(_cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    StepOutcome::Halted(HaltReason::Break)
}

/// NOPs with an operand still read it, so the indexed forms pay the
/// page-crossing cycle.
pub(crate) fn execute_nop(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    if ins.metadata.addressing_mode != AddressingMode::Implicit {
        cpu.read_operand(ins);
    }
    StepOutcome::Continue
}

pub(crate) fn execute_jam(_cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    StepOutcome::Halted(HaltReason::Jam(ins.opcode))
}

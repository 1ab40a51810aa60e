//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set N and Z and pay the page-crossing cycle on indexed modes. Stores
//! never affect flags, always take their fixed cycle count, and go through the
//! CPU's store primitive so SID register writes are captured.

use super::Instruction;
use crate::{Cpu, StepOutcome};

pub(crate) fn execute_lda(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.a = cpu.read_operand(ins);
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_ldx(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.x = cpu.read_operand(ins);
    cpu.status.set_nz(cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_ldy(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.y = cpu.read_operand(ins);
    cpu.status.set_nz(cpu.y);
    StepOutcome::Continue
}

pub(crate) fn execute_sta(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let addr = cpu.effective_address(ins);
    cpu.write(addr, cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_stx(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let addr = cpu.effective_address(ins);
    cpu.write(addr, cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_sty(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let addr = cpu.effective_address(ins);
    cpu.write(addr, cpu.y);
    StepOutcome::Continue
}

//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: Branch on carry clear/set
//! - BEQ, BNE: Branch on zero set/clear
//! - BMI, BPL: Branch on negative set/clear
//! - BVC, BVS: Branch on overflow clear/set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the following instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use super::Instruction;
use crate::{Cpu, StepOutcome};

fn branch(cpu: &mut Cpu, ins: &Instruction, condition: bool) -> StepOutcome {
    let (target, page_crossed) = cpu.branch_target(ins);

    if condition {
        cpu.cycles += if page_crossed { 2 } else { 1 };
        cpu.pc = target;
    }

    StepOutcome::Continue
}

pub(crate) fn execute_bcc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = !cpu.status.carry();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_bcs(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = cpu.status.carry();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_beq(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = cpu.status.zero();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_bne(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = !cpu.status.zero();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_bmi(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = cpu.status.negative();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_bpl(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = !cpu.status.negative();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_bvc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = !cpu.status.overflow();
    branch(cpu, ins, condition)
}

pub(crate) fn execute_bvs(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    let condition = cpu.status.overflow();
    branch(cpu, ins, condition)
}

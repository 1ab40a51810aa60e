//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Memory read-modify-write
//! - INX, INY, DEX, DEY: Index registers
//!
//! All wrap modulo 256 and update N and Z; carry and overflow are untouched.

use super::Instruction;
use crate::{Cpu, StepOutcome};

pub(crate) fn execute_inc(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.modify(ins, |cpu, value| {
        let result = value.wrapping_add(1);
        cpu.status.set_nz(result);
        result
    });
    StepOutcome::Continue
}

pub(crate) fn execute_dec(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.modify(ins, |cpu, value| {
        let result = value.wrapping_sub(1);
        cpu.status.set_nz(result);
        result
    });
    StepOutcome::Continue
}

pub(crate) fn execute_inx(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_nz(cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_iny(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_nz(cpu.y);
    StepOutcome::Continue
}

pub(crate) fn execute_dex(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_nz(cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_dey(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_nz(cpu.y);
    StepOutcome::Continue
}

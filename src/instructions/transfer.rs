//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TAY: Accumulator to index register
//! - TXA, TYA: Index register to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! Every transfer except TXS updates N and Z from the copied value.

use super::Instruction;
use crate::{Cpu, StepOutcome};

pub(crate) fn execute_tax(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.x = cpu.a;
    cpu.status.set_nz(cpu.x);
    StepOutcome::Continue
}

pub(crate) fn execute_tay(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.y = cpu.a;
    cpu.status.set_nz(cpu.y);
    StepOutcome::Continue
}

pub(crate) fn execute_txa(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.a = cpu.x;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_tya(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.a = cpu.y;
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_tsx(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.x = cpu.sp;
    cpu.status.set_nz(cpu.x);
    StepOutcome::Continue
}

/// TXS: the only transfer that leaves the flags alone.
pub(crate) fn execute_txs(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.sp = cpu.x;
    StepOutcome::Continue
}

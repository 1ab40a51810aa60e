//! # Flag Instructions
//!
//! Set and clear individual status flags: CLC, SEC, CLI, SEI, CLD, SED, CLV.
//! There is no SEV; overflow is only set by ADC, SBC, BIT, ARR and PLP/RTI.

use super::Instruction;
use crate::{Cpu, StepOutcome};

pub(crate) fn execute_clc(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_carry(false);
    StepOutcome::Continue
}

pub(crate) fn execute_sec(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_carry(true);
    StepOutcome::Continue
}

pub(crate) fn execute_cli(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_interrupt_disable(false);
    StepOutcome::Continue
}

pub(crate) fn execute_sei(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_interrupt_disable(true);
    StepOutcome::Continue
}

pub(crate) fn execute_cld(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_decimal(false);
    StepOutcome::Continue
}

pub(crate) fn execute_sed(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_decimal(true);
    StepOutcome::Continue
}

pub(crate) fn execute_clv(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.status.set_overflow(false);
    StepOutcome::Continue
}

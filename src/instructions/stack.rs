//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives in page 1 and grows downward; the pointer wraps within the
//! page. PHP pushes the status with B and bit 5 set. PLP ignores the pulled B
//! bit and keeps bit 5 set.

use super::Instruction;
use crate::{Cpu, Status, StepOutcome};

pub(crate) fn execute_pha(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.push(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_php(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.push(cpu.status.to_pushed());
    StepOutcome::Continue
}

pub(crate) fn execute_pla(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    cpu.a = cpu.pull();
    cpu.status.set_nz(cpu.a);
    StepOutcome::Continue
}

pub(crate) fn execute_plp(cpu: &mut Cpu, _ins: &Instruction) -> StepOutcome {
    let value = cpu.pull();
    cpu.status = Status::from_pulled(value);
    StepOutcome::Continue
}

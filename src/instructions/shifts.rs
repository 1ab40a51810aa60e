//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or, as a read-modify-write, on memory. The
//! bit shifted out lands in the carry flag; N and Z follow the result. The
//! value helpers are shared with the undocumented combined opcodes.

use super::Instruction;
use crate::{Cpu, StepOutcome};

pub(crate) fn asl(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.status.set_carry(value & 0x80 != 0);
    let result = value << 1;
    cpu.status.set_nz(result);
    result
}

pub(crate) fn lsr(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.status.set_carry(value & 0x01 != 0);
    let result = value >> 1;
    cpu.status.set_nz(result);
    result
}

pub(crate) fn rol(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.status.carry_bit();
    cpu.status.set_carry(value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    cpu.status.set_nz(result);
    result
}

pub(crate) fn ror(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.status.carry_bit();
    cpu.status.set_carry(value & 0x01 != 0);
    let result = (value >> 1) | (carry_in << 7);
    cpu.status.set_nz(result);
    result
}

pub(crate) fn execute_asl(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.modify(ins, asl);
    StepOutcome::Continue
}

pub(crate) fn execute_lsr(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.modify(ins, lsr);
    StepOutcome::Continue
}

pub(crate) fn execute_rol(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.modify(ins, rol);
    StepOutcome::Continue
}

pub(crate) fn execute_ror(cpu: &mut Cpu, ins: &Instruction) -> StepOutcome {
    cpu.modify(ins, ror);
    StepOutcome::Continue
}

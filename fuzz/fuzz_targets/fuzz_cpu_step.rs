//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one instruction to find edge cases and panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sid6502::{Cpu, StepOutcome, SID_BASE, SID_REGISTER_COUNT};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed status byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed just below the SID window so indexed stores can reach it
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = Cpu::new();

    cpu.load(0x8000, &input.memory.instruction_bytes).unwrap();
    cpu.load(0x0000, &input.memory.zero_page).unwrap();
    cpu.load(0x0100, &input.memory.stack_page).unwrap();
    cpu.load(0xD300, &input.memory.main_memory).unwrap();

    cpu.reset(
        0x8000,
        input.cpu_state.a,
        input.cpu_state.x,
        input.cpu_state.y,
    );
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let outcome = cpu.step();

    // Bit 5 of the status register reads as one
    assert_eq!(cpu.status() & 0x20, 0x20);

    match outcome {
        StepOutcome::Halted(_) => {
            assert_eq!(cpu.pc(), 0x8000);
            assert!(cpu.writes().is_empty());
        }
        StepOutcome::Continue | StepOutcome::Returned => {
            assert!(cpu.cycles() >= 2 && cpu.cycles() <= 8);
        }
    }

    // Every captured write is in the window and persisted
    for write in cpu.writes() {
        assert!(write.address >= SID_BASE);
        assert!(write.address < SID_BASE + SID_REGISTER_COUNT as u16);
        assert_eq!(write.cycle, 0);
    }
    if let Some(last) = cpu.writes().last() {
        assert_eq!(cpu.peek(last.address), last.value);
    }
});

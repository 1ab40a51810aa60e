//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that execution maintains fundamental
//! invariants for arbitrary opcodes, register values and programs.

use proptest::prelude::*;
use sid6502::{CallOutcome, Cpu, EmulatorConfig, StepOutcome, SID_BASE, SID_REGISTER_COUNT};

/// Helper function to create a CPU with PC at 0x8000
fn setup_cpu() -> Cpu {
    let mut cpu = Cpu::new();
    cpu.reset(0x8000, 0, 0, 0);
    cpu
}

proptest! {
    #[test]
    fn prop_status_bit_5_always_set(opcode: u8, operand: [u8; 2], a: u8, x: u8, y: u8, status: u8) {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[opcode, operand[0], operand[1]]).unwrap();
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_status(status);

        cpu.step();

        prop_assert_eq!(cpu.status() & 0x20, 0x20);
        prop_assert_eq!(cpu.status() & 0x10, 0x00);
    }

    #[test]
    fn prop_halt_leaves_pc_on_opcode(opcode: u8, operand: [u8; 2]) {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[opcode, operand[0], operand[1]]).unwrap();

        if let StepOutcome::Halted(_) = cpu.step() {
            prop_assert_eq!(cpu.pc(), 0x8000);
        }
    }

    #[test]
    fn prop_writes_stay_in_window(opcode: u8, operand: [u8; 2], a: u8, x: u8, y: u8) {
        let mut cpu = setup_cpu();
        cpu.load(0x8000, &[opcode, operand[0], operand[1]]).unwrap();
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);

        cpu.step();

        for write in cpu.writes() {
            prop_assert!(write.address >= SID_BASE);
            prop_assert!(write.address < SID_BASE + SID_REGISTER_COUNT as u16);
            prop_assert_eq!(cpu.peek(write.address), write.value);
        }
    }

    #[test]
    fn prop_random_programs_terminate(program in proptest::collection::vec(any::<u8>(), 1..64)) {
        let config = EmulatorConfig::default().with_instruction_limit(2000);
        let mut cpu = Cpu::with_config(config);
        cpu.load(0x1000, &program).unwrap();

        let outcome = cpu.call(0x1000, 0, 0, 0);

        prop_assert!(outcome.instructions() <= 2000);
        if let CallOutcome::Returned { .. } = outcome {
            let at_sentinel = cpu.pc() == sid6502::SENTINEL_RETURN;
            let at_kernal_exit = cpu.pc() == 0xEA31 || cpu.pc() == 0xEA81;
            prop_assert!(at_sentinel || at_kernal_exit);
        }
    }

    #[test]
    fn prop_transfers_copy_registers(value: u8) {
        let mut cpu = setup_cpu();
        // TAX / TXA / TAY / TYA
        cpu.load(0x8000, &[0xAA, 0x8A, 0xA8, 0x98]).unwrap();
        cpu.set_a(value);

        for _ in 0..4 {
            cpu.step();
        }

        prop_assert_eq!(cpu.x(), value);
        prop_assert_eq!(cpu.y(), value);
        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_n(), value & 0x80 != 0);
    }

    #[test]
    fn prop_compare_matches_subtraction(register: u8, value: u8) {
        let mut cpu = setup_cpu();
        // CMP #value
        cpu.load(0x8000, &[0xC9, value]).unwrap();
        cpu.set_a(register);

        cpu.step();

        prop_assert_eq!(cpu.flag_c(), register >= value);
        prop_assert_eq!(cpu.flag_z(), register == value);
        prop_assert_eq!(cpu.flag_n(), register.wrapping_sub(value) & 0x80 != 0);
        prop_assert_eq!(cpu.a(), register);
    }

    #[test]
    fn prop_rol_ror_round_trip(value: u8, carry: bool) {
        let mut cpu = setup_cpu();
        // ROL A / ROR A
        cpu.load(0x8000, &[0x2A, 0x6A]).unwrap();
        cpu.set_a(value);
        cpu.set_flag_c(carry);

        cpu.step();
        cpu.step();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_c(), carry);
    }
}

//! Fuzz target for running arbitrary code as a subroutine.
//!
//! Random programs must always finish with a returned, halted or timed-out
//! outcome within the instruction ceiling, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sid6502::{CallOutcome, Cpu, EmulatorConfig};

const LIMIT: u64 = 10_000;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 0x4000 {
        return;
    }

    let config = EmulatorConfig::default()
        .with_instruction_limit(LIMIT)
        .with_access_tracking(true);
    let mut cpu = Cpu::with_config(config);
    cpu.load(0x1000, data).unwrap();

    let outcome = cpu.call(0x1000, data[0], 0, 0);
    assert!(outcome.instructions() <= LIMIT);

    if let CallOutcome::TimedOut { instructions } = outcome {
        assert_eq!(instructions, LIMIT);
    }

    assert!(cpu.writes().iter().all(|w| w.frame == 0));
});

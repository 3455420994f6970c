//! Fuzz target for the Apple 1 machine.
//!
//! Loads an arbitrary program, queues arbitrary keystrokes and runs a batch
//! of instructions. The machine must never panic and must stop stepping once
//! halted.

#![no_main]

use apple1_core::{Apple1, MachineConfig, RecordingHost};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    program: Vec<u8>,
    origin: u16,
    keys: String,
    batch: u16,
}

fuzz_target!(|input: FuzzInput| {
    let config = MachineConfig::default().with_entry_point(input.origin);
    let mut apple = Apple1::with_config(RecordingHost::new(), config);

    apple.load_binary(&input.program, input.origin);
    apple.fill_key_buf(&input.keys);

    let executed = apple.run_batch(input.batch as usize);
    assert!(executed <= input.batch as usize);

    if apple.halted() {
        let pc = apple.cpu().pc();
        assert!(!apple.step());
        assert_eq!(apple.cpu().pc(), pc);
    }
});

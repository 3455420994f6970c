//! Example: echoing queued keystrokes through the Apple 1 display.
//!
//! This example shows how to:
//! - Build an Apple 1 machine with a custom entry point
//! - Load a small program into RAM
//! - Queue "pasted" text into the keyboard
//! - Run the machine in batches until it halts
//!
//! The program polls the keyboard control register, copies each key to the
//! display, and stops on a backslash by executing an undefined opcode.

use apple1_core::{Apple1, LogHost, MachineConfig};

const ORIGIN: u16 = 0x0280;

fn main() {
    println!("Apple 1 Keyboard Echo Example");
    println!("=============================\n");

    let program = [
        0xAD, 0x11, 0xD0, // LDA $D011  (key ready?)
        0x10, 0xFB, //       BPL $0280
        0xAD, 0x10, 0xD0, // LDA $D010  (read key)
        0xC9, 0xDC, //       CMP #'\' | $80
        0xF0, 0x06, //       BEQ done
        0x8D, 0x12, 0xD0, // STA $D012  (display it)
        0x4C, 0x80, 0x02, // JMP $0280
        0x02, //             done: undefined opcode, halts
    ];

    let config = MachineConfig::default().with_entry_point(ORIGIN);
    let mut apple = Apple1::with_config(LogHost::stdout(), config);
    apple.load_binary(&program, ORIGIN);

    println!("Initial state: {}\n", apple.dump());

    apple.fill_key_buf("HELLO, APPLE 1\n\\");

    let mut total = 0;
    while !apple.halted() {
        let executed = apple.run_batch(1000);
        total += executed;
        if executed == 0 {
            break;
        }
    }

    println!("\nHalted after {} instructions", total);
    println!("Final state: {}", apple.dump());
}

//! Disassembles a 256-byte Apple 1 BIOS image.
//!
//! Usage: `cargo run --example disasm_bios -- path/to/bios.bin`
//!
//! Without an argument, lists a short echo routine instead.

use apple1_core::disassembler::{disassemble, format_instruction, DisassemblyOptions};
use apple1_core::{BIOS_BASE, BIOS_SIZE};

const ECHO_ROUTINE: [u8; 9] = [
    0x2C, 0x12, 0xD0, // BIT $D012
    0x30, 0xFB, //       BMI ECHO
    0x8D, 0x12, 0xD0, // STA $D012
    0x60, //             RTS
];

fn main() {
    let (code, origin) = match std::env::args().nth(1) {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) if bytes.len() == BIOS_SIZE => (bytes, BIOS_BASE),
            Ok(bytes) => {
                eprintln!("{}: expected {} bytes, got {}", path, BIOS_SIZE, bytes.len());
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => (ECHO_ROUTINE.to_vec(), 0xFFEF),
    };

    for instr in disassemble(&code, DisassemblyOptions::at(origin)) {
        let bytes: Vec<String> = std::iter::once(instr.opcode)
            .chain(instr.operand_bytes.iter().copied())
            .take(instr.size_bytes as usize)
            .map(|b| format!("{:02X}", b))
            .collect();
        println!(
            "{:04X}: {:<9} {}",
            instr.address,
            bytes.join(" "),
            format_instruction(&instr)
        );
    }
}

//! WASM API for the Apple 1 emulator.
//!
//! Provides JavaScript-callable interfaces for machine control, keyboard input,
//! state inspection and disassembly. Display output is delivered one character
//! at a time to a JavaScript callback.

use crate::disassembler::{disassemble, format_instruction, DisassemblyOptions};
use crate::{Apple1, HostIo, MemoryBus};
use wasm_bindgen::prelude::*;

/// Host that forwards display output to a JavaScript function.
struct JsHost {
    on_output: js_sys::Function,
}

impl HostIo for JsHost {
    fn on_output(&mut self, ch: char) {
        let _ = self
            .on_output
            .call1(&JsValue::NULL, &JsValue::from_str(&ch.to_string()));
    }

    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
    }

    fn error(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Result of disassembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Apple1Emulator {
    machine: Apple1<JsHost>,
}

#[wasm_bindgen]
impl Apple1Emulator {
    /// Create an Apple 1 with the given 256-byte BIOS, starting at 0xFF00
    #[wasm_bindgen(constructor)]
    pub fn new(bios: &[u8], on_output: js_sys::Function) -> Result<Apple1Emulator, JsError> {
        let mut machine = Apple1::new(JsHost { on_output });
        machine
            .load_bios_slice(bios)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Apple1Emulator { machine })
    }

    /// Execute a single instruction. Returns false once halted.
    pub fn step(&mut self) -> bool {
        self.machine.step()
    }

    /// Execute up to `count` instructions and return how many ran
    pub fn run_batch(&mut self, count: u32) -> u32 {
        self.machine.run_batch(count as usize) as u32
    }

    /// Reset the CPU to the BIOS entry point, keeping memory
    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Queue pasted text as keystrokes
    pub fn fill_key_buf(&mut self, text: &str) {
        self.machine.fill_key_buf(text);
    }

    /// Press a single key
    pub fn press_key(&mut self, key: char) {
        self.machine.press_key(key);
    }

    /// Load a program image at `origin`
    pub fn load_binary(&mut self, data: &[u8], origin: u16) -> Result<(), JsError> {
        self.machine
            .load_program_slice(data, origin)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.machine.halted()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.machine.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.machine.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.machine.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.machine.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.machine.cpu().sp()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.machine.cpu_mut().jump_to(addr);
    }

    /// One-line register and instruction dump
    pub fn dump(&self) -> String {
        self.machine.dump()
    }

    /// Read a byte without disturbing peripherals
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.machine.bus().peek(addr)
    }

    /// Disassemble `count` instructions starting at `start_addr`
    pub fn disassemble(&self, start_addr: u16, count: u32) -> Vec<JsValue> {
        // Enough bytes for `count` three-byte instructions
        let window: Vec<u8> = (0..count.saturating_mul(3))
            .map(|i| self.machine.bus().peek(start_addr.wrapping_add(i as u16)))
            .collect();

        disassemble(&window, DisassemblyOptions::at(start_addr))
            .iter()
            .take(count as usize)
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                if instr.mnemonic != ".byte" {
                    bytes.extend_from_slice(&instr.operand_bytes);
                }
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}

//! Apple 1 bus: RAM, address decoding, anomaly reporting and image loading.

use apple1_core::{Apple1Bus, ImageError, MemoryBus, RecordingHost};

fn bus() -> Apple1Bus<RecordingHost> {
    Apple1Bus::new(RecordingHost::new())
}

#[test]
fn test_ram_everywhere_outside_io_window() {
    let mut bus = bus();
    for addr in [0x0002u16, 0x0200, 0xCFFF, 0xE000, 0xFFFF] {
        bus.write(addr, 0xA5);
        assert_eq!(bus.read(addr), 0xA5, "RAM at ${:04X}", addr);
    }
    assert!(bus.host().warnings.is_empty());
    assert!(bus.host().errors.is_empty());
}

#[test]
fn test_addresses_zero_and_one_warn_but_work() {
    let mut bus = bus();

    bus.write(0x0000, 0x12);
    bus.write(0x0001, 0x34);
    assert_eq!(bus.read(0x0000), 0x12);
    assert_eq!(bus.read(0x0001), 0x34);

    assert_eq!(
        bus.host().warnings,
        vec![
            "Write to 0".to_string(),
            "Write to 1".to_string(),
            "Read from 0".to_string(),
            "Read from 1".to_string(),
        ]
    );
}

#[test]
fn test_unknown_io_addresses_report_errors() {
    let mut bus = bus();

    assert_eq!(bus.read(0xD000), 0);
    bus.write(0xD004, 0xFF);

    assert_eq!(
        bus.host().errors,
        vec![
            "Read from Unknown I/O Address: 53248".to_string(),
            "Write to Unknown I/O Address: 53252".to_string(),
        ]
    );
}

#[test]
fn test_load_bios() {
    let mut bus = bus();
    let mut bios = [0xEAu8; 256];
    bios[0xFC] = 0x00;
    bios[0xFD] = 0xFF;

    bus.load_bios(&bios);

    assert_eq!(bus.peek(0xFF00), 0xEA);
    assert_eq!(bus.peek(0xFFFC), 0x00);
    assert_eq!(bus.peek(0xFFFD), 0xFF);
    assert_eq!(bus.peek(0xFEFF), 0x00);
}

#[test]
fn test_load_bios_slice_checks_length() {
    let mut bus = bus();

    assert_eq!(
        bus.load_bios_slice(&[0; 100]),
        Err(ImageError::BiosSize {
            expected: 256,
            actual: 100
        })
    );
    assert!(bus.load_bios_slice(&[0x60; 256]).is_ok());
    assert_eq!(bus.peek(0xFF80), 0x60);
}

#[test]
fn test_load_binary_bypasses_io_decoding() {
    let mut bus = bus();

    bus.load_binary(&[0x11, 0x22, 0x33], 0x0000);
    bus.load_binary(&[0xAA; 4], 0xD010);

    assert_eq!(bus.peek(0x0001), 0x22);
    assert!(bus.host().warnings.is_empty());
    assert!(bus.host().output.is_empty());
}

#[test]
fn test_load_program_slice_rejects_empty() {
    let mut bus = bus();

    assert_eq!(bus.load_program_slice(&[], 0x0300), Err(ImageError::Empty));
    assert!(bus.load_program_slice(&[0xEA], 0x0300).is_ok());
    assert_eq!(bus.peek(0x0300), 0xEA);
}

#[test]
fn test_peek_never_consumes_keys() {
    let mut bus = bus();
    bus.fill_key_buf("A");

    assert_eq!(bus.peek(0xD010), b'A' | 0x80);
    assert_eq!(bus.peek(0xD011), 0x80);
    assert_eq!(bus.read(0xD010), b'A' | 0x80);
}

#[test]
fn test_clear_keeps_host() {
    let mut bus = bus();
    bus.write(0x0300, 0x42);
    bus.write(0xD012, b'X');
    bus.fill_key_buf("Q");

    bus.clear();

    assert_eq!(bus.peek(0x0300), 0x00);
    assert_eq!(bus.peek(0xD011), 0x01);
    assert_eq!(bus.host().output, "X");
}

//! # Bus Transfer Tests
//!
//! Output-enable gates every transfer; IOM selects memory or the I/O buffer
//! and RW selects the direction.

use chipcpu_core::common::addr::Address;
use chipcpu_core::common::error::SimError;
use chipcpu_core::soc::bus::{Bus, ControlLines, Direction, TransferKind};

#[test]
fn output_enable_low_moves_nothing() {
    let mut bus = Bus::new();
    bus.memory.write_byte(Address(0x10), 0x99).unwrap();
    bus.data = 0x55;
    bus.drive(Address(0x10), ControlLines::DISCONNECTED);

    assert_eq!(bus.transfer().unwrap(), TransferKind::Idle);
    assert_eq!(bus.data, 0x55);
    assert_eq!(bus.memory.read_byte(Address(0x10)).unwrap(), 0x99);
}

#[test]
fn disconnected_write_does_not_store() {
    let mut bus = Bus::new();
    bus.data = 0x77;
    bus.drive(
        Address(0x10),
        ControlLines {
            iom: true,
            rw: Direction::Write,
            oe: false,
        },
    );
    assert_eq!(bus.transfer().unwrap(), TransferKind::Idle);
    assert_eq!(bus.memory.read_byte(Address(0x10)).unwrap(), 0);
}

#[test]
fn memory_write_then_read() {
    let mut bus = Bus::new();
    bus.data = 0xC3;
    bus.drive(Address(0x3A0), ControlLines::MEMORY_WRITE);
    assert_eq!(bus.transfer().unwrap(), TransferKind::MemoryWrite);

    bus.data = 0;
    bus.drive(Address(0x3A0), ControlLines::MEMORY_READ);
    assert_eq!(bus.transfer().unwrap(), TransferKind::MemoryRead);
    assert_eq!(bus.data, 0xC3);
}

#[test]
fn io_cycles_do_not_touch_memory() {
    let mut bus = Bus::new();
    bus.data = 0x42;
    bus.drive(Address(0x003), ControlLines::IO_WRITE);
    assert_eq!(bus.transfer().unwrap(), TransferKind::IoWrite);
    assert_eq!(bus.io.read(Address(0x003)), 0x42);
    assert_eq!(bus.memory.read_byte(Address(0x003)).unwrap(), 0);

    bus.data = 0;
    bus.drive(Address(0x003), ControlLines::IO_READ);
    assert_eq!(bus.transfer().unwrap(), TransferKind::IoRead);
    assert_eq!(bus.data, 0x42);
}

#[test]
fn memory_cycle_out_of_range_faults() {
    let mut bus = Bus::new();
    bus.drive(Address(0x800), ControlLines::MEMORY_READ);
    assert!(matches!(
        bus.transfer(),
        Err(SimError::AddressOutOfRange { address: 0x800 })
    ));
}

#[test]
fn io_cycle_wraps_high_addresses() {
    let mut bus = Bus::new();
    bus.data = 0x08;
    bus.drive(Address(0x800), ControlLines::IO_WRITE);
    assert_eq!(bus.transfer().unwrap(), TransferKind::IoWrite);
    assert_eq!(bus.io.read(Address(0x000)), 0x08);
}

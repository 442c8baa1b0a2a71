#![cfg(not(feature = "async"))]

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use sm9541_rs::data_types::Status;
use sm9541_rs::decoder::SensorDecoder;
use sm9541_rs::driver::Sm9541;
use sm9541_rs::error::Error;

/// 32-byte register block with the given frame at its head.
fn block(frame: [u8; 4]) -> Vec<u8> {
    let mut data = vec![0xFF; 32];
    data[..4].copy_from_slice(&frame);
    data
}

#[test]
fn load_calibration_is_quick_write() {
    let expectations = [I2cTrans::write(0x28, vec![])];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::new(mock);
    driver.load_calibration().unwrap();
    driver.free().done();
}

#[test]
fn read_all_decodes_one_block() {
    // 0x1F40 -> 8000 counts, temperature 0x66/0x60 -> 819 counts
    let expectations = [
        I2cTrans::write(0x28, vec![]),
        I2cTrans::write_read(0x28, vec![0x00], block([0x1F, 0x40, 0x66, 0x60])),
    ];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::new(mock);
    driver.load_calibration().unwrap();
    let reading = driver.read_all().unwrap();
    assert_eq!(reading.status, Status::NormalOperation);
    let expected = (8000.0 - 1638.0) / (13107.0 / 105.0) - 5.0;
    assert!((reading.pressure - expected).abs() < 1e-9);
    assert_eq!(reading.temperature, 29.98046875);
    driver.free().done();
}

#[test]
fn custom_address_and_decoder() {
    let decoder = SensorDecoder::new(0.0, 1.0, 0, 16383).unwrap();
    let expectations = [
        I2cTrans::write(0x29, vec![]),
        I2cTrans::write_read(0x29, vec![0x00], block([0x7F, 0xFF, 0x00, 0x00])),
    ];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::with_decoder(mock, 0x29, decoder);
    assert_eq!(driver.address(), 0x29);
    driver.load_calibration().unwrap();
    let reading = driver.read_all().unwrap();
    assert_eq!(reading.status, Status::CommandMode);
    assert!((reading.pressure - 1.0).abs() < 1e-9);
    driver.free().done();
}

#[test]
fn set_address_redirects_transactions() {
    let expectations = [I2cTrans::write(0x38, vec![])];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::with_address(mock, 0x30);
    driver.set_address(0x38);
    driver.load_calibration().unwrap();
    driver.free().done();
}

#[test]
fn transport_fault_is_propagated() {
    let expectations = [
        I2cTrans::write_read(0x28, vec![0x00], block([0x00; 4])).with_error(ErrorKind::Other),
    ];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::new(mock);
    let result = driver.read_all();
    assert!(matches!(result, Err(Error::I2c(ErrorKind::Other))));
    driver.free().done();
}

#[test]
fn quick_write_nack_is_propagated() {
    let expectations = [I2cTrans::write(0x28, vec![]).with_error(ErrorKind::Other)];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::new(mock);
    assert!(matches!(driver.load_calibration(), Err(Error::I2c(ErrorKind::Other))));
    driver.free().done();
}

#[test]
fn single_field_reads_each_fetch_a_block() {
    let expectations = [
        I2cTrans::write_read(0x28, vec![0x00], block([0x86, 0x66, 0x00, 0x00])),
        I2cTrans::write_read(0x28, vec![0x00], block([0x39, 0x99, 0x00, 0x00])),
        I2cTrans::write_read(0x28, vec![0x00], block([0x00, 0x00, 0x00, 0x00])),
    ];
    let mock = I2cMock::new(&expectations);
    let mut driver = Sm9541::new(mock);
    assert_eq!(driver.read_status().unwrap(), Status::StaleData);
    assert!((driver.read_pressure().unwrap() - 100.0).abs() < 1e-9);
    assert_eq!(driver.read_temperature().unwrap(), -50.0);
    driver.free().done();
}

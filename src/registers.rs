//! Bus constants and frame layout for SM9541.
//! Bit positions follow the datasheet output frame: status and pressure share bytes 0-1,
//! temperature occupies bytes 2-3.

/// Default 7-bit I2C address of the SM9541 family.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x28;

/// Register the data block is read from.
pub const DATA_REGISTER: u8 = 0x00;

/// Size of the register block returned by one block read.
pub const BLOCK_LEN: usize = 32;
/// Leading bytes of the block that carry status, pressure and temperature.
pub const FRAME_LEN: usize = 4;

/// Reference variant SM9541-100C-S-C-3-S full scale (cmH2O).
pub const PRESSURE_MIN: f64 = -5.0;
pub const PRESSURE_MAX: f64 = 100.0;
/// Digital output counts at the pressure full-scale bounds.
pub const DIGITAL_OUTPUT_MIN: u16 = 1638;
pub const DIGITAL_OUTPUT_MAX: u16 = 14745;

/// Pressure is a 14-bit count.
pub const PRESSURE_RAW_MAX: u16 = 0x3FFF;
/// Temperature is an 11-bit count.
pub const TEMPERATURE_RAW_MAX: u16 = 0x07FF;

/// Temperature transfer function: `raw * SPAN / SCALE + OFFSET` in degC.
pub const TEMPERATURE_SPAN_C: f64 = 200.0;
pub const TEMPERATURE_SCALE: f64 = 2048.0;
pub const TEMPERATURE_OFFSET_C: f64 = -50.0;

/// Pressure bits of byte 0 (bits 5-0 are the upper half of the 14-bit count).
pub const PRESSURE_HIGH_MASK: u8 = 0x3F;
/// Temperature bits of byte 3 (bits 7-5 are the low three bits of the 11-bit count).
pub const TEMPERATURE_LOW_MASK: u8 = 0xE0;

/// One decoded output frame.
pub type Frame = [u8; FRAME_LEN];

bitflags::bitflags! {
    /// Byte 0 status bits. Bits 5-0 belong to the pressure count.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct StatusBits: u8 {
        const S0 = 1 << 6;
        const S1 = 1 << 7;
    }
}

/// Extract the 2-bit status field (0b00 normal, 0b01 command, 0b10 stale, 0b11 diagnostic).
pub fn decode_status_bits(byte0: u8) -> u8 {
    let bits = StatusBits::from_bits_truncate(byte0);
    bits.bits() >> 6
}

/// Concatenate the 14-bit pressure count from bytes 0-1, status bits masked off.
pub fn raw_pressure(frame: &Frame) -> u16 {
    let high = ((frame[0] & PRESSURE_HIGH_MASK) as u16) << 8;
    let low = frame[1] as u16;
    high | low
}

/// Concatenate the 11-bit temperature count from bytes 2-3.
pub fn raw_temperature(frame: &Frame) -> u16 {
    let high = (frame[2] as u16) << 3;
    let low = ((frame[3] & TEMPERATURE_LOW_MASK) >> 5) as u16;
    high | low
}

/// Take the output frame from the head of a full register block.
pub fn frame_of(block: &[u8; BLOCK_LEN]) -> Frame {
    let [b0, b1, b2, b3, ..] = *block;
    [b0, b1, b2, b3]
}

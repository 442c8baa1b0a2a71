//! SM9541 Rust Driver
//!
//! Blocking (and optional async) I2C driver for the SM9541 digital pressure sensor family.
//! The sensor answers every read with a status/pressure/temperature frame; this crate
//! triggers the calibration load, reads the register block and decodes the frame using the
//! full-scale calibration of the configured variant.

#![no_std]

pub mod data_types;
pub mod decoder;
pub mod driver;
pub mod error;
pub mod registers;

pub use data_types::{Calibration, PressureUnit, Reading, Status};
pub use decoder::SensorDecoder;
pub use driver::Sm9541;
pub use error::{Error, InvalidCalibrationRange};
pub use registers::DEFAULT_I2C_ADDRESS;

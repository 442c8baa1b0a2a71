//! Frame decoding for SM9541.
//! Stateless apart from the calibration fixed at construction; every call borrows the frame
//! only for its own duration.

use crate::data_types::{Calibration, Reading, Status};
use crate::error::InvalidCalibrationRange;
use crate::registers::{
    Frame, TEMPERATURE_OFFSET_C, TEMPERATURE_SCALE, TEMPERATURE_SPAN_C, decode_status_bits, raw_pressure,
    raw_temperature,
};

/// Turns raw frames into status, pressure and temperature.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorDecoder {
    calibration: Calibration,
    /// Counts per pressure unit.
    sensitivity: f64,
}

impl SensorDecoder {
    /// Build a decoder for the given full-scale bounds (unit defaults to cmH2O).
    pub fn new(
        pressure_min: f64,
        pressure_max: f64,
        digital_min: u16,
        digital_max: u16,
    ) -> Result<Self, InvalidCalibrationRange> {
        Self::from_calibration(Calibration {
            pressure_min,
            pressure_max,
            digital_min,
            digital_max,
            ..Calibration::default()
        })
    }

    /// Build a decoder from a calibration record. Fails unless both spans are positive and the
    /// resulting sensitivity is finite.
    pub fn from_calibration(calibration: Calibration) -> Result<Self, InvalidCalibrationRange> {
        if !calibration.is_monotonic() {
            return Err(InvalidCalibrationRange);
        }
        let sensitivity = sensitivity_of(&calibration);
        // a subnormal pressure span overflows to an infinite scale
        if !(sensitivity.is_finite() && sensitivity > 0.0) {
            return Err(InvalidCalibrationRange);
        }
        Ok(Self {
            calibration,
            sensitivity,
        })
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Counts per pressure unit, `(digital_max - digital_min) / (pressure_max - pressure_min)`.
    pub fn pressure_sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn decode_status(&self, frame: &Frame) -> Status {
        Status::from_bits(decode_status_bits(frame[0]))
    }

    /// 14-bit pressure count, 0..=16383.
    pub fn decode_raw_pressure(&self, frame: &Frame) -> u16 {
        raw_pressure(frame)
    }

    /// 11-bit temperature count, 0..=2047.
    pub fn decode_raw_temperature(&self, frame: &Frame) -> u16 {
        raw_temperature(frame)
    }

    pub fn decode_pressure(&self, frame: &Frame) -> f64 {
        self.pressure_from_raw(self.decode_raw_pressure(frame))
    }

    pub fn decode_temperature(&self, frame: &Frame) -> f64 {
        Self::temperature_from_raw(self.decode_raw_temperature(frame))
    }

    /// All three fields from the same frame.
    pub fn decode_all(&self, frame: &Frame) -> Reading {
        Reading {
            status: self.decode_status(frame),
            pressure: self.decode_pressure(frame),
            temperature: self.decode_temperature(frame),
        }
    }

    /// Linear rescale of a pressure count. Counts outside the calibrated span map outside
    /// the physical full scale.
    pub fn pressure_from_raw(&self, raw: u16) -> f64 {
        let offset = raw as f64 - self.calibration.digital_min as f64;
        offset / self.sensitivity + self.calibration.pressure_min
    }

    /// Datasheet temperature transfer: 2048 counts span -50..150 degC.
    pub fn temperature_from_raw(raw: u16) -> f64 {
        raw as f64 * TEMPERATURE_SPAN_C / TEMPERATURE_SCALE + TEMPERATURE_OFFSET_C
    }
}

impl Default for SensorDecoder {
    fn default() -> Self {
        let calibration = Calibration::SM9541_100C;
        Self {
            calibration,
            sensitivity: sensitivity_of(&calibration),
        }
    }
}

fn sensitivity_of(calibration: &Calibration) -> f64 {
    let counts = (calibration.digital_max - calibration.digital_min) as f64;
    counts / (calibration.pressure_max - calibration.pressure_min)
}

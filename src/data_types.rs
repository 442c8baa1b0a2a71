//! Data types for SM9541 driver.

use crate::registers::{DIGITAL_OUTPUT_MAX, DIGITAL_OUTPUT_MIN, PRESSURE_MAX, PRESSURE_MIN};

/// Status field of the output frame (byte 0, bits 7-6).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// Good data packet.
    NormalOperation,
    /// Device is in command mode.
    CommandMode,
    /// Data was already fetched since the last conversion.
    StaleData,
    /// Diagnostic condition exists.
    DiagnosticFault,
}

impl Status {
    /// Map the 2-bit field; bits above bit 1 are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Status::NormalOperation,
            0b01 => Status::CommandMode,
            0b10 => Status::StaleData,
            _ => Status::DiagnosticFault,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            Status::NormalOperation => 0b00,
            Status::CommandMode => 0b01,
            Status::StaleData => 0b10,
            Status::DiagnosticFault => 0b11,
        }
    }

    /// True only for a fresh sample taken in normal operation.
    pub fn is_valid(self) -> bool {
        matches!(self, Status::NormalOperation)
    }
}

/// Unit the pressure full scale is expressed in. Used for labelling only.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PressureUnit {
    #[default]
    CmH2O,
    Mbar,
    Psi,
    KPa,
}

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::CmH2O => "cmH2O",
            PressureUnit::Mbar => "mbar",
            PressureUnit::Psi => "psi",
            PressureUnit::KPa => "kPa",
        }
    }
}

/// Full-scale calibration of one sensor variant.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    /// Physical pressure at the lower full-scale bound.
    pub pressure_min: f64,
    /// Physical pressure at the upper full-scale bound.
    pub pressure_max: f64,
    /// Raw count at `pressure_min`.
    pub digital_min: u16,
    /// Raw count at `pressure_max`.
    pub digital_max: u16,
    pub unit: PressureUnit,
}

impl Calibration {
    /// SM9541-100C-S-C-3-S: -5..100 cmH2O over 1638..14745 counts.
    pub const SM9541_100C: Calibration = Calibration {
        pressure_min: PRESSURE_MIN,
        pressure_max: PRESSURE_MAX,
        digital_min: DIGITAL_OUTPUT_MIN,
        digital_max: DIGITAL_OUTPUT_MAX,
        unit: PressureUnit::CmH2O,
    };

    /// True when both spans are strictly positive. NaN bounds are rejected.
    pub fn is_monotonic(&self) -> bool {
        self.digital_max > self.digital_min
            && self.pressure_max > self.pressure_min
            && (self.pressure_max - self.pressure_min).is_finite()
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::SM9541_100C
    }
}

/// One decoded frame.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub status: Status,
    /// Pressure in the calibration's unit. Not clamped to the full scale.
    pub pressure: f64,
    /// Temperature in degC.
    pub temperature: f64,
}

impl Reading {
    /// Text rendering: pressure with 2 decimals, temperature with 3.
    pub fn display(&self, unit: PressureUnit) -> ReadingDisplay<'_> {
        ReadingDisplay { reading: self, unit }
    }
}

/// See [`Reading::display`].
pub struct ReadingDisplay<'a> {
    reading: &'a Reading,
    unit: PressureUnit,
}

impl core::fmt::Display for ReadingDisplay<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "pressure={:.2} {} temperature={:.3} degC",
            self.reading.pressure,
            self.unit.symbol(),
            self.reading.temperature
        )
    }
}

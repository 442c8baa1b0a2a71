//! Error definitions for SM9541 driver.

/// Full-scale bounds are empty, inverted or not finite.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidCalibrationRange;

impl core::fmt::Display for InvalidCalibrationRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid calibration range")
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// Calibration bounds do not describe a positive full-scale span.
    ///
    /// Driver operations never return this; it lets callers carry a failed
    /// [`SensorDecoder`](crate::decoder::SensorDecoder) construction through `Error<E>` via `?`.
    InvalidCalibrationRange,
}

impl<I2cError> From<InvalidCalibrationRange> for Error<I2cError> {
    fn from(_: InvalidCalibrationRange) -> Self {
        Error::InvalidCalibrationRange
    }
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::InvalidCalibrationRange => write!(f, "invalid calibration range"),
        }
    }
}

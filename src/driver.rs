//! Bus driver for SM9541.
//! Blocking I2C access; the async version mirrors this API behind the `async` feature.
//!
//! The caller triggers the calibration load once with [`Sm9541::load_calibration`] and then
//! samples with [`Sm9541::read_all`]. The single-field readers each issue their own block read,
//! so two of them called back to back may observe different samples.

use crate::data_types::{Reading, Status};
use crate::decoder::SensorDecoder;
use crate::error::Error;
use crate::registers::{BLOCK_LEN, DATA_REGISTER, DEFAULT_I2C_ADDRESS, frame_of};

/// SM9541 driver.
pub struct Sm9541<I2C> {
    i2c: I2C,
    address: u8,
    decoder: SensorDecoder,
}

impl<I2C> Sm9541<I2C> {
    /// Create a new driver instance for the SM9541-100C variant at the default address (0x28).
    pub fn new(i2c: I2C) -> Self {
        Self::with_decoder(i2c, DEFAULT_I2C_ADDRESS, SensorDecoder::default())
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self::with_decoder(i2c, address, SensorDecoder::default())
    }

    /// Create a driver for another variant's calibration.
    pub fn with_decoder(i2c: I2C, address: u8, decoder: SensorDecoder) -> Self {
        Self { i2c, address, decoder }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    pub fn decoder(&self) -> &SensorDecoder {
        &self.decoder
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Sm9541<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Quick-write (address only, no payload) to make the sensor load its calibration.
    pub fn load_calibration(&mut self) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[]).map_err(Error::I2c)
    }

    /// Read the full register block starting at the data register.
    pub fn read_block(&mut self, block: &mut [u8; BLOCK_LEN]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[DATA_REGISTER], block)
            .map_err(Error::I2c)
    }

    /// Read one block and decode every field from it.
    pub fn read_all(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block(&mut block)?;
        Ok(self.decoder.decode_all(&frame_of(&block)))
    }

    /// Read the status field alone; performs its own block read.
    pub fn read_status(&mut self) -> Result<Status, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block(&mut block)?;
        Ok(self.decoder.decode_status(&frame_of(&block)))
    }

    /// Read the pressure alone; performs its own block read.
    pub fn read_pressure(&mut self) -> Result<f64, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block(&mut block)?;
        Ok(self.decoder.decode_pressure(&frame_of(&block)))
    }

    /// Read the temperature alone; performs its own block read.
    pub fn read_temperature(&mut self) -> Result<f64, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block(&mut block)?;
        Ok(self.decoder.decode_temperature(&frame_of(&block)))
    }
}

#[cfg(feature = "async")]
impl<I2C> Sm9541<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`load_calibration`](Self::load_calibration).
    pub async fn load_calibration_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[]).await.map_err(Error::I2c)
    }

    pub async fn read_block_async(&mut self, block: &mut [u8; BLOCK_LEN]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[DATA_REGISTER], block)
            .await
            .map_err(Error::I2c)
    }

    pub async fn read_all_async(&mut self) -> Result<Reading, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block_async(&mut block).await?;
        Ok(self.decoder.decode_all(&frame_of(&block)))
    }

    /// Read the status field alone; performs its own block read.
    pub async fn read_status_async(&mut self) -> Result<Status, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block_async(&mut block).await?;
        Ok(self.decoder.decode_status(&frame_of(&block)))
    }

    /// Read the pressure alone; performs its own block read.
    pub async fn read_pressure_async(&mut self) -> Result<f64, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block_async(&mut block).await?;
        Ok(self.decoder.decode_pressure(&frame_of(&block)))
    }

    /// Read the temperature alone; performs its own block read.
    pub async fn read_temperature_async(&mut self) -> Result<f64, Error<I2C::Error>> {
        let mut block = [0u8; BLOCK_LEN];
        self.read_block_async(&mut block).await?;
        Ok(self.decoder.decode_temperature(&frame_of(&block)))
    }
}

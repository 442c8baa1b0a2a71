use defmt::{info, warn, Display2Format};
use embassy_stm32::{
    gpio::{Level, Output, Speed},
    i2c::{Config as I2cConfig, I2c},
    peripherals::I2C1,
    time::Hertz,
};
use embassy_time::{Duration, Timer};

use sm9541_rs::data_types::{PressureUnit, Reading};

pub struct Board<'d> {
    pub i2c: I2c<'d, I2C1, embassy_stm32::dma::NoDma, embassy_stm32::dma::NoDma>,
    pub led: Output<'d, embassy_stm32::peripherals::PB8>,
}

pub fn init_board() -> Board<'static> {
    let p = embassy_stm32::init(Default::default());

    let mut i2c_cfg = I2cConfig::default();
    i2c_cfg.scl_pullup = true;
    i2c_cfg.sda_pullup = true;

    let i2c = I2c::new(
        p.I2C1,
        p.PB6, // SCL
        p.PB7, // SDA
        super::Irqs,
        embassy_stm32::dma::NoDma,
        embassy_stm32::dma::NoDma,
        Hertz(100_000),
        i2c_cfg,
    );

    let led = Output::new(p.PB8, Level::High, Speed::Low);

    Board { i2c, led }
}

pub fn log_reading(reading: &Reading, unit: PressureUnit) {
    if reading.status.is_valid() {
        info!("{}", Display2Format(&reading.display(unit)));
    } else {
        warn!("status={:?} {}", reading.status, Display2Format(&reading.display(unit)));
    }
}

pub async fn heartbeat(led: &mut Output<'_, embassy_stm32::peripherals::PB8>) {
    led.toggle();
    Timer::after(Duration::from_secs(1)).await;
}

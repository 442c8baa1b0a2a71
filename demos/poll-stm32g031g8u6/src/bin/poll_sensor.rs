#![no_std]
#![no_main]

// STM32G031G8U6 + SM9541 on I2C1 (PB6/PB7), one sample per second.
// Build: cargo build --release --features hw
// Flash: probe-rs run --chip STM32G031G8Ux target/thumbv6m-none-eabi/release/poll_sensor

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::{bind_interrupts, i2c};
use {defmt_rtt as _, panic_probe as _};

mod common;
use common::{heartbeat, init_board, log_reading};
use sm9541_rs::driver::Sm9541;

bind_interrupts!(struct Irqs {
    I2C1 => i2c::EventInterruptHandler<embassy_stm32::peripherals::I2C1>, i2c::ErrorInterruptHandler<embassy_stm32::peripherals::I2C1>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SM9541 polling demo (PB6/PB7 I2C1)");
    let mut board = init_board();
    let mut dev = Sm9541::new(board.i2c);

    if let Err(e) = dev.load_calibration_async().await {
        warn!("calibration load failed: {}", e);
    }
    let unit = dev.decoder().calibration().unit;

    loop {
        match dev.read_all_async().await {
            Ok(reading) => log_reading(&reading, unit),
            Err(e) => warn!("read failed: {}", e),
        }
        heartbeat(&mut board.led).await;
    }
}

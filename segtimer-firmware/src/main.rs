//! Segtimer - Countdown Relay Timer Firmware
//!
//! Main firmware binary for RP2040 boards driving a relay for a dialed
//! time. A rotary encoder with push button sets and controls the
//! countdown; a multiplexed 4-digit 7-segment display shows it.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use segtimer_core::TimerController;
use segtimer_hal::Clock;
use segtimer_hal_rp2040::EmbassyClock;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Segtimer firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = board::init(p, EmbassyClock::new().now_ms());
    info!("Peripherals initialized");

    let timer_config = match config::timer_config().or_default() {
        Ok(config) => config,
        Err((e, defaults)) => {
            warn!("Invalid timer config ({}), using defaults", e);
            defaults
        }
    };
    info!(
        "Timer config: {}s per step, max set-point {}",
        timer_config.step_seconds,
        timer_config.max_set_point()
    );

    let controller = TimerController::new(board.relay, timer_config);

    spawner
        .spawn(tasks::control_task(controller, board.knob, board.display))
        .unwrap();

    info!("All tasks spawned");
}

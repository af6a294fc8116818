//! Control loop task
//!
//! Single loop that owns every peripheral: poll the knob, advance the
//! timer controller, then spend one refresh pass on the display. The
//! refresh pass paces the loop, so input is sampled every few
//! milliseconds.

use defmt::*;
use embassy_time::Delay;

use segtimer_core::state::Event;
use segtimer_core::traits::Input;
use segtimer_core::TimerController;
use segtimer_hal::Clock;
use segtimer_hal_rp2040::EmbassyClock;

use crate::board::{Display, Knob, Relay};

/// Loop passes between heartbeat traces
const HEARTBEAT_PASSES: u32 = 1000;

/// Control task - the timer's main loop
#[embassy_executor::task]
pub async fn control_task(
    mut controller: TimerController<Relay>,
    mut knob: Knob,
    mut display: Display,
) {
    info!("Control task started");

    let clock = EmbassyClock::new();
    let mut delay = Delay;

    controller.power_on(clock.now_ms());
    let mut passes: u32 = 0;

    loop {
        let now_ms = clock.now_ms();
        passes = passes.wrapping_add(1);
        if passes % HEARTBEAT_PASSES == 0 {
            trace!("Loop alive at {} ms in {}", now_ms, controller.state());
        }

        let input = Input::poll(&mut knob, now_ms);
        if !input.is_none() {
            debug!("Input: {}", input);
        }

        if let Some(event) = controller.tick(now_ms, input) {
            log_event(event, &controller);
        }

        // Outside Armed/Running/Paused the relay must be released
        if controller.relay_energized() != controller.state().relay_energized() {
            error!("Relay out of step in {}, forcing idle", controller.state());
            controller.force_idle();
        }

        let content = controller.display_content(clock.now_ms());
        if let Err(e) = display.show(&content) {
            warn!("Cannot show {}: {}", content, e);
            display.blank();
        }
        display.refresh_async(&mut delay).await;
    }
}

fn log_event(event: Event, controller: &TimerController<Relay>) {
    let state = controller.state();
    let remaining = controller.remaining();

    match event {
        Event::Start => info!(
            "Started: {}m{}s, relay {}",
            remaining.minutes(),
            remaining.seconds(),
            controller.relay_energized()
        ),
        Event::Pause | Event::Resume => info!(
            "{} at {}m{}s",
            event,
            remaining.minutes(),
            remaining.seconds()
        ),
        Event::Expired => info!("Countdown finished, relay {}", controller.relay_energized()),
        Event::Abort => info!("Aborted at {}m{}s", remaining.minutes(), remaining.seconds()),
        e if e.is_user_event() => info!("{} -> {}", e, state),
        _ => debug!("{} -> {}", event, state),
    }
}

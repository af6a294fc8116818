//! Configuration compiled in from timer.toml
//!
//! build.rs validates the file and generates the constants included here.

use segtimer_core::config::TimerConfig;
use segtimer_core::display::text;
use segtimer_display::{MuxConfig, Polarity};
use segtimer_drivers::input::ButtonConfig;

include!(concat!(env!("OUT_DIR"), "/timer_config.rs"));

//! Build script for segtimer-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates timer.toml at compile time
//! - Generates the Rust constants the firmware is configured from

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use segtimer_core::config::TimerConfig;
use serde::Deserialize;

/// Longest message hold accepted from the config file
const MAX_HOLD_MS: u32 = 60_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FirmwareToml {
    #[serde(default)]
    timer: TimerConfig,
    #[serde(default)]
    button: ButtonSection,
    #[serde(default)]
    display: DisplaySection,
    #[serde(default)]
    relay: RelaySection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ButtonSection {
    debounce_ms: u32,
    long_press_ms: u32,
    active_low: bool,
}

impl Default for ButtonSection {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            long_press_ms: 1000,
            active_low: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DisplaySection {
    dwell_us: u32,
    digit_active_low: bool,
    segment_active_low: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            dwell_us: 1000,
            digit_active_low: true,
            segment_active_low: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RelaySection {
    active_low: bool,
}

fn main() {
    setup_linker();
    let config = load_config();
    validate_config(&config);
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse timer.toml
fn load_config() -> FirmwareToml {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timer.toml configuration file.          ║\n\
            ║  Please create one in the segtimer-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid timer.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check value ranges the parser cannot express
fn validate_config(config: &FirmwareToml) {
    let mut errors = Vec::new();

    if let Err(e) = config.timer.validate() {
        errors.push(format!("[timer] {:?}", e));
    }

    for (name, hold) in [
        ("startup_hold_ms", config.timer.startup_hold_ms),
        ("pause_hold_ms", config.timer.pause_hold_ms),
        ("end_hold_ms", config.timer.end_hold_ms),
    ] {
        if hold > MAX_HOLD_MS {
            errors.push(format!("[timer] {} must be 0-{}", name, MAX_HOLD_MS));
        }
    }

    if config.button.long_press_ms <= config.button.debounce_ms {
        errors.push("[button] long_press_ms must exceed debounce_ms".to_string());
    }

    if !(100..=5000).contains(&config.display.dwell_us) {
        errors.push("[display] dwell_us must be 100-5000".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in timer.toml                      ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Characters without a glyph are legal but render blank
    for text in [
        &config.timer.startup_text,
        &config.timer.pause_text,
        &config.timer.end_text,
    ] {
        if !text.chars().all(|c| c.is_ascii_uppercase() || c == ' ') {
            println!(
                "cargo:warning=message {:?} has characters outside A-Z; they will show blank",
                text.as_str()
            );
        }
    }

    println!("cargo:warning=timer.toml validated successfully");
}

/// Write OUT_DIR/timer_config.rs
fn generate_config(config: &FirmwareToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let timer = &config.timer;

    let code = format!(
        "// Generated from timer.toml by build.rs\n\
        \n\
        /// Timer behavior\n\
        pub fn timer_config() -> TimerConfig {{\n\
        \x20   TimerConfig {{\n\
        \x20       step_seconds: {step},\n\
        \x20       startup_text: text({startup:?}),\n\
        \x20       startup_hold_ms: {startup_hold},\n\
        \x20       pause_text: text({pause:?}),\n\
        \x20       pause_hold_ms: {pause_hold},\n\
        \x20       end_text: text({end:?}),\n\
        \x20       end_hold_ms: {end_hold},\n\
        \x20   }}\n\
        }}\n\
        \n\
        /// Push button timing and wiring\n\
        pub const BUTTON: ButtonConfig = ButtonConfig {{\n\
        \x20   debounce_ms: {debounce},\n\
        \x20   long_press_ms: {long_press},\n\
        \x20   active_low: {button_low},\n\
        }};\n\
        \n\
        /// Display scan settings\n\
        pub const DISPLAY: MuxConfig = MuxConfig {{\n\
        \x20   dwell_us: {dwell},\n\
        \x20   polarity: Polarity {{\n\
        \x20       digit_active_low: {digit_low},\n\
        \x20       segment_active_low: {segment_low},\n\
        \x20   }},\n\
        }};\n\
        \n\
        /// Relay pulls in on a low pin\n\
        pub const RELAY_ACTIVE_LOW: bool = {relay_low};\n",
        step = timer.step_seconds,
        startup = timer.startup_text.as_str(),
        startup_hold = timer.startup_hold_ms,
        pause = timer.pause_text.as_str(),
        pause_hold = timer.pause_hold_ms,
        end = timer.end_text.as_str(),
        end_hold = timer.end_hold_ms,
        debounce = config.button.debounce_ms,
        long_press = config.button.long_press_ms,
        button_low = config.button.active_low,
        dwell = config.display.dwell_us,
        digit_low = config.display.digit_active_low,
        segment_low = config.display.segment_active_low,
        relay_low = config.relay.active_low,
    );

    let mut f = File::create(out_dir.join("timer_config.rs")).unwrap();
    f.write_all(code.as_bytes()).unwrap();
}

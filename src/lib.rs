//! Status-LED control with non-blocking flash playback.
//!
//! Each LED is a PWM output plus a background task that replays a timing
//! pattern; foreground `on`/`off`/`flash` calls only signal the task and
//! return at once. Duty cycles account for wiring polarity and brightness.
#![no_std]
#![no_main]

mod color;
mod command;
mod duty_cycle;
mod error;
mod flash_pattern;
mod led_state;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod pwm_led;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod status_led;

// Re-export commonly used items
pub use color::LedColor;
pub use command::{BrightnessPolicy, LedCommand};
pub use duty_cycle::{MAX_DUTY, PWM_FREQ_HZ, PWM_RESOLUTION, Polarity, duty_cycle};
pub use error::{Error, Result};
pub use flash_pattern::{FlashPattern, MAX_PATTERN_PHASES};
pub use led_state::{AtomicLedState, LedState};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use pwm_led::PwmLed;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use status_led::{CommandSignal, MAX_STATUS_LEDS, StatusLed, StatusLedNotifier};

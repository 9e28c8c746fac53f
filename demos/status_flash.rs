//! Single status LED demo for Raspberry Pi Pico.
//!
//! Drives one LED on GPIO 16 (anode on the pin, so active-high): a short
//! power-on test, then a loop that alternates steady ON with a
//! dot-dash-dot flash while halving the brightness each pass. Control
//! calls return immediately; the playback runs in the background task.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::Timer;
use led_kit::{BrightnessPolicy, LedColor, Polarity, PwmLed, StatusLed, StatusLedNotifier};
use panic_probe as _;

const DOT: u16 = 100;
const GAP: u16 = 100;
const DASH: u16 = 500;
const BREAK: u16 = 1000;

/// A dot - dash - dot flashing pattern.
const DOT_DASH_DOT: &[u16] = &[DOT, GAP, DASH, GAP, DOT, BREAK];

static LED_NOTIFIER: StatusLedNotifier = StatusLed::notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let pwm = PwmLed::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, Config::default()));
    let led = StatusLed::new(
        pwm,
        Polarity::ActiveHigh,
        LedColor::Green,
        BrightnessPolicy::Immediate,
        &LED_NOTIFIER,
        spawner,
    )
    .expect("spawn status LED task");

    // Power-on test: full brightness, then dimmed to ~25%.
    led.on();
    Timer::after_millis(1000).await;
    led.set_brightness(0x40);
    Timer::after_millis(1000).await;
    led.off();

    let mut brightness: u8 = 0xff;
    loop {
        info!("brightness {}", brightness);

        led.on_with(brightness);
        Timer::after_millis(2000).await;
        led.off();
        Timer::after_millis(1000).await;

        led.flash(DOT_DASH_DOT).expect("pattern fits");
        Timer::after_millis(5000).await;
        led.off();

        brightness = if brightness <= 1 { 0xff } else { brightness / 2 };
    }
}

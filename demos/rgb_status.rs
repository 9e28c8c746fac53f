//! RGB status LED demo for Raspberry Pi Pico.
//!
//! Three LEDs (or one RGB LED) on GPIO 2, 4 and 6, anodes on the pins.
//! After a power-on self test, the loop steps the shared brightness and
//! cycles each color: green on, red on, then blue flashing dot-dash-dot.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::Timer;
use led_kit::{BrightnessPolicy, LedColor, Polarity, PwmLed, StatusLed, StatusLedNotifier};
use panic_probe as _;

/// A dot - dash - dot flashing pattern.
const DOT_DASH_DOT: &[u16] = &[100, 50, 500, 50, 100, 250];

static RED_NOTIFIER: StatusLedNotifier = StatusLed::notifier();
static GREEN_NOTIFIER: StatusLedNotifier = StatusLed::notifier();
static BLUE_NOTIFIER: StatusLedNotifier = StatusLed::notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let red = StatusLed::new(
        PwmLed::new(Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, Config::default())),
        Polarity::ActiveHigh,
        LedColor::Red,
        BrightnessPolicy::Immediate,
        &RED_NOTIFIER,
        spawner,
    )
    .expect("spawn red LED task");
    let green = StatusLed::new(
        PwmLed::new(Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, Config::default())),
        Polarity::ActiveHigh,
        LedColor::Green,
        BrightnessPolicy::Immediate,
        &GREEN_NOTIFIER,
        spawner,
    )
    .expect("spawn green LED task");
    let blue = StatusLed::new(
        PwmLed::new(Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, Config::default())),
        Polarity::ActiveHigh,
        LedColor::Blue,
        BrightnessPolicy::Immediate,
        &BLUE_NOTIFIER,
        spawner,
    )
    .expect("spawn blue LED task");

    info!("up and running");

    // Self test: each LED on in turn.
    for led in [&red, &green, &blue] {
        led.on();
        Timer::after_millis(1000).await;
        led.off();
    }

    let mut brightness: u8 = 0;
    loop {
        info!("loop brightness {}", brightness);

        red.off();
        green.off();
        blue.off();
        Timer::after_millis(1000).await;

        green.on_with(brightness);
        Timer::after_millis(2000).await;
        green.off();

        red.on_with(brightness);
        Timer::after_millis(2000).await;
        red.off();

        blue.flash_with(DOT_DASH_DOT, brightness).expect("pattern fits");
        Timer::after_millis(2000).await;
        blue.off();

        brightness = brightness.wrapping_add(10);
    }
}

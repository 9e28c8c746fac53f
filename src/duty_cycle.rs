//! Translation from logical brightness to the physical PWM duty cycle.
//!
//! The rest of the crate reasons in "how bright should it look" terms;
//! this module is the only place that knows whether the LED wiring
//! inverts that relationship.

/// PWM resolution of the LED channels, in bits.
pub const PWM_RESOLUTION: u8 = 8;

/// Largest physical duty value, `2^PWM_RESOLUTION - 1`.
pub const MAX_DUTY: u8 = ((1u16 << PWM_RESOLUTION) - 1) as u8;

/// PWM frame frequency for status LEDs. 100 Hz is well above flicker fusion.
pub const PWM_FREQ_HZ: u32 = 100;

/// The logic level that turns the LED on.
///
/// `ActiveLow` is the common-anode wiring (cathode on the GPIO), where the
/// duty cycle must be complemented: full brightness is duty 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, defmt::Format)]
pub enum Polarity {
    /// LED anode on the GPIO (common-cathode wiring).
    ActiveHigh,
    /// LED cathode on the GPIO (common-anode wiring).
    #[default]
    ActiveLow,
}

/// Maps a logical `brightness` to the duty value the channel must be given.
///
/// Pure and total over `0..=MAX_DUTY`; there are no error conditions.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "brightness is a u8 and MAX_DUTY is u8::MAX, so the complement cannot underflow"
)]
pub const fn duty_cycle(brightness: u8, polarity: Polarity) -> u8 {
    match polarity {
        Polarity::ActiveHigh => brightness,
        Polarity::ActiveLow => MAX_DUTY - brightness,
    }
}

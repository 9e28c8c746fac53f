//! Hardware-PWM wrapper for a status LED on RP2040.
//! - ~100 Hz frame, 8-bit logical duty
//! - Clock-independent: derives the divider/top from clk_sys
//! - Updates duty WITHOUT reconfiguring the slice

use defmt::info;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};

use crate::duty_cycle::{MAX_DUTY, PWM_FREQ_HZ};

/// One PWM-driven LED channel with an 8-bit logical duty range.
pub struct PwmLed<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Store config so later writes keep the divider intact
    top: u16,
}

impl<'d> PwmLed<'d> {
    /// Takes ownership of a configured-or-default PWM output, e.g.
    /// `PwmLed::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, Config::default()))`.
    ///
    /// The slice is reprogrammed for a ~100 Hz frame and the output starts
    /// at duty 0.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "divider and frame rate are nonzero constants; top is clamped to u16 range"
    )]
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let clk = u64::from(clk_sys_freq());
        // Run the counter as slowly as the divider allows, then pick `top`
        // for the wanted frame rate.
        let div_int: u8 = u8::MAX;
        let ticks_per_frame = clk / (u64::from(div_int) * u64::from(PWM_FREQ_HZ));
        let top = ticks_per_frame
            .saturating_sub(1)
            .min(u64::from(u16::MAX)) as u16;

        let mut cfg = Config::default();
        cfg.top = top;
        cfg.phase_correct = false;
        cfg.divider = div_int.into();
        cfg.compare_a = 0;
        cfg.compare_b = 0;
        cfg.enable = true;
        pwm.set_config(&cfg);

        info!("led pwm clk={}Hz div={} top={}", clk, div_int, top);

        Self { pwm, cfg, top }
    }

    /// Writes a logical duty in `0..=MAX_DUTY` to the channel.
    ///
    /// Only the compare registers change; divider and top stay as
    /// configured. Both compares are written so the pin may sit on either
    /// half of the slice.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "span is at most 2^16, MAX_DUTY is nonzero, and compare is clamped before the cast"
    )]
    pub fn set_duty(&mut self, duty: u8) {
        let span = u32::from(self.top) + 1;
        // 0 maps to fully off, MAX_DUTY to fully on (compare = top + 1).
        let compare = (u32::from(duty) * span / u32::from(MAX_DUTY))
            .min(span)
            .min(u32::from(u16::MAX)) as u16;
        self.cfg.compare_a = compare;
        self.cfg.compare_b = compare;
        self.pwm.set_config(&self.cfg);
    }
}

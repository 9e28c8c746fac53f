//! A PWM status LED with non-blocking on/off/flash control.
//!
//! Each [`StatusLed`] owns a background Embassy task that replays the
//! active flash pattern. Foreground calls never wait on playback: they
//! store the requested state, then signal the task, which observes the
//! new command at its next wakeup - mid-phase if one is in progress.

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};
use portable_atomic::{AtomicU8, Ordering};

use crate::color::LedColor;
use crate::command::{BrightnessPolicy, LedCommand};
use crate::duty_cycle::{Polarity, duty_cycle};
use crate::error::Result;
use crate::flash_pattern::FlashPattern;
use crate::led_state::{AtomicLedState, LedState};
use crate::pwm_led::PwmLed;

/// How many `StatusLed` playback tasks may exist at once
/// (an RGB triple plus one spare).
pub const MAX_STATUS_LEDS: usize = 4;

/// Signal type carrying commands to a playback task.
pub type CommandSignal = Signal<CriticalSectionRawMutex, LedCommand>;

/// The cells shared between a [`StatusLed`] handle and its playback task.
///
/// Create one per LED with [`StatusLed::notifier()`] and store it in a
/// `static`, then pass it to [`StatusLed::new()`].
pub struct StatusLedNotifier {
    commands: CommandSignal,
    state: AtomicLedState,
    brightness: AtomicU8,
}

impl StatusLedNotifier {
    const fn new() -> Self {
        Self {
            commands: Signal::new(),
            state: AtomicLedState::new(),
            brightness: AtomicU8::new(u8::MAX),
        }
    }
}

/// A status LED driven by PWM whose on/off/flash playback runs in a
/// dedicated background task for the lifetime of the process.
pub struct StatusLed<'a> {
    notifier: &'a StatusLedNotifier,
    color: LedColor,
    policy: BrightnessPolicy,
}

impl StatusLed<'_> {
    /// Creates a new `StatusLed`, which entails starting an Embassy task.
    ///
    /// The LED is left physically OFF. Dropping the handle does not stop
    /// the task; exactly one task exists per LED for its entire lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be spawned. That is fatal for
    /// this LED: no handle exists, so it stays OFF and uncontrollable.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        pwm: PwmLed<'static>,
        polarity: Polarity,
        color: LedColor,
        policy: BrightnessPolicy,
        notifier: &'static StatusLedNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        let mut pwm = pwm;
        pwm.set_duty(duty_cycle(0, polarity));
        spawner.spawn(device_loop(pwm, polarity, notifier))?;
        Ok(Self {
            notifier,
            color,
            policy,
        })
    }

    /// Creates a new `StatusLedNotifier` instance.
    ///
    /// This should be assigned to a static variable and passed to the
    /// `StatusLed::new()` method.
    #[must_use]
    pub const fn notifier() -> StatusLedNotifier {
        StatusLedNotifier::new()
    }

    /// Turns the LED on at the current brightness, cancelling any flash
    /// pattern in progress. Idempotent: while already ON this simply
    /// re-asserts the output.
    pub fn on(&self) {
        self.request(LedCommand::On);
    }

    /// Sets the brightness, then turns the LED on.
    pub fn on_with(&self, brightness: u8) {
        self.store_brightness(brightness);
        self.on();
    }

    /// Turns the LED off, cancelling any flash pattern in progress.
    /// Idempotent.
    pub fn off(&self) {
        self.request(LedCommand::Off);
    }

    /// Replays `phases` (milliseconds, even indices ON, odd OFF) until
    /// turned off or superseded. Playback restarts from phase 0.
    ///
    /// An empty pattern is a no-op; a single nonzero phase is just "on".
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PatternOverflow`] for patterns longer than
    /// [`crate::MAX_PATTERN_PHASES`].
    pub fn flash(&self, phases: &[u16]) -> Result<()> {
        if let Some(command) = LedCommand::normalize_flash(phases)? {
            self.request(command);
        }
        Ok(())
    }

    /// Sets the brightness, then flashes `phases`.
    ///
    /// # Errors
    ///
    /// See [`Self::flash`].
    pub fn flash_with(&self, phases: &[u16], brightness: u8) -> Result<()> {
        self.store_brightness(brightness);
        self.flash(phases)
    }

    /// The last-requested logical state. Never blocks.
    #[must_use]
    pub fn state(&self) -> LedState {
        self.notifier.state.load()
    }

    /// The current logical brightness, `0..=MAX_DUTY`.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.notifier.brightness.load(Ordering::Relaxed)
    }

    /// Sets the ON brightness.
    ///
    /// While a pattern plays, the new value is picked up at the next
    /// ON-phase transition. While steadily ON, the constructor-chosen
    /// [`BrightnessPolicy`] decides whether the duty cycle is re-applied
    /// immediately or left until the next command.
    pub fn set_brightness(&self, brightness: u8) {
        self.store_brightness(brightness);
        if self.policy == BrightnessPolicy::Immediate && self.state() == LedState::On {
            self.request(LedCommand::On);
        }
    }

    /// The identification color given at construction.
    #[must_use]
    pub const fn color(&self) -> LedColor {
        self.color
    }

    // Foreground calls serialize through the signal: the state cell is
    // stored first so `state()` reflects the call at once, then the task
    // is woken. The last command signaled wins.
    fn request(&self, command: LedCommand) {
        let target = command.target_state();
        info!("led {}: {}", self.color, target);
        self.notifier.state.store(target);
        self.notifier.commands.signal(command);
    }

    fn store_brightness(&self, brightness: u8) {
        self.notifier.brightness.store(brightness, Ordering::Relaxed);
    }
}

#[embassy_executor::task(pool_size = MAX_STATUS_LEDS)]
async fn device_loop(
    pwm: PwmLed<'static>,
    polarity: Polarity,
    notifier: &'static StatusLedNotifier,
) -> ! {
    let mut pwm = pwm;
    let mut command = LedCommand::Off;
    loop {
        command = run_and_next(command, &mut pwm, polarity, notifier).await;
    }
}

/// Executes one command to completion, returning the command that
/// supersedes it.
async fn run_and_next(
    command: LedCommand,
    pwm: &mut PwmLed<'static>,
    polarity: Polarity,
    notifier: &'static StatusLedNotifier,
) -> LedCommand {
    match command {
        LedCommand::Off => {
            pwm.set_duty(duty_cycle(0, polarity));
            notifier.commands.wait().await
        }
        LedCommand::On => {
            let brightness = notifier.brightness.load(Ordering::Relaxed);
            pwm.set_duty(duty_cycle(brightness, polarity));
            notifier.commands.wait().await
        }
        LedCommand::Flash(pattern) => play(&pattern, pwm, polarity, notifier).await,
    }
}

/// Replays `pattern` cyclically until a new command arrives.
///
/// Each phase waits on the command signal and the phase deadline at once,
/// so cancellation or replacement interrupts a phase mid-wait; a long
/// phase never delays a foreground call. Only this task writes the PWM
/// output while a pattern is active. Brightness is re-read at every
/// phase, so changes are observed at the next phase transition.
async fn play(
    pattern: &FlashPattern,
    pwm: &mut PwmLed<'static>,
    polarity: Polarity,
    notifier: &'static StatusLedNotifier,
) -> LedCommand {
    let mut index = 0;
    loop {
        let brightness = notifier.brightness.load(Ordering::Relaxed);
        pwm.set_duty(FlashPattern::phase_duty(index, brightness, polarity));
        // Zero-length phases still wait one tick; see `phase_wait_millis`.
        let millis = pattern.phase_wait_millis(index);
        #[cfg(feature = "led-trace")]
        info!("phase {} for {}ms", index, millis);
        let deadline = Timer::after(Duration::from_millis(u64::from(millis)));
        if let Either::First(next) = select(notifier.commands.wait(), deadline).await {
            return next;
        }
        index = pattern.next_phase(index);
    }
}

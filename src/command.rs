//! Normalization of foreground requests into playback commands.

use crate::error::Result;
use crate::flash_pattern::FlashPattern;
use crate::led_state::LedState;

/// A request delivered from a foreground handle to a playback task.
///
/// A pattern travels inside the command, so the task always observes a
/// complete pattern; there is no shared buffer to tear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedCommand {
    /// Hold the LED at the current brightness.
    On,
    /// Hold the LED dark.
    Off,
    /// Replay the pattern from phase 0 until superseded.
    Flash(FlashPattern),
}

impl LedCommand {
    /// The state the LED reports once this command has been issued.
    #[must_use]
    pub const fn target_state(&self) -> LedState {
        match self {
            Self::On => LedState::On,
            Self::Off => LedState::Off,
            Self::Flash(_) => LedState::Flashing,
        }
    }

    /// Normalizes a flash request.
    ///
    /// - An empty pattern means "nothing to play": `Ok(None)`, a no-op
    ///   rather than an error.
    /// - A single nonzero phase is just "on": degrades to [`Self::On`].
    /// - Anything else becomes [`Self::Flash`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PatternOverflow`] for patterns longer than
    /// [`crate::MAX_PATTERN_PHASES`].
    pub fn normalize_flash(phases: &[u16]) -> Result<Option<Self>> {
        match phases {
            [] => Ok(None),
            [single] if *single > 0 => Ok(Some(Self::On)),
            _ => Ok(Some(Self::Flash(FlashPattern::from_slice(phases)?))),
        }
    }
}

/// When a brightness change takes effect on an LED that is already ON.
///
/// The two behaviors match the two historical wirings of the brightness
/// value: `Immediate` re-applies the duty cycle synchronously, `NextPhase`
/// is only observed at the next ON-phase transition (and so not at all
/// while the LED is steadily ON).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, defmt::Format)]
pub enum BrightnessPolicy {
    /// Re-assert the ON duty cycle as soon as the brightness changes.
    #[default]
    Immediate,
    /// Pick the new brightness up at the next ON-phase transition.
    NextPhase,
}

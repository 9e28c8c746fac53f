//! The bounded on/off timing pattern a status LED replays.

use heapless::Vec;

use crate::duty_cycle::{Polarity, duty_cycle};
use crate::error::{Error, Result};

/// Most phases a [`FlashPattern`] may hold.
pub const MAX_PATTERN_PHASES: usize = 255;

/// An ordered sequence of phase durations in milliseconds.
///
/// Even indices (0, 2, 4, ...) are ON phases, odd indices are OFF phases.
/// Playback starts at phase 0 and repeats the whole pattern until the LED
/// is turned off or given a new pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashPattern(Vec<u16, MAX_PATTERN_PHASES>);

impl FlashPattern {
    /// Copies `phases` into a new pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PatternOverflow`] if `phases` holds more than
    /// [`MAX_PATTERN_PHASES`] entries.
    pub fn from_slice(phases: &[u16]) -> Result<Self> {
        let inner = Vec::from_slice(phases).map_err(|()| Error::PatternOverflow)?;
        Ok(Self(inner))
    }

    /// Number of phases in the pattern.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there is nothing to play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The phase durations, in milliseconds.
    #[must_use]
    pub fn phases(&self) -> &[u16] {
        &self.0
    }

    /// Duration of phase `index` in milliseconds, if it exists.
    #[must_use]
    pub fn phase_millis(&self, index: usize) -> Option<u16> {
        self.0.get(index).copied()
    }

    /// How long playback waits in phase `index`, in milliseconds.
    ///
    /// A zero-length phase is stretched to one millisecond so that a
    /// pattern of zero phases cannot monopolize the executor with
    /// back-to-back wakeups. Sub-millisecond phases are outside the
    /// timing contract anyway.
    #[must_use]
    pub fn phase_wait_millis(&self, index: usize) -> u16 {
        self.phase_millis(index).unwrap_or(0).max(1)
    }

    /// Whether phase `index` is an ON phase (even indices are ON).
    #[must_use]
    pub const fn phase_is_on(index: usize) -> bool {
        index % 2 == 0
    }

    /// Logical brightness for phase `index`: `brightness` for ON phases,
    /// zero for OFF phases.
    #[must_use]
    pub const fn phase_brightness(index: usize, brightness: u8) -> u8 {
        if Self::phase_is_on(index) { brightness } else { 0 }
    }

    /// Physical duty value to write for phase `index`.
    #[must_use]
    pub const fn phase_duty(index: usize, brightness: u8, polarity: Polarity) -> u8 {
        duty_cycle(Self::phase_brightness(index, brightness), polarity)
    }

    /// The phase that follows `index`, wrapping back to phase 0 after the
    /// last one. The pattern repeats indefinitely.
    #[must_use]
    pub fn next_phase(&self, index: usize) -> usize {
        let next = index.wrapping_add(1);
        if next >= self.0.len() { 0 } else { next }
    }
}

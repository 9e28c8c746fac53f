//! Observable LED state, shared lock-free between the foreground handle
//! and the playback task.

use portable_atomic::{AtomicU8, Ordering};

/// Logical state of a status LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, defmt::Format)]
#[repr(u8)]
pub enum LedState {
    /// The LED is OFF.
    #[default]
    Off = 0x00,
    /// The LED is ON.
    On = 0x01,
    /// The LED is replaying a flash pattern.
    Flashing = 0x10,
}

/// A lock-free `LedState` cell.
///
/// The foreground stores the state it just requested; `load` never blocks,
/// so state queries are purely observational.
#[derive(Debug)]
pub struct AtomicLedState(AtomicU8);

impl AtomicLedState {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(LedState::Off as u8))
    }

    #[must_use]
    pub fn load(&self) -> LedState {
        match self.0.load(Ordering::Relaxed) {
            0x01 => LedState::On,
            0x10 => LedState::Flashing,
            _ => LedState::Off,
        }
    }

    pub fn store(&self, state: LedState) {
        self.0.store(state as u8, Ordering::Relaxed);
    }
}

impl Default for AtomicLedState {
    fn default() -> Self {
        Self::new()
    }
}

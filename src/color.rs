//! Identification colors for status LEDs.

/// The color of a status LED, encoded as 12-bit RGB (one nibble per
/// channel). Purely informational: it names the LED in logs and lets
/// application code pick an instance by color. No color mixing happens
/// in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum LedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl LedColor {
    /// The `0xRGB` encoding, one hex digit per channel.
    #[must_use]
    pub const fn rgb12(self) -> u16 {
        match self {
            Self::Red => 0xf00,
            Self::Green => 0x0f0,
            Self::Blue => 0x00f,
            Self::Yellow => 0xff0,
            Self::Magenta => 0xf0f,
            Self::Cyan => 0x0ff,
        }
    }
}

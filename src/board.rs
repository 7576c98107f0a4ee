//! Pin assignments and signal polarities for the qbox board.

/// Red status LED
pub const LED_RED: u8 = 5;

/// Green status LED
pub const LED_GREEN: u8 = 14;

/// Acknowledge switch input
pub const PIN_ACKNOWLEDGE: u8 = 4;

/// Go signal line
pub const PIN_GO: u8 = 12;

/// Port the box receives on
pub const REC_PORT: u16 = 1000;

/// Electrical level on a GPIO line.
#[derive(Copy, Clone, PartialEq, Eq, Debug, ufmt::derive::uDebug)]
pub enum Level {
    Low,
    High,
}

/// LEDs are wired active-high.
pub const LED_ON: Level = Level::High;
pub const LED_OFF: Level = Level::Low;

/// The acknowledge switch pulls its line low when down.
pub const SWITCH_IS_DOWN: Level = Level::Low;

impl Level {
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    #[inline]
    pub fn is_low(self) -> bool {
        !self.is_high()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

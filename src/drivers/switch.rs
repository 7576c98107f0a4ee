use embedded_hal::digital::v2::InputPin;

use crate::board::{Level, SWITCH_IS_DOWN};

/// A switch input behind the board's down polarity.
pub struct Switch<P> {
    pin: P,
}

impl<P: InputPin> Switch<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Whether the switch sits in its down (engaged) position.
    pub fn is_down(&self) -> Result<bool, P::Error> {
        let level = Level::from(self.pin.is_high()?);
        Ok(level == SWITCH_IS_DOWN)
    }

    pub fn is_up(&self) -> Result<bool, P::Error> {
        Ok(!self.is_down()?)
    }

    /// Hands the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

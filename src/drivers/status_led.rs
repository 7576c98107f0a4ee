use embedded_hal::digital::v2::OutputPin;

use crate::board::{Level, LED_OFF, LED_ON};

/// A status LED behind the board's on/off polarity.
///
/// Callers speak in on/off; the wired electrical level stays in one place.
pub struct StatusLed<P> {
    pin: P,
}

impl<P: OutputPin> StatusLed<P> {
    /// Takes ownership of the pin and parks the LED off.
    pub fn new(pin: P) -> Result<Self, P::Error> {
        let mut led = Self { pin };
        led.off()?;
        Ok(led)
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        self.drive(LED_ON)
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        self.drive(LED_OFF)
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.on()
        } else {
            self.off()
        }
    }

    fn drive(&mut self, level: Level) -> Result<(), P::Error> {
        match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        }
    }

    /// Hands the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock, State, Transaction};

    #[test]
    fn new_parks_the_led_off() {
        let pin = Mock::new(&[Transaction::set(State::Low)]);
        let led = StatusLed::new(pin).unwrap();
        led.release().done();
    }

    #[test]
    fn on_drives_the_line_high() {
        let pin = Mock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);
        let mut led = StatusLed::new(pin).unwrap();
        led.on().unwrap();
        led.release().done();
    }

    #[test]
    fn off_drives_the_line_low() {
        let pin = Mock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        let mut led = StatusLed::new(pin).unwrap();
        led.on().unwrap();
        led.off().unwrap();
        led.release().done();
    }

    #[test]
    fn set_maps_bool_through_the_polarity() {
        let pin = Mock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        let mut led = StatusLed::new(pin).unwrap();
        led.set(true).unwrap();
        led.set(false).unwrap();
        led.release().done();
    }
}

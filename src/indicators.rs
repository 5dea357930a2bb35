//! Grove LEDs.

use embedded_hal::digital::OutputPin;

use crate::error::Error;

pub struct GroveLed<P> {
    pin: P,
}

impl<P: OutputPin> GroveLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn on(&mut self) -> Result<(), Error> {
        self.pin.set_high().map_err(Error::pin)
    }

    pub fn off(&mut self) -> Result<(), Error> {
        self.pin.set_low().map_err(Error::pin)
    }

    pub fn release(self) -> P {
        self.pin
    }
}

/// The red, green and blue LEDs blinked together whenever a sample is taken
pub struct IndicatorLeds<P> {
    pub red: GroveLed<P>,
    pub green: GroveLed<P>,
    pub blue: GroveLed<P>,
}

impl<P: OutputPin> IndicatorLeds<P> {
    pub fn new(red: P, green: P, blue: P) -> Self {
        Self {
            red: GroveLed::new(red),
            green: GroveLed::new(green),
            blue: GroveLed::new(blue),
        }
    }

    pub fn all_on(&mut self) -> Result<(), Error> {
        self.red.on()?;
        self.green.on()?;
        self.blue.on()
    }

    pub fn all_off(&mut self) -> Result<(), Error> {
        self.red.off()?;
        self.green.off()?;
        self.blue.off()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    #[test]
    fn blink_drives_every_led() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut leds = IndicatorLeds::new(
            Mock::new(&expectations),
            Mock::new(&expectations),
            Mock::new(&expectations),
        );

        leds.all_on().unwrap();
        leds.all_off().unwrap();

        leds.red.release().done();
        leds.green.release().done();
        leds.blue.release().done();
    }
}

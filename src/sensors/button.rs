use embedded_hal::digital::InputPin;

use crate::error::Error;

/// Grove push button, reads high while pressed
pub struct GroveButton<P> {
    pin: P,
}

impl<P: InputPin> GroveButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn is_pressed(&mut self) -> Result<bool, Error> {
        self.pin.is_high().map_err(Error::pin)
    }
}

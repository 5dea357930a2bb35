//! Grove sensor drivers.
//!
//! Analog sensors sit on an [`AnalogInput`], the button on any
//! [`embedded_hal::digital::InputPin`].

mod button;
mod gas;
mod light;
mod temperature;

pub use button::GroveButton;
pub use gas::{AirQuality, GasReading, Tp401};
pub use light::GroveLight;
pub use temperature::GroveTemp;

use crate::error::Error;

/// Full scale of a 10-bit Grove analog reading
pub const ANALOG_MAX: u16 = 1023;

/// One analog channel sampled at 10-bit resolution
pub trait AnalogInput {
    /// Returns a sample in `0..=ANALOG_MAX`
    fn read(&mut self) -> Result<u16, Error>;
}

impl<A: AnalogInput + ?Sized> AnalogInput for &mut A {
    fn read(&mut self) -> Result<u16, Error> {
        (**self).read()
    }
}

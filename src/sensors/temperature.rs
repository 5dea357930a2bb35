use libm::logf;

use super::{AnalogInput, ANALOG_MAX};
use crate::error::Error;

/// Thermistor B constant of the Grove temperature sensor v1.2
const B: f32 = 4275.0;
/// 25 °C in Kelvin, where the thermistor matches its nominal resistance
const T0_KELVIN: f32 = 298.15;
const KELVIN_OFFSET: f32 = 273.15;

/// Grove temperature sensor (NTC thermistor divider)
pub struct GroveTemp<A> {
    input: A,
}

impl<A: AnalogInput> GroveTemp<A> {
    pub fn new(input: A) -> Self {
        Self { input }
    }

    /// Whole degrees Celsius, truncated toward zero
    pub fn celsius(&mut self) -> Result<i32, Error> {
        let raw = self.input.read()?;
        Ok(celsius_from_raw(raw))
    }
}

pub(crate) fn celsius_from_raw(raw: u16) -> i32 {
    let a = raw as f32;
    // Thermistor resistance relative to its nominal value
    let r = (ANALOG_MAX as f32 - a) / a;
    let t = 1.0 / (logf(r) / B + 1.0 / T0_KELVIN) - KELVIN_OFFSET;
    t as i32
}

use libm::{powf, roundf};

use super::{AnalogInput, ANALOG_MAX};
use crate::error::Error;

/// Grove light sensor (photoresistor divider)
pub struct GroveLight<A> {
    input: A,
}

impl<A: AnalogInput> GroveLight<A> {
    pub fn new(input: A) -> Self {
        Self { input }
    }

    /// Approximate illuminance in lux
    pub fn lux(&mut self) -> Result<i32, Error> {
        let raw = self.input.read()?;
        Ok(lux_from_raw(raw))
    }
}

/// Rough conversion from the Grove starter kit booklet
pub(crate) fn lux_from_raw(raw: u16) -> i32 {
    if raw == 0 {
        return 0;
    }
    let a = raw as f32;
    let resistance = (ANALOG_MAX as f32 - a) * 10.0 / a;
    // Saturates to i32::MAX once the divider is at full scale
    roundf(10000.0 / powf(resistance * 15.0, 4.0 / 3.0)) as i32
}

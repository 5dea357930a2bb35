//! RP2040 glue: ADC channels as [`AnalogInput`]s and the chip identity.

use core::cell::RefCell;

use embedded_hal_0_2::adc::{Channel, OneShot};
use rp_pico::hal::adc::Adc;
use rp_pico::hal::pac;

use crate::error::Error;
use crate::platform::Platform;
use crate::sensors::AnalogInput;

/// One ADC input; the channels take turns on the shared converter
pub struct GroveAnalog<'a, PIN> {
    adc: &'a RefCell<Adc>,
    pin: PIN,
}

impl<'a, PIN> GroveAnalog<'a, PIN>
where
    PIN: Channel<Adc>,
{
    pub fn new(adc: &'a RefCell<Adc>, pin: PIN) -> Self {
        Self { adc, pin }
    }
}

impl<PIN> AnalogInput for GroveAnalog<'_, PIN>
where
    PIN: Channel<Adc>,
    Adc: OneShot<Adc, u16, PIN>,
{
    fn read(&mut self) -> Result<u16, Error> {
        let raw: u16 =
            nb::block!(self.adc.borrow_mut().read(&mut self.pin)).map_err(|_| Error::Adc)?;
        // 12-bit converter, Grove conversions expect 10 bits
        Ok(raw >> 2)
    }
}

/// Reads `SYSINFO.CHIP_ID`
pub fn platform(sysinfo: &pac::SYSINFO) -> Platform {
    Platform::from_chip_id(sysinfo.chip_id().read().bits())
}

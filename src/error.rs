use embedded_hal::digital;
use embedded_hal::i2c;

/// Hardware faults raised while running a station cycle.
///
/// None of these are recovered from. The firmware unwraps them and lets the
/// panic handler report the fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The ADC conversion failed
    Adc,
    /// A GPIO read or write failed
    Pin(digital::ErrorKind),
    /// The LCD did not accept an I2C transfer
    I2c(i2c::ErrorKind),
    /// A formatted line did not fit its buffer
    LineOverflow,
}

impl Error {
    pub fn pin<E: digital::Error>(err: E) -> Self {
        Error::Pin(err.kind())
    }

    pub fn i2c<E: i2c::Error>(err: E) -> Self {
        Error::I2c(err.kind())
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Adc => f.write_str("ADC conversion failed"),
            Error::Pin(kind) => write!(f, "GPIO error: {}", kind),
            Error::I2c(kind) => write!(f, "I2C error: {}", kind),
            Error::LineOverflow => f.write_str("LCD line buffer overflow"),
        }
    }
}

use super::{AnalogInput, ANALOG_MAX};
use crate::error::Error;

/// TP401 air quality sensor on a Grove analog port.
///
/// Needs a few minutes of heating after power-up before its readings mean
/// anything; the station waits for it before every sample.
pub struct Tp401<A> {
    input: A,
}

/// One gas sample with its derived values
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GasReading {
    pub raw: u16,
    pub ppm: f32,
    pub quality: AirQuality,
}

impl<A: AnalogInput> Tp401<A> {
    pub fn new(input: A) -> Self {
        Self { input }
    }

    pub fn name(&self) -> &'static str {
        "TP401"
    }

    /// Raw 10-bit reading
    pub fn sample(&mut self) -> Result<u16, Error> {
        self.input.read()
    }

    /// Approximate concentration in parts per million
    pub fn ppm(&mut self) -> Result<f32, Error> {
        Ok(ppm_from_raw(self.sample()?))
    }

    /// Samples once and derives ppm and air quality from that sample
    pub fn read(&mut self) -> Result<GasReading, Error> {
        let raw = self.sample()?;
        Ok(GasReading {
            raw,
            ppm: ppm_from_raw(raw),
            quality: AirQuality::classify(raw),
        })
    }
}

/// Linear fit over the sensor's 0..25 ppm range
pub fn ppm_from_raw(raw: u16) -> f32 {
    25.0 * raw as f32 / ANALOG_MAX as f32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AirQuality {
    Fresh,
    NormalIndoor,
    LowPollution,
    HighPollution,
    VeryHighPollution,
}

impl AirQuality {
    /// Tiers by raw reading; each bound is the inclusive start of the next tier
    pub const fn classify(raw: u16) -> Self {
        match raw {
            0..=49 => AirQuality::Fresh,
            50..=199 => AirQuality::NormalIndoor,
            200..=399 => AirQuality::LowPollution,
            400..=599 => AirQuality::HighPollution,
            _ => AirQuality::VeryHighPollution,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AirQuality::Fresh => "Fresh Air",
            AirQuality::NormalIndoor => "Normal Indoor Air",
            AirQuality::LowPollution => "Low Pollution",
            AirQuality::HighPollution => "High Pollution - Action Recommended",
            AirQuality::VeryHighPollution => "Very High Pollution - Take Action Immediately",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(AirQuality::classify(0).label(), "Fresh Air");
        assert_eq!(AirQuality::classify(49).label(), "Fresh Air");
        assert_eq!(AirQuality::classify(50).label(), "Normal Indoor Air");
        assert_eq!(AirQuality::classify(199).label(), "Normal Indoor Air");
        assert_eq!(AirQuality::classify(200).label(), "Low Pollution");
        assert_eq!(AirQuality::classify(399).label(), "Low Pollution");
        assert_eq!(
            AirQuality::classify(400).label(),
            "High Pollution - Action Recommended"
        );
        assert_eq!(
            AirQuality::classify(599).label(),
            "High Pollution - Action Recommended"
        );
        assert_eq!(
            AirQuality::classify(600).label(),
            "Very High Pollution - Take Action Immediately"
        );
        assert_eq!(
            AirQuality::classify(u16::MAX),
            AirQuality::VeryHighPollution
        );
    }

    #[test]
    fn tiers_never_improve_as_readings_rise() {
        let mut previous = AirQuality::classify(0);
        for raw in 1..=ANALOG_MAX {
            let quality = AirQuality::classify(raw);
            assert!(quality >= previous, "tier dropped at {}", raw);
            previous = quality;
        }
    }

    #[test]
    fn ppm_spans_sensor_range() {
        assert_eq!(ppm_from_raw(0), 0.0);
        assert_eq!(ppm_from_raw(ANALOG_MAX), 25.0);
        assert!((ppm_from_raw(512) - 12.512).abs() < 0.01);
    }
}

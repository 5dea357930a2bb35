//! The polling-and-display cycle.
//!
//! One cycle shows three screens in turn, each held for a few seconds:
//! temperature with its min/max and a backlight tint, light level, and air
//! quality after warming up the gas sensor. Every wait blocks the only thread.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::backlight;
use crate::config::{
    GAS_WARMUP_REPORTED_SECS, GAS_WARMUP_STEPS, GAS_WARMUP_STEP_MS, HOLD_MS, LED_BLINK_MS,
    LIGHT_SETTLE_MS, LOOP_INTERVAL_MS,
};
use crate::display::Display;
use crate::error::Error;
use crate::indicators::IndicatorLeds;
use crate::pause::{pause, Sleep};
use crate::range::TemperatureRange;
use crate::rendering::{fit_row, gas_line, lux_line, range_line, temperature_line};
use crate::sensors::{AnalogInput, GasReading, GroveButton, GroveLight, GroveTemp, Tp401};

/// What a cycle measured
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    pub celsius: i32,
    pub range: TemperatureRange,
    pub lux: i32,
    pub gas: GasReading,
}

pub struct WeatherStation<T, L, G, B, P, D, S> {
    temperature: GroveTemp<T>,
    light: GroveLight<L>,
    gas: Tp401<G>,
    button: GroveButton<B>,
    leds: IndicatorLeds<P>,
    display: D,
    sleeper: S,
    range: TemperatureRange,
}

impl<T, L, G, B, P, D, S> WeatherStation<T, L, G, B, P, D, S>
where
    T: AnalogInput,
    L: AnalogInput,
    G: AnalogInput,
    B: InputPin,
    P: OutputPin,
    D: Display,
    S: Sleep,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        temperature: GroveTemp<T>,
        light: GroveLight<L>,
        gas: Tp401<G>,
        button: GroveButton<B>,
        leds: IndicatorLeds<P>,
        display: D,
        sleeper: S,
    ) -> Self {
        Self {
            temperature,
            light,
            gas,
            button,
            leds,
            display,
            sleeper,
            range: TemperatureRange::new(),
        }
    }

    /// Runs the three screens once
    pub fn run_cycle(&mut self) -> Result<Readings, Error> {
        self.display.clear()?;

        let celsius = self.show_temperature()?;
        let lux = self.show_light()?;
        let gas = self.show_air_quality()?;

        Ok(Readings {
            celsius,
            range: self.range,
            lux,
            gas,
        })
    }

    /// Wait between cycles
    pub fn idle(&mut self) {
        pause(&mut self.sleeper, LOOP_INTERVAL_MS);
    }

    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    /// Updates min/max, tints the backlight and blinks the LEDs
    fn show_temperature(&mut self) -> Result<i32, Error> {
        let celsius = self.temperature.celsius()?;
        let reset = self.button.is_pressed()?;
        self.range.record(celsius, reset);
        if reset {
            debug!("Min/max reset at {} C", celsius);
        }

        self.display.set_cursor(0, 0)?;
        self.display.write_str(temperature_line(celsius)?.as_str())?;
        self.display.set_cursor(1, 0)?;
        self.display
            .write_str(range_line(self.range.min(), self.range.max())?.as_str())?;

        let color = backlight::color_for(celsius);

        // Show that the temperature was actually sampled
        self.leds.all_on()?;
        pause(&mut self.sleeper, LED_BLINK_MS);
        self.leds.all_off()?;

        self.display.set_color(color)?;
        pause(&mut self.sleeper, HOLD_MS);
        self.display.clear()?;

        Ok(celsius)
    }

    fn show_light(&mut self) -> Result<i32, Error> {
        let lux = self.light.lux()?;

        self.display.clear()?;
        pause(&mut self.sleeper, LIGHT_SETTLE_MS);

        self.display.set_cursor(0, 0)?;
        self.display.write_str("light value ")?;
        self.display.set_cursor(1, 2)?;
        self.display.write_str(lux_line(lux)?.as_str())?;

        pause(&mut self.sleeper, HOLD_MS);
        self.display.clear()?;

        Ok(lux)
    }

    fn show_air_quality(&mut self) -> Result<GasReading, Error> {
        info!("{}", self.gas.name());
        info!("Heating sensor for 3 minutes...");
        for step in 0..GAS_WARMUP_STEPS {
            info!(
                "Please wait, {} seconds have passed...",
                step * GAS_WARMUP_REPORTED_SECS
            );
            pause(&mut self.sleeper, GAS_WARMUP_STEP_MS);
        }
        info!("Air sensor ready!");

        let reading = self.gas.read()?;
        let numbers = gas_line(reading.raw, reading.ppm)?;
        let label = reading.quality.label();
        info!("{}  {}", numbers.as_str(), label);

        self.display.set_cursor(0, 0)?;
        self.display.write_str(fit_row(label))?;
        self.display.set_cursor(1, 0)?;
        self.display.write_str(numbers.as_str())?;

        pause(&mut self.sleeper, HOLD_MS);
        self.display.clear()?;

        Ok(reading)
    }
}

#![no_std]
#![no_main]

use bsp::entry;
use core::cell::RefCell;
use defmt::*;
use defmt_rtt as _;
use embedded_hal::digital::OutputPin;
use panic_probe as _;
use rp_pico::hal::Timer;

// Provide an alias for our BSP so we can switch targets quickly.
// Uncomment the BSP you included in Cargo.toml, the rest of the code does not need to change.
use rp_pico as bsp;

use bsp::hal::{
    adc::{Adc, AdcPin},
    clocks::{init_clocks_and_plls, Clock},
    pac,
    watchdog::Watchdog,
};
use grove_weather_station::board::{self, GroveAnalog};
use grove_weather_station::config;
use grove_weather_station::display::Jhd1313m1;
use grove_weather_station::indicators::IndicatorLeds;
use grove_weather_station::sensors::{GroveButton, GroveLight, GroveTemp, Tp401};
use grove_weather_station::WeatherStation;
use i2c_pio::I2C;
use rp_pico::hal;
use rp_pico::hal::fugit::RateExtU32;
use rp_pico::hal::pio::PIOExt;

#[entry]
fn main() -> ! {
    info!("Grove weather station starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();
    let _core = pac::CorePeripherals::take().unwrap();

    // Check that we are running on a board revision we know
    let platform = board::platform(&pac.SYSINFO);
    if !platform.is_supported() {
        error!("Unsupported platform, exiting");
        loop {
            cortex_m::asm::wfi();
        }
    }
    info!("Platform: {}", platform.name());
    info!(
        "LEDs on D{}/D{}/D{}, button on D{}, sensors on A{}/A{}/A{}",
        config::RED_LED_PORT,
        config::GREEN_LED_PORT,
        config::BLUE_LED_PORT,
        config::BUTTON_PORT,
        config::TEMPERATURE_SENSOR_PORT,
        config::LIGHT_SENSOR_PORT,
        config::GAS_SENSOR_PORT
    );

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // LCD on the I2C port (GP8 / GP9)
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let i2c_pio = I2C::new(
        &mut pio,
        pins.gpio8,
        pins.gpio9,
        sm0,
        100.kHz(),
        clocks.system_clock.freq(),
    );
    let mut lcd = Jhd1313m1::new(i2c_pio, delay);
    lcd.init().unwrap();

    // Analog ports A0..A2 share the one converter
    let adc = RefCell::new(Adc::new(pac.ADC, &mut pac.RESETS));
    let temperature = GroveTemp::new(GroveAnalog::new(
        &adc,
        AdcPin::new(pins.gpio26.into_floating_input()).unwrap(),
    ));
    let light = GroveLight::new(GroveAnalog::new(
        &adc,
        AdcPin::new(pins.gpio27.into_floating_input()).unwrap(),
    ));
    let gas = Tp401::new(GroveAnalog::new(
        &adc,
        AdcPin::new(pins.gpio28.into_floating_input()).unwrap(),
    ));

    // Button on D5
    let button = GroveButton::new(pins.gpio5.into_pull_down_input());

    // LEDs on D4 (red), D3 (green), D2 (blue)
    let mut red = pins.gpio4.into_push_pull_output().into_dyn_pin();
    let mut green = pins.gpio3.into_push_pull_output().into_dyn_pin();
    let mut blue = pins.gpio2.into_push_pull_output().into_dyn_pin();
    red.set_low().unwrap();
    green.set_low().unwrap();
    blue.set_low().unwrap();
    let leds = IndicatorLeds::new(red, green, blue);

    let mut station = WeatherStation::new(temperature, light, gas, button, leds, lcd, delay);

    info!("Grove weather station ready");

    loop {
        let readings = station.run_cycle().unwrap();
        debug!("readings: {:?}", readings);
        station.idle();
    }
}

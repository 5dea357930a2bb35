//! Fixed wiring and timing of the station.
//!
//! Port numbers are Grove shield ports. On the Pico the digital ports map to
//! the GPIO with the same number and A0..A2 map to GPIO26..GPIO28.

// Digital ports
pub const BLUE_LED_PORT: u8 = 2;
pub const GREEN_LED_PORT: u8 = 3;
pub const RED_LED_PORT: u8 = 4;
pub const BUTTON_PORT: u8 = 5;

// Analog ports
pub const TEMPERATURE_SENSOR_PORT: u8 = 0;
pub const LIGHT_SENSOR_PORT: u8 = 1;
pub const GAS_SENSOR_PORT: u8 = 2;

/// JHD1313M1 text controller
pub const LCD_ADDRESS: u8 = 0x3E;
/// JHD1313M1 RGB backlight controller
pub const LCD_RGB_ADDRESS: u8 = 0x62;
pub const LCD_COLUMNS: usize = 16;

/// Temperature range in degrees Celsius mapped onto the backlight fade.
/// Adapt to your room temperature for a nicer effect.
pub const TEMPERATURE_RANGE_MIN_VAL: i32 = 18;
pub const TEMPERATURE_RANGE_MAX_VAL: i32 = 31;

pub const LED_BLINK_MS: u32 = 50;
pub const HOLD_MS: u32 = 3000;
pub const LIGHT_SETTLE_MS: u32 = 1000;
pub const LOOP_INTERVAL_MS: u32 = 1000;

pub const GAS_WARMUP_STEPS: u32 = 6;
/// Seconds reported per warm-up step, 3 minutes in total
pub const GAS_WARMUP_REPORTED_SECS: u32 = 30;

#[cfg(not(feature = "quick-warmup"))]
pub const GAS_WARMUP_STEP_MS: u32 = 30_000;
#[cfg(feature = "quick-warmup")]
pub const GAS_WARMUP_STEP_MS: u32 = 300;

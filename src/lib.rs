#![cfg_attr(not(test), no_std)]

//! # grove-weather-station
//! ## A Grove starter kit weather station in Rust
//!
//! Features:
//! - Temperature with min/max tracking, reset by the button
//! - LCD backlight tinted from cool blue to warm orange by temperature
//! - Indicator LEDs blinked on every sample
//! - Light level in lux
//! - Air quality from a TP401 gas sensor
//!
//! The drivers and the cycle only rely on `embedded-hal` traits and
//! [`sensors::AnalogInput`], so everything but [`board`] runs on the host.

#[macro_use]
mod log;

pub mod backlight;
pub mod config;
pub mod display;
pub mod error;
pub mod indicators;
pub mod pause;
pub mod platform;
pub mod range;
pub mod rendering;
pub mod sensors;
pub mod station;

#[cfg(feature = "rp2040")]
pub mod board;

pub use error::Error;
pub use station::{Readings, WeatherStation};

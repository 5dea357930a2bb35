//! LCD line formatting.

use heapless::String;
use ufmt::uwrite;

use crate::config::LCD_COLUMNS;
use crate::error::Error;

/// One line of display memory; the LCD shows the first 16 columns
pub const LINE_CAPACITY: usize = 40;

pub type Line = String<LINE_CAPACITY>;

/// `Temp {value}`, padded to overwrite leftovers from longer values
pub fn temperature_line(celsius: i32) -> Result<Line, Error> {
    let mut line = Line::new();
    uwrite!(&mut line, "Temp {}    ", celsius).map_err(|_| Error::LineOverflow)?;
    Ok(line)
}

pub fn range_line(min: i32, max: i32) -> Result<Line, Error> {
    let mut line = Line::new();
    uwrite!(&mut line, "Min {} Max {}    ", min, max).map_err(|_| Error::LineOverflow)?;
    Ok(line)
}

pub fn lux_line(lux: i32) -> Result<Line, Error> {
    let mut line = Line::new();
    uwrite!(&mut line, "in lux: {}", lux).map_err(|_| Error::LineOverflow)?;
    Ok(line)
}

/// `raw: {raw} ppm: {ppm}` with ppm to two decimals
pub fn gas_line(raw: u16, ppm: f32) -> Result<Line, Error> {
    let mut line = Line::new();
    uwrite!(&mut line, "raw: {} ppm: ", raw).map_err(|_| Error::LineOverflow)?;
    write_hundredths(&mut line, ppm)?;
    Ok(line)
}

/// Cuts `text` to what fits on one LCD row
pub fn fit_row(text: &str) -> &str {
    match text.char_indices().nth(LCD_COLUMNS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// ufmt has no float support, so print fixed point by hand
fn write_hundredths<const N: usize>(line: &mut String<N>, value: f32) -> Result<(), Error> {
    let negative = value < 0.0;
    let hundredths = libm::roundf(libm::fabsf(value) * 100.0) as u32;
    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    if negative && hundredths != 0 {
        line.push('-').map_err(|_| Error::LineOverflow)?;
    }
    let written = if fraction < 10 {
        uwrite!(line, "{}.0{}", whole, fraction)
    } else {
        uwrite!(line, "{}.{}", whole, fraction)
    };
    written.map_err(|_| Error::LineOverflow)
}

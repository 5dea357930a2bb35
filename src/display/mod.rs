//! Character display with an RGB backlight.

mod jhd1313m1;

pub use jhd1313m1::Jhd1313m1;

use crate::error::Error;

/// Backlight color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub trait Display {
    fn clear(&mut self) -> Result<(), Error>;

    /// Moves the cursor; row 0 is the top line
    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Error>;

    /// Writes at the cursor, advancing it
    fn write_str(&mut self, text: &str) -> Result<(), Error>;

    fn set_color(&mut self, color: Rgb) -> Result<(), Error>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn clear(&mut self) -> Result<(), Error> {
        (**self).clear()
    }

    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Error> {
        (**self).set_cursor(row, column)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        (**self).write_str(text)
    }

    fn set_color(&mut self, color: Rgb) -> Result<(), Error> {
        (**self).set_color(color)
    }
}

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::{Display, Rgb};
use crate::config::{LCD_ADDRESS, LCD_RGB_ADDRESS};
use crate::error::Error;

// Control bytes: Co = 1 for a single command, RS = 1 for data
const CONTROL_COMMAND: u8 = 0x80;
const CONTROL_DATA: u8 = 0x40;

const CLEAR_DISPLAY: u8 = 0x01;
const ENTRY_MODE_SET: u8 = 0x04;
const DISPLAY_CONTROL: u8 = 0x08;
const FUNCTION_SET: u8 = 0x20;
const SET_DDRAM_ADDR: u8 = 0x80;

const ENTRY_LEFT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const TWO_LINE: u8 = 0x08;

const SECOND_ROW_OFFSET: u8 = 0x40;

// RGB controller registers
const REG_MODE1: u8 = 0x00;
const REG_MODE2: u8 = 0x01;
const REG_OUTPUT: u8 = 0x08;
const REG_RED: u8 = 0x04;
const REG_GREEN: u8 = 0x03;
const REG_BLUE: u8 = 0x02;
/// All LED drivers under individual PWM control
const OUTPUT_PWM: u8 = 0xAA;

/// Grove RGB backlight LCD: a 16x2 text controller and a backlight
/// controller sharing one I2C bus.
pub struct Jhd1313m1<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C: I2c, D: DelayNs> Jhd1313m1<I2C, D> {
    /// Creates the driver without touching the bus; call [`Self::init`] first
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    pub fn init(&mut self) -> Result<(), Error> {
        // Power-on settle time of the text controller
        self.delay.delay_ms(50);
        self.command(FUNCTION_SET | TWO_LINE)?;
        self.delay.delay_us(100);
        self.command(DISPLAY_CONTROL | DISPLAY_ON)?;
        self.delay.delay_us(100);
        self.clear()?;
        self.command(ENTRY_MODE_SET | ENTRY_LEFT)?;

        self.rgb_register(REG_MODE1, 0x00)?;
        self.rgb_register(REG_MODE2, 0x00)?;
        self.rgb_register(REG_OUTPUT, OUTPUT_PWM)?;
        self.set_color(Rgb::new(255, 255, 255))
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn command(&mut self, command: u8) -> Result<(), Error> {
        self.i2c
            .write(LCD_ADDRESS, &[CONTROL_COMMAND, command])
            .map_err(Error::i2c)
    }

    fn data(&mut self, byte: u8) -> Result<(), Error> {
        self.i2c
            .write(LCD_ADDRESS, &[CONTROL_DATA, byte])
            .map_err(Error::i2c)
    }

    fn rgb_register(&mut self, register: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write(LCD_RGB_ADDRESS, &[register, value])
            .map_err(Error::i2c)
    }
}

impl<I2C: I2c, D: DelayNs> Display for Jhd1313m1<I2C, D> {
    fn clear(&mut self) -> Result<(), Error> {
        self.command(CLEAR_DISPLAY)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, column: u8) -> Result<(), Error> {
        let offset = if row == 0 { 0 } else { SECOND_ROW_OFFSET };
        self.command(SET_DDRAM_ADDR | (offset + column))
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        for byte in text.bytes() {
            self.data(byte)?;
        }
        Ok(())
    }

    fn set_color(&mut self, color: Rgb) -> Result<(), Error> {
        self.rgb_register(REG_RED, color.r)?;
        self.rgb_register(REG_GREEN, color.g)?;
        self.rgb_register(REG_BLUE, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    fn lcd(command: u8) -> Transaction {
        Transaction::write(0x3E, vec![0x80, command])
    }

    fn rgb(register: u8, value: u8) -> Transaction {
        Transaction::write(0x62, vec![register, value])
    }

    #[test]
    fn init_sequence() {
        let expectations = [
            lcd(0x28),
            lcd(0x0C),
            lcd(0x01),
            lcd(0x06),
            rgb(0x00, 0x00),
            rgb(0x01, 0x00),
            rgb(0x08, 0xAA),
            rgb(0x04, 255),
            rgb(0x03, 255),
            rgb(0x02, 255),
        ];
        let mut display = Jhd1313m1::new(Mock::new(&expectations), NoopDelay::new());
        display.init().unwrap();
        display.release().0.done();
    }

    #[test]
    fn cursor_rows() {
        let expectations = [lcd(0x80), lcd(0x80 | 0x40), lcd(0x80 | 0x42)];
        let mut display = Jhd1313m1::new(Mock::new(&expectations), NoopDelay::new());
        display.set_cursor(0, 0).unwrap();
        display.set_cursor(1, 0).unwrap();
        display.set_cursor(1, 2).unwrap();
        display.release().0.done();
    }

    #[test]
    fn text_is_sent_as_data() {
        let expectations = [
            Transaction::write(0x3E, vec![0x40, b'O']),
            Transaction::write(0x3E, vec![0x40, b'k']),
        ];
        let mut display = Jhd1313m1::new(Mock::new(&expectations), NoopDelay::new());
        display.write_str("Ok").unwrap();
        display.release().0.done();
    }

    #[test]
    fn color_goes_to_backlight_controller() {
        let expectations = [rgb(0x04, 127), rgb(0x03, 32), rgb(0x02, 127)];
        let mut display = Jhd1313m1::new(Mock::new(&expectations), NoopDelay::new());
        display.set_color(Rgb::new(127, 32, 127)).unwrap();
        display.release().0.done();
    }

    #[test]
    fn bus_errors_propagate() {
        let expectations = [lcd(0x01).with_error(ErrorKind::Other)];
        let mut display = Jhd1313m1::new(Mock::new(&expectations), NoopDelay::new());
        assert_eq!(display.clear(), Err(Error::I2c(ErrorKind::Other)));
        display.release().0.done();
    }
}

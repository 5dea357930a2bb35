//! Backlight color from temperature: cool blue at the bottom of the range,
//! warm orange at the top.

use crate::config::{TEMPERATURE_RANGE_MAX_VAL, TEMPERATURE_RANGE_MIN_VAL};
use crate::display::Rgb;

/// Position of `celsius` inside the temperature range, clamped to `0.0..=1.0`
pub fn fade(celsius: f32) -> f32 {
    let min = TEMPERATURE_RANGE_MIN_VAL as f32;
    let max = TEMPERATURE_RANGE_MAX_VAL as f32;

    if celsius <= min {
        0.0
    } else if celsius >= max {
        1.0
    } else {
        (celsius - min) / (max - min)
    }
}

/// Fades each component separately, truncating toward zero
pub fn color(fade: f32) -> Rgb {
    Rgb {
        r: (255.0 * fade) as u8,
        g: (64.0 * fade) as u8,
        b: (255.0 * (1.0 - fade)) as u8,
    }
}

pub fn color_for(celsius: i32) -> Rgb {
    color(fade(celsius as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_end_is_blue() {
        assert_eq!(fade(18.0), 0.0);
        assert_eq!(color_for(18), Rgb::new(0, 0, 255));
        assert_eq!(color_for(-40), Rgb::new(0, 0, 255));
    }

    #[test]
    fn warm_end_is_orange() {
        assert_eq!(fade(31.0), 1.0);
        assert_eq!(color_for(31), Rgb::new(255, 64, 0));
        assert_eq!(color_for(45), Rgb::new(255, 64, 0));
    }

    #[test]
    fn midpoint() {
        let mid = fade(24.5);
        assert!((mid - 0.5).abs() < 1e-6);
        assert_eq!(color(mid), Rgb::new(127, 32, 127));
    }

    #[test]
    fn inside_the_range() {
        // 6 / 13 of the way up
        assert_eq!(color_for(24), Rgb::new(117, 29, 137));
    }

    #[test]
    fn monotonic_in_temperature() {
        let mut previous = color_for(10);
        for celsius in 11..40 {
            let current = color_for(celsius);
            assert!(current.r >= previous.r);
            assert!(current.g >= previous.g);
            assert!(current.b <= previous.b);
            previous = current;
        }
    }
}

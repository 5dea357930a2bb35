/// Lowest and highest temperature seen since the last reset.
///
/// Starts at sentinel extremes so the first sample replaces both bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureRange {
    min: i32,
    max: i32,
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
        }
    }
}

impl TemperatureRange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample. A pressed button discards the history and restarts
    /// the range at this sample.
    pub fn record(&mut self, celsius: i32, reset: bool) {
        if reset {
            self.min = celsius;
            self.max = celsius;
        } else {
            self.min = self.min.min(celsius);
            self.max = self.max.max(celsius);
        }
    }

    /// `None` until the first sample
    pub fn bounds(&self) -> Option<(i32, i32)> {
        (self.min <= self.max).then_some((self.min, self.max))
    }

    /// Raw bounds, sentinels included
    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_first_sample() {
        let range = TemperatureRange::new();
        assert_eq!(range.bounds(), None);
        assert_eq!(range.min(), i32::MAX);
        assert_eq!(range.max(), i32::MIN);
    }

    #[test]
    fn tracks_extremes() {
        let samples = [22, 19, 25, 24, 17, 30, 21];
        let mut range = TemperatureRange::new();
        for (seen, &celsius) in samples.iter().enumerate() {
            range.record(celsius, false);
            let so_far = &samples[..=seen];
            let min = *so_far.iter().min().unwrap();
            let max = *so_far.iter().max().unwrap();
            assert_eq!(range.bounds(), Some((min, max)));
            assert!(min <= celsius && celsius <= max);
        }
    }

    #[test]
    fn button_resets_to_current_sample() {
        let mut range = TemperatureRange::new();
        range.record(15, false);
        range.record(30, false);
        range.record(22, true);
        assert_eq!(range.bounds(), Some((22, 22)));
        range.record(24, false);
        assert_eq!(range.bounds(), Some((22, 24)));
    }

    #[test]
    fn first_sample_with_button_pressed() {
        let mut range = TemperatureRange::new();
        range.record(-5, true);
        assert_eq!(range.bounds(), Some((-5, -5)));
    }
}

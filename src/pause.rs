//! Blocking waits.
//!
//! A wait may come back early. That is logged and otherwise ignored: the
//! caller carries on as though the full time had passed.

use embedded_hal::delay::DelayNs;

/// A wait ended before its full duration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interrupted {
    /// Milliseconds that were actually waited
    pub elapsed_ms: u32,
}

pub trait Sleep {
    fn sleep_ms(&mut self, ms: u32) -> Result<(), Interrupted>;
}

/// Hardware delays always run to completion
impl<D: DelayNs> Sleep for D {
    fn sleep_ms(&mut self, ms: u32) -> Result<(), Interrupted> {
        self.delay_ms(ms);
        Ok(())
    }
}

/// Blocks for `ms` milliseconds, logging an interruption instead of retrying
pub fn pause<S: Sleep>(sleeper: &mut S, ms: u32) {
    if let Err(interrupted) = sleeper.sleep_ms(ms) {
        error!(
            "Sleep interrupted: after {} of {} ms",
            interrupted.elapsed_ms, ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlakySleeper {
        requested: [u32; 4],
        calls: usize,
    }

    impl Sleep for FlakySleeper {
        fn sleep_ms(&mut self, ms: u32) -> Result<(), Interrupted> {
            self.requested[self.calls] = ms;
            self.calls += 1;
            if self.calls % 2 == 1 {
                Err(Interrupted { elapsed_ms: ms / 2 })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn interrupted_pause_is_not_retried() {
        let mut sleeper = FlakySleeper {
            requested: [0; 4],
            calls: 0,
        };
        pause(&mut sleeper, 3000);
        pause(&mut sleeper, 50);
        assert_eq!(sleeper.calls, 2);
        assert_eq!(&sleeper.requested[..2], &[3000, 50]);
    }

    #[test]
    fn delay_sleeps_to_completion() {
        let mut delay = embedded_hal_mock::eh1::delay::NoopDelay::new();
        assert_eq!(delay.sleep_ms(1000), Ok(()));
    }
}

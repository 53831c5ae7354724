use crate::clock::Interval;
use log::error;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const SECONDS_PER_DAY: u32 = 86_400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chronometer {
    seconds: u32,
    timer: Interval,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("expected HH:MM:SS, got {0:?}")]
pub struct ParseTimeError(String);

impl Chronometer {
    pub fn new(seconds: u32) -> Self {
        Chronometer {
            seconds: seconds % SECONDS_PER_DAY,
            timer: Interval::new(Duration::from_secs(1)),
        }
    }

    pub fn from_time_or_zero(time: &str) -> Self {
        time.parse().unwrap_or_else(|e: ParseTimeError| {
            error!("Chronometer could not be created: {}", e);
            Self::new(0)
        })
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn toggle_pause(&mut self) {
        self.timer.toggle();
    }

    pub fn set_running(&mut self, running: bool) {
        self.timer.set_running(running);
    }

    pub fn reset(&mut self) {
        self.seconds = 0;
        self.timer.stop();
    }

    pub fn advance(&mut self, dt: Duration) {
        let mut left = dt;
        while let Some(wait) = self.timer.until_next() {
            if wait > left {
                self.timer.elapse(left);
                return;
            }
            self.timer.elapse(wait);
            left -= wait;
            self.timer.rearm();
            self.seconds = (self.seconds + 1) % SECONDS_PER_DAY;
        }
    }
}

impl fmt::Display for Chronometer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = self.seconds / 60 % 60;
        let seconds = self.seconds % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for Chronometer {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());

        let parts: Vec<&str> = s.split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(err());
        };

        let field = |text: &str, max: u32| -> Result<u32, ParseTimeError> {
            if text.len() != 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(err());
            }
            let value: u32 = text.parse().map_err(|_| err())?;
            if value > max {
                return Err(err());
            }
            Ok(value)
        };

        let total = field(*hours, 23)? * 3600 + field(*minutes, 59)? * 60 + field(*seconds, 59)?;
        Ok(Chronometer::new(total))
    }
}

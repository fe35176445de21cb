use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use serde::{Serialize, Serializer};

const HOUR_TO_SEC: u32 = 60 * 60;
const MINUTE_TO_SEC: u32 = 60;

/// Wall clock time of day, stored as seconds since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl Sub<Time> for Time {
    type Output = Duration;

    /// Arrivals earlier than the departure are treated as the next day.
    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Duration(self.0 - rhs.0)
        } else {
            Duration(self.0 + 24 * HOUR_TO_SEC - rhs.0)
        }
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Time {
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * HOUR_TO_SEC + minutes * MINUTE_TO_SEC)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn hour(&self) -> u32 {
        self.0 / HOUR_TO_SEC
    }

    pub const fn minute(&self) -> u32 {
        (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC
    }

    pub fn to_hms_string(&self) -> String {
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", self.hour(), self.minute(), s)
    }

    pub fn to_hm_string(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// `6:30 AM`, `2:20 PM`.
    pub fn to_12h_string(&self) -> String {
        let hour = self.hour() % 24;
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute(), suffix)
    }

    /// Accepts `HH:MM` and `HH:MM:SS`.
    pub fn from_hms(time: &str) -> Option<Self> {
        let mut split = time.trim().split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = match split.next() {
            Some(value) => value.parse().ok()?,
            None => 0,
        };
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self(hours * HOUR_TO_SEC + minutes * MINUTE_TO_SEC + seconds))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration(u32);

impl Display for Duration {
    /// `3h 45m`, `45m`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / HOUR_TO_SEC;
        let minutes = (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC;
        if hours == 0 {
            write!(f, "{minutes}m")
        } else {
            write!(f, "{hours}h {minutes}m")
        }
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Duration {
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * MINUTE_TO_SEC)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * HOUR_TO_SEC)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0 / MINUTE_TO_SEC
    }
}

#[test]
fn parse_unparse_hm() {
    let time = "06:30";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_hms() {
    let time = "12:30:30";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn twelve_hour_clock() {
    assert_eq!(Time::from_hm(6, 30).to_12h_string(), "6:30 AM");
    assert_eq!(Time::from_hm(14, 20).to_12h_string(), "2:20 PM");
    assert_eq!(Time::from_hm(0, 5).to_12h_string(), "12:05 AM");
    assert_eq!(Time::from_hm(12, 0).to_12h_string(), "12:00 PM");
}

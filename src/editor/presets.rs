use chrono::{Duration, Local, NaiveDateTime};
use serde::Deserialize;

use super::range::TimeRange;

/// A quick range offered next to the mask, e.g. "Last 3 hours".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresetRange {
    pub label: String,
    pub hours: u32,
}

impl PresetRange {
    #[must_use]
    pub fn new(label: &str, hours: u32) -> Self {
        Self {
            label: label.to_owned(),
            hours,
        }
    }
}

#[must_use]
pub fn default_presets() -> Vec<PresetRange> {
    vec![
        PresetRange::new("Last hour", 1),
        PresetRange::new("Last 3 hours", 3),
        PresetRange::new("Last 6 hours", 6),
        PresetRange::new("Last 12 hours", 12),
        PresetRange::new("Last 24 hours", 24),
    ]
}

/// Source of "now" for presets.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `now - hours .. now`, keeping real calendar dates.
#[must_use]
pub fn preset_range(hours: u32, clock: &dyn Clock) -> TimeRange {
    let to = clock.now();
    let from = Duration::try_hours(i64::from(hours))
        .and_then(|offset| to.checked_sub_signed(offset))
        .unwrap_or(to);
    TimeRange::new(from, to)
}

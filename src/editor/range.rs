use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Calendar date every mask-derived timestamp is placed on.
const REFERENCE_YEAR: i32 = 1900;
const REFERENCE_MONTH: u32 = 2;
const REFERENCE_DAY: u32 = 1;

#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY)
        .unwrap_or(NaiveDate::MIN)
}

/// The value of the control: a `from` and a `to` instant.
///
/// Only hours and minutes are meaningful. Reversed ranges are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl TimeRange {
    #[must_use]
    pub const fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// Places both clock times on the reference date.
    #[must_use]
    pub fn on_reference_date(from: NaiveTime, to: NaiveTime) -> Self {
        let date = reference_date();
        Self {
            from: date.and_time(from),
            to: date.and_time(to),
        }
    }

    /// Builds a range from hour/minute pairs; an out-of-range hour or minute reads as 0.
    #[must_use]
    pub fn from_hm(from_hours: u32, from_minutes: u32, to_hours: u32, to_minutes: u32) -> Self {
        Self::on_reference_date(
            clock_time_or_zero(from_hours, from_minutes),
            clock_time_or_zero(to_hours, to_minutes),
        )
    }

    #[must_use]
    pub fn from_clock(&self) -> NaiveTime {
        self.from.time()
    }

    #[must_use]
    pub fn to_clock(&self) -> NaiveTime {
        self.to.time()
    }

    /// Hour/minute pairs of both ends, `(from_h, from_m, to_h, to_m)`.
    #[must_use]
    pub fn fields(&self) -> (u32, u32, u32, u32) {
        (
            self.from.hour(),
            self.from.minute(),
            self.to.hour(),
            self.to.minute(),
        )
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from_h, from_m, to_h, to_m) = self.fields();
        write!(f, "{from_h:02}:{from_m:02} - {to_h:02}:{to_m:02}")
    }
}

const HOURS_PER_DAY: u32 = 24;
const MINUTES_PER_HOUR: u32 = 60;

pub(crate) fn clock_time_or_zero(hours: u32, minutes: u32) -> NaiveTime {
    let hours = if hours < HOURS_PER_DAY { hours } else { 0 };
    let minutes = if minutes < MINUTES_PER_HOUR { minutes } else { 0 };
    NaiveTime::from_hms_opt(hours, minutes, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::{TimeRange, reference_date};

    #[test]
    fn from_hm_uses_reference_date() {
        let range = TimeRange::from_hm(23, 45, 8, 30);
        assert_eq!(range.from.date(), reference_date());
        assert_eq!(range.to.date().month(), 2);
        assert_eq!(range.fields(), (23, 45, 8, 30));
    }

    #[test]
    fn from_hm_zeroes_only_the_out_of_range_field() {
        let range = TimeRange::from_hm(29, 10, 12, 75);
        assert_eq!(range.fields(), (0, 10, 12, 0));
        assert_eq!(TimeRange::from_hm(24, 60, 23, 59).fields(), (0, 0, 23, 59));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeRange::from_hm(1, 2, 3, 4).to_string(), "01:02 - 03:04");
    }
}

//! Conversions between [`TimeRange`] and [`MaskBuffer`].
//!
//! Entry is validated digit by digit, but parsing a whole buffer never
//! fails: a field that is still a placeholder (or otherwise unreadable)
//! reads as zero. The buffer is re-parsed after every keystroke, so it
//! has to yield a value even while the user is half way through a field.

use super::buffer::MaskBuffer;
use super::range::TimeRange;

const RANGE_SEPARATOR: char = '-';
const CLOCK_SEPARATOR: char = ':';

/// Renders `range` into mask text, or the placeholder when there is no value.
#[must_use]
pub fn format_range(range: Option<&TimeRange>) -> MaskBuffer {
    match range {
        Some(range) => {
            let (from_h, from_m, to_h, to_m) = range.fields();
            MaskBuffer::from_fields(from_h, from_m, to_h, to_m)
        }
        None => MaskBuffer::placeholder(),
    }
}

/// Reads the buffer back into a range on the reference date.
#[must_use]
pub fn parse_buffer(buffer: &MaskBuffer) -> TimeRange {
    let text = buffer.as_string();
    let mut halves = text.split(RANGE_SEPARATOR);
    let (from_h, from_m) = parse_clock_text(halves.next().unwrap_or_default());
    let (to_h, to_m) = parse_clock_text(halves.next().unwrap_or_default());
    TimeRange::from_hm(from_h, from_m, to_h, to_m)
}

fn parse_clock_text(text: &str) -> (u32, u32) {
    let mut parts = text.split(CLOCK_SEPARATOR);
    let hours = lenient_int(parts.next().unwrap_or_default());
    let minutes = lenient_int(parts.next().unwrap_or_default());
    (hours, minutes)
}

/// Leading decimal digits of `text` after any whitespace, or zero.
fn lenient_int(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed
        .get(..end)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

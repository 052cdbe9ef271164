use super::buffer::MaskBuffer;
use super::slots::{DigitSlot, SlotRole};

/// Highest digit that can start a minutes field.
const MAX_MINUTES_TENS: u8 = 5;
/// Highest digit that can start an hours field.
const MAX_HOURS_TENS: u8 = 2;
/// Highest hours-units digit once the tens digit is 2.
const MAX_HOURS_UNITS_AFTER_TWO: u8 = 3;

/// Outcome of checking a digit against the caret position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reject,
    /// The digit may be written. `coerce` names a neighbouring cell that
    /// must be rewritten first to keep the hour at or below 23.
    Accept { coerce: Option<(usize, u8)> },
}

impl Verdict {
    const ACCEPT: Self = Self::Accept { coerce: None };

    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accept { .. })
    }
}

/// Decides whether `digit` may be typed at `caret`.
///
/// Offsets that are not hour or minute tens/units cells accept any digit;
/// the keystroke processor is responsible for refusing literal offsets.
#[must_use]
pub fn validate_digit(buffer: &MaskBuffer, caret: usize, digit: u8) -> Verdict {
    let Some(slot) = DigitSlot::at(caret) else {
        return Verdict::ACCEPT;
    };
    match slot.role() {
        SlotRole::MinutesTens => {
            if digit > MAX_MINUTES_TENS {
                Verdict::Reject
            } else {
                Verdict::ACCEPT
            }
        }
        SlotRole::HoursTens => {
            if digit > MAX_HOURS_TENS {
                return Verdict::Reject;
            }
            if digit < MAX_HOURS_TENS {
                return Verdict::ACCEPT;
            }
            let units = DigitSlot::hours_units_of(slot.field()).index();
            match buffer.digit_at(units) {
                Some(existing) if existing > MAX_HOURS_UNITS_AFTER_TWO => Verdict::Accept {
                    coerce: Some((units, MAX_HOURS_UNITS_AFTER_TWO)),
                },
                Some(_) | None => Verdict::ACCEPT,
            }
        }
        SlotRole::HoursUnits => {
            let tens = DigitSlot::hours_tens_of(slot.field()).index();
            match buffer.digit_at(tens) {
                Some(existing)
                    if existing >= MAX_HOURS_TENS && digit > MAX_HOURS_UNITS_AFTER_TWO =>
                {
                    Verdict::Reject
                }
                Some(_) | None => Verdict::ACCEPT,
            }
        }
        SlotRole::MinutesUnits => Verdict::ACCEPT,
    }
}

#[cfg(test)]
mod tests {
    use super::{Verdict, validate_digit};
    use crate::editor::buffer::MaskBuffer;
    use crate::error::AppResult;

    fn mask(text: &str) -> AppResult<MaskBuffer> {
        Ok(text.parse()?)
    }

    #[test]
    fn minutes_tens_accepts_zero_to_five() {
        let buffer = MaskBuffer::placeholder();
        for caret in [3, 11] {
            for digit in 0..=5 {
                assert!(validate_digit(&buffer, caret, digit).is_accepted());
            }
            for digit in 6..=9 {
                assert_eq!(validate_digit(&buffer, caret, digit), Verdict::Reject);
            }
        }
    }

    #[test]
    fn hours_tens_accepts_zero_one_two_only() {
        let buffer = MaskBuffer::placeholder();
        for caret in [0, 8] {
            for digit in 0..=2 {
                assert_eq!(
                    validate_digit(&buffer, caret, digit),
                    Verdict::Accept { coerce: None }
                );
            }
            for digit in 3..=9 {
                assert_eq!(validate_digit(&buffer, caret, digit), Verdict::Reject);
            }
        }
    }

    #[test]
    fn hours_tens_two_coerces_large_units() -> AppResult<()> {
        let buffer = mask("19:00 - 07:00")?;
        assert_eq!(
            validate_digit(&buffer, 0, 2),
            Verdict::Accept {
                coerce: Some((1, 3))
            }
        );
        assert_eq!(
            validate_digit(&buffer, 8, 2),
            Verdict::Accept {
                coerce: Some((9, 3))
            }
        );
        assert_eq!(
            validate_digit(&buffer, 0, 1),
            Verdict::Accept { coerce: None }
        );
        let small = mask("13:00 - 02:00")?;
        assert_eq!(
            validate_digit(&small, 0, 2),
            Verdict::Accept { coerce: None }
        );
        Ok(())
    }

    #[test]
    fn hours_units_bounded_after_two() -> AppResult<()> {
        let buffer = mask("2h:mm - 2h:mm")?;
        for caret in [1, 9] {
            assert!(validate_digit(&buffer, caret, 3).is_accepted());
            assert_eq!(validate_digit(&buffer, caret, 4), Verdict::Reject);
        }
        let open = mask("1h:mm - hh:mm")?;
        assert!(validate_digit(&open, 1, 9).is_accepted());
        assert!(validate_digit(&open, 9, 9).is_accepted());
        Ok(())
    }

    #[test]
    fn minutes_units_accept_anything() {
        let buffer = MaskBuffer::placeholder();
        for digit in 0..=9 {
            assert!(validate_digit(&buffer, 4, digit).is_accepted());
            assert!(validate_digit(&buffer, 12, digit).is_accepted());
        }
    }
}

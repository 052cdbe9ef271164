use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

use super::slots::{DigitSlot, MASK_LEN, MASK_TEMPLATE};

/// Fixed-width text of the control.
///
/// Only the eight digit slots are ever written; the separators keep the
/// characters they were created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskBuffer {
    chars: [char; MASK_LEN],
}

impl MaskBuffer {
    /// Buffer holding the `hh:mm - hh:mm` placeholder text.
    #[must_use]
    pub fn placeholder() -> Self {
        let mut chars = [' '; MASK_LEN];
        for (cell, ch) in chars.iter_mut().zip(MASK_TEMPLATE.chars()) {
            *cell = ch;
        }
        Self { chars }
    }

    /// Builds a buffer from the four two-digit fields.
    #[must_use]
    pub fn from_fields(from_hours: u32, from_minutes: u32, to_hours: u32, to_minutes: u32) -> Self {
        let mut buffer = Self::placeholder();
        let values = [from_hours, from_minutes, to_hours, to_minutes];
        let pairs = DigitSlot::ALL.chunks(2).zip(values);
        for (slots, value) in pairs {
            if let [tens, units] = slots {
                let clamped = value.min(99);
                buffer.set_slot(*tens, tens_digit(clamped));
                buffer.set_slot(*units, units_digit(clamped));
            }
        }
        buffer
    }

    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Numeric value at `index` when it holds an entered digit.
    #[must_use]
    pub fn digit_at(&self, index: usize) -> Option<u8> {
        self.char_at(index)
            .and_then(|ch| ch.to_digit(10))
            .and_then(|value| u8::try_from(value).ok())
    }

    /// Writes `digit` into the slot at `index`.
    ///
    /// Returns `false` and leaves the buffer untouched when `index` is a
    /// literal position or `digit` is not a decimal digit.
    pub fn write_digit(&mut self, index: usize, digit: u8) -> bool {
        let Some(slot) = DigitSlot::at(index) else {
            return false;
        };
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return false;
        };
        self.set_slot(slot, ch);
        true
    }

    fn set_slot(&mut self, slot: DigitSlot, ch: char) {
        if let Some(cell) = self.chars.get_mut(slot.index()) {
            *cell = ch;
        }
    }

    #[must_use]
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for MaskBuffer {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for MaskBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for MaskBuffer {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidMask {
            value: value.to_owned(),
        };
        let chars: Vec<char> = value.chars().collect();
        if chars.len() != MASK_LEN {
            return Err(invalid());
        }
        let mut buffer = Self::placeholder();
        for (index, (ch, template)) in chars.iter().zip(MASK_TEMPLATE.chars()).enumerate() {
            match DigitSlot::at(index) {
                Some(slot) => {
                    if !ch.is_ascii_digit() && *ch != slot.role().placeholder() {
                        return Err(invalid());
                    }
                    buffer.set_slot(slot, *ch);
                }
                None => {
                    if *ch != template {
                        return Err(invalid());
                    }
                }
            }
        }
        Ok(buffer)
    }
}

fn tens_digit(value: u32) -> char {
    let tens = value
        .checked_div(10)
        .and_then(|tens| tens.checked_rem(10))
        .unwrap_or(0);
    char::from_digit(tens, 10).unwrap_or('0')
}

fn units_digit(value: u32) -> char {
    char::from_digit(value.checked_rem(10).unwrap_or(0), 10).unwrap_or('0')
}

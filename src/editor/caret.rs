use super::slots::{DigitSlot, LAST_SLOT_INDEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Moves a caret that landed on a separator onto the nearest digit slot in
/// the direction of travel. Offsets past the end settle on the last slot.
#[must_use]
pub fn adjust_caret(position: usize, direction: Direction) -> usize {
    let from_minutes_tens = DigitSlot::FromMinutesTens.index();
    let from_minutes_units = DigitSlot::FromMinutesUnits.index();
    let to_hours_tens = DigitSlot::ToHoursTens.index();
    let to_minutes_tens = DigitSlot::ToMinutesTens.index();
    let from_colon = DigitSlot::FromHoursUnits.index().saturating_add(1);
    let to_colon = DigitSlot::ToHoursUnits.index().saturating_add(1);

    let mut position = position;
    if position == from_colon {
        position = match direction {
            Direction::Forward => from_minutes_tens,
            Direction::Reverse => DigitSlot::FromHoursUnits.index(),
        };
    }
    if position > from_minutes_units && position < to_hours_tens {
        position = match direction {
            Direction::Forward => to_hours_tens,
            Direction::Reverse => from_minutes_units,
        };
    }
    if position == to_colon {
        position = match direction {
            Direction::Forward => to_minutes_tens,
            Direction::Reverse => DigitSlot::ToHoursUnits.index(),
        };
    }
    position.min(LAST_SLOT_INDEX)
}

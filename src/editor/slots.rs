//! Mask topology: which buffer offsets are digit slots and what role each plays.

/// Text of an empty mask.
pub const MASK_TEMPLATE: &str = "hh:mm - hh:mm";
/// Number of characters in the mask.
pub const MASK_LEN: usize = 13;
/// Last offset the caret may rest on.
pub const LAST_SLOT_INDEX: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    From,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    HoursTens,
    HoursUnits,
    MinutesTens,
    MinutesUnits,
}

impl SlotRole {
    /// Placeholder shown while the slot is still empty.
    #[must_use]
    pub const fn placeholder(self) -> char {
        match self {
            Self::HoursTens | Self::HoursUnits => 'h',
            Self::MinutesTens | Self::MinutesUnits => 'm',
        }
    }
}

/// The eight mutable cells of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitSlot {
    FromHoursTens,
    FromHoursUnits,
    FromMinutesTens,
    FromMinutesUnits,
    ToHoursTens,
    ToHoursUnits,
    ToMinutesTens,
    ToMinutesUnits,
}

impl DigitSlot {
    pub const ALL: [Self; 8] = [
        Self::FromHoursTens,
        Self::FromHoursUnits,
        Self::FromMinutesTens,
        Self::FromMinutesUnits,
        Self::ToHoursTens,
        Self::ToHoursUnits,
        Self::ToMinutesTens,
        Self::ToMinutesUnits,
    ];

    /// Buffer offset of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FromHoursTens => 0,
            Self::FromHoursUnits => 1,
            Self::FromMinutesTens => 3,
            Self::FromMinutesUnits => 4,
            Self::ToHoursTens => 8,
            Self::ToHoursUnits => 9,
            Self::ToMinutesTens => 11,
            Self::ToMinutesUnits => 12,
        }
    }

    /// Slot stored at `index`, or `None` for literal and out-of-range offsets.
    #[must_use]
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.index() == index)
    }

    #[must_use]
    pub const fn role(self) -> SlotRole {
        match self {
            Self::FromHoursTens | Self::ToHoursTens => SlotRole::HoursTens,
            Self::FromHoursUnits | Self::ToHoursUnits => SlotRole::HoursUnits,
            Self::FromMinutesTens | Self::ToMinutesTens => SlotRole::MinutesTens,
            Self::FromMinutesUnits | Self::ToMinutesUnits => SlotRole::MinutesUnits,
        }
    }

    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::FromHoursTens
            | Self::FromHoursUnits
            | Self::FromMinutesTens
            | Self::FromMinutesUnits => Field::From,
            Self::ToHoursTens | Self::ToHoursUnits | Self::ToMinutesTens | Self::ToMinutesUnits => {
                Field::To
            }
        }
    }

    /// The units slot paired with an hours-tens slot.
    #[must_use]
    pub const fn hours_units_of(field: Field) -> Self {
        match field {
            Field::From => Self::FromHoursUnits,
            Field::To => Self::ToHoursUnits,
        }
    }

    /// The tens slot paired with an hours-units slot.
    #[must_use]
    pub const fn hours_tens_of(field: Field) -> Self {
        match field {
            Field::From => Self::FromHoursTens,
            Field::To => Self::ToHoursTens,
        }
    }
}

#[must_use]
pub fn is_digit_slot(index: usize) -> bool {
    DigitSlot::at(index).is_some()
}

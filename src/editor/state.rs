use super::buffer::MaskBuffer;
use super::caret::{Direction, adjust_caret};
use super::slots::MASK_LEN;
use super::validate::{Verdict, validate_digit};

/// Key identifiers the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Digit(u8),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Enter,
    Other,
}

impl EditorKey {
    /// Maps a DOM-style key name (`"7"`, `"Backspace"`, `"ArrowLeft"`, ...).
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Enter" => Self::Enter,
            other => Self::from_char_name(other),
        }
    }

    fn from_char_name(name: &str) -> Self {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            (Some(_), Some(_)) | (None, _) => Self::Other,
        }
    }

    #[must_use]
    pub fn from_char(ch: char) -> Self {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map_or(Self::Other, Self::Digit)
    }

    /// Keys that move the caret backwards are allowed one step past the end.
    #[must_use]
    pub const fn retreats(self) -> bool {
        matches!(self, Self::Backspace | Self::ArrowLeft)
    }
}

/// What a keystroke did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Written,
    Moved,
    Rejected,
    Ignored,
}

/// Buffer plus caret; the whole persistent state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EditorState {
    pub buffer: MaskBuffer,
    pub caret: usize,
}

impl EditorState {
    #[must_use]
    pub const fn new(buffer: MaskBuffer) -> Self {
        Self { buffer, caret: 0 }
    }

    /// One-character highlight at the caret, as `(start, end)` offsets.
    #[must_use]
    pub const fn selection(&self) -> (usize, usize) {
        (self.caret, self.caret.saturating_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: EditorState,
    pub outcome: KeyOutcome,
}

/// Applies one keystroke and settles the caret on a digit slot.
#[must_use]
pub fn apply_key(state: EditorState, key: EditorKey) -> Transition {
    let limit = if key.retreats() {
        MASK_LEN.saturating_add(1)
    } else {
        MASK_LEN
    };
    let mut next = state;
    let mut direction = Direction::Forward;
    let mut outcome = KeyOutcome::Ignored;

    if state.caret < limit {
        match key {
            EditorKey::Digit(digit) => {
                outcome = write_validated(&mut next, digit);
            }
            EditorKey::Backspace => {
                if next.caret > 0 {
                    direction = Direction::Reverse;
                    next.caret = adjust_caret(next.caret.saturating_sub(1), direction);
                    next.buffer.write_digit(next.caret, 0);
                    outcome = KeyOutcome::Written;
                }
            }
            EditorKey::ArrowLeft => {
                if next.caret > 0 {
                    direction = Direction::Reverse;
                    next.caret = next.caret.saturating_sub(1);
                    outcome = KeyOutcome::Moved;
                }
            }
            EditorKey::Delete => {
                outcome = if next.buffer.write_digit(next.caret, 0) {
                    KeyOutcome::Written
                } else {
                    KeyOutcome::Moved
                };
                next.caret = next.caret.saturating_add(1);
            }
            EditorKey::ArrowRight | EditorKey::Enter => {
                next.caret = next.caret.saturating_add(1);
                outcome = KeyOutcome::Moved;
            }
            EditorKey::Other => {}
        }
    }

    next.caret = adjust_caret(next.caret, direction);
    Transition {
        state: next,
        outcome,
    }
}

fn write_validated(state: &mut EditorState, digit: u8) -> KeyOutcome {
    match validate_digit(&state.buffer, state.caret, digit) {
        Verdict::Accept { coerce } => {
            let mut buffer = state.buffer;
            if let Some((index, value)) = coerce {
                buffer.write_digit(index, value);
            }
            if !buffer.write_digit(state.caret, digit) {
                return KeyOutcome::Rejected;
            }
            state.buffer = buffer;
            state.caret = state.caret.saturating_add(1);
            KeyOutcome::Written
        }
        Verdict::Reject => KeyOutcome::Rejected,
    }
}

/// Moves the caret to a clicked offset without any adjustment.
#[must_use]
pub const fn place_caret(state: EditorState, offset: usize) -> EditorState {
    EditorState {
        buffer: state.buffer,
        caret: offset,
    }
}

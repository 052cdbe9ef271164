//! Entry points for the `fuzz/` targets.
use crate::args::KeyScript;
use crate::args::parsers::parse_key_script;
use crate::editor::{EditorKey, EditorState, MASK_LEN, MaskBuffer, apply_key, place_caret};
use crate::error::{AppError, AppResult};

/// One decoded fuzz input step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzStep {
    Key(EditorKey),
    Click(usize),
}

/// Maps a fuzz byte to a keystroke or, when the low nibble is 15, a click
/// at the offset held in the high nibble.
#[must_use]
pub fn step_from_byte(byte: u8) -> FuzzStep {
    let low = byte & 0x0f;
    match low {
        0..=9 => FuzzStep::Key(EditorKey::Digit(low)),
        10 => FuzzStep::Key(EditorKey::Backspace),
        11 => FuzzStep::Key(EditorKey::Delete),
        12 => FuzzStep::Key(EditorKey::ArrowLeft),
        13 => FuzzStep::Key(EditorKey::ArrowRight),
        14 => FuzzStep::Key(EditorKey::Enter),
        _ => FuzzStep::Click(usize::from(byte >> 4).min(MASK_LEN)),
    }
}

/// Replays `data` as keystrokes and clicks, returning the state after each step.
#[must_use]
pub fn replay_bytes(data: &[u8]) -> Vec<EditorState> {
    let mut state = EditorState::default();
    let mut states = Vec::with_capacity(data.len());
    for byte in data {
        state = match step_from_byte(*byte) {
            FuzzStep::Key(key) => apply_key(state, key).state,
            FuzzStep::Click(offset) => place_caret(state, offset),
        };
        states.push(state);
    }
    states
}

/// Parses a mask string.
///
/// # Errors
///
/// Returns an error when the text is not shaped like `hh:mm - hh:mm`.
pub fn parse_mask_input(input: &str) -> AppResult<MaskBuffer> {
    input.parse::<MaskBuffer>().map_err(AppError::from)
}

/// Parses a `--keys` script.
///
/// # Errors
///
/// Returns an error when a token is not a known key.
pub fn parse_key_script_input(input: &str) -> AppResult<KeyScript> {
    parse_key_script(input).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::{FuzzStep, replay_bytes, step_from_byte};
    use crate::editor::{EditorKey, MASK_LEN};

    #[test]
    fn bytes_decode_to_keys_and_clamped_clicks() {
        assert_eq!(step_from_byte(0x07), FuzzStep::Key(EditorKey::Digit(7)));
        assert_eq!(step_from_byte(0x1e), FuzzStep::Key(EditorKey::Enter));
        assert_eq!(step_from_byte(0x5f), FuzzStep::Click(5));
        assert_eq!(step_from_byte(0xff), FuzzStep::Click(MASK_LEN));
    }

    #[test]
    fn replay_types_digits_and_keeps_clicks_raw() {
        let states = replay_bytes(&[0x02, 0x03, 0x6f]);
        assert_eq!(states.len(), 3);
        assert_eq!(
            states.get(1).map(|state| state.buffer.as_string()),
            Some("23:mm - hh:mm".to_owned())
        );
        assert_eq!(states.get(2).map(|state| state.caret), Some(6));
    }
}

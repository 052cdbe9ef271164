use chrono::NaiveTime;

use super::types::{KeyScript, KeyToken};
use crate::editor::EditorKey;
use crate::error::{AppError, AppResult, ValidationError};

const CLICK_PREFIX: &str = "click:";

pub(crate) fn parse_clock_time(s: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_err| {
        ValidationError::InvalidClockTime {
            value: s.to_owned(),
        }
    })
}

pub(crate) fn parse_preset_hours(s: &str) -> Result<u32, ValidationError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_err| ValidationError::InvalidPresetHours {
            value: s.to_owned(),
        })
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Splits a script on commas and whitespace. A run of digits types each digit.
pub(crate) fn parse_key_script(s: &str) -> Result<KeyScript, ValidationError> {
    let mut tokens = Vec::new();
    for raw in s
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
    {
        if raw.chars().all(|ch| ch.is_ascii_digit()) {
            tokens.extend(raw.chars().map(|ch| KeyToken::Key(EditorKey::from_char(ch))));
            continue;
        }
        tokens.push(parse_key_token(raw)?);
    }
    Ok(KeyScript::new(tokens))
}

pub(crate) fn parse_key_token(raw: &str) -> Result<KeyToken, ValidationError> {
    let lowered = raw.to_ascii_lowercase();
    if let Some(offset) = lowered.strip_prefix(CLICK_PREFIX) {
        let offset = offset
            .parse::<usize>()
            .map_err(|err| ValidationError::InvalidClickOffset {
                value: raw.to_owned(),
                source: err,
            })?;
        return Ok(KeyToken::Click(offset));
    }
    let key = match lowered.as_str() {
        "backspace" | "bs" => EditorKey::Backspace,
        "delete" | "del" => EditorKey::Delete,
        "left" | "arrowleft" => EditorKey::ArrowLeft,
        "right" | "arrowright" => EditorKey::ArrowRight,
        "enter" => EditorKey::Enter,
        _ => {
            return Err(ValidationError::InvalidKeyToken {
                value: raw.to_owned(),
            });
        }
    };
    Ok(KeyToken::Key(key))
}

use super::parsers::{parse_bool_env, parse_clock_time, parse_key_script, parse_key_token};
use super::test_support::parse_test_args;
use super::{KeyToken, OutputFormat};
use crate::editor::EditorKey;
use crate::error::{AppError, AppResult};

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["rangemask"])?;
    let checks = [
        (args.from.is_none(), "Expected from to be None"),
        (args.to.is_none(), "Expected to to be None"),
        (args.last_hours.is_none(), "Expected last_hours to be None"),
        (args.keys.is_none(), "Expected keys to be None"),
        (
            args.output_format == OutputFormat::Text,
            "Expected text output",
        ),
        (!args.no_ui, "Expected no_ui to be false"),
        (!args.verbose, "Expected verbose to be false"),
        (args.config.is_none(), "Expected config to be None"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_initial_range_and_format() -> AppResult<()> {
    let args = parse_test_args([
        "rangemask",
        "--from",
        "09:30",
        "--to",
        "17:05",
        "--output-format",
        "JSON",
    ])?;
    let from = parse_clock_time("09:30")?;
    let to = parse_clock_time("17:05")?;
    if args.from != Some(from) || args.to != Some(to) {
        return Err(AppError::validation("Unexpected initial range"));
    }
    if args.output_format != OutputFormat::Json {
        return Err(AppError::validation("Expected json output"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_invalid_clock_time() -> AppResult<()> {
    for value in ["24:00", "12:60", "noon", "7"] {
        if parse_test_args(["rangemask", "--from", value, "--to", "10:00"]).is_ok() {
            return Err(AppError::validation(format!("'{value}' should be rejected")));
        }
    }
    Ok(())
}

#[test]
fn parse_args_last_conflicts_with_explicit_range() {
    let result = parse_test_args(["rangemask", "--last", "3", "--from", "10:00"]);
    assert!(result.is_err());
    let ok = parse_test_args(["rangemask", "--last", "3"]);
    assert!(matches!(ok, Ok(args) if args.last_hours == Some(3)));
}

#[test]
fn key_script_expands_digit_runs() -> AppResult<()> {
    let script = parse_key_script("0930, Right,1715 click:4 Backspace")?;
    let expected = [
        KeyToken::Key(EditorKey::Digit(0)),
        KeyToken::Key(EditorKey::Digit(9)),
        KeyToken::Key(EditorKey::Digit(3)),
        KeyToken::Key(EditorKey::Digit(0)),
        KeyToken::Key(EditorKey::ArrowRight),
        KeyToken::Key(EditorKey::Digit(1)),
        KeyToken::Key(EditorKey::Digit(7)),
        KeyToken::Key(EditorKey::Digit(1)),
        KeyToken::Key(EditorKey::Digit(5)),
        KeyToken::Click(4),
        KeyToken::Key(EditorKey::Backspace),
    ];
    if script.tokens() != expected {
        return Err(AppError::validation(format!(
            "Unexpected tokens: {:?}",
            script.tokens()
        )));
    }
    Ok(())
}

#[test]
fn key_tokens_are_case_insensitive() -> AppResult<()> {
    for (raw, key) in [
        ("DELETE", EditorKey::Delete),
        ("ArrowLeft", EditorKey::ArrowLeft),
        ("enter", EditorKey::Enter),
        ("bs", EditorKey::Backspace),
    ] {
        if parse_key_token(raw)? != KeyToken::Key(key) {
            return Err(AppError::validation(format!("Unexpected token for {raw}")));
        }
    }
    Ok(())
}

#[test]
fn key_tokens_reject_unknown_names_and_bad_offsets() {
    assert!(parse_key_token("Escape").is_err());
    assert!(parse_key_token("click:").is_err());
    assert!(parse_key_token("click:-1").is_err());
    assert!(parse_key_script("12 Tab").is_err());
}

#[test]
fn bool_env_values() -> AppResult<()> {
    if !parse_bool_env("yes")? || parse_bool_env("off")? {
        return Err(AppError::validation("Unexpected boolean parse"));
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected invalid boolean"));
    }
    Ok(())
}

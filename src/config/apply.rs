use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{RangeArgs, parse_clock_time};
use crate::editor::{PresetRange, default_presets};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line win.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut RangeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    let range_on_cli =
        is_cli(matches, "from") || is_cli(matches, "to") || is_cli(matches, "last_hours");
    match (config.from.as_deref(), config.to.as_deref()) {
        (Some(from), Some(to)) => {
            if !range_on_cli {
                args.from = Some(parse_config_time(from, "from")?);
                args.to = Some(parse_config_time(to, "to")?);
            }
        }
        (None, None) => {}
        (Some(_), None) | (None, Some(_)) => {
            return Err(AppError::config(ConfigError::IncompleteRange));
        }
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

/// Quick ranges from the config, or the built-in list.
///
/// # Errors
///
/// Returns an error when a configured preset has an empty label.
pub fn resolve_presets(config: Option<&ConfigFile>) -> AppResult<Vec<PresetRange>> {
    let Some(presets) = config.and_then(|config| config.presets.as_ref()) else {
        return Ok(default_presets());
    };
    for (index, preset) in presets.iter().enumerate() {
        if preset.label.trim().is_empty() {
            return Err(AppError::config(ConfigError::InvalidPreset {
                index,
                source: ValidationError::EmptyPresetLabel,
            }));
        }
    }
    Ok(presets.clone())
}

fn parse_config_time(value: &str, field: &'static str) -> AppResult<chrono::NaiveTime> {
    parse_clock_time(value)
        .map_err(|err| AppError::config(ConfigError::InvalidClockTime { field, source: err }))
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

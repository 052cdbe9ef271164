use chrono::NaiveTime;
use clap::Parser;

use super::parsers::{parse_bool_env, parse_clock_time, parse_key_script, parse_preset_hours};
use super::types::{KeyScript, OutputFormat};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Edit a time-of-day range in a masked 'hh:mm - hh:mm' field and print the result."
)]
pub struct RangeArgs {
    /// Initial range start (HH:MM); requires --to
    #[arg(long, value_parser = parse_clock_time)]
    pub from: Option<NaiveTime>,

    /// Initial range end (HH:MM); requires --from
    #[arg(long, value_parser = parse_clock_time)]
    pub to: Option<NaiveTime>,

    /// Start from the quick range "last N hours" ending now
    #[arg(long = "last", value_parser = parse_preset_hours, conflicts_with_all = ["from", "to"])]
    pub last_hours: Option<u32>,

    /// Apply keystrokes without a UI, e.g. "0930,Right,1715" or "click:8 2 Backspace"
    #[arg(long = "keys", value_parser = parse_key_script)]
    pub keys: Option<KeyScript>,

    /// Output format for the final range
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./rangemask.toml or ./rangemask.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Skip the interactive editor and print the initial range
    #[arg(long = "no-ui")]
    pub no_ui: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by RANGEMASK_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

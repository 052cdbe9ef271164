use serde::Deserialize;

use crate::args::OutputFormat;
use crate::editor::PresetRange;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Initial range start, `HH:MM`.
    pub from: Option<String>,
    /// Initial range end, `HH:MM`.
    pub to: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub no_ui: Option<bool>,
    pub no_color: Option<bool>,
    pub verbose: Option<bool>,
    /// Replaces the built-in quick ranges when present.
    pub presets: Option<Vec<PresetRange>>,
}

use crate::editor::{PresetRange, RangeEditor, TimeRange};

/// Snapshot of everything a frame needs.
#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub text: String,
    pub caret: usize,
    pub value: Option<TimeRange>,
    pub presets: Vec<PresetRange>,
    pub presets_expanded: bool,
    pub selected_preset: usize,
    pub no_color: bool,
}

impl UiRenderData {
    #[must_use]
    pub fn from_editor(
        editor: &RangeEditor,
        presets: &[PresetRange],
        selected_preset: usize,
        no_color: bool,
    ) -> Self {
        Self {
            text: editor.text(),
            caret: editor.caret(),
            value: editor.value(),
            presets: presets.to_vec(),
            presets_expanded: editor.presets_expanded(),
            selected_preset,
            no_color,
        }
    }
}

use crate::editor::{Clock, PresetRange, RangeEditor};

/// Editor plus the host-side state around it.
pub(crate) struct Session {
    pub(crate) editor: RangeEditor,
    pub(crate) presets: Vec<PresetRange>,
    pub(crate) selected_preset: usize,
}

impl Session {
    pub(crate) const fn new(editor: RangeEditor, presets: Vec<PresetRange>) -> Self {
        Self {
            editor,
            presets,
            selected_preset: 0,
        }
    }

    pub(crate) fn select_next_preset(&mut self) {
        let last = self.presets.len().saturating_sub(1);
        self.selected_preset = self.selected_preset.saturating_add(1).min(last);
    }

    pub(crate) const fn select_previous_preset(&mut self) {
        self.selected_preset = self.selected_preset.saturating_sub(1);
    }

    /// Applies the highlighted quick range, if any.
    pub(crate) fn apply_selected_preset(&mut self, clock: &dyn Clock) {
        if let Some(preset) = self.presets.get(self.selected_preset) {
            self.editor.select_preset(preset, clock);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Session;
    use crate::editor::{FixedClock, RangeEditor, default_presets};

    #[test]
    fn preset_selection_is_clamped() {
        let mut session = Session::new(RangeEditor::new(), default_presets());
        session.select_previous_preset();
        assert_eq!(session.selected_preset, 0);
        for _ in 0..10 {
            session.select_next_preset();
        }
        assert_eq!(session.selected_preset, 4);
    }

    #[test]
    fn apply_selected_preset_uses_its_hours() -> Result<(), String> {
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|date| date.and_hms_opt(14, 0, 0))
            .ok_or("bad fixture")?;
        let mut session = Session::new(RangeEditor::new(), default_presets());
        session.select_next_preset();
        session.apply_selected_preset(&FixedClock(now));
        if session.editor.text() != "11:00 - 14:00" {
            return Err(format!("unexpected text {}", session.editor.text()));
        }
        Ok(())
    }

    #[test]
    fn apply_without_presets_is_a_no_op() {
        let mut session = Session::new(RangeEditor::new(), Vec::new());
        session.select_next_preset();
        session.apply_selected_preset(&FixedClock(chrono::NaiveDateTime::MIN));
        assert_eq!(session.editor.text(), "hh:mm - hh:mm");
        assert!(session.editor.value().is_none());
    }
}

use super::format::{format_range, parse_buffer};
use super::presets::{Clock, PresetRange, preset_range};
use super::range::TimeRange;
use super::state::{EditorKey, EditorState, KeyOutcome, apply_key, place_caret};

type ChangeObserver = Box<dyn FnMut(&TimeRange)>;
type TouchObserver = Box<dyn FnMut()>;

/// Masked `hh:mm - hh:mm` editor with its published value and observers.
///
/// Every keystroke re-parses the buffer and publishes the resulting
/// [`TimeRange`] to the subscribers registered with [`RangeEditor::subscribe`].
/// Touch observers fire once, on the first user interaction.
pub struct RangeEditor {
    state: EditorState,
    value: Option<TimeRange>,
    change_observers: Vec<ChangeObserver>,
    touch_observers: Vec<TouchObserver>,
    touched: bool,
    presets_expanded: bool,
}

impl Default for RangeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeEditor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: EditorState::default(),
            value: None,
            change_observers: Vec::new(),
            touch_observers: Vec::new(),
            touched: false,
            presets_expanded: false,
        }
    }

    #[must_use]
    pub fn with_value(range: TimeRange) -> Self {
        let mut editor = Self::new();
        editor.state = EditorState::new(format_range(Some(&range)));
        editor.value = Some(range);
        editor
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&TimeRange) + 'static,
    {
        self.change_observers.push(Box::new(observer));
    }

    pub fn on_touched<F>(&mut self, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.touch_observers.push(Box::new(observer));
    }

    /// Replaces buffer, caret and value with `range`. `None` is ignored.
    pub fn write_value(&mut self, range: Option<TimeRange>) {
        let Some(range) = range else {
            return;
        };
        tracing::debug!("Value written: {}", range);
        self.state = EditorState::new(format_range(Some(&range)));
        self.publish(range);
    }

    pub fn handle_key(&mut self, key: EditorKey) -> KeyOutcome {
        self.mark_touched();
        let before = self.state.caret;
        let transition = apply_key(self.state, key);
        self.state = transition.state;
        tracing::debug!(
            "Pressed {:?} at {}: {:?}, caret now {}",
            key,
            before,
            transition.outcome,
            self.state.caret
        );
        self.publish(parse_buffer(&self.state.buffer));
        transition.outcome
    }

    /// Places the caret at the clicked text offset as-is.
    pub fn handle_click(&mut self, selection_start: usize) {
        self.mark_touched();
        self.state = place_caret(self.state, selection_start);
        tracing::debug!("Clicked at {}", selection_start);
    }

    /// Overwrites the value with `now - hours .. now` and closes the preset panel.
    pub fn apply_preset(&mut self, hours: u32, clock: &dyn Clock) -> TimeRange {
        self.mark_touched();
        let range = preset_range(hours, clock);
        tracing::debug!("Preset {}h applied: {}", hours, range);
        self.state.buffer = format_range(Some(&range));
        self.presets_expanded = false;
        self.publish(range);
        range
    }

    pub fn select_preset(&mut self, preset: &PresetRange, clock: &dyn Clock) -> TimeRange {
        self.apply_preset(preset.hours, clock)
    }

    pub const fn toggle_presets(&mut self) {
        self.presets_expanded = !self.presets_expanded;
    }

    #[must_use]
    pub const fn presets_expanded(&self) -> bool {
        self.presets_expanded
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.state.buffer.as_string()
    }

    #[must_use]
    pub const fn caret(&self) -> usize {
        self.state.caret
    }

    #[must_use]
    pub const fn selection(&self) -> (usize, usize) {
        self.state.selection()
    }

    #[must_use]
    pub const fn value(&self) -> Option<TimeRange> {
        self.value
    }

    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    fn publish(&mut self, range: TimeRange) {
        self.value = Some(range);
        for observer in &mut self.change_observers {
            observer(&range);
        }
    }

    fn mark_touched(&mut self) {
        if self.touched {
            return;
        }
        self.touched = true;
        for observer in &mut self.touch_observers {
            observer();
        }
    }
}

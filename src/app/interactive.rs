use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::editor::{Clock, EditorKey};
use crate::error::AppResult;
use crate::ui::model::UiRenderData;
use crate::ui::render::{TerminalGuard, Ui, UiActions, click_offset};

use super::session::Session;

/// What a key press means to the host, before the editor sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostAction {
    Exit,
    TogglePresets,
    PresetUp,
    PresetDown,
    PresetApply,
    Edit(EditorKey),
}

pub(crate) fn resolve_action(key: KeyEvent, presets_expanded: bool) -> HostAction {
    if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
        return HostAction::Exit;
    }
    if matches!(key.code, KeyCode::Tab) {
        return HostAction::TogglePresets;
    }
    if presets_expanded {
        if matches!(key.code, KeyCode::Esc) {
            return HostAction::TogglePresets;
        }
        if matches!(key.code, KeyCode::Up) {
            return HostAction::PresetUp;
        }
        if matches!(key.code, KeyCode::Down) {
            return HostAction::PresetDown;
        }
        if matches!(key.code, KeyCode::Enter) {
            return HostAction::PresetApply;
        }
    }
    if matches!(key.code, KeyCode::Esc) {
        return HostAction::Exit;
    }
    HostAction::Edit(editor_key(key.code))
}

pub(crate) fn editor_key(code: KeyCode) -> EditorKey {
    if let KeyCode::Char(ch) = code {
        return EditorKey::from_char(ch);
    }
    if matches!(code, KeyCode::Backspace) {
        EditorKey::Backspace
    } else if matches!(code, KeyCode::Delete) {
        EditorKey::Delete
    } else if matches!(code, KeyCode::Left) {
        EditorKey::ArrowLeft
    } else if matches!(code, KeyCode::Right) {
        EditorKey::ArrowRight
    } else if matches!(code, KeyCode::Enter) {
        EditorKey::Enter
    } else {
        EditorKey::Other
    }
}

/// Returns `false` once the session should end.
pub(crate) fn apply_action(session: &mut Session, action: HostAction, clock: &dyn Clock) -> bool {
    match action {
        HostAction::Exit => return false,
        HostAction::TogglePresets => session.editor.toggle_presets(),
        HostAction::PresetUp => session.select_previous_preset(),
        HostAction::PresetDown => session.select_next_preset(),
        HostAction::PresetApply => session.apply_selected_preset(clock),
        HostAction::Edit(key) => {
            session.editor.handle_key(key);
        }
    }
    true
}

fn handle_click(session: &mut Session, area: Rect, column: u16, row: u16) {
    if let Some(offset) = click_offset(area, column, row) {
        session.editor.handle_click(offset);
    }
}

/// Runs the full-screen editor until Esc or Ctrl-C.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or read.
pub(crate) fn run_interactive(
    session: &mut Session,
    no_color: bool,
    clock: &dyn Clock,
) -> AppResult<()> {
    let mut terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;

    loop {
        let data = UiRenderData::from_editor(
            &session.editor,
            &session.presets,
            session.selected_preset,
            no_color,
        );
        Ui::render(&mut terminal, &data);

        let event = event::read()?;
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            let action = resolve_action(key, session.editor.presets_expanded());
            if !apply_action(session, action, clock) {
                break;
            }
        } else if let Event::Mouse(mouse) = event
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
        {
            let area = terminal.size()?;
            handle_click(session, area, mouse.column, mouse.row);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use super::{HostAction, apply_action, editor_key, handle_click, resolve_action};
    use crate::app::Session;
    use crate::editor::{EditorKey, FixedClock, RangeEditor, TimeRange, default_presets};
    use crate::ui::render::frame_layout;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_map_to_editor_keys() {
        assert_eq!(editor_key(KeyCode::Char('4')), EditorKey::Digit(4));
        assert_eq!(editor_key(KeyCode::Char('x')), EditorKey::Other);
        assert_eq!(editor_key(KeyCode::Left), EditorKey::ArrowLeft);
        assert_eq!(editor_key(KeyCode::Delete), EditorKey::Delete);
        assert_eq!(editor_key(KeyCode::Home), EditorKey::Other);
    }

    #[test]
    fn host_keys_depend_on_preset_panel() {
        assert_eq!(resolve_action(key(KeyCode::Esc), false), HostAction::Exit);
        assert_eq!(
            resolve_action(key(KeyCode::Esc), true),
            HostAction::TogglePresets
        );
        assert_eq!(
            resolve_action(key(KeyCode::Enter), false),
            HostAction::Edit(EditorKey::Enter)
        );
        assert_eq!(
            resolve_action(key(KeyCode::Enter), true),
            HostAction::PresetApply
        );
        assert_eq!(
            resolve_action(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                false
            ),
            HostAction::Exit
        );
    }

    #[test]
    fn preset_flow_applies_and_closes_panel() -> Result<(), String> {
        let now = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(14, 0, 0))
            .ok_or("bad fixture")?;
        let clock = FixedClock(now);
        let mut session = Session::new(RangeEditor::new(), default_presets());
        for action in [
            HostAction::TogglePresets,
            HostAction::PresetDown,
            HostAction::PresetDown,
            HostAction::PresetApply,
        ] {
            if !apply_action(&mut session, action, &clock) {
                return Err("session ended early".to_owned());
            }
        }
        if session.editor.text() != "08:00 - 14:00" || session.editor.presets_expanded() {
            return Err(format!("unexpected editor text {}", session.editor.text()));
        }
        if apply_action(&mut session, HostAction::Exit, &clock) {
            return Err("exit should end the session".to_owned());
        }
        Ok(())
    }

    #[test]
    fn mouse_click_moves_caret() -> Result<(), String> {
        let area = Rect::new(0, 0, 80, 24);
        let layout = frame_layout(area).ok_or("no layout")?;
        let mut session = Session::new(
            RangeEditor::with_value(TimeRange::from_hm(1, 2, 3, 4)),
            Vec::new(),
        );
        handle_click(
            &mut session,
            area,
            layout.mask.x.saturating_add(9),
            layout.mask.y,
        );
        if session.editor.caret() != 9 {
            return Err(format!("unexpected caret {}", session.editor.caret()));
        }
        handle_click(&mut session, area, 0, 0);
        if session.editor.caret() != 9 {
            return Err("click outside the mask should be ignored".to_owned());
        }
        Ok(())
    }
}

use crate::args::{KeyScript, KeyToken};

use super::session::Session;

/// Feeds a scripted key sequence through the editor.
pub(crate) fn run_headless(session: &mut Session, script: &KeyScript) {
    for token in script.tokens() {
        match *token {
            KeyToken::Key(key) => {
                session.editor.handle_key(key);
            }
            KeyToken::Click(offset) => session.editor.handle_click(offset),
        }
    }
    tracing::debug!(
        "Script finished: '{}' caret {}",
        session.editor.text(),
        session.editor.caret()
    );
}

#[cfg(test)]
mod tests {
    use super::run_headless;
    use crate::app::Session;
    use crate::args::parsers::parse_key_script;
    use crate::editor::{RangeEditor, TimeRange, default_presets};
    use crate::error::AppResult;

    #[test]
    fn script_types_a_full_range() -> AppResult<()> {
        let mut session = Session::new(RangeEditor::new(), default_presets());
        run_headless(&mut session, &parse_key_script("2345 0830")?);
        assert_eq!(session.editor.text(), "23:45 - 08:30");
        assert_eq!(
            session.editor.value(),
            Some(TimeRange::from_hm(23, 45, 8, 30))
        );
        Ok(())
    }

    #[test]
    fn script_clicks_then_edits() -> AppResult<()> {
        let mut session =
            Session::new(RangeEditor::with_value(TimeRange::from_hm(10, 0, 12, 0)), Vec::new());
        run_headless(&mut session, &parse_key_script("click:9 5")?);
        assert_eq!(session.editor.text(), "10:00 - 15:00");
        Ok(())
    }
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::editor::{MASK_LEN, is_digit_slot};
use crate::ui::model::UiRenderData;

use super::theme::{
    HELP_HEIGHT, MASK_PANEL_HEIGHT, PRESETS_MIN_HEIGHT, UI_MARGIN, VALUE_PANEL_HEIGHT,
    app_background_style, caret_style, highlight_style, panel_border_style, placeholder_style,
    text_style, value_style,
};

const HELP_TEXT: &str =
    "digits: type  ←/→: move  Backspace/Del: clear  Tab: quick ranges  Esc: done";

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub mask_panel: Rect,
    /// First cell of the mask text; offset 0 of the buffer.
    pub mask: Rect,
    pub value_panel: Rect,
    pub presets_panel: Rect,
    pub help: Rect,
}

#[must_use]
pub fn frame_layout(area: Rect) -> Option<FrameLayout> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(MASK_PANEL_HEIGHT),
            Constraint::Length(VALUE_PANEL_HEIGHT),
            Constraint::Min(PRESETS_MIN_HEIGHT),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(area);

    let (mask_panel, value_panel, presets_panel, help) = match chunks.as_ref() {
        [a, b, c, d] => (*a, *b, *c, *d),
        _ => return None,
    };
    let mask = Block::default().borders(Borders::ALL).inner(mask_panel);
    Some(FrameLayout {
        mask_panel,
        mask,
        value_panel,
        presets_panel,
        help,
    })
}

/// Text offset a click at (`column`, `row`) lands on, like an input's
/// `selectionStart`. Clicks right of the text give the end offset.
#[must_use]
pub fn click_offset(area: Rect, column: u16, row: u16) -> Option<usize> {
    let layout = frame_layout(area)?;
    let mask = layout.mask;
    if row != mask.y || column < mask.x || column >= mask.x.saturating_add(mask.width) {
        return None;
    }
    let offset = usize::from(column.saturating_sub(mask.x));
    Some(offset.min(MASK_LEN))
}

/// The mask with the caret cell highlighted and empty slots dimmed.
#[must_use]
pub fn mask_line(data: &UiRenderData) -> Line<'static> {
    let spans: Vec<Span<'static>> = data
        .text
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let style = if index == data.caret {
                caret_style(data.no_color)
            } else if is_digit_slot(index) && !ch.is_ascii_digit() {
                placeholder_style(data.no_color)
            } else {
                text_style(data.no_color)
            };
            Span::styled(ch.to_string(), style)
        })
        .collect();
    Line::from(spans)
}

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );
    let Some(layout) = frame_layout(size) else {
        return;
    };

    let mask_block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(data.no_color))
        .title("Time range");
    f.render_widget(mask_block, layout.mask_panel);
    f.render_widget(Paragraph::new(mask_line(data)), layout.mask);

    let value_text = data
        .value
        .map_or_else(|| "<no value>".to_owned(), |range| range.to_string());
    let value = Paragraph::new(Line::from(Span::styled(
        value_text,
        value_style(data.no_color),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(panel_border_style(data.no_color))
            .title("Value"),
    );
    f.render_widget(value, layout.value_panel);

    if data.presets_expanded {
        render_presets(f, data, layout.presets_panel);
    }

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HELP_TEXT,
            placeholder_style(data.no_color),
        ))),
        layout.help,
    );
}

fn render_presets<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let items: Vec<ListItem<'_>> = data
        .presets
        .iter()
        .map(|preset| ListItem::new(preset.label.clone()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(panel_border_style(data.no_color))
                .title("Quick ranges (↑/↓, Enter)"),
        )
        .style(text_style(data.no_color))
        .highlight_style(highlight_style(data.no_color))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !data.presets.is_empty() {
        state.select(Some(data.selected_preset.min(data.presets.len().saturating_sub(1))));
    }
    f.render_stateful_widget(list, area, &mut state);
}

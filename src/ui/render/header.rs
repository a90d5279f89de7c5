use super::Frame;
use crate::state::{State, MENU_BUTTON_WIDTH};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header bar: the menu button and the active screen's title.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let accent = theme.screen_accent(state.active_screen());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(MENU_BUTTON_WIDTH.saturating_sub(1)),
            Constraint::Min(0),
            Constraint::Length(MENU_BUTTON_WIDTH.saturating_sub(1)),
        ])
        .split(inner);

    let button_style = if state.is_drawer_open() {
        styling::selected_row_style(theme)
    } else {
        styling::heading_style(accent)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" ☰ ", button_style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            state.header_title(),
            styling::heading_style(accent),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );
}

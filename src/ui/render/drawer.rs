use super::Frame;
use crate::content::{APP_TITLE, DRAWER_FOOTER};
use crate::state::drawer::{panel_area, HIDDEN_OFFSET, MENU_TOP_ROWS, PANEL_WIDTH_PERCENT};
use crate::state::{State, DRAWER_ITEMS};
use crate::ui::widgets::styling;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the scrim and the sliding panel.
///
/// The panel is drawn at full width into a scratch buffer and the visible
/// part is copied over, so its content slides with it instead of reflowing.
pub fn drawer(frame: &mut Frame, size: Rect, state: &State) {
    let offset = state.drawer().offset();
    if offset > HIDDEN_OFFSET {
        frame
            .buffer_mut()
            .set_style(size, Style::default().add_modifier(Modifier::DIM));
    }

    let visible = panel_area(size, offset);
    if visible.width == 0 {
        return;
    }
    let width = size.width.saturating_mul(PANEL_WIDTH_PERCENT) / 100;
    let full = Rect::new(0, 0, width, size.height);
    let mut scratch = Buffer::empty(full);
    panel(&mut scratch, full, state);

    let hidden_columns = width - visible.width;
    let target = frame.buffer_mut();
    for y in 0..visible.height {
        for x in 0..visible.width {
            let cell = scratch.get(x + hidden_columns, y).clone();
            *target.get_mut(visible.x + x, visible.y + y) = cell;
        }
    }
}

/// Draw the panel content into `buffer`. Rows line up with the hit-testing
/// layout: menu rows start `MENU_TOP_ROWS` below the panel top.
///
fn panel(buffer: &mut Buffer, area: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .style(
            Style::default()
                .bg(theme.surface.to_color())
                .fg(theme.text.to_color()),
        );
    let inner = block.inner(area);
    block.render(area, buffer);

    let mut lines = vec![
        Line::from(Span::styled(APP_TITLE, styling::banner_style(theme))),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            styling::muted_text_style(theme),
        )),
    ];
    while (lines.len() as u16) < MENU_TOP_ROWS - 1 {
        lines.push(Line::from(""));
    }
    for (index, item) in DRAWER_ITEMS.iter().enumerate() {
        let is_current = item.screen == state.active_screen();
        let marker = if is_current { "▶" } else { " " };
        let text = format!("{} {} {}  {}", marker, index + 1, item.icon, item.title);
        let style = if index == state.drawer().cursor() {
            styling::selected_row_style(theme)
        } else if is_current {
            styling::heading_style(theme.screen_accent(item.screen))
        } else {
            styling::normal_text_style(theme)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    Paragraph::new(lines).render(inner, buffer);

    if inner.height > 0 {
        let footer_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        Paragraph::new(Line::from(Span::styled(
            DRAWER_FOOTER,
            styling::muted_text_style(theme),
        )))
        .alignment(Alignment::Center)
        .render(footer_area, buffer);
    }
}

use super::Frame;
use crate::state::screens::ScreenState;
use crate::state::{Alert, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render a modal alert on top of everything.
///
pub fn alert(frame: &mut Frame, size: Rect, alert: &Alert, theme: &Theme) {
    let popup_area = centered_rect(60, 30, size);
    frame.render_widget(Clear, popup_area);

    let color = match alert.title.as_str() {
        "Error" | "Seek Medical Attention" => theme.error,
        "Incomplete Entry" | "No Symptoms Selected" => theme.warning,
        _ => theme.success,
    }
    .to_color();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message.as_str(),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: OK",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", alert.title),
                    styling::heading_style(color),
                ))
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Render the delete confirmation of the medications screen.
///
pub fn confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let name = match state.screen_state() {
        ScreenState::Medications(medications) => medications
            .pending_delete()
            .map(|m| m.name.clone())
            .unwrap_or_else(|| "this medication".to_string()),
        _ => return,
    };
    let theme = state.get_theme();
    let popup_area = centered_rect(60, 25, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Are you sure you want to delete {}?", name),
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: delete, Esc: cancel",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Delete Medication ",
                    styling::heading_style(theme.error.to_color()),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Return a rectangle centered in `r` taking the given share of its size.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 30, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 12);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 14);
    }
}

use super::{bullet_lines, Frame};
use crate::content::HYDRATION_TIPS;
use crate::state::screens::WaterState;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

/// Render the water tracking screen.
///
pub fn water(frame: &mut Frame, size: Rect, water: &WaterState, theme: &Theme, accent: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(size);

    let glasses: String = (0..water.daily_goal())
        .map(|i| if i < water.glasses() { "💧" } else { "○ " })
        .collect::<Vec<_>>()
        .join(" ");
    let counter = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} / {} glasses", water.glasses(), water.daily_goal()),
            styling::heading_style(accent),
        )),
        Line::from(""),
        Line::from(glasses),
        Line::from(Span::styled(
            format!("Drink at least {} glasses of water daily", water.daily_goal()),
            styling::muted_text_style(theme),
        )),
    ])
    .block(styling::card_block("Today's Intake", accent, true, theme))
    .alignment(Alignment::Center);
    frame.render_widget(counter, chunks[0]);

    let gauge = Gauge::default()
        .block(styling::card_block("Progress", accent, false, theme))
        .gauge_style(Style::default().fg(accent).bg(theme.surface.to_color()))
        .ratio(water.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", water.progress() * 100.0));
    frame.render_widget(gauge, chunks[1]);

    let tips = Paragraph::new(bullet_lines(&HYDRATION_TIPS, theme))
        .block(styling::card_block("Hydration Tips", accent, false, theme));
    frame.render_widget(tips, chunks[2]);
}

use super::Frame;
use crate::content::{APP_TITLE, HOME_WELCOME};
use crate::state::screens::HomeState;
use crate::state::DRAWER_ITEMS;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the home screen.
///
pub fn home(frame: &mut Frame, size: Rect, home: &HomeState, theme: &Theme, accent: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(size);

    let welcome = Paragraph::new(vec![
        Line::from(Span::styled(APP_TITLE, styling::banner_style(theme))),
        Line::from(""),
        Line::from(Span::styled(HOME_WELCOME, styling::normal_text_style(theme))),
    ])
    .block(styling::card_block("Welcome", accent, true, theme))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(welcome, chunks[0]);

    let stats = Paragraph::new(vec![
        Line::from(format!(
            " 💧 Water today: 0/{} glasses",
            home.water_daily_goal
        )),
        Line::from(" 💊 Medications: 0/2 taken"),
        Line::from(" 🧠 Mood check-in: not done today"),
    ])
    .style(styling::normal_text_style(theme))
    .block(styling::card_block("Today's Overview", accent, false, theme));
    frame.render_widget(stats, chunks[1]);

    let tip = Paragraph::new(Line::from(Span::styled(
        home.tip_of_the_day,
        styling::normal_text_style(theme),
    )))
    .block(styling::card_block(
        "💡 Tip of the Day",
        theme.warning.to_color(),
        false,
        theme,
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(tip, chunks[2]);

    let mut features: Vec<Line> = DRAWER_ITEMS
        .iter()
        .skip(1)
        .map(|item| {
            Line::from(vec![
                Span::raw(format!(" {}  ", item.icon)),
                Span::styled(
                    item.title,
                    styling::heading_style(theme.screen_accent(item.screen)),
                ),
            ])
        })
        .collect();
    features.push(Line::from(""));
    features.push(Line::from(Span::styled(
        " Press m or click ☰ to open the menu.",
        styling::muted_text_style(theme),
    )));
    let features = Paragraph::new(features)
        .block(styling::card_block("Explore", accent, false, theme));
    frame.render_widget(features, chunks[3]);
}

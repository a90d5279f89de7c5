use super::{bullet_lines, Frame};
use crate::content::{HEALTH_TIPS, RESOURCES, TIPS_REMINDER, WEEKLY_GOALS};
use crate::state::screens::TipsState;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the health tips screen.
///
pub fn tips(frame: &mut Frame, size: Rect, tips: &TipsState, theme: &Theme, accent: Color) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size);

    let mut lines = Vec::new();
    for category in HEALTH_TIPS.iter() {
        lines.push(Line::from(Span::styled(
            format!("{}  {}", category.icon, category.category),
            styling::heading_style(accent),
        )));
        lines.extend(bullet_lines(&category.tips, theme));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(styling::card_block("Health & Wellness Tips", accent, true, theme))
            .wrap(Wrap { trim: false })
            .scroll((tips.scroll(), 0)),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(WEEKLY_GOALS.len() as u16 + 2),
            Constraint::Length(RESOURCES.len() as u16 * 2 + 2),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let goals: Vec<Line> = WEEKLY_GOALS
        .iter()
        .map(|goal| {
            Line::from(vec![
                Span::styled(" ✓ ", styling::heading_style(theme.success.to_color())),
                Span::styled(*goal, styling::normal_text_style(theme)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(goals).block(styling::card_block(
            "🎯 Weekly Health Goals",
            theme.success.to_color(),
            false,
            theme,
        )),
        right[0],
    );

    let items: Vec<ListItem> = RESOURCES
        .iter()
        .map(|resource| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(" {}", resource.title),
                    styling::current_list_item_style(theme),
                )),
                Line::from(Span::styled(
                    format!("   {}", resource.url),
                    styling::muted_text_style(theme),
                )),
            ])
        })
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(tips.resource_cursor()));
    frame.render_stateful_widget(
        List::new(items)
            .block(styling::card_block(
                "📚 Helpful Resources",
                theme.info.to_color(),
                false,
                theme,
            ))
            .highlight_style(styling::selected_row_style(theme)),
        right[1],
        &mut list_state,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            TIPS_REMINDER,
            styling::muted_text_style(theme),
        )))
        .block(styling::card_block(
            "⚠️ Remember",
            theme.warning.to_color(),
            false,
            theme,
        ))
        .wrap(Wrap { trim: true }),
        right[2],
    );
}

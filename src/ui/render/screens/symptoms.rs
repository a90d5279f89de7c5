use super::{bullet_lines, Frame};
use crate::content::{COMMON_SYMPTOMS, EMERGENCY_SIGNS, SERIOUS_SYMPTOMS, SYMPTOM_DISCLAIMER};
use crate::state::screens::SymptomsState;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the symptom checker.
///
pub fn symptoms(
    frame: &mut Frame,
    size: Rect,
    symptoms: &SymptomsState,
    theme: &Theme,
    accent: Color,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(size);

    let items: Vec<ListItem> = COMMON_SYMPTOMS
        .iter()
        .map(|symptom| {
            let check = if symptoms.is_selected(symptom) { "[x]" } else { "[ ]" };
            let style = if SERIOUS_SYMPTOMS.contains(symptom) {
                styling::normal_text_style(theme).fg(theme.error.to_color())
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}", check, symptom),
                style,
            )))
        })
        .collect();
    let list = List::new(items)
        .block(styling::card_block(
            "Select your symptoms",
            accent,
            true,
            theme,
        ))
        .highlight_style(styling::selected_row_style(theme));
    let mut list_state = ListState::default();
    list_state.select(Some(symptoms.cursor()));
    frame.render_stateful_widget(list, columns[0], &mut list_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(4),
            Constraint::Length(EMERGENCY_SIGNS.len() as u16 + 2),
        ])
        .split(columns[1]);

    let selected: Vec<Line> = if symptoms.selected().is_empty() {
        vec![Line::from(Span::styled(
            " None yet",
            styling::muted_text_style(theme),
        ))]
    } else {
        bullet_lines(symptoms.selected(), theme)
    };
    frame.render_widget(
        Paragraph::new(selected).block(styling::card_block(
            "Selected Symptoms",
            accent,
            false,
            theme,
        )),
        right[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SYMPTOM_DISCLAIMER,
            styling::normal_text_style(theme).fg(theme.warning.to_color()),
        )))
        .block(styling::card_block(
            "Disclaimer",
            theme.warning.to_color(),
            false,
            theme,
        ))
        .wrap(Wrap { trim: true }),
        right[1],
    );

    frame.render_widget(
        Paragraph::new(bullet_lines(&EMERGENCY_SIGNS, theme)).block(styling::card_block(
            "🚨 Call 911 if you experience",
            theme.error.to_color(),
            false,
            theme,
        )),
        right[2],
    );
}

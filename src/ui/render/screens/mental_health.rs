use super::{bullet_lines, Frame};
use crate::content::{
    HELPLINES, MENTAL_HEALTH_TIPS, MOOD_EMOJIS, MOOD_LABELS, STRESS_EMOJIS, STRESS_LABELS,
};
use crate::state::screens::{CheckInSection, MentalHealthState};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render a 5-point scale with the picked value highlighted.
///
fn scale<'a>(
    emojis: &[&'a str],
    labels: &[&'a str],
    value: Option<usize>,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let choices: Vec<Span> = emojis
        .iter()
        .enumerate()
        .map(|(index, emoji)| {
            let style = if value == Some(index) {
                styling::selected_row_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            Span::styled(format!(" {} ", emoji), style)
        })
        .collect();
    let label = match value {
        Some(index) => Span::styled(labels[index], styling::current_list_item_style(theme)),
        None => Span::styled("Not rated", styling::muted_text_style(theme)),
    };
    vec![Line::from(choices), Line::from(label)]
}

/// Render the mental health check-in.
///
pub fn mental_health(
    frame: &mut Frame,
    size: Rect,
    check_in: &MentalHealthState,
    theme: &Theme,
    accent: Color,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(size);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(columns[0]);
    let active = check_in.section();

    frame.render_widget(
        Paragraph::new(scale(&MOOD_EMOJIS, &MOOD_LABELS, check_in.mood(), theme)).block(
            styling::card_block(
                "How are you feeling today?",
                accent,
                active == CheckInSection::Mood,
                theme,
            ),
        ),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(scale(&STRESS_EMOJIS, &STRESS_LABELS, check_in.stress(), theme)).block(
            styling::card_block(
                "Stress level",
                accent,
                active == CheckInSection::Stress,
                theme,
            ),
        ),
        rows[1],
    );

    let notes_block = styling::card_block(
        "Notes (optional)",
        accent,
        active == CheckInSection::Notes,
        theme,
    );
    let notes_area = notes_block.inner(rows[2]);
    frame.render_widget(notes_block, rows[2]);
    if check_in.is_editing_notes() {
        frame.render_widget(check_in.notes_textarea().widget(), notes_area);
    } else {
        let notes = check_in.notes();
        let text = if notes.is_empty() {
            Line::from(Span::styled(
                "Press Enter here to write a note",
                styling::muted_text_style(theme),
            ))
        } else {
            Line::from(Span::styled(notes, styling::normal_text_style(theme)))
        };
        frame.render_widget(Paragraph::new(text), notes_area);
    }

    let save_style = if active == CheckInSection::Save {
        styling::selected_row_style(theme)
    } else {
        styling::heading_style(accent)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" [ Save Entry ] ", save_style))).block(
            styling::card_block("Save", accent, active == CheckInSection::Save, theme),
        ),
        rows[3],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(HELPLINES.len() as u16 + 3),
        ])
        .split(columns[1]);
    frame.render_widget(
        Paragraph::new(bullet_lines(&MENTAL_HEALTH_TIPS, theme)).block(styling::card_block(
            "Mental Health Tips",
            accent,
            false,
            theme,
        )),
        right[0],
    );
    let mut help = vec![Line::from(Span::styled(
        " If you're in crisis or need immediate help:",
        styling::normal_text_style(theme),
    ))];
    help.extend(bullet_lines(&HELPLINES, theme));
    frame.render_widget(
        Paragraph::new(help).block(styling::card_block(
            "🆘 Need Help?",
            theme.error.to_color(),
            false,
            theme,
        )),
        right[1],
    );
}

use super::{bullet_lines, Frame};
use crate::content::MEDICATION_REMINDERS;
use crate::state::screens::{MedicationField, MedicationsFocus, MedicationsState, SUBMIT_ROW};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

/// Render the medications list, the add form and reminders.
///
pub fn medications(
    frame: &mut Frame,
    size: Rect,
    medications: &MedicationsState,
    theme: &Theme,
    accent: Color,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(size);
    let list_focused = medications.focus() == MedicationsFocus::List;

    let items: Vec<ListItem> = medications
        .medications()
        .iter()
        .map(|medication| {
            let (mark, mark_style) = if medication.taken {
                ("✓", styling::heading_style(theme.success.to_color()))
            } else {
                ("○", styling::muted_text_style(theme))
            };
            let name_style = if medication.taken {
                styling::muted_text_style(theme).add_modifier(Modifier::CROSSED_OUT)
            } else {
                styling::current_list_item_style(theme)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", mark), mark_style),
                    Span::styled(medication.name.clone(), name_style),
                    Span::styled(
                        format!("  {}", medication.dosage),
                        styling::normal_text_style(theme),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("   {} at {}", medication.frequency, medication.time),
                    styling::muted_text_style(theme),
                )),
            ])
        })
        .collect();
    let title = format!("My Medications ({})", medications.medications().len());
    let mut list = List::new(items).block(styling::card_block(&title, accent, list_focused, theme));
    if list_focused {
        list = list.highlight_style(styling::selected_row_style(theme));
    }
    let mut list_state = ListState::default();
    if !medications.medications().is_empty() {
        list_state.select(Some(medications.list_cursor()));
    }
    frame.render_stateful_widget(list, columns[0], &mut list_state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUBMIT_ROW as u16 + 4),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let mut form_lines: Vec<Line> = MedicationField::ALL
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = medications.form().field(*field);
            let is_current = !list_focused && medications.form_cursor() == index;
            let editing = is_current && medications.is_editing();
            let text = match (value.is_empty(), editing) {
                (true, false) => Span::styled(field.placeholder(), styling::muted_text_style(theme)),
                (_, true) => Span::styled(format!("{}▏", value), styling::normal_text_style(theme)),
                (false, false) => Span::styled(value.to_string(), styling::normal_text_style(theme)),
            };
            let marker = if is_current {
                Span::styled(" ▶ ", styling::heading_style(accent))
            } else {
                Span::raw("   ")
            };
            Line::from(vec![marker, text])
        })
        .collect();
    form_lines.push(Line::from(""));
    let submit_style = if !list_focused && medications.form_cursor() == SUBMIT_ROW {
        styling::selected_row_style(theme)
    } else {
        styling::heading_style(accent)
    };
    form_lines.push(Line::from(Span::styled("   [ Add Medication ]", submit_style)));
    frame.render_widget(
        Paragraph::new(form_lines).block(styling::card_block(
            "Add New Medication",
            accent,
            !list_focused,
            theme,
        )),
        right[0],
    );

    frame.render_widget(
        Paragraph::new(bullet_lines(&MEDICATION_REMINDERS, theme)).block(styling::card_block(
            "💡 Medication Reminders",
            theme.warning.to_color(),
            false,
            theme,
        )),
        right[1],
    );
}

use super::{bullet_lines, Frame};
use crate::content::{MEAL_PLANNING, NUTRITION_GENERAL_TIPS, NUTRITION_TIPS};
use crate::state::screens::NutritionState;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Color,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the nutrition guide as one scrollable page.
///
pub fn nutrition(
    frame: &mut Frame,
    size: Rect,
    nutrition: &NutritionState,
    theme: &Theme,
    accent: Color,
) {
    let mut lines = vec![Line::from(Span::styled(
        "Food Groups",
        styling::heading_style(accent),
    ))];
    for tip in NUTRITION_TIPS.iter() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            tip.category,
            styling::current_list_item_style(theme),
        )));
        lines.push(Line::from(Span::styled(
            tip.description,
            styling::normal_text_style(theme),
        )));
        lines.push(Line::from(vec![
            Span::styled("Examples: ", styling::muted_text_style(theme)),
            Span::styled(tip.examples, styling::normal_text_style(theme)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "General Tips",
        styling::heading_style(accent),
    )));
    lines.extend(bullet_lines(&NUTRITION_GENERAL_TIPS, theme));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Meal Planning",
        styling::heading_style(accent),
    )));
    lines.push(Line::from(Span::styled(
        MEAL_PLANNING,
        styling::normal_text_style(theme),
    )));

    let paragraph = Paragraph::new(lines)
        .block(styling::card_block("Balanced Nutrition", accent, true, theme))
        .wrap(Wrap { trim: false })
        .scroll((nutrition.scroll, 0));
    frame.render_widget(paragraph, size);
}

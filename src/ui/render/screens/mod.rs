mod home;
mod medications;
mod mental_health;
mod nutrition;
mod symptoms;
mod tips;
mod water;

use super::Frame;
use crate::state::screens::ScreenState;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
};

/// Render the mounted screen into the body area.
///
pub fn screen(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let accent = theme.screen_accent(state.active_screen());
    match state.screen_state() {
        ScreenState::Home(home) => home::home(frame, size, home, theme, accent),
        ScreenState::WaterTracking(water) => water::water(frame, size, water, theme, accent),
        ScreenState::NutritionGuide(nutrition) => {
            nutrition::nutrition(frame, size, nutrition, theme, accent)
        }
        ScreenState::SymptomChecker(symptoms) => {
            symptoms::symptoms(frame, size, symptoms, theme, accent)
        }
        ScreenState::Medications(medications) => {
            medications::medications(frame, size, medications, theme, accent)
        }
        ScreenState::MentalHealth(check_in) => {
            mental_health::mental_health(frame, size, check_in, theme, accent)
        }
        ScreenState::HealthTips(tips) => tips::tips(frame, size, tips, theme, accent),
    }
}

/// Return one bulleted line per item.
///
fn bullet_lines<'a>(items: &[&'a str], theme: &Theme) -> Vec<Line<'a>> {
    items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(" • ", styling::muted_text_style(theme)),
                Span::styled(*item, styling::normal_text_style(theme)),
            ])
        })
        .collect()
}

use super::Frame;
use crate::config::hotkeys::build_footer_text;
use crate::config::{HotkeyAction, HotkeyContext};
use crate::state::screens::{MedicationsFocus, ScreenState};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and hotkey hints for the current input context.
///
fn mode_and_hints(state: &State) -> (&'static str, String) {
    let hotkeys = state.get_hotkeys();
    if state.has_alert() {
        let hints = build_footer_text(
            hotkeys.for_context(HotkeyContext::Dialog),
            &[(HotkeyAction::Confirm, "dismiss", Some(HotkeyAction::Cancel))],
        );
        return ("ALERT", hints);
    }
    if state.has_confirmation() {
        let hints = build_footer_text(
            hotkeys.for_context(HotkeyContext::Dialog),
            &[
                (HotkeyAction::Confirm, "delete", None),
                (HotkeyAction::Cancel, "cancel", None),
            ],
        );
        return ("CONFIRM", hints);
    }
    if state.is_text_input() {
        return ("EDIT", " Type to edit, Esc: done".to_string());
    }
    if state.is_drawer_open() {
        let hints = build_footer_text(
            hotkeys.for_context(HotkeyContext::Drawer),
            &[
                (HotkeyAction::Next, "move", Some(HotkeyAction::Previous)),
                (HotkeyAction::Select, "open", None),
                (HotkeyAction::CloseDrawer, "close", None),
            ],
        );
        return ("MENU", format!(" 1-7: jump,{}", hints));
    }

    let screen_hints: &[(HotkeyAction, &str, Option<HotkeyAction>)] = match state.screen_state() {
        ScreenState::Home(_) => &[],
        ScreenState::WaterTracking(_) => &[(
            HotkeyAction::Increase,
            "add/remove glass",
            Some(HotkeyAction::Decrease),
        )],
        ScreenState::NutritionGuide(_) => {
            &[(HotkeyAction::Next, "scroll", Some(HotkeyAction::Previous))]
        }
        ScreenState::SymptomChecker(_) => &[
            (HotkeyAction::Next, "move", Some(HotkeyAction::Previous)),
            (HotkeyAction::Activate, "toggle", None),
            (HotkeyAction::Submit, "check", None),
        ],
        ScreenState::Medications(medications) => match medications.focus() {
            MedicationsFocus::List => &[
                (HotkeyAction::Next, "move", Some(HotkeyAction::Previous)),
                (HotkeyAction::Activate, "taken", None),
                (HotkeyAction::Delete, "delete", None),
                (HotkeyAction::SwitchFocus, "add form", None),
            ],
            MedicationsFocus::Form => &[
                (HotkeyAction::Next, "move", Some(HotkeyAction::Previous)),
                (HotkeyAction::Activate, "edit", None),
                (HotkeyAction::Submit, "add", None),
                (HotkeyAction::SwitchFocus, "list", None),
            ],
        },
        ScreenState::MentalHealth(_) => &[
            (HotkeyAction::Next, "section", Some(HotkeyAction::Previous)),
            (HotkeyAction::Increase, "rate", Some(HotkeyAction::Decrease)),
            (HotkeyAction::Activate, "notes", None),
            (HotkeyAction::Submit, "save", None),
        ],
        ScreenState::HealthTips(_) => &[
            (HotkeyAction::Next, "resource", Some(HotkeyAction::Previous)),
            (HotkeyAction::Increase, "scroll", Some(HotkeyAction::Decrease)),
            (HotkeyAction::Activate, "copy link", None),
        ],
    };
    let mut hints = build_footer_text(hotkeys.for_context(HotkeyContext::Screen), screen_hints);
    let global = build_footer_text(
        hotkeys.for_context(HotkeyContext::Global),
        &[
            (HotkeyAction::OpenDrawer, "menu", None),
            (HotkeyAction::CycleTheme, "theme", None),
            (HotkeyAction::ToggleLog, "log", None),
            (HotkeyAction::Quit, "quit", None),
        ],
    );
    if !hints.is_empty() {
        hints.push(',');
    }
    hints.push_str(&global);
    ("SCREEN", hints)
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (mode, hints) = mode_and_hints(state);
    let mode_color = match mode {
        "ALERT" | "CONFIRM" => theme.error.to_color(),
        "EDIT" => theme.warning.to_color(),
        "MENU" => theme.primary.to_color(),
        _ => theme.screen_accent(state.active_screen()),
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Alert, Screen};

    #[test]
    fn screen_hints_include_global_keys() {
        let mut state = State::default();
        state.navigate(Screen::SymptomChecker);
        let (mode, hints) = mode_and_hints(&state);
        assert_eq!(mode, "SCREEN");
        assert!(hints.contains("s: check"));
        assert!(hints.contains("m: menu"));
        assert!(hints.contains("q: quit"));
    }

    #[test]
    fn drawer_hints_replace_screen_hints() {
        let mut state = State::default();
        state.open_drawer();
        let (mode, hints) = mode_and_hints(&state);
        assert_eq!(mode, "MENU");
        assert!(hints.contains("j/k: move"));
        assert!(hints.contains("Esc: close"));
    }

    #[test]
    fn alert_takes_precedence() {
        let mut state = State::default();
        state.open_drawer();
        state.show_alert(Alert::new("Success", "ok"));
        assert_eq!(mode_and_hints(&state).0, "ALERT");
    }
}

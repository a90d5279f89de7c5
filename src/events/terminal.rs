use crate::config::hotkeys::get_action_for_event;
use crate::config::{HotkeyAction, HotkeyContext};
use crate::error::AppError;
use crate::state::{Alert, State};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use ratatui::layout::Rect;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds. Short enough for the
/// drawer slide to look smooth.
///
const TICK_RATE_IN_MS: u64 = 16;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Outcome of draining the terminal events channel.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Flow {
    /// Only ticks arrived since the last call.
    Idle,
    /// At least one input was handled; the frame is stale.
    Changed,
    /// Exit was requested.
    Exit,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<CrosstermEvent>>,
    _tx: mpsc::Sender<Event<CrosstermEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(input) => {
                        if tx_clone.send(Event::Input(input)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block for the next terminal event, then handle everything already
    /// queued behind it so ticks never pile up in front of input.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<Flow> {
        let mut flow = Flow::Idle;
        let mut next = Some(self.rx.recv()?);
        while let Some(event) = next {
            if let Event::Input(input) = event {
                if !handle_input(state, input) {
                    return Ok(Flow::Exit);
                }
                flow = Flow::Changed;
            }
            next = self.rx.try_recv().ok();
        }
        Ok(flow)
    }
}

/// Dispatch one terminal event against the state. Returns false if exit was
/// requested.
///
pub fn handle_input(state: &mut State, input: CrosstermEvent) -> bool {
    match input {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            debug!("Processing click at ({}, {})", column, row);
            state.click(column, row);
            true
        }
        CrosstermEvent::Resize(width, height) => {
            state.set_terminal_size(Rect::new(0, 0, width, height));
            true
        }
        _ => true,
    }
}

/// Route a key press. Modal layers come first: the alert, then a pending
/// confirmation, then a focused text field, then the drawer. Global keys and
/// finally the mounted screen get what is left.
///
fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    let hotkeys = state.get_hotkeys().clone();

    if state.has_alert() {
        if let Some(HotkeyAction::Confirm | HotkeyAction::Cancel) =
            get_action_for_event(&key, HotkeyContext::Dialog, &hotkeys)
        {
            state.dismiss_alert();
        }
        return true;
    }

    if state.has_confirmation() {
        match get_action_for_event(&key, HotkeyContext::Dialog, &hotkeys) {
            Some(HotkeyAction::Confirm) => {
                state.confirm_dialog();
            }
            Some(HotkeyAction::Cancel) => {
                state.cancel_dialog();
            }
            _ => {}
        }
        return true;
    }

    if state.is_text_input() {
        state.text_input(key);
        return true;
    }

    if state.is_drawer_open() {
        if let KeyCode::Char(c @ '1'..='9') = key.code {
            let index = c as usize - '1' as usize;
            state.select_drawer_index(index);
            return true;
        }
        match get_action_for_event(&key, HotkeyContext::Drawer, &hotkeys) {
            Some(HotkeyAction::Next) => {
                state.next_drawer_item();
                return true;
            }
            Some(HotkeyAction::Previous) => {
                state.previous_drawer_item();
                return true;
            }
            Some(HotkeyAction::Select) => {
                state.select_drawer_item();
                return true;
            }
            Some(HotkeyAction::CloseDrawer) => {
                state.close_drawer();
                return true;
            }
            _ => {}
        }
    }

    match get_action_for_event(&key, HotkeyContext::Global, &hotkeys) {
        Some(HotkeyAction::Quit) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        Some(HotkeyAction::OpenDrawer) => {
            state.open_drawer();
            return true;
        }
        Some(HotkeyAction::CycleTheme) => {
            state.cycle_theme();
            return true;
        }
        Some(HotkeyAction::ToggleLog) => {
            state.toggle_log();
            return true;
        }
        _ => {}
    }

    if state.is_drawer_open() {
        return true;
    }

    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if let Err(e) = state.rate_screen(c as usize - '1' as usize) {
            warn!("{}", e);
        }
        return true;
    }

    if let Some(action) = get_action_for_event(&key, HotkeyContext::Screen, &hotkeys) {
        if let Some(text) = state.screen_action(&action) {
            match copy_to_clipboard(text) {
                Ok(()) => {
                    state.show_alert(Alert::new("Link Copied", format!("{} copied to clipboard.", text)));
                }
                Err(e) => {
                    warn!("{}", e);
                    state.show_alert(Alert::new("Error", "Could not copy the link."));
                }
            }
        }
    }
    true
}

/// Put text on the system clipboard.
///
fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::screens::ScreenState;
    use crate::state::Screen;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn ctrl_c_and_q_request_exit() {
        let mut state = State::default();
        let ctrl_c = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!handle_input(&mut state, ctrl_c));
        assert!(!handle_input(&mut state, press(KeyCode::Char('q'))));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = State::default();
        let release = CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('m'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(handle_input(&mut state, release));
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn drawer_keyboard_navigation() {
        let mut state = State::default();
        handle_input(&mut state, press(KeyCode::Char('m')));
        assert!(state.is_drawer_open());
        handle_input(&mut state, press(KeyCode::Char('j')));
        handle_input(&mut state, press(KeyCode::Down));
        handle_input(&mut state, press(KeyCode::Enter));
        assert_eq!(state.active_screen(), Screen::NutritionGuide);
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn drawer_digit_jumps_to_row() {
        let mut state = State::default();
        handle_input(&mut state, press(KeyCode::Char('m')));
        handle_input(&mut state, press(KeyCode::Char('5')));
        assert_eq!(state.active_screen(), Screen::Medications);
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn esc_closes_drawer() {
        let mut state = State::default();
        handle_input(&mut state, press(KeyCode::Char('m')));
        handle_input(&mut state, press(KeyCode::Esc));
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn open_drawer_blocks_screen_keys() {
        let mut state = State::default();
        state.navigate(Screen::WaterTracking);
        handle_input(&mut state, press(KeyCode::Char('m')));
        handle_input(&mut state, press(KeyCode::Char('l')));
        handle_input(&mut state, press(KeyCode::Esc));
        handle_input(&mut state, press(KeyCode::Char('l')));
        match state.screen_state() {
            ScreenState::WaterTracking(water) => assert_eq!(water.glasses(), 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn alert_captures_keys_until_dismissed() {
        let mut state = State::default();
        state.navigate(Screen::SymptomChecker);
        handle_input(&mut state, press(KeyCode::Char('s')));
        assert!(state.has_alert());
        handle_input(&mut state, press(KeyCode::Char('m')));
        assert!(!state.is_drawer_open());
        handle_input(&mut state, press(KeyCode::Enter));
        assert!(!state.has_alert());
    }

    #[test]
    fn delete_confirmation_can_be_cancelled() {
        let mut state = State::default();
        state.navigate(Screen::Medications);
        handle_input(&mut state, press(KeyCode::Char('d')));
        assert!(state.has_confirmation());
        handle_input(&mut state, press(KeyCode::Esc));
        assert!(!state.has_confirmation());
        match state.screen_state() {
            ScreenState::Medications(m) => assert_eq!(m.medications().len(), 2),
            _ => unreachable!(),
        }
    }

    #[test]
    fn typing_q_in_a_text_field_does_not_quit() {
        let mut state = State::default();
        state.navigate(Screen::Medications);
        handle_input(&mut state, press(KeyCode::Tab));
        handle_input(&mut state, press(KeyCode::Enter));
        assert!(handle_input(&mut state, press(KeyCode::Char('q'))));
        match state.screen_state() {
            ScreenState::Medications(m) => assert_eq!(m.form().name, "q"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn clicks_drive_the_drawer() {
        let mut state = State::default();
        handle_input(&mut state, CrosstermEvent::Resize(100, 30));
        handle_input(&mut state, click(1, 1));
        assert!(state.is_drawer_open());
        state.advance(Duration::from_millis(300));
        handle_input(&mut state, click(99, 20));
        assert!(!state.is_drawer_open());
    }

    fn handler_with(events: Vec<Event<CrosstermEvent>>) -> Handler {
        let (tx, rx) = mpsc::channel();
        for event in events {
            tx.send(event).unwrap();
        }
        Handler { rx, _tx: tx }
    }

    #[test]
    fn handle_next_drains_queued_ticks() {
        let handler = handler_with(vec![
            Event::Tick,
            Event::Tick,
            Event::Input(press(KeyCode::Char('m'))),
            Event::Tick,
        ]);
        let mut state = State::default();
        assert_eq!(handler.handle_next(&mut state).unwrap(), Flow::Changed);
        assert!(state.is_drawer_open());
        assert!(handler.rx.try_recv().is_err());
    }

    #[test]
    fn handle_next_reports_idle_and_exit() {
        let mut state = State::default();
        let handler = handler_with(vec![Event::Tick, Event::Tick]);
        assert_eq!(handler.handle_next(&mut state).unwrap(), Flow::Idle);

        let handler = handler_with(vec![
            Event::Input(press(KeyCode::Char('q'))),
            Event::Input(press(KeyCode::Char('m'))),
        ]);
        assert_eq!(handler.handle_next(&mut state).unwrap(), Flow::Exit);
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn digits_rate_the_focused_scale() {
        let mut state = State::default();
        state.navigate(Screen::MentalHealth);
        handle_input(&mut state, press(KeyCode::Char('4')));
        handle_input(&mut state, press(KeyCode::Char('j')));
        handle_input(&mut state, press(KeyCode::Char('9')));
        match state.screen_state() {
            ScreenState::MentalHealth(check_in) => {
                assert_eq!(check_in.mood(), Some(3));
                assert_eq!(check_in.stress(), None);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn theme_and_log_toggles() {
        let mut state = State::default();
        let before = state.get_theme().name.clone();
        handle_input(&mut state, press(KeyCode::Char('t')));
        assert_ne!(state.get_theme().name, before);
        let shift_l = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT));
        handle_input(&mut state, shift_l);
        assert!(state.is_log_visible());
    }
}

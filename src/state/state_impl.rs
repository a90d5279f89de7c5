use super::alert::Alert;
use super::drawer::{self, Drawer, DrawerHit};
use super::navigation::{drawer_index_of, Screen, DRAWER_ITEMS};
use super::screens::{ScreenEffect, ScreenSettings, ScreenState};
use super::StateError;
use crate::config::{ContextHotkeys, HotkeyAction};
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use log::*;
use ratatui::layout::Rect;
use std::time::Duration;

/// Height of the header bar holding the menu button and screen title.
///
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the clickable menu button at the left of the header.
///
pub const MENU_BUTTON_WIDTH: u16 = 5;

/// Houses data representative of application state.
///
/// The shell owns the active screen and whether the drawer is open. Screens
/// only see their own local state and report back through [`ScreenEffect`].
pub struct State {
    active_screen: Screen,
    drawer_open: bool,
    drawer: Drawer,
    screen_state: ScreenState,
    settings: ScreenSettings,
    alert: Option<Alert>,
    terminal_size: Rect,
    show_log: bool,
    theme: Theme,
    hotkeys: ContextHotkeys,
}

impl Default for State {
    fn default() -> Self {
        State::new(
            Screen::Home,
            ScreenSettings::default(),
            Duration::from_millis(drawer::DEFAULT_DURATION_MS),
            Theme::default(),
            ContextHotkeys::default(),
        )
    }
}

impl State {
    /// Return a new instance showing `start_screen` with the drawer closed.
    ///
    pub fn new(
        start_screen: Screen,
        settings: ScreenSettings,
        drawer_duration: Duration,
        theme: Theme,
        hotkeys: ContextHotkeys,
    ) -> Self {
        State {
            active_screen: start_screen,
            drawer_open: false,
            drawer: Drawer::new(drawer_duration),
            screen_state: ScreenState::mount(start_screen, &settings),
            settings,
            alert: None,
            terminal_size: Rect::default(),
            show_log: false,
            theme,
            hotkeys,
        }
    }

    /// Return the active screen.
    ///
    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    /// Whether the drawer has been asked to be open.
    ///
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Return the header title for the active screen.
    ///
    pub fn header_title(&self) -> &'static str {
        self.active_screen.title()
    }

    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    pub fn screen_state(&self) -> &ScreenState {
        &self.screen_state
    }

    /// Open the drawer with its cursor on the active screen.
    ///
    pub fn open_drawer(&mut self) -> &mut Self {
        if !self.drawer_open {
            debug!("Opening drawer over {}", self.active_screen);
            self.drawer
                .set_cursor(drawer_index_of(self.active_screen));
        }
        self.drawer_open = true;
        self.drawer.set_open(true);
        self
    }

    /// Close the drawer. The slide out continues on its own.
    ///
    pub fn close_drawer(&mut self) -> &mut Self {
        if self.drawer_open {
            debug!("Closing drawer");
        }
        self.drawer_open = false;
        self.drawer.set_open(false);
        self
    }

    /// Make `target` the active screen with fresh local state and close the
    /// drawer.
    ///
    pub fn navigate(&mut self, target: Screen) -> &mut Self {
        debug!("Navigating from {} to {}", self.active_screen, target);
        self.active_screen = target;
        self.screen_state = ScreenState::mount(target, &self.settings);
        self.close_drawer()
    }

    /// Advance animations by `dt`. Returns true while something is moving.
    ///
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.drawer.advance(dt)
    }

    /// Move the drawer cursor down.
    ///
    pub fn next_drawer_item(&mut self) -> &mut Self {
        self.drawer.next();
        self
    }

    /// Move the drawer cursor up.
    ///
    pub fn previous_drawer_item(&mut self) -> &mut Self {
        self.drawer.previous();
        self
    }

    /// Navigate to the screen under the drawer cursor.
    ///
    pub fn select_drawer_item(&mut self) -> &mut Self {
        let target = self.drawer.selected_screen();
        self.navigate(target)
    }

    /// Navigate to the drawer row at `index`, ignoring rows that don't exist.
    ///
    pub fn select_drawer_index(&mut self, index: usize) -> &mut Self {
        match DRAWER_ITEMS.get(index) {
            Some(item) => self.navigate(item.screen),
            None => self,
        }
    }

    /// Return the panel area for the current drawer offset.
    ///
    pub fn drawer_panel_area(&self) -> Rect {
        drawer::panel_area(self.terminal_size, self.drawer.offset())
    }

    /// Handle a left click at `(column, row)`.
    ///
    /// While the drawer is open it captures every click: a click outside the
    /// panel closes it, a click on a menu row navigates and a click elsewhere
    /// on the panel does nothing. Otherwise the header menu button opens it.
    pub fn click(&mut self, column: u16, row: u16) -> &mut Self {
        if self.alert.is_some() {
            return self;
        }
        if self.drawer_open {
            match drawer::hit_test(self.drawer_panel_area(), column, row) {
                DrawerHit::Outside => {
                    self.close_drawer();
                }
                DrawerHit::Panel => {}
                DrawerHit::MenuRow(screen) => {
                    self.navigate(screen);
                }
            }
            return self;
        }
        let header_top = self.terminal_size.y;
        if row >= header_top
            && row < header_top + HEADER_HEIGHT
            && column >= self.terminal_size.x
            && column < self.terminal_size.x + MENU_BUTTON_WIDTH
        {
            self.open_drawer();
        }
        self
    }

    /// Return the alert currently shown, if any.
    ///
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn show_alert(&mut self, alert: Alert) -> &mut Self {
        info!("{}: {}", alert.title, alert.message);
        self.alert = Some(alert);
        self
    }

    pub fn dismiss_alert(&mut self) -> &mut Self {
        self.alert = None;
        self
    }

    /// Apply a screen action to the mounted screen. Alerts are shown right
    /// away; a returned value is text the caller should copy to the
    /// clipboard.
    ///
    pub fn screen_action(&mut self, action: &HotkeyAction) -> Option<&'static str> {
        match self.screen_state.apply(action)? {
            ScreenEffect::Alert(alert) => {
                self.show_alert(alert);
                None
            }
            ScreenEffect::CopyToClipboard(text) => Some(text),
        }
    }

    /// Pick `value` on the mounted screen's focused rating scale, where the
    /// screen has one.
    ///
    pub fn rate_screen(&mut self, value: usize) -> Result<&mut Self, StateError> {
        self.screen_state.rate(value)?;
        Ok(self)
    }

    /// Whether the mounted screen waits on a confirmation.
    ///
    pub fn has_confirmation(&self) -> bool {
        self.screen_state.has_confirmation()
    }

    /// Confirm the pending medication deletion.
    ///
    pub fn confirm_dialog(&mut self) -> &mut Self {
        if let ScreenState::Medications(medications) = &mut self.screen_state {
            if let Err(e) = medications.confirm_delete() {
                warn!("Failed to delete medication: {}", e);
            }
        }
        self
    }

    /// Cancel the pending medication deletion.
    ///
    pub fn cancel_dialog(&mut self) -> &mut Self {
        if let ScreenState::Medications(medications) = &mut self.screen_state {
            medications.cancel_delete();
        }
        self
    }

    /// Whether keystrokes go to a text field of the mounted screen.
    ///
    pub fn is_text_input(&self) -> bool {
        self.screen_state.is_text_input()
    }

    /// Route a keystroke into the text field being edited.
    ///
    pub fn text_input(&mut self, key: KeyEvent) -> &mut Self {
        match &mut self.screen_state {
            ScreenState::Medications(medications) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                    medications.stop_editing();
                }
                KeyCode::Backspace => {
                    medications.remove_char();
                }
                KeyCode::Char(c) => {
                    medications.add_char(c);
                }
                _ => {}
            },
            ScreenState::MentalHealth(check_in) => match key.code {
                KeyCode::Esc => {
                    check_in.stop_editing();
                }
                _ => {
                    check_in.input(key);
                }
            },
            _ => {}
        }
        self
    }

    /// Update the terminal size used for hit-testing.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next available theme.
    ///
    pub fn cycle_theme(&mut self) -> &mut Self {
        let themes = Theme::available_themes();
        let next = themes
            .iter()
            .position(|name| name == &self.theme.name)
            .map(|index| (index + 1) % themes.len())
            .unwrap_or(0);
        if let Some(theme) = themes.get(next).and_then(|name| Theme::from_name(name)) {
            debug!("Switching theme to {}", theme.name);
            self.theme = theme;
        }
        self
    }

    /// Get the hotkey bindings.
    ///
    pub fn get_hotkeys(&self) -> &ContextHotkeys {
        &self.hotkeys
    }
}

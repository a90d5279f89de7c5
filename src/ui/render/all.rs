use super::{alert, confirmation, drawer, footer, header, log, screen, Frame};
use crate::state::{State, HEADER_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log pane when shown.
///
const LOG_HEIGHT: u16 = 10;

/// Render all widgets according to state. Overlays are drawn last so they
/// sit on top: the drawer, then dialogs.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, chunks[0], state);
    screen(frame, chunks[1], state);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);

    if state.drawer().is_mounted() {
        drawer(frame, size, state);
    }
    if state.has_confirmation() {
        confirmation(frame, size, state);
    }
    if let Some(current) = state.alert() {
        alert(frame, size, current, state.get_theme());
    }
}

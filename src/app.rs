use crate::config::Config;
use crate::events::terminal::{Flow, Handler as TerminalEventHandler};
use crate::state::screens::ScreenSettings;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::time::Instant;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!("Unknown theme '{}', using default", config.theme_name);
            Theme::default()
        });
        let settings = ScreenSettings {
            water_daily_goal: config.water_daily_goal,
        };
        let state = State::new(
            config.initial_screen(),
            settings,
            config.drawer_animation(),
            theme,
            config.hotkeys(),
        );
        let mut app = App { state, config };
        let result = app.start_ui();

        // Save config on exit
        app.config.theme_name = app.state.get_theme().name.clone();
        if let Err(e) = app.config.save() {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        result
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    /// Draw, wait for the next event and advance animations by the wall clock
    /// until exit is requested. Frames are only redrawn after input, while
    /// the drawer moves, or while the log pane is open.
    ///
    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        let mut last_frame = Instant::now();
        let mut stale = true;
        loop {
            if let Ok(size) = terminal.size() {
                if size != self.state.terminal_size() {
                    self.state.set_terminal_size(size);
                    stale = true;
                }
            };
            let now = Instant::now();
            let offset = self.state.drawer().offset();
            self.state.advance(now.duration_since(last_frame));
            last_frame = now;
            let moved = self.state.drawer().offset() != offset;

            if stale || moved || self.state.is_log_visible() {
                terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            }
            match terminal_event_handler.handle_next(&mut self.state)? {
                Flow::Exit => {
                    debug!("Received application exit request.");
                    break;
                }
                Flow::Changed => stale = true,
                Flow::Idle => stale = false,
            }
        }
        Ok(())
    }
}

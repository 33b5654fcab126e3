//! TUI Renderer for the dashboard
//!
//! Owns the terminal and the event loop. Records arrive once over a channel
//! from the fetch thread; everything else is driven by key presses and the
//! loop's tick.
//!
//! ## Design:
//! - The renderer owns the terminal, the page component owns UI state
//! - Fetch results are received as `TuiEvent`s, never polled from the loader
//! - The search debouncer is advanced on every tick

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flowboard_runtime::FetchState;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::components::{DashboardAction, DashboardComponent};

const TICK: Duration = Duration::from_millis(100);

/// Events sent from the handler's fetch thread to the renderer
pub enum TuiEvent {
    Fetched(FetchState),
}

pub struct TuiRenderer {
    dashboard: DashboardComponent,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            dashboard: DashboardComponent::new(source),
            should_quit: false,
        }
    }

    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        let mut fetch_open = true;

        while !self.should_quit {
            terminal.draw(|f| {
                let area = f.area();
                self.dashboard.render(f, area);
            })?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            if fetch_open {
                match rx.try_recv() {
                    Ok(TuiEvent::Fetched(state)) => self.dashboard.apply_fetch(state),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => fetch_open = false,
                }
            }

            self.dashboard.tick(Instant::now());
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(DashboardAction::Quit) = self.dashboard.handle_input(key, Instant::now()) {
            self.should_quit = true;
        }
    }
}

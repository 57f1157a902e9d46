use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    game::GameState,
    view::{ViewModel, build_view},
};

use super::types::{Focus, LogBuffer};

/// Main application state container.
pub struct App {
    pub(in crate::ui) state: GameState,
    pub(in crate::ui) focus: Focus,
    /// Board cell under the keyboard selection.
    pub(in crate::ui) selected_cell: usize,
    /// History step highlighted in the move list.
    pub(in crate::ui) selected_step: usize,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(state: GameState, logs: LogBuffer) -> Self {
        let selected_step = state.cursor();

        Self {
            state,
            focus: Focus::Board,
            selected_cell: 4,
            selected_step,
            logs,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("New game, X moves first");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn view(&self) -> ViewModel {
        build_view(&self.state)
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        let stamp = Local::now().format("%H:%M:%S");
        self.logs.push(format!("{stamp} {}", msg.into()));
    }
}

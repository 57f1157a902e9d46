//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent};

use super::super::{app::App, types::Focus};
use super::GameHandler;

/// Helper struct for translating key presses into game actions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.app.log("Exit requested");
                return true;
            }

            KeyCode::Char(c @ '1'..='9') => {
                // 1-9 map to cells 0-8
                let cell = (c as u8 - b'1') as usize;
                GameHandler::new(self.app).click_cell(cell);
            }

            KeyCode::Char('s' | 'S') => GameHandler::new(self.app).toggle_sort(),
            KeyCode::Char('n' | 'N') => GameHandler::new(self.app).new_game(),
            KeyCode::Tab | KeyCode::BackTab => GameHandler::new(self.app).toggle_focus(),

            KeyCode::Home => {
                GameHandler::new(self.app).jump_to_start();
            }
            KeyCode::End => {
                GameHandler::new(self.app).jump_to_latest();
            }

            _ => match self.app.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        false
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let mut handler = GameHandler::new(self.app);
        match key.code {
            KeyCode::Up => handler.move_cell_selection(-1, 0),
            KeyCode::Down => handler.move_cell_selection(1, 0),
            KeyCode::Left => handler.move_cell_selection(0, -1),
            KeyCode::Right => handler.move_cell_selection(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                handler.click_selected();
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, key: KeyEvent) {
        let mut handler = GameHandler::new(self.app);
        match key.code {
            KeyCode::Up => handler.move_list_selection(-1),
            KeyCode::Down => handler.move_list_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                handler.jump_selected();
            }
            _ => {}
        }
    }
}

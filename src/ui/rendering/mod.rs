mod board;
mod logs;
mod moves;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let view = self.view();

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),   // game area
                Constraint::Length(3), // key help
                Constraint::Length(8), // logs panel
            ])
            .split(f.area());

        let game_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(25), Constraint::Min(30)])
            .split(outer[0]);

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(7), Constraint::Min(0)])
            .split(game_layout[0]);

        self.draw_status(f, left_layout[0], &view);
        self.draw_board(f, left_layout[1], &view);
        self.draw_moves(f, game_layout[1], &view);
        self.draw_help(f, outer[1]);
        self.draw_logs(f, outer[2]);
    }
}

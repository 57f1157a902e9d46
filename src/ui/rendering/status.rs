use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    game::GameStatus,
    ui::{app::App, types::Focus},
    view::ViewModel,
};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect, view: &ViewModel) {
        let style = match view.outcome {
            GameStatus::Winner(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            GameStatus::Draw => Style::default().fg(Color::Yellow),
            GameStatus::Next(_) => Style::default().fg(Color::White),
        };

        f.render_widget(
            Paragraph::new(view.status.as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let help = match self.focus {
            Focus::Board => {
                "1-9/arrows+Enter: play | Tab: moves | Home/End: start/latest | s: sort | n: new | q: quit"
            }
            Focus::Moves => {
                "Up/Down+Enter: jump | Tab: board | Home/End: start/latest | s: sort | n: new | q: quit"
            }
        };

        f.render_widget(
            Paragraph::new(help).block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}

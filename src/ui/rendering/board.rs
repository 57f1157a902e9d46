//! Board grid rendering with the winning line highlighted.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    game::Mark,
    ui::{app::App, types::Focus},
    view::ViewModel,
};

impl App {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect, view: &ViewModel) {
        let is_winning = |cell: usize| view.winning_line.is_some_and(|line| line.contains(&cell));

        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                lines.push(Line::from("───┼───┼───"));
            }

            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::raw("│"));
                }
                let cell = row * 3 + col;
                let (text, mut style) = match view.board.get(cell) {
                    Some(Mark::X) => (" X ".to_string(), Style::default().fg(Color::Cyan)),
                    Some(Mark::O) => (" O ".to_string(), Style::default().fg(Color::Magenta)),
                    None => (format!(" {} ", cell + 1), Style::default().fg(Color::DarkGray)),
                };

                if is_winning(cell) {
                    style = Style::default()
                        .bg(Color::Green)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD);
                }
                if self.focus == Focus::Board && cell == self.selected_cell {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }

        let border_style = if self.focus == Focus::Board {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("Board"),
            ),
            area,
        );
    }
}

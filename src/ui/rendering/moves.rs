//! Move list rendering for time travel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    ui::{app::App, types::Focus},
    view::ViewModel,
};

impl App {
    pub(in crate::ui) fn draw_moves(&self, f: &mut Frame, area: Rect, view: &ViewModel) {
        let focused = self.focus == Focus::Moves;

        let items: Vec<ListItem> = view
            .move_list
            .iter()
            .map(|entry| {
                let marker = if entry.is_current { "▶ " } else { "  " };
                let mut style = if entry.is_current {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                if focused && entry.step == self.selected_step {
                    style = style.bg(Color::DarkGray);
                }

                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(entry.label.clone(), style),
                ]))
            })
            .collect();

        let order = if view.sort_descending {
            "newest first"
        } else {
            "oldest first"
        };
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!("Moves ({order})")),
            ),
            area,
        );
    }
}

//! Immutable view data handed to a renderer.

use std::fmt;

use serde::Serialize;

use crate::game::{Board, GameState, GameStatus, MoveRecord};

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub board: Board,
    pub winning_line: Option<[usize; 3]>,
    /// Outcome behind `status`, for renderers that style by result.
    pub outcome: GameStatus,
    pub status: String,
    pub move_list: Vec<MoveEntry>,
    pub sort_descending: bool,
}

impl ViewModel {
    /// Position of `step` in the move list as presented.
    pub fn position_of(&self, step: usize) -> Option<usize> {
        self.move_list.iter().position(|entry| entry.step == step)
    }
}

pub fn move_label(step: usize, record: &MoveRecord) -> String {
    match record.location {
        Some(location) if step > 0 => format!("Go to move #{step} @ {location}"),
        _ => "Go to game start".to_string(),
    }
}

/// Builds the view for the snapshot under the cursor.
pub fn build_view(state: &GameState) -> ViewModel {
    let mut move_list: Vec<MoveEntry> = state
        .history()
        .iter()
        .enumerate()
        .map(|(step, record)| MoveEntry {
            step,
            label: move_label(step, record),
            is_current: step == state.cursor(),
        })
        .collect();

    if state.sort_descending() {
        move_list.reverse();
    }

    let outcome = state.status();

    ViewModel {
        board: *state.current_board(),
        winning_line: state.winner().map(|win| win.line),
        outcome,
        status: outcome.to_string(),
        move_list,
        sort_descending: state.sort_descending(),
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "{}", self.status)?;
        if let Some(line) = self.winning_line {
            writeln!(f, "Winning line: {line:?}")?;
        }
        writeln!(f)?;
        for (i, entry) in self.move_list.iter().enumerate() {
            let marker = if entry.is_current { '>' } else { ' ' };
            writeln!(f, "{marker} {}. {}", i + 1, entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Event, Mark, replay, reduce};

    #[test]
    fn test_initial_view() {
        let view = build_view(&GameState::new());

        assert!(view.board.is_empty());
        assert_eq!(view.winning_line, None);
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.outcome, GameStatus::Next(Mark::X));
        assert!(!view.sort_descending);
        assert_eq!(
            view.move_list,
            vec![MoveEntry {
                step: 0,
                label: "Go to game start".to_string(),
                is_current: true,
            }]
        );
    }

    #[test]
    fn test_move_labels_use_col_row() {
        let state = replay(GameState::new(), &[4, 2, 6]);
        let labels: Vec<_> = build_view(&state)
            .move_list
            .into_iter()
            .map(|entry| entry.label)
            .collect();

        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 @ 2,2",
                "Go to move #2 @ 3,1",
                "Go to move #3 @ 1,3",
            ]
        );
    }

    #[test]
    fn test_current_entry_follows_cursor() {
        let state = replay(GameState::new(), &[0, 1, 2]);
        let state = reduce(&state, Event::HistoryJump(1));
        let view = build_view(&state);

        let current: Vec<_> = view
            .move_list
            .iter()
            .filter(|entry| entry.is_current)
            .map(|entry| entry.step)
            .collect();
        assert_eq!(current, vec![1]);
        assert_eq!(view.status, "Next player: O");
        assert_eq!(view.board.get(2), None);
    }

    #[test]
    fn test_winning_view() {
        let state = replay(GameState::new(), &[0, 1, 4, 2, 8]);
        let view = build_view(&state);

        assert_eq!(view.winning_line, Some([0, 4, 8]));
        assert_eq!(view.status, "Winner: X");
    }

    #[test]
    fn test_ninth_move_win_view() {
        let state = replay(GameState::new(), &[0, 1, 2, 4, 3, 5, 7, 8, 6]);
        let view = build_view(&state);

        assert_eq!(view.move_list.len(), 10);
        assert_eq!(view.winning_line, Some([0, 3, 6]));
        assert_eq!(view.status, "Winner: X");
        assert_eq!(view.outcome, GameStatus::Winner(Mark::X));
    }

    #[test]
    fn test_draw_view() {
        let state = replay(GameState::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let view = build_view(&state);

        assert_eq!(view.winning_line, None);
        assert_eq!(view.status, "It's a draw!");
        assert_eq!(view.outcome, GameStatus::Draw);
    }

    #[test]
    fn test_toggle_sort_twice_restores_order() {
        let state = replay(GameState::new(), &[0, 1, 2]);
        let original = build_view(&state).move_list;

        let descending = reduce(&state, Event::ToggleSort);
        let reversed = build_view(&descending);
        assert!(reversed.sort_descending);
        let steps: Vec<_> = reversed.move_list.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);
        assert_eq!(reversed.position_of(3), Some(0));

        let restored = reduce(&descending, Event::ToggleSort);
        assert_eq!(build_view(&restored).move_list, original);
        assert_eq!(restored.history(), state.history());
        assert_eq!(restored.cursor(), state.cursor());
    }

    #[test]
    fn test_view_serializes() {
        let state = replay(GameState::new(), &[0]);
        let json = serde_json::to_value(build_view(&state)).unwrap();

        assert_eq!(json["status"], "Next player: O");
        assert_eq!(json["board"][0], "X");
        assert!(json["board"][1].is_null());
        assert_eq!(json["move_list"][1]["label"], "Go to move #1 @ 1,1");
        assert_eq!(json["winning_line"], serde_json::Value::Null);
        assert_eq!(json["outcome"]["Next"], "O");
    }

    #[test]
    fn test_text_rendering() {
        let state = replay(GameState::new(), &[4]);
        let text = build_view(&state).to_string();

        assert!(text.contains("   | X |   "));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 2. Go to move #1 @ 2,2"));
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win,
    Lose,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

/// Board-only win check; a loss is decided by the reveal that hit the mine.
pub fn evaluate(board: &Board) -> Outcome {
    if all_safe_cells_opened(board) || flags_match_mines(board) {
        Outcome::Win
    } else {
        Outcome::InProgress
    }
}

pub fn all_safe_cells_opened(board: &Board) -> bool {
    board.cells().all(|cell| cell.is_mine() || cell.opened)
}

/// Every mine flagged and no safe cell flagged.
pub fn flags_match_mines(board: &Board) -> bool {
    let all_mines_flagged = board.cells().all(|cell| !cell.is_mine() || cell.flagged);
    let no_false_flags = board.cells().all(|cell| cell.is_mine() || !cell.flagged);
    all_mines_flagged && no_false_flags
}

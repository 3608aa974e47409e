use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }
}

/// Keeps `0 <= placed <= budget` while flags are toggled on a board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlagTracker {
    budget: CellCount,
    placed: CellCount,
}

impl FlagTracker {
    pub const fn new(budget: CellCount) -> Self {
        Self { budget, placed: 0 }
    }

    pub const fn budget(&self) -> CellCount {
        self.budget
    }

    pub const fn placed(&self) -> CellCount {
        self.placed
    }

    pub const fn is_exhausted(&self) -> bool {
        self.placed == self.budget
    }

    pub fn toggle(&mut self, board: &mut Board, coords: Coord2) -> FlagOutcome {
        let Some(cell) = board.get(coords) else {
            return FlagOutcome::NoChange;
        };
        if cell.opened {
            return FlagOutcome::NoChange;
        }

        if cell.flagged {
            board[coords].flagged = false;
            self.placed -= 1;
            FlagOutcome::Unflagged
        } else if self.placed < self.budget {
            board[coords].flagged = true;
            self.placed += 1;
            FlagOutcome::Flagged
        } else {
            log::debug!("Flag budget of {} exhausted, {:?} rejected", self.budget, coords);
            FlagOutcome::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flags_and_unflags() {
        let mut board = Board::new((3, 3));
        let mut flags = FlagTracker::new(2);

        assert_eq!(flags.toggle(&mut board, (0, 0)), FlagOutcome::Flagged);
        assert!(board[(0, 0)].flagged);
        assert_eq!(flags.placed(), 1);

        assert_eq!(flags.toggle(&mut board, (0, 0)), FlagOutcome::Unflagged);
        assert!(!board[(0, 0)].flagged);
        assert_eq!(flags.placed(), 0);
    }

    #[test]
    fn budget_is_never_exceeded() {
        let mut board = Board::new((3, 3));
        let mut flags = FlagTracker::new(2);

        flags.toggle(&mut board, (0, 0));
        flags.toggle(&mut board, (0, 1));
        assert!(flags.is_exhausted());

        assert_eq!(flags.toggle(&mut board, (0, 2)), FlagOutcome::NoChange);
        assert!(!board[(0, 2)].flagged);
        assert_eq!(flags.placed(), 2);

        // unflagging is always allowed, even at budget
        assert_eq!(flags.toggle(&mut board, (0, 1)), FlagOutcome::Unflagged);
        assert_eq!(flags.placed(), 1);
        assert_eq!(flags.toggle(&mut board, (0, 2)), FlagOutcome::Flagged);
    }

    #[test]
    fn opened_or_missing_cells_cannot_be_flagged() {
        let mut board = Board::new((3, 3));
        board[(1, 1)].opened = true;
        let mut flags = FlagTracker::new(2);

        assert_eq!(flags.toggle(&mut board, (1, 1)), FlagOutcome::NoChange);
        assert_eq!(flags.toggle(&mut board, (3, 0)), FlagOutcome::NoChange);
        assert_eq!(flags.placed(), 0);
    }
}

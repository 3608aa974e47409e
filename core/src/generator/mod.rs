use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Lays mines onto a fresh board once the first cell is opened.
pub trait MineGenerator {
    /// Places up to `mine_count` mines, never inside the 3x3 block around
    /// `first_click`, and returns how many were placed.
    fn place_mines(self, board: &mut Board, first_click: Coord2, mine_count: CellCount)
        -> CellCount;
}

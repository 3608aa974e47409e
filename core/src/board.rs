use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells, indexed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new((rows, columns): Coord2) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);
        Self {
            cells: Array2::default((rows, columns).to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        // the constructor only accepts `Coord` dimensions
        (rows as Coord, columns as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn in_bounds(&self, (row, col): Coord2) -> bool {
        let (rows, columns) = self.size();
        row < rows && col < columns
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn neighbors_of(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.in_bounds(coords).then(|| &self[coords])
    }

    /// Every in-bounds coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, columns) = self.size();
        (0..rows).flat_map(move |row| (0..columns).map(move |col| (row, col)))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Turns an eligible cell into a mine and bumps its safe neighbors' counts.
    ///
    /// Returns `false` without touching the board when the cell is ineligible.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self[coords];
        if !cell.eligible {
            return false;
        }
        cell.eligible = false;
        cell.kind = CellKind::Mine;

        for pos in self.neighbors_of(coords) {
            if let CellKind::Safe(count) = &mut self[pos].kind {
                *count += 1;
            }
        }
        true
    }

    /// Marks `center` and its neighbors so no mine can be placed there.
    pub fn exclude_zone(&mut self, center: Coord2) {
        self[center].eligible = false;
        for pos in self.neighbors_of(center) {
            self[pos].eligible = false;
        }
    }

    pub fn eligible_count(&self) -> CellCount {
        self.count_where(|cell| cell.eligible)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(Cell::is_mine)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count_where(|cell| cell.flagged)
    }

    pub fn opened_safe_count(&self) -> CellCount {
        self.count_where(|cell| cell.opened && !cell.is_mine())
    }

    /// Force-opens every cell, used for the final display.
    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.opened = true;
        }
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        // at most 255 * 255 cells
        self.cells.iter().filter(|cell| pred(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_pristine() {
        let board = Board::new((9, 12));

        assert_eq!(board.size(), (9, 12));
        assert_eq!(board.total_cells(), 108);
        assert!(board.cells().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        let board = Board::new((9, 12));

        assert!(board.in_bounds((8, 11)));
        assert!(!board.in_bounds((9, 0)));
        assert!(!board.in_bounds((0, 12)));
        assert_eq!(board.validate_coords((9, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn place_mine_updates_neighbor_counts() {
        let mut board = Board::new((3, 3));

        assert!(board.place_mine((0, 0)));
        assert!(board.place_mine((0, 1)));

        assert!(board[(0, 0)].is_mine());
        assert_eq!(board[(0, 0)].adjacent_mines(), 0);
        assert_eq!(board[(1, 0)].kind, CellKind::Safe(2));
        assert_eq!(board[(1, 2)].kind, CellKind::Safe(1));
        assert_eq!(board[(2, 2)].kind, CellKind::Safe(0));
        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn place_mine_is_idempotent() {
        let mut board = Board::new((3, 3));

        assert!(board.place_mine((1, 1)));
        assert!(!board.place_mine((1, 1)));

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(0, 0)].kind, CellKind::Safe(1));
    }

    #[test]
    fn exclude_zone_blocks_placement() {
        let mut board = Board::new((9, 9));
        board.exclude_zone((0, 0));

        assert_eq!(board.eligible_count(), 81 - 4);
        assert!(!board.place_mine((1, 1)));
        assert!(board.place_mine((2, 2)));
    }
}

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::*;

/// Cells opened by a single [`open`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealResult {
    pub opened: Vec<Coord2>,
    pub hit_mine: bool,
}

impl RevealResult {
    pub fn has_update(&self) -> bool {
        !self.opened.is_empty()
    }
}

/// Opens `coords` and flood-fills outwards from zero-count cells.
///
/// Opened, flagged and out-of-bounds targets are left alone. The fill never
/// expands from a mine and never opens through a flag.
pub fn open(board: &mut Board, coords: Coord2) -> RevealResult {
    let mut result = RevealResult::default();
    if !can_open(board, coords) {
        return result;
    }

    let mut to_visit = VecDeque::from([coords]);
    while let Some(visit_coords) = to_visit.pop_front() {
        // neighbors can be queued twice before either is opened
        if !can_open(board, visit_coords) {
            continue;
        }

        board[visit_coords].opened = true;
        result.opened.push(visit_coords);

        let kind = board[visit_coords].kind;
        match kind {
            CellKind::Mine => {
                if visit_coords == coords {
                    result.hit_mine = true;
                }
            }
            CellKind::Safe(0) => {
                let next = board
                    .neighbors_of(visit_coords)
                    .filter(|&pos| can_open(board, pos));
                to_visit.extend(next);
            }
            CellKind::Safe(_) => {}
        }
    }

    log::trace!(
        "Opened {} cells from {:?}, hit mine: {}",
        result.opened.len(),
        coords,
        result.hit_mine
    );
    result
}

fn can_open(board: &Board, coords: Coord2) -> bool {
    board
        .get(coords)
        .is_some_and(|cell| !cell.opened && !cell.flagged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn board_with_mines(size: Coord2, mines: &[Coord2]) -> Board {
        let mut board = Board::new(size);
        for &coords in mines {
            assert!(board.place_mine(coords));
        }
        board
    }

    #[test]
    fn numbered_cell_opens_alone() {
        let mut board = board_with_mines((3, 3), &[(0, 0)]);

        let result = open(&mut board, (1, 1));

        assert_eq!(result.opened, [(1, 1)]);
        assert!(!result.hit_mine);
    }

    #[test]
    fn zero_cell_floods_to_numbered_border() {
        let mut board = board_with_mines((3, 3), &[(2, 2)]);

        let result = open(&mut board, (0, 0));

        assert_eq!(result.opened.len(), 8);
        assert!(!board[(2, 2)].opened);
        assert_eq!(board.opened_safe_count(), 8);
    }

    #[test]
    fn flood_fill_region_is_contiguous_and_bounded() {
        // wall of mines down column 4 splits the board
        let mines: Vec<Coord2> = (0..9).map(|row| (row, 4)).collect();
        let mut board = board_with_mines((9, 9), &mines);

        let result = open(&mut board, (4, 0));

        let opened: BTreeSet<_> = result.opened.iter().copied().collect();
        assert_eq!(opened.len(), result.opened.len(), "cell opened twice");
        for row in 0..9 {
            for col in 0..4 {
                assert!(opened.contains(&(row, col)));
            }
            for col in 4..9 {
                assert!(!opened.contains(&(row, col)));
            }
        }
    }

    #[test]
    fn flags_block_the_fill() {
        let mut board = board_with_mines((1, 5), &[]);
        board[(0, 2)].flagged = true;

        let result = open(&mut board, (0, 0));

        assert_eq!(result.opened, [(0, 0), (0, 1)]);
        assert!(!board[(0, 2)].opened);
        assert!(!board[(0, 3)].opened);
    }

    #[test]
    fn opened_and_flagged_targets_are_noops() {
        let mut board = board_with_mines((3, 3), &[(0, 0)]);
        board[(0, 0)].flagged = true;

        assert!(!open(&mut board, (0, 0)).has_update());
        assert!(open(&mut board, (1, 1)).has_update());
        assert!(!open(&mut board, (1, 1)).has_update());
        assert!(!open(&mut board, (5, 5)).has_update());
    }

    #[test]
    fn clicking_a_mine_reports_hit() {
        let mut board = board_with_mines((3, 3), &[(1, 1)]);

        let result = open(&mut board, (1, 1));

        assert!(result.hit_mine);
        assert_eq!(result.opened, [(1, 1)]);
    }
}

use alloc::vec::Vec;

use super::*;

/// Places a predetermined set of mines, skipping any inside the safe zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn place_mines(
        self,
        board: &mut Board,
        first_click: Coord2,
        mine_count: CellCount,
    ) -> CellCount {
        board.exclude_zone(first_click);

        let mut placed = 0;
        for coords in self.mines {
            if placed == mine_count {
                break;
            }
            if !board.in_bounds(coords) {
                log::warn!("Fixed mine {:?} is out of bounds, skipped", coords);
                continue;
            }
            if board.place_mine(coords) {
                placed += 1;
            } else {
                log::warn!("Fixed mine {:?} is not eligible, skipped", coords);
            }
        }
        if placed != mine_count {
            log::warn!(
                "Fixed layout count mismatch, actual: {}, requested: {}",
                placed,
                mine_count
            );
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honours_safe_zone_and_budget() {
        let mut board = Board::new((9, 9));
        let generator = FixedMineGenerator::new([(0, 0), (5, 5), (8, 8), (8, 7), (0, 8)]);

        let placed = generator.place_mines(&mut board, (1, 1), 3);

        assert_eq!(placed, 3);
        assert!(!board[(0, 0)].is_mine());
        assert!(board[(5, 5)].is_mine());
        assert!(board[(8, 8)].is_mine());
        assert!(board[(8, 7)].is_mine());
        assert!(!board[(0, 8)].is_mine());
    }
}

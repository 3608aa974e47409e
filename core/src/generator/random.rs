use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement by rejection sampling: draw a cell, keep it if eligible, repeat.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place_mines(
        self,
        board: &mut Board,
        first_click: Coord2,
        mine_count: CellCount,
    ) -> CellCount {
        board.exclude_zone(first_click);

        let free_cells = board.eligible_count();
        let target = if mine_count > free_cells {
            log::warn!(
                "Not enough room for mines, requested {} but only {} cells are free",
                mine_count,
                free_cells
            );
            free_cells
        } else {
            mine_count
        };

        let (rows, columns) = board.size();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed = 0;
        let mut draws: u32 = 0;
        while placed < target {
            let coords = (rng.random_range(0..rows), rng.random_range(0..columns));
            draws += 1;
            if board.place_mine(coords) {
                placed += 1;
            }
        }
        log::debug!(
            "Placed {} mines around safe start {:?} in {} draws (seed {})",
            placed,
            first_click,
            draws,
            self.seed
        );
        placed
    }
}

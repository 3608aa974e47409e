use core::fmt;
use serde::{Deserialize, Serialize};

/// What lies under a cell. Mines carry no adjacency count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    Safe(u8),
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Safe(0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub opened: bool,
    pub flagged: bool,
    /// Cleared for the safe zone and for cells that already became mines.
    pub eligible: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            kind: CellKind::default(),
            opened: false,
            flagged: false,
            eligible: true,
        }
    }
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn adjacent_mines(&self) -> u8 {
        match self.kind {
            CellKind::Mine => 0,
            CellKind::Safe(count) => count,
        }
    }

    pub const fn symbol(&self) -> CellSymbol {
        if self.flagged {
            CellSymbol::Marked
        } else if !self.opened {
            CellSymbol::Hidden
        } else {
            match self.kind {
                CellKind::Mine => CellSymbol::Mine,
                CellKind::Safe(0) => CellSymbol::Blank,
                CellKind::Safe(count) => CellSymbol::Count(count),
            }
        }
    }
}

/// Player-visible rendering of a cell, derived purely from its state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellSymbol {
    Marked,
    Hidden,
    Mine,
    Count(u8),
    Blank,
}

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marked => f.write_str("[&]"),
            Self::Hidden => f.write_str("[#]"),
            Self::Mine => f.write_str("[*]"),
            Self::Count(count) => write!(f, "[{}]", count),
            Self::Blank => f.write_str("[ ]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn flag_wins_over_everything() {
        let cell = Cell {
            kind: CellKind::Mine,
            opened: true,
            flagged: true,
            eligible: false,
        };
        assert_eq!(cell.symbol(), CellSymbol::Marked);
    }

    #[test]
    fn opened_cells_show_their_content() {
        let mut cell = Cell {
            opened: true,
            ..Cell::default()
        };
        assert_eq!(cell.symbol().to_string(), "[ ]");

        cell.kind = CellKind::Safe(3);
        assert_eq!(cell.symbol().to_string(), "[3]");

        cell.kind = CellKind::Mine;
        assert_eq!(cell.symbol().to_string(), "[*]");
    }

    #[test]
    fn hidden_cell_hides_mine() {
        let cell = Cell {
            kind: CellKind::Mine,
            ..Cell::default()
        };
        assert_eq!(cell.symbol().to_string(), "[#]");
        assert_eq!(cell.adjacent_mines(), 0);
    }
}

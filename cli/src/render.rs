use std::fmt::Write;

use kaboom_core::{Board, FlagTracker};

use crate::locale::Messages;

/// Draws the board with 1-based row and column headers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("[0]");
    for col in 1..=board.columns() {
        if col < 10 {
            let _ = write!(out, " {} ", col);
        } else {
            let _ = write!(out, " {}", col);
        }
    }
    out.push('\n');

    for row in 0..board.rows() {
        let _ = write!(out, "{:<3}", row + 1);
        for col in 0..board.columns() {
            let _ = write!(out, "{}", board[(row, col)].symbol());
        }
        out.push('\n');
    }
    out
}

pub fn render_flags(flags: &FlagTracker, messages: &Messages) -> String {
    format!(
        "{} {} {} {}",
        messages.flags_placed,
        flags.placed(),
        messages.of,
        flags.budget()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Lang;

    #[test]
    fn draws_headers_and_symbols() {
        let mut board = Board::new((2, 3));
        board.place_mine((0, 0));
        board[(0, 1)].opened = true;
        board[(1, 2)].opened = true;
        board[(1, 0)].flagged = true;

        let expected = "[0] 1  2  3 \n1  [#][1][#]\n2  [&][#][ ]\n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn wide_boards_keep_headers_aligned() {
        let board = Board::new((10, 11));
        let text = render_board(&board);
        let mut lines = text.lines();

        assert!(lines.next().unwrap().ends_with(" 9  10 11"));
        assert!(lines.nth(9).unwrap().starts_with("10 [#]"));
    }

    #[test]
    fn flag_counter_line() {
        let flags = FlagTracker::new(10);
        assert_eq!(render_flags(&flags, Lang::En.messages()), "Flags placed: 0 of 10");
    }
}

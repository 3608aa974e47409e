use kaboom_core::{Command, Coord};

const OPEN_ALIASES: [&str; 4] = ["open", "o", "открыть", "о"];
const FLAG_ALIASES: [&str; 4] = ["flag", "f", "флаг", "ф"];

/// Parses `<verb> <row> <column>` with 1-based coordinates.
///
/// Anything malformed yields `None`; the caller treats that as a silent no-op.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let (verb, row, col) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }

    let coords = (parse_coord(row)?, parse_coord(col)?);
    let verb = verb.to_lowercase();
    if OPEN_ALIASES.contains(&verb.as_str()) {
        Some(Command::Open(coords))
    } else if FLAG_ALIASES.contains(&verb.as_str()) {
        Some(Command::Flag(coords))
    } else {
        None
    }
}

fn parse_coord(token: &str) -> Option<Coord> {
    token.parse::<Coord>().ok()?.checked_sub(1)
}

/// Case-insensitive match of trimmed player input against a list of aliases.
pub fn matches_any(input: &str, aliases: &[&str]) -> bool {
    let input = input.trim().to_lowercase();
    aliases.contains(&input.as_str())
}

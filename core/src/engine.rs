use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Won => Outcome::Win,
            Self::Lost => Outcome::Lose,
            Self::NotStarted | Self::InProgress => Outcome::InProgress,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// What a finished round contributes to the statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: Outcome,
    pub turns: u32,
    pub difficulty: Difficulty,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
}

impl Command {
    pub const fn coords(self) -> Coord2 {
        match self {
            Self::Open(coords) | Self::Flag(coords) => coords,
        }
    }
}

/// One round of play on a single board.
///
/// Mines are laid by `generator` on the first open, so the first click and its
/// neighbors are always safe.
#[derive(Clone, Debug)]
pub struct GameSession<G> {
    board: Board,
    generator: Option<G>,
    preset: DifficultyPreset,
    mines_placed: CellCount,
    flags: FlagTracker,
    turns: u32,
    state: SessionState,
}

impl<G: MineGenerator> GameSession<G> {
    pub fn new(preset: DifficultyPreset, generator: G) -> Self {
        Self {
            board: Board::new(preset.size()),
            generator: Some(generator),
            preset,
            mines_placed: 0,
            flags: FlagTracker::new(preset.mines),
            turns: 0,
            state: SessionState::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn preset(&self) -> DifficultyPreset {
        self.preset
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn mine_budget(&self) -> CellCount {
        self.preset.mines
    }

    pub fn mines_placed(&self) -> CellCount {
        self.mines_placed
    }

    pub fn flags(&self) -> FlagTracker {
        self.flags
    }

    /// Statistics hand-off, available once the round is over.
    pub fn report(&self) -> Option<GameReport> {
        self.is_finished().then(|| GameReport {
            outcome: self.state.outcome(),
            turns: self.turns,
            difficulty: self.preset.difficulty,
        })
    }

    /// Applies a command, returning whether it was accepted and counted as a turn.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Open(coords) => Ok(self.open(coords)?.has_update()),
            Command::Flag(coords) => Ok(self.toggle_flag(coords)?.has_update()),
        }
    }

    pub fn open(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board[coords];
        if cell.opened || cell.flagged {
            return Ok(RevealResult::default());
        }

        if let Some(generator) = self.generator.take() {
            self.mines_placed = generator.place_mines(&mut self.board, coords, self.preset.mines);
        }

        let result = reveal::open(&mut self.board, coords);
        self.turns += 1;
        self.mark_started();
        log::debug!("Turn {}: open {:?}, {} cells opened", self.turns, coords, result.opened.len());

        if result.hit_mine {
            self.end_game(false);
        } else if evaluate(&self.board) == Outcome::Win {
            self.end_game(true);
        }
        Ok(result)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = self.flags.toggle(&mut self.board, coords);
        if !outcome.has_update() {
            return Ok(outcome);
        }

        self.turns += 1;
        self.mark_started();
        log::debug!("Turn {}: {:?} at {:?}", self.turns, outcome, coords);

        // nothing to match against until the mines exist
        if self.flags.is_exhausted() && self.generator.is_none() && evaluate(&self.board) == Outcome::Win {
            self.end_game(true);
        }
        Ok(outcome)
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::NotStarted) {
            self.state = SessionState::InProgress;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }
        self.state = if won { SessionState::Won } else { SessionState::Lost };
        self.board.reveal_all();
        log::debug!("Game ended {:?} after {} turns", self.state, self.turns);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

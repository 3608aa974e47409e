use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of the most recent finished game in a slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastOutcome {
    #[default]
    None,
    Won,
    Lost,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticRecord {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_streak: u32,
    pub longest_win_streak: u32,
    pub loss_streak: u32,
    pub longest_loss_streak: u32,
    pub last_outcome: LastOutcome,
    /// Highest turn count among won games.
    pub most_turns_to_win: Option<u32>,
}

impl StatisticRecord {
    pub fn record(&mut self, won: bool, turns: u32) {
        self.games_played += 1;
        if won {
            self.wins += 1;
            self.win_streak += 1;
            self.loss_streak = 0;
            self.longest_win_streak = self.longest_win_streak.max(self.win_streak);
            self.most_turns_to_win = Some(self.most_turns_to_win.map_or(turns, |most| most.max(turns)));
            self.last_outcome = LastOutcome::Won;
        } else {
            self.losses += 1;
            self.loss_streak += 1;
            self.win_streak = 0;
            self.longest_loss_streak = self.longest_loss_streak.max(self.loss_streak);
            self.last_outcome = LastOutcome::Lost;
        }
    }
}

/// One record per difficulty slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statistics {
    records: [StatisticRecord; 4],
}

impl Statistics {
    pub fn record(&mut self, report: &GameReport) {
        let won = match report.outcome {
            Outcome::Win => true,
            Outcome::Lose => false,
            Outcome::InProgress => {
                log::warn!("Ignoring report for unfinished game");
                return;
            }
        };
        let record = &mut self[report.difficulty];
        record.record(won, report.turns);
        log::debug!(
            "Recorded {:?} on {:?} after {} turns, streaks {}/{}",
            report.outcome,
            report.difficulty,
            report.turns,
            record.win_streak,
            record.loss_streak
        );
    }

    pub fn records(&self) -> &[StatisticRecord; 4] {
        &self.records
    }
}

impl Index<Difficulty> for Statistics {
    type Output = StatisticRecord;

    fn index(&self, difficulty: Difficulty) -> &Self::Output {
        &self.records[difficulty.index()]
    }
}

impl IndexMut<Difficulty> for Statistics {
    fn index_mut(&mut self, difficulty: Difficulty) -> &mut Self::Output {
        &mut self.records[difficulty.index()]
    }
}

use std::io::{BufRead, Write};

use anyhow::Result;
use kaboom_core::*;

use crate::command::{matches_any, parse_command};
use crate::locale::Messages;
use crate::render::{render_board, render_flags};
use crate::storage::Storage;

const START_ALIASES: [&str; 7] = ["start", "start game", "s", "начать", "начать игру", "играть", "н"];
const DIFFICULTY_ALIASES: [&str; 10] = [
    "difficulty",
    "change",
    "c",
    "d",
    "выбрать сложность",
    "сложность",
    "выбрать",
    "изменить",
    "в",
    "и",
];
const STATS_ALIASES: [&str; 4] = ["stats", "statistics", "статистика", "стат"];
const BACK_ALIASES: [&str; 2] = ["back", "назад"];
const YES_ALIASES: [&str; 4] = ["y", "yes", "д", "да"];
const NO_ALIASES: [&str; 4] = ["n", "no", "н", "нет"];

/// Console front-end: menus, the play loop and persistence hand-off.
pub struct App<R, W> {
    input: R,
    output: W,
    messages: &'static Messages,
    storage: Storage,
    settings: Settings,
    statistics: Statistics,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, messages: &'static Messages, storage: Storage, seed: Option<u64>) -> Self {
        let settings = storage.load_settings();
        let statistics = storage.load_statistics();
        log::debug!("Loaded settings {:?} from {}", settings, storage.dir().display());
        Self {
            input,
            output,
            messages,
            storage,
            settings,
            statistics,
            seed,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Runs rounds until the player declines another or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if !self.main_menu()? {
                return Ok(());
            }
            let Some(report) = self.play_round()? else {
                return Ok(());
            };
            self.statistics.record(&report);
            if let Err(err) = self.storage.save_statistics(&self.statistics) {
                log::error!("Could not save statistics: {:?}", err);
            }
            if !self.play_again()? {
                return Ok(());
            }
        }
    }

    /// Returns `false` when input ends before the player starts a game.
    fn main_menu(&mut self) -> Result<bool> {
        loop {
            self.say(self.messages.main_menu)?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if line.trim().is_empty() {
                continue;
            }

            if matches_any(&line, &START_ALIASES) {
                return Ok(true);
            } else if matches_any(&line, &DIFFICULTY_ALIASES) {
                self.show_presets()?;
                self.choose_difficulty()?;
            } else if matches_any(&line, &STATS_ALIASES) {
                self.show_statistics()?;
            } else {
                self.say(self.messages.unknown_command)?;
            }
        }
    }

    fn show_presets(&mut self) -> Result<()> {
        for preset in self.settings.presets() {
            writeln!(
                self.output,
                "{}. {}\n{}x{}\n{} {}",
                preset.difficulty.index() + 1,
                self.messages.difficulty_name(preset.difficulty),
                preset.rows,
                preset.columns,
                preset.mines,
                self.messages.mines
            )?;
            if preset.difficulty == self.settings.difficulty {
                self.say(self.messages.current_difficulty)?;
            }
            self.say("-------------------------")?;
        }
        Ok(())
    }

    fn choose_difficulty(&mut self) -> Result<()> {
        loop {
            self.say(self.messages.choose_difficulty)?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }
            if matches_any(&line, &BACK_ALIASES) {
                return Ok(());
            }

            let chosen = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| Difficulty::from_index(index).ok());
            let Some(difficulty) = chosen else {
                self.say(self.messages.invalid_value)?;
                continue;
            };

            if difficulty == Difficulty::Custom {
                let Some(custom) = self.read_custom_preset()? else {
                    return Ok(());
                };
                self.settings.custom = custom;
            }
            self.settings.difficulty = difficulty;
            if let Err(err) = self.storage.save_settings(&self.settings) {
                log::error!("Could not save settings: {:?}", err);
            }
            self.say(self.messages.settings_changed)?;
            return Ok(());
        }
    }

    /// Prompts for rows, columns and mines until they form a valid preset.
    fn read_custom_preset(&mut self) -> Result<Option<CustomPreset>> {
        loop {
            let Some(rows) = self.prompt_value(self.messages.enter_rows)? else {
                return Ok(None);
            };
            let Some(columns) = self.prompt_value(self.messages.enter_columns)? else {
                return Ok(None);
            };
            let Some(mines) = self.prompt_value(self.messages.enter_mines)? else {
                return Ok(None);
            };

            let (Ok(rows), Ok(columns), Ok(mines)) =
                (rows.trim().parse::<u32>(), columns.trim().parse::<u32>(), mines.trim().parse::<u32>())
            else {
                self.say(self.messages.not_a_number)?;
                continue;
            };

            let preset = match (Coord::try_from(rows), Coord::try_from(columns), CellCount::try_from(mines)) {
                (Ok(rows), Ok(columns), Ok(mines)) => CustomPreset::new(rows, columns, mines).ok(),
                _ => None,
            };
            match preset {
                Some(preset) => return Ok(Some(preset)),
                None => self.say(self.messages.preset_out_of_range)?,
            }
        }
    }

    /// `None` on end of input or "back".
    fn prompt_value(&mut self, prompt: &str) -> Result<Option<String>> {
        self.say(prompt)?;
        Ok(self.read_line()?.filter(|line| !matches_any(line, &BACK_ALIASES)))
    }

    /// Plays one round, returning its report, or `None` if input ended mid-game.
    fn play_round(&mut self) -> Result<Option<GameReport>> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let preset = self.settings.preset();
        log::info!("New {:?} game {}x{} with {} mines, seed {}", preset.difficulty, preset.rows, preset.columns, preset.mines, seed);
        let mut game = GameSession::new(preset, RandomMineGenerator::new(seed));

        while !game.is_finished() {
            self.show_board(&game)?;
            self.say(self.messages.command_prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let Some(command) = parse_command(&line) else {
                log::debug!("Ignoring malformed command {:?}", line.trim());
                continue;
            };
            if let Err(err) = game.apply(command) {
                log::debug!("Ignoring {:?}: {}", command, err);
            }
        }

        self.show_board(&game)?;
        let verdict = match game.state() {
            SessionState::Won => self.messages.won,
            _ => self.messages.lost,
        };
        self.say(verdict)?;
        writeln!(self.output, "{} {}", self.messages.turns_spent, game.turns())?;
        Ok(game.report())
    }

    fn show_board<G: MineGenerator>(&mut self, game: &GameSession<G>) -> Result<()> {
        write!(self.output, "{}", render_board(game.board()))?;
        self.say(&render_flags(&game.flags(), self.messages))
    }

    fn show_statistics(&mut self) -> Result<()> {
        let difficulty = self.settings.difficulty;
        let record = self.statistics[difficulty];
        let messages = self.messages;
        writeln!(self.output, "{}: {}", messages.stats_header, messages.difficulty_name(difficulty))?;
        writeln!(self.output, "{}: {}", messages.stats_games, record.games_played)?;
        writeln!(self.output, "{}: {}", messages.stats_wins, record.wins)?;
        writeln!(self.output, "{}: {}", messages.stats_losses, record.losses)?;
        writeln!(self.output, "{}: {}/{}", messages.stats_streaks, record.win_streak, record.loss_streak)?;
        writeln!(
            self.output,
            "{}: {}/{}",
            messages.stats_longest, record.longest_win_streak, record.longest_loss_streak
        )?;
        if let Some(turns) = record.most_turns_to_win {
            writeln!(self.output, "{}: {}", messages.stats_most_turns, turns)?;
        }
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        loop {
            self.say(self.messages.play_again)?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if matches_any(&line, &YES_ALIASES) {
                return Ok(true);
            } else if matches_any(&line, &NO_ALIASES) {
                return Ok(false);
            }
            self.say(self.messages.unknown_command)?;
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

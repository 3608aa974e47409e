use clap::ValueEnum;
use kaboom_core::Difficulty;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

/// Player-facing text for one language.
#[derive(Debug)]
pub struct Messages {
    pub main_menu: &'static str,
    pub unknown_command: &'static str,
    pub choose_difficulty: &'static str,
    pub current_difficulty: &'static str,
    pub invalid_value: &'static str,
    pub settings_changed: &'static str,
    pub enter_rows: &'static str,
    pub enter_columns: &'static str,
    pub enter_mines: &'static str,
    pub not_a_number: &'static str,
    pub preset_out_of_range: &'static str,
    pub command_prompt: &'static str,
    pub flags_placed: &'static str,
    pub of: &'static str,
    pub won: &'static str,
    pub lost: &'static str,
    pub turns_spent: &'static str,
    pub play_again: &'static str,
    pub mines: &'static str,
    pub stats_header: &'static str,
    pub stats_games: &'static str,
    pub stats_wins: &'static str,
    pub stats_losses: &'static str,
    pub stats_streaks: &'static str,
    pub stats_longest: &'static str,
    pub stats_most_turns: &'static str,
    names: [&'static str; 4],
}

impl Messages {
    pub fn difficulty_name(&self, difficulty: Difficulty) -> &'static str {
        self.names[difficulty.index()]
    }
}

static EN: Messages = Messages {
    main_menu: "Enter a command [start], [difficulty], [stats]:",
    unknown_command: "Unknown command",
    choose_difficulty: "Choose a difficulty [1], [2], [3], [4] or 'back':",
    current_difficulty: "Current difficulty!",
    invalid_value: "Invalid value!",
    settings_changed: "Settings changed!",
    enter_rows: "Enter the number of rows (9-30) or 'back':",
    enter_columns: "Enter the number of columns (9-30) or 'back':",
    enter_mines: "Enter the number of mines (10 - rows*columns-18) or 'back':",
    not_a_number: "Input must be a number. Try again.",
    preset_out_of_range: "These settings are out of range!",
    command_prompt: "Enter a command (open row column, flag row column):",
    flags_placed: "Flags placed:",
    of: "of",
    won: "Congratulations! You won!",
    lost: "Better luck next time. You lost.",
    turns_spent: "Turns spent:",
    play_again: "Play again? (y/n)",
    mines: "mines",
    stats_header: "Statistics",
    stats_games: "Games played",
    stats_wins: "Wins",
    stats_losses: "Losses",
    stats_streaks: "Current win/loss streak",
    stats_longest: "Longest win/loss streak",
    stats_most_turns: "Most turns in a win",
    names: ["Beginner", "Intermediate", "Expert", "Custom"],
};

static RU: Messages = Messages {
    main_menu: "Введите команду [Начать], [Выбрать сложность], [Статистика]:",
    unknown_command: "Некорректная команда",
    choose_difficulty: "Выберите сложность [1], [2], [3], [4] или 'назад':",
    current_difficulty: "Текущая сложность!",
    invalid_value: "Некорректное значение!",
    settings_changed: "Настройки успешно изменены!",
    enter_rows: "Введите количество строк (9-30) или 'назад':",
    enter_columns: "Введите количество столбцов (9-30) или 'назад':",
    enter_mines: "Введите количество мин (10 - rows*columns-18) или 'назад':",
    not_a_number: "Ввод должен быть числом. Попробуйте ещё раз.",
    preset_out_of_range: "Ваши настройки не подходят под условия!",
    command_prompt: "Введите команду (open row columns, flag row columns):",
    flags_placed: "Поставлено флагов:",
    of: "из",
    won: "Поздравляю! Вы победили!",
    lost: "В следующий раз точно получится. Вы проиграли.",
    turns_spent: "Потрачено ходов:",
    play_again: "Сыграть ещё раз?",
    mines: "мин",
    stats_header: "Статистика",
    stats_games: "Сыграно игр",
    stats_wins: "Побед",
    stats_losses: "Поражений",
    stats_streaks: "Текущая серия побед/поражений",
    stats_longest: "Лучшая серия побед/поражений",
    stats_most_turns: "Больше всего ходов в победе",
    names: ["Новичок", "Любитель", "Профессионал", "Особый"],
};

impl Lang {
    pub fn messages(self) -> &'static Messages {
        match self {
            Lang::En => &EN,
            Lang::Ru => &RU,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Selectable difficulty slot, also the index into persisted statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
        Difficulty::Custom,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Expert => 2,
            Self::Custom => 3,
        }
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GameError::InvalidDifficulty(index))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DifficultyPreset {
    pub difficulty: Difficulty,
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl DifficultyPreset {
    pub const BEGINNER: Self = Self::fixed(Difficulty::Beginner, 9, 9, 10);
    pub const INTERMEDIATE: Self = Self::fixed(Difficulty::Intermediate, 16, 16, 40);
    pub const EXPERT: Self = Self::fixed(Difficulty::Expert, 16, 30, 99);

    const fn fixed(difficulty: Difficulty, rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            difficulty,
            rows,
            columns,
            mines,
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }
}

/// Player-tunable preset. Only values that pass [`CustomPreset::new`] can be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCustomPreset")]
pub struct CustomPreset {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

impl CustomPreset {
    pub const MIN_SIDE: Coord = 9;
    pub const MAX_SIDE: Coord = 30;
    pub const MIN_MINES: CellCount = 10;
    /// Cells kept mine-free on top of the 3x3 start zone.
    pub const RESERVED_CELLS: CellCount = 18;

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let sides = Self::MIN_SIDE..=Self::MAX_SIDE;
        if !sides.contains(&rows) || !sides.contains(&columns) {
            return Err(GameError::InvalidPreset);
        }
        if mines < Self::MIN_MINES || mines > Self::max_mines(rows, columns) {
            return Err(GameError::InvalidPreset);
        }
        Ok(Self {
            rows,
            columns,
            mines,
        })
    }

    pub const fn max_mines(rows: Coord, columns: Coord) -> CellCount {
        mult(rows, columns).saturating_sub(Self::RESERVED_CELLS)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn preset(&self) -> DifficultyPreset {
        DifficultyPreset::fixed(Difficulty::Custom, self.rows, self.columns, self.mines)
    }
}

impl Default for CustomPreset {
    fn default() -> Self {
        Self {
            rows: 9,
            columns: 9,
            mines: 10,
        }
    }
}

#[derive(Deserialize)]
struct RawCustomPreset {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

impl TryFrom<RawCustomPreset> for CustomPreset {
    type Error = GameError;

    fn try_from(raw: RawCustomPreset) -> Result<Self> {
        Self::new(raw.rows, raw.columns, raw.mines)
    }
}

/// Persisted player settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "current_difficulty_index", with = "difficulty_index")]
    pub difficulty: Difficulty,
    pub custom: CustomPreset,
}

impl Settings {
    pub fn preset(&self) -> DifficultyPreset {
        self.preset_for(self.difficulty)
    }

    pub fn preset_for(&self, difficulty: Difficulty) -> DifficultyPreset {
        match difficulty {
            Difficulty::Beginner => DifficultyPreset::BEGINNER,
            Difficulty::Intermediate => DifficultyPreset::INTERMEDIATE,
            Difficulty::Expert => DifficultyPreset::EXPERT,
            Difficulty::Custom => self.custom.preset(),
        }
    }

    pub fn presets(&self) -> [DifficultyPreset; 4] {
        Difficulty::ALL.map(|difficulty| self.preset_for(difficulty))
    }
}

/// Stores [`Difficulty`] as its slot number.
mod difficulty_index {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Difficulty;

    pub fn serialize<S: Serializer>(difficulty: &Difficulty, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(difficulty.index() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Difficulty, D::Error> {
        let index = u64::deserialize(deserializer)?;
        Difficulty::from_index(index as usize).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_presets_match_classic_boards() {
        let presets = Settings::default().presets();

        assert_eq!(presets[0].size(), (9, 9));
        assert_eq!(presets[0].mines, 10);
        assert_eq!(presets[1].size(), (16, 16));
        assert_eq!(presets[1].mines, 40);
        assert_eq!(presets[2].size(), (16, 30));
        assert_eq!(presets[2].mines, 99);
        assert_eq!(presets[3].difficulty, Difficulty::Custom);
    }

    #[test]
    fn custom_preset_bounds() {
        assert!(CustomPreset::new(9, 9, 10).is_ok());
        assert!(CustomPreset::new(30, 30, 900 - 18).is_ok());
        assert_eq!(CustomPreset::new(8, 9, 10), Err(GameError::InvalidPreset));
        assert_eq!(CustomPreset::new(9, 31, 10), Err(GameError::InvalidPreset));
        assert_eq!(CustomPreset::new(9, 9, 9), Err(GameError::InvalidPreset));
        assert_eq!(CustomPreset::new(9, 9, 64), Err(GameError::InvalidPreset));
        assert!(CustomPreset::new(9, 9, 63).is_ok());
    }

    #[test]
    fn difficulty_index_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_index(difficulty.index()), Ok(difficulty));
        }
        assert_eq!(Difficulty::from_index(4), Err(GameError::InvalidDifficulty(4)));
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = Settings {
            difficulty: Difficulty::Custom,
            custom: CustomPreset::new(12, 14, 20).unwrap(),
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            json,
            r#"{"current_difficulty_index":3,"custom":{"rows":12,"columns":14,"mines":20}}"#
        );
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
        assert_eq!(restored.preset().size(), (12, 14));
        assert_eq!(restored.preset().mines, 20);
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        let json = r#"{"current_difficulty_index":3,"custom":{"rows":40,"columns":14,"mines":20}}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());

        let json = r#"{"current_difficulty_index":7}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }
}

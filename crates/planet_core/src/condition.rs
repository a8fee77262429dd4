// 행성 컨디션 - 게임 세션에 적용되는 변경 요소
use serde::{Deserialize, Serialize};
use std::fmt;

/// Planet condition applied to a Dome Keeper run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetCondition {
    /// Monsters hit softer and have less health
    #[serde(rename = "Feeble enemies")]
    FeebleEnemies,
    /// Longer time between waves
    #[serde(rename = "Long cycles")]
    LongCycles,
    /// Iron deposits yield twice as much
    #[serde(rename = "Double iron")]
    DoubleIron,
    /// Mine layout generated as a maze
    #[serde(rename = "Maze structure")]
    MazeStructure,
}

impl PlanetCondition {
    pub const ALL: [PlanetCondition; 4] = [
        PlanetCondition::FeebleEnemies,
        PlanetCondition::LongCycles,
        PlanetCondition::DoubleIron,
        PlanetCondition::MazeStructure,
    ];

    /// In-game label
    pub fn label(&self) -> &'static str {
        match self {
            PlanetCondition::FeebleEnemies => "Feeble enemies",
            PlanetCondition::LongCycles => "Long cycles",
            PlanetCondition::DoubleIron => "Double iron",
            PlanetCondition::MazeStructure => "Maze structure",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|condition| condition.label() == label)
    }
}

impl fmt::Display for PlanetCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

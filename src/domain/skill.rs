use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill level ladder, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    LevelG,
    LevelF,
    LevelE,
    LevelD,
    OpenPlayer,
}

impl SkillLevel {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::LevelG => "Level G",
            SkillLevel::LevelF => "Level F",
            SkillLevel::LevelE => "Level E",
            SkillLevel::LevelD => "Level D",
            SkillLevel::OpenPlayer => "Open Player",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Strength within a single skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillStrength {
    Weak,
    Mid,
    Strong,
}

impl SkillStrength {
    pub const ALL: [SkillStrength; 3] = [SkillStrength::Weak, SkillStrength::Mid, SkillStrength::Strong];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillStrength::Weak => "Weak",
            SkillStrength::Mid => "Mid",
            SkillStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for SkillStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A (level, strength) pair; ordered by level first, then strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkillGrade {
    pub level: SkillLevel,
    pub strength: SkillStrength,
}

impl SkillGrade {
    pub fn new(level: SkillLevel, strength: SkillStrength) -> Self {
        Self { level, strength }
    }

    /// Combined ordinal: `level * 3 + strength`
    pub fn ordinal(&self) -> usize {
        self.level.index() * SkillStrength::ALL.len() + self.strength.index()
    }
}

impl fmt::Display for SkillGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level, self.strength)
    }
}

/// Inclusive competitive band of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRange {
    pub min: SkillGrade,
    pub max: SkillGrade,
}

impl SkillRange {
    pub fn new(min: SkillGrade, max: SkillGrade) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min.ordinal() <= self.max.ordinal()
    }
}

impl fmt::Display for SkillRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

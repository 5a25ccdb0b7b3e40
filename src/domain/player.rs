use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::skill::{SkillGrade, SkillLevel, SkillRange, SkillStrength};
use crate::errors::ValidationError;
use crate::validation;

pub type PlayerId = Uuid;

/// Field values collected by the player form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerFields {
    pub nickname: String,
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub remarks: Option<String>,
    pub min_level: SkillLevel,
    pub min_strength: SkillStrength,
    pub max_level: SkillLevel,
    pub max_strength: SkillStrength,
}

impl PlayerFields {
    pub fn skill_range(&self) -> SkillRange {
        SkillRange::new(
            SkillGrade::new(self.min_level, self.min_strength),
            SkillGrade::new(self.max_level, self.max_strength),
        )
    }

    /// Runs every field rule, then the level-range rule
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_nickname(&self.nickname)?;
        validation::validate_full_name(&self.full_name)?;
        validation::validate_phone(&self.contact_number)?;
        validation::validate_email(&self.email)?;
        validation::validate_address(&self.address)?;
        validation::validate_skill_range(&self.skill_range())
    }
}

/// A registered player profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub remarks: Option<String>,
    pub min_level: SkillLevel,
    pub min_strength: SkillStrength,
    pub max_level: SkillLevel,
    pub max_strength: SkillStrength,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Builds a player with a fresh id; both timestamps are set to now
    pub fn new(fields: PlayerFields) -> Self {
        let now = Utc::now();
        Self::assemble(Uuid::new_v4(), fields, now, now)
    }

    /// Returns a replacement record carrying `fields`; id and `created_at` are kept
    pub fn with_fields(&self, fields: PlayerFields) -> Self {
        Self::assemble(self.id, fields, self.created_at, Utc::now())
    }

    fn assemble(
        id: PlayerId,
        fields: PlayerFields,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            nickname: fields.nickname,
            full_name: fields.full_name,
            contact_number: fields.contact_number,
            email: fields.email,
            address: fields.address,
            remarks: fields.remarks,
            min_level: fields.min_level,
            min_strength: fields.min_strength,
            max_level: fields.max_level,
            max_strength: fields.max_strength,
            created_at,
            updated_at,
        }
    }

    pub fn fields(&self) -> PlayerFields {
        PlayerFields {
            nickname: self.nickname.clone(),
            full_name: self.full_name.clone(),
            contact_number: self.contact_number.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            remarks: self.remarks.clone(),
            min_level: self.min_level,
            min_strength: self.min_strength,
            max_level: self.max_level,
            max_strength: self.max_strength,
        }
    }

    pub fn skill_range(&self) -> SkillRange {
        SkillRange::new(
            SkillGrade::new(self.min_level, self.min_strength),
            SkillGrade::new(self.max_level, self.max_strength),
        )
    }

    /// e.g. `"Level G (Mid) - Level D (Strong)"`
    pub fn skill_level_range(&self) -> String {
        self.skill_range().to_string()
    }

    /// Case-insensitive substring match on nickname or full name
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.nickname.to_lowercase().contains(needle_lower)
            || self.full_name.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn player_fields(nickname: &str, email: &str) -> PlayerFields {
        PlayerFields {
            nickname: nickname.to_string(),
            full_name: format!("{} Santos", nickname),
            contact_number: "0917 123 4567".to_string(),
            email: email.to_string(),
            address: "45 Shuttle Street, Quezon City".to_string(),
            remarks: None,
            min_level: SkillLevel::LevelG,
            min_strength: SkillStrength::Mid,
            max_level: SkillLevel::LevelE,
            max_strength: SkillStrength::Strong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::player_fields;
    use super::*;

    #[test]
    fn test_new_player_has_matching_timestamps() {
        let player = Player::new(player_fields("Kiko", "kiko@club.ph"));

        assert_eq!(player.created_at, player.updated_at);
        assert_eq!(player.nickname, "Kiko");
        assert_eq!(player.fields(), player_fields("Kiko", "kiko@club.ph"));
    }

    #[test]
    fn test_with_fields_keeps_identity() {
        let player = Player::new(player_fields("Kiko", "kiko@club.ph"));
        let mut fields = player.fields();
        fields.remarks = Some("Prefers doubles".to_string());

        let updated = player.with_fields(fields);

        assert_eq!(updated.id, player.id);
        assert_eq!(updated.created_at, player.created_at);
        assert!(updated.updated_at >= player.updated_at);
        assert_eq!(updated.remarks.as_deref(), Some("Prefers doubles"));
    }

    #[test]
    fn test_skill_level_range_display() {
        let player = Player::new(player_fields("Kiko", "kiko@club.ph"));
        assert_eq!(player.skill_level_range(), "Level G (Mid) - Level E (Strong)");
    }

    #[test]
    fn test_fields_validate_reports_first_failure() {
        let mut fields = player_fields("Kiko", "not-an-email");
        assert_eq!(fields.validate(), Err(ValidationError::InvalidEmail));

        fields.email = "kiko@club.ph".to_string();
        fields.min_level = SkillLevel::OpenPlayer;
        assert_eq!(fields.validate(), Err(ValidationError::LevelRange));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let player = Player::new(player_fields("Kiko", "kiko@club.ph"));
        assert!(player.matches("kik"));
        assert!(player.matches("santos"));
        assert!(!player.matches("maria"));
    }
}

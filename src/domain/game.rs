use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::PlayerId;
use super::schedule::CourtSchedule;
use crate::config::settings::UserSettings;
use crate::errors::ValidationError;
use crate::validation;

pub type GameId = Uuid;

pub const UNTITLED_GAME: &str = "Untitled Game";

/// Field values collected by the game form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFields {
    pub title: Option<String>,
    pub court_name: String,
    pub schedules: Vec<CourtSchedule>,
    pub court_rate: f64,
    pub shuttle_price: f64,
    pub divide_equally: bool,
    /// `None` on update keeps the current membership
    pub player_ids: Option<Vec<PlayerId>>,
}

impl GameFields {
    /// Prefills court, rates and split mode from the user defaults
    pub fn from_settings(settings: &UserSettings, schedules: Vec<CourtSchedule>) -> Self {
        Self {
            title: None,
            court_name: settings.court_name.clone(),
            schedules,
            court_rate: settings.court_rate,
            shuttle_price: settings.shuttle_price,
            divide_equally: settings.divide_equally,
            player_ids: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.court_name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "Court name" });
        }
        validation::validate_schedules_non_empty(self.schedules.len())?;
        validation::validate_positive(self.court_rate, "Court rate")?;
        validation::validate_positive(self.shuttle_price, "Shuttle price")?;
        self.schedules.iter().try_for_each(CourtSchedule::validate)
    }
}

/// A booked game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: Option<String>,
    pub court_name: String,
    pub schedules: Vec<CourtSchedule>,
    pub court_rate: f64,
    pub shuttle_price: f64,
    pub divide_equally: bool,
    pub player_ids: Vec<PlayerId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn new(fields: GameFields) -> Self {
        let now = Utc::now();
        let player_ids = fields.player_ids.clone().unwrap_or_default();
        Self::assemble(Uuid::new_v4(), fields, player_ids, now, now)
    }

    /// Replacement record; id, `created_at` and (unless supplied) membership are kept
    pub fn with_fields(&self, fields: GameFields) -> Self {
        let player_ids = fields
            .player_ids
            .clone()
            .unwrap_or_else(|| self.player_ids.clone());
        Self::assemble(self.id, fields, player_ids, self.created_at, Utc::now())
    }

    /// Replacement record with a new membership list
    pub fn with_player_ids(&self, player_ids: Vec<PlayerId>) -> Self {
        Self {
            player_ids: dedup_ids(player_ids),
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    fn assemble(
        id: GameId,
        fields: GameFields,
        player_ids: Vec<PlayerId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: fields.title,
            court_name: fields.court_name,
            schedules: fields.schedules,
            court_rate: fields.court_rate,
            shuttle_price: fields.shuttle_price,
            divide_equally: fields.divide_equally,
            player_ids: dedup_ids(player_ids),
            created_at,
            updated_at,
        }
    }

    pub fn player_count(&self) -> usize {
        self.player_ids.len()
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.player_ids.contains(&player_id)
    }

    pub fn total_duration_in_hours(&self) -> f64 {
        self.schedules.iter().map(CourtSchedule::duration_in_hours).sum()
    }

    pub fn total_court_cost(&self) -> f64 {
        self.court_rate * self.total_duration_in_hours()
    }

    /// Court cost split across members; zero unless splitting evenly with at least one player
    pub fn cost_per_player(&self) -> f64 {
        if self.divide_equally && !self.player_ids.is_empty() {
            self.total_court_cost() / self.player_ids.len() as f64
        } else {
            0.0
        }
    }

    /// Title, else the first schedule's date, else "Untitled Game"
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self
                .schedules
                .first()
                .map(CourtSchedule::date_formatted)
                .unwrap_or_else(|| UNTITLED_GAME.to_string()),
        }
    }

    pub fn schedule_summary(&self) -> String {
        match self.schedules.as_slice() {
            [] => "No schedule".to_string(),
            [only] => format!("{}: {}", only.court_name, only.time_range()),
            many => format!("{} courts scheduled", many.len()),
        }
    }

    /// Case-insensitive match on the display title or any schedule date
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.display_title().to_lowercase().contains(needle_lower)
            || self
                .schedules
                .iter()
                .any(|s| s.date_formatted().to_lowercase().contains(needle_lower))
    }
}

fn dedup_ids(ids: Vec<PlayerId>) -> Vec<PlayerId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 3)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap()
    }

    pub fn game_fields(court_rate: f64, schedules: Vec<CourtSchedule>) -> GameFields {
        GameFields {
            title: None,
            court_name: "Smash Arena".to_string(),
            schedules,
            court_rate,
            shuttle_price: 150.0,
            divide_equally: true,
            player_ids: None,
        }
    }

    pub fn evening() -> CourtSchedule {
        CourtSchedule::new("Court 1", at(18, 0), at(21, 0))
    }
}

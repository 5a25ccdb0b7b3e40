use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation;

const TIME_FORMAT: &str = "%-I:%M %p";
const DATE_FORMAT: &str = "%b %-d, %Y";

/// One court booking inside a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtSchedule {
    pub court_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl CourtSchedule {
    pub fn new(court_name: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            court_name: court_name.into(),
            start_time,
            end_time,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_schedule_times(self.start_time, self.end_time)
    }

    pub fn duration_in_hours(&self) -> f64 {
        let minutes = self.end_time.signed_duration_since(self.start_time).num_minutes();
        minutes as f64 / 60.0
    }

    /// e.g. `"6:00 PM - 9:00 PM"`
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format(TIME_FORMAT),
            self.end_time.format(TIME_FORMAT)
        )
    }

    /// e.g. `"Nov 3, 2025"`
    pub fn date_formatted(&self) -> String {
        self.start_time.format(DATE_FORMAT).to_string()
    }
}

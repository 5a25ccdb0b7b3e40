use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation;

/// Defaults applied to every new game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub court_name: String,
    pub court_rate: f64,
    pub shuttle_price: f64,
    pub divide_equally: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            court_name: "Court 1".to_string(),
            court_rate: 400.0,
            shuttle_price: 150.0,
            divide_equally: true,
        }
    }
}

impl UserSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.court_name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "Court name" });
        }
        validation::validate_positive(self.court_rate, "Court rate")?;
        validation::validate_positive(self.shuttle_price, "Shuttle price")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: UserSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            settings: UserSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: UserSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(UserSettings::default().validate().is_ok());
        assert_eq!(AppConfig::new().settings, UserSettings::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = UserSettings {
            court_name: String::new(),
            ..UserSettings::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::Empty { field: "Court name" }));

        let settings = UserSettings {
            court_rate: -1.0,
            ..UserSettings::default()
        };
        assert!(matches!(settings.validate(), Err(ValidationError::NotPositive { .. })));
    }
}

use thiserror::Error;

use crate::domain::PlayerId;

/// A single failed field rule. The message is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Empty { field: &'static str },
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Contact number may only contain digits")]
    InvalidPhone,
    #[error("Contact number must be between {min} and {max} digits")]
    PhoneLength { min: usize, max: usize },
    #[error("{field} must be a valid number")]
    NotANumber { field: String },
    #[error("{field} must be greater than 0")]
    NotPositive { field: String },
    #[error("Minimum skill level cannot be higher than maximum skill level")]
    LevelRange,
    #[error("Please select a date, start time and end time")]
    MissingDateTime,
    #[error("End time must be after start time")]
    ScheduleOrder,
    #[error("Please add at least one court schedule")]
    NoSchedules,
}

/// Why a registry refused a mutation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Nickname '{0}' is already taken")]
    DuplicateNickname(String),
    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),
    #[error("No player with id {0}")]
    UnknownPlayer(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::NotPositive {
            field: "Court rate".to_string(),
        };
        assert_eq!(err.to_string(), "Court rate must be greater than 0");

        let err = ValidationError::TooShort { field: "Nickname", min: 2 };
        assert_eq!(err.to_string(), "Nickname must be at least 2 characters");
    }

    #[test]
    fn test_registry_error_is_transparent_over_validation() {
        let err: RegistryError = ValidationError::ScheduleOrder.into();
        assert_eq!(err.to_string(), "End time must be after start time");
    }
}

//! Field format rules and cross-field constraints.
//!
//! Every rule is pure and returns `Ok(())` or the reason the value was rejected.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{SkillGrade, SkillLevel, SkillRange, SkillStrength};
use crate::errors::ValidationError;

pub const NICKNAME_MIN: usize = 2;
pub const NICKNAME_MAX: usize = 20;
pub const FULL_NAME_MIN: usize = 2;
pub const FULL_NAME_MAX: usize = 50;
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const ADDRESS_MIN: usize = 10;
pub const COURT_NAME_MIN: usize = 2;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    });
    &EMAIL_REGEX
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field: "Email" });
    }
    if !email_regex().is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field: "Contact number" });
    }

    let digits = normalize_phone(value);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }

    let count = digits.chars().count();
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&count) {
        return Err(ValidationError::PhoneLength {
            min: PHONE_MIN_DIGITS,
            max: PHONE_MAX_DIGITS,
        });
    }
    Ok(())
}

/// Strips spaces, hyphens, parentheses and a leading `+`
pub fn normalize_phone(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

pub fn validate_nickname(value: &str) -> Result<(), ValidationError> {
    validate_length("Nickname", value, NICKNAME_MIN, Some(NICKNAME_MAX))
}

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    validate_length("Full name", value, FULL_NAME_MIN, Some(FULL_NAME_MAX))
}

pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    validate_length("Address", value, ADDRESS_MIN, None)
}

pub fn validate_court_name(value: &str) -> Result<(), ValidationError> {
    validate_length("Court name", value, COURT_NAME_MIN, None)
}

fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }
    match max {
        Some(max) if len > max => Err(ValidationError::TooLong { field, max }),
        _ => Ok(()),
    }
}

/// Parses `value` as a number and checks it is strictly positive
pub fn validate_positive_number(value: &str, field_label: &str) -> Result<(), ValidationError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: field_label.to_string(),
        })?;

    validate_positive(parsed, field_label)
}

/// Same rule as [`validate_positive_number`] for an already-parsed value
pub fn validate_positive(value: f64, field_label: &str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: field_label.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive {
            field: field_label.to_string(),
        });
    }
    Ok(())
}

pub fn validate_level_range(
    min_level: SkillLevel,
    min_strength: SkillStrength,
    max_level: SkillLevel,
    max_strength: SkillStrength,
) -> Result<(), ValidationError> {
    let range = SkillRange::new(
        SkillGrade::new(min_level, min_strength),
        SkillGrade::new(max_level, max_strength),
    );
    validate_skill_range(&range)
}

pub fn validate_skill_range(range: &SkillRange) -> Result<(), ValidationError> {
    if range.is_ordered() {
        Ok(())
    } else {
        Err(ValidationError::LevelRange)
    }
}

/// Checks a schedule row as entered on the game form
pub fn validate_schedule_entry(
    court_name: &str,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
) -> Result<(), ValidationError> {
    validate_court_name(court_name)?;

    let (Some(date), Some(start_time), Some(end_time)) = (date, start_time, end_time) else {
        return Err(ValidationError::MissingDateTime);
    };

    validate_schedule_times(date.and_time(start_time), date.and_time(end_time))
}

/// End must be strictly after start; a zero-length booking is rejected
pub fn validate_schedule_times(
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
) -> Result<(), ValidationError> {
    if end_time <= start_time {
        return Err(ValidationError::ScheduleOrder);
    }
    Ok(())
}

pub fn validate_schedules_non_empty(count: usize) -> Result<(), ValidationError> {
    if count == 0 {
        return Err(ValidationError::NoSchedules);
    }
    Ok(())
}

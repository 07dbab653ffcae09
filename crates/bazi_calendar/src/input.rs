//! Validated birth input: the engine's only fallible boundary.
//!
//! Everything past this point is pure modular arithmetic over closed enums,
//! so malformed caller input is rejected here with a descriptive error and
//! never reaches the engine.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sexagenary::{EPOCH_YEAR, MAX_YEAR};

/// Validation errors for caller-supplied birth data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("year {0} outside supported range {EPOCH_YEAR}-{MAX_YEAR}")]
    YearOutOfRange(i32),
    #[error("hour {0} outside 0-23")]
    HourOutOfRange(u32),
    #[error("unknown gender `{0}`: expected `male` or `female`")]
    UnknownGender(String),
}

/// Gender, which together with the Year-stem polarity fixes the luck-period
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(InputError::UnknownGender(s.to_string())),
        }
    }
}

/// A validated birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub hour: u32,
    pub gender: Gender,
}

impl BirthInput {
    /// Validate a birth moment. Year must fall in 1900–2100, hour in 0–23.
    pub fn new(date: NaiveDate, hour: u32, gender: Gender) -> Result<Self, InputError> {
        if !(EPOCH_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(InputError::YearOutOfRange(date.year()));
        }
        if hour > 23 {
            return Err(InputError::HourOutOfRange(hour));
        }
        Ok(Self { date, hour, gender })
    }

    /// Parse and validate from caller strings (`YYYY-MM-DD`, hour, gender).
    pub fn parse(date: &str, hour: u32, gender: &str) -> Result<Self, InputError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| InputError::InvalidDate(date.to_string()))?;
        Self::new(date, hour, gender.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_input() {
        let input = BirthInput::parse("1990-05-15", 14, "male").unwrap();
        assert_eq!(input.date, NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        assert_eq!(input.hour, 14);
        assert_eq!(input.gender, Gender::Male);
    }

    #[test]
    fn gender_parse_is_case_insensitive() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
    }

    #[test]
    fn rejects_garbage_date() {
        let err = BirthInput::parse("15/05/1990", 14, "male").unwrap_err();
        assert!(matches!(err, InputError::InvalidDate(_)));
    }

    #[test]
    fn rejects_year_outside_range() {
        let err = BirthInput::parse("1899-12-31", 0, "female").unwrap_err();
        assert_eq!(err, InputError::YearOutOfRange(1899));
        let err = BirthInput::parse("2101-01-01", 0, "female").unwrap_err();
        assert_eq!(err, InputError::YearOutOfRange(2101));
    }

    #[test]
    fn rejects_bad_hour() {
        let err = BirthInput::parse("1990-05-15", 24, "male").unwrap_err();
        assert_eq!(err, InputError::HourOutOfRange(24));
    }

    #[test]
    fn rejects_unknown_gender() {
        let err = BirthInput::parse("1990-05-15", 14, "other").unwrap_err();
        assert!(matches!(err, InputError::UnknownGender(_)));
    }
}

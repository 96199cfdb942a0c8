use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation errors for roster entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    EmptyName,
    InvalidBirthday { year: i32, month: u32, day: u32 },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "Person name cannot be empty"),
            RosterError::InvalidBirthday { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a valid calendar date")
            }
        }
    }
}

impl std::error::Error for RosterError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    // only month and day matter for grouping, the year is kept as entered
    pub birthday: NaiveDate,
}

impl Person {
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Result<Self, RosterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        Ok(Self { name, birthday })
    }

    /// Build a person from raw date parts, rejecting dates that don't exist
    pub fn from_ymd(
        name: impl Into<String>,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, RosterError> {
        let birthday = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(RosterError::InvalidBirthday { year, month, day })?;
        Self::new(name, birthday)
    }
}

//! Experience entity - a job held by the profile owner

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Date format accepted for calendar dates on the wire
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    pub fn new(
        profile_id: Uuid,
        company: String,
        position: String,
        start_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            profile_id,
            company,
            position,
            description: String::new(),
            start_date,
            end_date: None,
            is_current: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// A current job has no end date.
    ///
    /// Must be called before every write.
    pub fn normalize_current(&mut self) {
        if self.is_current {
            self.end_date = None;
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Experience {
        Experience::new(
            Uuid::new_v4(),
            "Acme".to_string(),
            "Engineer".to_string(),
            parse_date("2021-03-01").unwrap(),
        )
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(DomainError::InvalidDate(_))
        ));
        assert!(parse_date("01/03/2021").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_current_job_clears_end_date() {
        let mut experience = sample();
        experience.end_date = Some(parse_date("2022-01-01").unwrap());
        experience.is_current = true;
        experience.normalize_current();
        assert_eq!(experience.end_date, None);
    }

    #[test]
    fn test_past_job_keeps_end_date() {
        let mut experience = sample();
        let end = parse_date("2022-01-01").unwrap();
        experience.end_date = Some(end);
        experience.normalize_current();
        assert_eq!(experience.end_date, Some(end));
    }
}

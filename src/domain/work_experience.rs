use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::errors::DomainError;

pub const DATE_RANGE_MESSAGE: &str = "End date must be after start date.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type")]
pub enum JobType {
    #[serde(rename = "Full-time")]
    #[sqlx(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    #[sqlx(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    #[sqlx(rename = "Contract")]
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::FullTime, JobType::PartTime, JobType::Contract];

    pub const fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|job_type| job_type.as_str() == value)
            .ok_or_else(|| DomainError::InvalidField {
                field: "job_type",
                message: "job_type must be one of Full-time, Part-time, Contract".to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WorkExperience {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkExperience {
    pub fn ensure_valid_dates(&self) -> Result<(), DomainError> {
        ensure_date_range(self.start_date, self.end_date)
    }
}

pub fn ensure_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), DomainError> {
    match end {
        Some(end) if end < start => Err(DomainError::InvalidField {
            field: "end_date",
            message: DATE_RANGE_MESSAGE.to_string(),
        }),
        _ => Ok(()),
    }
}

/// A partial edit. Only `Some` fields replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkExperienceChanges {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl WorkExperienceChanges {
    pub fn touches_dates(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    /// Merges the edit into `current`. The date range is re-checked on the merged record
    /// whenever either date is part of the edit.
    pub fn apply_to(
        self,
        current: &WorkExperience,
        now: DateTime<Utc>,
    ) -> Result<WorkExperience, DomainError> {
        let recheck_dates = self.touches_dates();
        let merged = WorkExperience {
            job_title: self.job_title.unwrap_or_else(|| current.job_title.clone()),
            company_name: self
                .company_name
                .unwrap_or_else(|| current.company_name.clone()),
            location: self.location.or_else(|| current.location.clone()),
            job_type: self.job_type.or(current.job_type),
            start_date: self.start_date.unwrap_or(current.start_date),
            end_date: self.end_date.or(current.end_date),
            description: self.description.or_else(|| current.description.clone()),
            updated_at: now,
            ..current.clone()
        };
        if recheck_dates {
            merged.ensure_valid_dates()?;
        }
        Ok(merged)
    }
}

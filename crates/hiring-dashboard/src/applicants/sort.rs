use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::Applicant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Location,
    JobTitle,
    HourlyRate,
    JobSuccess,
    TotalEarned,
    HoursWorked,
    JobsCompleted,
    AppliedDate,
    Rating,
    RankingScore,
    DataQualityScore,
}

impl SortField {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Name,
            Self::Location,
            Self::JobTitle,
            Self::HourlyRate,
            Self::JobSuccess,
            Self::TotalEarned,
            Self::HoursWorked,
            Self::JobsCompleted,
            Self::AppliedDate,
            Self::Rating,
            Self::RankingScore,
            Self::DataQualityScore,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::JobTitle => "job_title",
            Self::HourlyRate => "hourly_rate",
            Self::JobSuccess => "job_success",
            Self::TotalEarned => "total_earned",
            Self::HoursWorked => "hours_worked",
            Self::JobsCompleted => "jobs_completed",
            Self::AppliedDate => "applied_date",
            Self::Rating => "rating",
            Self::RankingScore => "ranking_score",
            Self::DataQualityScore => "data_quality_score",
        }
    }

    fn compare(self, a: &Applicant, b: &Applicant) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Location => compare_text(&a.location, &b.location),
            Self::JobTitle => compare_text(&a.job_title, &b.job_title),
            Self::HourlyRate => a.hourly_rate.value().total_cmp(&b.hourly_rate.value()),
            Self::JobSuccess => a.job_success.value().total_cmp(&b.job_success.value()),
            Self::TotalEarned => a.total_earned.value().total_cmp(&b.total_earned.value()),
            Self::HoursWorked => a.hours_worked.value().total_cmp(&b.hours_worked.value()),
            Self::JobsCompleted => a.jobs_completed.value().total_cmp(&b.jobs_completed.value()),
            Self::AppliedDate => applied_millis(a).cmp(&applied_millis(b)),
            Self::Rating => a.rating.total_cmp(&b.rating),
            Self::RankingScore => optional(a.ranking_score).total_cmp(&optional(b.ranking_score)),
            Self::DataQualityScore => {
                optional(a.data_quality_score).total_cmp(&optional(b.data_quality_score))
            }
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| UnknownSortField(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field '{0}'")]
pub struct UnknownSortField(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortDirection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(UnknownSortDirection(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction '{0}' (expected asc or desc)")]
pub struct UnknownSortDirection(pub String);

/// Single `(field, direction)` ordering. Defaults to highest rating first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Rating,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn compare(&self, a: &Applicant, b: &Applicant) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn optional(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Missing or unparseable dates sort as the Unix epoch.
fn applied_millis(applicant: &Applicant) -> i64 {
    applicant
        .applied_timestamp()
        .map(|ts| ts.timestamp_millis())
        .unwrap_or(0)
}

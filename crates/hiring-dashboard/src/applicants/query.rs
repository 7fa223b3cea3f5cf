use serde::{Deserialize, Serialize};

use super::domain::{ApplicantStatus, UnknownStatus};
use super::filter::{FilterSet, HOURLY_RATE_SENTINEL};
use super::sort::{SortDirection, SortField, SortSpec, UnknownSortDirection, UnknownSortField};

/// Filter and sort criteria for one view of the directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantQuery {
    #[serde(default)]
    pub filters: FilterSet,
    #[serde(default)]
    pub sort: SortSpec,
}

impl ApplicantQuery {
    pub fn new(filters: FilterSet, sort: SortSpec) -> Self {
        Self { filters, sort }
    }
}

/// Raw URL query parameters; every value arrives as text and is validated by
/// [`ApplicantQuery::try_from`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub skills: Option<String>,
    pub job: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<String>,
    pub max_hourly_rate: Option<String>,
    pub min_job_success: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("parameter `{param}` must be a number, got '{value}'")]
    InvalidNumber { param: &'static str, value: String },
    #[error("parameter `{param}` must not be negative, got {value}")]
    Negative { param: &'static str, value: f64 },
    #[error(transparent)]
    Status(#[from] UnknownStatus),
    #[error(transparent)]
    SortField(#[from] UnknownSortField),
    #[error(transparent)]
    SortDirection(#[from] UnknownSortDirection),
}

impl TryFrom<ListParams> for ApplicantQuery {
    type Error = QueryError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let filters = FilterSet {
            search: text(params.search),
            skills: params
                .skills
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            job_posting: text(params.job),
            location: text(params.location),
            min_rating: number("min_rating", params.min_rating)?.unwrap_or(0.0),
            max_hourly_rate: number("max_hourly_rate", params.max_hourly_rate)?
                .unwrap_or(HOURLY_RATE_SENTINEL),
            min_job_success: number("min_job_success", params.min_job_success)?.unwrap_or(0.0),
            status: non_blank(params.status)
                .map(|value| value.parse::<ApplicantStatus>())
                .transpose()?,
        };

        let field = match non_blank(params.sort) {
            Some(value) => value.parse::<SortField>()?,
            None => SortSpec::default().field,
        };
        let direction = match non_blank(params.direction) {
            Some(value) => value.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        Ok(Self::new(filters, SortSpec::new(field, direction)))
    }
}

/// Comma separated list with blanks dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn text(value: Option<String>) -> String {
    non_blank(value).unwrap_or_default()
}

fn number(param: &'static str, value: Option<String>) -> Result<Option<f64>, QueryError> {
    non_blank(value)
        .map(|raw| parse_threshold(param, &raw))
        .transpose()
}

/// Parses a filter threshold, which must be a finite, non-negative number.
pub fn parse_threshold(param: &'static str, raw: &str) -> Result<f64, QueryError> {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| QueryError::InvalidNumber {
            param,
            value: raw.to_string(),
        })?;

    if parsed < 0.0 {
        return Err(QueryError::Negative {
            param,
            value: parsed,
        });
    }

    Ok(parsed)
}

use serde::Deserialize;
use serde_json::Number;

use super::super::domain::{
    Applicant, ApplicantId, ApplicantMetadata, ApplicantStatus, AppliedDate, UnknownStatus,
};
use super::super::numeric::FormattedNumber;

/// Upstream applicant object as exported by the ingestion process.
#[derive(Debug, Deserialize)]
pub(crate) struct ApplicantRecord {
    id: RecordScalar,
    name: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    skills: Option<Vec<String>>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    hourly_rate: Option<RecordScalar>,
    #[serde(default)]
    job_success: Option<RecordScalar>,
    #[serde(default)]
    total_earned: Option<RecordScalar>,
    #[serde(default)]
    hours_worked: Option<RecordScalar>,
    #[serde(default)]
    jobs_completed: Option<RecordScalar>,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    applied_date: Option<String>,
    #[serde(default)]
    data_quality_score: Option<f64>,
    #[serde(default)]
    ranking_score: Option<f64>,
    #[serde(default)]
    proposal_text: Option<String>,
    #[serde(default)]
    portfolio_link: Option<String>,
    #[serde(default)]
    profile_image: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    recommendation: Option<String>,
}

/// Exports mix `"276"` and `276` for the same field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordScalar {
    Text(String),
    Number(Number),
}

impl RecordScalar {
    fn into_text(self) -> String {
        match self {
            RecordScalar::Text(text) => text,
            RecordScalar::Number(number) => number.to_string(),
        }
    }

    fn into_formatted(self) -> FormattedNumber {
        match self {
            RecordScalar::Text(text) => FormattedNumber::parse(text),
            RecordScalar::Number(number) => match number.as_f64() {
                Some(value) => FormattedNumber::from_value(number.to_string(), value),
                None => FormattedNumber::parse(number.to_string()),
            },
        }
    }
}

/// Why a structurally valid record was still refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordValidationError {
    #[error("id must not be blank")]
    BlankId,
    #[error("name must not be blank")]
    BlankName,
    #[error("rating {0} is outside 0-5")]
    RatingOutOfRange(f64),
    #[error("data_quality_score {0} is outside 0-100")]
    DataQualityOutOfRange(f64),
    #[error(transparent)]
    Status(#[from] UnknownStatus),
}

impl ApplicantRecord {
    pub(crate) fn id_hint(&self) -> String {
        match &self.id {
            RecordScalar::Text(text) => text.trim().to_string(),
            RecordScalar::Number(number) => number.to_string(),
        }
    }

    /// Validates the record and parses its formatted fields.
    pub(crate) fn into_applicant(self) -> Result<Applicant, RecordValidationError> {
        let id = self.id.into_text().trim().to_string();
        if id.is_empty() {
            return Err(RecordValidationError::BlankId);
        }

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(RecordValidationError::BlankName);
        }

        let rating = self.rating.unwrap_or(0.0);
        if !(0.0..=5.0).contains(&rating) {
            return Err(RecordValidationError::RatingOutOfRange(rating));
        }

        if let Some(score) = self.data_quality_score {
            if !(0.0..=100.0).contains(&score) {
                return Err(RecordValidationError::DataQualityOutOfRange(score));
            }
        }

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => ApplicantStatus::default(),
            Some(value) => value.parse::<ApplicantStatus>()?,
        };

        Ok(Applicant {
            id: ApplicantId(id),
            name,
            title: self.title.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            rating,
            hourly_rate: formatted(self.hourly_rate),
            job_success: formatted(self.job_success),
            total_earned: formatted(self.total_earned),
            hours_worked: formatted(self.hours_worked),
            jobs_completed: formatted(self.jobs_completed),
            job_title: self.job_title.unwrap_or_default(),
            status,
            applied_date: self
                .applied_date
                .filter(|value| !value.trim().is_empty())
                .map(AppliedDate::parse),
            data_quality_score: self.data_quality_score,
            ranking_score: self.ranking_score,
            metadata: ApplicantMetadata {
                proposal_text: self.proposal_text,
                portfolio_link: self.portfolio_link,
                profile_image: self.profile_image,
                created_at: self.created_at,
                recommendation: self.recommendation,
            },
        })
    }
}

fn formatted(value: Option<RecordScalar>) -> FormattedNumber {
    value
        .map(RecordScalar::into_formatted)
        .unwrap_or_default()
}

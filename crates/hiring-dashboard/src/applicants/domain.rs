use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::numeric::FormattedNumber;

/// Identifier wrapper for applicants; numeric source ids are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub String);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicantId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Hiring pipeline position. The only field the dashboard reassigns.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantStatus {
    #[default]
    Pending,
    Interview,
    Hired,
    Rejected,
}

impl ApplicantStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::Interview, Self::Hired, Self::Rejected]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Interview => "interview",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Interview => "Interview",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicantStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown applicant status '{0}' (expected pending, interview, hired, or rejected)")]
pub struct UnknownStatus(pub String);

/// Application date as received, plus the timestamp parsed from it when it is RFC 3339 or `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedDate {
    raw: String,
    timestamp: Option<DateTime<Utc>>,
}

impl AppliedDate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let timestamp = parse_timestamp(&raw);
        Self { raw, timestamp }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

impl Serialize for AppliedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Free-form profile fields carried through to the dashboard untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicantMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// A validated applicant. Formatted numeric fields are parsed once, when the record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub overview: String,
    pub skills: Vec<String>,
    pub rating: f64,
    pub hourly_rate: FormattedNumber,
    pub job_success: FormattedNumber,
    pub total_earned: FormattedNumber,
    pub hours_worked: FormattedNumber,
    pub jobs_completed: FormattedNumber,
    /// Title of the job posting this application was made against.
    pub job_title: String,
    pub status: ApplicantStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<AppliedDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_quality_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_score: Option<f64>,
    #[serde(flatten)]
    pub metadata: ApplicantMetadata,
}

impl Applicant {
    /// Minimal applicant with blank display fields, used by the sample fallback and tests.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ApplicantId(id.into()),
            name: name.into(),
            title: String::new(),
            location: String::new(),
            overview: String::new(),
            skills: Vec::new(),
            rating: 0.0,
            hourly_rate: FormattedNumber::default(),
            job_success: FormattedNumber::default(),
            total_earned: FormattedNumber::default(),
            hours_worked: FormattedNumber::default(),
            jobs_completed: FormattedNumber::default(),
            job_title: String::new(),
            status: ApplicantStatus::Pending,
            applied_date: None,
            data_quality_score: None,
            ranking_score: None,
            metadata: ApplicantMetadata::default(),
        }
    }

    /// Formatted fields in a fixed order, for load-time diagnostics.
    pub fn formatted_fields(&self) -> [(&'static str, &FormattedNumber); 5] {
        [
            ("hourly_rate", &self.hourly_rate),
            ("job_success", &self.job_success),
            ("total_earned", &self.total_earned),
            ("hours_worked", &self.hours_worked),
            ("jobs_completed", &self.jobs_completed),
        ]
    }

    pub fn applied_timestamp(&self) -> Option<DateTime<Utc>> {
        self.applied_date.as_ref().and_then(AppliedDate::timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            " Interview ".parse::<ApplicantStatus>(),
            Ok(ApplicantStatus::Interview)
        );
        assert_eq!("HIRED".parse::<ApplicantStatus>(), Ok(ApplicantStatus::Hired));
        assert!("active".parse::<ApplicantStatus>().is_err());
    }

    #[test]
    fn applied_date_accepts_rfc3339_and_plain_dates() {
        let rfc = AppliedDate::parse("2025-01-19T10:00:00Z");
        assert_eq!(
            rfc.timestamp().map(|ts| ts.to_rfc3339()),
            Some("2025-01-19T10:00:00+00:00".to_string())
        );

        let plain = AppliedDate::parse("2025-01-20");
        assert!(plain.timestamp().is_some());

        let garbage = AppliedDate::parse("last tuesday");
        assert!(garbage.timestamp().is_none());
        assert_eq!(garbage.raw(), "last tuesday");
    }

    #[test]
    fn applicant_serializes_display_strings_and_skips_absent_metadata() {
        let mut applicant = Applicant::new("7", "Ada Park");
        applicant.hourly_rate = FormattedNumber::parse("$45/hr");
        applicant.status = ApplicantStatus::Interview;

        let json = serde_json::to_value(&applicant).expect("serialize");
        assert_eq!(json["id"], "7");
        assert_eq!(json["hourly_rate"], "$45/hr");
        assert_eq!(json["status"], "interview");
        assert!(json.get("applied_date").is_none());
        assert!(json.get("proposal_text").is_none());
    }
}

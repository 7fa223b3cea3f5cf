use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicantStatus};

/// A maximum hourly rate at or above this value leaves the rate filter switched off.
pub const HOURLY_RATE_SENTINEL: f64 = 100.0;

/// Filter criteria combined with logical AND. Each criterion is inactive at its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub search: String,
    pub skills: Vec<String>,
    pub job_posting: String,
    pub location: String,
    pub min_rating: f64,
    pub max_hourly_rate: f64,
    pub min_job_success: f64,
    pub status: Option<ApplicantStatus>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            search: String::new(),
            skills: Vec::new(),
            job_posting: String::new(),
            location: String::new(),
            min_rating: 0.0,
            max_hourly_rate: HOURLY_RATE_SENTINEL,
            min_job_success: 0.0,
            status: None,
        }
    }
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, applicant: &Applicant) -> bool {
        self.matches_search(applicant)
            && self.matches_skills(applicant)
            && (self.job_posting.is_empty() || applicant.job_title == self.job_posting)
            && (self.location.is_empty() || applicant.location == self.location)
            && (self.min_rating <= 0.0 || applicant.rating >= self.min_rating)
            && (self.max_hourly_rate >= HOURLY_RATE_SENTINEL
                || applicant.hourly_rate.value() <= self.max_hourly_rate)
            && (self.min_job_success <= 0.0
                || applicant.job_success.value() >= self.min_job_success)
            && self.status.map_or(true, |status| applicant.status == status)
    }

    fn matches_search(&self, applicant: &Applicant) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        let skills = applicant.skills.join(" ");
        let haystack = [
            applicant.name.as_str(),
            applicant.title.as_str(),
            applicant.location.as_str(),
            skills.as_str(),
            applicant.overview.as_str(),
        ]
        .join(" ")
        .to_lowercase();

        haystack.contains(&needle)
    }

    fn matches_skills(&self, applicant: &Applicant) -> bool {
        if self.skills.is_empty() {
            return true;
        }

        let owned: Vec<String> = applicant
            .skills
            .iter()
            .map(|skill| skill.to_lowercase())
            .collect();

        self.skills.iter().any(|wanted| {
            let wanted = wanted.to_lowercase();
            owned.iter().any(|skill| skill.contains(&wanted))
        })
    }
}

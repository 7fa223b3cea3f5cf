use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Applicant, ApplicantStatus};

/// Per-status applicant counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub interview: usize,
    pub hired: usize,
    pub rejected: usize,
}

impl StatusBreakdown {
    fn record(&mut self, status: ApplicantStatus) {
        match status {
            ApplicantStatus::Pending => self.pending += 1,
            ApplicantStatus::Interview => self.interview += 1,
            ApplicantStatus::Hired => self.hired += 1,
            ApplicantStatus::Rejected => self.rejected += 1,
        }
    }

    pub fn count(&self, status: ApplicantStatus) -> usize {
        match status {
            ApplicantStatus::Pending => self.pending,
            ApplicantStatus::Interview => self.interview,
            ApplicantStatus::Hired => self.hired,
            ApplicantStatus::Rejected => self.rejected,
        }
    }
}

/// Dashboard header figures computed over a collection of applicants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedStats {
    pub total_applicants: usize,
    /// Distinct non-empty job titles.
    pub job_positions: usize,
    /// Mean rating to one decimal place.
    pub average_rating: String,
    pub total_earned: f64,
    pub status_breakdown: StatusBreakdown,
    pub jobs_breakdown: BTreeMap<String, usize>,
}

impl ComputedStats {
    pub fn from_applicants<'a, I>(applicants: I) -> Self
    where
        I: IntoIterator<Item = &'a Applicant>,
    {
        let mut total_applicants = 0;
        let mut rating_sum = 0.0;
        let mut total_earned = 0.0;
        let mut status_breakdown = StatusBreakdown::default();
        let mut jobs_breakdown: BTreeMap<String, usize> = BTreeMap::new();

        for applicant in applicants {
            total_applicants += 1;
            rating_sum += applicant.rating;
            total_earned += applicant.total_earned.value();
            status_breakdown.record(applicant.status);
            if !applicant.job_title.is_empty() {
                *jobs_breakdown
                    .entry(applicant.job_title.clone())
                    .or_default() += 1;
            }
        }

        let mean = if total_applicants == 0 {
            0.0
        } else {
            rating_sum / total_applicants as f64
        };

        Self {
            total_applicants,
            job_positions: jobs_breakdown.len(),
            average_rating: format!("{mean:.1}"),
            total_earned,
            status_breakdown,
            jobs_breakdown,
        }
    }
}

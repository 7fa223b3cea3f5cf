use super::super::domain::{Applicant, ApplicantStatus, AppliedDate};
use super::super::numeric::FormattedNumber;

/// Single-record collection served when no export file can be found.
pub fn sample_applicants() -> Vec<Applicant> {
    let mut applicant = Applicant::new("1", "John Smith");
    applicant.title = "Senior Shopify Developer".to_string();
    applicant.location = "New York, NY".to_string();
    applicant.overview =
        "Experienced Shopify developer with 5+ years building custom e-commerce solutions."
            .to_string();
    applicant.skills = ["Shopify", "Liquid", "JavaScript", "React"]
        .into_iter()
        .map(str::to_string)
        .collect();
    applicant.rating = 5.0;
    applicant.hourly_rate = FormattedNumber::parse("$45/hr");
    applicant.job_success = FormattedNumber::parse("98%");
    applicant.total_earned = FormattedNumber::parse("$12,450");
    applicant.hours_worked = FormattedNumber::parse("276");
    applicant.job_title = "Shopify Developer".to_string();
    applicant.status = ApplicantStatus::Pending;
    applicant.applied_date = Some(AppliedDate::parse("2025-01-19T10:00:00Z"));
    applicant.metadata.created_at = Some("2025-01-19T10:00:00Z".to_string());
    vec![applicant]
}

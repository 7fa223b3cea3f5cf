use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::applicants::domain::{Applicant, ApplicantId, ApplicantStatus, AppliedDate};
use crate::applicants::numeric::FormattedNumber;
use crate::applicants::repository::{
    ApplicantRepository, DirectorySnapshot, InMemoryApplicantRepository, RepositoryError,
};
use crate::applicants::{applicant_router, ApplicantDirectoryService};

pub(super) fn applicant(id: &str, name: &str, rating: f64, hourly_rate: &str) -> Applicant {
    let mut applicant = Applicant::new(id, name);
    applicant.rating = rating;
    applicant.hourly_rate = FormattedNumber::parse(hourly_rate);
    applicant
}

pub(super) fn designer() -> Applicant {
    let mut applicant = applicant("2", "Sarah Johnson", 4.8, "$55/hr");
    applicant.title = "Senior UI/UX Designer".to_string();
    applicant.location = "San Francisco, CA".to_string();
    applicant.overview = "Designs conversion-focused landing pages for DTC brands.".to_string();
    applicant.skills = vec![
        "UI/UX Design".to_string(),
        "Figma".to_string(),
        "Adobe XD".to_string(),
        "Landing Page Design".to_string(),
    ];
    applicant.job_success = FormattedNumber::parse("100%");
    applicant.total_earned = FormattedNumber::parse("$48,900");
    applicant.hours_worked = FormattedNumber::parse("2,000");
    applicant.jobs_completed = FormattedNumber::parse("25");
    applicant.job_title = "Landing Page Designer".to_string();
    applicant.status = ApplicantStatus::Interview;
    applicant.data_quality_score = Some(90.0);
    applicant.ranking_score = Some(0.92);
    applicant.applied_date = Some(AppliedDate::parse("2025-01-21"));
    applicant
}

pub(super) fn developer() -> Applicant {
    let mut applicant = applicant("1", "John Smith", 5.0, "$45/hr");
    applicant.title = "Senior Shopify Developer".to_string();
    applicant.location = "New York, NY".to_string();
    applicant.skills = vec![
        "Shopify".to_string(),
        "Liquid".to_string(),
        "JavaScript".to_string(),
        "React".to_string(),
    ];
    applicant.job_success = FormattedNumber::parse("98%");
    applicant.total_earned = FormattedNumber::parse("$12,450");
    applicant.hours_worked = FormattedNumber::parse("276");
    applicant.jobs_completed = FormattedNumber::parse("12");
    applicant.job_title = "Shopify Developer".to_string();
    applicant.data_quality_score = Some(75.0);
    applicant.applied_date = Some(AppliedDate::parse("2025-01-19T10:00:00Z"));
    applicant
}

pub(super) fn newcomer() -> Applicant {
    let mut applicant = applicant("3", "Alex Rivera", 0.0, "$20/hr");
    applicant.title = "Webflow Designer".to_string();
    applicant.location = "Austin, TX".to_string();
    applicant.skills = vec!["Webflow".to_string(), "Prototyping".to_string()];
    applicant.job_success = FormattedNumber::parse("n/a");
    applicant.job_title = "Landing Page Designer".to_string();
    applicant.status = ApplicantStatus::Rejected;
    applicant
}

pub(super) fn roster() -> Vec<Applicant> {
    vec![developer(), designer(), newcomer()]
}

pub(super) fn build_service() -> (
    ApplicantDirectoryService<InMemoryApplicantRepository>,
    Arc<InMemoryApplicantRepository>,
) {
    let repository = Arc::new(InMemoryApplicantRepository::new(roster()));
    let service = ApplicantDirectoryService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_roster() -> axum::Router {
    let (service, _) = build_service();
    applicant_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl ApplicantRepository for UnavailableRepository {
    fn snapshot(&self) -> Result<DirectorySnapshot, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }

    fn set_status(
        &self,
        _id: &ApplicantId,
        _status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("directory offline".to_string()))
    }
}

pub(super) fn ids(applicants: &[&Applicant]) -> Vec<String> {
    applicants.iter().map(|a| a.id.0.clone()).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

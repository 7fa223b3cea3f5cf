use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{Applicant, ApplicantId, ApplicantStatus};
use super::engine::ViewMemo;
use super::query::ApplicantQuery;
use super::repository::{ApplicantRepository, RepositoryError};
use super::scoring::RatingBreakdown;
use super::stats::ComputedStats;

/// Response body of the list endpoint. Stats always describe the whole directory.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantListing {
    pub applicants: Vec<Applicant>,
    pub stats: ComputedStats,
}

/// One applicant together with its rating breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicantDetail {
    pub applicant: Applicant,
    pub breakdown: RatingBreakdown,
}

/// Service composing the repository, the filter-sort engine, and the score deriver.
pub struct ApplicantDirectoryService<R> {
    repository: Arc<R>,
    memo: ViewMemo,
}

impl<R> ApplicantDirectoryService<R>
where
    R: ApplicantRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            memo: ViewMemo::default(),
        }
    }

    /// Filtered, sorted applicants plus stats over the full collection.
    pub fn list(&self, query: &ApplicantQuery) -> Result<ApplicantListing, DirectoryError> {
        let snapshot = self.repository.snapshot()?;
        let positions = self
            .memo
            .positions(snapshot.revision, &snapshot.applicants, query);

        let applicants = positions
            .iter()
            .map(|position| snapshot.applicants[*position].clone())
            .collect();
        let stats = ComputedStats::from_applicants(snapshot.applicants.iter());

        Ok(ApplicantListing { applicants, stats })
    }

    pub fn get(&self, id: &ApplicantId) -> Result<Applicant, DirectoryError> {
        let applicant = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(applicant)
    }

    pub fn detail(&self, id: &ApplicantId) -> Result<ApplicantDetail, DirectoryError> {
        let applicant = self.get(id)?;
        let breakdown = RatingBreakdown::for_applicant(&applicant);
        Ok(ApplicantDetail {
            applicant,
            breakdown,
        })
    }

    pub fn stats(&self) -> Result<ComputedStats, DirectoryError> {
        let snapshot = self.repository.snapshot()?;
        Ok(ComputedStats::from_applicants(snapshot.applicants.iter()))
    }

    /// Reassigns an applicant's status. The change is held in memory only.
    pub fn update_status(
        &self,
        id: &ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, DirectoryError> {
        let updated = self.repository.set_status(id, status)?;
        info!(
            applicant = %id,
            status = %status,
            "applicant status updated in memory; source export is unchanged"
        );
        Ok(updated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound))
    }
}

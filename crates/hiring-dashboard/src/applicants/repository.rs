use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Applicant, ApplicantId, ApplicantStatus};

/// Point-in-time view of the resident collection. `revision` changes on every mutation.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    pub revision: u64,
    pub applicants: Arc<Vec<Applicant>>,
}

/// Storage abstraction so the directory service can be exercised in isolation.
pub trait ApplicantRepository: Send + Sync {
    fn snapshot(&self) -> Result<DirectorySnapshot, RepositoryError>;
    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    fn set_status(
        &self,
        id: &ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("applicant not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct Directory {
    revision: u64,
    applicants: Arc<Vec<Applicant>>,
}

/// Process-local repository holding the collection loaded at startup.
///
/// Status changes live only in memory; the source export is never rewritten.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicantRepository {
    directory: Arc<Mutex<Directory>>,
}

impl InMemoryApplicantRepository {
    pub fn new(applicants: Vec<Applicant>) -> Self {
        Self {
            directory: Arc::new(Mutex::new(Directory {
                revision: 0,
                applicants: Arc::new(applicants),
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Directory>, RepositoryError> {
        self.directory
            .lock()
            .map_err(|_| RepositoryError::Unavailable("applicant directory lock poisoned".into()))
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn snapshot(&self) -> Result<DirectorySnapshot, RepositoryError> {
        let guard = self.lock()?;
        Ok(DirectorySnapshot {
            revision: guard.revision,
            applicants: Arc::clone(&guard.applicants),
        })
    }

    fn fetch(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.applicants.iter().find(|a| &a.id == id).cloned())
    }

    fn set_status(
        &self,
        id: &ApplicantId,
        status: ApplicantStatus,
    ) -> Result<Applicant, RepositoryError> {
        let mut guard = self.lock()?;
        let position = guard
            .applicants
            .iter()
            .position(|a| &a.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if guard.applicants[position].status == status {
            return Ok(guard.applicants[position].clone());
        }

        // Snapshots already handed out keep the previous collection.
        let applicants = Arc::make_mut(&mut guard.applicants);
        applicants[position].status = status;
        let updated = applicants[position].clone();
        guard.revision += 1;
        Ok(updated)
    }
}

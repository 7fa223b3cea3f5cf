//! Applicant directory: load boundary, filter-sort engine, score deriver, and HTTP surface.
//!
//! The collection is loaded once at startup through [`ApplicantLoader`], held by an
//! [`ApplicantRepository`], and served through [`ApplicantDirectoryService`]. Filtering and
//! sorting are pure functions in [`engine`]; the last computed view is memoized per
//! collection revision.

pub mod domain;
pub mod engine;
pub mod export;
pub mod filter;
pub mod loader;
mod numeric;
pub mod query;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod sort;
pub mod stats;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantId, ApplicantMetadata, ApplicantStatus, AppliedDate, UnknownStatus,
};
pub use engine::{apply, select, ViewMemo};
pub use export::write_csv;
pub use filter::{FilterSet, HOURLY_RATE_SENTINEL};
pub use loader::{
    sample_applicants, ApplicantLoader, DataSource, FieldWarning, LoadError, LoadReport,
    RecordRejection, RecordValidationError,
};
pub use numeric::FormattedNumber;
pub use query::{parse_threshold, split_list, ApplicantQuery, ListParams, QueryError};
pub use repository::{
    ApplicantRepository, DirectorySnapshot, InMemoryApplicantRepository, RepositoryError,
};
pub use router::{applicant_router, list_query, StatusUpdate};
pub use scoring::{
    average_percentage, breakdown, RatingBreakdown, ScoreDimension, ScoreDimensionKind,
    REFERENCE_SKILLS,
};
pub use service::{ApplicantDetail, ApplicantDirectoryService, ApplicantListing, DirectoryError};
pub use sort::{SortDirection, SortField, SortSpec, UnknownSortDirection, UnknownSortField};
pub use stats::{ComputedStats, StatusBreakdown};

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::domain::Applicant;
use super::filter::FilterSet;
use super::query::ApplicantQuery;
use super::sort::SortSpec;

/// Positions of the applicants that pass `filters`, ordered by `sort`.
///
/// The sort is stable, so applicants that compare equal keep their input order.
pub fn select(applicants: &[Applicant], filters: &FilterSet, sort: &SortSpec) -> Vec<usize> {
    let mut positions: Vec<usize> = applicants
        .iter()
        .enumerate()
        .filter(|(_, applicant)| filters.matches(applicant))
        .map(|(position, _)| position)
        .collect();

    positions.sort_by(|a, b| sort.compare(&applicants[*a], &applicants[*b]));
    positions
}

/// Filters then sorts, borrowing from the input collection.
pub fn apply<'a>(
    applicants: &'a [Applicant],
    filters: &FilterSet,
    sort: &SortSpec,
) -> Vec<&'a Applicant> {
    select(applicants, filters, sort)
        .into_iter()
        .map(|position| &applicants[position])
        .collect()
}

/// Single-slot memo of the last computed view, keyed by criteria and collection revision.
#[derive(Debug, Default)]
pub struct ViewMemo {
    slot: Mutex<Option<MemoEntry>>,
}

#[derive(Debug)]
struct MemoEntry {
    revision: u64,
    query: ApplicantQuery,
    positions: Arc<[usize]>,
}

impl ViewMemo {
    pub fn positions(
        &self,
        revision: u64,
        applicants: &[Applicant],
        query: &ApplicantQuery,
    ) -> Arc<[usize]> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = slot.as_ref() {
            if entry.revision == revision && entry.query == *query {
                debug!(revision, "reusing memoized applicant view");
                return Arc::clone(&entry.positions);
            }
        }

        let positions: Arc<[usize]> = select(applicants, &query.filters, &query.sort).into();
        *slot = Some(MemoEntry {
            revision,
            query: query.clone(),
            positions: Arc::clone(&positions),
        });
        positions
    }
}

//! Shortlist Manager — turns 1-based result-list positions into a named,
//! persisted shortlist.

use std::collections::HashSet;

use tracing::info;

use crate::errors::AppError;
use crate::models::Shortlist;
use crate::query::scoring::ScoredCandidate;
use crate::store::DataStore;

/// Saves positions from the current result list under `name`.
///
/// Positions are deduplicated with their given order preserved. Fails with
/// `EmptyResultList` before any query has run, and `PositionOutOfRange` if
/// any index falls outside `[1, len]` — in which case nothing is persisted.
/// An existing shortlist with the same name is overwritten.
pub fn save_shortlist(
    store: &mut dyn DataStore,
    results: &[ScoredCandidate],
    name: &str,
    positions: &[usize],
) -> Result<Shortlist, AppError> {
    if results.is_empty() {
        return Err(AppError::EmptyResultList);
    }

    let mut seen = HashSet::new();
    let mut candidate_ids = Vec::new();
    for &position in positions {
        if !seen.insert(position) {
            continue;
        }
        if position == 0 || position > results.len() {
            return Err(AppError::PositionOutOfRange {
                position,
                len: results.len(),
            });
        }
        candidate_ids.push(results[position - 1].candidate.id.clone());
    }

    let shortlist = Shortlist {
        name: name.to_string(),
        candidate_ids,
    };
    store.save_shortlist(shortlist.clone())?;
    info!(
        "Saved shortlist \"{}\" ({} candidates)",
        shortlist.name,
        shortlist.candidate_ids.len()
    );
    Ok(shortlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Candidate;
    use crate::query::criteria::{Criteria, DateWindow};
    use crate::query::scoring::score_candidate;
    use crate::store::{DataStore, MemoryStore};
    use chrono::NaiveDate;

    fn results(n: usize) -> Vec<ScoredCandidate> {
        let criteria = Criteria {
            skills: vec![],
            location: None,
            experience: None,
            window: DateWindow::next_days(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(), 45),
            limit: None,
        };
        (1..=n)
            .map(|i| {
                let c = Candidate {
                    id: format!("c-{i:03}"),
                    name: format!("Candidate {i}"),
                    skills: vec!["React".to_string()],
                    location: "Casablanca".to_string(),
                    experience_years: 1,
                    availability_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                };
                score_candidate(&c, &criteria)
            })
            .collect()
    }

    #[test]
    fn test_save_maps_positions_to_candidate_ids_in_order() {
        let mut store = MemoryStore::default();
        let saved = save_shortlist(&mut store, &results(4), "FE-Intern-A", &[1, 3]).unwrap();
        assert_eq!(saved.name, "FE-Intern-A");
        assert_eq!(saved.candidate_ids, vec!["c-001", "c-003"]);
        assert_eq!(store.shortlists().len(), 1);
    }

    #[test]
    fn test_save_against_empty_result_list_fails() {
        let mut store = MemoryStore::default();
        let err = save_shortlist(&mut store, &[], "A", &[1]).unwrap_err();
        assert!(matches!(err, AppError::EmptyResultList));
    }

    #[test]
    fn test_out_of_range_position_fails_and_persists_nothing() {
        let mut store = MemoryStore::default();
        let err = save_shortlist(&mut store, &results(4), "A", &[1, 9]).unwrap_err();
        assert!(matches!(
            err,
            AppError::PositionOutOfRange { position: 9, len: 4 }
        ));
        assert!(store.shortlists().is_empty());
    }

    #[test]
    fn test_position_zero_is_out_of_range() {
        let mut store = MemoryStore::default();
        let err = save_shortlist(&mut store, &results(4), "A", &[0]).unwrap_err();
        assert!(matches!(err, AppError::PositionOutOfRange { position: 0, .. }));
    }

    #[test]
    fn test_duplicate_positions_collapse_preserving_order() {
        let mut store = MemoryStore::default();
        let saved = save_shortlist(&mut store, &results(4), "A", &[3, 1, 3, 1]).unwrap();
        assert_eq!(saved.candidate_ids, vec!["c-003", "c-001"]);
    }

    #[test]
    fn test_save_twice_is_idempotent() {
        let mut store = MemoryStore::default();
        let first = save_shortlist(&mut store, &results(4), "A", &[1, 2]).unwrap();
        let second = save_shortlist(&mut store, &results(4), "A", &[1, 2]).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.shortlists().len(), 1);
    }

    #[test]
    fn test_same_name_overwrites() {
        let mut store = MemoryStore::default();
        save_shortlist(&mut store, &results(4), "A", &[1]).unwrap();
        save_shortlist(&mut store, &results(4), "A", &[2, 4]).unwrap();
        assert_eq!(store.shortlists().len(), 1);
        assert_eq!(store.shortlists()[0].candidate_ids, vec!["c-002", "c-004"]);
    }
}

//! Data store boundary — two read collections (candidates, jobs) and one
//! read/write collection (shortlists), loaded once at session start and
//! flushed synchronously on shortlist saves.

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::errors::AppError;
use crate::models::{Candidate, Job, Shortlist};

/// The session's view of persisted data. Reads are served from memory;
/// `save_shortlist` is the only write and must be durable before it returns.
pub trait DataStore {
    fn candidates(&self) -> &[Candidate];
    fn jobs(&self) -> &[Job];
    fn shortlists(&self) -> &[Shortlist];

    /// Persists a shortlist, overwriting any existing one with the same name
    /// (last-write-wins, no merge). On failure the previously persisted
    /// state must remain untouched.
    fn save_shortlist(&mut self, shortlist: Shortlist) -> Result<(), AppError>;

    fn shortlist(&self, name: &str) -> Option<&Shortlist> {
        self.shortlists().iter().find(|s| s.name == name)
    }

    fn candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates().iter().find(|c| c.id == id)
    }

    /// Case-insensitive job lookup by title — the command surface references
    /// jobs by title, not id.
    fn job_by_title(&self, title: &str) -> Option<&Job> {
        self.jobs()
            .iter()
            .find(|j| j.title.eq_ignore_ascii_case(title))
    }
}

/// Replaces or appends a shortlist in place, preserving insertion order for
/// everything else. Shared by both store implementations.
pub(crate) fn upsert_shortlist(lists: &mut Vec<Shortlist>, shortlist: Shortlist) {
    match lists.iter_mut().find(|s| s.name == shortlist.name) {
        Some(existing) => *existing = shortlist,
        None => lists.push(shortlist),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_appends_new_name() {
        let mut lists = vec![];
        upsert_shortlist(
            &mut lists,
            Shortlist {
                name: "A".to_string(),
                candidate_ids: vec!["c-001".to_string()],
            },
        );
        assert_eq!(lists.len(), 1);
    }

    #[test]
    fn test_upsert_overwrites_same_name_last_write_wins() {
        let mut lists = vec![Shortlist {
            name: "A".to_string(),
            candidate_ids: vec!["c-001".to_string()],
        }];
        upsert_shortlist(
            &mut lists,
            Shortlist {
                name: "A".to_string(),
                candidate_ids: vec!["c-002".to_string(), "c-003".to_string()],
            },
        );
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].candidate_ids, vec!["c-002", "c-003"]);
    }
}

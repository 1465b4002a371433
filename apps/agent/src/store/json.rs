//! Flat-file JSON store: `candidates.json`, `jobs.json`, `shortlists.json`
//! under a single data directory. Candidates and jobs are required at
//! startup; the shortlists file is created on the first save.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::models::{Candidate, Job, Shortlist};
use crate::store::{upsert_shortlist, DataStore};

const CANDIDATES_FILE: &str = "candidates.json";
const JOBS_FILE: &str = "jobs.json";
const SHORTLISTS_FILE: &str = "shortlists.json";

#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    candidates: Vec<Candidate>,
    jobs: Vec<Job>,
    shortlists: Vec<Shortlist>,
}

impl JsonStore {
    /// Reads all three collections. A missing or corrupt candidates/jobs
    /// file is fatal; a missing shortlists file means no shortlists yet.
    pub fn open(data_dir: &Path) -> Result<Self, AppError> {
        let candidates: Vec<Candidate> = read_json(&data_dir.join(CANDIDATES_FILE))?;
        let jobs: Vec<Job> = read_json(&data_dir.join(JOBS_FILE))?;

        let shortlists_path = data_dir.join(SHORTLISTS_FILE);
        let shortlists: Vec<Shortlist> = if shortlists_path.exists() {
            read_json(&shortlists_path)?
        } else {
            Vec::new()
        };

        info!(
            "Data store loaded: {} candidates, {} jobs, {} shortlists from {}",
            candidates.len(),
            jobs.len(),
            shortlists.len(),
            data_dir.display()
        );

        Ok(JsonStore {
            data_dir: data_dir.to_path_buf(),
            candidates,
            jobs,
            shortlists,
        })
    }

    /// Writes the shortlists file via a temp file + rename so a failed write
    /// never clobbers the previously persisted state.
    fn flush_shortlists(&self, shortlists: &[Shortlist]) -> Result<(), AppError> {
        let path = self.data_dir.join(SHORTLISTS_FILE);
        let tmp = self.data_dir.join(format!("{SHORTLISTS_FILE}.tmp"));
        let body = serde_json::to_string_pretty(shortlists)?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl DataStore for JsonStore {
    fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    fn shortlists(&self) -> &[Shortlist] {
        &self.shortlists
    }

    fn save_shortlist(&mut self, shortlist: Shortlist) -> Result<(), AppError> {
        // Flush first; only adopt the new state in memory once it is durable.
        let mut next = self.shortlists.clone();
        upsert_shortlist(&mut next, shortlist.clone());
        self.flush_shortlists(&next)?;
        self.shortlists = next;
        info!(
            "Shortlist \"{}\" persisted with {} candidates",
            shortlist.name,
            shortlist.candidate_ids.len()
        );
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn seed_data_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CANDIDATES_FILE),
            r#"[{
                "id": "c-001",
                "name": "Amina El Fassi",
                "skills": ["React"],
                "location": "Casablanca",
                "experienceYears": 1,
                "availabilityDate": "2026-09-01"
            }]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(JOBS_FILE),
            r#"[{"id": "j-fe-01", "title": "Frontend Intern", "requiredSkills": ["React"]}]"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_open_loads_candidates_and_jobs() {
        let dir = seed_data_dir();
        let store = JsonStore::open(dir.path()).unwrap();
        assert_eq!(store.candidates().len(), 1);
        assert_eq!(store.candidates()[0].id, "c-001");
        assert_eq!(
            store.candidates()[0].availability_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
        assert_eq!(store.jobs()[0].title, "Frontend Intern");
    }

    #[test]
    fn test_missing_shortlists_file_means_empty() {
        let dir = seed_data_dir();
        let store = JsonStore::open(dir.path()).unwrap();
        assert!(store.shortlists().is_empty());
    }

    #[test]
    fn test_missing_candidates_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = JsonStore::open(dir.path()).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_corrupt_jobs_file_is_fatal() {
        let dir = seed_data_dir();
        fs::write(dir.path().join(JOBS_FILE), "not json").unwrap();
        let err = JsonStore::open(dir.path()).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_save_shortlist_persists_across_reopen() {
        let dir = seed_data_dir();
        let mut store = JsonStore::open(dir.path()).unwrap();
        store
            .save_shortlist(Shortlist {
                name: "FE-Intern-A".to_string(),
                candidate_ids: vec!["c-001".to_string()],
            })
            .unwrap();

        let reopened = JsonStore::open(dir.path()).unwrap();
        assert_eq!(reopened.shortlists().len(), 1);
        assert_eq!(reopened.shortlists()[0].name, "FE-Intern-A");
    }

    #[test]
    fn test_save_is_idempotent_byte_for_byte() {
        let dir = seed_data_dir();
        let list = Shortlist {
            name: "FE-Intern-A".to_string(),
            candidate_ids: vec!["c-001".to_string()],
        };

        let mut store = JsonStore::open(dir.path()).unwrap();
        store.save_shortlist(list.clone()).unwrap();
        let first = fs::read(dir.path().join(SHORTLISTS_FILE)).unwrap();

        store.save_shortlist(list).unwrap();
        let second = fs::read(dir.path().join(SHORTLISTS_FILE)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_overwrites_same_name() {
        let dir = seed_data_dir();
        let mut store = JsonStore::open(dir.path()).unwrap();
        store
            .save_shortlist(Shortlist {
                name: "A".to_string(),
                candidate_ids: vec!["c-001".to_string()],
            })
            .unwrap();
        store
            .save_shortlist(Shortlist {
                name: "A".to_string(),
                candidate_ids: vec!["c-002".to_string()],
            })
            .unwrap();

        let reopened = JsonStore::open(dir.path()).unwrap();
        assert_eq!(reopened.shortlists().len(), 1);
        assert_eq!(reopened.shortlists()[0].candidate_ids, vec!["c-002"]);
    }
}

#![allow(dead_code)]

//! In-memory store used by unit tests across the crate — same contract as
//! `JsonStore`, no filesystem.

use crate::errors::AppError;
use crate::models::{Candidate, Job, Shortlist};
use crate::store::{upsert_shortlist, DataStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub candidates: Vec<Candidate>,
    pub jobs: Vec<Job>,
    pub shortlists: Vec<Shortlist>,
}

impl MemoryStore {
    pub fn new(candidates: Vec<Candidate>, jobs: Vec<Job>) -> Self {
        MemoryStore {
            candidates,
            jobs,
            shortlists: Vec::new(),
        }
    }
}

impl DataStore for MemoryStore {
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
        upsert_shortlist(&mut self.shortlists, shortlist);
        Ok(())
    }
}

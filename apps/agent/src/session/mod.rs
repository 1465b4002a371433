//! Session state and command dispatch.
//!
//! A session owns the result list of the most recent find and the current
//! draft state. One command at a time, fully synchronous; every recoverable
//! error leaves the session state exactly as it was.

pub mod analytics;
pub mod commands;
pub mod shortlist;

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::errors::AppError;
use crate::models::Candidate;
use crate::outreach::draft::{DraftState, EmailDraft};
use crate::outreach::tone::Tone;
use crate::query::criteria::{self, Vocabulary};
use crate::query::scoring::{self, ScoredCandidate};
use crate::session::commands::{Command, DraftTarget};
use crate::store::DataStore;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

pub struct Session {
    /// Ranked output of the most recent find; overwritten by each new query.
    result_list: Vec<ScoredCandidate>,
    draft: DraftState,
    /// Fixed at session start so criteria windows are stable and testable.
    today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Session {
            result_list: Vec::new(),
            draft: DraftState::Idle,
            today,
        }
    }

    /// Parses and executes one line of input.
    pub fn handle(&mut self, input: &str, store: &mut dyn DataStore) -> Result<Outcome, AppError> {
        let command = commands::parse(input)?;
        debug!("Dispatching {command:?}");
        match command {
            Command::Quit => Ok(Outcome::Quit),
            Command::Find(text) => self.find(&text, store).map(Outcome::Reply),
            Command::Save { positions, name } => {
                let saved =
                    shortlist::save_shortlist(store, &self.result_list, &name, &positions)?;
                Ok(Outcome::Reply(format!(
                    "Shortlist \"{}\" saved with candidates: {}",
                    saved.name,
                    saved.candidate_ids.join(", ")
                )))
            }
            Command::Draft {
                target,
                job_title,
                tone,
            } => self
                .start_draft(&target, &job_title, tone.as_deref(), store)
                .map(Outcome::Reply),
            Command::SetSubject { text, re_preview } => {
                self.draft.set_subject(&text)?;
                self.after_edit("Subject updated", re_preview).map(Outcome::Reply)
            }
            Command::SetBody { text, re_preview } => {
                self.draft.set_body(&text)?;
                self.after_edit("Body updated", re_preview).map(Outcome::Reply)
            }
            Command::Preview => self.draft.preview().map(Outcome::Reply),
            Command::Analytics => Ok(Outcome::Reply(analytics::report(store).render())),
        }
    }

    /// Runs the query pipeline: extract criteria, rank, store the result
    /// list, render the listing with per-candidate score reasons.
    fn find(&mut self, text: &str, store: &dyn DataStore) -> Result<String, AppError> {
        let vocab = Vocabulary::from_records(store.candidates(), store.jobs());
        let criteria = criteria::extract(text, &vocab, self.today)?;
        let ranked = scoring::rank(store.candidates(), &criteria);

        let mut out = String::new();
        if ranked.is_empty() {
            out.push_str("No matches found.");
        } else {
            for (i, scored) in ranked.iter().enumerate() {
                out.push_str(&format!(
                    "#{}: {}\n   Why: {} -> score {}\n",
                    i + 1,
                    scored.candidate.summary(),
                    scored.breakdown.reasons(&scored.candidate, &criteria),
                    scored.score
                ));
            }
            out.push_str("Tip: Save #1 #3 as \"Name-Here\"");
        }

        self.result_list = ranked;
        Ok(out)
    }

    /// Resolves the draft target and job reference, composes a fresh draft,
    /// and immediately renders its preview. Resolution of candidate ids
    /// happens here — at draft time — so shortlists tolerate later data
    /// edits until they are actually used.
    fn start_draft(
        &mut self,
        target: &DraftTarget,
        job_title: &str,
        tone: Option<&str>,
        store: &dyn DataStore,
    ) -> Result<String, AppError> {
        let job = store
            .job_by_title(job_title)
            .ok_or_else(|| AppError::UnknownJob(job_title.to_string()))?;

        let (label, recipients) = match target {
            DraftTarget::Shortlist(name) => {
                let shortlist = store
                    .shortlist(name)
                    .ok_or_else(|| AppError::UnknownShortlist(name.clone()))?;
                let mut recipients = Vec::with_capacity(shortlist.candidate_ids.len());
                for id in &shortlist.candidate_ids {
                    let candidate =
                        store.candidate(id).ok_or_else(|| AppError::DanglingCandidate {
                            shortlist: name.clone(),
                            candidate_id: id.clone(),
                        })?;
                    recipients.push(candidate.clone());
                }
                (name.clone(), recipients)
            }
            DraftTarget::Positions(positions) => (
                "current results".to_string(),
                self.recipients_at(positions)?,
            ),
        };

        let tone = Tone::resolve(tone, job.tone.as_deref());
        debug!(
            "Drafting for \"{label}\" / job \"{}\" in {tone} tone ({} recipients)",
            job.title,
            recipients.len()
        );
        self.draft
            .start(EmailDraft::compose(&label, &recipients, job, tone));
        let rendered = self.draft.preview()?;
        Ok(format!(
            "{rendered}\nEdit with: Change the subject to \"New subject\" and re-preview"
        ))
    }

    /// Maps 1-based result-list positions to candidates, deduplicated in
    /// given order. Same bounds rules as saving a shortlist.
    fn recipients_at(&self, positions: &[usize]) -> Result<Vec<Candidate>, AppError> {
        if self.result_list.is_empty() {
            return Err(AppError::EmptyResultList);
        }
        let mut seen = HashSet::new();
        let mut recipients = Vec::new();
        for &position in positions {
            if !seen.insert(position) {
                continue;
            }
            if position == 0 || position > self.result_list.len() {
                return Err(AppError::PositionOutOfRange {
                    position,
                    len: self.result_list.len(),
                });
            }
            recipients.push(self.result_list[position - 1].candidate.clone());
        }
        Ok(recipients)
    }

    fn after_edit(&mut self, what: &str, re_preview: bool) -> Result<String, AppError> {
        if re_preview {
            self.draft.preview()
        } else {
            Ok(format!("{what}. Type 'preview' to see the result."))
        }
    }
}

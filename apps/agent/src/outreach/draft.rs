#![allow(dead_code)]

//! Draft Session state machine: `Idle → Drafted → Previewed`.
//!
//! The state is an explicit tagged value threaded through the session — not
//! a pile of mutable globals — so each transition is testable in isolation.
//! Any edit drops a `Previewed` draft back to `Drafted`: the draft is only
//! "current" again after a fresh preview. Re-drafting discards all unsaved
//! edits to the previous draft; that loss is deliberate.

use crate::errors::AppError;
use crate::models::{Candidate, Job};
use crate::outreach::template;
use crate::outreach::tone::Tone;

pub const PREVIEW_BEGIN: &str = "----- EMAIL PREVIEW BEGIN -----";
pub const PREVIEW_END: &str = "----- EMAIL PREVIEW END -----";

/// One outreach email being built. Session-only — never persisted, discarded
/// when the session ends or a new draft starts.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    pub shortlist: String,
    pub job_id: String,
    pub tone: Tone,
}

impl EmailDraft {
    /// Builds a fresh draft from resolved recipients and a job.
    pub fn compose(shortlist_name: &str, recipients: &[Candidate], job: &Job, tone: Tone) -> Self {
        let (subject, body) = template::compose(recipients, job, tone);
        EmailDraft {
            subject,
            body,
            shortlist: shortlist_name.to_string(),
            job_id: job.id.clone(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DraftState {
    #[default]
    Idle,
    Drafted(EmailDraft),
    Previewed(EmailDraft),
}

impl DraftState {
    /// Starts (or restarts) a draft. Always lands in `Drafted`, discarding
    /// whatever was there before.
    pub fn start(&mut self, draft: EmailDraft) {
        *self = DraftState::Drafted(draft);
    }

    /// Replaces the subject. Valid in `Drafted` or `Previewed`; lands back in
    /// `Drafted` so the edit forces a re-preview.
    pub fn set_subject(&mut self, text: &str) -> Result<(), AppError> {
        self.edit(|draft| draft.subject = text.to_string())
    }

    /// Replaces the body. Same transition rules as `set_subject`.
    pub fn set_body(&mut self, text: &str) -> Result<(), AppError> {
        self.edit(|draft| draft.body = text.to_string())
    }

    fn edit(&mut self, apply: impl FnOnce(&mut EmailDraft)) -> Result<(), AppError> {
        match std::mem::take(self) {
            DraftState::Idle => Err(AppError::NothingToPreview),
            DraftState::Drafted(mut draft) | DraftState::Previewed(mut draft) => {
                apply(&mut draft);
                *self = DraftState::Drafted(draft);
                Ok(())
            }
        }
    }

    /// Renders the subject and HTML body between the literal preview
    /// markers and transitions to `Previewed`. Re-previewing without edits
    /// yields identical output.
    pub fn preview(&mut self) -> Result<String, AppError> {
        match std::mem::take(self) {
            DraftState::Idle => Err(AppError::NothingToPreview),
            DraftState::Drafted(draft) | DraftState::Previewed(draft) => {
                let html = template::render_html(&draft.subject, &draft.body);
                let rendered = format!(
                    "Subject: {}\n{}\n{}\n{}",
                    draft.subject, PREVIEW_BEGIN, html, PREVIEW_END
                );
                *self = DraftState::Previewed(draft);
                Ok(rendered)
            }
        }
    }

    pub fn current(&self) -> Option<&EmailDraft> {
        match self {
            DraftState::Idle => None,
            DraftState::Drafted(draft) | DraftState::Previewed(draft) => Some(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job() -> Job {
        Job {
            id: "j-fe-01".to_string(),
            title: "Frontend Intern".to_string(),
            required_skills: vec!["React".to_string()],
            location: None,
            jd_snippet: None,
            tone: None,
        }
    }

    fn recipient() -> Candidate {
        Candidate {
            id: "c-001".to_string(),
            name: "Amina El Fassi".to_string(),
            skills: vec!["React".to_string()],
            location: "Casablanca".to_string(),
            experience_years: 1,
            availability_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        }
    }

    fn drafted() -> DraftState {
        let mut state = DraftState::Idle;
        state.start(EmailDraft::compose(
            "FE-Intern-A",
            &[recipient()],
            &job(),
            Tone::Friendly,
        ));
        state
    }

    #[test]
    fn test_preview_from_idle_fails() {
        let mut state = DraftState::Idle;
        assert!(matches!(
            state.preview().unwrap_err(),
            AppError::NothingToPreview
        ));
        assert_eq!(state, DraftState::Idle);
    }

    #[test]
    fn test_edit_from_idle_fails() {
        let mut state = DraftState::Idle;
        assert!(state.set_subject("New subject").is_err());
        assert!(state.set_body("New body").is_err());
    }

    #[test]
    fn test_draft_then_preview_transitions_to_previewed() {
        let mut state = drafted();
        let rendered = state.preview().unwrap();
        assert!(matches!(state, DraftState::Previewed(_)));
        assert!(rendered.contains(PREVIEW_BEGIN));
        assert!(rendered.contains(PREVIEW_END));
        assert!(rendered.starts_with("Subject: Amina,"));
    }

    #[test]
    fn test_edit_after_preview_returns_to_drafted() {
        let mut state = drafted();
        state.preview().unwrap();
        state.set_subject("Quick chat about a Frontend Intern role?").unwrap();
        assert!(matches!(state, DraftState::Drafted(_)));
        assert_eq!(
            state.current().unwrap().subject,
            "Quick chat about a Frontend Intern role?"
        );
    }

    #[test]
    fn test_preview_twice_without_edits_is_identical() {
        let mut state = drafted();
        let first = state.preview().unwrap();
        let second = state.preview().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_redraft_discards_previous_edits() {
        let mut state = drafted();
        state.set_subject("Edited subject").unwrap();
        state.start(EmailDraft::compose(
            "FE-Intern-A",
            &[recipient()],
            &job(),
            Tone::Formal,
        ));
        let draft = state.current().unwrap();
        assert_ne!(draft.subject, "Edited subject");
        assert_eq!(draft.tone, Tone::Formal);
    }

    #[test]
    fn test_body_edit_mutates_in_place() {
        let mut state = drafted();
        state.set_body("Short and sweet.").unwrap();
        assert_eq!(state.current().unwrap().body, "Short and sweet.");
        assert!(matches!(state, DraftState::Drafted(_)));
    }
}

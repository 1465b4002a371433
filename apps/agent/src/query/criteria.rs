//! Criteria Extractor — turns a free-text query into a structured filter.
//!
//! Extraction is a pure function of (text, vocabulary, today): the skill and
//! location vocabularies are passed in explicitly, built from the loaded
//! records, never held as ambient global state. Best-effort and
//! order-independent — any subset of tokens may be absent and defaults per
//! the data model apply.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::errors::AppError;
use crate::models::{Candidate, Job};

/// Availability window applied when the query says nothing about dates.
pub const DEFAULT_WINDOW_DAYS: u64 = 45;

/// Inclusive experience range in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpRange {
    pub min: u32,
    pub max: u32,
}

impl ExpRange {
    /// Default derivation for a single stated number: center ± 1,
    /// saturating at zero.
    pub fn around(center: u32) -> Self {
        ExpRange {
            min: center.saturating_sub(1),
            max: center + 1,
        }
    }

    pub fn contains(&self, years: u32) -> bool {
        (self.min..=self.max).contains(&years)
    }

    /// Midpoint used for rank tie-breaking.
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

/// Inclusive calendar window for availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn next_days(today: NaiveDate, days: u64) -> Self {
        DateWindow {
            start: today,
            end: today.checked_add_days(Days::new(days)).unwrap_or(today),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Structured filter derived from a free-text query. Transient — rebuilt for
/// every find command.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Required skills, deduplicated, canonical casing from the vocabulary.
    pub skills: Vec<String>,
    /// Exact-match location filter (canonical casing), if one was recognized.
    pub location: Option<String>,
    /// Experience bounds. `None` means unconstrained — and no point awarded.
    pub experience: Option<ExpRange>,
    pub window: DateWindow,
    /// Desired result count; `None` means all candidates.
    pub limit: Option<usize>,
}

/// The known-token universe the extractor matches against: the union of all
/// candidate skills, all candidate locations, and job titles with their
/// required skills (for role-word derivation).
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    /// (job title, required skills) — lets "frontend intern" queries pick up
    /// the job's skill list when no explicit skill token appears.
    pub roles: Vec<(String, Vec<String>)>,
}

impl Vocabulary {
    pub fn from_records(candidates: &[Candidate], jobs: &[Job]) -> Self {
        let mut skills: Vec<String> = Vec::new();
        let mut locations: Vec<String> = Vec::new();

        for c in candidates {
            for s in &c.skills {
                if !skills.iter().any(|k: &String| k.eq_ignore_ascii_case(s)) {
                    skills.push(s.clone());
                }
            }
            if !locations
                .iter()
                .any(|l: &String| l.eq_ignore_ascii_case(&c.location))
            {
                locations.push(c.location.clone());
            }
        }

        let roles = jobs
            .iter()
            .map(|j| (j.title.clone(), j.required_skills.clone()))
            .collect();

        Vocabulary {
            skills,
            locations,
            roles,
        }
    }
}

/// Extracts a structured `Criteria` from free text.
///
/// Fails with `AppError::Criteria` only when neither a skill (explicit or
/// role-derived) nor a location could be identified — a query that vague
/// cannot filter anything.
pub fn extract(text: &str, vocab: &Vocabulary, today: NaiveDate) -> Result<Criteria, AppError> {
    let lower = text.to_lowercase();
    let tokens: HashSet<&str> = lower
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#' || c == '.'))
        .filter(|t| !t.is_empty())
        .collect();

    let mut skills = match_skills(&lower, &tokens, &vocab.skills);
    if skills.is_empty() {
        skills = derive_skills_from_role(&lower, &vocab.roles);
    }

    let location = vocab
        .locations
        .iter()
        .find(|loc| lower.contains(&loc.to_lowercase()))
        .cloned();

    if skills.is_empty() && location.is_none() {
        return Err(AppError::Criteria(
            "no known skill, role, or location found — try e.g. \
             'find React interns in Casablanca'"
                .to_string(),
        ));
    }

    Ok(Criteria {
        skills,
        location,
        experience: parse_experience(&lower),
        window: parse_window(&lower, today),
        limit: parse_limit(&lower),
    })
}

/// Case-insensitive match of vocabulary skills against the query: exact
/// token hit, or substring hit for multi-character skill names (so "next.js"
/// matches inside "next.js/react stack" but "Go" cannot fire inside "good").
fn match_skills(lower: &str, tokens: &HashSet<&str>, known: &[String]) -> Vec<String> {
    let mut found = Vec::new();
    for skill in known {
        let skill_lower = skill.to_lowercase();
        let hit = tokens.contains(skill_lower.as_str())
            || (skill_lower.len() > 3 && lower.contains(&skill_lower));
        if hit && !found.iter().any(|f: &String| f.eq_ignore_ascii_case(skill)) {
            found.push(skill.clone());
        }
    }
    found
}

/// When no skill token matched, a role word that appears in a known job
/// title adopts that job's required skills ("frontend interns" picks up the
/// Frontend Intern requirements).
fn derive_skills_from_role(lower: &str, roles: &[(String, Vec<String>)]) -> Vec<String> {
    for (title, required) in roles {
        let title_lower = title.to_lowercase();
        let title_hit = lower.contains(&title_lower)
            || title_lower
                .split_whitespace()
                .any(|word| word.len() > 3 && lower.contains(word));
        if title_hit {
            return required.clone();
        }
    }
    Vec::new()
}

/// `a-b years` / `a to b years` set an explicit inclusive range; a single
/// `N years` derives the default ± 1 range around N.
fn parse_experience(lower: &str) -> Option<ExpRange> {
    let range_re = Regex::new(r"(\d+)\s*(?:[-–—]|to\s)\s*(\d+)\s*(?:years?|yrs?|y)\b")
        .expect("valid regex");
    if let Some(caps) = range_re.captures(lower) {
        let min: u32 = caps[1].parse().ok()?;
        let max: u32 = caps[2].parse().ok()?;
        return Some(ExpRange {
            min: min.min(max),
            max: min.max(max),
        });
    }

    let single_re = Regex::new(r"(\d+)\s*(?:years?|yrs?|y)\b").expect("valid regex");
    single_re
        .captures(lower)
        .and_then(|caps| caps[1].parse().ok())
        .map(ExpRange::around)
}

/// `this month` → 30 days, `next month` → 45 days, `next N days` /
/// `available in N days` → N days, otherwise the default window.
fn parse_window(lower: &str, today: NaiveDate) -> DateWindow {
    let days_re =
        Regex::new(r"(?:available\s*(?:in\s*)?|next\s+|within\s+)(\d+)\s*days?").expect("valid regex");
    if let Some(caps) = days_re.captures(lower) {
        if let Ok(days) = caps[1].parse::<u64>() {
            return DateWindow::next_days(today, days);
        }
    }
    if lower.contains("this month") {
        return DateWindow::next_days(today, 30);
    }
    if lower.contains("next month") {
        return DateWindow::next_days(today, 45);
    }
    DateWindow::next_days(today, DEFAULT_WINDOW_DAYS)
}

/// `top K` / `first K` anywhere, or a bare number right after the find verb.
fn parse_limit(lower: &str) -> Option<usize> {
    let top_re = Regex::new(r"\b(?:top|first)\s+(\d+)\b").expect("valid regex");
    if let Some(caps) = top_re.captures(lower) {
        return caps[1].parse().ok();
    }
    let leading_re =
        Regex::new(r"^\s*(?:find|search(?:\s+for)?|look\s+for)\s+(\d+)\b").expect("valid regex");
    leading_re.captures(lower).and_then(|caps| caps[1].parse().ok())
}
